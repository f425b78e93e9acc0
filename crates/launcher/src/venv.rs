use crate::error::{LauncherError, LauncherErrorExt};
use crate::invocation::Invocation;
use crate::platform::Platform;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Executables the launcher may resolve inside the venv.
///
/// This is the only way to turn a tool name into a venv path; anything not
/// listed here is rejected before a process is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VenvTool {
    Python3,
    Pip,
    Prysk,
}

impl VenvTool {
    pub const ALL: [Self; 3] = [Self::Python3, Self::Pip, Self::Prysk];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Python3 => "python3",
            Self::Pip => "pip",
            Self::Prysk => "prysk",
        }
    }
}

impl FromStr for VenvTool {
    type Err = LauncherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| LauncherError::ToolNotAllowed { tool: s.to_owned(), context: None })
    }
}

impl fmt::Display for VenvTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An isolated Python environment rooted at a fixed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venv {
    path: PathBuf,
    platform: Platform,
}

impl Venv {
    pub fn new(path: impl Into<PathBuf>, platform: Platform) -> Self {
        Self { path: path.into(), platform }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Path of an allow-listed tool inside this venv.
    #[must_use]
    pub fn bin(&self, tool: VenvTool) -> PathBuf {
        self.path
            .join(self.platform.venv_bin_dir())
            .join(format!("{}{}", tool.name(), self.platform.exe_suffix()))
    }

    /// Resolves a tool by name.
    ///
    /// # Errors
    /// Returns [`LauncherError::ToolNotAllowed`] for names outside [`VenvTool::ALL`].
    pub fn tool_path(&self, name: &str) -> Result<PathBuf, LauncherError> {
        let tool = name.parse::<VenvTool>()?;
        Ok(self.bin(tool))
    }

    /// Creates the venv, upgrades pip and installs the pinned runner.
    ///
    /// Steps run one after another and each must succeed before the next starts.
    ///
    /// # Errors
    /// Returns [`LauncherError::Spawn`] if a step cannot be started and
    /// [`LauncherError::StepFailed`] if it exits unsuccessfully.
    pub fn provision(&self, provisioner: &Provisioner) -> Result<(), LauncherError> {
        for (step, invocation) in provisioner.steps(self) {
            info!(step, venv = %self.path.display(), "Provisioning");
            let status = invocation.run().context(format!("running setup step '{step}'"))?;
            if !status.success() {
                return Err(LauncherError::StepFailed {
                    step: step.into(),
                    code: status.code(),
                    context: Some(invocation.to_string().into()),
                });
            }
        }
        debug!(venv = %self.path.display(), "Venv ready");
        Ok(())
    }

    /// Confirms that a tool already exists in the venv.
    ///
    /// # Errors
    /// Returns [`LauncherError::MissingTool`] if the executable is absent.
    pub fn ensure_installed(&self, tool: VenvTool) -> Result<PathBuf, LauncherError> {
        let path = self.bin(tool);
        if path.is_file() {
            Ok(path)
        } else {
            Err(LauncherError::MissingTool {
                path,
                context: Some("run without --skip-setup to provision the venv".into()),
            })
        }
    }
}

/// Knows which interpreter bootstraps the venv and which runner to pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provisioner {
    python: String,
    requirement: String,
}

impl Provisioner {
    pub fn new(python: impl Into<String>, package: &str, version: &str) -> Self {
        Self { python: python.into(), requirement: format!("{package}=={version}") }
    }

    /// The pip requirement specifier, e.g. `prysk==0.15.2`.
    #[must_use]
    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    /// The ordered setup commands for `venv`.
    #[must_use]
    pub fn steps(&self, venv: &Venv) -> Vec<(&'static str, Invocation)> {
        vec![
            (
                "create venv",
                Invocation::new(&self.python).args(["-m", "venv"]).arg(venv.path()).quiet(),
            ),
            (
                "upgrade pip",
                Invocation::new(venv.bin(VenvTool::Python3))
                    .args(["-m", "pip", "install", "--quiet", "--upgrade", "pip"])
                    .quiet(),
            ),
            (
                "install runner",
                Invocation::new(venv.bin(VenvTool::Pip))
                    .arg("install")
                    .arg(&self.requirement)
                    .quiet(),
            ),
        ]
    }
}
