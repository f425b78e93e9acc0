use crate::error::{LauncherError, LauncherErrorExt};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment prefix for overrides, e.g. `CRAM__RUNNER__VERSION=0.16.0`.
pub const ENV_PREFIX: &str = "CRAM";

/// Config file looked up in the root when no explicit file is given.
pub const DEFAULT_CONFIG_FILE: &str = "cram.toml";

/// Launcher settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Directory name of the venv, relative to the root.
    pub venv_name: String,
    /// Interpreter used to create the venv.
    pub python: String,
    /// Tests directory, relative to the root.
    pub tests_dir: PathBuf,
    pub runner: RunnerConfig,
}

/// The pinned cram runner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub package: String,
    pub version: String,
    pub shell: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            venv_name: ".cram_env".to_owned(),
            python: "python3".to_owned(),
            tests_dir: PathBuf::from("tests"),
            runner: RunnerConfig::default(),
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { package: "prysk".to_owned(), version: "0.15.2".to_owned(), shell: "bash".to_owned() }
    }
}

impl LauncherConfig {
    /// Loads settings in layers: defaults, then the TOML file, then `CRAM__*` variables.
    ///
    /// An explicit `path` must exist; otherwise `cram.toml` under `root` is used when present.
    ///
    /// # Errors
    /// Returns [`LauncherError::Config`] if the file is missing (when explicit),
    /// malformed, or an override does not match the expected type.
    pub fn load(root: &Path, path: Option<&Path>) -> Result<Self, LauncherError> {
        let (file, required) = path.map_or_else(
            || (root.join(DEFAULT_CONFIG_FILE), false),
            |p| (p.to_path_buf(), true),
        );

        info!(path = %file.display(), required, "Loading launcher config");

        Config::builder()
            .add_source(File::from(file.as_path()).format(FileFormat::Toml).required(required))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .context("Failed to build config")?
            .try_deserialize::<Self>()
            .context("Failed to deserialize config")
    }

    #[must_use]
    pub fn venv_path(&self, root: &Path) -> PathBuf {
        root.join(&self.venv_name)
    }

    #[must_use]
    pub fn tests_path(&self, root: &Path) -> PathBuf {
        root.join(&self.tests_dir)
    }
}
