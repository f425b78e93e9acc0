use crate::config::LauncherConfig;
use crate::error::{LauncherError, LauncherErrorExt};
use crate::invocation::{Invocation, exit_code_for};
use crate::platform::Platform;
use crate::runner::{RunnerFlags, runner_invocation};
use crate::selection::TestSelection;
use crate::venv::{Provisioner, Venv, VenvTool};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Everything the launcher will do, composed up front and without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub venv: Venv,
    pub runner: VenvTool,
    pub provisioner: Provisioner,
    pub tests: PathBuf,
    pub command: Invocation,
}

impl Plan {
    /// Setup commands in execution order.
    #[must_use]
    pub fn setup_steps(&self) -> Vec<(&'static str, Invocation)> {
        self.provisioner.steps(&self.venv)
    }
}

/// Per-run switches coming from the command line and environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub selector: Option<String>,
    pub interactive: bool,
}

/// Provisions the venv and drives the cram runner for one root directory.
#[derive(Debug, Clone)]
pub struct Launcher {
    root: PathBuf,
    config: LauncherConfig,
    platform: Platform,
}

impl Launcher {
    pub fn new(root: impl Into<PathBuf>, config: LauncherConfig, platform: Platform) -> Self {
        Self { root: root.into(), config, platform }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Composes the venv, setup steps and the runner command.
    ///
    /// The runner path goes through the tool allow-list like any other name,
    /// and only `prysk` may act as the runner.
    ///
    /// # Errors
    /// Returns [`LauncherError::ToolNotAllowed`] if the configured runner
    /// package is not `prysk`.
    pub fn plan(&self, options: &RunOptions) -> Result<Plan, LauncherError> {
        let venv = Venv::new(self.config.venv_path(&self.root), self.platform);
        let runner = self
            .config
            .runner
            .package
            .parse::<VenvTool>()
            .context("resolving the configured runner")?;
        if runner != VenvTool::Prysk {
            return Err(LauncherError::ToolNotAllowed {
                tool: self.config.runner.package.clone(),
                context: Some("only prysk can run cram tests".into()),
            });
        }

        let selection =
            TestSelection::new(self.config.tests_path(&self.root), options.selector.as_deref());
        let tests = selection.resolve(self.platform);
        let flags = RunnerFlags::new(&self.config.runner.shell, options.interactive, self.platform);
        let command = runner_invocation(&venv.bin(runner), &flags, &tests);

        let provisioner = Provisioner::new(
            &self.config.python,
            &self.config.runner.package,
            &self.config.runner.version,
        );

        Ok(Plan { venv, runner, provisioner, tests, command })
    }

    /// Provisions the venv, or with `skip_setup` only checks that the runner is installed.
    ///
    /// # Errors
    /// Returns an error if a setup step fails, or the runner is missing when setup is skipped.
    pub fn prepare(&self, plan: &Plan, skip_setup: bool) -> Result<(), LauncherError> {
        if skip_setup {
            plan.venv.ensure_installed(plan.runner).map(drop)
        } else {
            plan.venv.provision(&plan.provisioner)
        }
    }

    /// Runs the composed runner command and returns the launcher exit code.
    ///
    /// A failing test run is not an error: it yields `Ok(1)`.
    ///
    /// # Errors
    /// Returns [`LauncherError::Spawn`] if the runner cannot be started.
    pub fn run(&self, plan: &Plan) -> Result<u8, LauncherError> {
        info!(tests = %plan.tests.display(), "Starting cram runner");
        let status = plan.command.run().context("starting the cram runner")?;
        let code = exit_code_for(status);
        if code != 0 {
            warn!(status = ?status.code(), "Cram runner reported failures");
        }
        Ok(code)
    }

    /// [`Launcher::prepare`] followed by [`Launcher::run`].
    ///
    /// # Errors
    /// See [`Launcher::prepare`] and [`Launcher::run`].
    pub fn execute(&self, plan: &Plan, skip_setup: bool) -> Result<u8, LauncherError> {
        self.prepare(plan, skip_setup)?;
        self.run(plan)
    }
}
