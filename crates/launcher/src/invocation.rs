use crate::error::LauncherError;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// Variables exported to every child the launcher spawns.
///
/// Package managers inside the venv must not stall or clutter output with
/// update notices.
pub const CHILD_ENV: &[(&str, &str)] = &[("NO_UPDATE_NOTIFIER", "1")];

/// How a child's standard output is wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdioMode {
    /// Child shares the launcher's stdin, stdout and stderr.
    #[default]
    Inherit,
    /// Child stdout is discarded; stderr is still shown.
    Quiet,
}

/// A fully composed external command: program, ordered arguments and env.
///
/// The program is executed directly, never through an intermediate shell, so
/// arguments reach it exactly as composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<OsString>,
    stdio: StdioMode,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into(), args: Vec::new(), stdio: StdioMode::Inherit }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(args.into_iter().map(|a| a.as_ref().to_owned()));
        self
    }

    #[must_use]
    pub const fn quiet(mut self) -> Self {
        self.stdio = StdioMode::Quiet;
        self
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    #[must_use]
    pub fn arguments(&self) -> &[OsString] {
        &self.args
    }

    /// Runs the command to completion and returns its exit status.
    ///
    /// # Errors
    /// Returns [`LauncherError::Spawn`] if the program cannot be started.
    pub fn run(&self) -> Result<ExitStatus, LauncherError> {
        debug!(command = %self, stdio = ?self.stdio, "Spawning child process");

        let mut command = Command::new(&self.program);
        command.args(&self.args).envs(CHILD_ENV.iter().copied()).stdin(Stdio::inherit());

        match self.stdio {
            StdioMode::Inherit => command.stdout(Stdio::inherit()).stderr(Stdio::inherit()),
            StdioMode::Quiet => command.stdout(Stdio::null()).stderr(Stdio::inherit()),
        };

        command.status().map_err(|source| LauncherError::Spawn {
            program: self.program.clone(),
            source,
            context: None,
        })
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Maps the runner's exit status to the launcher's own exit code.
///
/// Success is `0`; any failure, including termination by signal, is exactly `1`.
#[must_use]
pub fn exit_code_for(status: ExitStatus) -> u8 {
    u8::from(!status.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_program_and_args_with_spaces() {
        let invocation = Invocation::new("/venv/bin/prysk").args(["--shell=bash", "tests"]);
        assert_eq!(invocation.to_string(), "/venv/bin/prysk --shell=bash tests");
    }

    #[test]
    fn display_without_args_is_program_only() {
        assert_eq!(Invocation::new("prysk").to_string(), "prysk");
    }

    #[test]
    fn spawn_failure_names_program() {
        let err = Invocation::new("./definitely-not-a-real-binary-7f3a")
            .run()
            .expect_err("missing binary must not spawn");

        assert!(matches!(err, LauncherError::Spawn { .. }));
        assert!(err.to_string().contains("definitely-not-a-real-binary-7f3a"));
    }

    #[cfg(unix)]
    #[test]
    fn success_maps_to_zero() -> Result<(), LauncherError> {
        let status = Invocation::new("sh").args(["-c", "exit 0"]).quiet().run()?;
        assert_eq!(exit_code_for(status), 0);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn any_failure_maps_to_one() -> Result<(), LauncherError> {
        for code in ["1", "2", "42", "255"] {
            let status = Invocation::new("sh").arg("-c").arg(format!("exit {code}")).run()?;
            assert_eq!(exit_code_for(status), 1, "child exit {code}");
        }
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn children_see_update_notifier_disabled() -> Result<(), LauncherError> {
        let status = Invocation::new("sh")
            .args(["-c", r#"test "$NO_UPDATE_NOTIFIER" = "1""#])
            .run()?;
        assert!(status.success());
        Ok(())
    }
}
