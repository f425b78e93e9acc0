use crate::invocation::Invocation;
use crate::platform::Platform;
use std::path::Path;

/// Environment variable that puts the runner into interactive mode.
pub const INTERACTIVE_ENV: &str = "PRYSK_INTERACTIVE";

/// Interactive mode is on only for the exact value `"true"`.
#[must_use]
pub fn interactive_from_env(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Command-line switches passed to the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerFlags {
    pub shell: String,
    pub interactive: bool,
    pub dos2unix: bool,
}

impl RunnerFlags {
    /// Flags for `platform`; line endings are normalized on Windows only.
    pub fn new(shell: impl Into<String>, interactive: bool, platform: Platform) -> Self {
        Self { shell: shell.into(), interactive, dos2unix: platform.is_windows() }
    }

    /// Rendered flags in runner order; disabled switches are left out.
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![format!("--shell={}", self.shell)];
        if self.interactive {
            args.push("--interactive".to_owned());
        }
        if self.dos2unix {
            args.push("--dos2unix".to_owned());
        }
        args
    }
}

/// `<runner> <flags...> <tests>`
#[must_use]
pub fn runner_invocation(runner: &Path, flags: &RunnerFlags, tests: &Path) -> Invocation {
    Invocation::new(runner).args(flags.to_args()).arg(tests)
}
