//! # Launcher
//!
//! Bootstraps and runs the cram integration suite.
//!
//! The launcher provisions an isolated Python virtual environment, installs a
//! pinned version of the `prysk` runner into it and then hands the selected
//! tests to that runner with inherited standard streams.
//!
//! * Tool names are resolved through a closed allow-list ([`VenvTool`]), so an
//!   executable path is never built from arbitrary input.
//! * Platform rules (`Scripts`/`bin`, `.exe`, separators, `--dos2unix`) are
//!   driven by an explicit [`Platform`] and can be exercised on any host.
//! * A failing test run is a normal outcome mapped to exit code `1`; only
//!   setup and spawn failures are [`LauncherError`]s.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cram_launcher::{Launcher, LauncherConfig, Platform, RunOptions};
//!
//! # fn main() -> Result<(), cram_launcher::LauncherError> {
//! let launcher = Launcher::new(".", LauncherConfig::default(), Platform::current());
//! let plan = launcher.plan(&RunOptions { selector: Some("lint".to_owned()), ..Default::default() })?;
//! let code = launcher.execute(&plan, false)?;
//! std::process::exit(i32::from(code));
//! # }
//! ```

mod config;
mod error;
mod invocation;
mod launcher;
mod platform;
mod runner;
mod selection;
mod venv;

pub use crate::config::{DEFAULT_CONFIG_FILE, ENV_PREFIX, LauncherConfig, RunnerConfig};
pub use crate::error::{LauncherError, LauncherErrorExt};
pub use crate::invocation::{CHILD_ENV, Invocation, StdioMode, exit_code_for};
pub use crate::launcher::{Launcher, Plan, RunOptions};
pub use crate::platform::Platform;
pub use crate::runner::{INTERACTIVE_ENV, RunnerFlags, interactive_from_env, runner_invocation};
pub use crate::selection::{TestSelection, normalize_selector};
pub use crate::venv::{Provisioner, Venv, VenvTool};
