use std::borrow::Cow;
use std::path::PathBuf;

/// Errors raised while resolving, provisioning or spawning venv tools.
///
/// A failing test run is not an error; see [`crate::exit_code_for`].
#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    /// The requested tool is not on the venv allow-list.
    #[error("Tool not allowed: {tool}{}", format_context(context))]
    ToolNotAllowed { tool: String, context: Option<Cow<'static, str>> },

    /// The executable could not be started at all.
    #[error("Failed to execute {}{}: {source}", program.display(), format_context(context))]
    Spawn { program: PathBuf, source: std::io::Error, context: Option<Cow<'static, str>> },

    /// A provisioning step ran but exited unsuccessfully.
    #[error("Setup step '{step}' failed with {}{}", describe_code(*code), format_context(context))]
    StepFailed { step: Cow<'static, str>, code: Option<i32>, context: Option<Cow<'static, str>> },

    /// A venv tool expected to exist is missing.
    #[error("Missing venv tool at {}{}", path.display(), format_context(context))]
    MissingTool { path: PathBuf, context: Option<Cow<'static, str>> },

    /// Layered configuration could not be built or deserialized.
    #[error("Config error{}: {source}", format_context(context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Attaches a human readable context to a launcher failure.
pub trait LauncherErrorExt<T> {
    /// Sets the context of the error, if any.
    ///
    /// # Errors
    /// Returns the original error with its context replaced.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LauncherError>;
}

impl<T> LauncherErrorExt<T> for Result<T, LauncherError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                LauncherError::ToolNotAllowed { context: c, .. }
                | LauncherError::Spawn { context: c, .. }
                | LauncherError::StepFailed { context: c, .. }
                | LauncherError::MissingTool { context: c, .. }
                | LauncherError::Config { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> LauncherErrorExt<T> for Result<T, config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LauncherError> {
        self.map_err(|source| LauncherError::Config { source, context: Some(context.into()) })
    }
}

impl From<config::ConfigError> for LauncherError {
    #[inline]
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

fn describe_code(code: Option<i32>) -> Cow<'static, str> {
    code.map_or(Cow::Borrowed("no exit code (terminated by signal)"), |c| {
        Cow::Owned(format!("exit code {c}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_rendered_in_message() {
        let result: Result<(), LauncherError> =
            Err(LauncherError::ToolNotAllowed { tool: "bash".to_owned(), context: None });

        let err = result.context("resolving runner").unwrap_err();
        assert_eq!(err.to_string(), "Tool not allowed: bash (resolving runner)");
    }

    #[test]
    fn step_failure_reports_exit_code() {
        let err =
            LauncherError::StepFailed { step: "install prysk".into(), code: Some(2), context: None };
        assert_eq!(err.to_string(), "Setup step 'install prysk' failed with exit code 2");

        let err = LauncherError::StepFailed { step: "venv".into(), code: None, context: None };
        assert!(err.to_string().contains("terminated by signal"));
    }
}
