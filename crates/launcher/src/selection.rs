use crate::platform::Platform;
use std::path::{Path, PathBuf};

/// Which cram tests to run: the whole tests directory or a subset of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSelection {
    base: PathBuf,
    selector: Option<String>,
}

impl TestSelection {
    pub fn new(base: impl Into<PathBuf>, selector: Option<&str>) -> Self {
        Self { base: base.into(), selector: selector.map(str::to_owned) }
    }

    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path handed to the runner, always inside the base directory.
    ///
    /// Without a selector (or with an empty one) this is the base directory
    /// as given, with no trailing separator. Leading separators are dropped so
    /// `/run` selects `<base>/run` rather than an absolute path.
    #[must_use]
    pub fn resolve(&self, platform: Platform) -> PathBuf {
        let selector = self.selector.as_deref().map(|s| normalize_selector(s, platform));
        match selector.as_deref().map(|s| s.trim_start_matches(['/', '\\'])) {
            None | Some("") => self.base.clone(),
            Some(relative) => self.base.join(relative),
        }
    }
}

/// Rewrites `/` to the platform separator on Windows; a no-op elsewhere.
#[must_use]
pub fn normalize_selector(selector: &str, platform: Platform) -> String {
    if platform.is_windows() {
        selector.replace('/', &platform.path_separator().to_string())
    } else {
        selector.to_owned()
    }
}
