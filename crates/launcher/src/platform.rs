/// Host operating system family as far as the launcher cares.
///
/// Every path rule that differs between Windows and the rest (binary suffix,
/// venv binary directory, selector separators, line-ending normalization) hangs
/// off this type so it can be exercised for either family on any host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// The family the launcher was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }

    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Suffix appended to venv executables.
    #[must_use]
    pub const fn exe_suffix(self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            Self::Unix => "",
        }
    }

    /// Directory inside a venv that holds its executables.
    #[must_use]
    pub const fn venv_bin_dir(self) -> &'static str {
        match self {
            Self::Windows => "Scripts",
            Self::Unix => "bin",
        }
    }

    #[must_use]
    pub const fn path_separator(self) -> char {
        match self {
            Self::Windows => '\\',
            Self::Unix => '/',
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
