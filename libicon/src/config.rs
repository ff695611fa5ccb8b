use std::ffi::OsStr;

/// What the driver looks for in a source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Receiver namespace of icon properties, `val <namespace>.<group>.<Name>:`.
    pub namespace: String,
    /// Extension of source files, without the leading dot.
    pub extension: String,
}

impl Config {
    pub const DEFAULT_NAMESPACE: &'static str = "MiuixIcons";
    pub const DEFAULT_EXTENSION: &'static str = "kt";

    /// Whether a directory entry named `file_name` is a source to convert.
    pub fn matches(&self, file_name: &OsStr) -> bool {
        file_name
            .to_str()
            .and_then(|name| name.strip_suffix(self.extension.as_str()))
            .is_some_and(|stem| stem.ends_with('.'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: Self::DEFAULT_NAMESPACE.to_string(),
            extension: Self::DEFAULT_EXTENSION.to_string(),
        }
    }
}

#[test]
fn matches_extension() {
    let config = Config::default();
    assert!(config.matches(OsStr::new("Back.kt")));
    assert!(config.matches(OsStr::new(".kt")));
    assert!(!config.matches(OsStr::new("Back.kts")));
    assert!(!config.matches(OsStr::new("Backkt")));

    let config = Config {
        extension: "txt".to_string(),
        ..Config::default()
    };
    assert!(config.matches(OsStr::new("icon.txt")));
    assert!(!config.matches(OsStr::new("icon.kt")));
}
