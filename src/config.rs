//! Run configuration

use std::path::PathBuf;

use crate::discover::DEFAULT_EXTENSIONS;

/// Settings for one interactive merge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Folder to use instead of asking, if it exists
    pub folder: Option<PathBuf>,
    /// File extensions to pick up, without the dot
    pub extensions: Vec<String>,
    /// Launch the default viewer on the merged file
    pub open_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folder: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            open_output: true,
        }
    }
}

impl Config {
    /// Replace the extension filter, falling back to the default when empty
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions: Vec<String> = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
        if !extensions.is_empty() {
            self.extensions = extensions;
        }
        self
    }
}
