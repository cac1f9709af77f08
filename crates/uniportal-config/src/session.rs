//! Where the local session document lives.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_file_name() -> String {
    "session.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Directory holding the session document. Empty means `~/.uniportal`.
    #[serde(default)]
    pub dir: String,

    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            file_name: default_file_name(),
        }
    }
}

impl SessionConfig {
    /// Full path of the session document, or `None` when no directory is
    /// configured and the home directory cannot be found.
    pub fn path(&self) -> Option<PathBuf> {
        let dir = if self.dir.is_empty() {
            dirs::home_dir()?.join(".uniportal")
        } else {
            PathBuf::from(&self.dir)
        };
        Some(dir.join(&self.file_name))
    }
}
