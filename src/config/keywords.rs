//! Emergency keyword configuration
//!
//! The detector depends only on the resulting in-memory set, never on the
//! load mechanism. A configured-but-unreadable file degrades to the empty
//! set (fail-open): the caller must not be blocked from intake by a missing
//! config file.

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::intake::EmergencyKeywordSet;

/// Emergency keyword configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeywordConfig {
    /// Optional keyword file: one lowercase phrase per line, `#` comments
    /// and blank lines skipped. When unset, the compiled-in defaults apply.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl KeywordConfig {
    /// Load the keyword set once at startup.
    pub fn load_set(&self) -> EmergencyKeywordSet {
        match &self.file {
            None => EmergencyKeywordSet::defaults(),
            Some(path) => match std::fs::read_to_string(path) {
                Ok(content) => {
                    let set = EmergencyKeywordSet::from_file_content(&content);
                    tracing::info!(
                        path = %path.display(),
                        keywords = set.len(),
                        "loaded emergency keywords"
                    );
                    set
                }
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "keyword file unreadable; emergency detection disabled"
                    );
                    EmergencyKeywordSet::default()
                }
            },
        }
    }
}
