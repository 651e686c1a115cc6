//! Length limits configuration.

use serde::Deserialize;

use super::defaults::default_post_max_chars;

/// Length limits applied before content is accepted.
///
/// Lengths are counted in characters. Posts are measured as submitted,
/// names after trimming.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum community post length (default: 1000).
    #[serde(default = "default_post_max_chars")]
    pub post_max_chars: usize,
    /// Maximum profile name length after trimming. Unset means no limit.
    #[serde(default)]
    pub name_max_chars: Option<usize>,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            post_max_chars: default_post_max_chars(),
            name_max_chars: None,
        }
    }
}
