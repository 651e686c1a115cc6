//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

/// Returns `true` (for serde defaults).
pub fn default_true() -> bool {
    true
}

// =============================================================================
// Filter Defaults
// =============================================================================

pub fn default_replacement() -> String {
    leaf_filter::DEFAULT_REPLACEMENT.to_string()
}

// =============================================================================
// Limit Defaults
// =============================================================================

pub fn default_post_max_chars() -> usize {
    1000
}
