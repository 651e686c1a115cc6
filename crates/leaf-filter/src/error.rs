//! Error types for the filter library.
//!
//! Text operations never fail; only assembling a [`Lexicon`](crate::Lexicon)
//! or compiling a [`LeetPattern`](crate::LeetPattern) can.

use thiserror::Error;

/// Convenience type alias for Results using [`FilterError`].
pub type Result<T, E = FilterError> = std::result::Result<T, E>;

/// Errors raised while building matchers.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The term automaton could not be constructed (size limits exceeded).
    #[error("failed to build term matcher: {0}")]
    Matcher(#[from] aho_corasick::BuildError),

    /// A per-word obfuscation pattern failed to compile.
    #[error("failed to compile pattern for {word:?}: {source}")]
    Pattern {
        /// The word the pattern was built from.
        word: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}

impl FilterError {
    /// Get a static error code string for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Matcher(_) => "matcher_build_failed",
            Self::Pattern { .. } => "pattern_compile_failed",
        }
    }
}
