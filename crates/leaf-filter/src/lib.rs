//! # leaf-filter
//!
//! Profanity detection and masking for ReLeaf community content.
//!
//! ## Features
//!
//! - English base dictionary plus a transliterated Hindi/Hinglish vocabulary
//!   with generated inflections of frequently obfuscated words
//! - Whole-word, ASCII case-insensitive matching (no `"classic"` false hits)
//! - Leetspeak normalization (`ch00t1y4`, `$h!t`) that leaves emails, URLs,
//!   technical codes and numbers alone
//! - Length-preserving masking keyed on byte offsets
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use leaf_filter::{Lexicon, ProfanityFilter};
//!
//! let filter = ProfanityFilter::new(Arc::new(Lexicon::load().unwrap()));
//!
//! assert!(filter.contains_profanity("tu ch00t1y4 hai"));
//! assert_eq!(filter.clean_profanity("tu ch00t1y4 hai"), "tu ******** hai");
//! assert!(!filter.contains_profanity("Ping me at user@example.com"));
//! ```
//!
//! Callers that do not manage their own lexicon can use the free functions,
//! which share one lazily built [`ProfanityFilter::shared`] instance:
//!
//! ```rust
//! assert!(!leaf_filter::contains_profanity("I love hiking and recycling"));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod detector;
pub mod error;
pub mod lexicon;
mod mask;
pub mod normalize;

pub use self::detector::{ProfanityFilter, Verdict, DEFAULT_REPLACEMENT};
pub use self::error::{FilterError, Result};
pub use self::lexicon::{generate_variants, Lexicon, LexiconBuilder};
pub use self::normalize::{
    classify, leet_pattern, looks_like_email, looks_like_numeric, looks_like_technical_code,
    looks_like_url, normalize, LeetPattern, TokenKind,
};

/// [`ProfanityFilter::contains_profanity`] on the shared filter.
pub fn contains_profanity(text: &str) -> bool {
    ProfanityFilter::shared().contains_profanity(text)
}

/// [`ProfanityFilter::clean_profanity`] on the shared filter, masking with `*`.
pub fn clean_profanity(text: &str) -> String {
    ProfanityFilter::shared().clean_profanity(text)
}

/// [`ProfanityFilter::profane_words`] on the shared filter.
pub fn profane_words(text: &str) -> Vec<String> {
    ProfanityFilter::shared().profane_words(text)
}
