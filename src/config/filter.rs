//! Lexicon and masking configuration.

use std::sync::Arc;

use leaf_filter::{FilterError, Lexicon, ProfanityFilter};
use serde::Deserialize;
use tracing::info;

use super::defaults::{default_replacement, default_true};

/// Lexicon and masking configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Masking character (default: "*"). Must be a single visible character.
    #[serde(default = "default_replacement")]
    pub replacement: String,
    /// Include the English base dictionary (default: true).
    #[serde(default = "default_true")]
    pub base_dictionary: bool,
    /// Include the Hindi/Hinglish vocabulary and its generated variants
    /// (default: true).
    #[serde(default = "default_true")]
    pub hinglish: bool,
    /// Additional disallowed terms. Phrases are allowed.
    #[serde(default)]
    pub extra_words: Vec<String>,
    /// Additional key words; these are expanded with suffix variants.
    #[serde(default)]
    pub extra_key_words: Vec<String>,
    /// Terms removed from the lexicon, e.g. to silence a false positive.
    #[serde(default)]
    pub allowed_words: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            replacement: default_replacement(),
            base_dictionary: true,
            hinglish: true,
            extra_words: Vec::new(),
            extra_key_words: Vec::new(),
            allowed_words: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// The masking character, if `replacement` holds exactly one visible
    /// character.
    pub fn replacement_char(&self) -> Option<char> {
        let mut chars = self.replacement.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() && !c.is_control() => Some(c),
            _ => None,
        }
    }

    /// Assemble the lexicon described by this section and wrap it in a
    /// filter.
    pub fn build_filter(&self) -> Result<ProfanityFilter, FilterError> {
        let mut builder = Lexicon::builder();
        if self.base_dictionary {
            builder = builder.with_base_dictionary();
        }
        if self.hinglish {
            builder = builder.with_hinglish();
        }
        let lexicon = builder
            .with_words(&self.extra_words)
            .with_key_words(&self.extra_key_words)
            .allow(&self.allowed_words)
            .build()?;

        info!(
            terms = lexicon.len(),
            extra = self.extra_words.len() + self.extra_key_words.len(),
            allowed = self.allowed_words.len(),
            "Loaded profanity lexicon"
        );

        let filter = ProfanityFilter::new(Arc::new(lexicon));
        Ok(match self.replacement_char() {
            Some(c) => filter.with_replacement(c),
            None => filter,
        })
    }
}
