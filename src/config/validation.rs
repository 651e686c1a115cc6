//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("filter.replacement must be exactly one visible character, got {0:?}")]
    InvalidReplacement(String),
    #[error("filter.{list} contains a blank entry at index {index}")]
    BlankWord { list: &'static str, index: usize },
    #[error("filter has no vocabulary: enable base_dictionary or hinglish, or add extra_words")]
    EmptyVocabulary,
    #[error("limits.{0} must be greater than zero")]
    ZeroLimit(&'static str),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let filter = &config.filter;

    if filter.replacement_char().is_none() {
        errors.push(ValidationError::InvalidReplacement(
            filter.replacement.clone(),
        ));
    }

    for (list, words) in [
        ("extra_words", &filter.extra_words),
        ("extra_key_words", &filter.extra_key_words),
        ("allowed_words", &filter.allowed_words),
    ] {
        if let Some(index) = words.iter().position(|w| w.trim().is_empty()) {
            errors.push(ValidationError::BlankWord { list, index });
        }
    }

    if !filter.base_dictionary
        && !filter.hinglish
        && filter.extra_words.is_empty()
        && filter.extra_key_words.is_empty()
    {
        errors.push(ValidationError::EmptyVocabulary);
    }

    if config.limits.post_max_chars == 0 {
        errors.push(ValidationError::ZeroLimit("post_max_chars"));
    }
    if config.limits.name_max_chars == Some(0) {
        errors.push(ValidationError::ZeroLimit("name_max_chars"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
