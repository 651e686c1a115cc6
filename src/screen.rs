//! Screening of user-submitted profile names and community posts.
//!
//! Profile names are rejected when they contain disallowed language. Post
//! bodies are never rejected for it; they are masked before storage.

use leaf_filter::ProfanityFilter;
use tracing::{debug, info};

use crate::config::LimitsConfig;
use crate::error::{ScreenError, ScreenResult};
use crate::telemetry::spans;

/// A post body ready for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenedPost {
    /// Trimmed body with disallowed language masked.
    pub content: String,
    /// True if masking changed the body.
    pub masked: bool,
}

/// Applies the moderation rules the profile and community handlers rely on.
#[derive(Debug, Clone)]
pub struct Screener {
    filter: ProfanityFilter,
    limits: LimitsConfig,
}

impl Screener {
    pub fn new(filter: ProfanityFilter, limits: LimitsConfig) -> Self {
        Self { filter, limits }
    }

    pub fn filter(&self) -> &ProfanityFilter {
        &self.filter
    }

    /// Validate a profile-name update.
    ///
    /// An absent or blank name means "no change" and yields `Ok(None)`.
    /// Otherwise the trimmed name is returned if it is acceptable.
    pub fn screen_name(&self, name: Option<&str>) -> ScreenResult<Option<String>> {
        let _span = spans::screen("name").entered();

        let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
            return Ok(None);
        };

        if self.filter.contains_profanity(name) {
            info!(
                code = ScreenError::InappropriateName.error_code(),
                "Rejected profile name"
            );
            return Err(ScreenError::InappropriateName);
        }

        let too_long = |max: &usize| name.chars().count() > *max;
        if let Some(max) = self.limits.name_max_chars.filter(too_long) {
            return Err(ScreenError::NameTooLong { max });
        }

        Ok(Some(name.to_string()))
    }

    /// Validate and clean a community post body.
    pub fn screen_post(&self, content: &str) -> ScreenResult<ScreenedPost> {
        let _span = spans::screen("post").entered();

        if content.trim().is_empty() {
            return Err(ScreenError::EmptyPost);
        }

        let max = self.limits.post_max_chars;
        if content.chars().count() > max {
            return Err(ScreenError::PostTooLong { max });
        }

        let trimmed = content.trim();
        let cleaned = self.filter.clean_profanity(trimmed);
        let masked = cleaned != trimmed;
        if masked {
            debug!(chars = trimmed.chars().count(), "Masked post content");
        }

        Ok(ScreenedPost {
            content: cleaned,
            masked,
        })
    }
}
