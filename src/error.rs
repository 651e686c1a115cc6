//! Error handling for the screening layer.
//!
//! Screening errors are user-facing validation failures. Each carries the
//! message shown to the user, the form field it concerns, an HTTP status and
//! a static code for log labelling.

use thiserror::Error;

/// Reasons a profile name or post body is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreenError {
    #[error("Name contains inappropriate language. Please choose a different name.")]
    InappropriateName,

    #[error("Name cannot exceed {max} characters")]
    NameTooLong { max: usize },

    #[error("Post content is required")]
    EmptyPost,

    #[error("Post content cannot exceed {max} characters")]
    PostTooLong { max: usize },
}

impl ScreenError {
    /// Get a static error code string for log labelling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InappropriateName => "inappropriate_name",
            Self::NameTooLong { .. } => "name_too_long",
            Self::EmptyPost => "empty_post",
            Self::PostTooLong { .. } => "post_too_long",
        }
    }

    /// The request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InappropriateName | Self::NameTooLong { .. } => "name",
            Self::EmptyPost | Self::PostTooLong { .. } => "content",
        }
    }

    /// HTTP status a handler should answer with. All screening failures are
    /// client errors.
    pub fn status_code(&self) -> u16 {
        400
    }
}

/// Result type for screening operations.
pub type ScreenResult<T> = Result<T, ScreenError>;
