//! Logging setup and span constructors.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Logs go to stderr so stdout stays free for results. The filter comes from
/// `RUST_LOG`, defaulting to `info`. With `json` set, events are emitted as
/// JSON lines.
pub fn init(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Standardized span constructors for moderation observability.
pub mod spans {
    use tracing::{Span, info_span};

    /// Create a span for screening user-submitted content.
    pub fn screen(kind: &'static str) -> Span {
        info_span!("screen", kind = kind)
    }

    /// Create a span for a batch run of the command-line checker.
    pub fn check(mode: &str) -> Span {
        info_span!("check", mode = %mode)
    }
}
