//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Top-level config struct and file loading (Config, ConfigError)
//! - [`filter`]: Lexicon and masking configuration (FilterConfig)
//! - [`limits`]: Length limits for names and posts (LimitsConfig)
//! - [`validation`]: Startup validation collecting every error found

mod defaults;
mod filter;
mod limits;
mod types;
pub mod validation;

pub use filter::FilterConfig;
pub use limits::LimitsConfig;
pub use types::Config;
pub use validation::validate;
