//! Configuration and settings management.
//!
//! Settings are stored in the user's config directory as JSON.

mod settings;

pub use settings::{ConfigError, FixtureSettings, LoggingSettings, OutputSettings, Settings};
