//! Logging setup shared by the desktop binary and tests.
//!
//! ## Usage
//!
//! ```ignore
//! use folio_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("folio=debug,folio_core=debug")
//!     .init();
//! ```
//!
//! `RUST_LOG` wins over the builder's filter when it is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{FolioError, FolioResult};

/// Filter used when neither `RUST_LOG` nor an explicit filter is given.
pub const DEFAULT_FILTER: &str = "folio=info,folio_core=info";

/// Builder for the global tracing subscriber.
#[derive(Debug, Clone)]
pub struct LoggingBuilder {
    console_output: bool,
    env_filter: Option<String>,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    /// Create a new logging builder with console output enabled.
    pub fn new() -> Self {
        Self {
            console_output: true,
            env_filter: None,
        }
    }

    /// Disable console output.
    pub fn no_console(mut self) -> Self {
        self.console_output = false;
        self
    }

    /// Set the filter directive (e.g., "folio=info,folio_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Resolve the effective filter: `RUST_LOG`, then the explicit filter,
    /// then [`DEFAULT_FILTER`].
    pub fn build_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let directive = self.env_filter.as_deref().unwrap_or(DEFAULT_FILTER);
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        })
    }

    /// Install the subscriber globally, reporting failure instead of panicking.
    pub fn try_init(self) -> FolioResult<()> {
        let console = self
            .console_output
            .then(|| tracing_subscriber::fmt::layer().with_target(true));

        tracing_subscriber::registry()
            .with(self.build_filter())
            .with(console)
            .try_init()
            .map_err(|e| FolioError::Logging(e.to_string()))
    }

    /// Install the subscriber globally, ignoring a subscriber already in place.
    pub fn init(self) {
        if let Err(e) = self.try_init() {
            tracing::debug!("Logging already initialized: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_falls_back_to_default() {
        std::env::remove_var("RUST_LOG");

        let filter = LoggingBuilder::new().with_filter("folio=[").build_filter();
        assert_eq!(filter.to_string(), EnvFilter::new(DEFAULT_FILTER).to_string());
    }

    #[test]
    fn test_explicit_filter_is_used() {
        std::env::remove_var("RUST_LOG");

        let filter = LoggingBuilder::new().with_filter("folio=debug").build_filter();
        assert_eq!(filter.to_string(), EnvFilter::new("folio=debug").to_string());
    }

    #[test]
    fn test_second_init_does_not_panic() {
        LoggingBuilder::new().no_console().init();
        LoggingBuilder::new().no_console().init();
    }
}
