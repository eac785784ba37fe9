//! Error types for the cache library
//!
//! Provides unified error handling using thiserror.
//!
//! The cache operations themselves are infallible: a lookup miss is a
//! normal `None` outcome, and the internal-consistency check in the
//! eviction path panics rather than returning an error, because that state
//! can only come from corrupted accounting. The only fallible surface is
//! configuration loading.

use thiserror::Error;

// == Config Error Enum ==
/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable was set but could not be parsed
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue {
        /// The offending environment variable
        var: &'static str,
        /// The raw value it carried
        value: String,
    },
}
