//! Unified error type definition
//!
//! Only program faults end up here. Problems with what the user typed are
//! never errors: they are written into the form state as inline messages.

use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// A rule table pattern failed to compile
    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },

    /// Page markup could not be used
    #[error("Markup error: {0}")]
    Markup(String),
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
