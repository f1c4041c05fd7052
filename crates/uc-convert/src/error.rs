//! Conversion errors.

use crate::Domain;
use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors returned by the conversion functions.
///
/// Every variant is caused by bad input; none of them is transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// One or both unit codes are missing from the domain's table.
    #[error(
        "Unknown {domain} unit(s): {} (requested '{from}' -> '{to}')",
        .unknown.join(", ")
    )]
    UnknownUnit {
        domain: Domain,
        from: String,
        to: String,
        /// The offending codes, source first.
        unknown: Vec<String>,
    },

    /// The (from, to) scale pair is not one of the six temperature transitions.
    #[error("Cannot convert temperature from '{from}' to '{to}'")]
    UnsupportedTemperature { from: String, to: String },

    /// The domain selector matched none of the known domains.
    #[error("Unknown category: '{name}'")]
    UnknownDomain { name: String },
}

impl ConvertError {
    /// Codes that were not recognized, empty for non-unit errors.
    pub fn unknown_units(&self) -> &[String] {
        match self {
            ConvertError::UnknownUnit { unknown, .. } => unknown,
            _ => &[],
        }
    }
}
