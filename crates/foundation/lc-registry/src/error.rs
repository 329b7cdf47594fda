//! Registry errors

use thiserror::Error;

/// Errors raised while populating or querying a [`Registry`](crate::Registry)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No constant is registered under this name
    #[error("unknown constant `{name}`")]
    UnknownConstant {
        /// Name that was looked up
        name: String,
    },

    /// The name is already taken and the registry rejects duplicates
    #[error("constant `{name}` is already defined")]
    Duplicate {
        /// Name that collided
        name: String,
    },

    /// A numeric value was requested from a literal constant
    #[error("constant `{name}` has non-numeric value `{value}`")]
    NotNumeric {
        /// Constant name
        name: String,
        /// Textual form of the stored value
        value: String,
    },
}

impl RegistryError {
    /// Returns the constant name the error is about
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::UnknownConstant { name }
            | Self::Duplicate { name }
            | Self::NotNumeric { name, .. } => name,
        }
    }
}
