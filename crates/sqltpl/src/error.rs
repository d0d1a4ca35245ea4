//! Error types for sqltpl

use thiserror::Error;

use crate::value::ValueKind;

/// Result type alias for templating operations
pub type TplResult<T> = Result<T, TplError>;

/// Error types for query templating
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TplError {
    /// A value of this kind is not accepted by the formatting path it was
    /// bound to (e.g. a sequence on the generic path, a mapping under `?d`)
    #[error("Unsupported argument type: {0}")]
    UnsupportedArgumentType(ValueKind),

    /// More than one `{` or more than one `}` in the substituted query
    #[error("Nested conditional blocks are not allowed")]
    NestedConditionalBlock,

    /// Fewer arguments than placeholders
    #[error("No argument for placeholder #{placeholder} ({provided} provided)")]
    MissingArgument {
        /// 1-based ordinal of the placeholder that ran out of arguments
        placeholder: usize,
        /// Number of arguments the caller supplied
        provided: usize,
    },
}

impl TplError {
    /// Create an unsupported-type error for the given kind
    pub fn unsupported(kind: ValueKind) -> Self {
        Self::UnsupportedArgumentType(kind)
    }

    /// Check if this is an unsupported-argument-type error
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedArgumentType(_))
    }

    /// Check if this is a missing-argument error
    pub fn is_missing_argument(&self) -> bool {
        matches!(self, Self::MissingArgument { .. })
    }
}
