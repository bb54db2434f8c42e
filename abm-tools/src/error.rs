//! Error types for each helper.

use thiserror::Error;

/// Errors from [`AttrDict`](crate::AttrDict) lookups.
///
/// The two kinds are kept apart on purpose: callers probing for an optional
/// field match on [`AttrError::AttributeNotFound`], while a failed item
/// lookup or delete is an ordinary [`AttrError::KeyNotFound`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttrError {
    /// Attribute-style read of a name that has no entry.
    #[error("attribute not found: {0}")]
    AttributeNotFound(String),

    /// Item read or delete of a key that has no entry.
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

impl AttrError {
    /// The attribute or key name that was missing.
    pub fn name(&self) -> &str {
        match self {
            Self::AttributeNotFound(name) | Self::KeyNotFound(name) => name,
        }
    }
}

/// Errors from the nested matrix builder.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The shape had no dimensions.
    #[error("shape must have at least one dimension")]
    Empty,

    /// A level that should hold `depth` more dimensions was not an array.
    #[error("expected an array with {depth} nested dimension(s)")]
    NotAnArray {
        /// Dimensions still expected at that level.
        depth: usize,
    },
}

/// Errors converting dynamic parameter records into SALib problems.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// The parameter value is not a `[low, high]` numeric pair.
    #[error("parameter {name} is not a [low, high] range: {value}")]
    NotARange {
        /// Parameter name.
        name: String,
        /// The offending value, rendered as JSON.
        value: String,
    },
}

/// General toolkit error.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// An attribute dictionary lookup failed.
    #[error("attr dict error: {0}")]
    Attr(#[from] AttrError),

    /// A matrix shape was malformed.
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    /// A parameter record could not be converted.
    #[error("parameter error: {0}")]
    Param(#[from] ParamError),

    /// Reading a parameter into a typed value failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Catch-all. Include context.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
