//! Error types for the metadata engine

use thiserror::Error;

/// Result type for metadata operations
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Metadata engine errors
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("There are no versions with the {namespace} project name")]
    UnknownNamespace { namespace: String },

    #[error("There are no versions in the {namespace} namespace with the {version} calendar version")]
    UnknownCalendarVersion { namespace: String, version: String },

    #[error("Invalid version identifier: {0}")]
    InvalidVersionIdentifier(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid sha256 digest: {0}")]
    InvalidDigest(String),

    #[error("Invalid schema document: {0}")]
    InvalidSchema(String),

    #[error("{0} is not a network with a deployed instance of the Wonzimer Media Protocol")]
    UnknownNetwork(String),

    #[error("{0} must begin with `https://`")]
    InvalidUri(String),

    #[error("Chain read failed: {0}")]
    ChainRead(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single violated schema constraint.
///
/// Surfaced by `generate` and `parse`; `validate` folds these into a
/// plain `false` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field `{field}`")]
    MissingField { field: String },

    #[error("unexpected field `{field}` is not declared by the schema")]
    UnexpectedField { field: String },

    #[error("field `{field}` must be of type {expected}, found {found}")]
    WrongType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("metadata must be a JSON object")]
    NotAnObject,
}
