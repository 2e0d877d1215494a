use thiserror::Error;

/// Failure of a path-based read on a [`crate::tree::Data`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// A segment of the path names a key that isn't there.
    #[error("path '{path}' not found: no key '{segment}'")]
    PathNotFound { path: String, segment: String },

    /// A value exists but has the wrong variant for the accessor.
    #[error("path '{path}': expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("data isn't single-valued: it has {len} entries")]
    NotSingleValued { len: usize },
}

/// Failure while loading a tree from JSON.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("'{path}': expected a JSON object")]
    NotAnObject { path: String },

    #[error("'{path}': keys must be non-empty")]
    EmptyKey { path: String },

    #[error("'{path}': null has no WML representation")]
    Null { path: String },

    #[error("'{path}': {message}")]
    MalformedMarker { path: String, message: String },
}

pub type Result<T, E = PathError> = std::result::Result<T, E>;
