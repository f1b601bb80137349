use thiserror::Error;

/// Errors raised while assembling a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error("duplicate operationId `{operation_id}` ({first} and {second})")]
    DuplicateOperationId {
        operation_id: String,
        first: String,
        second: String,
    },
}

/// Errors raised while loading route tables and configuration files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),
}
