use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvelopeError {
    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Schema compilation failed: {message}")]
    SchemaCompilation { message: String },

    #[error("Failed to serialize envelope: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Envelope validation failed: {}", join_violations(.errors))]
    ValidationFailed { errors: Vec<SchemaViolation> },
}

/// A single schema violation found while validating a serialized envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub instance_path: String,
    pub message: String,
}

fn join_violations(errors: &[SchemaViolation]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.message, self.instance_path)
    }
}
