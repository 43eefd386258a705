use crate::envelope::ResultEnvelope;
use crate::error::{EnvelopeError, SchemaViolation};
use crate::wrapper::DataEnvelope;
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::OnceCell;
use serde::Serialize;
use serde_json::Value;

const RESULT_ENVELOPE_SCHEMA: &str = include_str!("../schema/result-envelope.json");

static DEFAULT_VALIDATOR: OnceCell<EnvelopeValidator> = OnceCell::new();

/// Checks serialized envelopes against the wire schema.
pub struct EnvelopeValidator {
    schema: JSONSchema,
}

impl EnvelopeValidator {
    pub fn new() -> Result<Self, EnvelopeError> {
        let schema_value: Value = serde_json::from_str(RESULT_ENVELOPE_SCHEMA)?;

        let schema = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&schema_value)
            .map_err(|e| EnvelopeError::SchemaCompilation {
                message: e.to_string(),
            })?;

        Ok(Self { schema })
    }

    /// The process-wide validator, compiled on first use.
    pub fn shared() -> Result<&'static EnvelopeValidator, EnvelopeError> {
        DEFAULT_VALIDATOR.get_or_try_init(Self::new)
    }

    pub fn validate<S: Serialize>(&self, envelope: &S) -> Result<(), EnvelopeError> {
        let envelope_value = serde_json::to_value(envelope)?;
        self.validate_json(&envelope_value)
    }

    pub fn validate_json(&self, envelope_json: &Value) -> Result<(), EnvelopeError> {
        if let Err(errors) = self.schema.validate(envelope_json) {
            let errors = errors
                .map(|error| SchemaViolation {
                    instance_path: error.instance_path.to_string(),
                    message: error.to_string(),
                })
                .collect();
            return Err(EnvelopeError::ValidationFailed { errors });
        }

        Ok(())
    }
}

impl ResultEnvelope {
    pub fn validate(&self) -> Result<(), EnvelopeError> {
        EnvelopeValidator::shared()?.validate(self)
    }
}

impl<T: Serialize> DataEnvelope<T> {
    pub fn validate(&self) -> Result<(), EnvelopeError> {
        EnvelopeValidator::shared()?.validate(self)
    }
}
