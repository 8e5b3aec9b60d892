//! Structural validation of `create_pokepaste` arguments.

use crate::error::{PokepasteError, Result, SchemaViolation};
use crate::schema::input_schema;
use crate::team::TeamSubmission;
use serde_json::Value;

/// Compiled validator for the tool input schema.
pub struct TeamValidator {
    compiled: jsonschema::Validator,
}

impl std::fmt::Debug for TeamValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamValidator").finish_non_exhaustive()
    }
}

impl TeamValidator {
    /// Compile the tool input schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in schema fails to compile.
    pub fn new() -> Result<Self> {
        let compiled = jsonschema::validator_for(&input_schema())
            .map_err(|e| PokepasteError::Config(format!("invalid tool input schema: {e}")))?;
        Ok(Self { compiled })
    }

    /// Check `args` and convert it into a typed submission.
    ///
    /// Only the first mismatch is reported.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaViolation`] when a required field is missing, a value has the wrong
    /// type, or the team is empty.
    pub fn validate(&self, args: &Value) -> std::result::Result<TeamSubmission, SchemaViolation> {
        if let Some(e) = self.compiled.iter_errors(args).next() {
            return Err(SchemaViolation {
                path: e.instance_path().to_string(),
                message: e.to_string(),
            });
        }

        // The schema already pins every shape serde cares about; this only trips on values the
        // schema accepts but the typed model can't hold (e.g. integers beyond i64).
        serde_json::from_value(args.clone()).map_err(|e| SchemaViolation {
            path: String::new(),
            message: e.to_string(),
        })
    }
}
