//! Response envelope shared by every JSON endpoint.

use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

pub const STATUS_OK: &str = "OK";
pub const STATUS_ERROR: &str = "Error";

/// `{"status": "OK" | "Error", "error"?: ..., "alias"?: ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Envelope {
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK,
            error: None,
            alias: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            error: Some(message.into()),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// Builds a human-readable message from validation failures.
///
/// One message per field, fields in name order, joined by `", "`.
/// A `required` failure wins over anything else reported for the same field.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .filter_map(|(field, errs)| {
            let worst = errs
                .iter()
                .find(|e| e.code == "required")
                .or_else(|| errs.first())?;
            Some(field_message(&field, worst))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn field_message(field: &str, error: &ValidationError) -> String {
    match error.code.as_ref() {
        "required" => format!("field {field} is a required field"),
        "url" => format!("field {field} is not a valid URL"),
        _ => format!("field {field} is not valid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_omits_error() {
        let body = serde_json::to_value(Envelope::ok().with_alias("abc123")).unwrap();
        assert_eq!(body, json!({"status": "OK", "alias": "abc123"}));
    }

    #[test]
    fn test_error_envelope_omits_alias() {
        let body = serde_json::to_value(Envelope::error("not found")).unwrap();
        assert_eq!(body, json!({"status": "Error", "error": "not found"}));
    }

    #[test]
    fn test_validation_message_orders_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("url", ValidationError::new("url"));
        errors.add("alias", ValidationError::new("regex"));

        assert_eq!(
            validation_message(&errors),
            "field alias is not valid, field url is not a valid URL"
        );
    }

    #[test]
    fn test_required_wins_over_other_failures() {
        let mut errors = ValidationErrors::new();
        errors.add("url", ValidationError::new("url"));
        errors.add("url", ValidationError::new("required"));

        assert_eq!(
            validation_message(&errors),
            "field url is a required field"
        );
    }
}
