//! Central schema registry for all WagerVS contract types.
//!
//! The `SchemaRegistry` builds JSON Schemas from wv-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;
use serde::de::DeserializeOwned;
use wv_core::FullInsight;

use crate::error::SchemaError;

/// Central store of all JSON Schemas in the system, keyed by snake_case name.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing the insight and API contract schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Insight model (3) ---
        register!(schemas, "full_insight", wv_core::FullInsight);
        register!(schemas, "visible_insight", wv_core::VisibleInsight);
        register!(schemas, "insight_item", wv_core::InsightItem);

        // --- API requests (3) ---
        register!(schemas, "chat_request", wv_core::api::ChatRequest);
        register!(schemas, "insight_request", wv_core::api::InsightRequest);
        register!(
            schemas,
            "generate_user_wager_request",
            wv_core::api::GenerateUserWagerRequest
        );

        // --- API responses (4) ---
        register!(schemas, "chat_response", wv_core::api::ChatResponse);
        register!(schemas, "insight_response", wv_core::api::InsightResponse);
        register!(
            schemas,
            "generate_user_wager_response",
            wv_core::api::GenerateUserWagerResponse
        );
        register!(schemas, "intel_card", wv_core::api::IntelCard);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Parse raw JSON, validate it against `name`, then decode into `T`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Decode` for malformed JSON, otherwise the errors
    /// of [`Self::validate`].
    pub fn decode<T: DeserializeOwned>(&self, name: &str, raw: &str) -> Result<T, SchemaError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        self.validate(name, &value)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Decode a [`FullInsight`] handed over by an insight source.
    ///
    /// Producer-side invariant violations (crowd split sum, confidence range)
    /// are logged, not rejected; the gate tolerates them.
    ///
    /// # Errors
    ///
    /// Same as [`Self::decode`].
    pub fn decode_full_insight(&self, raw: &str) -> Result<FullInsight, SchemaError> {
        let full: FullInsight = self.decode("full_insight", raw)?;
        for issue in full.check() {
            tracing::warn!(%issue, "insight source handed over inconsistent data");
        }
        Ok(full)
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wv_core::{InsightKind, Level, visible_insight};

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_has_expected_count() {
        // 3 insight model + 3 requests + 4 responses
        assert_eq!(registry().schema_count(), 10);
    }

    #[test]
    fn registry_list_is_sorted() {
        let names = registry().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn get_nonexistent_schema() {
        assert!(registry().get("nonexistent").is_none());
        assert!(matches!(
            registry().validate("nonexistent", &serde_json::json!({})),
            Err(SchemaError::NotFound(_))
        ));
    }

    #[test]
    fn gate_output_validates() {
        let reg = registry();
        let full: FullInsight = reg
            .decode(
                "full_insight",
                r#"{"confidence":"High Confidence (82%)","upsetAlert":true,
                    "insights":[{"label":"AI Line","value":"SOL +3.0%","type":"line"}]}"#,
            )
            .unwrap();
        let visible = visible_insight(Level::Contender, &full);
        let json = serde_json::to_value(&visible).unwrap();
        assert!(reg.validate("visible_insight", &json).is_ok());
    }

    #[test]
    fn decode_rejects_wrong_field_types() {
        let result = registry().decode::<FullInsight>("full_insight", r#"{"upsetAlert":"yes"}"#);
        match result {
            Err(SchemaError::ValidationFailed { errors }) => assert!(!errors.is_empty()),
            other => panic!("Expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_item_without_type() {
        let result = registry().decode_full_insight(r#"{"insights":[{"label":"x","value":"y"}]}"#);
        assert!(matches!(result, Err(SchemaError::ValidationFailed { .. })));
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let result = registry().decode_full_insight("{not json");
        assert!(matches!(result, Err(SchemaError::Decode(_))));
    }

    #[test]
    fn inconsistent_crowd_split_still_decodes() {
        let full = registry()
            .decode_full_insight(
                r#"{"crowdSplit":{"over":80,"under":80},
                    "insights":[{"label":"Crowd","value":"80/80","type":"crowd"}]}"#,
            )
            .unwrap();
        assert_eq!(full.insights[0].kind, InsightKind::Crowd);
        assert_eq!(full.check().len(), 1);
    }

    #[test]
    fn chat_request_schema_bounds_level() {
        let reg = registry();
        let ok = serde_json::json!({"userId": "u", "level": 4, "message": "edge?"});
        let bad = serde_json::json!({"userId": "u", "level": 0, "message": "edge?"});
        assert!(reg.validate("chat_request", &ok).is_ok());
        assert!(reg.validate("chat_request", &bad).is_err());
    }
}
