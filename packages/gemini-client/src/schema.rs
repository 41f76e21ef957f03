//! Type-safe schema generation for Gemini structured outputs.
//!
//! Uses the `schemars` crate to automatically generate JSON schemas from Rust
//! types, then rewrites them into the OpenAPI subset that Gemini's
//! `responseSchema` accepts.
//!
//! # Example
//!
//! ```rust,ignore
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//! use gemini_client::StructuredOutput;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Plan {
//!     name: String,
//!     price: f64,
//! }
//!
//! let schema = Plan::gemini_schema();
//! ```

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;

/// Trait for types that can be used as Gemini structured output.
///
/// Automatically implemented for any type that implements
/// `JsonSchema + DeserializeOwned`.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// Generate a Gemini-compatible JSON schema for this type.
    ///
    /// Gemini's `responseSchema` is an OpenAPI 3.0 subset:
    /// 1. No `$ref` references — everything must be fully inlined
    /// 2. No `$schema` or `definitions` sections
    /// 3. No `additionalProperties` keyword
    /// 4. No type arrays — `["string", "null"]` must become
    ///    `"type": "string", "nullable": true`
    ///
    /// This method transforms the schemars output to meet these requirements.
    fn gemini_schema() -> serde_json::Value {
        let schema = schema_for!(Self);
        let mut value = serde_json::to_value(schema).unwrap_or_default();

        // Step 1: Inline all $ref references
        inline_refs(&mut value);

        // Step 2: Strip keywords the OpenAPI subset rejects
        strip_unsupported_keys(&mut value);
        normalize_nullable_types(&mut value);

        // Step 3: Remove the definitions section and $schema marker
        if let serde_json::Value::Object(map) = &mut value {
            map.remove("definitions");
            map.remove("$schema");
        }

        value
    }

    /// Get the schema name for this type.
    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// Remove schema keywords Gemini's OpenAPI subset does not accept.
fn strip_unsupported_keys(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            map.remove("additionalProperties");
            for (_, v) in map.iter_mut() {
                strip_unsupported_keys(v);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                strip_unsupported_keys(item);
            }
        }
        _ => {}
    }
}

/// Rewrite JSON Schema nullable-type arrays into OpenAPI form.
///
/// schemars encodes `Option<T>` as `"type": ["T", "null"]`; Gemini wants
/// a single type string plus `"nullable": true`.
fn normalize_nullable_types(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            let replacement = match map.get("type") {
                Some(serde_json::Value::Array(types)) => {
                    let non_null: Vec<&serde_json::Value> =
                        types.iter().filter(|t| *t != "null").collect();
                    let was_nullable = non_null.len() < types.len();
                    match (non_null.first(), was_nullable) {
                        (Some(t), true) if non_null.len() == 1 => Some((*t).clone()),
                        _ => None,
                    }
                }
                _ => None,
            };

            if let Some(single_type) = replacement {
                map.insert("type".to_string(), single_type);
                map.insert("nullable".to_string(), serde_json::Value::Bool(true));
            }

            for (_, v) in map.iter_mut() {
                normalize_nullable_types(v);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                normalize_nullable_types(item);
            }
        }
        _ => {}
    }
}

/// Inline all $ref references by replacing them with the actual schema
/// from the definitions section.
fn inline_refs(value: &mut serde_json::Value) {
    let definitions = if let serde_json::Value::Object(map) = value {
        map.get("definitions").cloned()
    } else {
        None
    };

    if let Some(defs) = definitions {
        inline_refs_recursive(value, &defs);
    }
}

/// Recursively inline $ref references.
fn inline_refs_recursive(value: &mut serde_json::Value, definitions: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(serde_json::Value::String(ref_path)) = map.get("$ref").cloned() {
                // Parse refs like "#/definitions/Plan"
                if ref_path.starts_with("#/definitions/") {
                    let type_name = ref_path.trim_start_matches("#/definitions/");
                    if let Some(def) = definitions.get(type_name) {
                        *value = def.clone();
                        // Inline any nested refs in the inlined schema
                        inline_refs_recursive(value, definitions);
                        return;
                    }
                }
            }

            for (_, v) in map.iter_mut() {
                inline_refs_recursive(v, definitions);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                inline_refs_recursive(item, definitions);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::JsonSchema;
    use serde::Deserialize;

    #[derive(Deserialize, JsonSchema)]
    struct TestPlan {
        name: String,
        price: f64,
    }

    #[derive(Deserialize, JsonSchema)]
    struct TestListing {
        name: String,
        creator: Option<String>,
        plans: Vec<TestPlan>,
    }

    #[test]
    fn schema_is_an_object_with_properties() {
        let schema = TestListing::gemini_schema();
        let obj = schema.as_object().unwrap();

        assert_eq!(
            obj.get("type"),
            Some(&serde_json::Value::String("object".to_string()))
        );
        let properties = obj.get("properties").unwrap().as_object().unwrap();
        assert!(properties.contains_key("name"));
        assert!(properties.contains_key("creator"));
        assert!(properties.contains_key("plans"));
    }

    #[test]
    fn refs_are_inlined() {
        let schema = TestListing::gemini_schema();
        let schema_str = serde_json::to_string(&schema).unwrap();

        assert!(!schema_str.contains("$ref"), "refs must be inlined");
        assert!(!schema_str.contains("definitions"));
        assert!(!schema_str.contains("$schema"));

        // The nested plan item schema should be a plain object
        let items = &schema["properties"]["plans"]["items"];
        assert_eq!(items["type"], "object");
        assert!(items["properties"]["price"].is_object());
    }

    #[test]
    fn additional_properties_is_stripped() {
        let schema = TestListing::gemini_schema();
        let schema_str = serde_json::to_string(&schema).unwrap();
        assert!(!schema_str.contains("additionalProperties"));
    }

    #[test]
    fn option_fields_become_nullable_single_types() {
        let schema = TestListing::gemini_schema();
        let creator = &schema["properties"]["creator"];

        assert_eq!(creator["type"], "string");
        assert_eq!(creator["nullable"], true);
    }

    #[test]
    fn optional_fields_stay_out_of_required() {
        let schema = TestListing::gemini_schema();
        let required = schema["required"].as_array().unwrap();
        let names: Vec<&str> = required.iter().filter_map(|v| v.as_str()).collect();

        assert!(names.contains(&"name"));
        assert!(names.contains(&"plans"));
        assert!(!names.contains(&"creator"), "Option fields are not required");
    }
}
