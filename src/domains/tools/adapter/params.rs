//! Argument extraction.
//!
//! Turns the untyped `arguments` object of a tool call into a [`ParamMap`]
//! validated against the tool's declared [`ParameterSpec`] list. The raw
//! JSON value never travels past this module.

use serde_json::{Map, Value, json};

use crate::domains::tools::ToolError;

/// Declared JSON type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
}

impl ParamKind {
    /// JSON Schema type name.
    pub fn schema_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

/// Where an extracted value is placed in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Query,
    Path,
}

/// One declared tool parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    pub key: &'static str,
    pub kind: ParamKind,
    pub location: ParamLocation,
    pub required: bool,
    pub description: &'static str,
}

impl ParameterSpec {
    /// An optional query parameter.
    pub const fn query(key: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            key,
            kind,
            location: ParamLocation::Query,
            required: false,
            description,
        }
    }

    /// A path parameter. Path parameters are always required.
    pub const fn path(key: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            key,
            kind,
            location: ParamLocation::Path,
            required: true,
            description,
        }
    }

    /// Mark this parameter as required.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A single extracted parameter value, already coerced for transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamValue {
    pub key: &'static str,
    pub location: ParamLocation,
    pub value: String,
}

/// Validated parameters in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    values: Vec<ParamValue>,
}

impl ParamMap {
    /// Query pairs in declaration order.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .filter(|v| v.location == ParamLocation::Query)
            .map(|v| (v.key, v.value.as_str()))
    }

    /// Look up a path parameter value.
    pub fn path_value(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.location == ParamLocation::Path && v.key == key)
            .map(|v| v.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Extract and validate `arguments` against `specs`.
///
/// Coercion is permissive: a value of the wrong JSON type is stringified
/// rather than rejected. `null` counts as absent.
pub fn extract(arguments: &Value, specs: &[ParameterSpec]) -> Result<ParamMap, ToolError> {
    let args = arguments
        .as_object()
        .ok_or_else(|| ToolError::invalid_arguments("expected a JSON object"))?;

    let mut values = Vec::with_capacity(specs.len());
    for spec in specs {
        match args.get(spec.key).filter(|v| !v.is_null()) {
            Some(raw) => values.push(ParamValue {
                key: spec.key,
                location: spec.location,
                value: coerce(raw, spec.kind),
            }),
            None if spec.required => return Err(ToolError::missing_required(spec.key)),
            None => {}
        }
    }

    Ok(ParamMap { values })
}

/// Render a JSON value as the string placed on the wire.
fn coerce(value: &Value, kind: ParamKind) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) if kind == ParamKind::Number => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                (f as i64).to_string()
            }
            _ => n.to_string(),
        },
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Build the JSON Schema object advertised as a tool's input schema.
pub fn input_schema(specs: &[ParameterSpec]) -> Map<String, Value> {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for spec in specs {
        properties.insert(
            spec.key.to_string(),
            json!({
                "type": spec.kind.schema_type(),
                "description": spec.description,
            }),
        );
        if spec.required {
            required.push(Value::String(spec.key.to_string()));
        }
    }

    let mut schema = Map::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".to_string(), Value::Array(required));
    }
    schema
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs() -> Vec<ParameterSpec> {
        vec![
            ParameterSpec::query("marketId", ParamKind::String, "Market").required(),
            ParameterSpec::query("regionTypeId", ParamKind::Number, "Region type"),
            ParameterSpec::query("active", ParamKind::Boolean, "Active only"),
        ]
    }

    #[test]
    fn test_extract_rejects_non_object() {
        for args in [json!([1, 2]), json!("marketId"), json!(42), json!(null)] {
            let err = extract(&args, &specs()).unwrap_err();
            assert!(matches!(err, ToolError::InvalidArguments(_)), "{args}");
        }
    }

    #[test]
    fn test_extract_missing_required() {
        let err = extract(&json!({ "regionTypeId": 2 }), &specs()).unwrap_err();
        match err {
            ToolError::MissingRequiredParameter(key) => assert_eq!(key, "marketId"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extract_null_counts_as_absent() {
        let err = extract(&json!({ "marketId": null }), &specs()).unwrap_err();
        assert!(matches!(err, ToolError::MissingRequiredParameter(_)));

        let params = extract(&json!({ "marketId": "en-US", "active": null }), &specs()).unwrap();
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_extract_permissive_coercion() {
        let args = json!({
            "active": true,
            "regionTypeId": 1.0,
            "marketId": 7,
        });
        let params = extract(&args, &specs()).unwrap();
        let pairs: Vec<_> = params.query_pairs().collect();
        assert_eq!(
            pairs,
            vec![("marketId", "7"), ("regionTypeId", "1"), ("active", "true")]
        );
    }

    #[test]
    fn test_extract_keeps_fractional_numbers() {
        let params = extract(&json!({ "marketId": "x", "regionTypeId": 2.5 }), &specs()).unwrap();
        assert!(params.query_pairs().any(|(k, v)| k == "regionTypeId" && v == "2.5"));
    }

    #[test]
    fn test_extract_ignores_undeclared_keys() {
        let params = extract(&json!({ "marketId": "en-US", "extra": "x" }), &specs()).unwrap();
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_path_value_lookup() {
        let specs = vec![
            ParameterSpec::path("countryKey", ParamKind::String, "Country"),
            ParameterSpec::query("marketId", ParamKind::String, "Market"),
        ];
        let params = extract(&json!({ "countryKey": "US", "marketId": "en-US" }), &specs).unwrap();
        assert_eq!(params.path_value("countryKey"), Some("US"));
        assert_eq!(params.path_value("marketId"), None);
        assert_eq!(params.query_pairs().count(), 1);
    }

    #[test]
    fn test_input_schema_lists_required() {
        let schema = input_schema(&specs());
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["regionTypeId"]["type"], "number");
        assert_eq!(schema["required"], json!(["marketId"]));
    }
}
