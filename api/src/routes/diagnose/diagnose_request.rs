use serde::Deserialize;
use serde_json::Value;

/// Request payload for the diagnose endpoint.
///
/// Any JSON value deserializes; only an object's `description` is kept and
/// every other field is ignored.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct DiagnoseRequest {
    /// Free-text failure description, in whatever JSON type the client sent.
    pub description: Option<Value>,
}

impl From<Value> for DiagnoseRequest {
    fn from(body: Value) -> Self {
        let description = match body {
            Value::Object(mut map) => map.remove("description"),
            _ => None,
        };
        Self { description }
    }
}

impl DiagnoseRequest {
    /// Description coerced to text; absent or `null` becomes `""`.
    pub fn description_text(&self) -> String {
        self.description
            .as_ref()
            .map(coerce_to_text)
            .unwrap_or_default()
    }
}

/// Loose string conversion of a JSON value.
///
/// Arrays join their elements with `,`, objects render as `[object Object]`
/// and integral floats drop the fraction (`2.0` -> `2`).
pub fn coerce_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(coerce_to_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(v: Value) -> DiagnoseRequest {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn string_description() {
        let req = parse(json!({ "description": "  gotea  ", "other": 1 }));
        assert_eq!(req.description_text(), "  gotea  ");
    }

    #[test]
    fn missing_or_null_is_empty() {
        assert_eq!(parse(json!({})).description_text(), "");
        assert_eq!(parse(json!({ "description": null })).description_text(), "");
    }

    #[test]
    fn non_object_bodies_have_no_description() {
        assert_eq!(parse(json!(["no enciende"])).description_text(), "");
        assert_eq!(parse(json!("no enciende")).description_text(), "");
        assert_eq!(parse(json!(42)).description_text(), "");
        assert_eq!(parse(Value::Null).description_text(), "");
    }

    #[test]
    fn scalars_are_stringified() {
        assert_eq!(coerce_to_text(&json!(true)), "true");
        assert_eq!(coerce_to_text(&json!(7)), "7");
        assert_eq!(coerce_to_text(&json!(-3)), "-3");
        assert_eq!(coerce_to_text(&json!(2.0)), "2");
        assert_eq!(coerce_to_text(&json!(1.5)), "1.5");
    }

    #[test]
    fn arrays_and_objects() {
        assert_eq!(coerce_to_text(&json!(["no", null, 1, ["a", "b"]])), "no,,1,a,b");
        assert_eq!(coerce_to_text(&json!({ "a": 1 })), "[object Object]");
        assert_eq!(coerce_to_text(&json!([])), "");
    }
}
