//! Value predicates for replacement resolution
//!
//! Replacement values flow through the engine as `serde_json::Value`. These
//! predicates classify a resolved value before substitution:
//! - only primitive scalars are substituted into a template
//! - `None` (absent) and `Value::Null` (explicitly empty) both leave the
//!   placeholder untouched

use serde_json::Value;

/// A primitive scalar: null, bool, number, or string.
pub fn is_primitive(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

/// A value was supplied at all.
pub fn is_defined(value: Option<&Value>) -> bool {
    value.is_some()
}

/// A value was supplied and is a primitive scalar.
pub fn is_defined_primitive(value: Option<&Value>) -> bool {
    matches!(value, Some(v) if is_primitive(v))
}

/// A value was supplied and is not the explicit null marker.
pub fn is_non_nullable(value: Option<&Value>) -> bool {
    matches!(value, Some(v) if !v.is_null())
}

/// Thunk that always yields a clone of `value`.
pub fn constant<T: Clone>(value: T) -> impl Fn() -> T {
    move || value.clone()
}

/// String form of a value for substitution: strings render bare (no JSON
/// quoting), every other variant through its JSON string form.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
