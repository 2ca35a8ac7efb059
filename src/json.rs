use serde_json::{Map, Value};

/// JSON-serializable summary of an entity, for inspection and debugging
/// front ends. Not a persistence format.
///
/// Key presence is part of the contract: optional fields stored on the
/// entity itself are reported as JSON null when unset, while an absent
/// optional sub-entity (no geobox, no band metadata) omits its whole
/// key group.
pub trait JsonRepr {
    fn repr_json(&self) -> Map<String, Value>;
}

/// Integral floats fold to JSON integers, non-finite floats render as
/// strings since JSON numbers cannot carry them.
pub(crate) fn number(value: f64) -> Value {
    if !value.is_finite() {
        let repr = if value.is_nan() {
            "nan"
        } else if value > 0.0 {
            "inf"
        } else {
            "-inf"
        };
        return Value::from(repr);
    }
    if value.fract() == 0.0 && value.abs() < (i64::MAX as f64) {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

pub(crate) fn opt_number(value: Option<f64>) -> Value {
    value.map(number).unwrap_or(Value::Null)
}

pub(crate) fn opt_string(value: Option<&str>) -> Value {
    value.map(Value::from).unwrap_or(Value::Null)
}
