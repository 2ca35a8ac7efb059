use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::json::{number, opt_string, JsonRepr};

/// One scalar of a fixed coordinate axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl CoordValue {
    fn kind(&self) -> &'static str {
        match self {
            CoordValue::Str(_) => "str",
            CoordValue::Int(_) => "int64",
            CoordValue::Float(_) => "float64",
        }
    }
}

impl From<&str> for CoordValue {
    fn from(value: &str) -> Self {
        CoordValue::Str(value.to_string())
    }
}

impl From<i64> for CoordValue {
    fn from(value: i64) -> Self {
        CoordValue::Int(value)
    }
}

impl From<f64> for CoordValue {
    fn from(value: f64) -> Self {
        CoordValue::Float(value)
    }
}

/// Named non-spatial coordinate axis with fixed values, e.g. wavelength
/// or time-of-day bins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedCoord {
    name: String,
    values: Vec<CoordValue>,
    #[serde(default)]
    dtype: Option<String>,
    #[serde(default)]
    dim: Option<String>,
    #[serde(default)]
    units: Option<String>,
}

impl FixedCoord {
    pub fn new(name: &str, values: impl IntoIterator<Item = impl Into<CoordValue>>) -> Self {
        Self {
            name: name.to_string(),
            values: values.into_iter().map(Into::into).collect(),
            dtype: None,
            dim: None,
            units: None,
        }
    }

    pub fn with_dtype(mut self, dtype: &str) -> Self {
        self.dtype = Some(dtype.to_string());
        self
    }

    pub fn with_dim(mut self, dim: &str) -> Self {
        self.dim = Some(dim.to_string());
        self
    }

    pub fn with_units(mut self, units: &str) -> Self {
        self.units = Some(units.to_string());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dimension this coord indexes, the coord's own name unless overridden.
    pub fn dim(&self) -> &str {
        self.dim.as_deref().unwrap_or(&self.name)
    }

    /// Element type, inferred from the first value unless overridden.
    pub fn dtype(&self) -> &str {
        match &self.dtype {
            Some(dtype) => dtype,
            None => self.values.first().map(CoordValue::kind).unwrap_or("float64"),
        }
    }

    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    pub fn values(&self) -> &[CoordValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl JsonRepr for FixedCoord {
    fn repr_json(&self) -> Map<String, Value> {
        let mut dd = Map::new();
        dd.insert("name".into(), Value::from(self.name.as_str()));
        dd.insert("dim".into(), Value::from(self.dim()));
        dd.insert("dtype".into(), Value::from(self.dtype()));
        dd.insert("units".into(), opt_string(self.units()));
        let values = self
            .values
            .iter()
            .map(|value| match value {
                CoordValue::Str(s) => Value::from(s.as_str()),
                CoordValue::Int(i) => Value::from(*i),
                CoordValue::Float(f) => number(*f),
            })
            .collect::<Vec<_>>();
        dd.insert("values".into(), Value::from(values));
        dd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn dim_defaults_to_name() {
        let coord = FixedCoord::new("b", ["a", "b", "c"]);
        assert_eq!(coord.dim(), "b");
        assert_eq!(coord.len(), 3);

        let coord = FixedCoord::new("B", [1i64, 2, 3]).with_dim("b");
        assert_eq!(coord.dim(), "b");
        assert_eq!(coord.name(), "B");
    }

    #[rstest]
    #[case(FixedCoord::new("b", ["a", "b"]), "str")]
    #[case(FixedCoord::new("b", [1i64, 2]), "int64")]
    #[case(FixedCoord::new("b", [0.5f64]), "float64")]
    #[case(FixedCoord::new("b", [1i64, 2]).with_dtype("int32"), "int32")]
    fn dtype_inferred_unless_overridden(#[case] coord: FixedCoord, #[case] expected: &str) {
        assert_eq!(coord.dtype(), expected);
    }

    #[rstest]
    fn summary_lists_values_in_order() {
        let dd = FixedCoord::new("tod", ["am", "pm"]).with_units("h").repr_json();
        assert_eq!(dd["name"], json!("tod"));
        assert_eq!(dd["dim"], json!("tod"));
        assert_eq!(dd["units"], json!("h"));
        assert_eq!(dd["values"], json!(["am", "pm"]));
    }
}
