use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    defaults::with_default,
    json::{opt_number, opt_string, JsonRepr},
};

const DIMENSIONLESS: &str = "1";

/// Static description of one band's numeric semantics.
///
/// `units` has a single stored field and a normalizing accessor: the
/// empty string means "unset" and is observed as `"1"` (dimensionless),
/// so the external form is never empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RasterBandMetadata {
    #[serde(default)]
    data_type: Option<String>,
    #[serde(default)]
    nodata: Option<f64>,
    #[serde(default)]
    units: String,
    /// Names of extra non-spatial dims this band spans, if any.
    #[serde(default)]
    dims: Vec<String>,
}

impl RasterBandMetadata {
    pub fn new(data_type: Option<&str>, nodata: Option<f64>) -> Self {
        Self {
            data_type: data_type.map(str::to_string),
            nodata,
            ..Default::default()
        }
    }

    pub fn with_units(mut self, units: &str) -> Self {
        self.units = units.to_string();
        self
    }

    pub fn with_dims(mut self, dims: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.dims = dims.into_iter().map(Into::into).collect();
        self
    }

    pub fn data_type(&self) -> Option<&str> {
        self.data_type.as_deref()
    }

    /// Alias of [Self::data_type].
    pub fn dtype(&self) -> Option<&str> {
        self.data_type()
    }

    pub fn nodata(&self) -> Option<f64> {
        self.nodata
    }

    pub fn units(&self) -> &str {
        if self.units.is_empty() {
            DIMENSIONLESS
        } else {
            &self.units
        }
    }

    /// Alias of [Self::units].
    pub fn unit(&self) -> &str {
        self.units()
    }

    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    /// Fill unset fields from `fallback`. `"1"` units and an empty dim
    /// list count as unset.
    pub fn with_defaults_from(&self, fallback: &Self) -> Self {
        let unit_skip = [DIMENSIONLESS.to_string()];
        let dims_skip = [Vec::new()];
        Self {
            data_type: with_default(self.data_type.clone(), fallback.data_type.clone(), &[]),
            nodata: with_default(self.nodata, fallback.nodata, &[]),
            units: with_default(
                Some(self.units().to_string()),
                Some(fallback.units().to_string()),
                &unit_skip,
            )
            .unwrap_or_else(|| DIMENSIONLESS.to_string()),
            dims: with_default(Some(self.dims.clone()), Some(fallback.dims.clone()), &dims_skip)
                .unwrap_or_default(),
        }
    }
}

impl JsonRepr for RasterBandMetadata {
    fn repr_json(&self) -> Map<String, Value> {
        let mut dd = Map::new();
        dd.insert("data_type".into(), opt_string(self.data_type()));
        dd.insert("nodata".into(), opt_number(self.nodata));
        dd.insert("units".into(), Value::from(self.units()));
        dd.insert(
            "dims".into(),
            Value::from(self.dims.iter().map(String::as_str).collect::<Vec<_>>()),
        );
        dd
    }
}
