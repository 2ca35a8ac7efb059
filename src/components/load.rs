use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    components::band::RasterBandMetadata,
    defaults::with_default,
    json::{opt_number, opt_string, JsonRepr},
};

fn default_resampling() -> String {
    "nearest".to_string()
}

fn default_true() -> bool {
    true
}

/// Parameters to apply when materializing one band into memory.
///
/// Every field is independently optional; a read-ready set is produced
/// by resolving against the band's [RasterBandMetadata], see
/// [Self::with_defaults_from].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterLoadParams {
    #[serde(default)]
    pub data_type: Option<String>,
    /// Value for nodata and out-of-bounds pixels; the band's nodata
    /// unless set.
    #[serde(default)]
    pub fill_value: Option<f64>,
    #[serde(default = "default_resampling")]
    pub resampling: String,
    #[serde(default = "default_true")]
    pub use_overviews: bool,
    #[serde(default = "default_true")]
    pub fail_on_error: bool,
}

impl Default for RasterLoadParams {
    fn default() -> Self {
        Self {
            data_type: None,
            fill_value: None,
            resampling: default_resampling(),
            use_overviews: true,
            fail_on_error: true,
        }
    }
}

impl RasterLoadParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_type(mut self, data_type: &str) -> Self {
        self.data_type = Some(data_type.to_string());
        self
    }

    pub fn with_fill_value(mut self, fill_value: f64) -> Self {
        self.fill_value = Some(fill_value);
        self
    }

    pub fn with_resampling(mut self, resampling: &str) -> Self {
        self.resampling = resampling.to_string();
        self
    }

    pub fn resolved_dtype(&self, meta: &RasterBandMetadata) -> Option<String> {
        with_default(
            self.data_type.clone(),
            meta.data_type().map(str::to_string),
            &[],
        )
    }

    pub fn resolved_fill_value(&self, meta: &RasterBandMetadata) -> Option<f64> {
        with_default(self.fill_value, meta.nodata(), &[])
    }

    /// Fully resolved copy: unset fields filled from the band metadata.
    pub fn with_defaults_from(&self, meta: &RasterBandMetadata) -> Self {
        Self {
            data_type: self.resolved_dtype(meta),
            fill_value: self.resolved_fill_value(meta),
            ..self.clone()
        }
    }
}

impl JsonRepr for RasterLoadParams {
    fn repr_json(&self) -> Map<String, Value> {
        let mut dd = Map::new();
        dd.insert("data_type".into(), opt_string(self.data_type.as_deref()));
        dd.insert("fill_value".into(), opt_number(self.fill_value));
        dd.insert("resampling".into(), Value::from(self.resampling.as_str()));
        dd.insert("use_overviews".into(), Value::from(self.use_overviews));
        dd.insert("fail_on_error".into(), Value::from(self.fail_on_error));
        dd
    }
}
