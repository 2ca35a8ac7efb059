use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::json::{number, JsonRepr};

/// Narrow view over a raster's spatial referencing.
///
/// The geometry math behind these three facts lives outside this crate;
/// here they are only read and re-exported in summaries.
pub trait GridDescriptor {
    fn crs(&self) -> &str;
    /// Pixel shape as (rows, cols).
    fn shape(&self) -> (usize, usize);
    /// Row-major [a, b, c, d, e, f] mapping pixel coords to CRS coords,
    /// translation last in each row.
    fn transform(&self) -> [f64; 6];
}

/// Value form of [GridDescriptor], stored by entities whose native grid
/// is already known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoBox {
    crs: String,
    shape: (usize, usize),
    transform: [f64; 6],
}

impl GeoBox {
    pub fn new(crs: &str, shape: (usize, usize), transform: [f64; 6]) -> Self {
        Self {
            crs: crs.to_string(),
            shape,
            transform,
        }
    }

    pub fn from_descriptor(descriptor: &impl GridDescriptor) -> Self {
        Self {
            crs: descriptor.crs().to_string(),
            shape: descriptor.shape(),
            transform: descriptor.transform(),
        }
    }
}

impl GridDescriptor for GeoBox {
    fn crs(&self) -> &str {
        &self.crs
    }

    fn shape(&self) -> (usize, usize) {
        self.shape
    }

    fn transform(&self) -> [f64; 6] {
        self.transform
    }
}

impl JsonRepr for GeoBox {
    fn repr_json(&self) -> Map<String, Value> {
        let mut dd = Map::new();
        dd.insert("crs".into(), Value::from(self.crs.as_str()));
        dd.insert(
            "transform".into(),
            Value::from(self.transform.iter().copied().map(number).collect::<Vec<_>>()),
        );
        let (rows, cols) = self.shape;
        dd.insert("shape".into(), Value::from(vec![rows as u64, cols as u64]));
        dd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct FileHeaders;

    impl GridDescriptor for FileHeaders {
        fn crs(&self) -> &str {
            "EPSG:3857"
        }
        fn shape(&self) -> (usize, usize) {
            (256, 512)
        }
        fn transform(&self) -> [f64; 6] {
            [10.0, 0.0, 100.0, 0.0, -10.0, 200.0]
        }
    }

    #[rstest]
    fn from_descriptor_copies_all_three_facts() {
        let gbox = GeoBox::from_descriptor(&FileHeaders);
        assert_eq!(gbox.crs(), "EPSG:3857");
        assert_eq!(gbox.shape(), (256, 512));
        assert_eq!(gbox.transform(), [10.0, 0.0, 100.0, 0.0, -10.0, 200.0]);
    }

    #[rstest]
    fn summary_mirrors_descriptor() {
        let dd = GeoBox::from_descriptor(&FileHeaders).repr_json();
        assert_eq!(dd["crs"], serde_json::json!("EPSG:3857"));
        assert_eq!(dd["shape"], serde_json::json!([256, 512]));
        assert_eq!(dd["transform"], serde_json::json!([10, 0, 100, 0, -10, 200]));
    }
}
