use log::info;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    components::{band::RasterBandMetadata, geobox::GeoBox},
    errors::{RastermetaError, Result},
    json::{opt_string, JsonRepr},
};

/// Locates one band's pixel data and carries whatever is already known
/// about it.
///
/// `uri` is the durable identity of the source in log lines and errors.
/// `subdataset` and `band` together select a unique pixel plane within
/// the addressed resource. No constructor here touches the filesystem;
/// opening the uri is the loading engine's business.
// no Deserialize: deserializing would sidestep the uri validation in `new`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RasterSource {
    uri: String,
    subdataset: Option<String>,
    band: usize,
    meta: Option<RasterBandMetadata>,
    geobox: Option<GeoBox>,
}

impl RasterSource {
    pub fn new(uri: &str) -> Result<Self> {
        if uri.trim().is_empty() {
            return Err(RastermetaError::InvalidSource {
                field: "uri",
                reason: "empty locator".to_string(),
            });
        }
        if uri.chars().any(char::is_control) {
            return Err(RastermetaError::InvalidSource {
                field: "uri",
                reason: format!("control character in locator {uri:?}"),
            });
        }
        let source = Self {
            uri: uri.to_string(),
            subdataset: None,
            band: 1,
            meta: None,
            geobox: None,
        };
        info!("new {source:?}");
        Ok(source)
    }

    pub fn with_subdataset(mut self, subdataset: &str) -> Self {
        self.subdataset = Some(subdataset.to_string());
        self
    }

    pub fn with_band(mut self, band: usize) -> Self {
        self.band = band;
        self
    }

    pub fn with_meta(mut self, meta: RasterBandMetadata) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn with_geobox(mut self, geobox: GeoBox) -> Self {
        self.geobox = Some(geobox);
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn subdataset(&self) -> Option<&str> {
        self.subdataset.as_deref()
    }

    /// 1-based band index within the addressed resource.
    pub fn band(&self) -> usize {
        self.band
    }

    pub fn meta(&self) -> Option<&RasterBandMetadata> {
        self.meta.as_ref()
    }

    pub fn geobox(&self) -> Option<&GeoBox> {
        self.geobox.as_ref()
    }

    /// Band metadata for this source with unset fields filled from a
    /// group-level fallback.
    pub fn patched_meta(&self, fallback: &RasterBandMetadata) -> RasterBandMetadata {
        match &self.meta {
            Some(meta) => meta.with_defaults_from(fallback),
            None => fallback.clone(),
        }
    }
}

impl JsonRepr for RasterSource {
    fn repr_json(&self) -> Map<String, Value> {
        let mut dd = Map::new();
        dd.insert("uri".into(), Value::from(self.uri.as_str()));
        dd.insert("subdataset".into(), opt_string(self.subdataset()));
        dd.insert("band".into(), Value::from(self.band as u64));
        if let Some(meta) = &self.meta {
            dd.extend(meta.repr_json());
        }
        if let Some(geobox) = &self.geobox {
            dd.extend(geobox.repr_json());
        }
        dd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RastermetaError;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("file:///tmp/\0x.tif")]
    fn rejects_implausible_uri(#[case] uri: &str) {
        match RasterSource::new(uri) {
            Err(RastermetaError::InvalidSource { field, .. }) => assert_eq!(field, "uri"),
            other => panic!("expected InvalidSource, got {other:?}"),
        }
    }

    #[test_log::test]
    fn defaults_to_first_band() {
        let source = RasterSource::new("file:///tmp/x.tif").unwrap();
        assert_eq!(source.uri(), "file:///tmp/x.tif");
        assert_eq!(source.band(), 1);
        assert_eq!(source.subdataset(), None);
        assert!(source.meta().is_none());
        assert!(source.geobox().is_none());
    }

    #[rstest]
    fn meta_keys_mirror_band_metadata() {
        let source = RasterSource::new("x")
            .unwrap()
            .with_meta(RasterBandMetadata::new(Some("float32"), Some(-9999.0)));
        let dd = source.repr_json();
        assert_eq!(dd["data_type"], json!("float32"));
        assert_eq!(dd["nodata"], json!(-9999));
        assert!(!dd.contains_key("crs"));
        assert!(!dd.contains_key("transform"));
        assert!(!dd.contains_key("shape"));
    }

    #[rstest]
    fn geobox_keys_mirror_descriptor() {
        let gbox = GeoBox::new(
            "EPSG:4326",
            (200, 605),
            [0.33, 0.0, 103.0, 0.0, -0.165, -11.0],
        );
        let source = RasterSource::new("x").unwrap().with_geobox(gbox.clone());
        let dd = source.repr_json();
        assert_eq!(dd["crs"], json!("EPSG:4326"));
        assert_eq!(dd["shape"], json!([200, 605]));
        assert_eq!(dd["transform"], json!([0.33, 0, 103, 0, -0.165, -11]));
        assert!(!dd.contains_key("data_type"));
        assert!(!dd.contains_key("nodata"));
    }

    #[rstest]
    fn subdataset_reported_as_null_when_unset() {
        let dd = RasterSource::new("file:///tmp/x.nc").unwrap().repr_json();
        assert_eq!(dd["subdataset"], Value::Null);
        let dd = RasterSource::new("file:///tmp/x.nc")
            .unwrap()
            .with_subdataset("x")
            .repr_json();
        assert_eq!(dd["subdataset"], json!("x"));
    }

    #[rstest]
    fn patched_meta_prefers_source_fields() {
        let group = RasterBandMetadata::new(Some("uint16"), Some(0.0)).with_units("K");
        let source = RasterSource::new("x")
            .unwrap()
            .with_meta(RasterBandMetadata::new(None, Some(-9999.0)));
        let merged = source.patched_meta(&group);
        assert_eq!(merged.data_type(), Some("uint16"));
        assert_eq!(merged.nodata(), Some(-9999.0));
        assert_eq!(merged.units(), "K");

        let bare = RasterSource::new("x").unwrap();
        assert_eq!(bare.patched_meta(&group), group);
    }
}
