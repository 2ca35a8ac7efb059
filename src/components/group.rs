use std::{collections::HashMap, fmt};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    components::{band::RasterBandMetadata, coord::FixedCoord},
    errors::{RastermetaError, Result},
    json::JsonRepr,
};

/// Composite key naming one band of a group: band name plus 1-based
/// index within the resource it comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BandKey {
    pub name: String,
    pub band: usize,
}

impl BandKey {
    pub fn new(name: &str, band: usize) -> Self {
        Self {
            name: name.to_string(),
            band,
        }
    }
}

impl From<(&str, usize)> for BandKey {
    fn from((name, band): (&str, usize)) -> Self {
        Self::new(name, band)
    }
}

impl fmt::Display for BandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.name, self.band)
    }
}

/// Logical multi-band dataset assembled from one or more sources.
///
/// Construction never validates: alias targets and coord lengths are
/// caller contracts, checked on demand by [Self::validate] or surfaced
/// lazily by [Self::resolve_alias]. Lookups on the hot path stay free of
/// re-checks that way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RasterGroupMetadata {
    pub bands: HashMap<BandKey, RasterBandMetadata>,
    /// Alternate band name to the keys it stands for, in order. One
    /// alias may cover several bands (composites).
    pub aliases: HashMap<String, Vec<BandKey>>,
    /// Fixed non-spatial dims shared by the whole group, name to size.
    pub extra_dims: HashMap<String, usize>,
    pub extra_coords: Vec<FixedCoord>,
}

impl RasterGroupMetadata {
    pub fn new(bands: HashMap<BandKey, RasterBandMetadata>) -> Self {
        Self {
            bands,
            ..Default::default()
        }
    }

    /// Band names, sorted, without duplicates.
    pub fn band_names(&self) -> Vec<&str> {
        self.bands
            .keys()
            .map(|key| key.name.as_str())
            .unique()
            .sorted()
            .collect()
    }

    /// Bands an alias stands for, in alias order. Unknown alias is an
    /// empty answer; a dangling target is [RastermetaError::UnresolvedAlias].
    pub fn resolve_alias(&self, alias: &str) -> Result<Vec<(&BandKey, &RasterBandMetadata)>> {
        let Some(keys) = self.aliases.get(alias) else {
            return Ok(Vec::new());
        };
        keys.iter()
            .map(|key| {
                self.bands
                    .get_key_value(key)
                    .ok_or_else(|| RastermetaError::UnresolvedAlias {
                        alias: alias.to_string(),
                        key: key.clone(),
                    })
            })
            .collect()
    }

    /// Eager form of the advisory invariants: every alias target is a
    /// band, every coord indexing a declared dim matches its size.
    pub fn validate(&self) -> Result<()> {
        for (alias, keys) in self.aliases.iter().sorted_by_key(|(alias, _)| *alias) {
            for key in keys {
                if !self.bands.contains_key(key) {
                    return Err(RastermetaError::UnresolvedAlias {
                        alias: alias.clone(),
                        key: key.clone(),
                    });
                }
            }
        }
        for coord in &self.extra_coords {
            if let Some(&expected) = self.extra_dims.get(coord.dim()) {
                if coord.len() != expected {
                    return Err(RastermetaError::MismatchedCoordLength {
                        coord: coord.name().to_string(),
                        dim: coord.dim().to_string(),
                        expected,
                        got: coord.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl JsonRepr for RasterGroupMetadata {
    fn repr_json(&self) -> Map<String, Value> {
        let mut dd = Map::new();
        let bands = self
            .bands
            .iter()
            .sorted_by_key(|(key, _)| *key)
            .map(|(key, meta)| (key.to_string(), Value::Object(meta.repr_json())))
            .collect::<Map<_, _>>();
        dd.insert("bands".into(), Value::Object(bands));
        let aliases = self
            .aliases
            .iter()
            .sorted_by_key(|(alias, _)| *alias)
            .map(|(alias, keys)| {
                let keys = keys.iter().map(BandKey::to_string).collect::<Vec<_>>();
                (alias.clone(), Value::from(keys))
            })
            .collect::<Map<_, _>>();
        dd.insert("aliases".into(), Value::Object(aliases));
        let extra_dims = self
            .extra_dims
            .iter()
            .sorted_by_key(|(dim, _)| *dim)
            .map(|(dim, &size)| (dim.clone(), Value::from(size as u64)))
            .collect::<Map<_, _>>();
        dd.insert("extra_dims".into(), Value::Object(extra_dims));
        dd.insert(
            "extra_coords".into(),
            Value::from(
                self.extra_coords
                    .iter()
                    .map(|coord| Value::Object(coord.repr_json()))
                    .collect::<Vec<_>>(),
            ),
        );
        dd
    }
}
