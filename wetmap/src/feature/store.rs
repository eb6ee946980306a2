//! GeoJSON-backed feature store.
//!
//! Loads a feature collection from GeoJSON and answers point-containment
//! queries against it in process. The collection is immutable once loaded.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use geo::{Contains, Geometry, Point};
use geojson::GeoJson;
use thiserror::Error;
use tracing::debug;

use super::types::{AttrValue, Feature, FeatureSet};
use super::FeatureQuery;

/// Errors that can occur while loading a feature collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the source file.
    #[error("Failed to read feature collection '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The source is not valid GeoJSON.
    #[error("Failed to parse GeoJSON: {0}")]
    Parse(#[from] geojson::Error),

    /// The source parsed, but is not a FeatureCollection.
    #[error("Expected a GeoJSON FeatureCollection, found {0}")]
    NotACollection(&'static str),
}

/// An in-process feature collection with point-containment queries.
///
/// Geometries are stored in (lon, lat) axis order, matching GeoJSON and the
/// query point convention of [`crate::coord::to_query_point`].
#[derive(Debug, Clone)]
pub struct GeoJsonStore {
    name: String,
    features: Vec<Feature>,
}

impl GeoJsonStore {
    /// Load a collection from a GeoJSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "features".to_string());
        Self::from_geojson(&name, &text)
    }

    /// Parse a collection from GeoJSON text.
    pub fn from_geojson(name: &str, text: &str) -> Result<Self, StoreError> {
        let geojson = GeoJson::from_str(text)?;
        let collection = match geojson {
            GeoJson::FeatureCollection(fc) => fc,
            GeoJson::Feature(_) => return Err(StoreError::NotACollection("a single Feature")),
            GeoJson::Geometry(_) => return Err(StoreError::NotACollection("a bare Geometry")),
        };

        let mut features = Vec::with_capacity(collection.features.len());
        for gj_feature in collection.features {
            // Features without a geometry cannot match a point query; skip
            // them rather than failing the whole load.
            let Some(gj_geometry) = gj_feature.geometry else {
                debug!(collection = name, "Skipping feature without geometry");
                continue;
            };
            let geometry = Geometry::<f64>::try_from(gj_geometry)?;

            let mut attributes = BTreeMap::new();
            if let Some(properties) = gj_feature.properties {
                for (key, value) in properties {
                    attributes.insert(key, AttrValue::from_json(&value));
                }
            }
            features.push(Feature {
                geometry,
                attributes,
            });
        }

        debug!(
            collection = name,
            count = features.len(),
            "Loaded feature collection"
        );

        Ok(Self {
            name: name.to_string(),
            features,
        })
    }

    /// Number of features in the collection.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// All features in the collection.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }
}

impl FeatureQuery for GeoJsonStore {
    fn collection_name(&self) -> &str {
        &self.name
    }

    fn filter_by_point(&self, point: Point<f64>) -> FeatureSet {
        let matched: Vec<Feature> = self
            .features
            .iter()
            .filter(|f| f.geometry.contains(&point))
            .cloned()
            .collect();
        FeatureSet::new(matched)
    }
}
