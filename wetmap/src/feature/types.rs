//! Feature and attribute types.

use std::collections::BTreeMap;
use std::fmt;

use geo::{Geometry, GeometryCollection};

/// A single attribute value on a feature.
///
/// Feature attributes are weakly typed: a field holds a string, a number,
/// or nothing. Missing and null fields render identically in the attribute
/// readout.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Field present but null.
    Null,
    /// Text value.
    Str(String),
    /// Numeric value.
    Num(f64),
}

impl AttrValue {
    /// Convert a JSON property value into an attribute value.
    ///
    /// Non-scalar values (arrays, objects) are carried as their JSON text so
    /// no property is silently dropped.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => AttrValue::Null,
            serde_json::Value::String(s) => AttrValue::Str(s.clone()),
            serde_json::Value::Number(n) => AttrValue::Num(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::Bool(b) => AttrValue::Str(b.to_string()),
            other => AttrValue::Str(other.to_string()),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => write!(f, "None"),
            AttrValue::Str(s) => write!(f, "{}", s),
            AttrValue::Num(n) => {
                // Whole numbers print without a trailing ".0" so that an
                // OBJECTID of 42 reads as "42", not "42.0".
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Num(n)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Num(n as f64)
    }
}

/// A single geometry plus attribute record within a feature collection.
#[derive(Debug, Clone)]
pub struct Feature {
    /// The feature's geometry in (lon, lat) axis order.
    pub geometry: Geometry<f64>,
    /// Attribute dictionary, keyed by field name.
    pub attributes: BTreeMap<String, AttrValue>,
}

impl Feature {
    /// Create a feature from a geometry and attribute pairs.
    pub fn new<I, K>(geometry: Geometry<f64>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, AttrValue)>,
        K: Into<String>,
    {
        Self {
            geometry,
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        }
    }

    /// Look up an attribute by field name.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }
}

/// The result of a spatial filter over a feature collection.
#[derive(Debug, Clone, Default)]
pub struct FeatureSet {
    features: Vec<Feature>,
}

impl FeatureSet {
    /// Build a feature set from matched features.
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Number of features in the set.
    pub fn size(&self) -> usize {
        self.features.len()
    }

    /// Whether the set holds no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// The first matched feature, if any.
    pub fn first(&self) -> Option<&Feature> {
        self.features.first()
    }

    /// All matched features.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// The combined geometry of the set.
    ///
    /// A single match yields its geometry directly; multiple matches are
    /// wrapped in a geometry collection.
    pub fn geometry(&self) -> Option<Geometry<f64>> {
        match self.features.len() {
            0 => None,
            1 => Some(self.features[0].geometry.clone()),
            _ => Some(Geometry::GeometryCollection(GeometryCollection(
                self.features.iter().map(|f| f.geometry.clone()).collect(),
            ))),
        }
    }
}
