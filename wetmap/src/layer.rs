//! Map layers and the per-map layer set.
//!
//! A layer is a named, stylable renderable added to and removed from a map's
//! layer set. Lookup is by name, and names are not guaranteed unique, so
//! find-then-remove-then-add is a best-effort convention rather than a hard
//! constraint.

use geo::Geometry;

use crate::feature::FeatureSet;
use crate::raster::{CompositeImage, ImageHandle, VisParams};

/// Stable identity of a layer within one map's layer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(u64);

/// Stroke/fill styling for a vector layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStyle {
    /// Stroke color as a hex string, e.g. "ff0000".
    pub color: String,
    /// Stroke width in pixels.
    pub width: u8,
    /// Fill color as a hex string with alpha, e.g. "00000020".
    pub fill_color: String,
}

impl LayerStyle {
    /// Build a style from stroke color, width, and fill color.
    pub fn new(color: &str, width: u8, fill_color: &str) -> Self {
        Self {
            color: color.to_string(),
            width,
            fill_color: fill_color.to_string(),
        }
    }
}

/// What a layer renders.
#[derive(Debug, Clone)]
pub enum Renderable {
    /// An externally-hosted feature collection referenced by name, drawn
    /// whole with one style.
    Collection {
        /// Stable collection name the host resolves.
        name: String,
        /// Stroke/fill styling.
        style: LayerStyle,
    },
    /// A styled set of vector features.
    Features {
        /// Features to draw.
        set: FeatureSet,
        /// Stroke/fill styling.
        style: LayerStyle,
    },
    /// A single catalog image.
    Image {
        /// The image reference.
        image: ImageHandle,
        /// Display parameters.
        vis: VisParams,
    },
    /// An ordered sequence of composite images (a time series).
    ImageSequence {
        /// Composites in time order.
        frames: Vec<CompositeImage>,
        /// Display parameters shared by all frames.
        vis: VisParams,
    },
    /// A bare geometry, e.g. user-drawn shapes.
    Shape(Geometry<f64>),
}

/// One named renderable in a map's layer set.
#[derive(Debug, Clone)]
pub struct Layer {
    id: LayerId,
    name: String,
    renderable: Renderable,
}

impl Layer {
    /// The layer's identity within its set.
    pub fn id(&self) -> LayerId {
        self.id
    }

    /// The layer's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// What the layer renders.
    pub fn renderable(&self) -> &Renderable {
        &self.renderable
    }
}

/// The ordered set of layers on one map instance.
#[derive(Debug, Default)]
pub struct LayerSet {
    layers: Vec<Layer>,
    next_id: u64,
}

impl LayerSet {
    /// Create an empty layer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer on top of the current stack, returning its identity.
    pub fn add(&mut self, name: &str, renderable: Renderable) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.push(Layer {
            id,
            name: name.to_string(),
            renderable,
        });
        id
    }

    /// Find the first layer with the given name.
    pub fn find(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Look up a layer by identity.
    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// Remove a layer by identity, returning it if present.
    pub fn remove(&mut self, id: LayerId) -> Option<Layer> {
        let index = self.layers.iter().position(|l| l.id == id)?;
        Some(self.layers.remove(index))
    }

    /// Remove the first layer with the given name, if any.
    ///
    /// Returns whether a layer was removed.
    pub fn remove_named(&mut self, name: &str) -> bool {
        match self.layers.iter().position(|l| l.name == name) {
            Some(index) => {
                self.layers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of layers in the set.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the set holds no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of layers carrying the given name.
    pub fn count_named(&self, name: &str) -> usize {
        self.layers.iter().filter(|l| l.name == name).count()
    }

    /// Layer names in stack order.
    pub fn names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::FeatureSet;

    fn feature_layer() -> Renderable {
        Renderable::Features {
            set: FeatureSet::default(),
            style: LayerStyle::new("ff0000", 2, "00000020"),
        }
    }

    #[test]
    fn test_add_and_find() {
        let mut layers = LayerSet::new();
        layers.add("Easements", feature_layer());
        assert!(layers.find("Easements").is_some());
        assert!(layers.find("Selected").is_none());
    }

    #[test]
    fn test_remove_named_first_match_only() {
        let mut layers = LayerSet::new();
        layers.add("Selected", feature_layer());
        layers.add("Selected", feature_layer());

        assert!(layers.remove_named("Selected"));
        assert_eq!(layers.count_named("Selected"), 1);
    }

    #[test]
    fn test_remove_named_absent() {
        let mut layers = LayerSet::new();
        assert!(!layers.remove_named("Selected"));
    }

    #[test]
    fn test_ids_stay_stable_after_removal() {
        let mut layers = LayerSet::new();
        let first = layers.add("A", feature_layer());
        let second = layers.add("B", feature_layer());

        layers.remove(first);
        assert!(layers.get(second).is_some());
        assert_eq!(layers.get(second).unwrap().name(), "B");
    }

    #[test]
    fn test_names_in_stack_order() {
        let mut layers = LayerSet::new();
        layers.add("Occurrence", feature_layer());
        layers.add("Easements", feature_layer());
        assert_eq!(layers.names(), vec!["Occurrence", "Easements"]);
    }
}
