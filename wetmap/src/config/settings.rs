//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file. These are
//! pure data types; parsing lives in [`super::file`].

use std::path::PathBuf;

use super::defaults;
use crate::layer::LayerStyle;

/// Complete dashboard configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Map defaults shared by every page.
    pub map: MapSettings,
    /// Easement collection source.
    pub easements: EasementSettings,
    /// Layer styling.
    pub style: StyleSettings,
}

/// Map configuration.
#[derive(Debug, Clone)]
pub struct MapSettings {
    /// Initial center as (lat, lon).
    pub center: (f64, f64),
    /// Initial zoom level.
    pub zoom: u8,
    /// Basemap name.
    pub basemap: String,
}

/// Easement collection configuration.
#[derive(Debug, Clone)]
pub struct EasementSettings {
    /// Path of the GeoJSON collection.
    pub source: PathBuf,
}

/// Layer style configuration.
#[derive(Debug, Clone)]
pub struct StyleSettings {
    /// Style of the easement base layer.
    pub base: LayerStyle,
    /// Style of the selection highlight layer.
    pub selected: LayerStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            map: MapSettings {
                center: defaults::DEFAULT_CENTER,
                zoom: defaults::DEFAULT_ZOOM,
                basemap: defaults::DEFAULT_BASEMAP.to_string(),
            },
            easements: EasementSettings {
                source: PathBuf::from(defaults::DEFAULT_EASEMENTS_SOURCE),
            },
            style: StyleSettings {
                base: defaults::easement_style(),
                selected: defaults::selected_style(),
            },
        }
    }
}
