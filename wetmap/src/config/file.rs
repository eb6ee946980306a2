//! Configuration file loading.
//!
//! Loads dashboard settings from an INI file, overlaying any values found
//! onto the defaults. A missing file is not an error; a malformed value is.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use super::settings::Settings;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Failed to read or parse the config file.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Invalid configuration value.
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        /// INI section the value came from.
        section: String,
        /// Key within the section.
        key: String,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl Settings {
    /// Load settings from the default path (~/.wetmap/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&config_file_path())
    }

    /// Load settings from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let ini = Ini::load_from_file(path)?;
        parse_ini(&ini)
    }
}

/// Path to the config directory (~/.wetmap).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".wetmap")
}

/// Path to the config file (~/.wetmap/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

/// Parse an `Ini` object into `Settings`, overlaying onto defaults.
fn parse_ini(ini: &Ini) -> Result<Settings, SettingsError> {
    let mut settings = Settings::default();

    if let Some(section) = ini.section(Some("map")) {
        if let Some(v) = section.get("center_lat") {
            let lat: f64 = v
                .parse()
                .map_err(|_| invalid("map", "center_lat", v, "expected a number"))?;
            if !(-90.0..=90.0).contains(&lat) {
                return Err(invalid("map", "center_lat", v, "must be between -90 and 90"));
            }
            settings.map.center.0 = lat;
        }
        if let Some(v) = section.get("center_lon") {
            let lon: f64 = v
                .parse()
                .map_err(|_| invalid("map", "center_lon", v, "expected a number"))?;
            if !(-180.0..=180.0).contains(&lon) {
                return Err(invalid(
                    "map",
                    "center_lon",
                    v,
                    "must be between -180 and 180",
                ));
            }
            settings.map.center.1 = lon;
        }
        if let Some(v) = section.get("zoom") {
            settings.map.zoom = v
                .parse()
                .map_err(|_| invalid("map", "zoom", v, "expected an integer 0-24"))?;
        }
        if let Some(v) = section.get("basemap") {
            let v = v.trim();
            if !v.is_empty() {
                settings.map.basemap = v.to_string();
            }
        }
    }

    if let Some(section) = ini.section(Some("easements")) {
        if let Some(v) = section.get("source") {
            let v = v.trim();
            if !v.is_empty() {
                settings.easements.source = PathBuf::from(v);
            }
        }
    }

    if let Some(section) = ini.section(Some("style")) {
        if let Some(v) = section.get("base_color") {
            settings.style.base.color = parse_color("style", "base_color", v)?;
        }
        if let Some(v) = section.get("selected_color") {
            settings.style.selected.color = parse_color("style", "selected_color", v)?;
        }
        if let Some(v) = section.get("stroke_width") {
            let width: u8 = v
                .parse()
                .map_err(|_| invalid("style", "stroke_width", v, "expected an integer"))?;
            settings.style.base.width = width;
            settings.style.selected.width = width;
        }
        if let Some(v) = section.get("fill_color") {
            let fill = parse_fill("style", "fill_color", v)?;
            settings.style.base.fill_color = fill.clone();
            settings.style.selected.fill_color = fill;
        }
    }

    Ok(settings)
}

fn parse_color(section: &str, key: &str, value: &str) -> Result<String, SettingsError> {
    let v = value.trim().trim_start_matches('#').to_lowercase();
    if v.len() != 6 || !v.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid(
            section,
            key,
            value,
            "expected a 6-digit hex color like 'ff0000'",
        ));
    }
    Ok(v)
}

fn parse_fill(section: &str, key: &str, value: &str) -> Result<String, SettingsError> {
    let v = value.trim().trim_start_matches('#').to_lowercase();
    if !(v.len() == 6 || v.len() == 8) || !v.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid(
            section,
            key,
            value,
            "expected a hex color like '00000020'",
        ));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_returns_defaults() {
        let settings = Settings::load_from(Path::new("/nonexistent/wetmap.ini")).unwrap();
        assert_eq!(settings.map.center, (40.0, -100.0));
        assert_eq!(settings.map.basemap, "Esri.WorldImagery");
    }

    #[test]
    fn test_overlay_on_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wetmap.ini");
        fs::write(
            &path,
            "[map]\ncenter_lat = 44.5\ncenter_lon = -89.5\nzoom = 7\n\n\
             [easements]\nsource = data/wetlands.geojson\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.map.center, (44.5, -89.5));
        assert_eq!(settings.map.zoom, 7);
        assert_eq!(
            settings.easements.source,
            PathBuf::from("data/wetlands.geojson")
        );
        // Untouched sections keep their defaults.
        assert_eq!(settings.style.base.color, "ff0000");
    }

    #[test]
    fn test_invalid_latitude_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wetmap.ini");
        fs::write(&path, "[map]\ncenter_lat = 91\n").unwrap();

        let result = Settings::load_from(&path);
        assert!(matches!(result, Err(SettingsError::InvalidValue { .. })));
    }

    #[test]
    fn test_color_parsing_accepts_hash_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wetmap.ini");
        fs::write(&path, "[style]\nselected_color = #00FFAA\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.style.selected.color, "00ffaa");
    }

    #[test]
    fn test_bad_color_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wetmap.ini");
        fs::write(&path, "[style]\nbase_color = red\n").unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(SettingsError::InvalidValue { .. })
        ));
    }
}
