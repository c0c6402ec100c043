//! Configuration for the map bootstrap
//!
//! `MapConfig::default()` reproduces the blue marble setup exactly: zoom
//! range [0, 9], zoom 7, the bluemarble tile template, an interact
//! behavior and a compass that does not pan. A JSON file can override any
//! subset of fields; missing fields keep their defaults.

use crate::{
    core::{
        constants::{
            BLUE_MARBLE_URL, BOOTSTRAP_ZOOM, BOOTSTRAP_ZOOM_RANGE, DEFAULT_MODULE,
            DEFAULT_VIEWPORT_SIZE, LIBRARY_CENTER,
        },
        geo::{LatLng, Point},
        viewport::ZoomRange,
    },
    input::compass::{CompassPosition, PanMode, ZoomMode},
    MapError, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Behaviors the bootstrapper attaches, in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BehaviorConfig {
    /// Drag, wheel, double-click and keyboard pan/zoom
    Interact,
    /// On-screen direction and zoom buttons
    Compass {
        #[serde(default)]
        pan: PanMode,
        #[serde(default)]
        zoom: ZoomMode,
        #[serde(default)]
        position: CompassPosition,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Name of the mapping library module to request
    pub module: String,
    pub zoom_range: ZoomRange,
    pub initial_zoom: f64,
    pub center: LatLng,
    /// Viewport size in pixels
    pub size: Point,
    /// Tile URL with `{Z}`, `{Y}`, `{X}` (and optionally `{B}`, `{S}`) placeholders
    pub tile_url_template: String,
    /// Hosts substituted for `{S}`
    pub tile_hosts: Vec<String>,
    pub behaviors: Vec<BehaviorConfig>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            module: DEFAULT_MODULE.to_string(),
            zoom_range: BOOTSTRAP_ZOOM_RANGE.into(),
            initial_zoom: BOOTSTRAP_ZOOM,
            center: LatLng::new(LIBRARY_CENTER.0, LIBRARY_CENTER.1),
            size: Point::new(DEFAULT_VIEWPORT_SIZE.0, DEFAULT_VIEWPORT_SIZE.1),
            tile_url_template: BLUE_MARBLE_URL.to_string(),
            tile_hosts: Vec::new(),
            behaviors: vec![
                BehaviorConfig::Interact,
                BehaviorConfig::Compass {
                    pan: PanMode::None,
                    zoom: ZoomMode::default(),
                    position: CompassPosition::default(),
                },
            ],
        }
    }
}

impl MapConfig {
    /// Parses a (possibly partial) JSON document and validates it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: MapConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded map config from {}", path.as_ref().display());
        Self::from_json_str(&contents)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let range = self.zoom_range;
        if !range.is_valid() {
            return Err(MapError::InvalidZoomRange {
                min: range.min,
                max: range.max,
            });
        }
        if !self.initial_zoom.is_finite() || !range.contains(self.initial_zoom) {
            return Err(MapError::InvalidConfig(format!(
                "initial zoom {} outside zoom range [{}, {}]",
                self.initial_zoom, range.min, range.max
            )));
        }
        if self.module.trim().is_empty() {
            return Err(MapError::InvalidConfig("module name is empty".to_string()));
        }
        if self.tile_url_template.trim().is_empty() {
            return Err(MapError::InvalidConfig(
                "tile URL template is empty".to_string(),
            ));
        }
        if self.tile_url_template.contains("{S}") && self.tile_hosts.is_empty() {
            return Err(MapError::InvalidConfig(
                "tile URL template uses {S} but no tile hosts are configured".to_string(),
            ));
        }
        if self.size.x <= 0.0 || self.size.y <= 0.0 {
            return Err(MapError::InvalidConfig(format!(
                "viewport size {}x{} must be positive",
                self.size.x, self.size.y
            )));
        }
        Ok(())
    }
}
