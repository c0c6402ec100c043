//! Core constants shared by the map, its layers and the bootstrapper.
//! Library defaults mirror the classic SVG slippy-map conventions.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Highest zoom level any range may reach.
pub const MAX_ZOOM: u8 = 18;

/// Symbolic name the bootstrapper requests from its module loader.
pub const DEFAULT_MODULE: &str = "polymaps-v2.5.1";

/// Blue Marble satellite imagery, addressed as `{Z}-r{Y}-c{X}`.
pub const BLUE_MARBLE_URL: &str =
    "http://s3.amazonaws.com/com.modestmaps.bluemarble/{Z}-r{Y}-c{X}.jpg";

/// Zoom range applied by the bootstrapper.
pub const BOOTSTRAP_ZOOM_RANGE: (u8, u8) = (0, 9);

/// Zoom level applied by the bootstrapper.
pub const BOOTSTRAP_ZOOM: f64 = 7.0;

/// Zoom range of a freshly created map.
pub const LIBRARY_ZOOM_RANGE: (u8, u8) = (1, 18);

/// Zoom level of a freshly created map.
pub const LIBRARY_ZOOM: f64 = 1.0;

/// Center of a freshly created map (lat, lng).
pub const LIBRARY_CENTER: (f64, f64) = (37.76487, -122.41948);

/// Viewport size used when the host does not report one.
pub const DEFAULT_VIEWPORT_SIZE: (f64, f64) = (1024.0, 768.0);

/// Pixels panned per arrow key press or compass button press.
pub const KEY_PAN_STEP: f64 = 16.0;

/// Zoom levels per unit of wheel delta.
pub const WHEEL_ZOOM_RATE: f64 = 1.0 / 120.0;

/// Tag name of the rendering surface element.
pub const SVG_TAG: &str = "svg";

/// XML namespace for SVG elements.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Log line marking a finished bootstrap.
pub const COMPLETION_MESSAGE: &str = "done";
