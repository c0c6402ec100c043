//! # georect
//!
//! Bootstraps a satellite-imagery slippy map.
//!
//! A [`Bootstrapper`] waits for a mapping library from a [`ModuleLoader`],
//! appends one SVG surface to the host document's body and binds it to a
//! new [`Map`]. It then sets the zoom range to [0, 9] and the zoom to 7,
//! adds the Blue Marble image tile layer, attaches pan/zoom interaction and
//! a compass that does not pan, and finally logs `done`.
//!
//! ```no_run
//! use georect::prelude::*;
//!
//! # async fn demo() -> georect::Result<()> {
//! let mut document = HeadlessDocument::new();
//! let map = Bootstrapper::new(MapConfig::default())
//!     .run(&StaticLoader::default(), &mut document)
//!     .await?;
//! assert_eq!(map.zoom(), 7.0);
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod core;
pub mod dom;
pub mod input;
pub mod layers;
pub mod library;
pub mod loader;
pub mod prelude;
pub mod tiles;
pub use crate::core::constants;

// Re-export public API
pub use bootstrap::{setup, BootstrapState, Bootstrapper};
pub use crate::core::{
    config::{BehaviorConfig, MapConfig},
    geo::{LatLng, Point, TileCoord},
    map::Map,
    viewport::{Viewport, ZoomRange},
};
pub use dom::{Container, Document, HeadlessDocument, SvgElement};
pub use input::{Behavior, Compass, Interact, PanMode, ZoomMode};
pub use layers::{ImageLayer, LayerTrait};
pub use library::MapLibrary;
pub use loader::{ModuleLoader, StaticLoader};
#[cfg(feature = "tokio-runtime")]
pub use loader::TimeoutLoader;

/// Installs an `env_logger` logger honouring `RUST_LOG`, defaulting to `info`
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    #[error("Failed to load module {name}: {reason}")]
    ModuleLoad { name: String, reason: String },

    #[error("Invalid zoom range: [{min}, {max}]")]
    InvalidZoomRange { min: u8, max: u8 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Map is already initialized")]
    AlreadyInitialized,

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = MapError;
