//! Prelude module for common georect types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use georect::prelude::*;`

pub use crate::core::{
    config::{BehaviorConfig, MapConfig},
    constants::{BLUE_MARBLE_URL, DEFAULT_MODULE},
    geo::{LatLng, Point, TileCoord},
    map::Map,
    viewport::{Viewport, ZoomRange},
};

pub use crate::bootstrap::{setup, BootstrapState, Bootstrapper, CompletionCallback};

pub use crate::dom::{Container, Document, HeadlessDocument, SvgElement};

pub use crate::input::{
    Behavior, BehaviorKind, Compass, CompassAction, CompassPosition, EventHandled, InputEvent,
    Interact, KeyCode, KeyModifiers, MapEvent, PanMode, ZoomMode,
};

pub use crate::layers::{ImageLayer, LayerTrait, LayerType, TileRequest};

pub use crate::library::MapLibrary;

pub use crate::loader::{ModuleLoader, StaticLoader};
#[cfg(feature = "tokio-runtime")]
pub use crate::loader::TimeoutLoader;

pub use crate::tiles::{TileSource, UrlTemplate};

pub use crate::{Error as MapError, Result};

pub use fxhash::FxHashMap as HashMap;
