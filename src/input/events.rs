use crate::core::geo::{LatLng, Point};
use serde::{Deserialize, Serialize};

/// Input events that can be handled by map behaviors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Double click/tap
    DoubleClick {
        position: Point,
        modifiers: KeyModifiers,
    },
    /// Start of drag operation
    DragStart { position: Point },
    /// Drag in progress
    Drag { delta: Point },
    /// End of drag operation
    DragEnd,
    /// Scroll wheel; positive `delta` zooms in
    Scroll { delta: f64, position: Point },
    /// Keyboard input
    KeyPress {
        key: KeyCode,
        modifiers: KeyModifiers,
    },
    /// A press on one of the compass buttons
    Compass(CompassAction),
    /// Viewport/window resize
    Resize { size: Point },
}

/// Buttons a compass control can expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassAction {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
}

impl CompassAction {
    pub fn is_pan(&self) -> bool {
        matches!(
            self,
            CompassAction::PanUp
                | CompassAction::PanDown
                | CompassAction::PanLeft
                | CompassAction::PanRight
        )
    }
}

/// Keyboard key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Plus,
    Minus,
    Other(u32),
}

/// Keyboard modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyModifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

/// Whether an event was handled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

impl EventHandled {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventHandled::Handled)
    }
}

/// Map event types that can be emitted by the map
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Map view has changed (center or zoom)
    ViewChanged { center: LatLng, zoom: f64 },
    /// Viewport was resized
    Resized { size: Point },
    /// Rendering container was bound to the map
    ContainerSet { tag: String },
    /// Layer was added to the map
    LayerAdd { layer_id: String },
    /// Behavior was added to the map
    BehaviorAdd { kind: String },
}

impl MapEvent {
    /// Listener key for this event
    pub fn event_type(&self) -> &'static str {
        match self {
            MapEvent::ViewChanged { .. } => "move",
            MapEvent::Resized { .. } => "resize",
            MapEvent::ContainerSet { .. } => "container",
            MapEvent::LayerAdd { .. } => "layeradd",
            MapEvent::BehaviorAdd { .. } => "behavioradd",
        }
    }
}
