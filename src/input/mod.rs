pub mod behavior;
pub mod compass;
pub mod events;
pub mod handler;
pub mod interact;

// Re-export the essential types
pub use behavior::{Behavior, BehaviorKind};
pub use compass::{Compass, CompassButton, CompassPosition, PanMode, ZoomMode};
pub use events::{
    CompassAction, EventHandled, InputEvent, KeyCode, KeyModifiers, MapEvent,
};
pub use handler::{EventCallback, EventManager};
pub use interact::Interact;
