use crate::{
    core::viewport::Viewport,
    input::events::{EventHandled, InputEvent},
};

/// The kinds of behavior a map knows how to host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BehaviorKind {
    Interact,
    Compass,
}

impl std::fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BehaviorKind::Interact => write!(f, "interact"),
            BehaviorKind::Compass => write!(f, "compass"),
        }
    }
}

/// Something attached to a map that reacts to user input by moving the view.
///
/// Behaviors are offered input in the order they were added; the first one
/// returning [`EventHandled::Handled`] consumes the event.
pub trait Behavior: Send + Sync {
    fn kind(&self) -> BehaviorKind;

    fn handle_input(&mut self, event: &InputEvent, viewport: &mut Viewport) -> EventHandled;

    fn options(&self) -> serde_json::Value;

    fn as_any(&self) -> &dyn std::any::Any;
}
