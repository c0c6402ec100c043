use crate::{input::events::MapEvent, prelude::HashMap};

/// Event listener callback type
pub type EventCallback = Box<dyn Fn(&MapEvent) + Send + Sync>;

/// Listener registry for map events, keyed by [`MapEvent::event_type`]
#[derive(Default)]
pub struct EventManager {
    listeners: HashMap<&'static str, Vec<EventCallback>>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for events of `event_type` (`"move"`, `"resize"`,
    /// `"container"`, `"layeradd"`, `"behavioradd"`)
    pub fn on<F>(&mut self, event_type: &'static str, callback: F)
    where
        F: Fn(&MapEvent) + Send + Sync + 'static,
    {
        self.listeners
            .entry(event_type)
            .or_default()
            .push(Box::new(callback));
    }

    /// Removes every listener for `event_type`
    pub fn off(&mut self, event_type: &str) {
        self.listeners.remove(event_type);
    }

    /// Calls the listeners of `event` in registration order
    pub fn emit(&self, event: &MapEvent) {
        if let Some(listeners) = self.listeners.get(event.event_type()) {
            for listener in listeners {
                listener(event);
            }
        }
    }

    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners.get(event_type).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    #[test]
    fn test_emit_reaches_matching_listeners_only() {
        let mut events = EventManager::new();
        let moves = Arc::new(AtomicUsize::new(0));
        let counter = moves.clone();
        events.on("move", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        events.emit(&MapEvent::ViewChanged {
            center: Default::default(),
            zoom: 3.0,
        });
        events.emit(&MapEvent::LayerAdd {
            layer_id: "sat".to_string(),
        });

        assert_eq!(moves.load(Ordering::SeqCst), 1);
        assert_eq!(events.listener_count("move"), 1);

        events.off("move");
        assert_eq!(events.listener_count("move"), 0);
    }
}
