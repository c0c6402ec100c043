use crate::{
    core::{
        constants::{DEFAULT_VIEWPORT_SIZE, LIBRARY_CENTER, LIBRARY_ZOOM, LIBRARY_ZOOM_RANGE},
        geo::{LatLng, Point},
        viewport::{Viewport, ZoomRange},
    },
    dom::Container,
    input::{Behavior, EventHandled, EventManager, InputEvent, MapEvent},
    layers::base::{LayerTrait, TileRequest},
    MapError, Result,
};

/// A map instance: a rendering container, a view, layers and behaviors.
///
/// A fresh map uses the library defaults (zoom range [1, 18], zoom 1).
/// Zoom is always clamped into the current zoom range.
pub struct Map {
    viewport: Viewport,
    container: Option<Container>,
    layers: Vec<Box<dyn LayerTrait>>,
    behaviors: Vec<Box<dyn Behavior>>,
    events: EventManager,
}

impl std::fmt::Debug for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("viewport", &self.viewport)
            .field("container", &self.container)
            .field("layers", &self.layers.len())
            .field("behaviors", &self.behaviors.len())
            .finish_non_exhaustive()
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

impl Map {
    pub fn new() -> Self {
        let viewport = Viewport::new(
            LatLng::new(LIBRARY_CENTER.0, LIBRARY_CENTER.1),
            LIBRARY_ZOOM,
            Point::new(DEFAULT_VIEWPORT_SIZE.0, DEFAULT_VIEWPORT_SIZE.1),
            LIBRARY_ZOOM_RANGE.into(),
        );
        Self::with_viewport(viewport)
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            container: None,
            layers: Vec::new(),
            behaviors: Vec::new(),
            events: EventManager::new(),
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Binds the rendering container
    pub fn set_container(&mut self, container: Container) {
        log::debug!("map container bound to <{}> #{}", container.tag, container.id);
        let tag = container.tag.clone();
        self.container = Some(container);
        self.events.emit(&MapEvent::ContainerSet { tag });
    }

    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    /// Replaces the zoom range; the current zoom is clamped into it
    pub fn set_zoom_range(&mut self, min: u8, max: u8) -> Result<()> {
        let range = ZoomRange::new(min, max);
        if !range.is_valid() {
            return Err(MapError::InvalidZoomRange { min, max });
        }
        let before = self.viewport.zoom();
        self.viewport.set_zoom_range(range);
        if self.viewport.zoom() != before {
            self.emit_move();
        }
        Ok(())
    }

    pub fn zoom_range(&self) -> ZoomRange {
        self.viewport.zoom_range()
    }

    /// Sets the zoom, clamped into the zoom range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.viewport.set_zoom(zoom);
        self.emit_move();
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    pub fn set_center(&mut self, center: LatLng) {
        self.viewport.set_center(center);
        self.emit_move();
    }

    pub fn center(&self) -> LatLng {
        self.viewport.center
    }

    pub fn set_size(&mut self, size: Point) {
        self.viewport.set_size(size);
        self.events.emit(&MapEvent::Resized { size });
    }

    pub fn size(&self) -> Point {
        self.viewport.size
    }

    pub fn pan_by(&mut self, delta: Point) {
        self.viewport.pan_by(delta);
        self.emit_move();
    }

    pub fn zoom_by(&mut self, delta: f64, around: Option<Point>) {
        self.viewport.zoom_by(delta, around);
        self.emit_move();
    }

    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) {
        log::debug!("adding {} layer '{}'", layer.layer_type(), layer.id());
        let layer_id = layer.id().to_string();
        self.layers.push(layer);
        self.events.emit(&MapEvent::LayerAdd { layer_id });
    }

    pub fn layers(&self) -> &[Box<dyn LayerTrait>] {
        &self.layers
    }

    /// Gets a layer by ID
    pub fn layer(&self, layer_id: &str) -> Option<&dyn LayerTrait> {
        self.layers
            .iter()
            .find(|layer| layer.id() == layer_id)
            .map(|layer| layer.as_ref())
    }

    pub fn add_behavior(&mut self, behavior: Box<dyn Behavior>) {
        let kind = behavior.kind().to_string();
        log::debug!("adding {} behavior", kind);
        self.behaviors.push(behavior);
        self.events.emit(&MapEvent::BehaviorAdd { kind });
    }

    pub fn behaviors(&self) -> &[Box<dyn Behavior>] {
        &self.behaviors
    }

    /// Registers a listener; see [`EventManager::on`] for event types
    pub fn on<F>(&mut self, event_type: &'static str, callback: F)
    where
        F: Fn(&MapEvent) + Send + Sync + 'static,
    {
        self.events.on(event_type, callback);
    }

    /// Offers `event` to the behaviors in attachment order
    pub fn handle_input(&mut self, event: &InputEvent) -> EventHandled {
        if let InputEvent::Resize { size } = event {
            self.set_size(*size);
            return EventHandled::Handled;
        }

        let before = (self.viewport.center, self.viewport.zoom());
        let handled = self
            .behaviors
            .iter_mut()
            .map(|behavior| behavior.handle_input(event, &mut self.viewport))
            .find(EventHandled::is_handled)
            .unwrap_or(EventHandled::NotHandled);

        if (self.viewport.center, self.viewport.zoom()) != before {
            self.emit_move();
        }
        handled
    }

    /// Tiles every visible layer needs for the current view
    pub fn visible_tiles(&self) -> Vec<TileRequest> {
        self.layers
            .iter()
            .filter(|layer| layer.is_visible())
            .flat_map(|layer| layer.tiles(&self.viewport))
            .collect()
    }

    fn emit_move(&self) {
        self.events.emit(&MapEvent::ViewChanged {
            center: self.viewport.center,
            zoom: self.viewport.zoom(),
        });
    }
}
