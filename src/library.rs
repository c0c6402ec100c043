//! The mapping library surface the bootstrapper consumes
//!
//! A [`MapLibrary`] is what a module loader hands back once the dependency
//! is available: a set of factories for maps, SVG surfaces, tile layers
//! and behaviors.

use crate::{
    core::map::Map,
    dom::SvgElement,
    input::{Compass, Interact},
    layers::ImageLayer,
};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
pub struct MapLibrary {
    name: String,
    layer_counter: AtomicUsize,
}

impl Clone for MapLibrary {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            layer_counter: AtomicUsize::new(self.layer_counter.load(Ordering::Relaxed)),
        }
    }
}

impl MapLibrary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layer_counter: AtomicUsize::new(0),
        }
    }

    /// Module name this library was registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A new map with library defaults and no container
    pub fn map(&self) -> Map {
        Map::new()
    }

    /// An SVG element description; `tag` is usually `"svg"`
    pub fn svg(&self, tag: &str) -> SvgElement {
        SvgElement::new(tag)
    }

    /// An image tile layer with a fresh ID and no URL yet
    pub fn image(&self) -> ImageLayer {
        let n = self.layer_counter.fetch_add(1, Ordering::Relaxed);
        ImageLayer::new(format!("image-{n}"))
    }

    pub fn interact(&self) -> Interact {
        Interact::new()
    }

    pub fn compass(&self) -> Compass {
        Compass::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{input::PanMode, layers::LayerTrait};

    #[test]
    fn test_factories() {
        let library = MapLibrary::new("maps");
        assert_eq!(library.name(), "maps");
        assert_eq!(library.svg("svg").tag, "svg");
        assert_eq!(library.compass().pan_mode(), PanMode::Short);
        assert_eq!(library.map().zoom(), 1.0);
    }

    #[test]
    fn test_image_layers_get_distinct_ids() {
        let library = MapLibrary::new("maps");
        let first = library.image();
        let second = library.image();
        assert_ne!(first.id(), second.id());
        assert!(first.url_template().is_none());
    }
}
