//! Map bootstrapper
//!
//! Runs the whole start-up sequence once: wait for the mapping library,
//! create the map and its SVG surface, apply zoom settings, add the tile
//! layer and behaviors, then signal completion.

use crate::{
    core::{
        config::{BehaviorConfig, MapConfig},
        constants::{COMPLETION_MESSAGE, SVG_TAG},
        map::Map,
    },
    dom::Document,
    library::MapLibrary,
    loader::ModuleLoader,
    MapError, Result,
};
use instant::Instant;

/// Called once with the finished map
pub type CompletionCallback = Box<dyn FnOnce(&Map) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    Uninitialized,
    Initialized,
}

pub struct Bootstrapper {
    config: MapConfig,
    state: BootstrapState,
    on_complete: Option<CompletionCallback>,
}

impl Bootstrapper {
    pub fn new(config: MapConfig) -> Self {
        Self {
            config,
            state: BootstrapState::Uninitialized,
            on_complete: None,
        }
    }

    /// Registers the completion callback, invoked after every setup step
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(&Map) + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> BootstrapState {
        self.state
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Waits for the mapping library, then builds the map into `document`.
    ///
    /// If the library cannot be loaded the document is left untouched and
    /// no completion signal is emitted.
    pub async fn run<L, D>(&mut self, loader: &L, document: &mut D) -> Result<Map>
    where
        L: ModuleLoader + ?Sized,
        D: Document + ?Sized,
    {
        if self.state == BootstrapState::Initialized {
            return Err(MapError::AlreadyInitialized);
        }
        self.config.validate()?;

        let library = loader.require(&self.config.module).await?;
        let started = Instant::now();
        let map = setup(&library, &self.config, document)?;

        self.state = BootstrapState::Initialized;
        log::debug!("map setup took {:?}", started.elapsed());
        log::info!("{}", COMPLETION_MESSAGE);
        if let Some(callback) = self.on_complete.take() {
            callback(&map);
        }
        Ok(map)
    }
}

/// Builds and configures a map from an already loaded library.
///
/// Exactly one SVG surface is appended to the document body and bound to
/// the map before anything else is configured. An invalid `config` is
/// rejected before the document is touched.
pub fn setup<D>(library: &MapLibrary, config: &MapConfig, document: &mut D) -> Result<Map>
where
    D: Document + ?Sized,
{
    config.validate()?;

    let mut map = library.map();
    let svg = library.svg(SVG_TAG);
    let container = document.append_to_body(&svg)?;
    map.set_container(container);

    map.set_zoom_range(config.zoom_range.min, config.zoom_range.max)?;
    map.set_zoom(config.initial_zoom);
    map.set_center(config.center);
    map.set_size(config.size);

    let layer = library
        .image()
        .url(config.tile_url_template.as_str())
        .with_hosts(config.tile_hosts.clone());
    map.add_layer(Box::new(layer));

    for behavior in &config.behaviors {
        match behavior {
            BehaviorConfig::Interact => map.add_behavior(Box::new(library.interact())),
            BehaviorConfig::Compass {
                pan,
                zoom,
                position,
            } => map.add_behavior(Box::new(
                library.compass().pan(*pan).zoom(*zoom).position(*position),
            )),
        }
    }

    Ok(map)
}
