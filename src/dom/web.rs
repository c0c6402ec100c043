//! Browser document backed by `web-sys`

use crate::{
    dom::{Container, Document, SvgElement},
    MapError, Result,
};
use wasm_bindgen::prelude::*;

fn js_error(context: &str, value: JsValue) -> MapError {
    MapError::Dom(format!("{context}: {value:?}"))
}

pub struct WebDocument {
    document: web_sys::Document,
    elements: Vec<web_sys::Element>,
}

impl WebDocument {
    /// Uses the document of the global `window`
    pub fn from_window() -> Result<Self> {
        let document = web_sys::window()
            .ok_or_else(|| MapError::Dom("no global window".to_string()))?
            .document()
            .ok_or_else(|| MapError::Dom("window has no document".to_string()))?;
        Ok(Self::new(document))
    }

    pub fn new(document: web_sys::Document) -> Self {
        Self {
            document,
            elements: Vec::new(),
        }
    }

    /// The live element behind `container`
    pub fn element(&self, container: &Container) -> Option<&web_sys::Element> {
        self.elements.get(container.id)
    }
}

impl Document for WebDocument {
    fn append_to_body(&mut self, element: &SvgElement) -> Result<Container> {
        let body = self
            .document
            .body()
            .ok_or_else(|| MapError::Dom("document has no body".to_string()))?;

        let node = self
            .document
            .create_element_ns(Some(element.namespace()), &element.tag)
            .map_err(|e| js_error("create element", e))?;
        for (name, value) in &element.attributes {
            node.set_attribute(name, value)
                .map_err(|e| js_error("set attribute", e))?;
        }
        body.append_child(&node)
            .map_err(|e| js_error("append to body", e))?;

        self.elements.push(node);
        Ok(Container {
            id: self.elements.len() - 1,
            tag: element.tag.clone(),
        })
    }

    fn body_len(&self) -> usize {
        self.elements.len()
    }
}

/// Browser entry point: bootstraps the default map into `document.body`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    use crate::{
        bootstrap::Bootstrapper,
        core::{config::MapConfig, constants::COMPLETION_MESSAGE},
        loader::StaticLoader,
    };

    console_error_panic_hook::set_once();

    wasm_bindgen_futures::spawn_local(async {
        let mut document = match WebDocument::from_window() {
            Ok(document) => document,
            Err(e) => {
                web_sys::console::error_1(&e.to_string().into());
                return;
            }
        };

        let mut bootstrapper = Bootstrapper::new(MapConfig::default())
            .on_complete(|_| web_sys::console::log_1(&COMPLETION_MESSAGE.into()));

        if let Err(e) = bootstrapper.run(&StaticLoader::default(), &mut document).await {
            web_sys::console::error_1(&e.to_string().into());
        }
    });
}
