//! Host document abstraction
//!
//! The map needs exactly one thing from its host: a body node it can append
//! an SVG surface to. [`HeadlessDocument`] keeps the appended elements in
//! memory (native runs and tests); `web::WebDocument` drives a real browser
//! document when the `wasm` feature is enabled.

#[cfg(feature = "wasm")]
pub mod web;

use crate::{core::constants::SVG_NS, Result};

/// Description of an SVG element to create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgElement {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
}

impl SvgElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn namespace(&self) -> &'static str {
        SVG_NS
    }
}

/// Handle to an element that now lives in the document body
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Container {
    /// Position among the body children appended through this document
    pub id: usize,
    pub tag: String,
}

/// A document with a body the map can render into
pub trait Document {
    /// Creates `element` and appends it as the last child of the body
    fn append_to_body(&mut self, element: &SvgElement) -> Result<Container>;

    /// Number of elements appended to the body so far
    fn body_len(&self) -> usize;
}

/// In-memory document used off the web
#[derive(Debug, Default)]
pub struct HeadlessDocument {
    body: Vec<SvgElement>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(&self) -> &[SvgElement] {
        &self.body
    }

    pub fn element(&self, container: &Container) -> Option<&SvgElement> {
        self.body
            .get(container.id)
            .filter(|element| element.tag == container.tag)
    }
}

impl Document for HeadlessDocument {
    fn append_to_body(&mut self, element: &SvgElement) -> Result<Container> {
        self.body.push(element.clone());
        log::debug!("appended <{}> to document body", element.tag);
        Ok(Container {
            id: self.body.len() - 1,
            tag: element.tag.clone(),
        })
    }

    fn body_len(&self) -> usize {
        self.body.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_append() {
        let mut document = HeadlessDocument::new();
        assert_eq!(document.body_len(), 0);

        let svg = SvgElement::new("svg").attr("class", "map");
        let container = document.append_to_body(&svg).unwrap();

        assert_eq!(container, Container { id: 0, tag: "svg".to_string() });
        assert_eq!(document.body_len(), 1);
        assert_eq!(document.element(&container), Some(&svg));
        assert_eq!(svg.namespace(), "http://www.w3.org/2000/svg");
    }

    #[test]
    fn test_element_lookup_checks_tag() {
        let mut document = HeadlessDocument::new();
        document.append_to_body(&SvgElement::new("svg")).unwrap();
        let stale = Container {
            id: 0,
            tag: "g".to_string(),
        };
        assert!(document.element(&stale).is_none());
    }
}
