use crate::{
    core::geo::{Point, TileCoord},
    core::viewport::Viewport,
    Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    Image,
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerType::Image => write!(f, "image"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayerProperties {
    pub id: String,
    pub name: String,
    pub layer_type: LayerType,
    pub opacity: f32,
    pub visible: bool,
}

impl LayerProperties {
    pub fn new(id: String, name: String, layer_type: LayerType) -> Self {
        Self {
            id,
            name,
            layer_type,
            opacity: 1.0,
            visible: true,
        }
    }
}

/// A tile resolved for the current view.
///
/// When the view is wider than the world the same `coord` shows up more
/// than once; `column` keeps the unwrapped column and `offset` the
/// container-relative top-left pixel of each copy.
#[derive(Debug, Clone, PartialEq)]
pub struct TileRequest {
    pub coord: TileCoord,
    pub column: i64,
    pub offset: Point,
    pub url: String,
}

/// Anything that can be added to a map as a layer
pub trait LayerTrait: Send + Sync {
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn layer_type(&self) -> LayerType;

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    fn opacity(&self) -> f32;

    fn set_opacity(&mut self, opacity: f32);

    /// Tiles this layer would request for `viewport`; none by default
    fn tiles(&self, _viewport: &Viewport) -> Vec<TileRequest> {
        Vec::new()
    }

    fn options(&self) -> serde_json::Value;

    fn set_options(&mut self, options: serde_json::Value) -> Result<()>;

    fn as_any(&self) -> &dyn std::any::Any;
}
