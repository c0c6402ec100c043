use crate::{
    core::{geo::TileCoord, viewport::Viewport},
    layers::base::{LayerProperties, LayerTrait, LayerType, TileRequest},
    tiles::source::UrlTemplate,
    MapError, Result,
};

/// Raster tile layer whose tiles come from a URL template.
///
/// The layer only resolves tile addresses; fetching and drawing the
/// images is left to whatever hosts the map.
pub struct ImageLayer {
    properties: LayerProperties,
    template: Option<UrlTemplate>,
    hosts: Vec<String>,
}

impl ImageLayer {
    pub fn new(id: impl Into<String>) -> Self {
        let properties = LayerProperties::new(id.into(), "Image Layer".to_string(), LayerType::Image);
        Self {
            properties,
            template: None,
            hosts: Vec::new(),
        }
    }

    /// Sets the tile URL template (`{Z}`, `{Y}`, `{X}`, `{B}`, `{S}`)
    pub fn url(mut self, template: impl Into<String>) -> Self {
        self.set_url(template);
        self
    }

    /// Sets the hosts substituted for `{S}`
    pub fn with_hosts(mut self, hosts: Vec<String>) -> Self {
        self.set_hosts(hosts);
        self
    }

    pub fn set_url(&mut self, template: impl Into<String>) {
        self.template = Some(UrlTemplate::new(template).with_hosts(self.hosts.clone()));
    }

    pub fn set_hosts(&mut self, hosts: Vec<String>) {
        self.template = self.template.take().map(|t| t.with_hosts(hosts.clone()));
        self.hosts = hosts;
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn template(&self) -> Option<&UrlTemplate> {
        self.template.as_ref()
    }

    /// The raw template string, if one was set
    pub fn url_template(&self) -> Option<&str> {
        self.template.as_ref().map(|t| t.template())
    }
}

impl LayerTrait for ImageLayer {
    crate::impl_layer_properties!(properties);

    fn tiles(&self, viewport: &Viewport) -> Vec<TileRequest> {
        let Some(template) = &self.template else {
            return Vec::new();
        };
        if !self.properties.visible {
            return Vec::new();
        }

        viewport
            .visible_tiles()
            .into_iter()
            .filter_map(|(column, row, zoom)| {
                let url = template.resolve(column, row, zoom)?;
                let size = 1i64 << zoom;
                let coord = TileCoord::new(column.rem_euclid(size) as u32, row as u32, zoom);
                Some(TileRequest {
                    coord,
                    column,
                    offset: viewport.tile_origin(column, row, zoom),
                    url,
                })
            })
            .collect()
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "url": self.url_template(),
            "hosts": self.hosts(),
            "opacity": self.properties.opacity,
            "visible": self.properties.visible,
        })
    }

    fn set_options(&mut self, options: serde_json::Value) -> Result<()> {
        let object = options
            .as_object()
            .ok_or_else(|| MapError::Layer("image layer options must be an object".to_string()))?;

        if let Some(hosts) = object.get("hosts") {
            let hosts: Vec<String> = serde_json::from_value(hosts.clone())?;
            self.set_hosts(hosts);
        }
        if let Some(url) = object.get("url").and_then(|v| v.as_str()) {
            self.set_url(url);
        }
        if let Some(opacity) = object.get("opacity").and_then(|v| v.as_f64()) {
            self.set_opacity(opacity as f32);
        }
        if let Some(visible) = object.get("visible").and_then(|v| v.as_bool()) {
            self.set_visible(visible);
        }
        Ok(())
    }
}
