use crate::core::{constants::MAX_ZOOM, geo::TileCoord};
use serde::{Deserialize, Serialize};

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;
}

/// A tile URL template with placeholder tokens.
///
/// Supported tokens:
/// - `{Z}` zoom level
/// - `{Y}` row
/// - `{X}` column
/// - `{B}` quadkey
/// - `{S}` one of `hosts`, picked by `(z + row + column) % hosts.len()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlTemplate {
    template: String,
    hosts: Vec<String>,
}

impl UrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            hosts: Vec::new(),
        }
    }

    pub fn with_hosts(mut self, hosts: Vec<String>) -> Self {
        self.hosts = hosts;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// Resolves an unwrapped tile address. Columns wrap around the world;
    /// rows outside `[0, 2^zoom)` and zooms past [`MAX_ZOOM`] give `None`.
    pub fn resolve(&self, column: i64, row: i64, zoom: u8) -> Option<String> {
        if zoom > MAX_ZOOM {
            return None;
        }
        let size = 1i64 << zoom;
        if row < 0 || row >= size {
            return None;
        }
        let column = column.rem_euclid(size);
        Some(self.url(TileCoord::new(column as u32, row as u32, zoom)))
    }

    fn host_for(&self, coord: &TileCoord) -> &str {
        if self.hosts.is_empty() {
            return "";
        }
        let idx = (coord.z as u64 + coord.y as u64 + coord.x as u64) % self.hosts.len() as u64;
        &self.hosts[idx as usize]
    }
}

impl TileSource for UrlTemplate {
    fn url(&self, coord: TileCoord) -> String {
        let mut url = self
            .template
            .replace("{Z}", &coord.z.to_string())
            .replace("{Y}", &coord.y.to_string())
            .replace("{X}", &coord.x.to_string());
        if url.contains("{B}") {
            url = url.replace("{B}", &coord.quadkey());
        }
        if url.contains("{S}") {
            url = url.replace("{S}", self.host_for(&coord));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::BLUE_MARBLE_URL;

    #[test]
    fn test_blue_marble_substitution() {
        let template = UrlTemplate::new(BLUE_MARBLE_URL);
        assert_eq!(
            template.url(TileCoord::new(3, 5, 7)),
            "http://s3.amazonaws.com/com.modestmaps.bluemarble/7-r5-c3.jpg"
        );
    }

    #[test]
    fn test_columns_wrap_and_rows_do_not() {
        let template = UrlTemplate::new("{Z}/{X}/{Y}");
        assert_eq!(template.resolve(-1, 0, 2).as_deref(), Some("2/3/0"));
        assert_eq!(template.resolve(4, 1, 2).as_deref(), Some("2/0/1"));
        assert_eq!(template.resolve(0, -1, 2), None);
        assert_eq!(template.resolve(0, 4, 2), None);
        assert_eq!(template.resolve(0, 0, MAX_ZOOM + 1), None);
        assert_eq!(template.resolve(0, 0, 64), None);
    }

    #[test]
    fn test_quadkey_and_hosts() {
        let template = UrlTemplate::new("http://{S}.tiles.test/{B}.png")
            .with_hosts(vec!["t0".to_string(), "t1".to_string(), "t2".to_string()]);
        // z + y + x = 3 + 5 + 3 = 11, 11 % 3 = 2
        assert_eq!(
            template.url(TileCoord::new(3, 5, 3)),
            "http://t2.tiles.test/213.png"
        );
    }

    #[test]
    fn test_template_without_tokens_is_kept_verbatim() {
        let template = UrlTemplate::new("http://static.test/world.jpg");
        assert_eq!(template.url(TileCoord::new(1, 1, 1)), "http://static.test/world.jpg");
    }
}
