use crate::core::{
    constants::{MAX_ZOOM, TILE_SIZE},
    geo::{LatLng, Point},
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Inclusive bounds of the zoom levels a map may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomRange {
    pub min: u8,
    pub max: u8,
}

impl ZoomRange {
    pub fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max && self.max <= MAX_ZOOM
    }

    pub fn contains(&self, zoom: f64) -> bool {
        zoom >= self.min as f64 && zoom <= self.max as f64
    }

    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min as f64, self.max as f64)
    }
}

impl From<(u8, u8)> for ZoomRange {
    fn from((min, max): (u8, u8)) -> Self {
        Self::new(min, max)
    }
}

/// Manages the current view of the map: center, zoom, and screen dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level, always inside `zoom_range`
    zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    zoom_range: ZoomRange,
}

impl Viewport {
    /// Creates a new viewport; `zoom` is clamped into `zoom_range`,
    /// a non-finite `zoom` starts at the range minimum
    pub fn new(center: LatLng, zoom: f64, size: Point, zoom_range: ZoomRange) -> Self {
        let zoom = if zoom.is_finite() { zoom } else { zoom_range.min as f64 };
        Self {
            center,
            zoom: zoom_range.clamp(zoom),
            size,
            zoom_range,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn zoom_range(&self) -> ZoomRange {
        self.zoom_range
    }

    /// Sets the zoom level, clamping to the current range.
    /// Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = self.zoom_range.clamp(zoom);
        }
    }

    /// Replaces the zoom range and re-clamps the current zoom.
    /// Callers validate `range` first.
    pub fn set_zoom_range(&mut self, range: ZoomRange) {
        self.zoom_range = range;
        self.zoom = range.clamp(self.zoom);
    }

    /// Sets the center, clamping latitude and wrapping longitude
    pub fn set_center(&mut self, center: LatLng) {
        self.center = LatLng::new(LatLng::clamp_lat(center.lat), LatLng::wrap_lng(center.lng));
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Gets the scale factor for the current zoom level
    pub fn scale(&self) -> f64 {
        2_f64.powf(self.zoom)
    }

    /// Projects a LatLng to world pixel coordinates (Web Mercator, EPSG:3857)
    pub fn project(&self, lat_lng: &LatLng, zoom: Option<f64>) -> Point {
        let world = TILE_SIZE as f64 * 2_f64.powf(zoom.unwrap_or(self.zoom));
        let lat_rad = LatLng::clamp_lat(lat_lng.lat).to_radians();

        let x = (lat_lng.lng + 180.0) / 360.0 * world;
        let y = (1.0 - (PI / 4.0 + lat_rad / 2.0).tan().ln() / PI) / 2.0 * world;

        Point::new(x, y)
    }

    /// Unprojects world pixel coordinates back to LatLng
    pub fn unproject(&self, pixel: &Point, zoom: Option<f64>) -> LatLng {
        let world = TILE_SIZE as f64 * 2_f64.powf(zoom.unwrap_or(self.zoom));

        let lng = pixel.x / world * 360.0 - 180.0;
        let n = PI * (1.0 - 2.0 * pixel.y / world);
        let lat = n.sinh().atan().to_degrees();

        LatLng::new(lat, lng)
    }

    /// Converts a geographical coordinate to container-relative pixels
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng) -> Point {
        let origin = self.top_left_world();
        self.project(lat_lng, None).subtract(&origin)
    }

    /// Converts container-relative pixels to a geographical coordinate
    pub fn pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        let origin = self.top_left_world();
        self.unproject(&origin.add(pixel), None)
    }

    /// Moves the view by a pixel delta; positive `dx` drags the map right
    pub fn pan_by(&mut self, delta: Point) {
        let center_px = self.project(&self.center, None);
        let target = center_px.subtract(&delta);
        let center = self.unproject(&target, None);
        self.set_center(center);
    }

    /// Changes zoom by `delta`, keeping the point under `around` fixed
    /// on screen. Without `around` the view center stays put.
    pub fn zoom_by(&mut self, delta: f64, around: Option<Point>) {
        if !delta.is_finite() {
            return;
        }
        let target_zoom = self.zoom_range.clamp(self.zoom + delta);
        self.zoom_to(target_zoom, around);
    }

    /// Sets zoom, keeping the point under `around` fixed on screen.
    /// Non-finite values are ignored.
    pub fn zoom_to(&mut self, zoom: f64, around: Option<Point>) {
        if !zoom.is_finite() {
            return;
        }
        let zoom = self.zoom_range.clamp(zoom);
        let Some(around) = around else {
            self.zoom = zoom;
            return;
        };

        let anchor = self.pixel_to_lat_lng(&around);
        self.zoom = zoom;
        let drift = self.lat_lng_to_pixel(&anchor).subtract(&around);
        self.pan_by(drift.multiply(-1.0));
    }

    /// Tiles covering the viewport at the rounded zoom level.
    ///
    /// Columns are returned unwrapped (they may be negative or exceed the
    /// grid near the antimeridian); rows outside the grid are skipped.
    pub fn visible_tiles(&self) -> Vec<(i64, i64, u8)> {
        let zoom = self.zoom.round().clamp(0.0, MAX_ZOOM as f64) as u8;
        let tile_size = TILE_SIZE as f64;
        let rows = 1i64 << zoom;

        // Tiles are addressed at the rounded zoom; scale the view into it
        let center = self.project(&self.center, Some(zoom as f64));
        let scale = 2_f64.powf(zoom as f64 - self.zoom);
        let half = Point::new(self.size.x / 2.0 * scale, self.size.y / 2.0 * scale);

        let min_col = ((center.x - half.x) / tile_size).floor() as i64;
        let max_col = ((center.x + half.x) / tile_size).ceil() as i64 - 1;
        let min_row = ((center.y - half.y) / tile_size).floor().max(0.0) as i64;
        let max_row = (((center.y + half.y) / tile_size).ceil() as i64 - 1).min(rows - 1);

        let mut tiles = Vec::new();
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                tiles.push((col, row, zoom));
            }
        }
        tiles
    }

    /// Container-relative pixel position of the top-left corner of an
    /// unwrapped tile addressed at `zoom`
    pub fn tile_origin(&self, column: i64, row: i64, zoom: u8) -> Point {
        let tile_size = TILE_SIZE as f64 * 2_f64.powf(self.zoom - zoom as f64);
        let world = Point::new(column as f64 * tile_size, row as f64 * tile_size);
        world.subtract(&self.top_left_world())
    }

    fn top_left_world(&self) -> Point {
        let center = self.project(&self.center, None);
        center.subtract(&Point::new(self.size.x / 2.0, self.size.y / 2.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(zoom: f64) -> Viewport {
        Viewport::new(
            LatLng::new(0.0, 0.0),
            zoom,
            Point::new(512.0, 512.0),
            ZoomRange::new(0, 9),
        )
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut vp = viewport(12.0);
        assert_eq!(vp.zoom(), 9.0);

        vp.set_zoom(-3.0);
        assert_eq!(vp.zoom(), 0.0);

        vp.set_zoom(7.0);
        vp.set_zoom_range(ZoomRange::new(0, 5));
        assert_eq!(vp.zoom(), 5.0);
    }

    #[test]
    fn test_zoom_range_validity() {
        assert!(ZoomRange::new(0, 9).is_valid());
        assert!(ZoomRange::new(4, 4).is_valid());
        assert!(!ZoomRange::new(9, 0).is_valid());
        assert!(!ZoomRange::new(0, 30).is_valid());
        assert!(ZoomRange::new(0, 9).contains(7.0));
        assert!(!ZoomRange::new(0, 9).contains(9.5));
    }

    #[test]
    fn test_project_roundtrip() {
        let vp = viewport(3.0);
        let sf = LatLng::new(37.76487, -122.41948);
        let back = vp.unproject(&vp.project(&sf, None), None);
        assert!((back.lat - sf.lat).abs() < 1e-9);
        assert!((back.lng - sf.lng).abs() < 1e-9);
    }

    #[test]
    fn test_pan_by_moves_center() {
        let mut vp = viewport(2.0);
        // Dragging the map to the right reveals what lies west
        vp.pan_by(Point::new(100.0, 0.0));
        assert!(vp.center.lng < 0.0);
        assert!(vp.center.lat.abs() < 1e-9);

        vp.pan_by(Point::new(-100.0, 0.0));
        assert!(vp.center.lng.abs() < 1e-9);
    }

    #[test]
    fn test_zoom_keeps_anchor_fixed() {
        let mut vp = viewport(3.0);
        let anchor = Point::new(400.0, 100.0);
        let before = vp.pixel_to_lat_lng(&anchor);

        vp.zoom_by(1.0, Some(anchor));
        assert_eq!(vp.zoom(), 4.0);

        let after = vp.lat_lng_to_pixel(&before);
        assert!((after.x - anchor.x).abs() < 1e-6);
        assert!((after.y - anchor.y).abs() < 1e-6);
    }

    #[test]
    fn test_visible_tiles_cover_whole_world_at_zoom_one() {
        // 512px at zoom 1 shows exactly the 2x2 world
        let vp = viewport(1.0);
        let tiles = vp.visible_tiles();
        assert_eq!(tiles.len(), 4);
        assert!(tiles.contains(&(0, 0, 1)));
        assert!(tiles.contains(&(1, 1, 1)));
    }

    #[test]
    fn test_visible_tiles_skip_rows_off_grid() {
        // At zoom 0 the world is one 256px tile; the extra height has no rows
        let vp = viewport(0.0);
        let tiles = vp.visible_tiles();
        assert!(tiles.iter().all(|&(_, row, _)| row == 0));
        assert!(tiles.iter().any(|&(col, _, _)| col < 0 || col > 0));
    }

    #[test]
    fn test_non_finite_zoom_is_ignored() {
        let mut vp = viewport(3.0);
        vp.set_zoom(f64::NAN);
        assert_eq!(vp.zoom(), 3.0);

        vp.zoom_by(f64::NAN, Some(Point::new(10.0, 10.0)));
        vp.zoom_to(f64::INFINITY, None);
        assert_eq!(vp.zoom(), 3.0);
        assert!(vp.center.lat.is_finite() && vp.center.lng.is_finite());

        let fresh = Viewport::new(LatLng::default(), f64::NAN, Point::new(1.0, 1.0), ZoomRange::new(2, 5));
        assert_eq!(fresh.zoom(), 2.0);
    }

    #[test]
    fn test_tile_origin_places_wrapped_copies_side_by_side() {
        // Zoom 0 centred on 0,0 in a 512px view: tile 0 starts at 128px
        let vp = viewport(0.0);
        assert_eq!(vp.tile_origin(0, 0, 0), Point::new(128.0, 128.0));
        assert_eq!(vp.tile_origin(-1, 0, 0), Point::new(-128.0, 128.0));
        assert_eq!(vp.tile_origin(1, 0, 0), Point::new(384.0, 128.0));
    }
}
