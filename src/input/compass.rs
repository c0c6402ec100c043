//! Compass control: on-screen direction and zoom buttons.
//!
//! The compass is configured by two modes. `pan` decides whether direction
//! buttons exist and how far out they sit (`none`, `short`, `long`); `zoom`
//! does the same for the zoom buttons (`none`, `small`, `big`). A compass
//! with pan `none` never moves the map center.

use crate::{
    core::{constants::KEY_PAN_STEP, geo::Point, viewport::Viewport},
    input::{
        behavior::{Behavior, BehaviorKind},
        events::{CompassAction, EventHandled, InputEvent},
    },
    MapError,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Default radius of a compass button, in pixels
const BUTTON_RADIUS: f64 = 15.0;

/// Gap between the compass and the container edge, in pixels
const EDGE_MARGIN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanMode {
    None,
    #[default]
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomMode {
    None,
    #[default]
    Small,
    Big,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompassPosition {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl fmt::Display for PanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanMode::None => write!(f, "none"),
            PanMode::Short => write!(f, "short"),
            PanMode::Long => write!(f, "long"),
        }
    }
}

impl FromStr for PanMode {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(PanMode::None),
            "short" => Ok(PanMode::Short),
            "long" => Ok(PanMode::Long),
            other => Err(MapError::ParseError(format!("unknown compass pan mode: {other}"))),
        }
    }
}

impl fmt::Display for ZoomMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoomMode::None => write!(f, "none"),
            ZoomMode::Small => write!(f, "small"),
            ZoomMode::Big => write!(f, "big"),
        }
    }
}

impl FromStr for ZoomMode {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ZoomMode::None),
            "small" => Ok(ZoomMode::Small),
            "big" => Ok(ZoomMode::Big),
            other => Err(MapError::ParseError(format!("unknown compass zoom mode: {other}"))),
        }
    }
}

impl fmt::Display for CompassPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompassPosition::TopLeft => write!(f, "top-left"),
            CompassPosition::TopRight => write!(f, "top-right"),
            CompassPosition::BottomLeft => write!(f, "bottom-left"),
            CompassPosition::BottomRight => write!(f, "bottom-right"),
        }
    }
}

impl FromStr for CompassPosition {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-left" => Ok(CompassPosition::TopLeft),
            "top-right" => Ok(CompassPosition::TopRight),
            "bottom-left" => Ok(CompassPosition::BottomLeft),
            "bottom-right" => Ok(CompassPosition::BottomRight),
            other => Err(MapError::ParseError(format!("unknown compass position: {other}"))),
        }
    }
}

/// A button placed on screen, in container pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompassButton {
    pub action: CompassAction,
    pub center: Point,
    pub radius: f64,
}

impl CompassButton {
    fn contains(&self, point: &Point) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Compass {
    pan: PanMode,
    zoom: ZoomMode,
    position: CompassPosition,
    radius: f64,
}

impl Default for Compass {
    fn default() -> Self {
        Self {
            pan: PanMode::default(),
            zoom: ZoomMode::default(),
            position: CompassPosition::default(),
            radius: BUTTON_RADIUS,
        }
    }
}

impl Compass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pan(mut self, pan: PanMode) -> Self {
        self.pan = pan;
        self
    }

    pub fn zoom(mut self, zoom: ZoomMode) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn position(mut self, position: CompassPosition) -> Self {
        self.position = position;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius.max(1.0);
        self
    }

    pub fn pan_mode(&self) -> PanMode {
        self.pan
    }

    pub fn zoom_mode(&self) -> ZoomMode {
        self.zoom
    }

    pub fn placement(&self) -> CompassPosition {
        self.position
    }

    /// Buttons laid out for a container of `size`.
    pub fn buttons(&self, size: Point) -> Vec<CompassButton> {
        let r = self.radius;
        let reach = match self.pan {
            PanMode::None => 0.0,
            PanMode::Short => 2.0 * r,
            PanMode::Long => 3.0 * r,
        };
        let spread = match self.zoom {
            ZoomMode::None => 0.0,
            ZoomMode::Small => r,
            ZoomMode::Big => 2.0 * r,
        };

        // Zoom buttons sit on the hub, so vertical pan buttons move out past them
        let mut local = Vec::new();
        if self.pan != PanMode::None {
            local.push((CompassAction::PanUp, Point::new(0.0, -(reach + spread))));
            local.push((CompassAction::PanDown, Point::new(0.0, reach + spread)));
            local.push((CompassAction::PanLeft, Point::new(-reach, 0.0)));
            local.push((CompassAction::PanRight, Point::new(reach, 0.0)));
        }
        if self.zoom != ZoomMode::None {
            local.push((CompassAction::ZoomIn, Point::new(0.0, -spread)));
            local.push((CompassAction::ZoomOut, Point::new(0.0, spread)));
        }

        // Anchor the cluster in the top-left corner, then mirror
        let min_x = local.iter().map(|(_, c)| c.x).fold(f64::INFINITY, f64::min);
        let min_y = local.iter().map(|(_, c)| c.y).fold(f64::INFINITY, f64::min);
        let offset = Point::new(EDGE_MARGIN + r - min_x, EDGE_MARGIN + r - min_y);

        local
            .into_iter()
            .map(|(action, center)| CompassButton {
                action,
                center: self.mirror(center.add(&offset), size),
                radius: r,
            })
            .collect()
    }

    /// Which button, if any, lies under `point`
    pub fn hit_test(&self, point: Point, size: Point) -> Option<CompassAction> {
        self.buttons(size)
            .into_iter()
            .find(|button| button.contains(&point))
            .map(|button| button.action)
    }

    fn mirror(&self, p: Point, size: Point) -> Point {
        match self.position {
            CompassPosition::TopLeft => p,
            CompassPosition::TopRight => Point::new(size.x - p.x, p.y),
            CompassPosition::BottomLeft => Point::new(p.x, size.y - p.y),
            CompassPosition::BottomRight => Point::new(size.x - p.x, size.y - p.y),
        }
    }
}

impl Behavior for Compass {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Compass
    }

    fn handle_input(&mut self, event: &InputEvent, viewport: &mut Viewport) -> EventHandled {
        let InputEvent::Compass(action) = event else {
            return EventHandled::NotHandled;
        };

        if action.is_pan() && self.pan == PanMode::None {
            return EventHandled::NotHandled;
        }
        if !action.is_pan() && self.zoom == ZoomMode::None {
            return EventHandled::NotHandled;
        }

        match action {
            CompassAction::PanUp => viewport.pan_by(Point::new(0.0, KEY_PAN_STEP)),
            CompassAction::PanDown => viewport.pan_by(Point::new(0.0, -KEY_PAN_STEP)),
            CompassAction::PanLeft => viewport.pan_by(Point::new(KEY_PAN_STEP, 0.0)),
            CompassAction::PanRight => viewport.pan_by(Point::new(-KEY_PAN_STEP, 0.0)),
            CompassAction::ZoomIn => viewport.zoom_by(1.0, None),
            CompassAction::ZoomOut => viewport.zoom_by(-1.0, None),
        }
        EventHandled::Handled
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "pan": self.pan.to_string(),
            "zoom": self.zoom.to_string(),
            "position": self.position.to_string(),
            "radius": self.radius,
        })
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{geo::LatLng, viewport::ZoomRange};

    fn viewport() -> Viewport {
        Viewport::new(
            LatLng::new(10.0, 20.0),
            7.0,
            Point::new(800.0, 600.0),
            ZoomRange::new(0, 9),
        )
    }

    #[test]
    fn test_modes_parse_and_display() {
        assert_eq!("none".parse::<PanMode>().unwrap(), PanMode::None);
        assert_eq!(PanMode::Long.to_string(), "long");
        assert_eq!("big".parse::<ZoomMode>().unwrap(), ZoomMode::Big);
        assert_eq!(
            "bottom-left".parse::<CompassPosition>().unwrap(),
            CompassPosition::BottomLeft
        );
        assert!(matches!(
            "sideways".parse::<PanMode>(),
            Err(MapError::ParseError(_))
        ));
    }

    #[test]
    fn test_defaults() {
        let compass = Compass::new();
        assert_eq!(compass.pan_mode(), PanMode::Short);
        assert_eq!(compass.zoom_mode(), ZoomMode::Small);
        assert_eq!(compass.placement(), CompassPosition::TopLeft);
        assert_eq!(compass.options()["pan"], "short");
    }

    #[test]
    fn test_pan_none_never_pans() {
        let mut compass = Compass::new().pan(PanMode::None);
        let mut vp = viewport();
        let before = vp.center;

        for action in [
            CompassAction::PanUp,
            CompassAction::PanDown,
            CompassAction::PanLeft,
            CompassAction::PanRight,
        ] {
            assert_eq!(
                compass.handle_input(&InputEvent::Compass(action), &mut vp),
                EventHandled::NotHandled
            );
        }
        assert_eq!(vp.center, before);

        let buttons = compass.buttons(vp.size);
        assert_eq!(buttons.len(), 2);
        assert!(buttons.iter().all(|b| !b.action.is_pan()));
    }

    #[test]
    fn test_zoom_buttons_still_work_without_pan() {
        let mut compass = Compass::new().pan(PanMode::None);
        let mut vp = viewport();

        let handled = compass.handle_input(&InputEvent::Compass(CompassAction::ZoomIn), &mut vp);
        assert_eq!(handled, EventHandled::Handled);
        assert_eq!(vp.zoom(), 8.0);
    }

    #[test]
    fn test_short_pan_moves_center() {
        let mut compass = Compass::new();
        let mut vp = viewport();
        compass.handle_input(&InputEvent::Compass(CompassAction::PanRight), &mut vp);
        assert!(vp.center.lng > 20.0);
    }

    #[test]
    fn test_zoom_none_ignores_zoom_buttons() {
        let mut compass = Compass::new().zoom(ZoomMode::None);
        let mut vp = viewport();
        let handled = compass.handle_input(&InputEvent::Compass(CompassAction::ZoomOut), &mut vp);
        assert_eq!(handled, EventHandled::NotHandled);
        assert_eq!(vp.zoom(), 7.0);
        assert_eq!(compass.buttons(vp.size).len(), 4);
    }

    #[test]
    fn test_layout_and_hit_test() {
        let size = Point::new(800.0, 600.0);
        let compass = Compass::new().pan(PanMode::Long).zoom(ZoomMode::Big);
        let buttons = compass.buttons(size);
        assert_eq!(buttons.len(), 6);

        let zoom_in = buttons
            .iter()
            .find(|b| b.action == CompassAction::ZoomIn)
            .unwrap();
        assert_eq!(compass.hit_test(zoom_in.center, size), Some(CompassAction::ZoomIn));
        assert_eq!(compass.hit_test(Point::new(790.0, 590.0), size), None);

        // Mirrored into the opposite corner
        let mirrored = compass.clone().position(CompassPosition::BottomRight);
        let moved = mirrored
            .buttons(size)
            .into_iter()
            .find(|b| b.action == CompassAction::ZoomIn)
            .unwrap();
        assert_eq!(moved.center, Point::new(size.x - zoom_in.center.x, size.y - zoom_in.center.y));
    }
}
