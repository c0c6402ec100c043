use crate::{
    core::{
        constants::{KEY_PAN_STEP, WHEEL_ZOOM_RATE},
        geo::Point,
        viewport::Viewport,
    },
    input::{
        behavior::{Behavior, BehaviorKind},
        events::{EventHandled, InputEvent, KeyCode},
    },
};

/// Generic pan/zoom interaction: drag to pan, wheel and double-click to
/// zoom around the pointer, arrow keys to pan and `+`/`-` to zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct Interact {
    drag: bool,
    wheel: bool,
    smooth_wheel: bool,
    dblclick: bool,
    keyboard: bool,
    dragging: bool,
}

impl Default for Interact {
    fn default() -> Self {
        Self {
            drag: true,
            wheel: true,
            smooth_wheel: true,
            dblclick: true,
            keyboard: true,
            dragging: false,
        }
    }
}

impl Interact {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag(mut self, enabled: bool) -> Self {
        self.drag = enabled;
        self
    }

    pub fn wheel(mut self, enabled: bool) -> Self {
        self.wheel = enabled;
        self
    }

    /// When disabled, every wheel event zooms by a whole level
    pub fn smooth_wheel(mut self, smooth: bool) -> Self {
        self.smooth_wheel = smooth;
        self
    }

    pub fn dblclick(mut self, enabled: bool) -> Self {
        self.dblclick = enabled;
        self
    }

    pub fn keyboard(mut self, enabled: bool) -> Self {
        self.keyboard = enabled;
        self
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn on_key(&self, key: KeyCode, viewport: &mut Viewport) -> EventHandled {
        match key {
            KeyCode::ArrowUp => viewport.pan_by(Point::new(0.0, KEY_PAN_STEP)),
            KeyCode::ArrowDown => viewport.pan_by(Point::new(0.0, -KEY_PAN_STEP)),
            KeyCode::ArrowLeft => viewport.pan_by(Point::new(KEY_PAN_STEP, 0.0)),
            KeyCode::ArrowRight => viewport.pan_by(Point::new(-KEY_PAN_STEP, 0.0)),
            KeyCode::Plus => viewport.zoom_by(1.0, None),
            KeyCode::Minus => viewport.zoom_by(-1.0, None),
            KeyCode::Other(_) => return EventHandled::NotHandled,
        }
        EventHandled::Handled
    }
}

impl Behavior for Interact {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Interact
    }

    fn handle_input(&mut self, event: &InputEvent, viewport: &mut Viewport) -> EventHandled {
        match event {
            InputEvent::DragStart { .. } if self.drag => {
                self.dragging = true;
                EventHandled::Handled
            }
            InputEvent::Drag { delta } if self.dragging => {
                viewport.pan_by(*delta);
                EventHandled::Handled
            }
            InputEvent::DragEnd if self.dragging => {
                self.dragging = false;
                EventHandled::Handled
            }
            InputEvent::Scroll { delta, position } if self.wheel => {
                if !delta.is_finite() || *delta == 0.0 {
                    return EventHandled::NotHandled;
                }
                let step = if self.smooth_wheel {
                    delta * WHEEL_ZOOM_RATE
                } else {
                    delta.signum()
                };
                viewport.zoom_by(step, Some(*position));
                EventHandled::Handled
            }
            InputEvent::DoubleClick {
                position,
                modifiers,
            } if self.dblclick => {
                // Snap to the next whole level in the requested direction
                let zoom = viewport.zoom();
                let target = if modifiers.shift {
                    zoom.ceil() - 1.0
                } else {
                    zoom.floor() + 1.0
                };
                viewport.zoom_to(target, Some(*position));
                EventHandled::Handled
            }
            InputEvent::KeyPress { key, modifiers }
                if self.keyboard && !(modifiers.ctrl || modifiers.alt || modifiers.meta) =>
            {
                self.on_key(*key, viewport)
            }
            _ => EventHandled::NotHandled,
        }
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "drag": self.drag,
            "wheel": self.wheel,
            "smooth_wheel": self.smooth_wheel,
            "dblclick": self.dblclick,
            "keyboard": self.keyboard,
        })
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{geo::LatLng, viewport::ZoomRange},
        input::events::{CompassAction, KeyModifiers},
    };

    fn viewport() -> Viewport {
        Viewport::new(
            LatLng::new(0.0, 0.0),
            7.0,
            Point::new(800.0, 600.0),
            ZoomRange::new(0, 9),
        )
    }

    #[test]
    fn test_drag_pans_only_while_dragging() {
        let mut interact = Interact::new();
        let mut vp = viewport();
        let drag = InputEvent::Drag {
            delta: Point::new(50.0, 0.0),
        };

        assert_eq!(interact.handle_input(&drag, &mut vp), EventHandled::NotHandled);
        assert_eq!(vp.center, LatLng::new(0.0, 0.0));

        interact.handle_input(
            &InputEvent::DragStart {
                position: Point::new(10.0, 10.0),
            },
            &mut vp,
        );
        assert!(interact.is_dragging());
        assert_eq!(interact.handle_input(&drag, &mut vp), EventHandled::Handled);
        assert!(vp.center.lng < 0.0);

        interact.handle_input(&InputEvent::DragEnd, &mut vp);
        assert!(!interact.is_dragging());
    }

    #[test]
    fn test_wheel_zoom_is_clamped() {
        let mut interact = Interact::new();
        let mut vp = viewport();
        let scroll = InputEvent::Scroll {
            delta: 120.0,
            position: Point::new(400.0, 300.0),
        };

        interact.handle_input(&scroll, &mut vp);
        assert!((vp.zoom() - 8.0).abs() < 1e-9);
        interact.handle_input(&scroll, &mut vp);
        interact.handle_input(&scroll, &mut vp);
        assert_eq!(vp.zoom(), 9.0);
    }

    #[test]
    fn test_non_finite_wheel_delta_is_not_handled() {
        let mut interact = Interact::new();
        let mut vp = viewport();

        for delta in [f64::NAN, f64::INFINITY, 0.0] {
            let scroll = InputEvent::Scroll {
                delta,
                position: Point::new(400.0, 300.0),
            };
            assert_eq!(interact.handle_input(&scroll, &mut vp), EventHandled::NotHandled);
        }
        assert_eq!(vp.zoom(), 7.0);
    }

    #[test]
    fn test_stepped_wheel() {
        let mut interact = Interact::new().smooth_wheel(false);
        let mut vp = viewport();
        interact.handle_input(
            &InputEvent::Scroll {
                delta: -3.0,
                position: Point::new(400.0, 300.0),
            },
            &mut vp,
        );
        assert_eq!(vp.zoom(), 6.0);
    }

    #[test]
    fn test_double_click_snaps_to_levels() {
        let mut interact = Interact::new();
        let mut vp = viewport();
        vp.set_zoom(6.4);
        let center = Point::new(400.0, 300.0);

        interact.handle_input(
            &InputEvent::DoubleClick {
                position: center,
                modifiers: KeyModifiers::default(),
            },
            &mut vp,
        );
        assert_eq!(vp.zoom(), 7.0);

        interact.handle_input(
            &InputEvent::DoubleClick {
                position: center,
                modifiers: KeyModifiers::shift(),
            },
            &mut vp,
        );
        assert_eq!(vp.zoom(), 6.0);
    }

    #[test]
    fn test_keyboard() {
        let mut interact = Interact::new();
        let mut vp = viewport();
        let press = |key| InputEvent::KeyPress {
            key,
            modifiers: KeyModifiers::default(),
        };

        interact.handle_input(&press(KeyCode::ArrowUp), &mut vp);
        assert!(vp.center.lat > 0.0);

        interact.handle_input(&press(KeyCode::Minus), &mut vp);
        assert_eq!(vp.zoom(), 6.0);

        assert_eq!(
            interact.handle_input(&press(KeyCode::Other(65)), &mut vp),
            EventHandled::NotHandled
        );

        let ctrl_plus = InputEvent::KeyPress {
            key: KeyCode::Plus,
            modifiers: KeyModifiers {
                ctrl: true,
                ..KeyModifiers::default()
            },
        };
        assert_eq!(interact.handle_input(&ctrl_plus, &mut vp), EventHandled::NotHandled);
        assert_eq!(vp.zoom(), 6.0);
    }

    #[test]
    fn test_disabled_features_and_foreign_events() {
        let mut interact = Interact::new().wheel(false).drag(false);
        let mut vp = viewport();

        let scroll = InputEvent::Scroll {
            delta: 120.0,
            position: Point::new(0.0, 0.0),
        };
        assert_eq!(interact.handle_input(&scroll, &mut vp), EventHandled::NotHandled);
        assert_eq!(
            interact.handle_input(
                &InputEvent::DragStart {
                    position: Point::new(0.0, 0.0)
                },
                &mut vp
            ),
            EventHandled::NotHandled
        );
        assert_eq!(
            interact.handle_input(&InputEvent::Compass(CompassAction::ZoomIn), &mut vp),
            EventHandled::NotHandled
        );
        assert_eq!(vp.zoom(), 7.0);
    }
}
