//! Host-independent input events.
//!
//! The host (a browser, a native window, a test) translates its own events
//! into these types before handing them to the controllers or the
//! [`Workspace`](crate::Workspace).

use corkboard_core::geometry::Point;

/// The pointer button that triggered an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
    Other(u16),
}

impl From<u16> for PointerButton {
    /// Maps DOM-style button ids: 0 primary, 1 middle, 2 secondary.
    fn from(id: u16) -> Self {
        match id {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// Keyboard modifiers held while the event happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Only shift held.
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

/// A pointer press or move, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    position: Point,
    button: PointerButton,
    modifiers: Modifiers,
}

impl PointerEvent {
    /// A primary-button event without modifiers.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn button(&self) -> PointerButton {
        self.button
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

/// A wheel tick at a screen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    position: Point,
    delta: f32,
}

impl WheelEvent {
    /// Positive `delta` zooms in, negative zooms out.
    pub fn new(position: Point, delta: f32) -> Self {
        Self { position, delta }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }
}

/// Direction of a zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Direction for a wheel delta; `None` for a zero (or NaN) delta.
    pub fn from_delta(delta: f32) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::In)
        } else if delta < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

/// Whether the host should keep processing an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// The event was handled: suppress default behavior and stop propagation.
    Consumed,
    /// The event was not relevant here.
    Ignored,
}

impl EventResponse {
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_from_id() {
        assert_eq!(PointerButton::from(0), PointerButton::Primary);
        assert_eq!(PointerButton::from(1), PointerButton::Middle);
        assert_eq!(PointerButton::from(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from(4), PointerButton::Other(4));
    }

    #[test]
    fn test_zoom_direction_from_delta() {
        assert_eq!(ZoomDirection::from_delta(120.0), Some(ZoomDirection::In));
        assert_eq!(ZoomDirection::from_delta(-3.0), Some(ZoomDirection::Out));
        assert_eq!(ZoomDirection::from_delta(0.0), None);
        assert_eq!(ZoomDirection::from_delta(f32::NAN), None);
    }

    #[test]
    fn test_pointer_event_builders() {
        let event = PointerEvent::new(Point::new(1.0, 2.0))
            .with_button(PointerButton::Middle)
            .with_modifiers(Modifiers::shift());

        assert_eq!(event.position(), Point::new(1.0, 2.0));
        assert_eq!(event.button(), PointerButton::Middle);
        assert!(event.modifiers().shift);
        assert!(!event.modifiers().ctrl);
    }
}
