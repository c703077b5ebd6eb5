//! Pan and zoom state of the canvas.
//!
//! [`CanvasTransform`] maps logical canvas coordinates (where panels live) to
//! screen coordinates:
//!
//! ```text
//! screen  = logical * scale + offset
//! logical = (screen - offset) / scale
//! ```
//!
//! The scale is always kept within [`MIN_SCALE`, `MAX_SCALE`].

use log::{debug, trace};

use corkboard_core::geometry::{Bounds, Point, Size};

use crate::input::{EventResponse, PointerButton, PointerEvent, ZoomDirection};

/// Smallest allowed zoom factor.
pub const MIN_SCALE: f32 = 0.1;

/// Largest allowed zoom factor.
pub const MAX_SCALE: f32 = 3.0;

/// Scale multiplier for one zoom-in step.
pub const ZOOM_IN_FACTOR: f32 = 1.1;

/// Scale multiplier for one zoom-out step.
pub const ZOOM_OUT_FACTOR: f32 = 0.9;

/// Pan offset and zoom scale of the canvas.
///
/// # Examples
///
/// ```
/// # use corkboard::canvas::CanvasTransform;
/// # use corkboard::input::ZoomDirection;
/// # use corkboard_core::geometry::Point;
/// let mut canvas = CanvasTransform::new();
/// canvas.zoom(ZoomDirection::In, Point::new(0.0, 0.0));
///
/// let logical = canvas.screen_to_canvas(Point::new(110.0, 55.0));
/// assert!((logical.x() - 100.0).abs() < 1e-3);
/// assert!((logical.y() - 50.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasTransform {
    offset: Point,
    scale: f32,
    panning: bool,
    /// Pointer position minus offset, recorded when panning starts.
    pan_anchor: Point,
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self {
            offset: Point::default(),
            scale: 1.0,
            panning: false,
            pan_anchor: Point::default(),
        }
    }
}

impl CanvasTransform {
    /// An identity transform: offset `(0, 0)`, scale `1`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Sets the offset directly.
    pub fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// Sets the scale, clamped to the allowed range.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = clamp_scale(scale);
    }

    /// Starts panning if the event asks for it.
    ///
    /// Panning is triggered by the middle button, or the primary button with
    /// shift held. Any other event is ignored.
    pub fn begin_pan(&mut self, event: &PointerEvent) -> EventResponse {
        let wants_pan = match event.button() {
            PointerButton::Middle => true,
            PointerButton::Primary => event.modifiers().shift,
            _ => false,
        };
        if !wants_pan {
            return EventResponse::Ignored;
        }

        self.panning = true;
        self.pan_anchor = event.position().sub_point(self.offset);
        debug!(x = event.position().x(), y = event.position().y(); "Pan started");
        EventResponse::Consumed
    }

    /// Moves the canvas with the pointer while panning.
    pub fn update_pan(&mut self, pointer: Point) {
        if !self.panning {
            return;
        }
        self.offset = pointer.sub_point(self.pan_anchor);
        trace!(offset:? = self.offset; "Pan updated");
    }

    /// Stops panning. Safe to call when not panning.
    pub fn end_pan(&mut self) {
        if self.panning {
            debug!(offset:? = self.offset; "Pan ended");
        }
        self.panning = false;
    }

    /// Zooms one step, keeping the screen point `center` fixed.
    pub fn zoom(&mut self, direction: ZoomDirection, center: Point) {
        let factor = match direction {
            ZoomDirection::In => ZOOM_IN_FACTOR,
            ZoomDirection::Out => ZOOM_OUT_FACTOR,
        };
        let old_scale = self.scale;
        let new_scale = clamp_scale(old_scale * factor);
        let ratio = new_scale / old_scale;

        self.offset = center.sub_point(center.sub_point(self.offset).scale(ratio));
        self.scale = new_scale;
        trace!(scale = self.scale, offset:? = self.offset; "Zoomed");
    }

    /// Back to offset `(0, 0)`, scale `1`, not panning.
    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("Canvas reset");
    }

    /// Places the logical `point` in the middle of the viewport.
    pub fn center_on(&mut self, point: Point, viewport: Size) {
        self.offset = viewport
            .to_point()
            .scale(0.5)
            .sub_point(point.scale(self.scale));
    }

    /// Zooms and centers so that `content` fits into the viewport.
    ///
    /// The scale never exceeds `1`; content is never magnified to fit. An
    /// empty extent on one axis leaves the other axis in charge.
    pub fn fit_to_content(&mut self, content: Bounds, viewport: Size, padding: f32) {
        let ratio = |available: f32, extent: f32| {
            if extent > 0.0 {
                (available - 2.0 * padding) / extent
            } else {
                f32::INFINITY
            }
        };

        let scale = ratio(viewport.width(), content.width())
            .min(ratio(viewport.height(), content.height()))
            .min(1.0);
        let scale = if scale.is_finite() { scale } else { 1.0 };

        self.scale = clamp_scale(scale);
        self.center_on(content.center(), viewport);
        debug!(scale = self.scale, offset:? = self.offset; "Canvas fitted to content");
    }

    /// Converts a screen point into logical canvas coordinates.
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        screen.sub_point(self.offset).scale(1.0 / self.scale)
    }

    /// Converts a logical canvas point into screen coordinates.
    pub fn canvas_to_screen(&self, logical: Point) -> Point {
        logical.scale(self.scale).add_point(self.offset)
    }
}

fn clamp_scale(scale: f32) -> f32 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}
