//! Placement helpers for new and existing panels.
//!
//! Pure functions used when panels are created, duplicated, or constrained to
//! a region of the canvas. None of them touch a board; callers write the
//! results back.

use crate::{
    geometry::{Bounds, Point, Size},
    panel::PanelKind,
};

/// Offset applied per step by [`cascade_position`] unless a custom step is used.
pub const DEFAULT_CASCADE_STEP: f32 = 30.0;

/// Half extent of the default clamping area used by [`default_area`].
pub const DEFAULT_AREA_EXTENT: f32 = 5000.0;

/// Top-left position that centers a panel inside a container.
///
/// The result is in logical canvas coordinates, so the current canvas offset
/// is subtracted.
///
/// # Examples
///
/// ```
/// # use corkboard_core::{geometry::{Point, Size}, placement::centered_position};
/// let position = centered_position(
///     Size::new(1200.0, 800.0),
///     Size::new(400.0, 300.0),
///     Point::new(100.0, 0.0),
/// );
/// assert_eq!(position, Point::new(300.0, 250.0));
/// ```
pub fn centered_position(container: Size, panel: Size, canvas_offset: Point) -> Point {
    Point::new(
        container.width() / 2.0 - panel.width() / 2.0 - canvas_offset.x(),
        container.height() / 2.0 - panel.height() / 2.0 - canvas_offset.y(),
    )
}

/// Position of the `index`-th panel in a diagonal cascade starting at `base`.
pub fn cascade_position(base: Point, index: usize, step: f32) -> Point {
    let shift = index as f32 * step;
    Point::new(base.x() + shift, base.y() + shift)
}

/// Default size of a freshly created panel of the given type.
pub fn preset_size(kind: PanelKind) -> Size {
    kind.preset().default_size()
}

/// Raises `size` to the minimum of the type's preset.
pub fn enforce_min_size(kind: PanelKind, size: Size) -> Size {
    kind.preset().enforce_min(size)
}

/// Clamps `size` to both minimum and maximum of the type's preset.
pub fn clamp_size(kind: PanelKind, size: Size) -> Size {
    kind.preset().clamp(size)
}

/// The area `[-5000, 5000]` on both axes.
pub fn default_area() -> Bounds {
    Bounds::new(
        -DEFAULT_AREA_EXTENT,
        -DEFAULT_AREA_EXTENT,
        DEFAULT_AREA_EXTENT,
        DEFAULT_AREA_EXTENT,
    )
}

/// Keeps a panel of `panel_size` inside `area`.
///
/// Each axis is computed as `max(min, min(p, max - extent))`, so a panel
/// larger than the area ends up pinned to the area's minimum edge.
///
/// # Examples
///
/// ```
/// # use corkboard_core::{geometry::{Point, Size}, placement::{clamp_position, default_area}};
/// let clamped = clamp_position(
///     Point::new(4900.0, -6000.0),
///     Size::new(300.0, 250.0),
///     default_area(),
/// );
/// assert_eq!(clamped, Point::new(4700.0, -5000.0));
/// ```
pub fn clamp_position(position: Point, panel_size: Size, area: Bounds) -> Point {
    let x = area
        .min_x()
        .max(position.x().min(area.max_x() - panel_size.width()));
    let y = area
        .min_y()
        .max(position.y().min(area.max_y() - panel_size.height()));
    Point::new(x, y)
}
