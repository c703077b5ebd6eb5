//! Geometric primitives for canvas layout and interaction.
//!
//! This module provides the value types used throughout Corkboard to describe
//! where panels sit on the canvas, how large they are, and which area they cover.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate, either in screen space or logical canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Corkboard uses the usual screen convention:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! Panel positions always name the **top-left** corner of the panel in logical
//! canvas coordinates. Screen coordinates are converted to logical ones by the
//! canvas transform (`logical = (screen - offset) / scale`).

use serde::{Deserialize, Serialize};

/// A 2D point in screen or canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use corkboard_core::geometry::Point;
/// let pointer = Point::new(250.0, 120.0);
/// let offset = Point::new(50.0, 20.0);
///
/// let local = pointer.sub_point(offset);
/// assert_eq!(local.x(), 200.0);
/// assert_eq!(local.y(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Component-wise addition.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Component-wise subtraction.
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use corkboard_core::geometry::Point;
    /// let logical = Point::new(100.0, 40.0);
    ///
    /// let on_screen = logical.scale(1.5);
    /// assert_eq!(on_screen.x(), 150.0);
    /// assert_eq!(on_screen.y(), 60.0);
    /// ```
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Width and height of a panel or viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns `width * height`
    pub fn area(self) -> f32 {
        self.width * self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns this size as a point, useful for halving or offsetting by extents
    pub fn to_point(self) -> Point {
        Point::new(self.width, self.height)
    }
}

/// An axis-aligned rectangle described by its minimum and maximum coordinates.
///
/// Panels are converted to bounds with [`Bounds::new_from_top_left`]; the
/// alignment engine then compares edges and centers of these rectangles.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from explicit edge coordinates.
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the left edge
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the top edge
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the right edge
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the bottom edge
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Merges two bounds into the smallest bounds containing both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use corkboard_core::geometry::{Bounds, Point, Size};
    /// let stats = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(280.0, 200.0));
    /// let chart = Bounds::new_from_top_left(Point::new(300.0, 50.0), Size::new(900.0, 400.0));
    ///
    /// let all = stats.merge(&chart);
    /// assert_eq!(all.min_x(), 0.0);
    /// assert_eq!(all.max_x(), 1200.0);
    /// assert_eq!(all.height(), 450.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns the intersection of the vertical spans of both bounds, if any.
    ///
    /// Spans that merely touch (`a.max_y == b.min_y`) do not overlap.
    pub fn vertical_overlap(self, other: Bounds) -> Option<(f32, f32)> {
        let start = self.min_y.max(other.min_y);
        let end = self.max_y.min(other.max_y);
        (start < end).then_some((start, end))
    }

    /// Returns the intersection of the horizontal spans of both bounds, if any.
    ///
    /// Spans that merely touch (`a.max_x == b.min_x`) do not overlap.
    pub fn horizontal_overlap(self, other: Bounds) -> Option<(f32, f32)> {
        let start = self.min_x.max(other.min_x);
        let end = self.max_x.min(other.max_x);
        (start < end).then_some((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert!(point.is_zero());
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);
        assert_eq!(p1.add_point(p2), Point::new(7.0, 11.0));
        assert_eq!(p1.sub_point(p2), Point::new(3.0, 5.0));
    }

    #[test]
    fn test_point_scale() {
        let scaled = Point::new(2.0, 3.0).scale(2.5);
        assert_eq!(scaled.x(), 5.0);
        assert_eq!(scaled.y(), 7.5);
    }

    #[test]
    fn test_size_area_and_extents() {
        let size = Size::new(280.0, 200.0);
        assert_eq!(size.area(), 56_000.0);
        assert_eq!(size.to_point(), Point::new(280.0, 200.0));
    }

    #[test]
    fn test_size_max() {
        let size1 = Size::new(10.0, 20.0);
        let size2 = Size::new(15.0, 18.0);

        assert_eq!(size1.max(size2), Size::new(15.0, 20.0));
    }

    #[test]
    fn test_bounds_new_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(100.0, 50.0));

        assert_eq!(bounds.min_x(), 10.0);
        assert_eq!(bounds.min_y(), 20.0);
        assert_eq!(bounds.max_x(), 110.0);
        assert_eq!(bounds.max_y(), 70.0);
        assert_eq!(bounds.center(), Point::new(60.0, 45.0));
        assert_eq!(bounds.width(), 100.0);
        assert_eq!(bounds.height(), 50.0);
        assert_eq!(bounds.min_point(), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_bounds_merge() {
        let bounds1 = Bounds::new(1.0, 2.0, 5.0, 6.0);
        let bounds2 = Bounds::new(3.0, 0.0, 8.0, 4.0);

        let merged = bounds1.merge(&bounds2);
        assert_eq!(merged, Bounds::new(1.0, 0.0, 8.0, 6.0));
    }

    #[test]
    fn test_bounds_vertical_overlap() {
        let a = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let b = Bounds::new(150.0, 50.0, 250.0, 200.0);
        assert_eq!(a.vertical_overlap(b), Some((50.0, 100.0)));

        // Touching edges are not an overlap
        let c = Bounds::new(150.0, 100.0, 250.0, 200.0);
        assert_eq!(a.vertical_overlap(c), None);
    }

    #[test]
    fn test_bounds_horizontal_overlap() {
        let a = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let b = Bounds::new(40.0, 200.0, 300.0, 300.0);
        assert_eq!(a.horizontal_overlap(b), Some((40.0, 100.0)));

        let c = Bounds::new(100.0, 200.0, 300.0, 300.0);
        assert_eq!(a.horizontal_overlap(c), None);
    }
}
