//! Smart guides for dragged panels.
//!
//! On every drag tick the [`AlignmentEngine`] compares the dragged panel with
//! every other panel on the board and produces:
//!
//! - snap coordinates for the first edge or center that lines up within the
//!   threshold, one per axis,
//! - [`AlignmentGuide`] lines for every edge or center that lines up,
//! - [`MeasurementGuide`] annotations for the nearest neighbour on each side.
//!
//! Edges are compared in a fixed order. On the x axis the dragged panel's
//! left, right and center are each checked against the neighbour's left,
//! right and center, in that order; the y axis does the same with top, bottom
//! and center. The first match across all neighbours (in board order) decides
//! the snap, so this order is observable and must not change.
//!
//! The engine only reads panels. Applying a snap is up to the caller.

use log::trace;

use corkboard_core::{
    geometry::{Bounds, Point},
    panel::Panel,
};

/// Default distance under which two coordinates count as aligned.
pub const DEFAULT_THRESHOLD: f32 = 8.0;

/// Direction of a guide line or measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// A line showing that two panels share an edge or center coordinate.
///
/// A vertical guide sits at x = `position` and spans `start..start + length`
/// on the y axis; a horizontal guide is the transpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentGuide {
    orientation: Orientation,
    position: f32,
    start: f32,
    length: f32,
}

impl AlignmentGuide {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn length(&self) -> f32 {
        self.length
    }
}

/// The gap between the dragged panel and its nearest neighbour on one side.
///
/// `anchor` is where the measurement line begins; it extends `length` units
/// to the right (horizontal) or downwards (vertical). `value` is the gap
/// rounded to whole units for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementGuide {
    orientation: Orientation,
    anchor: Point,
    length: f32,
    value: i64,
}

impl MeasurementGuide {
    fn new(orientation: Orientation, anchor: Point, length: f32) -> Self {
        Self {
            orientation,
            anchor,
            length,
            value: length.round() as i64,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

/// All guides produced by one alignment check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Guides {
    alignment: Vec<AlignmentGuide>,
    measurements: Vec<MeasurementGuide>,
}

impl Guides {
    pub fn alignment(&self) -> &[AlignmentGuide] {
        &self.alignment
    }

    /// Measurements in the order right, left, top, bottom; missing sides are skipped.
    pub fn measurements(&self) -> &[MeasurementGuide] {
        &self.measurements
    }

    pub fn is_empty(&self) -> bool {
        self.alignment.is_empty() && self.measurements.is_empty()
    }

    pub fn clear(&mut self) {
        self.alignment.clear();
        self.measurements.clear();
    }
}

/// Result of one alignment check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignmentResult {
    snap_x: Option<f32>,
    snap_y: Option<f32>,
    guides: Guides,
}

impl AlignmentResult {
    /// Left edge the dragged panel should snap to, if any.
    pub fn snap_x(&self) -> Option<f32> {
        self.snap_x
    }

    /// Top edge the dragged panel should snap to, if any.
    pub fn snap_y(&self) -> Option<f32> {
        self.snap_y
    }

    pub fn guides(&self) -> &Guides {
        &self.guides
    }

    pub fn into_guides(self) -> Guides {
        self.guides
    }

    /// `position` with each snapped axis replaced.
    pub fn apply(&self, position: Point) -> Point {
        Point::new(
            self.snap_x.unwrap_or(position.x()),
            self.snap_y.unwrap_or(position.y()),
        )
    }
}

/// Which part of a span is compared.
#[derive(Debug, Clone, Copy)]
enum Anchor {
    Start,
    End,
    Center,
}

impl Anchor {
    const ORDER: [Anchor; 3] = [Anchor::Start, Anchor::End, Anchor::Center];

    fn of(self, start: f32, end: f32) -> f32 {
        match self {
            Anchor::Start => start,
            Anchor::End => end,
            Anchor::Center => (start + end) / 2.0,
        }
    }

    /// Where the span has to start for this anchor to sit at `target`.
    fn snap(self, target: f32, extent: f32) -> f32 {
        match self {
            Anchor::Start => target,
            Anchor::End => target - extent,
            Anchor::Center => target - extent / 2.0,
        }
    }
}

/// Nearest measurement found so far for one side.
#[derive(Default)]
struct Closest(Option<MeasurementGuide>);

impl Closest {
    fn offer(&mut self, guide: MeasurementGuide) {
        match self.0 {
            Some(current) if current.length <= guide.length => {}
            _ => self.0 = Some(guide),
        }
    }
}

/// Computes snaps and guides for a dragged panel.
#[derive(Debug, Clone)]
pub struct AlignmentEngine {
    threshold: f32,
}

impl Default for AlignmentEngine {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl AlignmentEngine {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }

    /// Checks `active` against every other panel in `panels`.
    ///
    /// `panels` may contain `active` itself; it is skipped by id.
    ///
    /// # Examples
    ///
    /// ```
    /// # use corkboard::alignment::AlignmentEngine;
    /// # use corkboard_core::{geometry::{Point, Size}, identifier::PanelId, panel::{Panel, PanelData, PanelKind}};
    /// let panel = |id: &str, x: f32| {
    ///     Panel::new(PanelId::new(id), id, PanelData::empty(PanelKind::Table),
    ///                Point::new(x, 0.0), Size::new(400.0, 300.0), 1)
    /// };
    /// let dragged = panel("a", 0.0);
    /// let neighbour = panel("b", 405.0);
    ///
    /// let result = AlignmentEngine::default().check(&dragged, &[dragged.clone(), neighbour]);
    /// assert_eq!(result.snap_x(), Some(5.0));
    /// assert_eq!(result.snap_y(), Some(0.0));
    /// ```
    pub fn check(&self, active: &Panel, panels: &[Panel]) -> AlignmentResult {
        let others = panels
            .iter()
            .filter(|p| p.id() != active.id())
            .map(Panel::bounds);
        let result = self.check_bounds(active.bounds(), others);

        trace!(
            panel_id:% = active.id(),
            snap_x:? = result.snap_x,
            snap_y:? = result.snap_y,
            guides = result.guides.alignment.len(),
            measurements = result.guides.measurements.len();
            "Alignment checked",
        );
        result
    }

    /// Checks the rectangle `active` against `others`, visited in order.
    pub fn check_bounds(
        &self,
        active: Bounds,
        others: impl IntoIterator<Item = Bounds>,
    ) -> AlignmentResult {
        let a = active;

        let mut snap_x = None;
        let mut snap_y = None;
        let mut alignment = Vec::new();

        let mut right = Closest::default();
        let mut left = Closest::default();
        let mut top = Closest::default();
        let mut bottom = Closest::default();

        for b in others {
            self.match_axis(
                (a.min_x(), a.max_x()),
                (b.min_x(), b.max_x()),
                &mut snap_x,
                |target| {
                    let start = a.min_y().min(b.min_y());
                    let end = a.max_y().max(b.max_y());
                    alignment.push(AlignmentGuide {
                        orientation: Orientation::Vertical,
                        position: target,
                        start,
                        length: end - start,
                    });
                },
            );

            self.match_axis(
                (a.min_y(), a.max_y()),
                (b.min_y(), b.max_y()),
                &mut snap_y,
                |target| {
                    let start = a.min_x().min(b.min_x());
                    let end = a.max_x().max(b.max_x());
                    alignment.push(AlignmentGuide {
                        orientation: Orientation::Horizontal,
                        position: target,
                        start,
                        length: end - start,
                    });
                },
            );

            Self::measure_gaps(a, b, &mut right, &mut left, &mut top, &mut bottom);
        }

        let measurements = [right, left, top, bottom]
            .into_iter()
            .filter_map(|closest| closest.0)
            .collect();

        AlignmentResult {
            snap_x,
            snap_y,
            guides: Guides {
                alignment,
                measurements,
            },
        }
    }

    /// Runs the nine anchor comparisons of one axis.
    ///
    /// The first match ever seen fills `snap`; every match calls `on_match`
    /// with the neighbour's coordinate.
    fn match_axis(
        &self,
        (a_start, a_end): (f32, f32),
        (b_start, b_end): (f32, f32),
        snap: &mut Option<f32>,
        mut on_match: impl FnMut(f32),
    ) {
        let extent = a_end - a_start;
        for anchor in Anchor::ORDER {
            let value = anchor.of(a_start, a_end);
            for target_anchor in Anchor::ORDER {
                let target = target_anchor.of(b_start, b_end);
                if (value - target).abs() < self.threshold {
                    if snap.is_none() {
                        *snap = Some(anchor.snap(target, extent));
                    }
                    on_match(target);
                }
            }
        }
    }

    fn measure_gaps(
        a: Bounds,
        b: Bounds,
        right: &mut Closest,
        left: &mut Closest,
        top: &mut Closest,
        bottom: &mut Closest,
    ) {
        if let Some((start, end)) = a.vertical_overlap(b) {
            let mid_y = (start + end) / 2.0;
            if b.min_x() >= a.max_x() {
                let gap = b.min_x() - a.max_x();
                right.offer(MeasurementGuide::new(
                    Orientation::Horizontal,
                    Point::new(a.max_x(), mid_y),
                    gap,
                ));
            }
            if a.min_x() >= b.max_x() {
                let gap = a.min_x() - b.max_x();
                left.offer(MeasurementGuide::new(
                    Orientation::Horizontal,
                    Point::new(b.max_x(), mid_y),
                    gap,
                ));
            }
        }

        if let Some((start, end)) = a.horizontal_overlap(b) {
            let mid_x = (start + end) / 2.0;
            if b.min_y() >= a.max_y() {
                let gap = b.min_y() - a.max_y();
                bottom.offer(MeasurementGuide::new(
                    Orientation::Vertical,
                    Point::new(mid_x, a.max_y()),
                    gap,
                ));
            }
            if a.min_y() >= b.max_y() {
                let gap = a.min_y() - b.max_y();
                top.offer(MeasurementGuide::new(
                    Orientation::Vertical,
                    Point::new(mid_x, b.max_y()),
                    gap,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use corkboard_core::{
        geometry::Size,
        identifier::PanelId,
        panel::{PanelData, PanelKind},
    };

    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Bounds {
        Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h))
    }

    fn check(a: Bounds, others: &[Bounds]) -> AlignmentResult {
        AlignmentEngine::default().check_bounds(a, others.iter().copied())
    }

    #[test]
    fn test_gap_equal_to_threshold_measures_but_does_not_snap() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(108.0, 0.0, 100.0, 100.0);

        let result = check(a, &[b]);

        assert_eq!(result.snap_x(), None);
        // Tops line up
        assert_eq!(result.snap_y(), Some(0.0));

        let measurements = result.guides().measurements();
        assert_eq!(measurements.len(), 1);
        assert_eq!(measurements[0].orientation(), Orientation::Horizontal);
        assert_eq!(measurements[0].anchor(), Point::new(100.0, 50.0));
        assert_eq!(measurements[0].length(), 8.0);
        assert_eq!(measurements[0].value(), 8);
    }

    #[test]
    fn test_first_match_decides_snap() {
        let a = rect(3.0, 500.0, 100.0, 100.0);
        let b = rect(0.0, 0.0, 100.0, 100.0);

        let result = check(a, &[b]);

        // left-left matches first (|3 - 0| < 8)
        assert_eq!(result.snap_x(), Some(0.0));
        // left-left, right-right and center-center all match
        let vertical: Vec<f32> = result
            .guides()
            .alignment()
            .iter()
            .filter(|g| g.orientation() == Orientation::Vertical)
            .map(|g| g.position())
            .collect();
        assert_eq!(vertical, vec![0.0, 100.0, 50.0]);
    }

    #[test]
    fn test_first_neighbour_in_order_decides_snap() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let first = rect(5.0, 500.0, 100.0, 100.0);
        let second = rect(1.0, 900.0, 100.0, 100.0);

        assert_eq!(check(a, &[first, second]).snap_x(), Some(5.0));
        assert_eq!(check(a, &[second, first]).snap_x(), Some(1.0));
    }

    #[test]
    fn test_right_to_left_snap_subtracts_width() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(105.0, 600.0, 100.0, 100.0);

        let result = check(a, &[b]);
        // a.right (100) vs b.left (105)
        assert_eq!(result.snap_x(), Some(5.0));
        assert_eq!(result.snap_y(), None);
    }

    #[test]
    fn test_center_snap_subtracts_half_width() {
        let a = rect(0.0, 0.0, 200.0, 100.0);
        let b = rect(96.0, 600.0, 300.0, 100.0);

        // Only a.center (100) vs b.left (96) is within the threshold
        let result = check(a, &[b]);
        assert_eq!(result.snap_x(), Some(-4.0));
        assert_eq!(result.guides().alignment().len(), 1);
    }

    #[test]
    fn test_vertical_snap_on_bottom_edge() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(600.0, 104.0, 100.0, 100.0);

        // a.bottom (100) vs b.top (104)
        let result = check(a, &[b]);
        assert_eq!(result.snap_y(), Some(4.0));
        let guide = result.guides().alignment()[0];
        assert_eq!(guide.orientation(), Orientation::Horizontal);
        assert_eq!(guide.start(), 0.0);
        assert_eq!(guide.length(), 700.0);
    }

    #[test]
    fn test_guide_spans_both_panels() {
        let a = rect(0.0, 100.0, 100.0, 100.0);
        let b = rect(2.0, 600.0, 100.0, 100.0);

        let result = check(a, &[b]);
        let guide = result.guides().alignment()[0];

        assert_eq!(guide.orientation(), Orientation::Vertical);
        assert_eq!(guide.position(), 2.0);
        assert_eq!(guide.start(), 100.0);
        assert_eq!(guide.length(), 600.0);
    }

    #[test]
    fn test_closest_neighbour_wins() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let far = rect(300.0, 0.0, 100.0, 100.0);
        let near = rect(150.0, 0.0, 100.0, 100.0);

        let result = check(a, &[far, near]);
        let right = result.guides().measurements()[0];
        assert_eq!(right.value(), 50);
        assert_eq!(right.length(), 50.0);
    }

    #[test]
    fn test_measurements_order_right_left_top_bottom() {
        let a = rect(1000.0, 1000.0, 100.0, 100.0);
        let right = rect(1150.0, 1000.0, 100.0, 100.0);
        let left = rect(850.0, 1000.0, 100.0, 100.0);
        let top = rect(1000.0, 850.0, 100.0, 100.0);
        let bottom = rect(1000.0, 1150.0, 100.0, 100.0);

        let result = check(a, &[bottom, top, left, right]);
        let measurements = result.guides().measurements();

        assert_eq!(measurements.len(), 4);
        assert_eq!(measurements[0].anchor(), Point::new(1100.0, 1050.0));
        assert_eq!(measurements[1].anchor(), Point::new(950.0, 1050.0));
        assert_eq!(measurements[2].anchor(), Point::new(1050.0, 950.0));
        assert_eq!(measurements[3].anchor(), Point::new(1050.0, 1100.0));
        assert_eq!(measurements[0].orientation(), Orientation::Horizontal);
        assert_eq!(measurements[2].orientation(), Orientation::Vertical);
        assert!(measurements.iter().all(|m| m.value() == 50));
    }

    #[test]
    fn test_touching_spans_are_not_measured() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        // Starts exactly at a's bottom: no vertical overlap, so no left/right gap
        let b = rect(200.0, 100.0, 100.0, 100.0);

        assert!(check(a, &[b]).guides().measurements().is_empty());
    }

    #[test]
    fn test_rounding_of_value() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(112.5, 0.0, 100.0, 100.0);

        assert_eq!(check(a, &[b]).guides().measurements()[0].value(), 13);
    }

    #[test]
    fn test_apply_replaces_snapped_axes() {
        let a = rect(3.0, 500.0, 100.0, 100.0);
        let b = rect(0.0, 0.0, 100.0, 100.0);

        let result = check(a, &[b]);
        assert_eq!(result.apply(a.min_point()), Point::new(0.0, 500.0));
    }

    #[test]
    fn test_custom_threshold() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(15.0, 900.0, 100.0, 100.0);

        assert_eq!(check(a, &[b]).snap_x(), None);
        assert_eq!(
            AlignmentEngine::new(20.0).check_bounds(a, [b]).snap_x(),
            Some(15.0)
        );
    }

    #[test]
    fn test_check_skips_active_panel() {
        let panel = Panel::new(
            PanelId::new("alignment-alone"),
            "Alone",
            PanelData::empty(PanelKind::Notes),
            Point::default(),
            Size::new(300.0, 250.0),
            1,
        );

        let result = AlignmentEngine::default().check(&panel, &[panel.clone()]);
        assert_eq!(result, AlignmentResult::default());
        assert!(result.guides().is_empty());
    }
}
