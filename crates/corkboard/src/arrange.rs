//! Auto-arrange engine factory module
//!
//! This module provides the batch layout algorithms that reposition every
//! panel on the board at once. Three strategies are available:
//!
//! - [`ArrangeStrategy::Grid`]: fixed column count, each panel dropped into
//!   the currently shortest column, smallest panels first.
//! - [`ArrangeStrategy::Masonry`]: column count derived from the average panel
//!   width, tallest panels first.
//! - [`ArrangeStrategy::Compact`]: first-fit row packing under a width budget,
//!   shortest panels first.
//!
//! Engines work on a snapshot of panel sizes and return one position per
//! size, index-aligned with the input. They never change sizes.
//!
//! The module uses a builder pattern for creating and configuring engines.

mod compact;
mod grid;
mod masonry;

use std::{
    collections::HashMap,
    fmt::{self, Display},
    str::FromStr,
};

use log::debug;
use serde::Deserialize;

use corkboard_core::geometry::{Point, Size};

use crate::config::ArrangeConfig;

/// Available auto-arrange strategies.
///
/// The string names match configuration and CLI values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrangeStrategy {
    #[default]
    Grid,
    Masonry,
    Compact,
}

impl ArrangeStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [ArrangeStrategy; 3] = [
        ArrangeStrategy::Grid,
        ArrangeStrategy::Masonry,
        ArrangeStrategy::Compact,
    ];
}

impl FromStr for ArrangeStrategy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Self::Grid),
            "masonry" => Ok(Self::Masonry),
            "compact" => Ok(Self::Compact),
            _ => Err("Unsupported arrange strategy"),
        }
    }
}

impl From<ArrangeStrategy> for &'static str {
    fn from(val: ArrangeStrategy) -> Self {
        match val {
            ArrangeStrategy::Grid => "grid",
            ArrangeStrategy::Masonry => "masonry",
            ArrangeStrategy::Compact => "compact",
        }
    }
}

impl Display for ArrangeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Trait defining the interface for auto-arrange engines
pub trait ArrangeEngine {
    /// Calculate the top-left position of every panel.
    ///
    /// `sizes` is a snapshot of the panel sizes in board order. The returned
    /// vector has the same length and order. An empty input yields an empty
    /// output.
    fn arrange(&self, sizes: &[Size]) -> Vec<Point>;
}

/// Index of the shortest column; the first one wins ties.
fn shortest_column(heights: &[f32]) -> usize {
    let mut column = 0;
    for (idx, &height) in heights.iter().enumerate().skip(1) {
        if height < heights[column] {
            column = idx;
        }
    }
    column
}

/// Builder for creating and configuring arrange engines.
///
/// Engines are created lazily and cached per strategy, so repeated arranges
/// reuse the same configured instance.
pub struct EngineBuilder {
    // Cache for reusing engines with the same configuration
    engines: HashMap<ArrangeStrategy, Box<dyn ArrangeEngine>>,

    // Configuration options
    padding: f32,
    margin: f32,
    grid_columns: usize,
    masonry_max_columns: usize,
    row_width: f32,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            engines: HashMap::new(),
            padding: 20.0,
            margin: 20.0,
            grid_columns: 3,
            masonry_max_columns: 4,
            row_width: 1400.0,
        }
    }
}

impl fmt::Debug for EngineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineBuilder")
            .field("cached", &self.engines.keys().collect::<Vec<_>>())
            .field("padding", &self.padding)
            .field("margin", &self.margin)
            .field("grid_columns", &self.grid_columns)
            .field("masonry_max_columns", &self.masonry_max_columns)
            .field("row_width", &self.row_width)
            .finish()
    }
}

impl EngineBuilder {
    /// Create a new engine builder with an empty cache and default spacing
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder configured from an [`ArrangeConfig`]
    pub fn from_config(config: &ArrangeConfig) -> Self {
        Self::new()
            .with_padding(config.padding())
            .with_margin(config.margin())
            .with_grid_columns(config.grid_columns())
            .with_masonry_max_columns(config.masonry_max_columns())
            .with_row_width(config.row_width())
    }

    /// Set the gap between neighbouring panels
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the distance of the first row and column from the origin
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the number of grid columns
    pub fn with_grid_columns(mut self, columns: usize) -> Self {
        self.grid_columns = columns;
        self
    }

    /// Set the upper bound on masonry columns
    pub fn with_masonry_max_columns(mut self, columns: usize) -> Self {
        self.masonry_max_columns = columns;
        self
    }

    /// Set the width budget used by masonry and compact packing
    pub fn with_row_width(mut self, width: f32) -> Self {
        self.row_width = width;
        self
    }

    /// Get an engine of the specified strategy with configured options
    pub fn engine(&mut self, strategy: ArrangeStrategy) -> &dyn ArrangeEngine {
        let engine = self.engines.entry(strategy).or_insert_with(|| {
            debug!(strategy:% = strategy; "Creating arrange engine");
            let engine: Box<dyn ArrangeEngine> = match strategy {
                ArrangeStrategy::Grid => {
                    let mut e = grid::Grid::new();
                    e.set_columns(self.grid_columns);
                    e.set_padding(self.padding);
                    e.set_margin(self.margin);
                    Box::new(e)
                }
                ArrangeStrategy::Masonry => {
                    let mut e = masonry::Masonry::new();
                    e.set_max_columns(self.masonry_max_columns);
                    e.set_available_width(self.row_width);
                    e.set_padding(self.padding);
                    e.set_margin(self.margin);
                    Box::new(e)
                }
                ArrangeStrategy::Compact => {
                    let mut e = compact::Compact::new();
                    e.set_row_width(self.row_width);
                    e.set_padding(self.padding);
                    e.set_margin(self.margin);
                    Box::new(e)
                }
            };
            engine
        });
        // Dereference to avoid returning reference to temporary
        &**engine
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use corkboard_core::geometry::Bounds;

    use super::*;

    fn sizes_strategy() -> impl Strategy<Value = Vec<Size>> {
        prop::collection::vec(
            (200.0f32..1200.0, 150.0f32..900.0).prop_map(|(w, h)| Size::new(w, h)),
            0..25,
        )
    }

    fn overlapping(a: Bounds, b: Bounds) -> bool {
        a.horizontal_overlap(b).is_some() && a.vertical_overlap(b).is_some()
    }

    /// Every panel gets exactly one position and none starts before the margin.
    fn check_positions_cover_input(
        strategy: ArrangeStrategy,
        sizes: &[Size],
    ) -> Result<(), TestCaseError> {
        let mut builder = EngineBuilder::new();
        let positions = builder.engine(strategy).arrange(sizes);

        prop_assert_eq!(positions.len(), sizes.len());
        for position in &positions {
            prop_assert!(position.x() >= 20.0);
            prop_assert!(position.y() >= 20.0);
        }
        Ok(())
    }

    /// Masonry and compact layouts never overlap panels.
    fn check_no_overlap(strategy: ArrangeStrategy, sizes: &[Size]) -> Result<(), TestCaseError> {
        let mut builder = EngineBuilder::new();
        let positions = builder.engine(strategy).arrange(sizes);
        let rects: Vec<Bounds> = positions
            .iter()
            .zip(sizes)
            .map(|(&p, &s)| Bounds::new_from_top_left(p, s))
            .collect();

        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                prop_assert!(!overlapping(*a, *b), "{a:?} overlaps {b:?}");
            }
        }
        Ok(())
    }

    /// Uniform panels spread evenly over the three grid columns.
    fn check_grid_balances_uniform_columns(
        size: Size,
        count: usize,
    ) -> Result<(), TestCaseError> {
        let mut builder = EngineBuilder::new();
        let sizes = vec![size; count];
        let positions = builder.engine(ArrangeStrategy::Grid).arrange(&sizes);

        let mut columns: Vec<(f32, usize, f32)> = Vec::new();
        for position in &positions {
            let bottom = position.y() + size.height();
            match columns.iter_mut().find(|(x, _, _)| *x == position.x()) {
                Some((_, panels, height)) => {
                    *panels += 1;
                    *height = height.max(bottom);
                }
                None => columns.push((position.x(), 1, bottom)),
            }
        }

        prop_assert!(columns.len() <= 3);
        let floor = count / 3;
        let ceil = count.div_ceil(3);
        for &(_, panels, _) in &columns {
            prop_assert!(panels == floor || panels == ceil, "{panels} of {count}");
        }

        if count >= 3 {
            let tallest = columns.iter().map(|c| c.2).fold(f32::MIN, f32::max);
            let shortest = columns.iter().map(|c| c.2).fold(f32::MAX, f32::min);
            // f32 sums drift slightly over ten rows
            prop_assert!(tallest - shortest <= size.height() + 20.0 + 0.01);
        }
        Ok(())
    }

    fn strategy_strategy() -> impl Strategy<Value = ArrangeStrategy> {
        prop_oneof![
            Just(ArrangeStrategy::Grid),
            Just(ArrangeStrategy::Masonry),
            Just(ArrangeStrategy::Compact),
        ]
    }

    proptest! {
        #[test]
        fn positions_cover_input(strategy in strategy_strategy(), sizes in sizes_strategy()) {
            check_positions_cover_input(strategy, &sizes)?;
        }

        #[test]
        fn grid_balances_uniform_columns(
            width in 200.0f32..1200.0,
            height in 150.0f32..900.0,
            count in 0usize..30,
        ) {
            check_grid_balances_uniform_columns(Size::new(width, height), count)?;
        }

        #[test]
        fn masonry_no_overlap(sizes in sizes_strategy()) {
            check_no_overlap(ArrangeStrategy::Masonry, &sizes)?;
        }

        #[test]
        fn compact_no_overlap(sizes in sizes_strategy()) {
            check_no_overlap(ArrangeStrategy::Compact, &sizes)?;
        }
    }
}
