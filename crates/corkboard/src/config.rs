//! Configuration types for the Corkboard canvas engine.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources; every field falls back to the built-in default when it
//! is missing.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`ArrangeConfig`] - Auto-arrange strategy and spacing.
//! - [`AlignmentConfig`] - Smart guide threshold and snapping.
//! - [`CanvasConfig`] - Viewport size and fit padding.
//! - [`PlacementConfig`] - Where new and duplicated panels appear.
//!
//! # Example
//!
//! ```
//! # use corkboard::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.alignment().threshold(), 8.0);
//! assert!(config.alignment().snap());
//! ```

use serde::Deserialize;

use corkboard_core::geometry::Size;

use crate::arrange::ArrangeStrategy;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    arrange: ArrangeConfig,

    #[serde(default)]
    alignment: AlignmentConfig,

    #[serde(default)]
    canvas: CanvasConfig,

    #[serde(default)]
    placement: PlacementConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(
        arrange: ArrangeConfig,
        alignment: AlignmentConfig,
        canvas: CanvasConfig,
        placement: PlacementConfig,
    ) -> Self {
        Self {
            arrange,
            alignment,
            canvas,
            placement,
        }
    }

    /// Returns the arrange configuration.
    pub fn arrange(&self) -> &ArrangeConfig {
        &self.arrange
    }

    /// Returns the alignment configuration.
    pub fn alignment(&self) -> &AlignmentConfig {
        &self.alignment
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the placement configuration.
    pub fn placement(&self) -> &PlacementConfig {
        &self.placement
    }

    /// Replaces the arrange section.
    pub fn with_arrange(mut self, arrange: ArrangeConfig) -> Self {
        self.arrange = arrange;
        self
    }

    /// Replaces the alignment section.
    pub fn with_alignment(mut self, alignment: AlignmentConfig) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Auto-arrange settings.
///
/// `padding` is the gap between panels, `margin` the distance of the first
/// row/column from the canvas origin, and `row_width` the width budget the
/// masonry and compact strategies pack into.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArrangeConfig {
    strategy: ArrangeStrategy,
    padding: f32,
    margin: f32,
    grid_columns: usize,
    masonry_max_columns: usize,
    row_width: f32,
}

impl Default for ArrangeConfig {
    fn default() -> Self {
        Self {
            strategy: ArrangeStrategy::default(),
            padding: 20.0,
            margin: 20.0,
            grid_columns: 3,
            masonry_max_columns: 4,
            row_width: 1400.0,
        }
    }
}

impl ArrangeConfig {
    /// Default strategy used when none is requested explicitly.
    pub fn strategy(&self) -> ArrangeStrategy {
        self.strategy
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn grid_columns(&self) -> usize {
        self.grid_columns
    }

    pub fn masonry_max_columns(&self) -> usize {
        self.masonry_max_columns
    }

    pub fn row_width(&self) -> f32 {
        self.row_width
    }

    /// Sets the default strategy.
    pub fn with_strategy(mut self, strategy: ArrangeStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Smart guide settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Distance below which edges and centers are considered aligned.
    threshold: f32,

    /// Whether a drag snaps to the first matching alignment.
    snap: bool,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            threshold: 8.0,
            snap: true,
        }
    }
}

impl AlignmentConfig {
    pub fn new(threshold: f32, snap: bool) -> Self {
        Self { threshold, snap }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn snap(&self) -> bool {
        self.snap
    }
}

/// Canvas settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    viewport_width: f32,
    viewport_height: f32,
    fit_padding: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1200.0,
            viewport_height: 800.0,
            fit_padding: 50.0,
        }
    }
}

impl CanvasConfig {
    /// Viewport assumed when the host has not reported its real size.
    pub fn viewport(&self) -> Size {
        Size::new(self.viewport_width, self.viewport_height)
    }

    /// Padding kept around the content by fit-to-content.
    pub fn fit_padding(&self) -> f32 {
        self.fit_padding
    }
}

/// Placement of new and duplicated panels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    spawn_margin: f32,
    nominal_width: f32,
    nominal_height: f32,
    duplicate_offset: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            spawn_margin: 50.0,
            nominal_width: 400.0,
            nominal_height: 300.0,
            duplicate_offset: 30.0,
        }
    }
}

impl PlacementConfig {
    /// Distance kept from the viewport edges when spawning at random.
    pub fn spawn_margin(&self) -> f32 {
        self.spawn_margin
    }

    /// Panel size assumed when computing the random spawn range.
    pub fn nominal_size(&self) -> Size {
        Size::new(self.nominal_width, self.nominal_height)
    }

    /// Offset of a duplicate from its source, on both axes.
    pub fn duplicate_offset(&self) -> f32 {
        self.duplicate_offset
    }
}
