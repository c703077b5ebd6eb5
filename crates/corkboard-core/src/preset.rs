//! Per-type size presets.
//!
//! Every [`PanelKind`] has a default size used when a panel is created, a hard
//! minimum that is always enforced, and optional maxima. The table is static;
//! nothing in Corkboard mutates it.

use log::trace;

use crate::{geometry::Size, panel::PanelKind};

/// Default, minimum, and optional maximum dimensions for one panel type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizePreset {
    width: f32,
    height: f32,
    min_width: f32,
    min_height: f32,
    max_width: Option<f32>,
    max_height: Option<f32>,
}

const STATISTIC: SizePreset = SizePreset::new(280.0, 200.0, 200.0, 150.0, Some(600.0), Some(400.0));
const CHART: SizePreset = SizePreset::new(900.0, 400.0, 300.0, 250.0, Some(900.0), Some(600.0));
const LIST: SizePreset = SizePreset::new(350.0, 400.0, 280.0, 300.0, Some(500.0), Some(800.0));
const TABLE: SizePreset = SizePreset::new(600.0, 400.0, 400.0, 300.0, Some(1200.0), Some(800.0));
const MAP: SizePreset = SizePreset::new(500.0, 450.0, 400.0, 400.0, Some(1000.0), Some(800.0));
const CALENDAR: SizePreset = SizePreset::new(450.0, 500.0, 350.0, 400.0, Some(800.0), Some(900.0));
const NOTES: SizePreset = SizePreset::new(300.0, 250.0, 250.0, 200.0, Some(600.0), Some(600.0));

impl SizePreset {
    /// Creates a preset. A `None` maximum leaves that dimension unbounded.
    pub const fn new(
        width: f32,
        height: f32,
        min_width: f32,
        min_height: f32,
        max_width: Option<f32>,
        max_height: Option<f32>,
    ) -> Self {
        Self {
            width,
            height,
            min_width,
            min_height,
            max_width,
            max_height,
        }
    }

    /// Returns the preset for a panel type.
    pub fn for_kind(kind: PanelKind) -> &'static SizePreset {
        match kind {
            PanelKind::Statistic => &STATISTIC,
            PanelKind::Chart => &CHART,
            PanelKind::List => &LIST,
            PanelKind::Table => &TABLE,
            PanelKind::Map => &MAP,
            PanelKind::Calendar => &CALENDAR,
            PanelKind::Notes => &NOTES,
        }
    }

    /// Size given to freshly created panels.
    pub fn default_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The hard floor for both dimensions.
    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    pub fn max_width(&self) -> Option<f32> {
        self.max_width
    }

    pub fn max_height(&self) -> Option<f32> {
        self.max_height
    }

    /// Raises each dimension to the preset minimum, leaving maxima alone.
    pub fn enforce_min(&self, size: Size) -> Size {
        size.max(self.min_size())
    }

    /// Clamps a size into `[min, max]` on both axes.
    ///
    /// Minima are always applied; a maximum only when the preset defines one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use corkboard_core::{geometry::Size, panel::PanelKind, preset::SizePreset};
    /// let preset = SizePreset::for_kind(PanelKind::Statistic);
    ///
    /// assert_eq!(preset.clamp(Size::new(50.0, 1000.0)), Size::new(200.0, 400.0));
    /// assert_eq!(preset.clamp(Size::new(300.0, 220.0)), Size::new(300.0, 220.0));
    /// ```
    pub fn clamp(&self, size: Size) -> Size {
        let mut width = size.width().max(self.min_width);
        let mut height = size.height().max(self.min_height);

        if let Some(max_width) = self.max_width {
            width = width.min(max_width);
        }
        if let Some(max_height) = self.max_height {
            height = height.min(max_height);
        }

        let clamped = Size::new(width, height);
        if clamped != size {
            trace!(
                requested_width = size.width(),
                requested_height = size.height(),
                width,
                height;
                "Size clamped to preset",
            );
        }
        clamped
    }

    /// Returns true if `size` already satisfies the preset bounds.
    pub fn contains(&self, size: Size) -> bool {
        self.clamp(size) == size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_consistent_preset() {
        for kind in PanelKind::ALL {
            let preset = SizePreset::for_kind(kind);
            let default = preset.default_size();

            assert!(preset.contains(default), "{kind} default outside its bounds");
            assert!(default.width() >= preset.min_size().width());
            assert!(default.height() >= preset.min_size().height());
        }
    }

    #[test]
    fn test_chart_preset_values() {
        let preset = SizePreset::for_kind(PanelKind::Chart);
        assert_eq!(preset.default_size(), Size::new(900.0, 400.0));
        assert_eq!(preset.min_size(), Size::new(300.0, 250.0));
        assert_eq!(preset.max_width(), Some(900.0));
        assert_eq!(preset.max_height(), Some(600.0));
    }

    #[test]
    fn test_clamp_applies_minimum() {
        let preset = SizePreset::for_kind(PanelKind::Table);
        assert_eq!(preset.clamp(Size::new(0.0, -10.0)), Size::new(400.0, 300.0));
    }

    #[test]
    fn test_clamp_applies_maximum() {
        let preset = SizePreset::for_kind(PanelKind::Table);
        assert_eq!(
            preset.clamp(Size::new(5000.0, 5000.0)),
            Size::new(1200.0, 800.0)
        );
    }

    #[test]
    fn test_clamp_without_maximum_is_unbounded() {
        let preset = SizePreset::new(100.0, 100.0, 50.0, 50.0, None, Some(200.0));
        assert_eq!(
            preset.clamp(Size::new(10_000.0, 10_000.0)),
            Size::new(10_000.0, 200.0)
        );
    }

    #[test]
    fn test_enforce_min_ignores_maximum() {
        let preset = SizePreset::for_kind(PanelKind::Notes);
        assert_eq!(
            preset.enforce_min(Size::new(100.0, 5000.0)),
            Size::new(250.0, 5000.0)
        );
    }
}
