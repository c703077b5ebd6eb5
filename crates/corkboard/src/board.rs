//! The panel collection.
//!
//! A [`Board`] owns the ordered list of panels together with the z-order
//! counter. Every operation that names a panel by id is a silent no-op when
//! the id is unknown.
//!
//! Board order is insertion order; it is also the order in which the
//! alignment engine visits neighbours and the order of the exported file.

use std::{
    collections::HashSet,
    time::{SystemTime, UNIX_EPOCH},
};

use log::{debug, info, warn};
use rand::Rng;
use serde_json::Value;

use corkboard_core::{
    geometry::{Bounds, Point, Size},
    identifier::PanelId,
    panel::{Panel, PanelData, PanelKind},
};

use crate::{
    arrange::{ArrangeStrategy, EngineBuilder},
    config::PlacementConfig,
    error::{CorkboardError, ImportError},
};

const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Parameters for a new panel.
///
/// Only the type is required; title, size and payload fall back to the type's
/// defaults and the position to a random spot inside the viewport.
#[derive(Debug, Clone)]
pub struct NewPanel {
    kind: PanelKind,
    title: Option<String>,
    position: Option<Point>,
    size: Option<Size>,
    payload: Option<Value>,
}

impl NewPanel {
    pub fn new(kind: PanelKind) -> Self {
        Self {
            kind,
            title: None,
            position: None,
            size: None,
            payload: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    /// Requested size; clamped to the type's preset on insertion.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Ordered panel collection plus the z-order counter.
///
/// # Examples
///
/// ```
/// # use corkboard::board::{Board, NewPanel};
/// # use corkboard_core::{geometry::{Point, Size}, panel::PanelKind};
/// let mut board = Board::new();
/// let id = board.add_panel(
///     NewPanel::new(PanelKind::Notes).with_position(Point::new(10.0, 10.0)),
///     Size::new(1200.0, 800.0),
///     Point::default(),
/// );
///
/// let panel = board.panel(id).unwrap();
/// assert_eq!(panel.title(), "Notes");
/// assert_eq!(panel.size(), Size::new(300.0, 250.0));
/// assert_eq!(panel.z_index(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    panels: Vec<Panel>,
    next_z: i64,
    placement: PlacementConfig,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with the counter at `1`.
    pub fn new() -> Self {
        Self {
            panels: Vec::new(),
            next_z: 1,
            placement: PlacementConfig::default(),
        }
    }

    /// Uses `placement` for spawn and duplicate positions.
    pub fn with_placement(mut self, placement: PlacementConfig) -> Self {
        self.placement = placement;
        self
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id() == id)
    }

    pub(crate) fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.panel(id).is_some()
    }

    /// The panel currently flagged active, if any.
    pub fn active_panel(&self) -> Option<&Panel> {
        self.panels.iter().find(|p| p.is_active())
    }

    /// The z-index the next created or activated panel will receive.
    pub fn next_z_index(&self) -> i64 {
        self.next_z
    }

    fn take_z(&mut self) -> i64 {
        let z = self.next_z;
        self.next_z = self.next_z.saturating_add(1);
        z
    }

    fn generate_id(&self) -> PanelId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let mut rng = rand::rng();

        loop {
            let suffix: String = (0..ID_SUFFIX_LEN)
                .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
                .collect();
            let id = PanelId::new(&format!("panel-{millis}-{suffix}"));
            if !self.contains(id) {
                return id;
            }
        }
    }

    /// Random top-left inside the viewport, keeping the spawn margin and
    /// room for a nominal panel, in logical coordinates.
    fn random_position(&self, viewport: Size, canvas_offset: Point) -> Point {
        let margin = self.placement.spawn_margin();
        let nominal = self.placement.nominal_size();
        let mut rng = rand::rng();

        let span_x = viewport.width() - nominal.width() - margin * 2.0;
        let span_y = viewport.height() - nominal.height() - margin * 2.0;
        Point::new(
            rng.random::<f32>() * span_x + margin - canvas_offset.x(),
            rng.random::<f32>() * span_y + margin - canvas_offset.y(),
        )
    }

    /// Creates a panel and appends it to the board.
    ///
    /// `viewport` and `canvas_offset` are only used when no position is given.
    pub fn add_panel(&mut self, new: NewPanel, viewport: Size, canvas_offset: Point) -> PanelId {
        let id = self.generate_id();
        let position = new
            .position
            .unwrap_or_else(|| self.random_position(viewport, canvas_offset));
        let size = new
            .size
            .unwrap_or_else(|| new.kind.preset().default_size());
        let title = new
            .title
            .unwrap_or_else(|| new.kind.default_title().to_string());
        let data = match new.payload {
            Some(payload) => PanelData::new(new.kind, payload),
            None => PanelData::empty(new.kind),
        };
        let z = self.take_z();

        let panel = Panel::new(id, title, data, position, size, z);
        info!(panel_id:% = id, kind:% = new.kind, z_index = z; "Panel added");
        self.panels.push(panel);
        id
    }

    /// Removes a panel, returning it.
    pub fn remove_panel(&mut self, id: PanelId) -> Option<Panel> {
        let idx = self.panels.iter().position(|p| p.id() == id)?;
        let removed = self.panels.remove(idx);
        info!(panel_id:% = id; "Panel removed");
        Some(removed)
    }

    /// Copies a panel next to the original.
    ///
    /// The copy gets a new id and z-index, is offset on both axes, has all
    /// transient flags cleared, and owns its own copy of the payload.
    pub fn duplicate_panel(&mut self, id: PanelId) -> Option<PanelId> {
        let source = self.panel(id)?.clone();
        let offset = self.placement.duplicate_offset();
        let new_id = self.generate_id();
        let z = self.take_z();

        let position = source.position().add_point(Point::new(offset, offset));
        let panel = Panel::new(
            new_id,
            source.title(),
            source.data().clone(),
            position,
            source.size(),
            z,
        );
        info!(source:% = id, panel_id:% = new_id; "Panel duplicated");
        self.panels.push(panel);
        Some(new_id)
    }

    pub fn rename_panel(&mut self, id: PanelId, title: impl Into<String>) {
        if let Some(panel) = self.panel_mut(id) {
            panel.set_title(title);
        }
    }

    /// Replaces the payload; the panel type is unchanged.
    pub fn set_payload(&mut self, id: PanelId, payload: Value) {
        if let Some(panel) = self.panel_mut(id) {
            panel.set_payload(payload);
        }
    }

    /// Moves a panel. Positions are not clamped.
    pub fn update_position(&mut self, id: PanelId, position: Point) {
        if let Some(panel) = self.panel_mut(id) {
            panel.set_position(position);
        }
    }

    /// Resizes a panel within its preset bounds and returns the stored size.
    pub fn update_size(&mut self, id: PanelId, size: Size) -> Option<Size> {
        self.panel_mut(id).map(|panel| panel.set_size(size))
    }

    /// Marks `id` as the only active panel and brings it to the front.
    pub fn activate(&mut self, id: PanelId) {
        if !self.contains(id) {
            return;
        }
        let z = self.take_z();
        for panel in &mut self.panels {
            let is_target = panel.id() == id;
            panel.set_active(is_target);
            if is_target {
                panel.set_z_index(z);
            }
        }
        debug!(panel_id:% = id, z_index = z; "Panel activated");
    }

    /// Marks `id` as the only active panel without touching the z-order.
    pub(crate) fn select(&mut self, id: PanelId) {
        if !self.contains(id) {
            return;
        }
        for panel in &mut self.panels {
            panel.set_active(panel.id() == id);
        }
    }

    pub fn deactivate_all(&mut self) {
        for panel in &mut self.panels {
            panel.set_active(false);
        }
    }

    /// Removes every panel and resets the counter to `1`.
    pub fn clear(&mut self) {
        let removed = self.panels.len();
        self.panels.clear();
        self.next_z = 1;
        info!(removed = removed; "Board cleared");
    }

    /// Smallest rectangle containing every panel, `None` for an empty board.
    pub fn content_bounds(&self) -> Option<Bounds> {
        self.panels
            .iter()
            .map(Panel::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    /// Repositions every panel with the given strategy. Sizes are not touched.
    pub fn auto_arrange(&mut self, strategy: ArrangeStrategy, engines: &mut EngineBuilder) {
        if self.panels.is_empty() {
            return;
        }
        let sizes: Vec<Size> = self.panels.iter().map(Panel::size).collect();
        let positions = engines.engine(strategy).arrange(&sizes);

        for (panel, position) in self.panels.iter_mut().zip(positions) {
            panel.set_position(position);
        }
        info!(strategy:% = strategy, panels = self.panels.len(); "Board arranged");
    }

    /// Serializes the board as a pretty-printed JSON array of panel records.
    pub fn export_json(&self) -> Result<String, CorkboardError> {
        serde_json::to_string_pretty(&self.panels)
            .map_err(|err| CorkboardError::Export(err.to_string()))
    }

    /// Replaces the board contents with the panels in `text`.
    ///
    /// The input must be a JSON array of panel records with unique ids. On
    /// failure the board is left untouched. On success sizes outside their
    /// preset are clamped, at most the first active panel stays active, and
    /// the counter continues after the largest imported z-index.
    ///
    /// Returns the number of imported panels.
    pub fn import_json(&mut self, text: &str) -> Result<usize, ImportError> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_array() {
            return Err(ImportError::new("expected a JSON array of panel records"));
        }

        let mut panels: Vec<Panel> = serde_json::from_str(text)?;

        let mut seen = HashSet::with_capacity(panels.len());
        if let Some(duplicate) = panels.iter().find(|p| !seen.insert(p.id())) {
            return Err(ImportError::new(format!(
                "duplicate panel id `{}`",
                duplicate.id()
            )));
        }

        let mut active_seen = false;
        for panel in &mut panels {
            // No gesture survives an import
            panel.set_dragging(false);
            panel.set_resizing(false);
            if panel.is_active() {
                if active_seen {
                    warn!(panel_id:% = panel.id(); "Multiple active panels in import, deactivating");
                    panel.set_active(false);
                }
                active_seen = true;
            }
        }

        let max_z = panels.iter().map(Panel::z_index).max().unwrap_or(0).max(0);
        let next_z = max_z
            .checked_add(1)
            .ok_or_else(|| ImportError::new("zIndex out of range"))?;
        let count = panels.len();
        self.panels = panels;
        self.next_z = next_z;

        info!(panels = count, next_z_index = self.next_z; "Board imported");
        Ok(count)
    }
}
