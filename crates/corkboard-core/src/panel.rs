//! Panel records.
//!
//! A [`Panel`] is one widget placed on the canvas: its identity, type, title,
//! geometry, stacking order, interaction flags, and an opaque payload. The
//! payload is a [`PanelData`] sum type whose discriminant *is* the panel type,
//! so a panel can never change kind after creation.
//!
//! Panels serialize to the board file record format (camelCase keys):
//!
//! ```json
//! {
//!   "id": "panel-1",
//!   "type": "statistic",
//!   "title": "Users",
//!   "position": { "x": 20.0, "y": 20.0 },
//!   "size": { "width": 280.0, "height": 200.0 },
//!   "zIndex": 1,
//!   "active": false,
//!   "dragging": false,
//!   "resizing": false,
//!   "data": { "value": 42 }
//! }
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    geometry::{Bounds, Point, Size},
    identifier::PanelId,
    preset::SizePreset,
};

/// The fixed set of panel types.
///
/// The names match board file and configuration strings (snake_case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    Statistic,
    Chart,
    List,
    Table,
    Calendar,
    Map,
    Notes,
}

impl PanelKind {
    /// All panel types, in declaration order.
    pub const ALL: [PanelKind; 7] = [
        PanelKind::Statistic,
        PanelKind::Chart,
        PanelKind::List,
        PanelKind::Table,
        PanelKind::Calendar,
        PanelKind::Map,
        PanelKind::Notes,
    ];

    /// Returns the size preset for this type.
    pub fn preset(self) -> &'static SizePreset {
        SizePreset::for_kind(self)
    }

    /// Title given to new panels of this type.
    pub fn default_title(self) -> &'static str {
        match self {
            PanelKind::Statistic => "Statistics",
            PanelKind::Chart => "Performance Chart",
            PanelKind::List => "Pending Tasks",
            PanelKind::Table => "Data Table",
            PanelKind::Calendar => "Calendar",
            PanelKind::Map => "Map",
            PanelKind::Notes => "Notes",
        }
    }

    /// Human readable label of the type.
    pub fn label(self) -> &'static str {
        match self {
            PanelKind::Statistic => "Statistic",
            PanelKind::Chart => "Chart",
            PanelKind::List => "List",
            PanelKind::Table => "Table",
            PanelKind::Calendar => "Calendar",
            PanelKind::Map => "Map",
            PanelKind::Notes => "Notes",
        }
    }
}

impl FromStr for PanelKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "statistic" => Ok(Self::Statistic),
            "chart" => Ok(Self::Chart),
            "list" => Ok(Self::List),
            "table" => Ok(Self::Table),
            "calendar" => Ok(Self::Calendar),
            "map" => Ok(Self::Map),
            "notes" => Ok(Self::Notes),
            _ => Err("Unsupported panel type"),
        }
    }
}

impl From<PanelKind> for &'static str {
    fn from(val: PanelKind) -> Self {
        match val {
            PanelKind::Statistic => "statistic",
            PanelKind::Chart => "chart",
            PanelKind::List => "list",
            PanelKind::Table => "table",
            PanelKind::Calendar => "calendar",
            PanelKind::Map => "map",
            PanelKind::Notes => "notes",
        }
    }
}

impl Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Opaque per-type payload.
///
/// Layout code only ever looks at the discriminant (through [`PanelData::kind`]);
/// the JSON value inside belongs to whoever renders the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelData {
    Statistic(Value),
    Chart(Value),
    List(Value),
    Table(Value),
    Calendar(Value),
    Map(Value),
    Notes(Value),
}

impl PanelData {
    /// Wraps a payload value for the given panel type.
    pub fn new(kind: PanelKind, value: Value) -> Self {
        match kind {
            PanelKind::Statistic => Self::Statistic(value),
            PanelKind::Chart => Self::Chart(value),
            PanelKind::List => Self::List(value),
            PanelKind::Table => Self::Table(value),
            PanelKind::Calendar => Self::Calendar(value),
            PanelKind::Map => Self::Map(value),
            PanelKind::Notes => Self::Notes(value),
        }
    }

    /// An empty object payload for the given panel type.
    pub fn empty(kind: PanelKind) -> Self {
        Self::new(kind, Value::Object(Map::new()))
    }

    /// The panel type this payload belongs to.
    pub fn kind(&self) -> PanelKind {
        match self {
            Self::Statistic(_) => PanelKind::Statistic,
            Self::Chart(_) => PanelKind::Chart,
            Self::List(_) => PanelKind::List,
            Self::Table(_) => PanelKind::Table,
            Self::Calendar(_) => PanelKind::Calendar,
            Self::Map(_) => PanelKind::Map,
            Self::Notes(_) => PanelKind::Notes,
        }
    }

    /// The wrapped JSON value.
    pub fn value(&self) -> &Value {
        match self {
            Self::Statistic(value)
            | Self::Chart(value)
            | Self::List(value)
            | Self::Table(value)
            | Self::Calendar(value)
            | Self::Map(value)
            | Self::Notes(value) => value,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Statistic(value)
            | Self::Chart(value)
            | Self::List(value)
            | Self::Table(value)
            | Self::Calendar(value)
            | Self::Map(value)
            | Self::Notes(value) => value,
        }
    }
}

/// Errors raised when a serialized record cannot become a [`Panel`].
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("panel id must not be empty")]
    EmptyId,

    #[error("panel `{0}` has a non-finite position or size")]
    NonFinite(String),
}

/// A widget instance placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PanelRecord", into = "PanelRecord")]
pub struct Panel {
    id: PanelId,
    title: String,
    position: Point,
    size: Size,
    z_index: i64,
    active: bool,
    dragging: bool,
    resizing: bool,
    data: PanelData,
}

impl Panel {
    /// Creates an inactive panel. The size is clamped to the preset of `data`'s type.
    pub fn new(
        id: PanelId,
        title: impl Into<String>,
        data: PanelData,
        position: Point,
        size: Size,
        z_index: i64,
    ) -> Self {
        let size = data.kind().preset().clamp(size);
        Self {
            id,
            title: title.into(),
            position,
            size,
            z_index,
            active: false,
            dragging: false,
            resizing: false,
            data,
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn kind(&self) -> PanelKind {
        self.data.kind()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Top-left corner in logical canvas coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets the size, clamped to this panel's preset. Returns the size actually stored.
    pub fn set_size(&mut self, size: Size) -> Size {
        self.size = self.kind().preset().clamp(size);
        self.size
    }

    /// The rectangle covered by the panel.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.position, self.size)
    }

    pub fn z_index(&self) -> i64 {
        self.z_index
    }

    pub fn set_z_index(&mut self, z_index: i64) {
        self.z_index = z_index;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    pub fn set_resizing(&mut self, resizing: bool) {
        self.resizing = resizing;
    }

    /// Clears `active`, `dragging` and `resizing`.
    pub fn clear_flags(&mut self) {
        self.active = false;
        self.dragging = false;
        self.resizing = false;
    }

    pub fn data(&self) -> &PanelData {
        &self.data
    }

    /// Replaces the payload value, keeping the panel type.
    pub fn set_payload(&mut self, value: Value) {
        self.data = PanelData::new(self.kind(), value);
    }
}

/// Board file representation of a panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PanelRecord {
    id: String,
    #[serde(rename = "type")]
    kind: PanelKind,
    #[serde(default)]
    title: String,
    position: Point,
    size: Size,
    #[serde(default)]
    z_index: i64,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    dragging: bool,
    #[serde(default)]
    resizing: bool,
    #[serde(default)]
    data: Value,
}

impl TryFrom<PanelRecord> for Panel {
    type Error = RecordError;

    fn try_from(record: PanelRecord) -> Result<Self, Self::Error> {
        if record.id.is_empty() {
            return Err(RecordError::EmptyId);
        }

        let finite = [
            record.position.x(),
            record.position.y(),
            record.size.width(),
            record.size.height(),
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(RecordError::NonFinite(record.id));
        }

        let preset = record.kind.preset();
        let size = preset.clamp(record.size);
        if size != record.size {
            warn!(
                panel_id = record.id.as_str(),
                kind:% = record.kind,
                width = record.size.width(),
                height = record.size.height();
                "Panel size outside its preset, clamping",
            );
        }

        Ok(Panel {
            id: PanelId::new(&record.id),
            title: record.title,
            position: record.position,
            size,
            z_index: record.z_index,
            active: record.active,
            dragging: record.dragging,
            resizing: record.resizing,
            data: PanelData::new(record.kind, record.data),
        })
    }
}

impl From<Panel> for PanelRecord {
    fn from(panel: Panel) -> Self {
        PanelRecord {
            id: panel.id.to_string(),
            kind: panel.kind(),
            title: panel.title,
            position: panel.position,
            size: panel.size,
            z_index: panel.z_index,
            active: panel.active,
            dragging: panel.dragging,
            resizing: panel.resizing,
            data: panel.data.into_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_panel() -> Panel {
        Panel::new(
            PanelId::new("panel-sample"),
            "Users",
            PanelData::new(PanelKind::Statistic, json!({ "value": 42 })),
            Point::new(20.0, 30.0),
            Size::new(280.0, 200.0),
            3,
        )
    }

    #[test]
    fn test_kind_from_str_and_display() {
        for kind in PanelKind::ALL {
            let name = kind.to_string();
            assert_eq!(name.parse::<PanelKind>(), Ok(kind));
        }
        assert!("widget".parse::<PanelKind>().is_err());
    }

    #[test]
    fn test_data_kind_matches_constructor() {
        for kind in PanelKind::ALL {
            assert_eq!(PanelData::empty(kind).kind(), kind);
        }
    }

    #[test]
    fn test_new_clamps_size() {
        let panel = Panel::new(
            PanelId::new("panel-tiny"),
            "Tiny",
            PanelData::empty(PanelKind::Notes),
            Point::default(),
            Size::new(10.0, 10.0),
            1,
        );
        assert_eq!(panel.size(), Size::new(250.0, 200.0));
    }

    #[test]
    fn test_set_size_returns_clamped_value() {
        let mut panel = sample_panel();
        let stored = panel.set_size(Size::new(1000.0, 100.0));
        assert_eq!(stored, Size::new(600.0, 150.0));
        assert_eq!(panel.size(), stored);
    }

    #[test]
    fn test_set_payload_keeps_kind() {
        let mut panel = sample_panel();
        panel.set_payload(json!({ "value": 7 }));

        assert_eq!(panel.kind(), PanelKind::Statistic);
        assert_eq!(panel.data().value(), &json!({ "value": 7 }));
    }

    #[test]
    fn test_clear_flags() {
        let mut panel = sample_panel();
        panel.set_active(true);
        panel.set_dragging(true);
        panel.set_resizing(true);

        panel.clear_flags();
        assert!(!panel.is_active());
        assert!(!panel.is_dragging());
        assert!(!panel.is_resizing());
    }

    #[test]
    fn test_serialize_record_format() {
        let value = serde_json::to_value(sample_panel()).unwrap();

        assert_eq!(value["id"], "panel-sample");
        assert_eq!(value["type"], "statistic");
        assert_eq!(value["zIndex"], 3);
        assert_eq!(value["size"]["width"], 280.0);
        assert_eq!(value["data"]["value"], 42);
    }

    #[test]
    fn test_deserialize_defaults_optional_fields() {
        let panel: Panel = serde_json::from_value(json!({
            "id": "panel-min",
            "type": "map",
            "position": { "x": 1.0, "y": 2.0 },
            "size": { "width": 500.0, "height": 450.0 }
        }))
        .unwrap();

        assert_eq!(panel.kind(), PanelKind::Map);
        assert_eq!(panel.title(), "");
        assert_eq!(panel.z_index(), 0);
        assert!(!panel.is_active());
        assert_eq!(panel.data().value(), &Value::Null);
    }

    #[test]
    fn test_deserialize_clamps_size() {
        let panel: Panel = serde_json::from_value(json!({
            "id": "panel-huge",
            "type": "chart",
            "position": { "x": 0.0, "y": 0.0 },
            "size": { "width": 4000.0, "height": 10.0 }
        }))
        .unwrap();

        assert_eq!(panel.size(), Size::new(900.0, 250.0));
    }

    #[test]
    fn test_deserialize_rejects_empty_id() {
        let result: Result<Panel, _> = serde_json::from_value(json!({
            "id": "",
            "type": "map",
            "position": { "x": 0.0, "y": 0.0 },
            "size": { "width": 500.0, "height": 450.0 }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_type() {
        let result: Result<Panel, _> = serde_json::from_value(json!({
            "id": "panel-x",
            "type": "widget",
            "position": { "x": 0.0, "y": 0.0 },
            "size": { "width": 500.0, "height": 450.0 }
        }));
        assert!(result.is_err());
    }
}
