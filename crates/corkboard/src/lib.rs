//! Corkboard - a spatial layout engine for panel canvases.
//!
//! Panels are typed rectangles placed on a pannable, zoomable canvas. This
//! crate holds the interactive part of the engine: the canvas transform, drag
//! and resize gestures, smart alignment guides, and automatic arrangement.
//! The [`Workspace`] facade wires them together behind a small input API.
//!
//! # Examples
//!
//! ```
//! use corkboard::{Workspace, arrange::ArrangeStrategy, board::NewPanel};
//! use corkboard_core::{geometry::Point, panel::PanelKind};
//!
//! let mut workspace = Workspace::default();
//! let id = workspace.add_panel(NewPanel::new(PanelKind::Chart));
//! workspace.auto_arrange(ArrangeStrategy::Masonry);
//!
//! assert_eq!(workspace.board().panel(id).unwrap().position(), Point::new(20.0, 20.0));
//! ```

pub mod alignment;
pub mod arrange;
pub mod board;
pub mod canvas;
pub mod config;
pub mod input;
pub mod interaction;
pub mod registry;
pub mod workspace;

mod error;

pub use corkboard_core::{geometry, identifier, panel, placement, preset};

pub use error::{CorkboardError, ImportError};
pub use workspace::Workspace;
