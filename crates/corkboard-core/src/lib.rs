//! Corkboard Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Corkboard canvas
//! engine and its tools. It includes:
//!
//! - **Geometry**: Points, sizes, bounds and insets ([`geometry`] module)
//! - **Identifiers**: String-interned panel ids ([`identifier::PanelId`])
//! - **Panels**: The panel record and its type/payload ([`panel`] module)
//! - **Presets**: Per-type size limits ([`preset::SizePreset`])
//! - **Placement**: Centering, cascading and clamping helpers ([`placement`] module)

pub mod geometry;
pub mod identifier;
pub mod panel;
pub mod placement;
pub mod preset;
