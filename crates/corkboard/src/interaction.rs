//! Gesture controllers.
//!
//! Each controller owns at most one session, so at most one drag and one
//! resize can be in flight at any time. Controllers never own panels; they
//! read and write the [`Board`](crate::board::Board) passed to each call and
//! remember only the id of the panel they manipulate.
//!
//! ```text
//! DragController:    Idle ── start ──► Dragging ── end / cancel ──► Idle
//! ResizeController:  Idle ── start ──► Resizing ── end ───────────► Idle
//! ```

mod drag;
mod resize;

pub use drag::{DragController, DragSession};
pub use resize::{ResizeController, ResizeSession};
