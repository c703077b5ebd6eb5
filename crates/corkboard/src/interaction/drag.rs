use log::{debug, trace, warn};

use corkboard_core::{geometry::Point, identifier::PanelId};

use crate::{board::Board, canvas::CanvasTransform, input::EventResponse};

/// State of an in-flight drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    panel_id: PanelId,
    /// Logical pointer position minus panel position at grab time.
    grab_offset: Point,
    start_position: Point,
}

impl DragSession {
    pub fn panel_id(&self) -> PanelId {
        self.panel_id
    }

    pub fn grab_offset(&self) -> Point {
        self.grab_offset
    }

    /// Position of the panel before the drag started.
    pub fn start_position(&self) -> Point {
        self.start_position
    }
}

/// Moves a panel with the pointer.
///
/// # Examples
///
/// ```
/// # use corkboard::{board::{Board, NewPanel}, canvas::CanvasTransform, interaction::DragController};
/// # use corkboard_core::{geometry::{Point, Size}, panel::PanelKind};
/// let mut board = Board::new();
/// let id = board.add_panel(
///     NewPanel::new(PanelKind::Notes).with_position(Point::new(100.0, 100.0)),
///     Size::new(1200.0, 800.0),
///     Point::default(),
/// );
/// let canvas = CanvasTransform::new();
/// let mut drag = DragController::new();
///
/// drag.start(&mut board, id, Point::new(110.0, 120.0), &canvas);
/// drag.move_to(&mut board, Point::new(210.0, 170.0), &canvas);
/// drag.end(&mut board);
///
/// assert_eq!(board.panel(id).unwrap().position(), Point::new(200.0, 150.0));
/// ```
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Grabs `panel_id` at the screen position `pointer`.
    ///
    /// The panel becomes the only active panel and is flagged as dragging.
    /// A drag that is still in progress is ended first. Returns
    /// [`EventResponse::Consumed`] so the host suppresses default handling and
    /// propagation, or [`EventResponse::Ignored`] for an unknown panel.
    pub fn start(
        &mut self,
        board: &mut Board,
        panel_id: PanelId,
        pointer: Point,
        canvas: &CanvasTransform,
    ) -> EventResponse {
        let Some(position) = board.panel(panel_id).map(|p| p.position()) else {
            return EventResponse::Ignored;
        };

        if let Some(previous) = self.session {
            warn!(previous:% = previous.panel_id, panel_id:% = panel_id; "Drag replaced by a new one");
            self.end(board);
        }

        let logical = canvas.screen_to_canvas(pointer);
        self.session = Some(DragSession {
            panel_id,
            grab_offset: logical.sub_point(position),
            start_position: position,
        });

        board.select(panel_id);
        if let Some(panel) = board.panel_mut(panel_id) {
            panel.set_dragging(true);
        }
        debug!(panel_id:% = panel_id, x = position.x(), y = position.y(); "Drag started");
        EventResponse::Consumed
    }

    /// Moves the dragged panel so the grab point follows `pointer`.
    ///
    /// Returns the new position, or `None` when no drag is active or the
    /// panel has disappeared. Positions are not clamped.
    pub fn move_to(
        &mut self,
        board: &mut Board,
        pointer: Point,
        canvas: &CanvasTransform,
    ) -> Option<Point> {
        let session = self.session?;
        let position = canvas
            .screen_to_canvas(pointer)
            .sub_point(session.grab_offset);

        let panel = board.panel_mut(session.panel_id)?;
        panel.set_position(position);
        trace!(panel_id:% = session.panel_id, x = position.x(), y = position.y(); "Drag moved");
        Some(position)
    }

    /// Drops the panel where it is.
    pub fn end(&mut self, board: &mut Board) {
        let Some(session) = self.session.take() else {
            return;
        };
        if let Some(panel) = board.panel_mut(session.panel_id) {
            panel.set_dragging(false);
            panel.set_active(false);
        }
        debug!(panel_id:% = session.panel_id; "Drag ended");
    }

    /// Puts the panel back where the drag started, then ends the drag.
    pub fn cancel(&mut self, board: &mut Board) {
        let Some(session) = self.session else {
            return;
        };
        board.update_position(session.panel_id, session.start_position);
        debug!(panel_id:% = session.panel_id; "Drag cancelled");
        self.end(board);
    }
}
