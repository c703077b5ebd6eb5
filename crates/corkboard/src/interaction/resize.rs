use log::{debug, trace, warn};

use corkboard_core::{
    geometry::{Point, Size},
    identifier::PanelId,
};

use crate::{board::Board, canvas::CanvasTransform, input::EventResponse};

/// State of an in-flight resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    panel_id: PanelId,
    start_size: Size,
    /// Screen position of the pointer when the resize started.
    origin: Point,
}

impl ResizeSession {
    pub fn panel_id(&self) -> PanelId {
        self.panel_id
    }

    pub fn start_size(&self) -> Size {
        self.start_size
    }

    pub fn origin(&self) -> Point {
        self.origin
    }
}

/// Resizes a panel from its bottom-right handle.
///
/// There is no cancel: a resize always keeps its last size.
#[derive(Debug, Default)]
pub struct ResizeController {
    session: Option<ResizeSession>,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&ResizeSession> {
        self.session.as_ref()
    }

    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    /// Starts resizing `panel_id` with the pointer at screen position `pointer`.
    ///
    /// The panel is activated (brought to the front) and flagged as resizing.
    /// A resize that is still in progress is ended first.
    pub fn start(&mut self, board: &mut Board, panel_id: PanelId, pointer: Point) -> EventResponse {
        let Some(start_size) = board.panel(panel_id).map(|p| p.size()) else {
            return EventResponse::Ignored;
        };

        if let Some(previous) = self.session {
            warn!(previous:% = previous.panel_id, panel_id:% = panel_id; "Resize replaced by a new one");
            self.end(board);
        }

        self.session = Some(ResizeSession {
            panel_id,
            start_size,
            origin: pointer,
        });

        board.activate(panel_id);
        if let Some(panel) = board.panel_mut(panel_id) {
            panel.set_resizing(true);
        }
        debug!(
            panel_id:% = panel_id,
            width = start_size.width(),
            height = start_size.height();
            "Resize started",
        );
        EventResponse::Consumed
    }

    /// Applies the pointer delta since [`start`](Self::start), scaled to
    /// logical units, and clamps the result to the panel's preset.
    ///
    /// Returns the stored size, or `None` when idle.
    pub fn update(
        &mut self,
        board: &mut Board,
        pointer: Point,
        canvas: &CanvasTransform,
    ) -> Option<Size> {
        let session = self.session?;
        let delta = pointer.sub_point(session.origin).scale(1.0 / canvas.scale());
        let requested = Size::new(
            session.start_size.width() + delta.x(),
            session.start_size.height() + delta.y(),
        );

        let size = board.update_size(session.panel_id, requested)?;
        trace!(panel_id:% = session.panel_id, width = size.width(), height = size.height(); "Resize updated");
        Some(size)
    }

    pub fn end(&mut self, board: &mut Board) {
        let Some(session) = self.session.take() else {
            return;
        };
        if let Some(panel) = board.panel_mut(session.panel_id) {
            panel.set_resizing(false);
        }
        debug!(panel_id:% = session.panel_id; "Resize ended");
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use corkboard_core::panel::PanelKind;

    use super::*;
    use crate::board::NewPanel;

    fn board_with(kind: PanelKind) -> (Board, PanelId) {
        let mut board = Board::new();
        let id = board.add_panel(
            NewPanel::new(kind).with_position(Point::default()),
            Size::new(1200.0, 800.0),
            Point::default(),
        );
        (board, id)
    }

    #[test]
    fn test_start_activates_and_flags() {
        let (mut board, id) = board_with(PanelKind::Statistic);
        let mut resize = ResizeController::new();

        let response = resize.start(&mut board, id, Point::new(280.0, 200.0));

        assert_eq!(response, EventResponse::Consumed);
        let panel = board.panel(id).unwrap();
        assert!(panel.is_active());
        assert!(panel.is_resizing());
        assert_eq!(panel.z_index(), 2);
        assert_eq!(resize.session().unwrap().start_size(), Size::new(280.0, 200.0));
    }

    #[test]
    fn test_update_scales_delta() {
        let (mut board, id) = board_with(PanelKind::Statistic);
        let mut canvas = CanvasTransform::new();
        canvas.set_scale(2.0);
        let mut resize = ResizeController::new();

        resize.start(&mut board, id, Point::new(100.0, 100.0));
        let size = resize.update(&mut board, Point::new(200.0, 160.0), &canvas);

        assert_eq!(size, Some(Size::new(330.0, 230.0)));
        let stored = board.panel(id).unwrap().size();
        assert_approx_eq!(f32, stored.width(), 330.0);
        assert_approx_eq!(f32, stored.height(), 230.0);
    }

    #[test]
    fn test_update_clamps_to_preset() {
        let (mut board, id) = board_with(PanelKind::Statistic);
        let canvas = CanvasTransform::new();
        let mut resize = ResizeController::new();

        resize.start(&mut board, id, Point::default());
        let shrunk = resize.update(&mut board, Point::new(-1000.0, -1000.0), &canvas);
        assert_eq!(shrunk, Some(Size::new(200.0, 150.0)));

        let grown = resize.update(&mut board, Point::new(1000.0, 1000.0), &canvas);
        assert_eq!(grown, Some(Size::new(600.0, 400.0)));
    }

    #[test]
    fn test_update_is_relative_to_start_not_previous() {
        let (mut board, id) = board_with(PanelKind::Notes);
        let canvas = CanvasTransform::new();
        let mut resize = ResizeController::new();

        resize.start(&mut board, id, Point::default());
        resize.update(&mut board, Point::new(50.0, 50.0), &canvas);
        let size = resize.update(&mut board, Point::new(10.0, 10.0), &canvas);

        assert_eq!(size, Some(Size::new(310.0, 260.0)));
    }

    #[test]
    fn test_update_while_idle_is_noop() {
        let (mut board, id) = board_with(PanelKind::Notes);
        let mut resize = ResizeController::new();

        assert_eq!(
            resize.update(&mut board, Point::new(50.0, 50.0), &CanvasTransform::new()),
            None
        );
        assert_eq!(board.panel(id).unwrap().size(), Size::new(300.0, 250.0));
    }

    #[test]
    fn test_end_clears_resizing_only() {
        let (mut board, id) = board_with(PanelKind::Notes);
        let mut resize = ResizeController::new();

        resize.start(&mut board, id, Point::default());
        resize.end(&mut board);

        let panel = board.panel(id).unwrap();
        assert!(!panel.is_resizing());
        assert!(panel.is_active());
        assert!(!resize.is_resizing());
    }
}
