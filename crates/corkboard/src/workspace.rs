//! The [`Workspace`] facade.
//!
//! A workspace ties the board, the canvas transform, both gesture controllers
//! and the alignment engine together and routes raw input to them. Hosts only
//! need to forward pointer, wheel and escape events; everything else is
//! reachable through the accessors.
//!
//! Pointer moves are routed by priority: an active pan wins over an active
//! resize, which wins over an active drag.

use log::{debug, info};

use corkboard_core::{
    geometry::{Point, Size},
    identifier::PanelId,
};

use crate::{
    alignment::{AlignmentEngine, Guides},
    arrange::{ArrangeStrategy, EngineBuilder},
    board::{Board, NewPanel},
    canvas::CanvasTransform,
    config::AppConfig,
    error::CorkboardError,
    input::{EventResponse, PointerButton, PointerEvent, WheelEvent, ZoomDirection},
    interaction::{DragController, ResizeController},
};

/// Board, canvas and gesture state of one open canvas.
///
/// # Examples
///
/// ```
/// # use corkboard::{board::NewPanel, input::PointerEvent, workspace::Workspace};
/// # use corkboard_core::{geometry::Point, panel::PanelKind};
/// let mut workspace = Workspace::default();
/// let id = workspace.add_panel(
///     NewPanel::new(PanelKind::Notes).with_position(Point::new(100.0, 100.0)),
/// );
///
/// workspace.pointer_down_on_panel(id, &PointerEvent::new(Point::new(110.0, 110.0)));
/// workspace.pointer_move(&PointerEvent::new(Point::new(160.0, 130.0)));
/// workspace.pointer_up();
///
/// let panel = workspace.board().panel(id).unwrap();
/// assert_eq!(panel.position(), Point::new(150.0, 120.0));
/// ```
#[derive(Debug)]
pub struct Workspace {
    board: Board,
    canvas: CanvasTransform,
    drag: DragController,
    resize: ResizeController,
    alignment: AlignmentEngine,
    guides: Guides,
    engines: EngineBuilder,
    config: AppConfig,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl Workspace {
    pub fn new(config: AppConfig) -> Self {
        Self {
            board: Board::new().with_placement(config.placement().clone()),
            canvas: CanvasTransform::new(),
            drag: DragController::new(),
            resize: ResizeController::new(),
            alignment: AlignmentEngine::new(config.alignment().threshold()),
            guides: Guides::default(),
            engines: EngineBuilder::from_config(config.arrange()),
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn canvas(&self) -> &CanvasTransform {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut CanvasTransform {
        &mut self.canvas
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn resize(&self) -> &ResizeController {
        &self.resize
    }

    /// Guides from the latest drag tick; empty outside a drag.
    pub fn guides(&self) -> &Guides {
        &self.guides
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Adds a panel, spawning it inside the configured viewport if no
    /// position is given.
    pub fn add_panel(&mut self, new: NewPanel) -> PanelId {
        self.board
            .add_panel(new, self.config.canvas().viewport(), self.canvas.offset())
    }

    /// Pointer pressed on empty canvas.
    ///
    /// Starts a pan for the middle button or shift + primary. A plain primary
    /// press deselects every panel and is left to the host.
    pub fn pointer_down_on_canvas(&mut self, event: &PointerEvent) -> EventResponse {
        let response = self.canvas.begin_pan(event);
        if !response.is_consumed() && event.button() == PointerButton::Primary {
            self.board.deactivate_all();
        }
        response
    }

    /// Pointer pressed on a panel body: starts dragging it.
    pub fn pointer_down_on_panel(&mut self, id: PanelId, event: &PointerEvent) -> EventResponse {
        if event.button() != PointerButton::Primary {
            return EventResponse::Ignored;
        }
        self.drag
            .start(&mut self.board, id, event.position(), &self.canvas)
    }

    /// Pointer pressed on a panel's resize handle: starts resizing it.
    pub fn pointer_down_on_resize_handle(
        &mut self,
        id: PanelId,
        event: &PointerEvent,
    ) -> EventResponse {
        if event.button() != PointerButton::Primary {
            return EventResponse::Ignored;
        }
        self.resize.start(&mut self.board, id, event.position())
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) -> EventResponse {
        let pointer = event.position();

        if self.canvas.is_panning() {
            self.canvas.update_pan(pointer);
            return EventResponse::Consumed;
        }

        if self.resize.is_resizing() {
            self.resize.update(&mut self.board, pointer, &self.canvas);
            return EventResponse::Consumed;
        }

        if self.drag.is_dragging() {
            self.drag_tick(pointer);
            return EventResponse::Consumed;
        }

        EventResponse::Ignored
    }

    fn drag_tick(&mut self, pointer: Point) {
        let Some(position) = self.drag.move_to(&mut self.board, pointer, &self.canvas) else {
            return;
        };
        let Some(id) = self.drag.session().map(|session| session.panel_id()) else {
            return;
        };
        let Some(panel) = self.board.panel(id) else {
            return;
        };

        let result = self.alignment.check(panel, self.board.panels());
        if self.config.alignment().snap() {
            let snapped = result.apply(position);
            if snapped != position {
                self.board.update_position(id, snapped);
            }
        }
        self.guides = result.into_guides();
    }

    /// Pointer released anywhere: ends every gesture in progress.
    pub fn pointer_up(&mut self) {
        self.canvas.end_pan();
        self.drag.end(&mut self.board);
        self.resize.end(&mut self.board);
        self.guides.clear();
    }

    /// Escape pressed: a drag in progress snaps back to where it started.
    ///
    /// Resizes are not cancellable and keep running.
    pub fn cancel_gesture(&mut self) {
        self.drag.cancel(&mut self.board);
        self.guides.clear();
    }

    /// Zooms one step at the cursor. A zero delta is ignored.
    pub fn wheel(&mut self, event: &WheelEvent) -> EventResponse {
        let Some(direction) = ZoomDirection::from_delta(event.delta()) else {
            return EventResponse::Ignored;
        };
        self.canvas.zoom(direction, event.position());
        EventResponse::Consumed
    }

    /// Fits every panel into `viewport`. Returns `false` for an empty board.
    pub fn fit_to_content(&mut self, viewport: Size) -> bool {
        let Some(content) = self.board.content_bounds() else {
            debug!("Nothing to fit");
            return false;
        };
        self.canvas
            .fit_to_content(content, viewport, self.config.canvas().fit_padding());
        true
    }

    pub fn auto_arrange(&mut self, strategy: ArrangeStrategy) {
        self.board.auto_arrange(strategy, &mut self.engines);
    }

    /// Arranges with the configured default strategy.
    pub fn auto_arrange_default(&mut self) {
        let strategy = self.config.arrange().strategy();
        info!(strategy:% = strategy; "Arranging with default strategy");
        self.auto_arrange(strategy);
    }

    /// Replaces the board with the panels of a board file.
    ///
    /// Gestures in progress are dropped first. On failure the board is left
    /// untouched and the error keeps `text` for reporting.
    pub fn load_json(&mut self, text: &str) -> Result<usize, CorkboardError> {
        self.pointer_up();
        self.board
            .import_json(text)
            .map_err(|err| CorkboardError::new_import_error(err, text))
    }

    pub fn export_json(&self) -> Result<String, CorkboardError> {
        self.board.export_json()
    }
}
