//! Pointer dispatch between the resize and move gestures.
//!
//! The router receives every pointer event the host sees on its window
//! content and decides whether the chrome handles it. It owns the single
//! [`ActiveGesture`]: at most one of resize or move is ever in progress.
//!
//! # Precedence
//!
//! 1. An active gesture owns every event until release.
//! 2. A press inside the resize margin starts a resize.
//! 3. A press inside the drag region starts a move, or toggles maximized
//!    on a double-click.
//! 4. Everything else passes through to the host's widgets.
//!
//! Every handler returns `true` when the event was consumed.

use horizon_chrome_core::Signal;
use horizon_chrome_core::logging::{span_names, targets};

use crate::cursor::CursorHint;
use crate::drag_move::{DragMoveController, DragMoveSession};
use crate::geometry::Point;
use crate::handle::WindowHandle;
use crate::resize::{EdgeResizeController, ResizeSession};
use crate::window_state::WindowState;

/// Kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer moved with no button held.
    Move,
    /// Primary button pressed.
    Press,
    /// Pointer moved with the primary button held.
    Drag,
    /// Primary button released.
    Release,
}

/// A pointer event on the window content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Position relative to the window's top-left corner.
    pub local: Point,
    /// Position in screen coordinates.
    pub screen: Point,
    /// Number of consecutive clicks; only meaningful for presses.
    pub click_count: u32,
}

impl PointerEvent {
    pub fn moved(local: Point, screen: Point) -> Self {
        Self {
            kind: PointerEventKind::Move,
            local,
            screen,
            click_count: 0,
        }
    }

    pub fn pressed(local: Point, screen: Point, click_count: u32) -> Self {
        Self {
            kind: PointerEventKind::Press,
            local,
            screen,
            click_count,
        }
    }

    pub fn dragged(local: Point, screen: Point) -> Self {
        Self {
            kind: PointerEventKind::Drag,
            local,
            screen,
            click_count: 0,
        }
    }

    pub fn released(local: Point, screen: Point) -> Self {
        Self {
            kind: PointerEventKind::Release,
            local,
            screen,
            click_count: 0,
        }
    }
}

/// The gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ActiveGesture {
    #[default]
    Idle,
    Resize(ResizeSession),
    Move(DragMoveSession),
}

impl ActiveGesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Routes pointer events to the resize and move controllers.
#[derive(Debug)]
pub struct PointerGestureRouter {
    resize: EdgeResizeController,
    drag: DragMoveController,
    gesture: ActiveGesture,
    cursor_hint: CursorHint,
    /// Emitted once per change of the requested cursor.
    pub cursor_hint_changed: Signal<CursorHint>,
}

impl PointerGestureRouter {
    pub fn new(resize: EdgeResizeController, drag: DragMoveController) -> Self {
        Self {
            resize,
            drag,
            gesture: ActiveGesture::Idle,
            cursor_hint: CursorHint::Default,
            cursor_hint_changed: Signal::new(),
        }
    }

    pub fn resize(&self) -> &EdgeResizeController {
        &self.resize
    }

    pub fn resize_mut(&mut self) -> &mut EdgeResizeController {
        &mut self.resize
    }

    pub fn drag(&self) -> &DragMoveController {
        &self.drag
    }

    pub fn drag_mut(&mut self) -> &mut DragMoveController {
        &mut self.drag
    }

    /// The gesture in progress.
    pub fn gesture(&self) -> &ActiveGesture {
        &self.gesture
    }

    /// The last cursor hint reported.
    pub fn cursor_hint(&self) -> CursorHint {
        self.cursor_hint
    }

    /// Dispatch an event by kind.
    pub fn handle<W: WindowHandle + ?Sized>(
        &mut self,
        event: &PointerEvent,
        window: &mut W,
        state: WindowState,
    ) -> bool {
        let _span = tracing::trace_span!(target: span_names::POINTER, "pointer", kind = ?event.kind)
            .entered();

        match event.kind {
            PointerEventKind::Move => self.on_move(event, &*window, state),
            PointerEventKind::Press => self.on_press(event, window, state),
            PointerEventKind::Drag => self.on_drag(event, window, state),
            PointerEventKind::Release => self.on_release(),
        }
    }

    /// Hover: update the resize direction and cursor. Never consumed.
    pub fn on_move<W: WindowHandle + ?Sized>(
        &mut self,
        event: &PointerEvent,
        window: &W,
        state: WindowState,
    ) -> bool {
        if self.gesture.is_idle() {
            self.resize.hover(event.local, window.size(), state);
            self.update_cursor_hint();
        }
        false
    }

    pub fn on_press<W: WindowHandle + ?Sized>(
        &mut self,
        event: &PointerEvent,
        window: &mut W,
        state: WindowState,
    ) -> bool {
        if !self.gesture.is_idle() {
            return true;
        }

        let size = window.size();
        self.resize.hover(event.local, size, state);
        self.update_cursor_hint();

        if let Some(session) = self.resize.begin(&*window, event.screen, state) {
            self.gesture = ActiveGesture::Resize(session);
            return true;
        }

        if !self.drag.hit(event.local, size, self.resize.margin()) {
            return false;
        }

        if event.click_count >= 2 {
            return self.drag.toggle_maximized(window);
        }

        match self.drag.begin(event.local, state) {
            Some(session) => {
                self.gesture = ActiveGesture::Move(session);
                true
            }
            None => false,
        }
    }

    pub fn on_drag<W: WindowHandle + ?Sized>(
        &mut self,
        event: &PointerEvent,
        window: &mut W,
        state: WindowState,
    ) -> bool {
        if self.gesture.is_idle() {
            return false;
        }
        if !state.is_normal() {
            tracing::trace!(target: targets::GESTURE, ?state, "window left normal state, dropping gesture");
            self.cancel();
            return false;
        }

        match &mut self.gesture {
            ActiveGesture::Resize(session) => self.resize.apply(session, window, event.screen),
            ActiveGesture::Move(session) => self.drag.apply(session, window, event.screen),
            ActiveGesture::Idle => {}
        }
        true
    }

    /// End the active gesture. Consumed if one was active.
    pub fn on_release(&mut self) -> bool {
        let was_active = !self.gesture.is_idle();
        if let ActiveGesture::Move(_) = self.gesture {
            tracing::trace!(target: targets::GESTURE, "move ended");
        }
        self.gesture = ActiveGesture::Idle;
        self.resize.end();
        was_active
    }

    /// Drop the active gesture without applying anything further.
    pub fn cancel(&mut self) {
        self.gesture = ActiveGesture::Idle;
        self.resize.end();
    }

    fn update_cursor_hint(&mut self) {
        let hint = self.resize.cursor_hint();
        if hint != self.cursor_hint {
            self.cursor_hint = hint;
            self.cursor_hint_changed.emit(hint);
        }
    }
}

impl Default for PointerGestureRouter {
    fn default() -> Self {
        Self::new(EdgeResizeController::default(), DragMoveController::default())
    }
}
