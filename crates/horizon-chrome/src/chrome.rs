//! The chrome facade for one frameless window.
//!
//! [`WindowChrome`] owns the window handle and wires the pointer router,
//! the state coordinator, the clip manager and the idle queue together.
//! Hosts feed it pointer events and window notifications and connect to
//! its signals to update the cursor, the content clip and their own UI.
//!
//! # Example
//!
//! ```
//! use horizon_chrome::testing::MockWindow;
//! use horizon_chrome::{Bounds, ChromeConfig, Point, WindowChrome};
//!
//! let window = MockWindow::new(Bounds::new(100.0, 100.0, 800.0, 600.0));
//! let mut chrome = WindowChrome::new(window, ChromeConfig::new());
//!
//! // Drag the east edge 50 units outwards.
//! let local = Point::new(797.0, 300.0);
//! let screen = Point::new(897.0, 400.0);
//! assert!(chrome.on_pointer_press(local, screen, 1));
//! assert!(chrome.on_pointer_drag(local, Point::new(947.0, 400.0)));
//! assert!(chrome.on_pointer_release(local, Point::new(947.0, 400.0)));
//!
//! assert_eq!(chrome.window().bounds.width, 850.0);
//! ```

use horizon_chrome_core::logging::{span_names, targets};
use horizon_chrome_core::{PerfSpan, Signal, TaskQueue};

use crate::clip::RoundedClipManager;
use crate::config::ChromeConfig;
use crate::cursor::CursorHint;
use crate::drag_move::{DragMoveController, DragRegions};
use crate::geometry::{Bounds, Point, RoundedRect};
use crate::handle::WindowHandle;
use crate::platform::Platform;
use crate::resize::EdgeResizeController;
use crate::router::{ActiveGesture, PointerEvent, PointerGestureRouter};
use crate::window_state::{StateTransition, WindowState, WindowStateCoordinator};

/// Window-level commands, typically bound to title bar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowAction {
    /// Ask the host to close the window.
    Close,
    /// Minimize the window.
    Minimize,
    /// Maximize or restore; enters fullscreen instead on platforms whose
    /// zoom button does that.
    ToggleMaximize,
}

/// Chrome behavior for a single undecorated window.
pub struct WindowChrome<W: WindowHandle + 'static> {
    window: W,
    config: ChromeConfig,
    router: PointerGestureRouter,
    coordinator: WindowStateCoordinator,
    clip: RoundedClipManager,
    idle: TaskQueue<W>,
    /// Emitted with `(old, new)` when the window state changes.
    pub state_changed: Signal<(WindowState, WindowState)>,
    /// Emitted when [`WindowAction::Close`] is performed.
    pub close_requested: Signal<()>,
}

impl<W: WindowHandle + 'static> WindowChrome<W> {
    /// Attach chrome to a window.
    ///
    /// The initial state and clip are taken from the window without
    /// emitting any signal.
    pub fn new(mut window: W, config: ChromeConfig) -> Self {
        let resize = EdgeResizeController::new(config.effective_resize_margin(), config.min_size());
        let drag = DragMoveController::new(drag_regions(&config));
        let router = PointerGestureRouter::new(resize, drag);

        let mut coordinator =
            WindowStateCoordinator::new(config.is_fullscreen_bounds_workaround_enabled());
        let mut idle = TaskQueue::new();
        // Adopt the window's current state; nothing is captured for an
        // initial fullscreen since there are no pre-entry bounds.
        coordinator.set_bounds_workaround(false);
        coordinator.observe(&mut window, &mut idle);
        coordinator.set_bounds_workaround(config.is_fullscreen_bounds_workaround_enabled());

        let clip = RoundedClipManager::new(config.corner_radius(), window.bounds(), coordinator.state());

        tracing::debug!(
            target: targets::CHROME,
            platform = ?config.platform(),
            state = ?coordinator.state(),
            "window chrome attached"
        );

        Self {
            window,
            config,
            router,
            coordinator,
            clip,
            idle,
            state_changed: Signal::new(),
            close_requested: Signal::new(),
        }
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Dispatch a pointer event. Returns `true` if the chrome consumed it.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        // The flags may have changed behind our back, e.g. an OS shortcut.
        self.sync_window_state();
        let state = self.coordinator.state();
        let consumed = self.router.handle(event, &mut self.window, state);
        // A double-click on the title bar may have toggled maximized.
        self.sync_window_state();
        self.refresh_clip();
        consumed
    }

    pub fn on_pointer_move(&mut self, local: Point, screen: Point) -> bool {
        self.handle_pointer(&PointerEvent::moved(local, screen))
    }

    pub fn on_pointer_press(&mut self, local: Point, screen: Point, click_count: u32) -> bool {
        self.handle_pointer(&PointerEvent::pressed(local, screen, click_count))
    }

    pub fn on_pointer_drag(&mut self, local: Point, screen: Point) -> bool {
        self.handle_pointer(&PointerEvent::dragged(local, screen))
    }

    pub fn on_pointer_release(&mut self, local: Point, screen: Point) -> bool {
        self.handle_pointer(&PointerEvent::released(local, screen))
    }

    // =========================================================================
    // Window notifications
    // =========================================================================

    /// Observe the window's maximized/fullscreen flags.
    ///
    /// Call this whenever the host learns the flags may have changed. Emits
    /// `state_changed`, applies the transition side effects and drops any
    /// gesture in progress when the window leaves the normal state.
    pub fn sync_window_state(&mut self) -> Option<StateTransition> {
        let transition = self.coordinator.observe(&mut self.window, &mut self.idle)?;

        if !transition.to.is_normal() && !self.router.gesture().is_idle() {
            self.router.cancel();
        }
        if transition.refreshes_clip() {
            self.refresh_clip();
        }
        self.state_changed.emit((transition.from, transition.to));
        Some(transition)
    }

    /// Recompute the clip after the host moved or resized the window.
    pub fn notify_bounds_changed(&mut self) {
        self.refresh_clip();
    }

    /// Run tasks deferred to the idle turn, such as the fullscreen monitor fit.
    ///
    /// Returns the number of tasks run.
    pub fn run_idle_tasks(&mut self) -> usize {
        if !self.idle.has_pending() {
            return 0;
        }
        let _span = PerfSpan::new(span_names::TASK);
        let count = self.idle.process_all(&mut self.window);
        self.refresh_clip();
        count
    }

    /// Whether deferred tasks are waiting for the idle turn.
    pub fn has_idle_tasks(&self) -> bool {
        self.idle.has_pending()
    }

    /// Perform a window action.
    pub fn perform(&mut self, action: WindowAction) {
        tracing::debug!(target: targets::CHROME, ?action, "window action");
        match action {
            WindowAction::Close => self.close_requested.emit(()),
            WindowAction::Minimize => self.window.set_minimized(true),
            WindowAction::ToggleMaximize => {
                if self.config.platform().zoom_enters_fullscreen() {
                    let fullscreen = self.window.is_fullscreen();
                    self.window.set_fullscreen(!fullscreen);
                } else if !self.window.is_fullscreen() {
                    let maximized = self.window.is_maximized();
                    self.window.set_maximized(!maximized);
                }
                self.sync_window_state();
            }
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Change the corner radius at runtime. Zero gives square corners.
    pub fn set_corner_radius(&mut self, radius: f64) {
        self.config.set_corner_radius(radius);
        self.clip.set_corner_radius(
            self.config.corner_radius(),
            self.window.bounds(),
            self.coordinator.state(),
        );
    }

    /// Change the resize margin at runtime.
    pub fn set_resize_margin(&mut self, margin: f64) {
        self.config.set_resize_margin(margin);
        let effective = self.config.effective_resize_margin();
        self.router.resize_mut().set_margin(effective);
    }

    /// Enable or disable edge resizing.
    pub fn set_resize_enabled(&mut self, enabled: bool) {
        self.config.set_resize_enabled(enabled);
        let effective = self.config.effective_resize_margin();
        self.router.resize_mut().set_margin(effective);
    }

    /// Change the height of the default title bar strip.
    pub fn set_title_bar_height(&mut self, height: f64) {
        self.config.set_title_bar_height(height);
        self.router
            .drag_mut()
            .regions_mut()
            .set_title_bar_height(self.config.title_bar_height());
    }

    /// Mutable access to the drag regions, e.g. to register title bar buttons.
    pub fn drag_regions_mut(&mut self) -> &mut DragRegions {
        self.router.drag_mut().regions_mut()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn window(&self) -> &W {
        &self.window
    }

    /// Mutable access to the window. Call [`sync_window_state`](Self::sync_window_state)
    /// or [`notify_bounds_changed`](Self::notify_bounds_changed) after changing it.
    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    pub fn platform(&self) -> Platform {
        self.config.platform()
    }

    pub fn state(&self) -> WindowState {
        self.coordinator.state()
    }

    pub fn gesture(&self) -> &ActiveGesture {
        self.router.gesture()
    }

    pub fn cursor_hint(&self) -> CursorHint {
        self.router.cursor_hint()
    }

    /// The current content clip, `None` when the content is unclipped.
    pub fn clip(&self) -> Option<RoundedRect> {
        self.clip.clip()
    }

    /// Emitted once per change of the requested cursor.
    pub fn cursor_hint_changed(&self) -> &Signal<CursorHint> {
        &self.router.cursor_hint_changed
    }

    /// Emitted with the new clip whenever it changes.
    pub fn clip_changed(&self) -> &Signal<Option<RoundedRect>> {
        &self.clip.clip_changed
    }

    /// The pre-fullscreen bounds awaiting restore, if any.
    pub fn restore_bounds(&self) -> Option<Bounds> {
        self.coordinator.restore_bounds()
    }

    /// Detach the chrome and give the window back.
    pub fn into_window(self) -> W {
        self.window
    }

    fn refresh_clip(&mut self) {
        self.clip.refresh(self.window.bounds(), self.coordinator.state());
    }
}

impl<W: WindowHandle + std::fmt::Debug + 'static> std::fmt::Debug for WindowChrome<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowChrome")
            .field("window", &self.window)
            .field("state", &self.coordinator.state())
            .field("gesture", self.router.gesture())
            .field("clip", &self.clip.clip())
            .field("idle", &self.idle)
            .finish_non_exhaustive()
    }
}

fn drag_regions(config: &ChromeConfig) -> DragRegions {
    let mut regions = DragRegions::new(config.title_bar_height());
    regions.set_title_bar_region(config.title_bar_region().copied());
    for region in config.draggable_regions() {
        regions.add_draggable_region(*region);
    }
    for region in config.interactive_regions() {
        regions.add_interactive_region(*region);
    }
    regions
}
