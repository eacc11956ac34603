//! winit integration.
//!
//! [`WinitWindow`] implements [`WindowHandle`] for a winit window, and
//! [`PointerTranslator`] turns winit's raw `WindowEvent`s into the
//! [`PointerEvent`]s the chrome understands: it tracks the cursor and the
//! primary button, converts physical pixels to logical units and counts
//! consecutive clicks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::monitor::MonitorHandle;
use winit::window::{Fullscreen, Window, WindowAttributes};

use crate::config::DEFAULT_DOUBLE_CLICK_INTERVAL_MS;
use crate::error::WindowError;
use crate::geometry::{Bounds, Point, Size};
use crate::handle::WindowHandle;
use crate::router::PointerEvent;

/// Maximum pointer travel between two clicks of a double-click.
pub const DOUBLE_CLICK_SLOP: f64 = 4.0;

/// Window attributes for an undecorated, transparent window.
///
/// Transparency lets the rounded clip show the desktop behind the corners.
pub fn frameless_window_attributes(title: impl Into<String>, size: Size) -> WindowAttributes {
    Window::default_attributes()
        .with_title(title)
        .with_inner_size(LogicalSize::new(size.width, size.height))
        .with_min_inner_size(LogicalSize::new(1.0, 1.0))
        .with_decorations(false)
        .with_transparent(true)
}

/// A winit window driven by the chrome.
#[derive(Debug, Clone)]
pub struct WinitWindow {
    window: Arc<Window>,
    /// Last position set or observed, for platforms that cannot report it.
    last_position: Point,
    min_size: Option<Size>,
}

impl WinitWindow {
    pub fn new(window: Arc<Window>) -> Self {
        let mut this = Self {
            window,
            last_position: Point::ZERO,
            min_size: None,
        };
        if let Ok(position) = this.try_position() {
            this.last_position = position;
        }
        this
    }

    /// Get the underlying winit window.
    pub fn winit_window(&self) -> &Window {
        &self.window
    }

    /// Get a clone of the Arc-wrapped winit window.
    pub fn winit_window_arc(&self) -> Arc<Window> {
        Arc::clone(&self.window)
    }

    pub fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }

    /// The outer position in logical units.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::PositionUnavailable`] on platforms that do not
    /// expose window positions (e.g., Wayland).
    pub fn try_position(&self) -> Result<Point, WindowError> {
        let position = self
            .window
            .outer_position()
            .map_err(|_| WindowError::PositionUnavailable)?
            .to_logical::<f64>(self.scale_factor());
        Ok(Point::new(position.x, position.y))
    }

    /// Record a position reported by `WindowEvent::Moved`.
    pub fn observe_moved(&mut self) {
        if let Ok(position) = self.try_position() {
            self.last_position = position;
        }
    }
}

fn monitor_bounds(monitor: &MonitorHandle) -> Bounds {
    let scale = monitor.scale_factor();
    let position = monitor.position().to_logical::<f64>(scale);
    let size = monitor.size().to_logical::<f64>(scale);
    Bounds::new(position.x, position.y, size.width, size.height)
}

impl WindowHandle for WinitWindow {
    fn position(&self) -> Point {
        self.try_position().unwrap_or(self.last_position)
    }

    fn set_position(&mut self, position: Point) {
        self.window
            .set_outer_position(LogicalPosition::new(position.x, position.y));
        self.last_position = position;
    }

    fn size(&self) -> Size {
        let size = self.window.inner_size().to_logical::<f64>(self.scale_factor());
        Size::new(size.width, size.height)
    }

    fn set_size(&mut self, size: Size) {
        // Applied asynchronously; the window reports the new size with `Resized`.
        let _ = self
            .window
            .request_inner_size(LogicalSize::new(size.width, size.height));
    }

    fn min_size(&self) -> Option<Size> {
        self.min_size
    }

    fn set_min_size(&mut self, size: Option<Size>) {
        self.window
            .set_min_inner_size(size.map(|s| LogicalSize::new(s.width, s.height)));
        self.min_size = size;
    }

    fn is_maximized(&self) -> bool {
        self.window.is_maximized()
    }

    fn set_maximized(&mut self, maximized: bool) {
        self.window.set_maximized(maximized);
    }

    fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.window
            .set_fullscreen(fullscreen.then_some(Fullscreen::Borderless(None)));
    }

    fn set_minimized(&mut self, minimized: bool) {
        self.window.set_minimized(minimized);
    }

    fn monitor_containing(&self, point: Point) -> Option<Bounds> {
        self.window
            .available_monitors()
            .map(|monitor| monitor_bounds(&monitor))
            .find(|bounds| bounds.contains(point))
    }

    fn primary_monitor(&self) -> Option<Bounds> {
        self.window
            .primary_monitor()
            .map(|monitor| monitor_bounds(&monitor))
    }
}

/// Counts consecutive clicks at roughly the same spot.
#[derive(Debug, Clone)]
struct ClickTracker {
    interval: Duration,
    last: Option<(Instant, Point)>,
    count: u32,
}

impl ClickTracker {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
            count: 0,
        }
    }

    fn register(&mut self, at: Point, now: Instant) -> u32 {
        let continues = self.last.is_some_and(|(time, point)| {
            now.saturating_duration_since(time) <= self.interval
                && point.distance_to(at) <= DOUBLE_CLICK_SLOP
        });
        self.count = if continues { self.count + 1 } else { 1 };
        self.last = Some((now, at));
        self.count
    }
}

/// Turns winit window events into chrome pointer events.
#[derive(Debug, Clone)]
pub struct PointerTranslator {
    /// Cursor position in logical window-local units.
    cursor: Option<Point>,
    pressed: bool,
    clicks: ClickTracker,
}

impl PointerTranslator {
    /// Create a translator with the given double-click interval.
    pub fn new(double_click_interval: Duration) -> Self {
        Self {
            cursor: None,
            pressed: false,
            clicks: ClickTracker::new(double_click_interval),
        }
    }

    /// Whether the primary button is held.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Translate a winit event for `window`.
    ///
    /// Returns `None` for events the chrome does not care about.
    pub fn translate(&mut self, event: &WindowEvent, window: &WinitWindow) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let local = position.to_logical::<f64>(window.scale_factor());
                Some(self.cursor_moved(Point::new(local.x, local.y), window.position()))
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.button_pressed(window.position(), Instant::now()),
                ElementState::Released => self.button_released(window.position()),
            },
            WindowEvent::CursorLeft { .. } => {
                self.cursor_left();
                None
            }
            _ => None,
        }
    }

    /// The cursor moved to `local`; `origin` is the window's screen position.
    pub fn cursor_moved(&mut self, local: Point, origin: Point) -> PointerEvent {
        self.cursor = Some(local);
        if self.pressed {
            PointerEvent::dragged(local, origin + local)
        } else {
            PointerEvent::moved(local, origin + local)
        }
    }

    /// The primary button went down at the last cursor position.
    pub fn button_pressed(&mut self, origin: Point, now: Instant) -> Option<PointerEvent> {
        let local = self.cursor?;
        self.pressed = true;
        let screen = origin + local;
        let click_count = self.clicks.register(screen, now);
        Some(PointerEvent::pressed(local, screen, click_count))
    }

    /// The primary button was released.
    pub fn button_released(&mut self, origin: Point) -> Option<PointerEvent> {
        let was_pressed = std::mem::replace(&mut self.pressed, false);
        let local = self.cursor?;
        was_pressed.then(|| PointerEvent::released(local, origin + local))
    }

    /// The cursor left the window. The position is kept while the button is
    /// held so a drag can finish outside.
    pub fn cursor_left(&mut self) {
        if !self.pressed {
            self.cursor = None;
        }
    }
}

impl Default for PointerTranslator {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DOUBLE_CLICK_INTERVAL_MS))
    }
}
