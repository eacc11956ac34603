//! In-memory window handle for tests.
//!
//! `MockWindow` records geometry and state flags exactly as they are set,
//! with no platform behavior of its own: maximizing or entering fullscreen
//! only flips the flag, the way a transparent undecorated window does on
//! the platforms that need the fullscreen bounds workaround.

use crate::geometry::{Bounds, Point, Size};
use crate::handle::WindowHandle;

/// A window handle backed by plain fields.
#[doc(hidden)]
#[derive(Debug, Clone, PartialEq)]
pub struct MockWindow {
    pub bounds: Bounds,
    pub min_size: Option<Size>,
    pub maximized: bool,
    pub fullscreen: bool,
    pub minimized: bool,
    pub monitors: Vec<Bounds>,
    pub primary: Option<usize>,
    /// Number of `set_position` calls, to check that position is left alone.
    pub position_writes: usize,
    /// When set, `set_size` only records the request until [`MockWindow::settle`].
    pub deferred_resize: bool,
    /// The last size requested while resizing is deferred.
    pub pending_size: Option<Size>,
}

impl MockWindow {
    /// A window with the given bounds on a single 1920x1080 primary monitor.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            min_size: None,
            maximized: false,
            fullscreen: false,
            minimized: false,
            monitors: vec![Bounds::new(0.0, 0.0, 1920.0, 1080.0)],
            primary: Some(0),
            position_writes: 0,
            deferred_resize: false,
            pending_size: None,
        }
    }

    /// Replace the monitor layout.
    pub fn with_monitors(mut self, monitors: Vec<Bounds>, primary: Option<usize>) -> Self {
        self.monitors = monitors;
        self.primary = primary;
        self
    }

    /// Set the minimum-size override.
    pub fn with_min_size(mut self, width: f64, height: f64) -> Self {
        self.min_size = Some(Size::new(width, height));
        self
    }

    /// Hold size requests until [`MockWindow::settle`], like a platform
    /// that resizes asynchronously.
    pub fn with_deferred_resize(mut self) -> Self {
        self.deferred_resize = true;
        self
    }

    /// Apply the pending size request, if any.
    pub fn settle(&mut self) {
        if let Some(size) = self.pending_size.take() {
            self.bounds.width = size.width;
            self.bounds.height = size.height;
        }
    }
}

impl WindowHandle for MockWindow {
    fn position(&self) -> Point {
        self.bounds.origin()
    }

    fn set_position(&mut self, position: Point) {
        self.bounds.x = position.x;
        self.bounds.y = position.y;
        self.position_writes += 1;
    }

    fn size(&self) -> Size {
        self.bounds.size()
    }

    fn set_size(&mut self, size: Size) {
        if self.deferred_resize {
            self.pending_size = Some(size);
        } else {
            self.bounds.width = size.width;
            self.bounds.height = size.height;
        }
    }

    fn min_size(&self) -> Option<Size> {
        self.min_size
    }

    fn set_min_size(&mut self, size: Option<Size>) {
        self.min_size = size;
    }

    fn is_maximized(&self) -> bool {
        self.maximized
    }

    fn set_maximized(&mut self, maximized: bool) {
        self.maximized = maximized;
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    fn set_minimized(&mut self, minimized: bool) {
        self.minimized = minimized;
    }

    fn monitor_containing(&self, point: Point) -> Option<Bounds> {
        self.monitors.iter().copied().find(|m| m.contains(point))
    }

    fn primary_monitor(&self) -> Option<Bounds> {
        self.primary.and_then(|i| self.monitors.get(i).copied())
    }
}
