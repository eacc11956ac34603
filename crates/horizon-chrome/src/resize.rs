//! Edge and corner resizing for undecorated windows.
//!
//! An invisible margin runs along every window edge. While the pointer
//! hovers inside it the controller reports a [`ResizeDirection`]; a press
//! there starts a [`ResizeSession`] and subsequent drag ticks resize the
//! window relative to the bounds captured at press time.
//!
//! Each axis is clamped on its own: a tick that would take an axis below
//! its minimum leaves that axis (extent and origin) untouched, so dragging a
//! west or north edge past the minimum never shifts the window.

use horizon_chrome_core::logging::targets;

use crate::cursor::CursorHint;
use crate::geometry::{
    Bounds, DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH, DEFAULT_RESIZE_MARGIN, Point, Size,
};
use crate::handle::WindowHandle;
use crate::window_state::WindowState;

/// Re-export of winit's ResizeDirection for convenience.
pub use winit::window::ResizeDirection;

/// Which edges a direction moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Edges {
    north: bool,
    south: bool,
    west: bool,
    east: bool,
}

impl Edges {
    fn of(direction: ResizeDirection) -> Self {
        let mut edges = Self::default();
        match direction {
            ResizeDirection::North => edges.north = true,
            ResizeDirection::South => edges.south = true,
            ResizeDirection::West => edges.west = true,
            ResizeDirection::East => edges.east = true,
            ResizeDirection::NorthWest => {
                edges.north = true;
                edges.west = true;
            }
            ResizeDirection::NorthEast => {
                edges.north = true;
                edges.east = true;
            }
            ResizeDirection::SouthWest => {
                edges.south = true;
                edges.west = true;
            }
            ResizeDirection::SouthEast => {
                edges.south = true;
                edges.east = true;
            }
        }
        edges
    }
}

/// Detect the resize direction for a window-local point.
///
/// `north = y < margin`, `south = y > height - margin`, `west = x < margin`,
/// `east = x > width - margin`. Corners are checked before single edges.
/// Returns `None` when the point is not in the margin.
pub fn detect_direction(point: Point, window_size: Size, margin: f64) -> Option<ResizeDirection> {
    if margin <= 0.0 {
        return None;
    }

    let north = point.y < margin;
    let south = point.y > window_size.height - margin;
    let west = point.x < margin;
    let east = point.x > window_size.width - margin;

    match (north, south, west, east) {
        (true, _, true, _) => Some(ResizeDirection::NorthWest),
        (true, _, _, true) => Some(ResizeDirection::NorthEast),
        (_, true, true, _) => Some(ResizeDirection::SouthWest),
        (_, true, _, true) => Some(ResizeDirection::SouthEast),
        (true, _, _, _) => Some(ResizeDirection::North),
        (_, true, _, _) => Some(ResizeDirection::South),
        (_, _, true, _) => Some(ResizeDirection::West),
        (_, _, _, true) => Some(ResizeDirection::East),
        _ => None,
    }
}

/// Compute the bounds for a resize tick.
///
/// `start` are the bounds at press time, `current` the last requested bounds and
/// `delta` the pointer movement since the press. Axes whose new extent
/// would fall below `min_size` keep their `current` values.
pub fn resized_bounds(
    direction: ResizeDirection,
    start: Bounds,
    current: Bounds,
    delta: Point,
    min_size: Size,
) -> Bounds {
    let edges = Edges::of(direction);
    let mut bounds = current;

    if edges.east {
        let width = start.width + delta.x;
        if width >= min_size.width {
            bounds.width = width;
        }
    } else if edges.west {
        let width = start.width - delta.x;
        if width >= min_size.width {
            bounds.width = width;
            bounds.x = start.x + delta.x;
        }
    }

    if edges.south {
        let height = start.height + delta.y;
        if height >= min_size.height {
            bounds.height = height;
        }
    } else if edges.north {
        let height = start.height - delta.y;
        if height >= min_size.height {
            bounds.height = height;
            bounds.y = start.y + delta.y;
        }
    }

    bounds
}

/// State captured when a resize gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    /// The edge or corner being dragged.
    pub direction: ResizeDirection,
    /// Pointer position in screen coordinates at press time.
    pub anchor: Point,
    /// Window bounds at press time.
    pub start_bounds: Bounds,
    /// The bounds last written by this gesture. Hosts may apply size
    /// requests asynchronously, so clamped axes are kept from here rather
    /// than read back from the window.
    pub requested: Bounds,
}

/// Detects resize directions and applies resize ticks to a window.
#[derive(Debug, Clone)]
pub struct EdgeResizeController {
    margin: f64,
    min_size: Size,
    direction: Option<ResizeDirection>,
}

impl EdgeResizeController {
    /// Create a controller with the given margin and fallback minimum size.
    pub fn new(margin: f64, min_size: Size) -> Self {
        Self {
            margin: margin.max(0.0),
            min_size,
            direction: None,
        }
    }

    /// Width of the resize margin.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Set the width of the resize margin. Zero disables resizing.
    pub fn set_margin(&mut self, margin: f64) {
        self.margin = margin.max(0.0);
    }

    /// The minimum size used when the window has no override.
    pub fn min_size(&self) -> Size {
        self.min_size
    }

    /// Set the fallback minimum size.
    pub fn set_min_size(&mut self, min_size: Size) {
        self.min_size = min_size;
    }

    /// The current hover direction.
    pub fn direction(&self) -> Option<ResizeDirection> {
        self.direction
    }

    /// The cursor for the current hover direction.
    pub fn cursor_hint(&self) -> CursorHint {
        CursorHint::for_direction(self.direction)
    }

    /// Recompute the hover direction for a pointer position.
    ///
    /// Forced to `None` unless the window is in the normal state.
    pub fn hover(
        &mut self,
        point: Point,
        window_size: Size,
        state: WindowState,
    ) -> Option<ResizeDirection> {
        self.direction = if state.is_normal() {
            detect_direction(point, window_size, self.margin)
        } else {
            None
        };
        self.direction
    }

    /// Start a resize at the current hover direction.
    pub fn begin<W: WindowHandle + ?Sized>(
        &mut self,
        window: &W,
        screen_point: Point,
        state: WindowState,
    ) -> Option<ResizeSession> {
        if !state.is_normal() {
            return None;
        }
        let direction = self.direction?;
        let start_bounds = window.bounds();
        let session = ResizeSession {
            direction,
            anchor: screen_point,
            start_bounds,
            requested: start_bounds,
        };
        tracing::trace!(target: targets::GESTURE, ?direction, "resize started");
        Some(session)
    }

    /// Apply a drag tick, writing only the geometry that changed.
    pub fn apply<W: WindowHandle + ?Sized>(
        &self,
        session: &mut ResizeSession,
        window: &mut W,
        screen_point: Point,
    ) {
        let current = session.requested;
        let min_size = self.effective_min_size(window);
        let next = resized_bounds(
            session.direction,
            session.start_bounds,
            current,
            screen_point - session.anchor,
            min_size,
        );

        if next.origin() != current.origin() {
            window.set_position(next.origin());
        }
        if next.size() != current.size() {
            window.set_size(next.size());
        }
        session.requested = next;
    }

    /// End the gesture. Returns whether a direction was active.
    pub fn end(&mut self) -> bool {
        let was_active = self.direction.take().is_some();
        if was_active {
            tracing::trace!(target: targets::GESTURE, "resize ended");
        }
        was_active
    }

    /// The window's minimum-size override where positive, per axis, and the
    /// configured minimum otherwise.
    fn effective_min_size<W: WindowHandle + ?Sized>(&self, window: &W) -> Size {
        let over = window.min_size().unwrap_or(Size::ZERO);
        Size::new(
            if over.width > 0.0 { over.width } else { self.min_size.width },
            if over.height > 0.0 { over.height } else { self.min_size.height },
        )
    }
}

impl Default for EdgeResizeController {
    fn default() -> Self {
        Self::new(
            DEFAULT_RESIZE_MARGIN,
            Size::new(DEFAULT_MIN_WIDTH, DEFAULT_MIN_HEIGHT),
        )
    }
}
