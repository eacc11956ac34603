//! The host window abstraction.
//!
//! The chrome engine never owns a window. It reads and mutates geometry
//! and state flags through [`WindowHandle`], which the host implements for
//! its windowing backend. [`WinitWindow`](crate::winit_host::WinitWindow)
//! is the implementation for winit.

use crate::geometry::{Bounds, Point, Size};
use crate::window_state::WindowState;

/// Capabilities the chrome engine needs from a host window.
///
/// All coordinates are logical units. Position is the window's top-left
/// corner in screen space; size is the size of the (undecorated) window,
/// which is also the extent of its content area.
pub trait WindowHandle {
    /// Current top-left position in screen coordinates.
    fn position(&self) -> Point;

    /// Move the window.
    fn set_position(&mut self, position: Point);

    /// Current window size.
    fn size(&self) -> Size;

    /// Resize the window.
    fn set_size(&mut self, size: Size);

    /// The minimum-size override, or `None` when unset ("auto").
    fn min_size(&self) -> Option<Size>;

    /// Set or clear (`None`) the minimum-size override.
    fn set_min_size(&mut self, size: Option<Size>);

    /// Whether the window is maximized.
    fn is_maximized(&self) -> bool;

    /// Maximize or restore the window.
    fn set_maximized(&mut self, maximized: bool);

    /// Whether the window is fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Enter or leave fullscreen.
    fn set_fullscreen(&mut self, fullscreen: bool);

    /// Minimize (iconify) or restore the window.
    fn set_minimized(&mut self, minimized: bool);

    /// Bounds of the monitor whose area contains `point`, if any.
    fn monitor_containing(&self, point: Point) -> Option<Bounds>;

    /// Bounds of the primary monitor, if any.
    fn primary_monitor(&self) -> Option<Bounds>;

    /// Current position and size together.
    fn bounds(&self) -> Bounds {
        Bounds::from_origin_size(self.position(), self.size())
    }

    /// Apply position and size together.
    fn set_bounds(&mut self, bounds: Bounds) {
        self.set_position(bounds.origin());
        self.set_size(bounds.size());
    }

    /// The chrome state derived from the maximized/fullscreen flags.
    fn window_state(&self) -> WindowState {
        WindowState::from_flags(self.is_maximized(), self.is_fullscreen())
    }
}
