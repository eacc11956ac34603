//! Rounded-corner clipping.
//!
//! A transparent undecorated window gets rounded corners by clipping its
//! content to a rounded rectangle. The clip only applies to a normal
//! window: maximized and fullscreen windows fill their area edge to edge.

use horizon_chrome_core::Signal;

use crate::geometry::{Bounds, DEFAULT_CORNER_RADIUS, RoundedRect};
use crate::window_state::WindowState;

/// Compute the clip for a window.
///
/// Returns `Some` iff `radius > 0` and the window is in the normal state.
/// The clip covers the window-local rectangle `(0, 0, width, height)`.
pub fn compute_clip(bounds: Bounds, radius: f64, state: WindowState) -> Option<RoundedRect> {
    if radius > 0.0 && state.is_normal() {
        Some(RoundedRect::new(bounds.to_local(), radius))
    } else {
        None
    }
}

/// Keeps the content clip in sync with window geometry and state.
///
/// `clip_changed` fires only when the clip actually changes, with `None`
/// meaning "no clip".
#[derive(Debug)]
pub struct RoundedClipManager {
    radius: f64,
    current: Option<RoundedRect>,
    /// Emitted with the new clip whenever it changes.
    pub clip_changed: Signal<Option<RoundedRect>>,
}

impl RoundedClipManager {
    /// Create a manager and compute the initial clip without emitting.
    pub fn new(radius: f64, bounds: Bounds, state: WindowState) -> Self {
        let radius = radius.max(0.0);
        Self {
            radius,
            current: compute_clip(bounds, radius, state),
            clip_changed: Signal::new(),
        }
    }

    /// The current clip.
    pub fn clip(&self) -> Option<RoundedRect> {
        self.current
    }

    pub fn corner_radius(&self) -> f64 {
        self.radius
    }

    /// Change the corner radius. Zero disables clipping.
    pub fn set_corner_radius(&mut self, radius: f64, bounds: Bounds, state: WindowState) {
        self.radius = radius.max(0.0);
        self.refresh(bounds, state);
    }

    /// Recompute the clip. Returns whether it changed.
    pub fn refresh(&mut self, bounds: Bounds, state: WindowState) -> bool {
        let next = compute_clip(bounds, self.radius, state);
        if next == self.current {
            return false;
        }
        self.current = next;
        self.clip_changed.emit(next);
        true
    }
}

impl Default for RoundedClipManager {
    fn default() -> Self {
        Self::new(DEFAULT_CORNER_RADIUS, Bounds::ZERO, WindowState::Normal)
    }
}
