//! Title-bar drag-to-move.
//!
//! The drag region is where pressing and dragging moves the window. It is
//! made of the title bar (a strip along the top of the window or an
//! explicit rectangle) plus any extra draggable regions, minus interactive
//! regions such as window buttons, which must stay clickable.

use horizon_chrome_core::logging::targets;

use crate::geometry::{Bounds, DEFAULT_TITLE_BAR_HEIGHT, Point, Size};
use crate::handle::WindowHandle;
use crate::window_state::WindowState;

/// The window-local regions that start a move.
#[derive(Debug, Clone, PartialEq)]
pub struct DragRegions {
    title_bar_height: f64,
    title_bar_region: Option<Bounds>,
    draggable_regions: Vec<Bounds>,
    interactive_regions: Vec<Bounds>,
}

impl DragRegions {
    /// A default title bar strip of the given height and no extra regions.
    pub fn new(title_bar_height: f64) -> Self {
        Self {
            title_bar_height: title_bar_height.max(0.0),
            title_bar_region: None,
            draggable_regions: Vec::new(),
            interactive_regions: Vec::new(),
        }
    }

    /// Use an explicit title bar rectangle instead of the default strip.
    pub fn with_title_bar_region(mut self, region: Bounds) -> Self {
        self.title_bar_region = Some(region);
        self
    }

    /// Add a region that also moves the window.
    pub fn with_draggable_region(mut self, region: Bounds) -> Self {
        self.draggable_regions.push(region);
        self
    }

    /// Add a region excluded from dragging (buttons, text fields).
    pub fn with_interactive_region(mut self, region: Bounds) -> Self {
        self.interactive_regions.push(region);
        self
    }

    pub fn title_bar_height(&self) -> f64 {
        self.title_bar_height
    }

    pub fn set_title_bar_height(&mut self, height: f64) {
        self.title_bar_height = height.max(0.0);
    }

    pub fn title_bar_region(&self) -> Option<&Bounds> {
        self.title_bar_region.as_ref()
    }

    pub fn set_title_bar_region(&mut self, region: Option<Bounds>) {
        self.title_bar_region = region;
    }

    pub fn draggable_regions(&self) -> &[Bounds] {
        &self.draggable_regions
    }

    pub fn add_draggable_region(&mut self, region: Bounds) {
        self.draggable_regions.push(region);
    }

    pub fn clear_draggable_regions(&mut self) {
        self.draggable_regions.clear();
    }

    pub fn interactive_regions(&self) -> &[Bounds] {
        &self.interactive_regions
    }

    pub fn add_interactive_region(&mut self, region: Bounds) {
        self.interactive_regions.push(region);
    }

    pub fn clear_interactive_regions(&mut self) {
        self.interactive_regions.clear();
    }

    /// Check if a window-local point is in the drag region.
    ///
    /// `inset` is the resize margin; the default strip stays clear of the
    /// left and right resize edges.
    pub fn contains(&self, point: Point, window_size: Size, inset: f64) -> bool {
        if self.interactive_regions.iter().any(|r| r.contains(point)) {
            return false;
        }
        self.in_title_bar(point, window_size, inset)
            || self.draggable_regions.iter().any(|r| r.contains(point))
    }

    fn in_title_bar(&self, point: Point, window_size: Size, inset: f64) -> bool {
        if let Some(region) = &self.title_bar_region {
            return region.contains(point);
        }
        if self.title_bar_height <= 0.0 {
            return false;
        }

        point.x >= inset
            && point.x < window_size.width - inset
            && point.y >= 0.0
            && point.y < self.title_bar_height
    }
}

impl Default for DragRegions {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE_BAR_HEIGHT)
    }
}

/// State captured when a move gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragMoveSession {
    /// Press point in window-local coordinates. The window keeps this point
    /// under the pointer while moving.
    pub anchor: Point,
}

/// Moves the window while its drag region is dragged.
#[derive(Debug, Clone, Default)]
pub struct DragMoveController {
    regions: DragRegions,
}

impl DragMoveController {
    pub fn new(regions: DragRegions) -> Self {
        Self { regions }
    }

    pub fn regions(&self) -> &DragRegions {
        &self.regions
    }

    pub fn regions_mut(&mut self) -> &mut DragRegions {
        &mut self.regions
    }

    /// Check if a window-local point is in the drag region.
    pub fn hit(&self, point: Point, window_size: Size, inset: f64) -> bool {
        self.regions.contains(point, window_size, inset)
    }

    /// Start a move at a window-local press point. Only in the normal state.
    pub fn begin(&self, local_point: Point, state: WindowState) -> Option<DragMoveSession> {
        if !state.is_normal() {
            return None;
        }
        tracing::trace!(
            target: targets::GESTURE,
            x = local_point.x,
            y = local_point.y,
            "move started"
        );
        Some(DragMoveSession {
            anchor: local_point,
        })
    }

    /// Apply a drag tick: `position = screen_point - anchor`.
    pub fn apply<W: WindowHandle + ?Sized>(
        &self,
        session: &DragMoveSession,
        window: &mut W,
        screen_point: Point,
    ) {
        window.set_position(screen_point - session.anchor);
    }

    /// Toggle the maximized flag on double-activation of the drag region.
    ///
    /// Ignored while fullscreen. Returns whether the flag was toggled.
    pub fn toggle_maximized<W: WindowHandle + ?Sized>(&self, window: &mut W) -> bool {
        if window.is_fullscreen() {
            return false;
        }
        let maximized = !window.is_maximized();
        tracing::trace!(target: targets::GESTURE, maximized, "title bar double-click");
        window.set_maximized(maximized);
        true
    }
}
