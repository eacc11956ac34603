//! Window state coordination across normal, maximized and fullscreen.
//!
//! The coordinator does not own state transitions. Chrome buttons,
//! double-clicks and programmatic toggles flip the window's flags; the
//! coordinator observes the new flags, runs the transition function
//! [`plan_transition`] and applies the resulting [`StateAction`]s.
//!
//! # Fullscreen bounds workaround
//!
//! On macOS a transparent undecorated window keeps its old bounds when it
//! enters native fullscreen, leaving a black void around the content. When the workaround is enabled the coordinator:
//!
//! 1. snapshots the current bounds into the restore bounds (unless an
//!    unconsumed snapshot already exists),
//! 2. posts a task to the idle queue that forces the window onto the bounds
//!    of the monitor containing its center and pins the minimum size to
//!    those bounds,
//! 3. on leaving fullscreen, clears the minimum-size override and applies
//!    (then invalidates) the restore bounds.
//!
//! The forcing step is deferred so it runs after the toolkit's own
//! fullscreen transition has settled.

use horizon_chrome_core::TaskQueue;
use horizon_chrome_core::logging::{span_names, targets};

use crate::error::WindowError;
use crate::geometry::Bounds;
use crate::handle::WindowHandle;

/// The chrome-relevant state of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowState {
    /// Regular, freely resizable and movable.
    #[default]
    Normal,
    /// Maximized to the work area.
    Maximized,
    /// Fullscreen.
    Fullscreen,
}

impl WindowState {
    /// Derive the state from the window's flags. Fullscreen wins when both are set.
    pub fn from_flags(maximized: bool, fullscreen: bool) -> Self {
        if fullscreen {
            Self::Fullscreen
        } else if maximized {
            Self::Maximized
        } else {
            Self::Normal
        }
    }

    /// Whether resize and move gestures are allowed.
    pub fn is_normal(self) -> bool {
        self == Self::Normal
    }

    pub fn is_maximized(self) -> bool {
        self == Self::Maximized
    }

    pub fn is_fullscreen(self) -> bool {
        self == Self::Fullscreen
    }
}

/// A side effect of a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateAction {
    /// Recompute the rounded clip for the new state.
    RefreshClip,
    /// Snapshot the current bounds unless a valid snapshot exists.
    CaptureRestoreBounds,
    /// Post the deferred monitor-fit task.
    ScheduleMonitorFit,
    /// Reset the minimum-size override to "auto".
    ClearMinSizeOverride,
    /// Apply and invalidate a valid restore snapshot.
    ApplyRestoreBounds,
}

/// The transition function.
///
/// Pure: callable from real flag observation and from tests alike.
/// Returns no actions when the state did not change.
pub fn plan_transition(
    from: WindowState,
    to: WindowState,
    bounds_workaround: bool,
) -> Vec<StateAction> {
    if from == to {
        return Vec::new();
    }

    let mut actions = vec![StateAction::RefreshClip];

    if bounds_workaround {
        if to.is_fullscreen() {
            actions.push(StateAction::CaptureRestoreBounds);
            actions.push(StateAction::ScheduleMonitorFit);
        } else if from.is_fullscreen() {
            // The override pins the monitor size; it must go before restoring.
            actions.push(StateAction::ClearMinSizeOverride);
            actions.push(StateAction::ApplyRestoreBounds);
        }
    }

    actions
}

/// A state change observed on the window, with the actions it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct StateTransition {
    pub from: WindowState,
    pub to: WindowState,
    pub actions: Vec<StateAction>,
}

impl StateTransition {
    /// Check if the transition asks for a clip recomputation.
    pub fn refreshes_clip(&self) -> bool {
        self.actions.contains(&StateAction::RefreshClip)
    }
}

/// Tracks the window state and applies transition side effects.
#[derive(Debug, Clone)]
pub struct WindowStateCoordinator {
    state: WindowState,
    restore_bounds: Option<Bounds>,
    bounds_workaround: bool,
}

impl WindowStateCoordinator {
    /// Create a coordinator in the normal state.
    pub fn new(bounds_workaround: bool) -> Self {
        Self {
            state: WindowState::Normal,
            restore_bounds: None,
            bounds_workaround,
        }
    }

    /// The last observed state.
    pub fn state(&self) -> WindowState {
        self.state
    }

    /// The pending restore snapshot, if one is valid.
    pub fn restore_bounds(&self) -> Option<Bounds> {
        self.restore_bounds.filter(Bounds::is_valid)
    }

    /// Whether the fullscreen bounds workaround is active.
    pub fn is_bounds_workaround_enabled(&self) -> bool {
        self.bounds_workaround
    }

    /// Enable or disable the fullscreen bounds workaround.
    pub fn set_bounds_workaround(&mut self, enabled: bool) {
        self.bounds_workaround = enabled;
    }

    /// Observe the window's flags and react to a state change.
    ///
    /// Returns the transition if the state changed since the last call.
    pub fn observe<W>(&mut self, window: &mut W, idle: &mut TaskQueue<W>) -> Option<StateTransition>
    where
        W: WindowHandle + 'static,
    {
        let to = window.window_state();
        let from = self.state;
        if from == to {
            return None;
        }

        let _span = tracing::debug_span!(target: span_names::STATE, "state_transition").entered();
        tracing::debug!(target: targets::STATE, ?from, ?to, "window state changed");

        self.state = to;
        let actions = plan_transition(from, to, self.bounds_workaround);
        for action in &actions {
            self.apply(*action, window, idle);
        }

        Some(StateTransition { from, to, actions })
    }

    fn apply<W>(&mut self, action: StateAction, window: &mut W, idle: &mut TaskQueue<W>)
    where
        W: WindowHandle + 'static,
    {
        match action {
            // The clip lives with the caller.
            StateAction::RefreshClip => {}
            StateAction::CaptureRestoreBounds => {
                if self.restore_bounds().is_none() {
                    let bounds = window.bounds();
                    tracing::debug!(target: targets::STATE, ?bounds, "captured restore bounds");
                    self.restore_bounds = Some(bounds);
                }
            }
            StateAction::ScheduleMonitorFit => {
                idle.post(|window: &mut W| {
                    if !window.is_fullscreen() {
                        tracing::debug!(
                            target: targets::STATE,
                            "left fullscreen before the monitor fit ran, skipping"
                        );
                        return;
                    }
                    if let Err(err) = fit_to_monitor(window) {
                        tracing::warn!(target: targets::STATE, %err, "monitor fit skipped");
                    }
                });
            }
            StateAction::ClearMinSizeOverride => {
                window.set_min_size(None);
            }
            StateAction::ApplyRestoreBounds => {
                if let Some(bounds) = self.restore_bounds.take().filter(Bounds::is_valid) {
                    tracing::debug!(target: targets::STATE, ?bounds, "applied restore bounds");
                    window.set_bounds(bounds);
                }
            }
        }
    }
}

impl Default for WindowStateCoordinator {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Resolve the monitor the window is on.
///
/// Uses the monitor containing the window's center point and falls back to
/// the primary monitor.
pub fn resolve_monitor<W: WindowHandle + ?Sized>(window: &W) -> Option<Bounds> {
    let center = window.bounds().center();
    window.monitor_containing(center).or_else(|| {
        tracing::warn!(
            target: targets::STATE,
            x = center.x,
            y = center.y,
            "no monitor contains the window center, using the primary monitor"
        );
        window.primary_monitor()
    })
}

/// Force the window onto the bounds of its monitor and pin the minimum size
/// to them, so nothing clamps the forced size.
///
/// Leaves the window untouched if no monitor can be resolved.
pub fn fit_to_monitor<W: WindowHandle + ?Sized>(window: &mut W) -> Result<Bounds, WindowError> {
    let monitor = resolve_monitor(window).ok_or(WindowError::NoMonitor)?;
    window.set_bounds(monitor);
    window.set_min_size(Some(monitor.size()));
    tracing::debug!(target: targets::STATE, ?monitor, "forced window onto monitor bounds");
    Ok(monitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::testing::MockWindow;

    fn window() -> MockWindow {
        MockWindow::new(Bounds::new(100.0, 100.0, 800.0, 600.0))
    }

    #[test]
    fn test_state_from_flags() {
        assert_eq!(WindowState::from_flags(false, false), WindowState::Normal);
        assert_eq!(WindowState::from_flags(true, false), WindowState::Maximized);
        assert_eq!(WindowState::from_flags(false, true), WindowState::Fullscreen);
        assert_eq!(WindowState::from_flags(true, true), WindowState::Fullscreen);
    }

    #[test]
    fn test_plan_no_change() {
        assert!(plan_transition(WindowState::Normal, WindowState::Normal, true).is_empty());
    }

    #[test]
    fn test_plan_maximize_only_refreshes_clip() {
        for workaround in [false, true] {
            assert_eq!(
                plan_transition(WindowState::Normal, WindowState::Maximized, workaround),
                vec![StateAction::RefreshClip]
            );
            assert_eq!(
                plan_transition(WindowState::Maximized, WindowState::Normal, workaround),
                vec![StateAction::RefreshClip]
            );
        }
    }

    #[test]
    fn test_plan_fullscreen_with_workaround() {
        assert_eq!(
            plan_transition(WindowState::Normal, WindowState::Fullscreen, true),
            vec![
                StateAction::RefreshClip,
                StateAction::CaptureRestoreBounds,
                StateAction::ScheduleMonitorFit
            ]
        );
        assert_eq!(
            plan_transition(WindowState::Fullscreen, WindowState::Normal, true),
            vec![
                StateAction::RefreshClip,
                StateAction::ClearMinSizeOverride,
                StateAction::ApplyRestoreBounds
            ]
        );
    }

    #[test]
    fn test_plan_fullscreen_without_workaround_is_plain_toggle() {
        assert_eq!(
            plan_transition(WindowState::Normal, WindowState::Fullscreen, false),
            vec![StateAction::RefreshClip]
        );
        assert_eq!(
            plan_transition(WindowState::Fullscreen, WindowState::Normal, false),
            vec![StateAction::RefreshClip]
        );
    }

    #[test]
    fn test_observe_reports_changes_once() {
        let mut win = window();
        let mut idle = TaskQueue::new();
        let mut coordinator = WindowStateCoordinator::new(false);

        assert!(coordinator.observe(&mut win, &mut idle).is_none());

        win.maximized = true;
        let transition = coordinator.observe(&mut win, &mut idle).unwrap();
        assert_eq!(transition.from, WindowState::Normal);
        assert_eq!(transition.to, WindowState::Maximized);
        assert!(transition.refreshes_clip());
        assert!(coordinator.observe(&mut win, &mut idle).is_none());
        assert_eq!(coordinator.state(), WindowState::Maximized);
    }

    #[test]
    fn test_fullscreen_round_trip_restores_bounds() {
        let before = Bounds::new(100.0, 100.0, 800.0, 600.0);
        let mut win = MockWindow::new(before);
        let mut idle = TaskQueue::new();
        let mut coordinator = WindowStateCoordinator::new(true);

        win.fullscreen = true;
        coordinator.observe(&mut win, &mut idle);
        assert_eq!(coordinator.restore_bounds(), Some(before));

        // Nothing is forced until the idle turn.
        assert_eq!(win.bounds, before);
        assert_eq!(idle.pending_count(), 1);
        idle.process_all(&mut win);
        assert_eq!(win.bounds, Bounds::new(0.0, 0.0, 1920.0, 1080.0));
        assert_eq!(win.min_size, Some(Size::new(1920.0, 1080.0)));

        win.fullscreen = false;
        coordinator.observe(&mut win, &mut idle);
        assert!(win.bounds.approx_eq(&before));
        assert_eq!(win.min_size, None);
        assert_eq!(coordinator.restore_bounds(), None);
    }

    #[test]
    fn test_existing_snapshot_is_not_overwritten() {
        let before = Bounds::new(100.0, 100.0, 800.0, 600.0);
        let mut win = MockWindow::new(before);
        let mut idle = TaskQueue::new();
        let mut coordinator = WindowStateCoordinator::new(true);

        // Re-entering fullscreen from maximized with an unconsumed snapshot.
        coordinator.state = WindowState::Maximized;
        coordinator.restore_bounds = Some(before);
        win.bounds = Bounds::new(0.0, 0.0, 1920.0, 1040.0);
        win.fullscreen = true;
        coordinator.observe(&mut win, &mut idle);
        assert_eq!(coordinator.restore_bounds(), Some(before));
    }

    #[test]
    fn test_exit_without_snapshot_leaves_bounds() {
        let mut win = window();
        let mut idle = TaskQueue::new();
        let mut coordinator = WindowStateCoordinator::new(true);
        coordinator.state = WindowState::Fullscreen;
        win.min_size = Some(Size::new(1920.0, 1080.0));

        coordinator.observe(&mut win, &mut idle);
        assert_eq!(win.bounds, Bounds::new(100.0, 100.0, 800.0, 600.0));
        assert_eq!(win.min_size, None);
    }

    #[test]
    fn test_monitor_fit_skipped_when_no_longer_fullscreen() {
        let before = Bounds::new(100.0, 100.0, 800.0, 600.0);
        let mut win = MockWindow::new(before);
        let mut idle = TaskQueue::new();
        let mut coordinator = WindowStateCoordinator::new(true);

        win.fullscreen = true;
        coordinator.observe(&mut win, &mut idle);
        win.fullscreen = false;
        coordinator.observe(&mut win, &mut idle);

        idle.process_all(&mut win);
        assert_eq!(win.bounds, before);
        assert_eq!(win.min_size, None);
    }

    #[test]
    fn test_resolve_monitor_uses_window_center() {
        let monitors = vec![
            Bounds::new(0.0, 0.0, 1920.0, 1080.0),
            Bounds::new(1920.0, 0.0, 2560.0, 1440.0),
        ];
        // Mostly on the left monitor but centered on the right one.
        let win = MockWindow::new(Bounds::new(1500.0, 100.0, 1000.0, 600.0))
            .with_monitors(monitors.clone(), Some(0));
        assert_eq!(resolve_monitor(&win), Some(monitors[1]));
    }

    #[test]
    fn test_resolve_monitor_falls_back_to_primary() {
        let monitors = vec![
            Bounds::new(0.0, 0.0, 1920.0, 1080.0),
            Bounds::new(1920.0, 0.0, 2560.0, 1440.0),
        ];
        let win = MockWindow::new(Bounds::new(-3000.0, -3000.0, 800.0, 600.0))
            .with_monitors(monitors.clone(), Some(1));
        assert_eq!(resolve_monitor(&win), Some(monitors[1]));
    }

    #[test]
    fn test_fit_without_monitor_leaves_geometry() {
        let before = Bounds::new(100.0, 100.0, 800.0, 600.0);
        let mut win = MockWindow::new(before).with_monitors(Vec::new(), None);
        assert_eq!(fit_to_monitor(&mut win), Err(WindowError::NoMonitor));
        assert_eq!(win.bounds, before);
        assert_eq!(win.min_size, None);
    }
}
