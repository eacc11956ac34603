//! Horizon Chrome - interaction engine for frameless windows.
//!
//! Undecorated windows lose everything the platform's title bar and
//! borders used to provide. This crate puts it back:
//!
//! - **Edge resize**: an invisible margin along every edge and corner,
//!   with per-axis minimum-size clamping
//! - **Drag to move**: a title bar strip (plus custom draggable regions)
//!   that moves the window, with double-click to maximize
//! - **State coordination**: maximized and fullscreen handling, including
//!   the fullscreen bounds workaround for transparent windows on macOS
//! - **Rounded corners**: a content clip that is present only while the
//!   window is in its normal state
//!
//! The engine is backend-agnostic: it drives any window implementing
//! [`WindowHandle`]. [`winit_host`] provides the implementation for winit.
//!
//! # Example
//!
//! ```
//! use horizon_chrome::testing::MockWindow;
//! use horizon_chrome::{Bounds, ChromeConfig, Point, WindowChrome, WindowState};
//!
//! let window = MockWindow::new(Bounds::new(100.0, 100.0, 800.0, 600.0));
//! let mut chrome = WindowChrome::new(window, ChromeConfig::new());
//!
//! chrome.cursor_hint_changed().connect(|hint| {
//!     println!("cursor: {hint:?}");
//! });
//!
//! // Double-click the title bar.
//! chrome.on_pointer_press(Point::new(300.0, 20.0), Point::new(400.0, 120.0), 2);
//! assert_eq!(chrome.state(), WindowState::Maximized);
//! assert!(chrome.clip().is_none());
//! ```

pub mod chrome;
pub mod clip;
pub mod config;
pub mod cursor;
pub mod drag_move;
pub mod error;
pub mod geometry;
pub mod handle;
pub mod platform;
pub mod resize;
pub mod router;
pub mod window_state;
pub mod winit_host;

#[doc(hidden)]
pub mod testing;

pub use chrome::{WindowAction, WindowChrome};
pub use clip::{RoundedClipManager, compute_clip};
pub use config::ChromeConfig;
pub use cursor::CursorHint;
pub use drag_move::{DragMoveController, DragMoveSession, DragRegions};
pub use error::{ChromeError, ConfigError, Result, WindowError};
pub use geometry::{Bounds, Point, RoundedRect, Size};
pub use handle::WindowHandle;
pub use platform::Platform;
pub use resize::{EdgeResizeController, ResizeDirection, ResizeSession};
pub use router::{ActiveGesture, PointerEvent, PointerEventKind, PointerGestureRouter};
pub use window_state::{StateAction, StateTransition, WindowState, WindowStateCoordinator, plan_transition};
pub use winit_host::{PointerTranslator, WinitWindow, frameless_window_attributes};

pub use horizon_chrome_core::{ConnectionId, Signal};

static_assertions::assert_impl_all!(PointerGestureRouter: Send, Sync);
static_assertions::assert_impl_all!(ChromeConfig: Send, Sync);
