//! Core systems for Horizon Chrome.
//!
//! This crate provides the small pieces of runtime infrastructure that the
//! window chrome engine is built on:
//!
//! - **Signals**: Direct-invocation hooks the host UI connects to
//!   (cursor hint changes, clip geometry changes, state changes)
//! - **Task Queue**: Deferred work that runs on the next idle turn of the
//!   UI event loop
//! - **Logging**: `tracing` targets, span names and a timing span guard
//!
//! # Signal Example
//!
//! ```
//! use horizon_chrome_core::Signal;
//!
//! let cursor_changed = Signal::<&'static str>::new();
//!
//! let conn_id = cursor_changed.connect(|cursor| {
//!     println!("cursor is now {cursor}");
//! });
//!
//! cursor_changed.emit("ew-resize");
//! cursor_changed.disconnect(conn_id);
//! ```
//!
//! # Task Queue Example
//!
//! ```
//! use horizon_chrome_core::TaskQueue;
//!
//! let mut queue = TaskQueue::<Vec<u32>>::new();
//! queue.post(|log| log.push(1));
//! queue.post(|log| log.push(2));
//!
//! let mut log = Vec::new();
//! assert_eq!(queue.process_all(&mut log), 2);
//! assert_eq!(log, vec![1, 2]);
//! ```

pub mod logging;
pub mod signal;
mod task;

pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
pub use task::TaskQueue;
