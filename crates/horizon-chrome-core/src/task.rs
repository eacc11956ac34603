//! Deferred task queue for idle processing.
//!
//! Tasks are posted while an event is being handled and run once the
//! current event-processing pass has finished, on the next idle turn of
//! the UI loop. Each task receives mutable access to a context value
//! supplied by whoever drains the queue (typically the window handle), so
//! tasks never need to hold on to shared state themselves.
//!
//! The queue is single-threaded: it is owned by the UI thread and drained
//! there. Tests drain it synchronously with [`TaskQueue::process_all`].

use std::collections::VecDeque;

use crate::logging::targets;

type Task<C> = Box<dyn FnOnce(&mut C) + 'static>;

/// Queue of tasks deferred to the next idle turn.
///
/// `C` is the context each task is run against.
pub struct TaskQueue<C: ?Sized> {
    tasks: VecDeque<Task<C>>,
}

impl<C: ?Sized> TaskQueue<C> {
    /// Create a new task queue.
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Post a task to be executed during idle time.
    pub fn post<F>(&mut self, task: F)
    where
        F: FnOnce(&mut C) + 'static,
    {
        self.tasks.push_back(Box::new(task));
        tracing::trace!(target: targets::TASK, pending = self.tasks.len(), "task posted");
    }

    /// Check if there are any pending tasks.
    pub fn has_pending(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Get the number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Process all pending tasks in posting order.
    ///
    /// Returns the number of tasks processed.
    pub fn process_all(&mut self, context: &mut C) -> usize {
        let batch = std::mem::take(&mut self.tasks);
        let count = batch.len();
        for task in batch {
            task(context);
        }
        count
    }
}

impl<C: ?Sized> Default for TaskQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> std::fmt::Debug for TaskQueue<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.tasks.len())
            .finish()
    }
}
