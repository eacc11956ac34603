//! Integration tests for signals and the idle task queue.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use horizon_chrome_core::{ConnectionId, Signal, TaskQueue};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_chrome_core=trace")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_slots_run_in_connection_order() {
    init_tracing();
    let signal = Signal::<u32>::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    for tag in ["a", "b", "c"] {
        let log = log.clone();
        signal.connect(move |value| log.lock().push(format!("{tag}{value}")));
    }
    signal.emit(1);

    assert_eq!(*log.lock(), vec!["a1", "b1", "c1"]);
}

#[test]
fn test_slot_can_connect_during_emit() {
    init_tracing();
    let signal = Arc::new(Signal::<()>::new());
    let calls = Arc::new(AtomicUsize::new(0));

    let signal_clone = signal.clone();
    let calls_clone = calls.clone();
    signal.connect(move |_| {
        let calls = calls_clone.clone();
        signal_clone.connect(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
        });
    });

    // The slot added during the first emit only runs from the next one.
    signal.emit(());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(signal.connection_count(), 2);

    signal.emit(());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_disconnect_all() {
    let signal = Signal::<i32>::new();
    let ids: Vec<ConnectionId> = (0..4).map(|_| signal.connect(|_| {})).collect();
    assert_eq!(signal.connection_count(), 4);

    assert!(signal.disconnect(ids[1]));
    signal.disconnect_all();
    assert_eq!(signal.connection_count(), 0);
    assert!(!signal.disconnect(ids[0]));
}

#[test]
fn test_signal_shared_across_threads() {
    let signal = Arc::new(Signal::<usize>::new());
    let total = Arc::new(AtomicUsize::new(0));

    let total_clone = total.clone();
    signal.connect(move |value| {
        total_clone.fetch_add(*value, Ordering::SeqCst);
    });

    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let signal = signal.clone();
            std::thread::spawn(move || signal.emit(n))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(total.load(Ordering::SeqCst), 10);
}

#[derive(Debug, Default)]
struct FakeWindow {
    width: f64,
    writes: Vec<&'static str>,
}

#[test]
fn test_idle_tasks_mutate_context() {
    init_tracing();
    let mut queue = TaskQueue::<FakeWindow>::new();
    queue.post(|w| {
        w.width = 1920.0;
        w.writes.push("size");
    });
    queue.post(|w| w.writes.push("min_size"));

    let mut window = FakeWindow::default();
    assert!(queue.has_pending());
    assert_eq!(queue.process_all(&mut window), 2);
    assert_eq!(window.width, 1920.0);
    assert_eq!(window.writes, vec!["size", "min_size"]);
    assert_eq!(queue.process_all(&mut window), 0);
}
