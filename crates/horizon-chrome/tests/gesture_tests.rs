//! End-to-end resize and move tests through the chrome facade.

use std::sync::Arc;

use parking_lot::Mutex;

use horizon_chrome::testing::MockWindow;
use horizon_chrome::{
    ActiveGesture, Bounds, ChromeConfig, CursorHint, Point, ResizeDirection, Size, WindowChrome,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_chrome=trace")
        .with_test_writer()
        .try_init();
}

fn chrome() -> WindowChrome<MockWindow> {
    init_tracing();
    WindowChrome::new(
        MockWindow::new(Bounds::new(100.0, 100.0, 800.0, 600.0)),
        ChromeConfig::new().with_resize_margin(6.0),
    )
}

/// Press at a window-local point, drag by `delta`, release.
fn drag(chrome: &mut WindowChrome<MockWindow>, local: Point, delta: Point) -> bool {
    let origin = chrome.window().bounds.origin();
    let anchor = origin + local;
    chrome.on_pointer_move(local, anchor);
    let consumed = chrome.on_pointer_press(local, anchor, 1);
    chrome.on_pointer_drag(local, anchor + delta);
    chrome.on_pointer_release(local, anchor + delta);
    consumed
}

#[test]
fn test_east_edge_resize() {
    let mut chrome = chrome();
    assert!(drag(&mut chrome, Point::new(797.0, 300.0), Point::new(50.0, 0.0)));
    assert_eq!(chrome.window().bounds, Bounds::new(100.0, 100.0, 850.0, 600.0));
}

#[test]
fn test_north_west_corner_resize() {
    let mut chrome = chrome();
    assert!(drag(&mut chrome, Point::new(3.0, 3.0), Point::new(-20.0, -10.0)));
    assert_eq!(chrome.window().bounds, Bounds::new(80.0, 90.0, 820.0, 610.0));
}

#[test]
fn test_west_resize_keeps_east_edge() {
    let mut chrome = chrome();
    let local = Point::new(2.0, 300.0);
    let anchor = Point::new(102.0, 400.0);
    chrome.on_pointer_press(local, anchor, 1);

    for dx in [-40.0, 10.0, 250.0, 500.0, 700.0] {
        chrome.on_pointer_drag(local, anchor + Point::new(dx, 0.0));
        assert!((chrome.window().bounds.right() - 900.0).abs() < 1e-9);
        assert!(chrome.window().bounds.width >= 200.0);
    }
}

#[test]
fn test_minimum_holds_on_every_tick() {
    let mut chrome = chrome();
    let local = Point::new(797.0, 597.0);
    let anchor = Point::new(897.0, 697.0);
    chrome.on_pointer_press(local, anchor, 1);

    let mut dx = 0.0;
    while dx > -900.0 {
        chrome.on_pointer_drag(local, anchor + Point::new(dx, dx * 0.75));
        let bounds = chrome.window().bounds;
        assert!(bounds.width >= 200.0, "width {} at dx {dx}", bounds.width);
        assert!(bounds.height >= 150.0, "height {} at dx {dx}", bounds.height);
        assert_eq!(bounds.origin(), Point::new(100.0, 100.0));
        dx -= 37.0;
    }
}

#[test]
fn test_north_past_minimum_leaves_y() {
    let mut chrome = chrome();
    let local = Point::new(400.0, 2.0);
    let anchor = Point::new(500.0, 102.0);
    chrome.on_pointer_press(local, anchor, 1);

    chrome.on_pointer_drag(local, anchor + Point::new(0.0, 440.0));
    assert_eq!(chrome.window().bounds.y, 540.0);
    assert_eq!(chrome.window().bounds.height, 160.0);

    chrome.on_pointer_drag(local, anchor + Point::new(0.0, 460.0));
    assert_eq!(chrome.window().bounds.y, 540.0);
    assert_eq!(chrome.window().bounds.height, 160.0);
}

#[test]
fn test_diagonal_axes_are_independent() {
    let mut chrome = chrome();
    // SE corner; x shrinks past the minimum while y grows.
    assert!(drag(&mut chrome, Point::new(797.0, 597.0), Point::new(-700.0, 100.0)));
    assert_eq!(chrome.window().bounds, Bounds::new(100.0, 100.0, 800.0, 700.0));
}

#[test]
fn test_window_min_override_is_respected() {
    init_tracing();
    let window = MockWindow::new(Bounds::new(100.0, 100.0, 800.0, 600.0)).with_min_size(640.0, 480.0);
    let mut chrome = WindowChrome::new(window, ChromeConfig::new());
    drag(&mut chrome, Point::new(797.0, 597.0), Point::new(-200.0, -200.0));
    assert_eq!(chrome.window().bounds.size(), Size::new(800.0, 600.0));

    drag(&mut chrome, Point::new(797.0, 597.0), Point::new(-160.0, -120.0));
    assert_eq!(chrome.window().bounds.size(), Size::new(640.0, 480.0));
}

#[test]
fn test_title_bar_drag_moves_window() {
    let mut chrome = chrome();
    assert!(drag(&mut chrome, Point::new(300.0, 20.0), Point::new(250.0, -60.0)));
    assert_eq!(chrome.window().bounds, Bounds::new(350.0, 40.0, 800.0, 600.0));
}

#[test]
fn test_move_never_resizes_and_resize_never_moves_east_edge() {
    let mut chrome = chrome();
    drag(&mut chrome, Point::new(300.0, 20.0), Point::new(-90.0, 15.0));
    assert_eq!(chrome.window().bounds.size(), Size::new(800.0, 600.0));

    let before = chrome.window().bounds;
    drag(&mut chrome, Point::new(797.0, 300.0), Point::new(30.0, 0.0));
    assert_eq!(chrome.window().bounds.origin(), before.origin());
    assert_eq!(chrome.window().position_writes, 1);
}

#[test]
fn test_interactive_region_passes_through() {
    init_tracing();
    let config = ChromeConfig::new().with_interactive_region(Bounds::new(740.0, 0.0, 54.0, 38.0));
    let mut chrome = WindowChrome::new(MockWindow::new(Bounds::new(100.0, 100.0, 800.0, 600.0)), config);

    assert!(!drag(&mut chrome, Point::new(760.0, 20.0), Point::new(40.0, 40.0)));
    assert_eq!(chrome.window().bounds, Bounds::new(100.0, 100.0, 800.0, 600.0));
}

#[test]
fn test_content_area_passes_through() {
    let mut chrome = chrome();
    assert!(!drag(&mut chrome, Point::new(400.0, 300.0), Point::new(40.0, 40.0)));
    assert!(chrome.gesture().is_idle());
    assert_eq!(chrome.window().bounds, Bounds::new(100.0, 100.0, 800.0, 600.0));
}

#[test]
fn test_gesture_kind_follows_press_location() {
    let mut chrome = chrome();
    chrome.on_pointer_press(Point::new(3.0, 597.0), Point::new(103.0, 697.0), 1);
    assert!(matches!(
        chrome.gesture(),
        ActiveGesture::Resize(session) if session.direction == ResizeDirection::SouthWest
    ));
    chrome.on_pointer_release(Point::new(3.0, 597.0), Point::new(103.0, 697.0));

    chrome.on_pointer_press(Point::new(300.0, 20.0), Point::new(400.0, 120.0), 1);
    assert!(matches!(chrome.gesture(), ActiveGesture::Move(_)));
}

#[test]
fn test_cursor_hints_follow_hover() {
    let mut chrome = chrome();
    let hints = Arc::new(Mutex::new(Vec::new()));
    let hints_clone = hints.clone();
    chrome
        .cursor_hint_changed()
        .connect(move |hint| hints_clone.lock().push(*hint));

    let path = [
        Point::new(400.0, 300.0),
        Point::new(400.0, 2.0),
        Point::new(3.0, 3.0),
        Point::new(2.0, 300.0),
        Point::new(797.0, 3.0),
        Point::new(400.0, 300.0),
        Point::new(401.0, 300.0),
    ];
    for local in path {
        assert!(!chrome.on_pointer_move(local, local + Point::new(100.0, 100.0)));
    }

    assert_eq!(
        *hints.lock(),
        vec![
            CursorHint::ResizeVertical,
            CursorHint::ResizeNwSe,
            CursorHint::ResizeHorizontal,
            CursorHint::ResizeNeSw,
            CursorHint::Default,
        ]
    );
    assert_eq!(chrome.cursor_hint(), CursorHint::Default);
}

#[test]
fn test_runtime_margin_change() {
    let mut chrome = chrome();
    chrome.set_resize_margin(12.0);
    assert!(drag(&mut chrome, Point::new(790.0, 300.0), Point::new(10.0, 0.0)));
    assert_eq!(chrome.window().bounds.width, 810.0);

    chrome.set_resize_enabled(false);
    assert!(!drag(&mut chrome, Point::new(805.0, 300.0), Point::new(10.0, 0.0)));
    assert_eq!(chrome.window().bounds.width, 810.0);
}
