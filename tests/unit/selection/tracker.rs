use super::*;

#[test]
fn begin_drag_collapses_corners() {
    let mut t = RectTracker::new();
    let r = t.begin_drag(Point::new(12.0, 7.0));
    assert_eq!(r, ViewportRect::new(12.0, 7.0, 12.0, 7.0));
    assert!(t.is_grabbing());
}

#[test]
fn update_drag_moves_only_free_corner() {
    let mut t = RectTracker::new();
    t.begin_drag(Point::new(10.0, 10.0));
    t.update_drag(Point::new(30.0, 20.0));
    let r = t.update_drag(Point::new(4.0, 2.0));
    assert_eq!(r, ViewportRect::new(10.0, 10.0, 4.0, 2.0));
}

#[test]
fn moves_without_grab_are_ignored() {
    let mut t = RectTracker::new();
    t.update_drag(Point::new(30.0, 20.0));
    assert_eq!(t.rect(), ViewportRect::ZERO);

    t.begin_drag(Point::new(1.0, 1.0));
    t.update_drag(Point::new(5.0, 5.0));
    t.end_drag();
    t.update_drag(Point::new(50.0, 50.0));
    assert_eq!(t.rect(), ViewportRect::new(1.0, 1.0, 5.0, 5.0));
    assert!(!t.is_grabbing());
}

#[test]
fn overlay_visible_while_grabbing_or_nonzero() {
    let mut t = RectTracker::new();
    assert!(!t.overlay().visible);

    t.begin_drag(Point::new(0.0, 0.0));
    assert!(t.overlay().visible);
    t.end_drag();
    assert!(!t.overlay().visible);

    t.begin_drag(Point::new(3.0, 4.0));
    t.update_drag(Point::new(1.0, 10.0));
    t.end_drag();
    let o = t.overlay();
    assert!(o.visible);
    assert_eq!((o.left, o.top, o.width, o.height), (3.0, 4.0, -2.0, 6.0));
}

#[test]
fn reset_returns_to_zero() {
    let mut t = RectTracker::new();
    t.begin_drag(Point::new(3.0, 4.0));
    t.update_drag(Point::new(9.0, 9.0));
    t.reset();
    assert_eq!(t, RectTracker::default());
}
