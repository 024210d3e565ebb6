//! Unit tests for drag coordinate math.

use crate::helpers::container_at;
use dragboard::constants::CLAMP_RESERVE;
use dragboard::input::coords::CoordinateConverter;
use dragboard::types::Point;
use rand::Rng;

#[test]
fn test_clamp_holds_for_any_pointer() {
    let mut rng = crate::helpers::seeded_rng();
    let container = container_at(20.0, 30.0, 384.0);
    let anchor = Point::new(60.0, 70.0);
    let grab = Point::new(64.0, 79.0);

    for _ in 0..1000 {
        let pointer = Point::new(rng.gen_range(-2000.0..2000.0), rng.gen_range(-2000.0..2000.0));
        let raw = CoordinateConverter::drag_position(pointer, anchor, grab, &container);
        let pos = CoordinateConverter::clamp_to_container(raw, &container, CLAMP_RESERVE);

        assert!(pos.x >= 0.0 && pos.x <= 384.0 - 33.0, "x = {}", pos.x);
        assert!(pos.y >= 0.0 && pos.y <= 384.0 - 33.0, "y = {}", pos.y);
    }
}

#[test]
fn test_drag_offset_invariance() {
    let container = container_at(0.0, 0.0, 1000.0);
    let (ex, ey) = (100.0, 150.0);
    let (px, py) = (107.0, 151.0);

    for (dx, dy) in [(0.0, 0.0), (10.0, -20.0), (-50.0, 33.0), (250.0, 250.0)] {
        let pos = CoordinateConverter::drag_position(
            Point::new(px + dx, py + dy),
            Point::new(ex, ey),
            Point::new(px, py),
            &container,
        );
        assert_eq!(pos, Point::new(ex + dx, ey + dy));
    }
}

#[test]
fn test_drag_position_is_container_relative() {
    let container = container_at(200.0, 100.0, 400.0);
    // Element sits at (0, 0) in the container, grabbed at its corner
    let anchor = Point::new(200.0, 100.0);

    let pos = CoordinateConverter::drag_position(Point::new(250.0, 160.0), anchor, anchor, &container);
    assert_eq!(pos, Point::new(50.0, 60.0));
}
