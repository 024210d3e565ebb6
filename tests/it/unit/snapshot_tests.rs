//! Snapshot tests using the insta crate.
//!
//! Inline snapshots of the board state at interesting points of a drag.
//! To update after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{container_at, press_element, TestBoardBuilder};
use dragboard::input::DragPhase;
use dragboard::types::Point;

#[test]
fn snapshot_state_mid_drag() {
    let container = container_at(0.0, 0.0, 400.0);
    let mut store = TestBoardBuilder::new()
        .with_element("box00001", (10.0, 10.0))
        .with_element("box00002", (60.0, 20.0))
        .build();

    press_element(&mut store, "box00001", &container, (15.0, 15.0));
    store.handle_pointer_move(Point::new(40.0, 25.0), Some(container));

    insta::assert_debug_snapshot!(store.state(), @r#"
    BoardState {
        elements: [
            Element {
                id: "box00002",
                x: 60.0,
                y: 20.0,
            },
            Element {
                id: "box00001",
                x: 35.0,
                y: 20.0,
            },
        ],
        selecting_id: Some(
            "box00001",
        ),
        last_dragging_point: Some(
            Point {
                x: 10.0,
                y: 10.0,
            },
        ),
        element_relative_dragging_point: Some(
            Point {
                x: 15.0,
                y: 15.0,
            },
        ),
    }
    "#);
}

#[test]
fn snapshot_drag_phase() {
    let container = container_at(0.0, 0.0, 400.0);
    let mut store = TestBoardBuilder::new()
        .with_element("box00001", (10.0, 10.0))
        .build();

    press_element(&mut store, "box00001", &container, (15.0, 15.0));

    insta::assert_debug_snapshot!(DragPhase::from_board(store.state()), @r#"
    Dragging {
        element_id: "box00001",
        grab_offset: Point {
            x: 5.0,
            y: 5.0,
        },
    }
    "#);
}

#[test]
fn snapshot_state_after_release() {
    let container = container_at(0.0, 0.0, 400.0);
    let mut store = TestBoardBuilder::new()
        .with_element("box00001", (10.0, 10.0))
        .build();

    press_element(&mut store, "box00001", &container, (15.0, 15.0));
    store.handle_pointer_move(Point::new(115.0, 115.0), Some(container));
    store.handle_pointer_up();

    insta::assert_debug_snapshot!(store.state(), @r#"
    BoardState {
        elements: [
            Element {
                id: "box00001",
                x: 110.0,
                y: 110.0,
            },
        ],
        selecting_id: None,
        last_dragging_point: None,
        element_relative_dragging_point: None,
    }
    "#);
}
