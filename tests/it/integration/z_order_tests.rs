//! Z-order Integration Tests
//!
//! Selecting an element always makes it the last (topmost) one.

use crate::helpers::{container_at, element_ids, press_element, seeded_rng, TestBoardBuilder};
use rand::Rng;

#[test]
fn test_press_brings_element_to_top() {
    let container = container_at(0.0, 0.0, 400.0);
    let mut store = TestBoardBuilder::new().with_elements(4).build();

    press_element(&mut store, "e1", &container, (45.0, 45.0));
    assert_eq!(element_ids(store.state()), vec!["e0", "e2", "e3", "e1"]);

    store.handle_pointer_up();
    press_element(&mut store, "e0", &container, (1.0, 1.0));
    assert_eq!(element_ids(store.state()), vec!["e2", "e3", "e1", "e0"]);
}

#[test]
fn test_selected_is_always_last() {
    let mut rng = seeded_rng();
    let mut store = TestBoardBuilder::new().with_elements(8).build();

    for _ in 0..200 {
        let pick = format!("e{}", rng.gen_range(0..8));
        store.select_element(pick.clone());

        let state = store.state();
        assert_eq!(state.topmost().map(|e| e.id.as_str()), Some(pick.as_str()));
        assert_eq!(state.selecting_id.as_deref(), Some(pick.as_str()));
        assert_eq!(state.len(), 8);
    }
}

#[test]
fn test_release_keeps_order() {
    let container = container_at(0.0, 0.0, 400.0);
    let mut store = TestBoardBuilder::new().with_elements(3).build();

    press_element(&mut store, "e0", &container, (2.0, 2.0));
    let order = element_ids(store.state());
    store.handle_pointer_up();
    assert_eq!(element_ids(store.state()), order);
}
