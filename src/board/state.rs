//! Board state - element list and drag bookkeeping.

use crate::types::{Element, Point};

/// Snapshot of the board.
///
/// `elements` is drawn in order, so the last element is topmost.
/// `last_dragging_point` and `element_relative_dragging_point` are set and
/// cleared together and only mean something while `selecting_id` is set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardState {
    pub elements: Vec<Element>,
    /// Id of the selected element, if any
    pub selecting_id: Option<String>,
    /// Screen position of the dragged element's top-left corner at drag start
    pub last_dragging_point: Option<Point>,
    /// Screen position of the pointer at drag start
    pub element_relative_dragging_point: Option<Point>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements(elements: Vec<Element>) -> Self {
        Self {
            elements,
            ..Self::default()
        }
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|el| el.id == id)
    }

    /// The currently selected element
    pub fn selected(&self) -> Option<&Element> {
        self.selecting_id.as_deref().and_then(|id| self.element(id))
    }

    /// Both drag anchors, when a drag has been started
    pub fn drag_anchors(&self) -> Option<(Point, Point)> {
        self.last_dragging_point
            .zip(self.element_relative_dragging_point)
    }

    /// True while a selection and both drag anchors are present
    pub fn is_dragging(&self) -> bool {
        self.selecting_id.is_some() && self.drag_anchors().is_some()
    }

    /// Topmost element (drawn last)
    pub fn topmost(&self) -> Option<&Element> {
        self.elements.last()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
