//! Canvas document and selection state.

use crate::shapes::{Shape, ShapeId};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A canvas document containing all shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasDocument {
    /// Unique document identifier.
    pub id: String,
    /// Document name.
    pub name: String,
    /// All shapes in the document, keyed by ID.
    pub shapes: HashMap<ShapeId, Shape>,
    /// Z-order of shapes (back to front).
    pub z_order: Vec<ShapeId>,
}

impl Default for CanvasDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Untitled".to_string(),
            shapes: HashMap::new(),
            z_order: Vec::new(),
        }
    }

    /// Add a shape to the document.
    pub fn add_shape(&mut self, shape: Shape) {
        let id = shape.id();
        self.z_order.push(id);
        self.shapes.insert(id, shape);
    }

    /// Remove a shape from the document.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        self.z_order.retain(|&shape_id| shape_id != id);
        self.shapes.remove(&id)
    }

    /// Get a shape by ID.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    /// Get shapes in z-order (back to front).
    pub fn shapes_ordered(&self) -> impl Iterator<Item = &Shape> {
        self.z_order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Get the bounding box of all shapes.
    pub fn bounds(&self) -> Option<Rect> {
        let mut result: Option<Rect> = None;
        for shape in self.shapes.values() {
            let bounds = shape.bounds();
            result = Some(match result {
                Some(r) => r.union(bounds),
                None => bounds,
            });
        }
        result
    }

    /// Find shapes at a point (in world coordinates), front to back.
    pub fn shapes_at_point(&self, point: Point, tolerance: f64) -> Vec<ShapeId> {
        self.z_order
            .iter()
            .rev()
            .filter_map(|&id| {
                self.shapes
                    .get(&id)
                    .filter(|s| s.hit_test(point, tolerance))
                    .map(|_| id)
            })
            .collect()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Runtime canvas state (not persisted).
#[derive(Debug, Clone)]
pub struct Canvas {
    /// The document being edited.
    pub document: CanvasDocument,
    /// Currently selected shape IDs, in selection order.
    pub selection: Vec<ShapeId>,
    /// Shape currently in text-editing mode.
    pub editing: Option<ShapeId>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a new canvas with an empty document.
    pub fn new() -> Self {
        Self::with_document(CanvasDocument::new())
    }

    /// Create a canvas with an existing document.
    pub fn with_document(document: CanvasDocument) -> Self {
        Self {
            document,
            selection: Vec::new(),
            editing: None,
        }
    }

    /// Select a shape (clears previous selection).
    pub fn select(&mut self, id: ShapeId) {
        self.clear_selection();
        self.add_to_selection(id);
    }

    /// Add to selection.
    pub fn add_to_selection(&mut self, id: ShapeId) {
        if !self.selection.contains(&id) {
            self.selection.push(id);
        }
    }

    /// Toggle a shape in/out of the selection (shift-click behavior).
    pub fn toggle_in_selection(&mut self, id: ShapeId) {
        if self.selection.contains(&id) {
            self.selection.retain(|&s| s != id);
        } else {
            self.selection.push(id);
        }
    }

    /// Clear selection and any in-progress edit.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.editing = None;
    }

    /// Check if a shape is selected.
    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selection.contains(&id)
    }

    /// Selected shapes in selection order. IDs without a backing shape are
    /// skipped.
    pub fn selected_shapes(&self) -> Vec<&Shape> {
        self.selection
            .iter()
            .filter_map(|id| self.document.get_shape(*id))
            .collect()
    }

    /// Combined bounding box of the selection.
    pub fn selection_bounds(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        for shape in self.selected_shapes() {
            let b = shape.bounds();
            bounds = Some(match bounds {
                Some(acc) => acc.union(b),
                None => b,
            });
        }
        bounds
    }

    /// Enter text-editing mode for a shape.
    pub fn begin_editing(&mut self, id: ShapeId) {
        self.editing = Some(id);
    }

    /// Leave text-editing mode.
    pub fn end_editing(&mut self) {
        self.editing = None;
    }

    /// Remove a shape from the canvas.
    pub fn remove_shape(&mut self, id: ShapeId) {
        self.selection.retain(|&s| s != id);
        if self.editing == Some(id) {
            self.editing = None;
        }
        self.document.remove_shape(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Rectangle, ShapeTrait};

    fn rect_at(x: f64, y: f64) -> Rectangle {
        Rectangle::new(Point::new(x, y), 100.0, 100.0)
    }

    #[test]
    fn test_add_and_remove_shape() {
        let mut doc = CanvasDocument::new();
        let rect = rect_at(0.0, 0.0);
        let id = rect.id();

        doc.add_shape(Shape::Rectangle(rect));
        assert_eq!(doc.len(), 1);
        assert!(doc.get_shape(id).is_some());

        assert!(doc.remove_shape(id).is_some());
        assert!(doc.is_empty());
        assert!(doc.z_order.is_empty());
    }

    #[test]
    fn test_shapes_at_point_prefers_front() {
        let mut doc = CanvasDocument::new();
        let rect1 = rect_at(0.0, 0.0);
        let rect2 = rect_at(50.0, 50.0);
        let id1 = rect1.id();
        let id2 = rect2.id();

        doc.add_shape(Shape::Rectangle(rect1));
        doc.add_shape(Shape::Rectangle(rect2));

        let hits = doc.shapes_at_point(Point::new(75.0, 75.0), 0.0);
        assert_eq!(hits, vec![id2, id1]);

        let hits = doc.shapes_at_point(Point::new(25.0, 25.0), 0.0);
        assert_eq!(hits, vec![id1]);
    }

    #[test]
    fn test_selection_order_is_preserved() {
        let mut canvas = Canvas::new();
        let rect1 = rect_at(0.0, 0.0);
        let rect2 = rect_at(200.0, 0.0);
        let id1 = rect1.id();
        let id2 = rect2.id();
        canvas.document.add_shape(Shape::Rectangle(rect1));
        canvas.document.add_shape(Shape::Rectangle(rect2));

        canvas.select(id2);
        canvas.add_to_selection(id1);
        assert_eq!(canvas.selection, vec![id2, id1]);

        let shapes = canvas.selected_shapes();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].id(), id2);
    }

    #[test]
    fn test_toggle_in_selection() {
        let mut canvas = Canvas::new();
        let rect = rect_at(0.0, 0.0);
        let id = rect.id();
        canvas.document.add_shape(Shape::Rectangle(rect));

        canvas.toggle_in_selection(id);
        assert!(canvas.is_selected(id));
        canvas.toggle_in_selection(id);
        assert!(!canvas.is_selected(id));
    }

    #[test]
    fn test_removing_shape_drops_selection_and_editing() {
        let mut canvas = Canvas::new();
        let rect = rect_at(0.0, 0.0);
        let id = rect.id();
        canvas.document.add_shape(Shape::Rectangle(rect));

        canvas.select(id);
        canvas.begin_editing(id);
        canvas.remove_shape(id);

        assert!(canvas.selection.is_empty());
        assert!(canvas.editing.is_none());
    }

    #[test]
    fn test_selection_bounds_union() {
        let mut canvas = Canvas::new();
        let rect1 = rect_at(0.0, 0.0);
        let rect2 = rect_at(200.0, 0.0);
        let id1 = rect1.id();
        let id2 = rect2.id();
        canvas.document.add_shape(Shape::Rectangle(rect1));
        canvas.document.add_shape(Shape::Rectangle(rect2));

        canvas.select(id1);
        canvas.add_to_selection(id2);
        let bounds = canvas.selection_bounds().unwrap();
        assert!((bounds.width() - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_document_json_round_trip() {
        let mut doc = CanvasDocument::new();
        doc.name = "Board".to_string();
        doc.add_shape(Shape::Rectangle(rect_at(5.0, 5.0)));

        let json = doc.to_json().unwrap();
        let loaded = CanvasDocument::from_json(&json).unwrap();
        assert_eq!(loaded.name, "Board");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.z_order, doc.z_order);
    }
}
