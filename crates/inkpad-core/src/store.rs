//! Shape store: the four shape collections of a board.

use crate::shapes::{Collection, Shape, ShapeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("shape not found: {0}")]
    NotFound(ShapeId),
    #[error("shape {id} belongs in {expected:?}, not {found:?}")]
    WrongCollection {
        id: ShapeId,
        expected: Collection,
        found: Collection,
    },
    #[error("duplicate shape id: {0}")]
    DuplicateId(ShapeId),
    #[error("freehand stroke {0} has no points")]
    EmptyStroke(ShapeId),
}

/// Location of a shape: its collection, its index at insertion time, and its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeRef {
    pub collection: Collection,
    pub index: usize,
    pub id: ShapeId,
}

/// All shapes on the board, split by kind.
///
/// Collections only grow at the end; the only other mutation is removal
/// by id. Shapes are never reordered.
///
/// Deserialization rebuilds the store through [`ShapeStore::from_shapes`],
/// so every shape is filed by its kind and ids stay unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoreRecord")]
pub struct ShapeStore {
    lines: Vec<Shape>,
    rectangles: Vec<Shape>,
    circles: Vec<Shape>,
    texts: Vec<Shape>,
}

/// Serialized layout of a store, before validation.
#[derive(Default, Deserialize)]
#[serde(default)]
struct StoreRecord {
    lines: Vec<Shape>,
    rectangles: Vec<Shape>,
    circles: Vec<Shape>,
    texts: Vec<Shape>,
}

impl TryFrom<StoreRecord> for ShapeStore {
    type Error = StoreError;

    fn try_from(record: StoreRecord) -> Result<Self, Self::Error> {
        let StoreRecord {
            lines,
            rectangles,
            circles,
            texts,
        } = record;
        Self::from_shapes(lines.into_iter().chain(rectangles).chain(circles).chain(texts))
    }
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store by pushing each shape into the collection of its kind.
    ///
    /// Fails on a repeated id or an empty freehand stroke.
    pub fn from_shapes(shapes: impl IntoIterator<Item = Shape>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        let mut seen = HashSet::new();
        for shape in shapes {
            let id = shape.id();
            if !seen.insert(id) {
                return Err(StoreError::DuplicateId(id));
            }
            if let Shape::Freehand(stroke) = &shape {
                if stroke.is_empty() {
                    return Err(StoreError::EmptyStroke(id));
                }
            }
            store.push(shape);
        }
        Ok(store)
    }

    fn vec(&self, collection: Collection) -> &Vec<Shape> {
        match collection {
            Collection::Lines => &self.lines,
            Collection::Rectangles => &self.rectangles,
            Collection::Circles => &self.circles,
            Collection::Texts => &self.texts,
        }
    }

    fn vec_mut(&mut self, collection: Collection) -> &mut Vec<Shape> {
        match collection {
            Collection::Lines => &mut self.lines,
            Collection::Rectangles => &mut self.rectangles,
            Collection::Circles => &mut self.circles,
            Collection::Texts => &mut self.texts,
        }
    }

    /// Append a shape to its collection.
    pub fn push(&mut self, shape: Shape) -> ShapeRef {
        let collection = shape.collection();
        let id = shape.id();
        let shapes = self.vec_mut(collection);
        shapes.push(shape);
        ShapeRef {
            collection,
            index: shapes.len() - 1,
            id,
        }
    }

    pub fn lines(&self) -> &[Shape] {
        &self.lines
    }

    pub fn rectangles(&self) -> &[Shape] {
        &self.rectangles
    }

    pub fn circles(&self) -> &[Shape] {
        &self.circles
    }

    pub fn texts(&self) -> &[Shape] {
        &self.texts
    }

    /// Every shape, collection by collection in render order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        Collection::ALL
            .into_iter()
            .flat_map(move |collection| self.vec(collection).iter())
    }

    /// Current position of a shape by id.
    pub fn locate(&self, id: ShapeId) -> Option<ShapeRef> {
        Collection::ALL.into_iter().find_map(|collection| {
            self.vec(collection)
                .iter()
                .position(|s| s.id() == id)
                .map(|index| ShapeRef { collection, index, id })
        })
    }

    /// Resolve a reference, falling back to an id search when the index is stale.
    fn resolve(&self, slot: ShapeRef) -> Option<ShapeRef> {
        let at_index = self
            .vec(slot.collection)
            .get(slot.index)
            .is_some_and(|s| s.id() == slot.id);
        if at_index { Some(slot) } else { self.locate(slot.id) }
    }

    pub fn get(&self, slot: ShapeRef) -> Option<&Shape> {
        let slot = self.resolve(slot)?;
        self.vec(slot.collection).get(slot.index)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.locate(id).is_some()
    }

    /// Overwrite the shape at `slot` with a new record of the same identity.
    ///
    /// Returns the (possibly refreshed) reference to the written shape.
    pub fn replace(&mut self, slot: ShapeRef, shape: Shape) -> Result<ShapeRef, StoreError> {
        if shape.collection() != slot.collection {
            return Err(StoreError::WrongCollection {
                id: slot.id,
                expected: slot.collection,
                found: shape.collection(),
            });
        }
        if shape.id() != slot.id {
            return Err(StoreError::NotFound(shape.id()));
        }
        let slot = self.resolve(slot).ok_or(StoreError::NotFound(slot.id))?;
        self.vec_mut(slot.collection)[slot.index] = shape;
        Ok(slot)
    }

    /// Remove the shape with `id`, searching lines, rectangles, circles, texts.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let slot = self.locate(id)?;
        Some(self.vec_mut(slot.collection).remove(slot.index))
    }

    /// Total number of shapes.
    pub fn len(&self) -> usize {
        Collection::ALL
            .into_iter()
            .map(|collection| self.vec(collection).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize the board to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a board from JSON, refiling misplaced shapes by kind.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
