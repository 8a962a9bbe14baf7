//! Per-sample annotation store.
//!
//! An ordered collection of entities with the current selection and the
//! hit-testing queries the interaction layer needs. Entries are addressed
//! through stable handles rather than raw references, so removing the
//! selected entity can never leave a dangling alias.

use crate::geometry::{BBox, Point};

/// Stable handle to an entity. Handles survive removals of other entries
/// and are never reused within a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(u64);

/// An annotation entity: a fixed point or an axis-aligned region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Point(Point),
    Region(BBox),
}

/// Ordered entity collection scoped to the current sample. Insertion order
/// is the draw z-order; duplicate values are legal and independently
/// removable.
#[derive(Debug, Default)]
pub struct AnnotationStore {
    entries: Vec<(EntityId, Entity)>,
    next_id: u64,
    selected: Option<EntityId>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, entity));
        id
    }

    /// Remove by handle. Clears the selection if it pointed at the removed
    /// entity.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entries.iter().position(|(eid, _)| *eid == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.entries.remove(idx).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.selected = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.iter().any(|(eid, _)| *eid == id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entries
            .iter()
            .find(|(eid, _)| *eid == id)
            .map(|(_, e)| e)
    }

    /// Full sequence in z-order, for the renderer and for hit-testing.
    pub fn entries(&self) -> &[(EntityId, Entity)] {
        &self.entries
    }

    /// Set or clear the selection. Handles not present in the store are
    /// treated as clearing.
    pub fn select(&mut self, id: Option<EntityId>) {
        self.selected = id.filter(|id| self.contains(*id));
    }

    pub fn selected(&self) -> Option<EntityId> {
        self.selected
    }

    pub fn selected_entity(&self) -> Option<&Entity> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Replace the whole collection on sample load. Fresh handles are
    /// issued and the selection is cleared.
    pub fn replace_all(&mut self, entities: Vec<Entity>) {
        self.clear();
        for entity in entities {
            self.add(entity);
        }
    }

    pub fn to_vec(&self) -> Vec<Entity> {
        self.entries.iter().map(|(_, e)| *e).collect()
    }

    /// Hover hit-test for regions: among regions containing `p`
    /// (boundaries inclusive), the one with the largest area wins.
    ///
    /// Preferring the larger of two overlapping candidates is deliberate.
    /// A smallest-or-topmost policy would be the more common choice in
    /// annotation tools, so do not invert this without a product decision.
    pub fn region_at(&self, p: Point) -> Option<EntityId> {
        self.entries
            .iter()
            .filter_map(|(id, entity)| match entity {
                Entity::Region(b) if b.contains_point(p) => Some((*id, b.area())),
                _ => None,
            })
            .max_by_key(|(_, area)| *area)
            .map(|(id, _)| id)
    }

    /// Nearest point entity within `max_dist_sq` of `p`, if any.
    pub fn nearest_point_within(&self, p: Point, max_dist_sq: i64) -> Option<EntityId> {
        self.entries
            .iter()
            .filter_map(|(id, entity)| match entity {
                Entity::Point(q) => Some((*id, q.dist_sq(p))),
                _ => None,
            })
            .min_by_key(|(_, d)| *d)
            .filter(|(_, d)| *d <= max_dist_sq)
            .map(|(id, _)| id)
    }
}
