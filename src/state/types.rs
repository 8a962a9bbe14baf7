//! Serde types for the on-disk annotation and progress formats.

use serde::{Deserialize, Serialize};

use crate::geometry::{BBox, Point};
use crate::store::Entity;

/// On-disk entity form: `[x, y]` for a point, `[x1, y1, x2, y2]` for a
/// region. Length-discriminated, compatible with the legacy annotation
/// files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredEntity {
    Point([i32; 2]),
    Region([i32; 4]),
}

impl From<Entity> for StoredEntity {
    fn from(entity: Entity) -> Self {
        match entity {
            Entity::Point(p) => StoredEntity::Point([p.x, p.y]),
            Entity::Region(b) => StoredEntity::Region([b.x1, b.y1, b.x2, b.y2]),
        }
    }
}

impl From<StoredEntity> for Entity {
    fn from(stored: StoredEntity) -> Self {
        match stored {
            StoredEntity::Point([x, y]) => Entity::Point(Point::new(x, y)),
            StoredEntity::Region([x1, y1, x2, y2]) => Entity::Region(BBox::new(x1, y1, x2, y2)),
        }
    }
}

/// Progress file payload (`snapshot.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub samples_id: usize,
}
