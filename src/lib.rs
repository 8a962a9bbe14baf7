//! Interactive image-annotation core.
//!
//! An operator steps through an ordered list of image samples, marks points
//! or axis-aligned regions over each image, and persists the result per
//! sample. This crate owns the geometric data model, the zoom-and-pan
//! viewport, the per-sample annotation store, and the event-driven editing
//! state machine. Image decoding, window management, and drawing belong to
//! the embedding shell, reached through the narrow traits in [`state`].

pub mod config;
pub mod geometry;
pub mod interact;
pub mod state;
pub mod store;
pub mod viewport;

pub use config::AppConfig;
pub use geometry::{BBox, GeometryError, Line, Point};
pub use interact::{EditPolicy, Event, KeyCommand, Machine, Phase, PointerButton};
pub use state::{DirSampleStore, Session, SessionError};
pub use store::{AnnotationStore, Entity, EntityId};
pub use viewport::{Viewport, ZoomDirection};
