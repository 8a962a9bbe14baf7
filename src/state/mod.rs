//! Session state: persistence types, the directory-backed sample store,
//! and the session controller with its collaborator traits.

mod dataset;
mod session;
mod types;

pub use dataset::DirSampleStore;
pub use session::{EventSource, FrameView, Renderer, SampleStore, Session};
pub use types::{Snapshot, StoredEntity};

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by session and dataset operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The sample list is missing or empty
    #[error("no samples to annotate")]
    NoSamples,

    /// No image file found for a sample
    #[error("no image found for sample '{sample}'")]
    ImageNotFound {
        /// Name of the sample missing its image
        sample: String,
    },

    /// Image file exists but its header cannot be read
    #[error("unreadable image {path:?}: {source}")]
    ImageUnreadable {
        /// Path of the offending image
        path: PathBuf,
        /// Decoder error
        source: image::ImageError,
    },
}
