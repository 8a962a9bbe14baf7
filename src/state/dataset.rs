//! Directory-backed sample store.
//!
//! All data for one dataset sits under a single root:
//!
//! ```text
//! <root>/images/          image files, one per sample
//! <root>/annotations/     per-sample annotation JSON
//! <root>/samples.txt      sample names, one per line, no extension
//! <root>/snapshot.json    progress file
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::store::Entity;

use super::types::{Snapshot, StoredEntity};
use super::{SampleStore, SessionError};

/// Image extensions probed for a sample, in order.
const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "gif"];

#[derive(Debug)]
pub struct DirSampleStore {
    img_dir: PathBuf,
    ann_dir: PathBuf,
    snapshot_file: PathBuf,
    samples: Vec<String>,
}

impl DirSampleStore {
    /// Open a dataset root, reading the sample list.
    pub fn open(root: &Path) -> Result<Self, SessionError> {
        let sample_file = root.join("samples.txt");
        let content = fs::read_to_string(&sample_file)?;
        let samples: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        if samples.is_empty() {
            return Err(SessionError::NoSamples);
        }
        Ok(Self {
            img_dir: root.join("images"),
            ann_dir: root.join("annotations"),
            snapshot_file: root.join("snapshot.json"),
            samples,
        })
    }

    pub fn sample_name(&self, sample_id: usize) -> &str {
        &self.samples[sample_id]
    }

    fn annotation_path(&self, sample_id: usize) -> PathBuf {
        self.ann_dir.join(format!("{}.json", self.samples[sample_id]))
    }

    fn image_path(&self, sample_id: usize) -> Result<PathBuf, SessionError> {
        let name = &self.samples[sample_id];
        for ext in IMAGE_EXTENSIONS {
            let candidate = self.img_dir.join(format!("{name}.{ext}"));
            if candidate.exists() {
                return Ok(candidate);
            }
        }
        Err(SessionError::ImageNotFound {
            sample: name.clone(),
        })
    }
}

impl SampleStore for DirSampleStore {
    fn len(&self) -> usize {
        self.samples.len()
    }

    fn load_annotations(&self, sample_id: usize) -> Result<Vec<Entity>, SessionError> {
        let path = self.annotation_path(sample_id);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&path)?;
        match serde_json::from_str::<Vec<StoredEntity>>(&text) {
            Ok(stored) => Ok(stored.into_iter().map(Entity::from).collect()),
            Err(e) => {
                log::warn!(
                    "Malformed annotations in {}: {e}; treating as empty",
                    path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_annotations(&self, sample_id: usize, entities: &[Entity]) -> Result<(), SessionError> {
        if entities.is_empty() {
            return Ok(());
        }
        fs::create_dir_all(&self.ann_dir)?;
        let stored: Vec<StoredEntity> = entities.iter().map(|e| StoredEntity::from(*e)).collect();
        let json = serde_json::to_string_pretty(&stored)?;
        fs::write(self.annotation_path(sample_id), json)?;
        Ok(())
    }

    fn image_dimensions(&self, sample_id: usize) -> Result<(u32, u32), SessionError> {
        let path = self.image_path(sample_id)?;
        image::image_dimensions(&path)
            .map_err(|source| SessionError::ImageUnreadable { path, source })
    }

    fn load_snapshot(&self) -> Option<usize> {
        let text = fs::read_to_string(&self.snapshot_file).ok()?;
        let snapshot: Snapshot = serde_json::from_str(&text).ok()?;
        Some(snapshot.samples_id)
    }

    fn save_snapshot(&self, sample_id: usize) -> Result<(), SessionError> {
        let json = serde_json::to_string_pretty(&Snapshot {
            samples_id: sample_id,
        })?;
        fs::write(&self.snapshot_file, json)?;
        Ok(())
    }
}
