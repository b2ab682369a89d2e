//! Best-effort debug snapshots of intermediate bitmaps

use crate::bitmap::Bitmap;
use crate::io::configuration::{OUTPUT_EXTENSION, SNAPSHOT_ROOT};
use crate::io::diagnostics::Diagnostics;
use std::path::{Path, PathBuf};

/// Writes labelled intermediate bitmaps under `<root>/<prefix>/`
///
/// Saving never fails the caller: a directory that cannot be created is
/// ignored and a failed write is reported as a warning.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    directory: Option<PathBuf>,
}

impl SnapshotStore {
    /// A store that drops every snapshot
    pub const fn disabled() -> Self {
        Self { directory: None }
    }

    /// A store writing to `<root>/<prefix>/`
    pub fn new(root: impl AsRef<Path>, prefix: &str) -> Self {
        Self {
            directory: Some(root.as_ref().join(prefix)),
        }
    }

    /// A store writing to `image_testing/<prefix>/` in the working directory
    pub fn with_prefix(prefix: &str) -> Self {
        Self::new(SNAPSHOT_ROOT, prefix)
    }

    /// Whether snapshots are written at all
    pub const fn is_enabled(&self) -> bool {
        self.directory.is_some()
    }

    /// Directory snapshots land in, if enabled
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// File a snapshot with the given label would be written to
    pub fn path_for(&self, label: &str) -> Option<PathBuf> {
        self.directory
            .as_ref()
            .map(|dir| dir.join(format!("{label}.{OUTPUT_EXTENSION}")))
    }

    /// Save `bitmap` as `<label>.png`, returning the written path
    pub fn save(
        &self,
        label: &str,
        bitmap: &Bitmap,
        diagnostics: &dyn Diagnostics,
    ) -> Option<PathBuf> {
        let directory = self.directory.as_ref()?;
        let path = self.path_for(label)?;

        // An uncreatable directory surfaces as a failed save below
        if let Err(error) = std::fs::create_dir_all(directory) {
            diagnostics.debug(&format!(
                "Could not create snapshot directory {}: {error}",
                directory.display()
            ));
        }

        match bitmap.save(&path) {
            Ok(()) => {
                diagnostics.debug(&format!("Saved snapshot {}", path.display()));
                Some(path)
            }
            Err(error) => {
                diagnostics.warn_error(&error);
                None
            }
        }
    }
}
