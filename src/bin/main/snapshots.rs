use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::debug;
use presto_frame::{FrameBuffer, ppm};

/// Numbered PPM files for each rendered frame.
pub(super) struct SnapshotWriter {
    dir: PathBuf,
    next: u32,
}

impl SnapshotWriter {
    pub(super) fn create(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating snapshot dir {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
            next: 0,
        })
    }

    pub(super) fn write(&mut self, frame: &FrameBuffer) -> Result<PathBuf> {
        let path = self.dir.join(format!("frame-{:05}.ppm", self.next));
        fs::write(&path, ppm::encode(frame))
            .with_context(|| format!("writing snapshot {}", path.display()))?;
        self.next = self.next.wrapping_add(1);
        debug!("snapshot: wrote {}", path.display());
        Ok(path)
    }
}
