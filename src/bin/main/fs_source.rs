use std::{
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
};

use kiosk_core::content::ContentSource;
use log::{debug, warn};

pub(super) const POEMS_DIR: &str = "poems";
pub(super) const PHOTOS_DIR: &str = "photos";

/// Content laid out as `<root>/poems/<id>.json` and `<root>/photos/<id>.jpg`.
#[derive(Debug, Clone)]
pub(super) struct FsContentSource {
    poems_dir: PathBuf,
    photos_dir: PathBuf,
}

impl FsContentSource {
    pub(super) fn new(root: &Path) -> Self {
        Self {
            poems_dir: root.join(POEMS_DIR),
            photos_dir: root.join(PHOTOS_DIR),
        }
    }

    fn poem_path(&self, id: &str) -> PathBuf {
        self.poems_dir.join(format!("{id}.json"))
    }

    fn photo_path(&self, id: &str) -> PathBuf {
        self.photos_dir.join(format!("{id}.jpg"))
    }
}

impl ContentSource for FsContentSource {
    type Error = io::Error;

    fn poem_ids(&mut self) -> Result<Vec<String>, Self::Error> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.poems_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension() != Some(OsStr::new("json")) || !entry.file_type()?.is_file() {
                continue;
            }

            match path.file_stem().and_then(OsStr::to_str) {
                Some(stem) => ids.push(stem.to_owned()),
                None => warn!("fs: skipping non-utf8 poem file {}", path.display()),
            }
        }

        debug!("fs: found {} poem files in {}", ids.len(), self.poems_dir.display());
        Ok(ids)
    }

    fn load_poem(&mut self, id: &str) -> Result<Vec<u8>, Self::Error> {
        fs::read(self.poem_path(id))
    }

    fn has_photo(&mut self, id: &str) -> bool {
        self.photo_path(id).is_file()
    }

    fn load_photo(&mut self, id: &str) -> Result<Option<Vec<u8>>, Self::Error> {
        match fs::read(self.photo_path(id)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use kiosk_core::{
        content::{build_playlist, playlist_ids},
        report::LogReporter,
    };

    use super::*;

    fn write_poem(root: &Path, id: &str, payload: &str) {
        fs::write(root.join(POEMS_DIR).join(format!("{id}.json")), payload).unwrap();
    }

    fn content_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(POEMS_DIR)).unwrap();
        fs::create_dir(dir.path().join(PHOTOS_DIR)).unwrap();
        dir
    }

    #[test]
    fn only_json_files_become_ids() {
        let dir = content_root();
        write_poem(dir.path(), "sonnet-18", r#"{"title": "Sonnet 18", "body": "x"}"#);
        fs::write(dir.path().join(POEMS_DIR).join("notes.txt"), "x").unwrap();
        fs::write(dir.path().join(POEMS_DIR).join(".json"), "{}").unwrap();
        fs::create_dir(dir.path().join(POEMS_DIR).join("nested.json")).unwrap();

        let mut source = FsContentSource::new(dir.path());
        assert_eq!(source.poem_ids().unwrap(), vec!["sonnet-18".to_string()]);
    }

    #[test]
    fn photos_are_optional() {
        let dir = content_root();
        write_poem(dir.path(), "a", r#"{"title": "A", "body": "a"}"#);
        fs::write(dir.path().join(PHOTOS_DIR).join("a.jpg"), [0xFF, 0xD8]).unwrap();
        write_poem(dir.path(), "b", r#"{"title": "B", "body": "b"}"#);

        let mut source = FsContentSource::new(dir.path());
        assert!(source.has_photo("a"));
        assert_eq!(source.load_photo("a").unwrap(), Some(vec![0xFF, 0xD8]));
        assert!(!source.has_photo("b"));
        assert_eq!(source.load_photo("b").unwrap(), None);
    }

    #[test]
    fn catalog_over_directory_skips_invalid_files() {
        let dir = content_root();
        write_poem(dir.path(), "good", r#"{"title": "Good", "body": "fine"}"#);
        write_poem(dir.path(), "bad", r#"{"title": 3}"#);

        let mut source = FsContentSource::new(dir.path());
        let playlist = build_playlist(&mut source, None, 1, &mut LogReporter::new());
        assert_eq!(playlist_ids(&playlist), vec!["good".to_string()]);
    }

    #[test]
    fn missing_poems_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = FsContentSource::new(dir.path());

        assert!(source.poem_ids().is_err());
        let playlist = build_playlist(&mut source, None, 1, &mut LogReporter::new());
        assert!(playlist.is_empty());
    }
}
