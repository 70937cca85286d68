//! Poem content: records, playlist entries and the source collaborator.

pub mod catalog;
pub mod memory_source;
mod poem;

use alloc::{string::String, vec::Vec};

use heapless::String as HeaplessString;

use crate::error::ContentValidationError;

pub use catalog::{build_playlist, load_record, playlist_ids};
pub use memory_source::{MemorySource, MemorySourceError, sample_source};
pub use poem::parse_poem;

/// Capacity of a poem identifier in bytes.
pub const POEM_ID_BYTES: usize = 64;

/// Poem identifier, derived from the source's file or key name.
pub type PoemId = HeaplessString<POEM_ID_BYTES>;

pub fn poem_id(raw: &str) -> Result<PoemId, ContentValidationError> {
    let mut id = PoemId::new();
    id.push_str(raw)
        .map_err(|_| ContentValidationError::IdTooLong {
            max: POEM_ID_BYTES,
        })?;
    Ok(id)
}

/// A validated poem.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoemRecord {
    pub id: PoemId,
    pub title: String,
    /// Newline-significant body text.
    pub body: String,
}

/// One slide of the playlist: a valid poem plus whether a photo exists for it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SlideEntry {
    pub id: PoemId,
    pub has_photo: bool,
}

/// Ordered slides with unique ids. Never reshuffled once built.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Playlist {
    entries: Vec<SlideEntry>,
}

impl Playlist {
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn from_entries(entries: Vec<SlideEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SlideEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[SlideEntry] {
        &self.entries
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id.as_str() == id)
    }

    /// Moves `id` to the front, keeping the relative order of everything else.
    /// Returns `false` when `id` is not in the playlist.
    pub(crate) fn pin_first(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        let entry = self.entries.remove(index);
        self.entries.insert(0, entry);
        true
    }
}

/// Storage that holds poem payloads and optional photos.
pub trait ContentSource {
    type Error: core::fmt::Debug;

    /// Enumerate every poem identifier the source knows about.
    fn poem_ids(&mut self) -> Result<Vec<String>, Self::Error>;

    /// Raw payload bytes for one poem.
    fn load_poem(&mut self, id: &str) -> Result<Vec<u8>, Self::Error>;

    /// Whether a photo is stored for `id`.
    fn has_photo(&mut self, id: &str) -> bool;

    /// Photo bytes for `id`, `Ok(None)` when there is none.
    fn load_photo(&mut self, id: &str) -> Result<Option<Vec<u8>>, Self::Error>;
}

impl<T: ContentSource + ?Sized> ContentSource for &mut T {
    type Error = T::Error;

    fn poem_ids(&mut self) -> Result<Vec<String>, Self::Error> {
        (**self).poem_ids()
    }

    fn load_poem(&mut self, id: &str) -> Result<Vec<u8>, Self::Error> {
        (**self).load_poem(id)
    }

    fn has_photo(&mut self, id: &str) -> bool {
        (**self).has_photo(id)
    }

    fn load_photo(&mut self, id: &str) -> Result<Option<Vec<u8>>, Self::Error> {
        (**self).load_photo(id)
    }
}
