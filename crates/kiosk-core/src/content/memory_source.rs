use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

use serde_json::json;
use thiserror::Error;

use super::ContentSource;

/// Poems bundled for demo mode: `(id, title, body)`.
pub const SAMPLE_POEMS: [(&str, &str, &str); 3] = [
    (
        "ozymandias",
        "Ozymandias",
        "I met a traveller from an antique land,\n\
Who said - \"Two vast and trunkless legs of stone\n\
Stand in the desert. . . . Near them, on the sand,\n\
Half sunk a shattered visage lies, whose frown,\n\
And wrinkled lip, and sneer of cold command,\n\
Tell that its sculptor well those passions read\n\
Which yet survive, stamped on these lifeless things,\n\
The hand that mocked them, and the heart that fed;\n\
\n\
And on the pedestal, these words appear:\n\
My name is Ozymandias, King of Kings;\n\
Look on my Works, ye Mighty, and despair!\n\
Nothing beside remains. Round the decay\n\
Of that colossal Wreck, boundless and bare\n\
The lone and level sands stretch far away.",
    ),
    (
        "hope-is-the-thing",
        "\u{201C}Hope\u{201D} is the thing with feathers",
        "\u{201C}Hope\u{201D} is the thing with feathers \u{2014}\n\
That perches in the soul \u{2014}\n\
And sings the tune without the words \u{2014}\n\
And never stops \u{2014} at all \u{2014}\n\
\n\
And sweetest \u{2014} in the Gale \u{2014} is heard \u{2014}\n\
And sore must be the storm \u{2014}\n\
That could abash the little Bird\n\
That kept so many warm \u{2014}",
    ),
    (
        "the-tyger",
        "The Tyger",
        "Tyger Tyger, burning bright,\n\
In the forests of the night;\n\
What immortal hand or eye,\n\
Could frame thy fearful symmetry?",
    ),
];

/// Bundled sample content, no photos.
pub fn sample_source() -> MemorySource {
    SAMPLE_POEMS
        .iter()
        .fold(MemorySource::new(), |source, (id, title, body)| {
            source.with_record(id, title, body)
        })
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum MemorySourceError {
    #[error("no such entry")]
    NotFound,
}

/// In-memory content source keyed by poem id.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    poems: BTreeMap<String, Vec<u8>>,
    photos: BTreeMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw payload; it is validated only when the catalog reads it.
    pub fn with_poem(mut self, id: &str, payload: Vec<u8>) -> Self {
        self.poems.insert(id.to_string(), payload);
        self
    }

    pub fn with_record(self, id: &str, title: &str, body: &str) -> Self {
        let payload = json!({ "title": title, "body": body }).to_string();
        self.with_poem(id, payload.into_bytes())
    }

    pub fn with_photo(mut self, id: &str, bytes: Vec<u8>) -> Self {
        self.photos.insert(id.to_string(), bytes);
        self
    }

    pub fn remove_poem(&mut self, id: &str) -> Option<Vec<u8>> {
        self.poems.remove(id)
    }

    pub fn remove_photo(&mut self, id: &str) -> Option<Vec<u8>> {
        self.photos.remove(id)
    }
}

impl ContentSource for MemorySource {
    type Error = MemorySourceError;

    fn poem_ids(&mut self) -> Result<Vec<String>, Self::Error> {
        Ok(self.poems.keys().cloned().collect())
    }

    fn load_poem(&mut self, id: &str) -> Result<Vec<u8>, Self::Error> {
        self.poems.get(id).cloned().ok_or(MemorySourceError::NotFound)
    }

    fn has_photo(&mut self, id: &str) -> bool {
        self.photos.contains_key(id)
    }

    fn load_photo(&mut self, id: &str) -> Result<Option<Vec<u8>>, Self::Error> {
        Ok(self.photos.get(id).cloned())
    }
}
