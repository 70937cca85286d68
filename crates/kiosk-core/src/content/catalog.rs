//! Playlist construction: scan, validate, sort, shuffle, pin.

use alloc::{format, string::String, vec::Vec};

use rand::{SeedableRng, rngs::SmallRng, seq::SliceRandom};

use super::{ContentSource, Playlist, PoemRecord, SlideEntry, parse_poem};
use crate::{
    error::{ContentValidationError, EmptyPlaylistError},
    report::{KioskEvent, Reporter},
};

/// Read and validate a single poem from `source`.
pub fn load_record<CS>(source: &mut CS, id: &str) -> Result<PoemRecord, ContentValidationError>
where
    CS: ContentSource,
{
    let payload = source
        .load_poem(id)
        .map_err(|err| ContentValidationError::Unreadable(format!("{err:?}")))?;
    parse_poem(id, &payload)
}

/// Build the playlist once at startup.
///
/// Surviving ids are sorted, shuffled with a generator seeded from `seed`, and
/// `start_id` (when present) is moved to the front. Invalid records are
/// reported and dropped; an empty result is returned as an empty playlist.
pub fn build_playlist<CS, R>(
    source: &mut CS,
    start_id: Option<&str>,
    seed: u64,
    reporter: &mut R,
) -> Playlist
where
    CS: ContentSource,
    R: Reporter,
{
    let mut ids = match source.poem_ids() {
        Ok(ids) => ids,
        Err(err) => {
            let cause = format!("{err:?}");
            reporter.report(KioskEvent::SourceUnavailable { cause: &cause });
            reporter.report(KioskEvent::EmptyPlaylist {
                error: EmptyPlaylistError,
            });
            return Playlist::empty();
        }
    };

    ids.sort_unstable();
    ids.dedup();

    let mut entries = Vec::with_capacity(ids.len());
    for id in &ids {
        match load_record(source, id) {
            Ok(record) => {
                let has_photo = source.has_photo(id);
                entries.push(SlideEntry {
                    id: record.id,
                    has_photo,
                });
            }
            Err(error) => reporter.report(KioskEvent::RecordSkipped {
                id: id.as_str(),
                error: &error,
            }),
        }
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    entries.shuffle(&mut rng);

    let mut playlist = Playlist::from_entries(entries);

    let mut pinned = false;
    if let Some(start) = start_id {
        pinned = playlist.pin_first(start);
        if !pinned {
            reporter.report(KioskEvent::StartPoemAbsent { id: start });
        }
    }

    if playlist.is_empty() {
        reporter.report(KioskEvent::EmptyPlaylist {
            error: EmptyPlaylistError,
        });
    } else {
        reporter.report(KioskEvent::PlaylistBuilt {
            len: playlist.len(),
            pinned,
            seed,
        });
    }

    playlist
}

/// Ids of `playlist` in order, as owned strings.
pub fn playlist_ids(playlist: &Playlist) -> Vec<String> {
    playlist.ids().map(String::from).collect()
}
