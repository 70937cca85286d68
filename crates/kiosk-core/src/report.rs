//! Structured event reporting.
//!
//! The catalog and the slide controller never write to a global stream
//! directly. They emit [`KioskEvent`]s into an injected [`Reporter`]; the
//! default [`LogReporter`] forwards them to the `log` facade.

use log::{debug, error, info, warn};

use crate::{
    app::{SlideState, Trigger},
    error::{ContentValidationError, EmptyPlaylistError, MissingAssetWarning},
};

/// Everything the kiosk wants an operator to know about.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KioskEvent<'a> {
    /// A record was dropped while building the playlist.
    RecordSkipped {
        id: &'a str,
        error: &'a ContentValidationError,
    },
    /// A playlist entry failed to load at slide time and was passed over.
    SlideSkipped {
        id: &'a str,
        error: &'a ContentValidationError,
    },
    /// A valid poem without a usable photo.
    PhotoMissing {
        id: &'a str,
        warning: &'a MissingAssetWarning,
    },
    /// The content source could not enumerate poems.
    SourceUnavailable { cause: &'a str },
    /// The configured first poem is not part of the playlist.
    StartPoemAbsent { id: &'a str },
    PlaylistBuilt { len: usize, pinned: bool, seed: u64 },
    EmptyPlaylist { error: EmptyPlaylistError },
    StateChanged {
        from: SlideState,
        to: SlideState,
        trigger: Trigger,
    },
    /// No row of the transition table matched; the state is unchanged.
    TransitionRejected { state: SlideState, trigger: Trigger },
    SlideLoaded {
        id: &'a str,
        index: usize,
        pages: usize,
        has_photo: bool,
    },
    PageAdvanced {
        id: &'a str,
        page: usize,
        pages: usize,
    },
    TouchFault { cause: &'a str },
    BacklightFault { cause: &'a str },
    RenderFault { cause: &'a str },
}

/// Sink for [`KioskEvent`]s.
pub trait Reporter {
    fn report(&mut self, event: KioskEvent<'_>);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, event: KioskEvent<'_>) {
        (**self).report(event);
    }
}

/// Forwards events to the `log` facade.
#[derive(Default, Debug, Clone, Copy)]
pub struct LogReporter;

impl LogReporter {
    pub const fn new() -> Self {
        Self
    }
}

impl Reporter for LogReporter {
    fn report(&mut self, event: KioskEvent<'_>) {
        match event {
            KioskEvent::RecordSkipped { id, error } => {
                warn!("catalog: skipped record id={} reason={}", id, error);
            }
            KioskEvent::SlideSkipped { id, error } => {
                warn!("slide: load failed id={} reason={}", id, error);
            }
            KioskEvent::PhotoMissing { id, warning } => {
                warn!("slide: rendering on black id={} reason={}", id, warning);
            }
            KioskEvent::SourceUnavailable { cause } => {
                error!("catalog: content source unavailable cause={}", cause);
            }
            KioskEvent::StartPoemAbsent { id } => {
                warn!("catalog: start poem not in playlist id={}", id);
            }
            KioskEvent::PlaylistBuilt { len, pinned, seed } => {
                info!(
                    "catalog: playlist built (len={} pinned={} seed={})",
                    len, pinned, seed
                );
            }
            KioskEvent::EmptyPlaylist { error: err } => {
                error!("catalog: {}", err);
            }
            KioskEvent::StateChanged { from, to, trigger } => {
                debug!(
                    "slide: {} -> {} on {}",
                    from.as_str(),
                    to.as_str(),
                    trigger.as_str()
                );
            }
            KioskEvent::TransitionRejected { state, trigger } => {
                warn!(
                    "slide: no transition from {} on {}",
                    state.as_str(),
                    trigger.as_str()
                );
            }
            KioskEvent::SlideLoaded {
                id,
                index,
                pages,
                has_photo,
            } => {
                info!(
                    "slide: loaded id={} index={} pages={} photo={}",
                    id, index, pages, has_photo
                );
            }
            KioskEvent::PageAdvanced { id, page, pages } => {
                info!("slide: page id={} page={}/{}", id, page + 1, pages);
            }
            KioskEvent::TouchFault { cause } => {
                warn!("touch: poll failed cause={}", cause);
            }
            KioskEvent::BacklightFault { cause } => {
                warn!("backlight: write failed cause={}", cause);
            }
            KioskEvent::RenderFault { cause } => {
                warn!("render: draw failed cause={}", cause);
            }
        }
    }
}

/// Owned copy of an event, kept by [`RecordingReporter`].
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub enum Recorded {
    RecordSkipped(alloc::string::String),
    SlideSkipped(alloc::string::String),
    PhotoMissing(alloc::string::String),
    SourceUnavailable,
    StartPoemAbsent(alloc::string::String),
    PlaylistBuilt { len: usize, pinned: bool },
    EmptyPlaylist,
    StateChanged(SlideState, SlideState),
    TransitionRejected(SlideState, Trigger),
    SlideLoaded { index: usize, pages: usize },
    PageAdvanced { page: usize },
    Fault,
}

#[cfg(test)]
#[derive(Default, Debug)]
pub struct RecordingReporter {
    pub events: alloc::vec::Vec<Recorded>,
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn report(&mut self, event: KioskEvent<'_>) {
        use alloc::string::ToString;

        let recorded = match event {
            KioskEvent::RecordSkipped { id, .. } => Recorded::RecordSkipped(id.to_string()),
            KioskEvent::SlideSkipped { id, .. } => Recorded::SlideSkipped(id.to_string()),
            KioskEvent::PhotoMissing { id, .. } => Recorded::PhotoMissing(id.to_string()),
            KioskEvent::SourceUnavailable { .. } => Recorded::SourceUnavailable,
            KioskEvent::StartPoemAbsent { id } => Recorded::StartPoemAbsent(id.to_string()),
            KioskEvent::PlaylistBuilt { len, pinned, .. } => Recorded::PlaylistBuilt { len, pinned },
            KioskEvent::EmptyPlaylist { .. } => Recorded::EmptyPlaylist,
            KioskEvent::StateChanged { from, to, .. } => Recorded::StateChanged(from, to),
            KioskEvent::TransitionRejected { state, trigger } => {
                Recorded::TransitionRejected(state, trigger)
            }
            KioskEvent::SlideLoaded { index, pages, .. } => Recorded::SlideLoaded { index, pages },
            KioskEvent::PageAdvanced { page, .. } => Recorded::PageAdvanced { page },
            KioskEvent::TouchFault { .. }
            | KioskEvent::BacklightFault { .. }
            | KioskEvent::RenderFault { .. } => Recorded::Fault,
        };
        self.events.push(recorded);
    }
}
