//! Slide controller states and the transition table.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SlideState {
    Load,
    FadeIn,
    Display,
    FadeOut,
    /// Absorbing: nothing is playable.
    IdleError,
}

impl SlideState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Load => "LOAD",
            Self::FadeIn => "FADE_IN",
            Self::Display => "DISPLAY",
            Self::FadeOut => "FADE_OUT",
            Self::IdleError => "IDLE_ERROR",
        }
    }

    /// Touch only moves pages while the slide is fully shown.
    pub const fn accepts_touch(self) -> bool {
        matches!(self, Self::Display)
    }

    /// Look up the row for `(self, trigger)`.
    pub fn next(self, trigger: Trigger) -> Option<Self> {
        TRANSITIONS
            .iter()
            .find(|row| row.from == self && row.trigger == trigger)
            .map(|row| row.to)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Trigger {
    /// The entry was resolved and its first page rendered dark.
    SlideReady,
    FadeInComplete,
    DwellExpired,
    FadeOutComplete,
    PlaylistEmpty,
    /// Every playlist entry failed to load in a row.
    NothingLoadable,
}

impl Trigger {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SlideReady => "slide-ready",
            Self::FadeInComplete => "fade-in-complete",
            Self::DwellExpired => "dwell-expired",
            Self::FadeOutComplete => "fade-out-complete",
            Self::PlaylistEmpty => "playlist-empty",
            Self::NothingLoadable => "nothing-loadable",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransitionRow {
    pub from: SlideState,
    pub trigger: Trigger,
    pub to: SlideState,
}

const fn row(from: SlideState, trigger: Trigger, to: SlideState) -> TransitionRow {
    TransitionRow { from, trigger, to }
}

/// Every legal state change. Page turns in DISPLAY are not state changes.
pub const TRANSITIONS: [TransitionRow; 6] = [
    row(SlideState::Load, Trigger::SlideReady, SlideState::FadeIn),
    row(SlideState::Load, Trigger::PlaylistEmpty, SlideState::IdleError),
    row(SlideState::Load, Trigger::NothingLoadable, SlideState::IdleError),
    row(SlideState::FadeIn, Trigger::FadeInComplete, SlideState::Display),
    row(SlideState::Display, Trigger::DwellExpired, SlideState::FadeOut),
    row(SlideState::FadeOut, Trigger::FadeOutComplete, SlideState::Load),
];
