//! Slide controller: LOAD -> FADE_IN -> DISPLAY -> FADE_OUT, forever.
//!
//! The controller is advanced by [`SlideController::tick`] from an external
//! frame loop. Waiting is a deadline comparison, never a blocking call, and at
//! most one state transition happens per tick. Drawing is pulled by the caller
//! through [`SlideController::with_screen`] whenever a tick returns
//! [`TickResult::RenderRequested`]; the backlight is driven directly.

mod states;

use alloc::{format, vec::Vec};

use crate::{
    content::{ContentSource, Playlist, PoemId, load_record},
    error::MissingAssetWarning,
    input::{TouchEvent, TouchSource},
    layout::{LayoutConfig, PageSet, TextMeasurer, paginate},
    render::{Background, Backlight, IDLE_MESSAGE, RenderSurface, Screen, SlideView},
    report::{KioskEvent, Reporter},
    settings::{KioskConfig, SlideTiming},
    transition::{EasedFade, FadeSample, Transition},
};

pub use states::{SlideState, TRANSITIONS, TransitionRow, Trigger};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// The fade currently driving the backlight.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct ActiveFade {
    started_ms: u64,
}

/// Everything resolved for the current entry during LOAD.
#[derive(Clone, Debug)]
struct LoadedSlide {
    id: PoemId,
    pages: PageSet,
    photo: Option<Vec<u8>>,
}

pub struct SlideController<CS, TS, BL, TM, R, TR = EasedFade>
where
    CS: ContentSource,
    TS: TouchSource,
    BL: Backlight,
    TM: TextMeasurer,
    R: Reporter,
    TR: Transition,
{
    playlist: Playlist,
    content: CS,
    touch: TS,
    backlight: BL,
    measurer: TM,
    reporter: R,
    transition: TR,
    layout: LayoutConfig,
    timing: SlideTiming,
    target_brightness: f32,
    state: SlideState,
    index: usize,
    page: usize,
    dwell_deadline_ms: Option<u64>,
    fade: Option<ActiveFade>,
    slide: Option<LoadedSlide>,
    consecutive_load_failures: usize,
    brightness: f32,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
