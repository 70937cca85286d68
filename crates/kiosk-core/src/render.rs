//! Slide view models and the output collaborators.

use alloc::string::String;

/// Lines shown when there is nothing to play.
pub const IDLE_MESSAGE: [&str; 3] = [
    "No valid poems.",
    "Add /data/poems/*.json",
    "and /data/photos/<id>.jpg",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Background<'a> {
    Black,
    /// Encoded photo bytes; decoding is up to the surface.
    Photo(&'a [u8]),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SlideView<'a> {
    pub title_lines: &'a [String],
    pub lines: &'a [String],
    pub page_index: usize,
    pub page_count: usize,
    pub background: Background<'a>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen<'a> {
    Blank,
    Slide(SlideView<'a>),
    Message { lines: &'a [&'a str] },
}

/// Draws a [`Screen`]. Brightness is not its concern.
pub trait RenderSurface {
    type Error: core::fmt::Debug;

    fn draw(&mut self, screen: &Screen<'_>) -> Result<(), Self::Error>;
}

/// Dimmable backlight taking a normalized `0.0..=1.0` level.
pub trait Backlight {
    type Error: core::fmt::Debug;

    fn set_brightness(&mut self, level: f32) -> Result<(), Self::Error>;
}

impl<B: Backlight + ?Sized> Backlight for &mut B {
    type Error = B::Error;

    fn set_brightness(&mut self, level: f32) -> Result<(), Self::Error> {
        (**self).set_brightness(level)
    }
}

/// Normalized level to a 0-100 duty value.
pub fn to_percent(level: f32) -> u8 {
    let scaled = level.clamp(0.0, 1.0) * 100.0 + 0.5;
    scaled as u8
}

/// Backlight that only remembers the last level written.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MemoryBacklight {
    pub level: f32,
    pub writes: u32,
}

impl Backlight for MemoryBacklight {
    type Error = core::convert::Infallible;

    fn set_brightness(&mut self, level: f32) -> Result<(), Self::Error> {
        self.level = level;
        self.writes = self.writes.saturating_add(1);
        Ok(())
    }
}
