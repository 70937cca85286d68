//! Touch input abstraction layer.

mod edge;
pub mod mock;

pub use edge::EdgeTouch;

/// A discrete tap in panel coordinates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TouchEvent {
    pub x: u16,
    pub y: u16,
}

/// Non-blocking tap source; yields at most one event per call.
pub trait TouchSource {
    type Error: core::fmt::Debug;

    fn poll_touch(&mut self) -> Result<Option<TouchEvent>, Self::Error>;
}

/// Level-triggered panel: reports the contact point while pressed.
pub trait TouchPanel {
    type Error: core::fmt::Debug;

    fn sample(&mut self) -> Result<Option<(u16, u16)>, Self::Error>;
}

impl<T: TouchSource + ?Sized> TouchSource for &mut T {
    type Error = T::Error;

    fn poll_touch(&mut self) -> Result<Option<TouchEvent>, Self::Error> {
        (**self).poll_touch()
    }
}
