#![cfg_attr(not(test), no_std)]

//! Frame surface for the 480x480 RGB565 kiosk panel.
//!
//! Holds the framebuffer, the `embedded-graphics` glue and the slide
//! renderer. Photo decoding is left to the panel's JPEG pipeline; here a photo
//! background is drawn as a dark placeholder.

extern crate alloc;

mod framebuffer;
mod graphics;
pub mod ppm;
mod renderer;

pub use framebuffer::{FrameBuffer, PANEL_HEIGHT, PANEL_WIDTH};
pub use graphics::Scaled;
pub use renderer::{SlideRenderer, font_metrics};
