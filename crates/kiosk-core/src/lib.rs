#![cfg_attr(not(test), no_std)]

//! Board-agnostic playback logic for the poetry kiosk.
//!
//! Everything in here is driven by ticks and talks to hardware only through
//! the collaborator traits in [`content`], [`input`], [`layout`] and
//! [`render`].

extern crate alloc;

pub mod app;
pub mod content;
pub mod error;
pub mod input;
pub mod layout;
pub mod render;
pub mod report;
pub mod settings;
pub mod text_policy;
pub mod transition;
