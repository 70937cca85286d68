//! Error taxonomy shared by the catalog and the slide controller.
//!
//! None of these escape the point where they occur: the catalog skips invalid
//! records, LOAD falls back to a black background, and an empty playlist
//! parks the controller in its idle error state.

use alloc::string::String;

use thiserror::Error;

/// A poem record that cannot be used.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ContentValidationError {
    /// The content source could not read the payload.
    #[error("unreadable: {0}")]
    Unreadable(String),
    /// The payload is not well-formed JSON.
    #[error("malformed payload: {0}")]
    Malformed(String),
    /// The JSON root is not an object.
    #[error("payload root must be an object")]
    NotAnObject,
    /// A required key is absent.
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    /// A required key holds something other than a string.
    #[error("field `{0}` must be a string")]
    WrongType(&'static str),
    /// The identifier does not fit the fixed id capacity.
    #[error("id longer than {max} bytes")]
    IdTooLong { max: usize },
}

/// A valid poem whose photo could not be resolved. The slide renders on black.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum MissingAssetWarning {
    #[error("no photo for this poem")]
    NotFound,
    #[error("photo unreadable: {0}")]
    Unreadable(String),
}

/// No valid records at all; playback cannot start.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("playlist is empty: no valid poems")]
pub struct EmptyPlaylistError;
