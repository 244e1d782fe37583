//! Playback module: the "now playing" state machine and its media seam.
//!
//! `PlaybackController` only decides state. `MediaSync` applies that state
//! to a `MediaElement` after each change, so the transitions can be tested
//! against a fake element and the real audio backend never sees redundant
//! play/pause calls.

mod controller;
mod effects;
mod media;

pub use controller::*;
pub use effects::*;
pub use media::*;

#[cfg(test)]
mod tests;
