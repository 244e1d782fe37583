//! Audio-related small types and handles.
//!
//! This module defines the command set understood by the audio thread and
//! the playback info it shares with the UI.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::library::SongId;
use crate::playback::MediaError;

#[derive(Debug)]
pub enum AudioCmd {
    /// Start downloading `url` as the new current source for `song`.
    Load {
        generation: u64,
        song: SongId,
        url: String,
    },
    /// A download finished; ignored unless `generation` is still current.
    Loaded {
        generation: u64,
        url: String,
        result: Result<Vec<u8>, MediaError>,
    },
    /// Drop the current source.
    Unload,
    Play,
    Pause,
    SetVolume(f32),
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

#[derive(Debug, Clone, Default)]
/// Runtime playback information shared with the UI.
pub struct PlaybackInfo {
    /// Playhead position of the current source.
    pub elapsed: Duration,
    /// Whether a download for the current source is in flight.
    pub buffering: bool,
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
