use std::time::Duration;

use thiserror::Error;

use crate::library::{Song, SongId};

/// Failures reported by a media element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("no source loaded")]
    NoSource,
    #[error("audio thread is not running")]
    Disconnected,
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("failed to decode {url}: {reason}")]
    Decode { url: String, reason: String },
    #[error("audio output unavailable: {0}")]
    Output(String),
}

/// Asynchronous notifications from a media element, tagged with the song
/// whose source produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaEvent {
    /// The loaded source played to its natural end.
    Ended(SongId),
    /// Loading or starting the source failed; the element is not playing.
    Failed(SongId, MediaError),
}

impl MediaEvent {
    pub fn source(&self) -> SongId {
        match self {
            MediaEvent::Ended(id) | MediaEvent::Failed(id, _) => *id,
        }
    }
}

/// A playable resource driven by the playback effects.
///
/// `play`/`pause` may complete asynchronously; an `Err` means the request
/// was rejected outright. Later failures arrive through `poll_event`.
pub trait MediaElement {
    /// Replace the current source with `song`'s audio, superseding any
    /// pending load of the previous source.
    fn load(&mut self, song: &Song);
    /// Drop the current source.
    fn unload(&mut self);
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self) -> Result<(), MediaError>;
    fn set_volume(&mut self, volume: f32);
    /// Playhead position of the current source.
    fn elapsed(&self) -> Duration;
    fn poll_event(&mut self) -> Option<MediaEvent>;
    /// Whether the element is still fetching its source.
    fn is_buffering(&self) -> bool {
        false
    }
    /// Release the output, fading out over `fade_out` where supported.
    fn shutdown(&mut self, _fade_out: Duration) {}
}

impl<M: MediaElement + ?Sized> MediaElement for Box<M> {
    fn load(&mut self, song: &Song) {
        (**self).load(song)
    }

    fn unload(&mut self) {
        (**self).unload()
    }

    fn play(&mut self) -> Result<(), MediaError> {
        (**self).play()
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        (**self).pause()
    }

    fn set_volume(&mut self, volume: f32) {
        (**self).set_volume(volume)
    }

    fn elapsed(&self) -> Duration {
        (**self).elapsed()
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        (**self).poll_event()
    }

    fn is_buffering(&self) -> bool {
        (**self).is_buffering()
    }

    fn shutdown(&mut self, fade_out: Duration) {
        (**self).shutdown(fade_out)
    }
}
