use tracing::{debug, warn};

use crate::library::{Library, SongId};

use super::controller::PlaybackController;
use super::media::{MediaElement, MediaError};

/// Applies committed playback state to a media element.
///
/// Each effect is keyed to the fields it depends on and only fires when
/// those fields differ from what was last applied: volume on `volume`, the
/// source on the selected song, play/pause on (song, playing).
#[derive(Debug, Default)]
pub struct MediaSync {
    volume: Option<f32>,
    source: Option<SongId>,
    playing: bool,
}

impl MediaSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring `media` in line with `controller`. Returns the error of a
    /// rejected play/pause request so the caller can re-sync its state;
    /// nothing here retries or waits.
    pub fn apply<M: MediaElement + ?Sized>(
        &mut self,
        controller: &PlaybackController,
        library: &Library,
        media: &mut M,
    ) -> Option<MediaError> {
        let volume = controller.volume();
        if self.volume != Some(volume) {
            media.set_volume(volume);
            self.volume = Some(volume);
        }

        let current = controller.current();
        if self.source != current {
            match current.and_then(|id| library.get(id)) {
                Some(song) => {
                    debug!(song = %song.id, url = %song.audio_url, "loading source");
                    media.load(song);
                }
                None => media.unload(),
            }
            self.source = current;
            // A fresh source starts paused.
            self.playing = false;
        }

        let want_playing = controller.is_playing() && self.source.is_some();
        if want_playing == self.playing {
            return None;
        }

        let result = if want_playing {
            media.play()
        } else {
            media.pause()
        };
        match result {
            Ok(()) => {
                self.playing = want_playing;
                None
            }
            Err(e) => {
                warn!(error = %e, want_playing, "media element rejected request");
                self.playing = false;
                Some(e)
            }
        }
    }

    /// Whether an event from `source` still concerns the playback state:
    /// the element has it loaded and the controller has not moved on.
    /// Events queued before a newer selection are stale.
    pub fn is_current(&self, source: SongId, controller: &PlaybackController) -> bool {
        self.source == Some(source) && controller.current() == Some(source)
    }

    /// Record that the element stopped on its own (ended or failed), so the
    /// next `apply` does not send it a redundant pause.
    pub fn media_stopped(&mut self) {
        self.playing = false;
    }
}
