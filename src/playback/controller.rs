use tracing::debug;

use crate::library::{Library, SongId};

/// Volume slider granularity.
pub const VOLUME_STEP: f32 = 0.01;

/// Owner of the "now playing" state. Views read it, only these operations
/// change it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackController {
    current: Option<SongId>,
    is_playing: bool,
    volume: f32,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(0.75)
    }
}

impl PlaybackController {
    pub fn new(volume: f32) -> Self {
        Self {
            current: None,
            is_playing: false,
            volume: quantize_volume(volume),
        }
    }

    pub fn current(&self) -> Option<SongId> {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Whether `id` is the selected song and is currently playing.
    pub fn is_playing_song(&self, id: SongId) -> bool {
        self.is_playing && self.current == Some(id)
    }

    /// Selecting the current song toggles play/pause; selecting any other
    /// song replaces it and starts playing.
    pub fn select_song(&mut self, id: SongId) {
        if self.current == Some(id) {
            self.is_playing = !self.is_playing;
        } else {
            self.current = Some(id);
            self.is_playing = true;
        }
        debug!(song = %id, playing = self.is_playing, "select song");
    }

    /// Flip play/pause; a no-op with nothing selected.
    pub fn toggle_play_pause(&mut self) {
        if self.current.is_some() {
            self.is_playing = !self.is_playing;
        }
    }

    pub fn play(&mut self) {
        if self.current.is_some() {
            self.is_playing = true;
        }
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    /// Clear the selection entirely.
    pub fn stop(&mut self) {
        self.current = None;
        self.is_playing = false;
    }

    /// Select the song after the current one in library order. No-op at the
    /// end of the library or with nothing selected. Returns whether a new
    /// song was selected.
    pub fn skip_forward(&mut self, library: &Library) -> bool {
        let Some(pos) = self.current.and_then(|id| library.position(id)) else {
            return false;
        };
        match library.at(pos + 1) {
            Some(next) => {
                self.current = Some(next.id);
                self.is_playing = true;
                true
            }
            None => false,
        }
    }

    /// Select the song before the current one in library order. No-op at
    /// the start of the library or with nothing selected.
    pub fn skip_back(&mut self, library: &Library) -> bool {
        let Some(pos) = self.current.and_then(|id| library.position(id)) else {
            return false;
        };
        if pos == 0 {
            return false;
        }
        match library.at(pos - 1) {
            Some(prev) => {
                self.current = Some(prev.id);
                self.is_playing = true;
                true
            }
            None => false,
        }
    }

    /// Set the volume, clamped to [0, 1] on the slider's 0.01 grid.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = quantize_volume(volume);
    }

    pub fn nudge_volume(&mut self, delta: f32) {
        self.set_volume(self.volume + delta);
    }

    /// The element finished the current source: advance like skip-forward.
    /// At the end of the library the element has stopped for real, so the
    /// playing flag follows it.
    pub fn on_media_ended(&mut self, library: &Library) {
        if !self.skip_forward(library) {
            self.is_playing = false;
        }
    }

    /// The element failed or rejected playback; trust it over our flag.
    pub fn on_media_failed(&mut self) {
        self.is_playing = false;
    }
}

fn quantize_volume(volume: f32) -> f32 {
    if !volume.is_finite() {
        return 0.0;
    }
    let steps = (volume.clamp(0.0, 1.0) / VOLUME_STEP).round();
    (steps / VOLUME_STEP.recip()).clamp(0.0, 1.0)
}
