//! A media element that plays nothing but keeps time.

use std::time::{Duration, Instant};

use crate::library::{Song, SongId};
use crate::playback::{MediaElement, MediaError, MediaEvent};

/// Simulates a playhead over the song's generated length and reports the
/// end of the "track" like a real element would.
#[derive(Debug, Default)]
pub struct SilentPlayer {
    song: Option<SongId>,
    length: Option<Duration>,
    accumulated: Duration,
    started_at: Option<Instant>,
    volume: f32,
}

impl SilentPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(super) fn volume(&self) -> f32 {
        self.volume
    }

    fn position_at(&self, now: Instant) -> Duration {
        let running = self
            .started_at
            .map_or(Duration::ZERO, |st| now.saturating_duration_since(st));
        let pos = self.accumulated + running;
        match self.length {
            Some(len) => pos.min(len),
            None => Duration::ZERO,
        }
    }

    pub(super) fn play_at(&mut self, now: Instant) -> Result<(), MediaError> {
        let Some(len) = self.length else {
            return Err(MediaError::NoSource);
        };
        // Playing a finished track starts it over.
        if self.accumulated >= len {
            self.accumulated = Duration::ZERO;
        }
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
        Ok(())
    }

    pub(super) fn pause_at(&mut self, now: Instant) {
        self.accumulated = self.position_at(now);
        self.started_at = None;
    }

    pub(super) fn poll_event_at(&mut self, now: Instant) -> Option<MediaEvent> {
        let len = self.length?;
        let song = self.song?;
        self.started_at?;
        if self.position_at(now) >= len {
            self.accumulated = len;
            self.started_at = None;
            return Some(MediaEvent::Ended(song));
        }
        None
    }

    pub(super) fn elapsed_at(&self, now: Instant) -> Duration {
        self.position_at(now)
    }
}

impl MediaElement for SilentPlayer {
    fn load(&mut self, song: &Song) {
        self.song = Some(song.id);
        self.length = Some(song.length.as_duration());
        self.accumulated = Duration::ZERO;
        self.started_at = None;
    }

    fn unload(&mut self) {
        self.song = None;
        self.length = None;
        self.accumulated = Duration::ZERO;
        self.started_at = None;
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.play_at(Instant::now())
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        self.pause_at(Instant::now());
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        self.poll_event_at(Instant::now())
    }
}
