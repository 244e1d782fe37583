use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::info;

use crate::config::AudioSettings;
use crate::library::Song;
use crate::playback::{MediaElement, MediaError, MediaEvent};

use super::fetch::http_client;
use super::thread::{ThreadChannels, spawn_audio_thread};
use super::types::{AudioCmd, PlaybackHandle, PlaybackInfo};

/// Media element backed by the rodio audio thread.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    events: Receiver<MediaEvent>,
    playback: PlaybackHandle,
    generation: u64,
    loaded: bool,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    /// Start the audio thread. Fails when no output device can be opened.
    pub fn new(audio_settings: &AudioSettings) -> Result<Self, MediaError> {
        let client = http_client(Duration::from_secs(audio_settings.fetch_timeout_secs))?;

        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (events_tx, events_rx) = mpsc::channel::<MediaEvent>();
        let (ready_tx, ready_rx) = mpsc::channel::<Result<(), MediaError>>();
        let playback_info: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));

        let audio_handle = spawn_audio_thread(
            ThreadChannels {
                rx,
                loopback: tx.clone(),
                events: events_tx,
                ready: ready_tx,
            },
            playback_info.clone(),
            client,
        );

        match ready_rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                let _ = audio_handle.join();
                return Err(e);
            }
            Err(_) => return Err(MediaError::Disconnected),
        }
        info!("audio output ready");

        Ok(Self {
            tx,
            events: events_rx,
            playback: playback_info,
            generation: 0,
            loaded: false,
            join: Mutex::new(Some(audio_handle)),
        })
    }

    fn send(&self, cmd: AudioCmd) -> Result<(), MediaError> {
        self.tx.send(cmd).map_err(|_| MediaError::Disconnected)
    }

    /// Fade out, stop the audio thread and wait for it.
    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

impl MediaElement for AudioPlayer {
    fn load(&mut self, song: &Song) {
        self.generation += 1;
        self.loaded = true;
        let _ = self.send(AudioCmd::Load {
            generation: self.generation,
            song: song.id,
            url: song.audio_url.clone(),
        });
    }

    fn unload(&mut self) {
        self.loaded = false;
        let _ = self.send(AudioCmd::Unload);
    }

    fn play(&mut self) -> Result<(), MediaError> {
        if !self.loaded {
            return Err(MediaError::NoSource);
        }
        self.send(AudioCmd::Play)
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        self.send(AudioCmd::Pause)
    }

    fn set_volume(&mut self, volume: f32) {
        let _ = self.send(AudioCmd::SetVolume(volume));
    }

    fn elapsed(&self) -> Duration {
        self.playback
            .lock()
            .map(|info| info.elapsed)
            .unwrap_or(Duration::ZERO)
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        self.events.try_recv().ok()
    }

    fn is_buffering(&self) -> bool {
        self.playback
            .lock()
            .map(|info| info.buffering)
            .unwrap_or(false)
    }

    fn shutdown(&mut self, fade_out: Duration) {
        self.quit_softly(fade_out);
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        // The thread holds a sender to itself, so it only stops on Quit.
        let _ = self.tx.send(AudioCmd::Quit { fade_out_ms: 0 });
    }
}
