use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use reqwest::blocking::Client;
use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, info, warn};

use crate::playback::{MediaError, MediaEvent};

use super::fetch::fetch_asset;
use super::sink::{create_sink, decode_source};
use super::source::{Fetch, PlayStep, SourceSlot};
use super::types::{AudioCmd, PlaybackHandle, PlaybackInfo};

/// Everything the audio thread's spawner hands over to it.
pub(super) struct ThreadChannels {
    pub rx: Receiver<AudioCmd>,
    /// Sender into `rx`, used by download workers to report back.
    pub loopback: Sender<AudioCmd>,
    pub events: Sender<MediaEvent>,
    pub ready: Sender<Result<(), MediaError>>,
}

pub(super) fn spawn_audio_thread(
    channels: ThreadChannels,
    playback_info: PlaybackHandle,
    client: Client,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let ThreadChannels {
            rx,
            loopback,
            events,
            ready,
        } = channels;

        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(s) => {
                let _ = ready.send(Ok(()));
                s
            }
            Err(e) => {
                let _ = ready.send(Err(MediaError::Output(e.to_string())));
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped, which would
        // scribble over the TUI.
        stream.log_on_drop(false);

        let mut state = AudioThread {
            stream,
            sink: None,
            slot: SourceSlot::default(),
            want_playing: false,
            volume: 1.0,
            playback_info,
            events,
            loopback,
            client,
        };

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(AudioCmd::Quit { fade_out_ms }) => {
                    state.quit(fade_out_ms);
                    break;
                }
                Ok(cmd) => state.handle(cmd),
                Err(RecvTimeoutError::Timeout) => state.tick(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        debug!("audio thread exiting");
    })
}

struct AudioThread {
    stream: OutputStream,
    sink: Option<Sink>,
    /// Current source and its load stage; downloads for any other
    /// generation are stale.
    slot: SourceSlot,
    /// Whether the controller wants sound, even if the source is still
    /// downloading.
    want_playing: bool,
    volume: f32,
    playback_info: PlaybackHandle,
    events: Sender<MediaEvent>,
    loopback: Sender<AudioCmd>,
    client: Client,
}

impl AudioThread {
    fn handle(&mut self, cmd: AudioCmd) {
        match cmd {
            AudioCmd::Load {
                generation,
                song,
                url,
            } => {
                self.drop_sink();
                self.want_playing = false;
                let fetch = self.slot.load(generation, song, url);
                self.start_fetch(fetch);
            }

            AudioCmd::Loaded {
                generation,
                url,
                result,
            } => {
                let Some(song) = self.slot.accept(generation) else {
                    debug!(generation, %url, "discarding superseded download");
                    return;
                };

                match result.and_then(|bytes| decode_source(&url, bytes)) {
                    Ok(source) => {
                        let sink = create_sink(&self.stream, source, self.volume);
                        if self.want_playing {
                            sink.play();
                        }
                        self.sink = Some(sink);
                        self.slot.ready();
                        self.publish(|info| info.buffering = false);
                        info!(%url, "source ready");
                    }
                    Err(e) => {
                        warn!(error = %e, "failed to load source");
                        self.want_playing = false;
                        self.slot.idle();
                        self.publish(|info| info.buffering = false);
                        let _ = self.events.send(MediaEvent::Failed(song, e));
                    }
                }
            }

            AudioCmd::Unload => {
                self.drop_sink();
                self.slot.unload();
                self.want_playing = false;
                self.publish(|info| *info = Default::default());
            }

            AudioCmd::Play => {
                self.want_playing = true;
                match self.slot.play() {
                    PlayStep::Resume => {
                        if let Some(ref s) = self.sink {
                            s.play();
                        }
                    }
                    PlayStep::Wait => {}
                    PlayStep::Refetch(fetch) => {
                        debug!(generation = fetch.generation, "nothing buffered, fetching again");
                        self.start_fetch(fetch);
                    }
                    PlayStep::NoSource => {
                        warn!("play requested without a source");
                        self.want_playing = false;
                    }
                }
            }

            AudioCmd::Pause => {
                self.want_playing = false;
                if let Some(ref s) = self.sink {
                    s.pause();
                }
            }

            AudioCmd::SetVolume(v) => {
                self.volume = v;
                if let Some(ref s) = self.sink {
                    s.set_volume(v);
                }
            }

            AudioCmd::Quit { .. } => {}
        }
    }

    /// Periodic update of the playhead and end-of-source detection.
    fn tick(&mut self) {
        let Some(ref s) = self.sink else {
            return;
        };

        let pos = s.get_pos();
        let ended = self.want_playing && s.empty();
        self.publish(|info| info.elapsed = pos);

        if ended {
            debug!("source ended");
            self.drop_sink();
            self.want_playing = false;
            if let Some(song) = self.slot.idle() {
                let _ = self.events.send(MediaEvent::Ended(song));
            }
        }
    }

    /// Download `fetch` on a worker; the result comes back as `Loaded`.
    fn start_fetch(&mut self, fetch: Fetch) {
        let Fetch { generation, url } = fetch;
        self.publish(|info| {
            info.elapsed = Duration::ZERO;
            info.buffering = true;
        });

        debug!(generation, %url, "fetching asset");
        let tx = self.loopback.clone();
        let client = self.client.clone();
        thread::spawn(move || {
            let result = fetch_asset(&client, &url);
            let _ = tx.send(AudioCmd::Loaded {
                generation,
                url,
                result,
            });
        });
    }

    fn quit(&mut self, fade_out_ms: u64) {
        if let Some(ref s) = self.sink {
            fade_out_sink(s, self.volume, fade_out_ms);
            s.stop();
        }
    }

    fn drop_sink(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }

    fn publish(&self, update: impl FnOnce(&mut PlaybackInfo)) {
        if let Ok(mut info) = self.playback_info.lock() {
            update(&mut info);
        }
    }
}

fn fade_out_sink(sink: &Sink, from: f32, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(from * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
