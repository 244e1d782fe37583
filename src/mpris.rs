use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_io::block_on;
use tracing::{debug, warn};
use zbus::object_server::{InterfaceRef, SignalEmitter};
use zbus::{Connection, interface};
use zvariant::{ObjectPath, OwnedObjectPath, OwnedValue, Value};

use crate::app::PlaybackState;
use crate::library::Song;

const BUS_NAME: &str = "org.mpris.MediaPlayer2.musicverse";
const OBJECT_PATH: &str = "/org/mpris/MediaPlayer2";

/// Requests arriving from the desktop's media controls.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlCmd {
    Quit,
    Play,
    Pause,
    PlayPause,
    Stop,
    Next,
    Prev,
    SetVolume(f64),
}

#[derive(Debug, Default)]
struct SharedState {
    playback: PlaybackState,
    title: Option<String>,
    artist: Vec<String>,
    genre: Option<String>,
    url: Option<String>,
    length_micros: Option<i64>,
    position_micros: i64,
    track_id: Option<OwnedObjectPath>,
    volume: f64,
}

/// Publishes player state to the MPRIS service thread.
pub struct MprisHandle {
    state: Arc<Mutex<SharedState>>,
    notify: Sender<()>,
}

impl MprisHandle {
    pub fn set_playback(&self, playback: PlaybackState) {
        if let Ok(mut s) = self.state.lock() {
            s.playback = playback;
        }
        let _ = self.notify.send(());
    }

    pub fn set_volume(&self, volume: f64) {
        if let Ok(mut s) = self.state.lock() {
            s.volume = volume;
        }
        let _ = self.notify.send(());
    }

    /// Position is polled by clients and never signalled.
    pub fn set_position(&self, position: Duration) {
        if let Ok(mut s) = self.state.lock() {
            s.position_micros = i64::try_from(position.as_micros()).unwrap_or(i64::MAX);
        }
    }

    pub fn set_track_metadata(&self, song: Option<&Song>) {
        if let Ok(mut s) = self.state.lock() {
            match song {
                Some(song) => {
                    s.title = Some(song.title.clone());
                    s.artist = vec![song.artist.clone()];
                    s.genre = Some(song.genre.display_name().to_string());
                    s.url = Some(song.audio_url.clone());
                    s.length_micros =
                        i64::try_from(song.length.as_duration().as_micros()).ok();
                    s.track_id = ObjectPath::try_from(format!(
                        "/org/musicverse/track/{}",
                        song.id.0
                    ))
                    .ok()
                    .map(OwnedObjectPath::from);
                }
                None => {
                    s.title = None;
                    s.artist.clear();
                    s.genre = None;
                    s.url = None;
                    s.length_micros = None;
                    s.position_micros = 0;
                    s.track_id = None;
                }
            }
        }
        let _ = self.notify.send(());
    }
}

struct RootIface {
    tx: Sender<ControlCmd>,
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootIface {
    fn raise(&self) {}

    fn quit(&self) {
        let _ = self.tx.send(ControlCmd::Quit);
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn identity(&self) -> &str {
        "MusicVerse"
    }

    #[zbus(property)]
    fn supported_uri_schemes(&self) -> Vec<String> {
        vec![]
    }

    #[zbus(property)]
    fn supported_mime_types(&self) -> Vec<String> {
        vec![]
    }
}

struct PlayerIface {
    tx: Sender<ControlCmd>,
    state: Arc<Mutex<SharedState>>,
}

fn owned(value: Value<'_>) -> Option<OwnedValue> {
    OwnedValue::try_from(value).ok()
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerIface {
    fn next(&self) {
        let _ = self.tx.send(ControlCmd::Next);
    }

    fn previous(&self) {
        let _ = self.tx.send(ControlCmd::Prev);
    }

    fn play(&self) {
        let _ = self.tx.send(ControlCmd::Play);
    }

    fn pause(&self) {
        let _ = self.tx.send(ControlCmd::Pause);
    }

    fn play_pause(&self) {
        let _ = self.tx.send(ControlCmd::PlayPause);
    }

    fn stop(&self) {
        let _ = self.tx.send(ControlCmd::Stop);
    }

    #[zbus(property)]
    fn playback_status(&self) -> &str {
        let Ok(s) = self.state.lock() else {
            return "Stopped";
        };
        match s.playback {
            PlaybackState::Stopped => "Stopped",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        }
    }

    #[zbus(property)]
    fn volume(&self) -> f64 {
        self.state.lock().map(|s| s.volume).unwrap_or(0.0)
    }

    #[zbus(property)]
    fn set_volume(&mut self, volume: f64) {
        let _ = self.tx.send(ControlCmd::SetVolume(volume));
    }

    #[zbus(property)]
    fn position(&self) -> i64 {
        self.state.lock().map(|s| s.position_micros).unwrap_or(0)
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_seek(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn metadata(&self) -> HashMap<String, OwnedValue> {
        let mut map = HashMap::new();
        let Ok(s) = self.state.lock() else {
            return map;
        };

        let mut put = |key: &str, value: Option<OwnedValue>| {
            if let Some(v) = value {
                map.insert(key.to_string(), v);
            }
        };

        if let Some(id) = &s.track_id {
            put("mpris:trackid", owned(Value::from(id.clone().into_inner())));
        }
        if let Some(title) = &s.title {
            put("xesam:title", owned(Value::from(title.clone())));
        }
        if !s.artist.is_empty() {
            put("xesam:artist", owned(Value::from(s.artist.clone())));
        }
        if let Some(genre) = &s.genre {
            put("xesam:genre", owned(Value::from(vec![genre.clone()])));
        }
        if let Some(url) = &s.url {
            put("xesam:url", owned(Value::from(url.clone())));
        }
        if let Some(len) = s.length_micros {
            put("mpris:length", owned(Value::from(len)));
        }
        map
    }
}

async fn emit_changes(player: &InterfaceRef<PlayerIface>) -> zbus::Result<()> {
    let emitter: &SignalEmitter<'_> = player.signal_emitter();
    let iface = player.get().await;
    iface.playback_status_changed(emitter).await?;
    iface.metadata_changed(emitter).await?;
    iface.volume_changed(emitter).await
}

async fn serve(
    tx: Sender<ControlCmd>,
    state: Arc<Mutex<SharedState>>,
    notify: Receiver<()>,
) -> zbus::Result<()> {
    let connection = Connection::session().await?;
    connection.request_name(BUS_NAME).await?;

    let object_server = connection.object_server();
    object_server
        .at(OBJECT_PATH, RootIface { tx: tx.clone() })
        .await?;
    object_server
        .at(OBJECT_PATH, PlayerIface { tx, state })
        .await?;
    let player = object_server
        .interface::<_, PlayerIface>(OBJECT_PATH)
        .await?;
    debug!(name = BUS_NAME, "mpris service registered");

    // zbus drives the connection on its own executor thread, so blocking
    // here only parks this service thread. Ends when the handle is dropped.
    while notify.recv().is_ok() {
        while notify.try_recv().is_ok() {}
        if let Err(e) = emit_changes(&player).await {
            debug!(error = %e, "mpris: failed to emit property changes");
        }
    }
    Ok(())
}

/// Start the MPRIS service on its own thread. Bus failures are logged and
/// leave the app running without media-key support.
pub fn spawn_mpris(tx: Sender<ControlCmd>) -> MprisHandle {
    let state = Arc::new(Mutex::new(SharedState {
        volume: 1.0,
        ..SharedState::default()
    }));
    let (notify_tx, notify_rx) = mpsc::channel::<()>();

    let state_for_thread = state.clone();
    std::thread::spawn(move || {
        if let Err(e) = block_on(serve(tx, state_for_thread, notify_rx)) {
            warn!(error = %e, "mpris unavailable");
        }
    });

    MprisHandle {
        state,
        notify: notify_tx,
    }
}
