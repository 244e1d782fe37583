use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::app::{Action, App, PlaybackState, View};
use crate::config;
use crate::library::SongId;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::playback::{MediaElement, MediaEvent, MediaSync};
use crate::runtime::mpris_sync::update_mpris;
use crate::ui::{self, NowPlaying};

/// Whether the loop should keep going after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
    sync: MediaSync,
    last_mpris_song: Option<SongId>,
    last_mpris_playback: PlaybackState,
    last_mpris_volume: f32,
}

impl EventLoopState {
    /// Construct a new `EventLoopState` seeded from `app`.
    pub fn new(app: &App) -> Self {
        Self {
            pending_gg: false,
            sync: MediaSync::new(),
            last_mpris_song: app.playback.current(),
            last_mpris_playback: app.playback_state(),
            last_mpris_volume: app.playback.volume(),
        }
    }
}

/// Main terminal event loop: handles input, drawing, media reconciliation
/// and MPRIS. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    media: &mut dyn MediaElement,
    mpris: &MprisHandle,
    control_rx: &mpsc::Receiver<ControlCmd>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    'main: loop {
        drain_media_events(app, media, state);
        reconcile(app, media, state);
        sync_mpris(mpris, app, media, state);

        let now = NowPlaying {
            elapsed: media.elapsed(),
            buffering: media.is_buffering(),
        };
        terminal.draw(|f| ui::draw(f, app, &now, &settings.ui))?;

        while let Ok(cmd) = control_rx.try_recv() {
            debug!(?cmd, "media control");
            if cmd == ControlCmd::Quit {
                break 'main;
            }
            if let Some(action) = control_action(cmd, app) {
                app.dispatch(action);
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, state) == Flow::Quit {
                    break;
                }
            }
        }
    }

    info!("shutting down");
    media.shutdown(Duration::from_millis(settings.audio.quit_fade_out_ms));
    Ok(())
}

/// Feed element events into the app, dropping those left over from a
/// source the user has already moved away from.
pub fn drain_media_events(app: &mut App, media: &mut dyn MediaElement, state: &mut EventLoopState) {
    while let Some(ev) = media.poll_event() {
        if !state.sync.is_current(ev.source(), &app.playback) {
            debug!(source = %ev.source(), "dropping stale media event");
            continue;
        }
        state.sync.media_stopped();
        match ev {
            MediaEvent::Ended(_) => app.dispatch(Action::MediaEnded),
            MediaEvent::Failed(_, e) => app.dispatch(Action::MediaFailed(e.to_string())),
        }
    }
}

/// Push committed controller state to the media element.
pub fn reconcile(app: &mut App, media: &mut dyn MediaElement, state: &mut EventLoopState) {
    if let Some(e) = state.sync.apply(&app.playback, &app.library, media) {
        app.dispatch(Action::MediaFailed(e.to_string()));
    }
}

fn sync_mpris(mpris: &MprisHandle, app: &App, media: &dyn MediaElement, state: &mut EventLoopState) {
    let song = app.playback.current();
    let playback = app.playback_state();
    let volume = app.playback.volume();
    if song != state.last_mpris_song
        || playback != state.last_mpris_playback
        || volume != state.last_mpris_volume
    {
        update_mpris(mpris, app);
        state.last_mpris_song = song;
        state.last_mpris_playback = playback;
        state.last_mpris_volume = volume;
    }
    mpris.set_position(media.elapsed());
}

/// Map a desktop media-control request onto an app action. `Quit` is
/// handled by the loop itself.
pub fn control_action(cmd: ControlCmd, app: &App) -> Option<Action> {
    let first_song = || app.library.at(0).map(|s| Action::Play(s.id));
    match cmd {
        ControlCmd::Quit => None,
        ControlCmd::Play => match app.playback.current() {
            Some(_) => Some(Action::Resume),
            None => first_song(),
        },
        ControlCmd::Pause => Some(Action::Pause),
        ControlCmd::PlayPause => match app.playback.current() {
            Some(_) => Some(Action::TogglePlayPause),
            None => first_song(),
        },
        ControlCmd::Stop => Some(Action::Stop),
        ControlCmd::Next => Some(Action::SkipForward),
        ControlCmd::Prev => Some(Action::SkipBack),
        ControlCmd::SetVolume(v) => Some(Action::SetVolume(v as f32)),
    }
}

pub fn handle_key_event(key: KeyEvent, app: &mut App, state: &mut EventLoopState) -> Flow {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Flow::Quit;
    }

    let pending_gg = std::mem::take(&mut state.pending_gg);

    if app.view == View::Library && app.browser.searching {
        handle_search_key(key, app);
        return Flow::Continue;
    }

    match key.code {
        KeyCode::Char('q') => return Flow::Quit,
        KeyCode::Tab | KeyCode::Char('v') => app.dispatch(Action::ToggleView),
        KeyCode::Char(' ') | KeyCode::Char('p') => app.dispatch(Action::TogglePlayPause),
        KeyCode::Char('l') => app.dispatch(Action::SkipForward),
        KeyCode::Char('h') => app.dispatch(Action::SkipBack),
        KeyCode::Char('+') | KeyCode::Char('=') => app.dispatch(Action::VolumeUp),
        KeyCode::Char('-') => app.dispatch(Action::VolumeDown),
        KeyCode::Char('g') if !pending_gg => state.pending_gg = true,
        _ => match app.view {
            View::Catalog => handle_catalog_key(key, app, pending_gg),
            View::Library => handle_library_key(key, app, pending_gg),
        },
    }
    Flow::Continue
}

fn handle_search_key(key: KeyEvent, app: &mut App) {
    let lib = &app.library;
    let browser = &mut app.browser;
    match key.code {
        KeyCode::Esc => {
            browser.clear_search();
            browser.searching = false;
        }
        KeyCode::Enter => browser.searching = false,
        KeyCode::Backspace => browser.pop_search_char(),
        KeyCode::Down => browser.cursor_down(lib),
        KeyCode::Up => browser.cursor_up(),
        KeyCode::Char(c) if !c.is_control() => browser.push_search_char(c),
        _ => {}
    }
}

fn handle_catalog_key(key: KeyEvent, app: &mut App, pending_gg: bool) {
    if key.code == KeyCode::Enter {
        app.activate_catalog_row();
        return;
    }
    let lib = &app.library;
    let catalog = &mut app.catalog;
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => catalog.row_down(lib),
        KeyCode::Char('k') | KeyCode::Up => catalog.row_up(),
        KeyCode::Char('g') if pending_gg => catalog.row_top(),
        KeyCode::Char('G') => catalog.row_bottom(lib),
        KeyCode::Left => catalog.prev_card(),
        KeyCode::Right => catalog.next_card(),
        KeyCode::Char('x') => catalog.toggle_focused(),
        _ => {}
    }
}

fn handle_library_key(key: KeyEvent, app: &mut App, pending_gg: bool) {
    if key.code == KeyCode::Enter {
        app.activate_library_row();
        return;
    }
    let lib = &app.library;
    let browser = &mut app.browser;
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => browser.cursor_down(lib),
        KeyCode::Char('k') | KeyCode::Up => browser.cursor_up(),
        KeyCode::Char('g') if pending_gg => browser.cursor_top(),
        KeyCode::Char('G') => browser.cursor_bottom(lib),
        KeyCode::Char('/') => browser.searching = true,
        KeyCode::Char('[') | KeyCode::PageUp => {
            browser.prev_page();
        }
        KeyCode::Char(']') | KeyCode::PageDown => {
            browser.next_page(lib);
        }
        _ => {}
    }
}
