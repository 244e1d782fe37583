use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::event_loop::{
    EventLoopState, Flow, control_action, drain_media_events, handle_key_event, reconcile,
};
use super::startup::build_library;
use super::undo_on_error;
use crate::app::{Action, App, PlaybackState, View};
use crate::library::Song;
use crate::mpris::ControlCmd;
use crate::playback::{MediaElement, MediaError, MediaEvent};
use crate::views::{GenreCard, preview};

fn app() -> App {
    App::new(build_library(Some(99)), 0.75, 0.05)
}

/// Element that accepts everything and replays queued events.
#[derive(Default)]
struct QueuedEvents {
    events: VecDeque<MediaEvent>,
}

impl MediaElement for QueuedEvents {
    fn load(&mut self, _song: &Song) {}

    fn unload(&mut self) {}

    fn play(&mut self) -> Result<(), MediaError> {
        Ok(())
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        Ok(())
    }

    fn set_volume(&mut self, _volume: f32) {}

    fn elapsed(&self) -> Duration {
        Duration::ZERO
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        self.events.pop_front()
    }
}

fn press(app: &mut App, state: &mut EventLoopState, keys: &str) -> Flow {
    let mut flow = Flow::Continue;
    for c in keys.chars() {
        flow = handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), app, state);
    }
    flow
}

fn key(app: &mut App, state: &mut EventLoopState, code: KeyCode) -> Flow {
    handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), app, state)
}

#[test]
fn seeded_library_is_reproducible() {
    let a = build_library(Some(5));
    let b = build_library(Some(5));
    let ids_a: Vec<_> = a.songs().iter().map(|s| s.id).collect();
    let ids_b: Vec<_> = b.songs().iter().map(|s| s.id).collect();
    assert_eq!(ids_a, ids_b);
}

#[test]
fn q_and_ctrl_c_quit() {
    let mut app = app();
    let mut state = EventLoopState::new(&app);
    assert_eq!(press(&mut app, &mut state, "q"), Flow::Quit);

    app.view = View::Library;
    app.browser.searching = true;
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(handle_key_event(ctrl_c, &mut app, &mut state), Flow::Quit);
}

#[test]
fn tab_and_v_toggle_the_view() {
    let mut app = app();
    let mut state = EventLoopState::new(&app);
    key(&mut app, &mut state, KeyCode::Tab);
    assert_eq!(app.view, View::Library);
    press(&mut app, &mut state, "v");
    assert_eq!(app.view, View::Catalog);
}

#[test]
fn search_mode_captures_typed_keys() {
    let mut app = app();
    let mut state = EventLoopState::new(&app);
    key(&mut app, &mut state, KeyCode::Tab);

    assert_eq!(press(&mut app, &mut state, "/jazzq"), Flow::Continue);
    assert_eq!(app.browser.search_term(), "jazzq");
    key(&mut app, &mut state, KeyCode::Backspace);
    assert_eq!(app.browser.search_term(), "jazz");

    key(&mut app, &mut state, KeyCode::Enter);
    assert!(!app.browser.searching);
    assert_eq!(app.browser.search_term(), "jazz");
    assert_eq!(app.browser.page(&app.library).filtered_len, 166);

    press(&mut app, &mut state, "/");
    key(&mut app, &mut state, KeyCode::Esc);
    assert!(!app.browser.searching);
    assert_eq!(app.browser.search_term(), "");
}

#[test]
fn brackets_page_through_the_library() {
    let mut app = app();
    let mut state = EventLoopState::new(&app);
    key(&mut app, &mut state, KeyCode::Tab);

    press(&mut app, &mut state, "[");
    assert_eq!(app.browser.current_page(), 1);
    press(&mut app, &mut state, "]]");
    assert_eq!(app.browser.current_page(), 3);
    key(&mut app, &mut state, KeyCode::PageUp);
    assert_eq!(app.browser.current_page(), 2);
}

#[test]
fn gg_and_g_jump_within_the_page() {
    let mut app = app();
    let mut state = EventLoopState::new(&app);
    key(&mut app, &mut state, KeyCode::Tab);

    press(&mut app, &mut state, "G");
    assert_eq!(app.browser.cursor, 49);
    press(&mut app, &mut state, "gk");
    assert_eq!(app.browser.cursor, 48);
    press(&mut app, &mut state, "gg");
    assert_eq!(app.browser.cursor, 0);
}

#[test]
fn catalog_keys_expand_and_play_a_preview_song() {
    let mut app = app();
    let mut state = EventLoopState::new(&app);

    key(&mut app, &mut state, KeyCode::Right);
    key(&mut app, &mut state, KeyCode::Enter);
    assert!(app.catalog.is_expanded(1));
    press(&mut app, &mut state, "j");
    key(&mut app, &mut state, KeyCode::Enter);

    let first_rock = preview(&app.library, GenreCard::ALL[1].genre)[0].id;
    assert_eq!(app.playback.current(), Some(first_rock));
    assert_eq!(app.playback_state(), PlaybackState::Playing);

    press(&mut app, &mut state, " ");
    assert_eq!(app.playback_state(), PlaybackState::Paused);
    press(&mut app, &mut state, "x");
    assert!(!app.catalog.is_expanded(1));
}

#[test]
fn transport_keys_skip_and_change_volume() {
    let mut app = app();
    let mut state = EventLoopState::new(&app);
    app.dispatch(Action::Play(app.library.at(3).unwrap().id));

    press(&mut app, &mut state, "l");
    assert_eq!(app.library.position(app.playback.current().unwrap()), Some(4));
    press(&mut app, &mut state, "hh");
    assert_eq!(app.library.position(app.playback.current().unwrap()), Some(2));

    press(&mut app, &mut state, "-");
    assert!((app.playback.volume() - 0.70).abs() < 1e-6);
    press(&mut app, &mut state, "+=");
    assert!((app.playback.volume() - 0.80).abs() < 1e-6);
}

#[test]
fn media_controls_start_the_first_song_when_idle() {
    let mut app = app();
    let first = app.library.at(0).unwrap().id;

    assert_eq!(
        control_action(ControlCmd::PlayPause, &app),
        Some(Action::Play(first))
    );
    assert_eq!(control_action(ControlCmd::Play, &app), Some(Action::Play(first)));

    app.dispatch(Action::Play(first));
    assert_eq!(
        control_action(ControlCmd::PlayPause, &app),
        Some(Action::TogglePlayPause)
    );
    assert_eq!(control_action(ControlCmd::Play, &app), Some(Action::Resume));
    assert_eq!(control_action(ControlCmd::Next, &app), Some(Action::SkipForward));
    assert_eq!(
        control_action(ControlCmd::SetVolume(0.5), &app),
        Some(Action::SetVolume(0.5))
    );
    assert_eq!(control_action(ControlCmd::Quit, &app), None);
}

#[test]
fn ended_event_advances_the_song_that_finished() {
    let mut app = app();
    let mut state = EventLoopState::new(&app);
    let mut media = QueuedEvents::default();
    let first = app.library.at(0).unwrap().id;

    app.dispatch(Action::Play(first));
    reconcile(&mut app, &mut media, &mut state);
    media.events.push_back(MediaEvent::Ended(first));
    drain_media_events(&mut app, &mut media, &mut state);

    assert_eq!(app.library.position(app.playback.current().unwrap()), Some(1));
    assert_eq!(app.playback_state(), PlaybackState::Playing);
}

#[test]
fn events_from_a_superseded_song_are_dropped() {
    let mut app = app();
    let mut state = EventLoopState::new(&app);
    let mut media = QueuedEvents::default();
    let a = app.library.at(0).unwrap().id;
    let b = app.library.at(5).unwrap().id;

    app.dispatch(Action::Play(a));
    reconcile(&mut app, &mut media, &mut state);
    media.events.push_back(MediaEvent::Ended(a));
    media
        .events
        .push_back(MediaEvent::Failed(a, MediaError::NoSource));

    // Picked before the loop drained A's events.
    app.dispatch(Action::Play(b));
    drain_media_events(&mut app, &mut media, &mut state);

    assert_eq!(app.playback.current(), Some(b));
    assert_eq!(app.playback_state(), PlaybackState::Playing);
    assert_eq!(app.status, None);
}

#[test]
fn failed_terminal_setup_restores_raw_mode() {
    let mut restored = false;
    let result: Result<(), &str> = undo_on_error(|| Err("no tty"), || restored = true);
    assert_eq!(result, Err("no tty"));
    assert!(restored);

    let mut restored = false;
    let result: Result<u8, &str> = undo_on_error(|| Ok(1), || restored = true);
    assert_eq!(result, Ok(1));
    assert!(!restored);
}
