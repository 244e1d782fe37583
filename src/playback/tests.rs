use super::*;
use crate::library::{Library, Song, SongId, generate_with};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

fn library() -> Library {
    generate_with(&mut StdRng::seed_from_u64(7))
}

fn id_at(lib: &Library, i: usize) -> SongId {
    lib.at(i).unwrap().id
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Load(SongId),
    Unload,
    Play,
    Pause,
    Volume(f32),
}

#[derive(Default)]
struct FakeMedia {
    calls: Vec<Call>,
    reject_play: bool,
    events: Vec<MediaEvent>,
}

impl MediaElement for FakeMedia {
    fn load(&mut self, song: &Song) {
        self.calls.push(Call::Load(song.id));
    }

    fn unload(&mut self) {
        self.calls.push(Call::Unload);
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.calls.push(Call::Play);
        if self.reject_play {
            Err(MediaError::Output("autoplay blocked".into()))
        } else {
            Ok(())
        }
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        self.calls.push(Call::Pause);
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) {
        self.calls.push(Call::Volume(volume));
    }

    fn elapsed(&self) -> Duration {
        Duration::ZERO
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        self.events.pop()
    }
}

#[test]
fn selecting_the_same_song_twice_toggles() {
    let lib = library();
    let a = id_at(&lib, 0);
    let mut c = PlaybackController::default();

    c.select_song(a);
    assert_eq!(c.current(), Some(a));
    assert!(c.is_playing());

    c.select_song(a);
    assert_eq!(c.current(), Some(a));
    assert!(!c.is_playing());

    c.select_song(a);
    assert!(c.is_playing());
}

#[test]
fn selecting_a_different_song_always_plays() {
    let lib = library();
    let (a, b) = (id_at(&lib, 0), id_at(&lib, 1));
    let mut c = PlaybackController::default();

    c.select_song(a);
    c.toggle_play_pause();
    assert!(!c.is_playing());

    c.select_song(b);
    assert_eq!(c.current(), Some(b));
    assert!(c.is_playing());
    assert!(c.is_playing_song(b));
    assert!(!c.is_playing_song(a));
}

#[test]
fn songs_sharing_a_title_are_still_distinct() {
    // "City Lights" exists in both the Rock and Hip Hop pools.
    let lib = library();
    let dupes: Vec<&Song> = lib
        .songs()
        .iter()
        .filter(|s| s.title == "City Lights")
        .collect();
    assert_eq!(dupes.len(), 2);

    let mut c = PlaybackController::default();
    c.select_song(dupes[0].id);
    c.select_song(dupes[1].id);
    assert_eq!(c.current(), Some(dupes[1].id));
    assert!(c.is_playing());
}

#[test]
fn toggle_without_selection_is_a_noop() {
    let mut c = PlaybackController::default();
    c.toggle_play_pause();
    c.play();
    assert!(!c.is_playing());
    assert_eq!(c.current(), None);
}

#[test]
fn skips_are_noops_at_library_bounds() {
    let lib = library();
    let mut c = PlaybackController::default();

    assert!(!c.skip_forward(&lib));
    assert!(!c.skip_back(&lib));

    c.select_song(id_at(&lib, 0));
    assert!(!c.skip_back(&lib));
    assert_eq!(c.current(), Some(id_at(&lib, 0)));

    let last = lib.len() - 1;
    c.select_song(id_at(&lib, last));
    assert!(!c.skip_forward(&lib));
    assert_eq!(c.current(), Some(id_at(&lib, last)));
}

#[test]
fn skipping_always_resumes_playback() {
    let lib = library();
    let mut c = PlaybackController::default();
    c.select_song(id_at(&lib, 10));
    c.toggle_play_pause();

    assert!(c.skip_forward(&lib));
    assert_eq!(c.current(), Some(id_at(&lib, 11)));
    assert!(c.is_playing());

    c.toggle_play_pause();
    assert!(c.skip_back(&lib));
    assert_eq!(c.current(), Some(id_at(&lib, 10)));
    assert!(c.is_playing());
}

#[test]
fn skipping_166_times_moves_166_positions_in_shuffled_order() {
    let lib = library();
    assert_eq!(lib.len(), 996);
    let mut c = PlaybackController::default();
    c.select_song(id_at(&lib, 0));
    assert!(c.is_playing());

    for _ in 0..166 {
        c.skip_forward(&lib);
    }
    assert_eq!(c.current().and_then(|id| lib.position(id)), Some(166));

    for _ in 0..2000 {
        c.skip_forward(&lib);
    }
    assert_eq!(c.current().and_then(|id| lib.position(id)), Some(995));
}

#[test]
fn volume_is_clamped_and_stepped() {
    let mut c = PlaybackController::default();
    assert_eq!(c.volume(), 0.75);

    c.set_volume(1.7);
    assert_eq!(c.volume(), 1.0);
    c.set_volume(-0.2);
    assert_eq!(c.volume(), 0.0);
    c.set_volume(f32::NAN);
    assert_eq!(c.volume(), 0.0);

    c.set_volume(0.333);
    assert!((c.volume() - 0.33).abs() < 1e-6);
    c.nudge_volume(0.05);
    assert!((c.volume() - 0.38).abs() < 1e-6);
}

#[test]
fn media_end_advances_and_settles_at_the_last_song() {
    let lib = library();
    let mut c = PlaybackController::default();
    c.select_song(id_at(&lib, 3));
    c.on_media_ended(&lib);
    assert_eq!(c.current(), Some(id_at(&lib, 4)));
    assert!(c.is_playing());

    c.select_song(id_at(&lib, lib.len() - 1));
    c.on_media_ended(&lib);
    assert_eq!(c.current(), Some(id_at(&lib, lib.len() - 1)));
    assert!(!c.is_playing());
}

#[test]
fn stop_clears_the_selection() {
    let lib = library();
    let mut c = PlaybackController::default();
    c.select_song(id_at(&lib, 0));
    c.stop();
    assert_eq!(c.current(), None);
    assert!(!c.is_playing());
}

#[test]
fn sync_loads_then_plays_once_per_change() {
    let lib = library();
    let mut c = PlaybackController::default();
    let mut media = FakeMedia::default();
    let mut sync = MediaSync::new();

    sync.apply(&c, &lib, &mut media);
    assert_eq!(media.calls, vec![Call::Volume(0.75)]);

    let a = id_at(&lib, 0);
    c.select_song(a);
    sync.apply(&c, &lib, &mut media);
    sync.apply(&c, &lib, &mut media);
    assert_eq!(
        media.calls[1..],
        [Call::Load(a), Call::Play]
    );

    c.toggle_play_pause();
    sync.apply(&c, &lib, &mut media);
    assert_eq!(media.calls.last(), Some(&Call::Pause));
    let before = media.calls.len();
    sync.apply(&c, &lib, &mut media);
    assert_eq!(media.calls.len(), before);
}

#[test]
fn sync_sets_volume_only_when_it_changes() {
    let lib = library();
    let mut c = PlaybackController::default();
    let mut media = FakeMedia::default();
    let mut sync = MediaSync::new();

    sync.apply(&c, &lib, &mut media);
    c.set_volume(0.75);
    sync.apply(&c, &lib, &mut media);
    c.set_volume(0.5);
    sync.apply(&c, &lib, &mut media);

    let volumes: Vec<&Call> = media
        .calls
        .iter()
        .filter(|c| matches!(c, Call::Volume(_)))
        .collect();
    assert_eq!(volumes, vec![&Call::Volume(0.75), &Call::Volume(0.5)]);
}

#[test]
fn sync_reloads_on_skip_and_unloads_on_stop() {
    let lib = library();
    let mut c = PlaybackController::default();
    let mut media = FakeMedia::default();
    let mut sync = MediaSync::new();

    c.select_song(id_at(&lib, 0));
    sync.apply(&c, &lib, &mut media);
    c.skip_forward(&lib);
    sync.apply(&c, &lib, &mut media);
    c.stop();
    sync.apply(&c, &lib, &mut media);

    assert_eq!(
        media.calls[1..],
        [
            Call::Load(id_at(&lib, 0)),
            Call::Play,
            Call::Load(id_at(&lib, 1)),
            Call::Play,
            Call::Unload,
        ]
    );
}

#[test]
fn rejected_play_is_reported_and_resynced() {
    let lib = library();
    let mut c = PlaybackController::default();
    let mut media = FakeMedia {
        reject_play: true,
        ..FakeMedia::default()
    };
    let mut sync = MediaSync::new();

    c.select_song(id_at(&lib, 0));
    let err = sync.apply(&c, &lib, &mut media);
    assert!(matches!(err, Some(MediaError::Output(_))));

    c.on_media_failed();
    assert!(!c.is_playing());
    let before = media.calls.len();
    assert_eq!(sync.apply(&c, &lib, &mut media), None);
    assert_eq!(media.calls.len(), before);
}

#[test]
fn element_stopping_on_its_own_skips_redundant_pause() {
    let lib = library();
    let last = id_at(&lib, lib.len() - 1);
    let mut c = PlaybackController::default();
    let mut media = FakeMedia {
        events: vec![MediaEvent::Ended(last)],
        ..FakeMedia::default()
    };
    let mut sync = MediaSync::new();

    c.select_song(last);
    sync.apply(&c, &lib, &mut media);

    assert_eq!(media.poll_event(), Some(MediaEvent::Ended(last)));
    sync.media_stopped();
    c.on_media_ended(&lib);
    let before = media.calls.len();
    sync.apply(&c, &lib, &mut media);
    assert_eq!(media.calls.len(), before);
}

#[test]
fn events_only_count_for_the_loaded_and_selected_source() {
    let lib = library();
    let a = id_at(&lib, 0);
    let b = id_at(&lib, 5);
    let mut c = PlaybackController::default();
    let mut media = FakeMedia::default();
    let mut sync = MediaSync::new();

    assert!(!sync.is_current(a, &c));

    c.select_song(a);
    sync.apply(&c, &lib, &mut media);
    assert!(sync.is_current(a, &c));

    // Selected but not yet pushed to the element.
    c.select_song(b);
    assert!(!sync.is_current(a, &c));
    assert!(!sync.is_current(b, &c));

    sync.apply(&c, &lib, &mut media);
    assert!(sync.is_current(b, &c));
    assert_eq!(MediaEvent::Failed(b, MediaError::NoSource).source(), b);
}
