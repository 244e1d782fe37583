//! Application model types: `App`, `View`, `Action` and `PlaybackState`.
//!
//! The `App` struct holds the generated library, both views' state and the
//! playback controller. All changes that cross view boundaries go through
//! `App::dispatch`.

use tracing::{debug, info};

use crate::library::{Genre, Library, Song, SongId};
use crate::playback::PlaybackController;
use crate::views::{CatalogAction, CatalogView, LibraryView};

/// The playback state as reported to the UI and OS media controls.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Which presentation fills the main area.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Catalog,
    Library,
}

/// Every state change the runtime can request.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Select a song: toggles if it is already current, otherwise plays it.
    Play(SongId),
    TogglePlayPause,
    Resume,
    Pause,
    Stop,
    SkipForward,
    SkipBack,
    VolumeUp,
    VolumeDown,
    SetVolume(f32),
    ToggleView,
    /// Open the full library listing narrowed to one genre.
    ShowAll(Genre),
    MediaEnded,
    MediaFailed(String),
}

impl From<CatalogAction> for Action {
    fn from(a: CatalogAction) -> Self {
        match a {
            CatalogAction::Play(id) => Action::Play(id),
            CatalogAction::ShowAll(genre) => Action::ShowAll(genre),
        }
    }
}

/// The main application model.
pub struct App {
    pub library: Library,
    pub view: View,
    pub catalog: CatalogView,
    pub browser: LibraryView,
    pub playback: PlaybackController,
    pub volume_step: f32,
    /// Last media problem, shown in the player bar until the next selection.
    pub status: Option<String>,
}

impl App {
    /// Create a new `App` over `library`.
    pub fn new(library: Library, initial_volume: f32, volume_step: f32) -> Self {
        Self {
            library,
            view: View::Catalog,
            catalog: CatalogView::new(),
            browser: LibraryView::new(),
            playback: PlaybackController::new(initial_volume),
            volume_step,
            status: None,
        }
    }

    /// Apply `action` to the model.
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatch");
        match action {
            Action::Play(id) => {
                self.status = None;
                self.playback.select_song(id);
            }
            Action::TogglePlayPause => self.playback.toggle_play_pause(),
            Action::Resume => self.playback.play(),
            Action::Pause => self.playback.pause(),
            Action::Stop => self.playback.stop(),
            Action::SkipForward => {
                if self.playback.skip_forward(&self.library) {
                    self.status = None;
                }
            }
            Action::SkipBack => {
                if self.playback.skip_back(&self.library) {
                    self.status = None;
                }
            }
            Action::VolumeUp => self.playback.nudge_volume(self.volume_step),
            Action::VolumeDown => self.playback.nudge_volume(-self.volume_step),
            Action::SetVolume(v) => self.playback.set_volume(v),
            Action::ToggleView => self.toggle_view(),
            Action::ShowAll(genre) => self.show_all(genre),
            Action::MediaEnded => self.playback.on_media_ended(&self.library),
            Action::MediaFailed(msg) => {
                info!(%msg, "playback failed");
                self.playback.on_media_failed();
                self.status = Some(msg);
            }
        }
    }

    /// The header's "Library" button: flip between cards and the listing.
    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Catalog => View::Library,
            View::Library => View::Catalog,
        };
        self.browser.searching = false;
    }

    fn show_all(&mut self, genre: Genre) {
        self.view = View::Library;
        self.browser.set_search_term(genre.as_str());
        self.browser.searching = false;
    }

    /// Activate the focused catalog row.
    pub fn activate_catalog_row(&mut self) {
        if let Some(action) = self.catalog.activate(&self.library) {
            self.dispatch(action.into());
        }
    }

    /// Play (or toggle) the song under the library cursor.
    pub fn activate_library_row(&mut self) {
        let id = self
            .browser
            .selected(&self.library)
            .and_then(|i| self.library.at(i))
            .map(|s| s.id);
        if let Some(id) = id {
            self.dispatch(Action::Play(id));
        }
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.playback.current().and_then(|id| self.library.get(id))
    }

    pub fn playback_state(&self) -> PlaybackState {
        match (self.playback.current(), self.playback.is_playing()) {
            (None, _) => PlaybackState::Stopped,
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Paused,
        }
    }
}
