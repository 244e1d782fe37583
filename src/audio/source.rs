//! Load bookkeeping for the audio thread, kept free of rodio types so the
//! fetch and retry rules can be exercised without an output device.

use crate::library::SongId;

/// Where the current source stands on the audio thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Fetching,
    Ready,
    /// No sink and no download in flight: the fetch or decode failed, or
    /// the source played to its end.
    Idle,
}

#[derive(Debug)]
struct Current {
    generation: u64,
    song: SongId,
    url: String,
    stage: Stage,
}

/// A download the thread should start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Fetch {
    pub generation: u64,
    pub url: String,
}

/// What the thread should do with a `Play` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum PlayStep {
    /// A sink exists; resume it.
    Resume,
    /// The download is still running; it starts playing once decoded.
    Wait,
    /// Nothing is buffered any more; fetch the same source again.
    Refetch(Fetch),
    /// Nothing was ever loaded.
    NoSource,
}

#[derive(Debug, Default)]
pub(super) struct SourceSlot {
    current: Option<Current>,
}

impl SourceSlot {
    /// Make `url` the current source and return the download to start.
    pub fn load(&mut self, generation: u64, song: SongId, url: String) -> Fetch {
        self.current = Some(Current {
            generation,
            song,
            url: url.clone(),
            stage: Stage::Fetching,
        });
        Fetch { generation, url }
    }

    pub fn unload(&mut self) {
        self.current = None;
    }

    /// The song behind a finished download, or `None` when the download
    /// belongs to a superseded generation.
    pub fn accept(&self, generation: u64) -> Option<SongId> {
        self.current
            .as_ref()
            .filter(|c| c.generation == generation && c.stage == Stage::Fetching)
            .map(|c| c.song)
    }

    /// A sink now plays the current source.
    pub fn ready(&mut self) {
        if let Some(c) = self.current.as_mut() {
            c.stage = Stage::Ready;
        }
    }

    /// The sink or download is gone. Returns the song to tag the event with.
    pub fn idle(&mut self) -> Option<SongId> {
        let c = self.current.as_mut()?;
        c.stage = Stage::Idle;
        Some(c.song)
    }

    pub fn play(&mut self) -> PlayStep {
        let Some(c) = self.current.as_mut() else {
            return PlayStep::NoSource;
        };
        match c.stage {
            Stage::Ready => PlayStep::Resume,
            Stage::Fetching => PlayStep::Wait,
            Stage::Idle => {
                c.stage = Stage::Fetching;
                PlayStep::Refetch(Fetch {
                    generation: c.generation,
                    url: c.url.clone(),
                })
            }
        }
    }
}
