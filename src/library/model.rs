//! Song and library types.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// The closed set of genres the library is partitioned into.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Genre {
    Classical,
    Rock,
    HipHop,
    Electronic,
    Jazz,
    Pop,
}

impl Genre {
    /// All genres in catalog order.
    pub const ALL: [Genre; 6] = [
        Genre::Classical,
        Genre::Rock,
        Genre::HipHop,
        Genre::Electronic,
        Genre::Jazz,
        Genre::Pop,
    ];

    /// Canonical key, also what searches match against.
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Classical => "Classical",
            Genre::Rock => "Rock",
            Genre::HipHop => "HipHop",
            Genre::Electronic => "Electronic",
            Genre::Jazz => "Jazz",
            Genre::Pop => "Pop",
        }
    }

    /// Human-facing name used on catalog cards.
    pub fn display_name(self) -> &'static str {
        match self {
            Genre::HipHop => "Hip Hop",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identity of a generated song: its generation index, assigned
/// before the library is shuffled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SongId(pub u32);

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A song length rendered as `m:ss`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SongLength {
    pub minutes: u8,
    pub seconds: u8,
}

impl SongLength {
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.minutes) * 60 + u64::from(self.seconds))
    }
}

impl fmt::Display for SongLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    pub length: SongLength,
    pub genre: Genre,
    pub audio_url: String,
}

/// Lowercased search fields, precomputed once so filtering on every
/// keystroke does not re-lowercase the whole library.
#[derive(Debug, Clone)]
struct SearchKey {
    title: String,
    artist: String,
    genre: String,
}

/// The immutable, ordered song collection held for the whole session.
#[derive(Debug, Clone)]
pub struct Library {
    songs: Vec<Song>,
    positions: HashMap<SongId, usize>,
    search_keys: Vec<SearchKey>,
}

impl Library {
    /// Build a library over `songs`, keeping their order.
    pub fn new(songs: Vec<Song>) -> Self {
        let positions = songs
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id, i))
            .collect();
        let search_keys = songs
            .iter()
            .map(|s| SearchKey {
                title: s.title.to_lowercase(),
                artist: s.artist.to_lowercase(),
                genre: s.genre.as_str().to_lowercase(),
            })
            .collect();

        Self {
            songs,
            positions,
            search_keys,
        }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Song at library position `index`.
    pub fn at(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn get(&self, id: SongId) -> Option<&Song> {
        self.position(id).and_then(|i| self.songs.get(i))
    }

    /// Library position of the song with `id`.
    pub fn position(&self, id: SongId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Songs of `genre` in library order.
    pub fn by_genre(&self, genre: Genre) -> impl Iterator<Item = &Song> {
        self.songs().iter().filter(move |s| s.genre == genre)
    }

    pub fn genre_count(&self, genre: Genre) -> usize {
        self.by_genre(genre).count()
    }

    /// Case-insensitive substring match of an already-lowercased query
    /// against the title, artist or genre of the song at `index`.
    pub fn matches(&self, index: usize, query_lower: &str) -> bool {
        if query_lower.is_empty() {
            return true;
        }
        self.search_keys.get(index).is_some_and(|k| {
            k.title.contains(query_lower)
                || k.artist.contains(query_lower)
                || k.genre.contains(query_lower)
        })
    }
}
