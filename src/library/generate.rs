//! Sample library generation.
//!
//! Every genre contributes the same number of songs, built by cycling the
//! genre's fixed title and artist pools. Durations are random and the final
//! collection is shuffled once, so neither order nor lengths are
//! reproducible unless the caller supplies a seeded RNG.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::model::{Genre, Library, Song, SongId, SongLength};
use super::pools;

/// Size the library aims for before it is divided across genres.
pub const TARGET_LIBRARY_SIZE: usize = 1000;

/// Number of distinct sample assets the audio URLs cycle through.
pub const SAMPLE_ASSET_COUNT: usize = 16;

const SAMPLE_ASSET_BASE: &str = "https://www.soundhelix.com/examples/mp3";

/// Songs generated per genre: the target size divided evenly, floored.
pub fn songs_per_genre() -> usize {
    TARGET_LIBRARY_SIZE / Genre::ALL.len()
}

/// URL of the sample asset assigned to generation index `i`.
pub fn sample_audio_url(i: usize) -> String {
    format!(
        "{}/SoundHelix-Song-{}.mp3",
        SAMPLE_ASSET_BASE,
        (i % SAMPLE_ASSET_COUNT) + 1
    )
}

/// Draw a random length between 2:00 and 8:59.
pub fn random_length<R: Rng + ?Sized>(rng: &mut R) -> SongLength {
    SongLength {
        minutes: rng.random_range(2..=8),
        seconds: rng.random_range(0..60),
    }
}

/// Generate `count` songs for `genre` in generation order, numbering ids
/// from `first_id`.
///
/// Once the title pool has been used up, later cycles carry a 1-based cycle
/// suffix: indices 10..20 become "Title 2", 20..30 "Title 3", and so on.
pub fn generate_genre<R: Rng + ?Sized>(
    genre: Genre,
    count: usize,
    first_id: u32,
    rng: &mut R,
) -> Vec<Song> {
    let titles = pools::titles(genre);
    let artists = pools::artists(genre);

    (0..count)
        .map(|i| {
            let base = titles[i % titles.len()];
            let cycle = i / titles.len() + 1;
            let title = if cycle > 1 {
                format!("{base} {cycle}")
            } else {
                base.to_string()
            };

            Song {
                id: SongId(first_id + i as u32),
                title,
                artist: artists[i % artists.len()].to_string(),
                length: random_length(rng),
                genre,
                audio_url: sample_audio_url(i),
            }
        })
        .collect()
}

/// Generate the shuffled sample library from `rng`.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Library {
    let per_genre = songs_per_genre();
    let mut songs: Vec<Song> = Vec::with_capacity(per_genre * Genre::ALL.len());

    for genre in Genre::ALL {
        let first_id = songs.len() as u32;
        songs.extend(generate_genre(genre, per_genre, first_id, rng));
    }

    songs.shuffle(rng);
    debug!(songs = songs.len(), per_genre, "generated sample library");

    Library::new(songs)
}

/// Generate the shuffled sample library from the thread-local RNG.
pub fn generate() -> Library {
    generate_with(&mut rand::rng())
}
