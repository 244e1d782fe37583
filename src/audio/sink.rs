//! Helpers turning downloaded bytes into a paused `rodio` sink.

use std::io::Cursor;

use rodio::{Decoder, OutputStream, Sink};

use crate::playback::MediaError;

pub(super) type MemorySource = Decoder<Cursor<Vec<u8>>>;

/// Decode an in-memory asset downloaded from `url`.
pub(super) fn decode_source(url: &str, bytes: Vec<u8>) -> Result<MemorySource, MediaError> {
    Decoder::new(Cursor::new(bytes)).map_err(|e| MediaError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Create a paused `Sink` on `stream` holding `source` at `volume`.
pub(super) fn create_sink(stream: &OutputStream, source: MemorySource, volume: f32) -> Sink {
    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    sink
}
