//! Audio module: `MediaElement` implementations.
//!
//! `AudioPlayer` downloads the sample assets and plays them through rodio on
//! a dedicated thread. `SilentPlayer` only simulates a playhead, for runs
//! without an audio device or network.

mod fetch;
mod player;
mod silent;
mod sink;
mod source;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use silent::SilentPlayer;
pub use types::*;
