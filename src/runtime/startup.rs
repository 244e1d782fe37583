use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::app::App;
use crate::audio::{AudioPlayer, SilentPlayer};
use crate::config::{self, AudioBackend, AudioSettings};
use crate::library::{self, Library};
use crate::playback::MediaElement;

pub fn build_library(seed: Option<u64>) -> Library {
    match seed {
        Some(seed) => {
            info!(seed, "generating seeded library");
            library::generate_with(&mut StdRng::seed_from_u64(seed))
        }
        None => library::generate(),
    }
}

pub fn build_app(settings: &config::Settings) -> App {
    let library = build_library(settings.library.seed);
    info!(songs = library.len(), "library generated");
    App::new(
        library,
        settings.playback.initial_volume,
        settings.playback.volume_step,
    )
}

/// Pick the media backend. A missing output device degrades to silent
/// playback instead of aborting.
pub fn open_media(audio: &AudioSettings) -> Box<dyn MediaElement> {
    match audio.backend {
        AudioBackend::Silent => {
            info!("using silent playback");
            Box::new(SilentPlayer::new())
        }
        AudioBackend::Rodio => match AudioPlayer::new(audio) {
            Ok(player) => Box::new(player),
            Err(e) => {
                warn!(error = %e, "audio output unavailable, falling back to silent playback");
                Box::new(SilentPlayer::new())
            }
        },
    }
}
