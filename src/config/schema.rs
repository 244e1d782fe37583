use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/musicverse/config.toml` or `~/.config/musicverse/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MUSICVERSE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub playback: PlaybackSettings,
    pub library: LibrarySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AudioBackend {
    /// Download the sample assets and play them through the default
    /// output device.
    #[serde(alias = "device")]
    Rodio,
    /// Simulate playback without touching the network or an audio device.
    #[serde(alias = "none", alias = "null")]
    Silent,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioSettings {
    pub backend: AudioBackend,
    /// Timeout for downloading one sample asset (seconds).
    pub fetch_timeout_secs: u64,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            backend: AudioBackend::Rodio,
            fetch_timeout_secs: 30,
            quit_fade_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Brand text rendered in the top navigation bar.
    pub header_text: String,
    /// Tagline shown above the genre cards.
    pub tagline: String,
    /// Separator between artist and genre in library rows.
    pub artist_genre_separator: String,
    /// Whether to draw the key help footer.
    pub show_footer: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: "MusicVerse".to_string(),
            tagline: "Discover Your Sound".to_string(),
            artist_genre_separator: " • ".to_string(),
            show_footer: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Volume at startup, 0.0 to 1.0.
    pub initial_volume: f32,
    /// Volume change per `+` / `-` press.
    pub volume_step: f32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            initial_volume: 0.75,
            volume_step: 0.05,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Seed for the library generator. Unset means a fresh library every run.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Log file. Defaults to `$XDG_STATE_HOME/musicverse/musicverse.log`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
