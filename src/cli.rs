//! Command-line flags. Each flag overrides the matching setting loaded from
//! the config file and environment.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AudioBackend, Settings};

/// Browse and play a generated music catalog in the terminal.
#[derive(Debug, Default, Parser)]
#[command(name = "musicverse", author, version, about, long_about = None)]
pub struct Cli {
    /// Simulate playback without an audio device or network access
    #[arg(long)]
    pub silent: bool,

    /// Seed the library generator for a reproducible catalog
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn apply(&self, settings: &mut Settings) {
        if self.silent {
            settings.audio.backend = AudioBackend::Silent;
        }
        if self.seed.is_some() {
            settings.library.seed = self.seed;
        }
        if let Some(path) = &self.log_file {
            settings.logging.file = Some(path.clone());
        }
    }
}
