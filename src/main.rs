use clap::Parser;

mod app;
mod audio;
mod cli;
mod config;
mod library;
mod mpris;
mod playback;
mod runtime;
mod ui;
mod views;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run(cli::Cli::parse())
}
