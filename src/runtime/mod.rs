use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::cli::Cli;
use crate::mpris::ControlCmd;

mod event_loop;
mod logging;
mod mpris_sync;
mod settings;
mod startup;

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (mut settings, load_warning) = settings::load_settings();
    cli.apply(&mut settings);

    if cli.print_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    let log_path = logging::init(&settings.logging);
    info!(log = ?log_path, version = env!("CARGO_PKG_VERSION"), "musicverse starting");
    if let Some(msg) = load_warning {
        warn!("{msg}");
    }

    let mut app = startup::build_app(&settings);
    let mut media = startup::open_media(&settings.audio);

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx);

    mpris_sync::update_mpris(&mpris, &app);

    enable_raw_mode()?;
    let mut terminal = undo_on_error(enter_terminal, || {
        let _ = disable_raw_mode();
    })?;

    let mut state = event_loop::EventLoopState::new(&app);
    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        media.as_mut(),
        &mpris,
        &control_rx,
        &mut state,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

fn enter_terminal() -> std::io::Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Run `setup`, calling `undo` before handing back its error.
fn undo_on_error<T, E>(setup: impl FnOnce() -> Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    setup().inspect_err(|_| undo())
}

#[cfg(test)]
mod tests;
