mod app;
mod audio;
mod cli;
mod effects;
mod link;
mod logging;
mod screens;

use std::io;
use std::time::Instant;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use tracing::{error, info};

use posterboard_core::Settings;

use app::App;
use cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let mut settings = Settings::load_or_default(cli.config.as_deref())?;
    cli.apply(&mut settings);
    logging::init(settings.log_file.as_deref())?;
    info!(assets = %settings.assets_dir.display(), sound = settings.sound, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!(error = %e, "run loop failed");
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: Settings,
) -> color_eyre::Result<()> {
    let frame_interval = settings.frame_interval();
    let sound = audio::sink_for(&settings);
    let mut app = App::new(settings, sound);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        let mut quit = false;
        if event::poll(frame_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    quit = app.handle_key(key);
                }
                Event::Mouse(mouse) => {
                    quit = app.handle_mouse(mouse);
                }
                _ => {}
            }
        }

        let now = Instant::now();
        quit |= app.tick(now - last_tick);
        last_tick = now;

        if quit {
            info!("quit");
            break;
        }
    }

    Ok(())
}
