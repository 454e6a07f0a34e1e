use corkboard::config::{load_config, CliArgs};
use corkboard::{actions, event, logging, ui, AppState};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout};

type BoardTerminal = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let config = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    let logging_on = logging::init_logging(config.log_file.as_deref(), &config.log_level)?;
    tracing::info!(
        min_zoom = config.min_zoom,
        max_zoom = config.max_zoom,
        welcome = config.welcome_card,
        logging_on,
        "starting board"
    );

    let mut app = AppState::new(config);
    let mut terminal = setup_terminal()?;
    let res = run_app(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    // Only report once the terminal is usable again
    if let Err(err) = res {
        tracing::error!(error = %err, "main loop failed");
        eprintln!("Error: {}", err);
    }

    tracing::info!(
        cards = app.board.len(),
        connections = app.board.connections().len(),
        "board closed"
    );
    Ok(())
}

fn setup_terminal() -> Result<BoardTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut BoardTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(action) = event::handle_events(app)? {
            tracing::trace!(?action, "dispatching");
            actions::execute_action(action, app)?;
        }
    }

    Ok(())
}
