//! Terminal UI for noughts.

mod app;
mod input;
mod ui;

use crate::config::GameConfig;
use crate::orchestrator::{Command, GameEvent, Orchestrator};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;
use input::{KeyAction, key_action};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the terminal UI until the player quits.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    // Log to a file so tracing output does not tear the screen.
    init_file_logging(config.log_file())?;

    log_session_config(&config);

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let orchestrator = Orchestrator::new(&config, command_rx, event_tx);
    let orchestrator_handle = tokio::spawn(orchestrator.run());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(*config.mode());
    let res = run_app(&mut terminal, app, &command_tx, &mut event_rx).await;

    // Stop the orchestrator before restoring the terminal.
    let _ = command_tx.send(Command::Quit);
    match orchestrator_handle.await {
        Ok(Err(e)) => error!(error = %e, "Orchestrator error"),
        Err(e) => error!(error = %e, "Orchestrator task failed"),
        Ok(Ok(())) => {}
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Tui,
    mut app: App,
    command_tx: &mpsc::UnboundedSender<Command>,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()> {
    loop {
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(50))? {
            tokio::task::yield_now().await;
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key_action(key.code, app.cursor()) {
            Some(KeyAction::Quit) => {
                info!("User quit");
                return Ok(());
            }
            Some(KeyAction::Cursor(pos)) => app.set_cursor(pos),
            Some(KeyAction::Send(command)) => {
                if let Command::Place(index) = command
                    && let Some(pos) = noughts_engine::Position::from_index(index)
                {
                    app.set_cursor(pos);
                }
                command_tx
                    .send(command)
                    .context("Orchestrator stopped unexpectedly")?;
            }
            None => {}
        }
    }
}

fn log_session_config(config: &GameConfig) {
    info!(
        mode = %config.mode(),
        delay_ms = config.computer_delay_ms(),
        seed = ?config.seed(),
        log_file = %config.log_file().display(),
        "Starting noughts TUI"
    );
}

fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
