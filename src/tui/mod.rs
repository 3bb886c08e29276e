//! Terminal UI: terminal lifecycle and the render/input loop.

mod app;
mod input;
mod mode;
mod orchestrator;
mod ui;

pub use mode::GameMode;
pub use orchestrator::{Command, GameEvent, Orchestrator, Snapshot};

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::SmallRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Runs the game in the terminal until the player quits.
///
/// `delay` is the cosmetic pause before the computer replies in PvC mode;
/// `rng` drives the computer's random tie-breaks (seed it for
/// reproducible play).
pub async fn run(mode: GameMode, delay: Duration, rng: SmallRng) -> Result<()> {
    info!(%mode, "starting terminal ui");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let mut orchestrator = Orchestrator::new(mode, delay, rng, command_rx, event_tx);
    let orchestrator_handle = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            error!(error = %e, "orchestrator error");
        }
    });

    let app = App::new(mode);
    let res = run_app(&mut terminal, app, command_tx, &mut event_rx).await;

    orchestrator_handle.abort();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Render/input loop: draw, drain orchestrator events, forward keys.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    command_tx: mpsc::UnboundedSender<Command>,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => {
                        info!("player quit");
                        return Ok(());
                    }
                    KeyCode::Char('r') => command_tx.send(Command::ResetRound)?,
                    KeyCode::Char('s') => command_tx.send(Command::ResetScores)?,
                    KeyCode::Char('m') => {
                        let mode = app.snapshot().mode.toggled();
                        command_tx.send(Command::SetMode(mode))?;
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        command_tx.send(Command::Place(app.cursor()))?;
                    }
                    KeyCode::Char(c) => {
                        if let Some(cell) = input::digit_to_cell(c) {
                            command_tx.send(Command::Place(cell))?;
                        }
                    }
                    code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                        app.move_cursor(code);
                    }
                    _ => {}
                }
            }
        }
    }
}
