//! Terminal setup and the event loop.

use crate::app::App;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::screens;
use adapter_catalog::CharacterClient;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const TICK: Duration = Duration::from_millis(100);

/// Raw-mode alternate-screen terminal, restored on drop.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.
    pub fn enter() -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    /// Current terminal size.
    pub fn size(&self) -> Result<Rect, AppError> {
        Ok(self.terminal.size()?)
    }

    /// Draw one frame.
    pub fn draw(&mut self, app: &App) -> Result<(), AppError> {
        self.terminal.draw(|frame| screens::draw(frame, app))?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the browser against the configured catalog until the user quits.
pub async fn run(config: &AppConfig) -> Result<(), AppError> {
    let source = Arc::new(CharacterClient::new(config.base_url.as_str()));
    let mut terminal = TerminalGuard::enter()?;

    let mut app = App::new(source, config);
    let size = terminal.size()?;
    app.resize(size.width, size.height);
    app.start();

    loop {
        app.pump();
        terminal.draw(&app)?;

        // Handle events with timeout so fetch results and the spinner advance
        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
        }
        app.on_tick();

        if app.should_quit() {
            break;
        }
    }

    info!("exiting");
    Ok(())
}
