mod commands;
mod config;
mod display;
mod foodstore;
mod keyhandler;
mod logging;
mod session;
mod ui;

use crossterm::event;
use ratatui::{Terminal, backend::Backend};
use std::io;
use std::time::{Duration, Instant};
use tui_input::Input;

use crate::config::AppConfig;
use crate::display::{Headline, Notice, Screen};
use crate::foodstore::FoodStore;
use crate::session::EditSession;

/// How long the event loop waits for input before re-checking timers
const POLL_INTERVAL: Duration = Duration::from_millis(100);

// App holds the state of our application
pub struct App {
    pub store: FoodStore,                // Backing file of the food list
    pub status_clear_after: Duration,    // Lifetime of the editor's "saved" message
    pub headline: Headline,              // Result label of the main view
    pub editor: Option<EditSession>,     // Open edit session, if any
    pub prompt: Option<Input>,           // "Add food" text prompt, if shown
    pub notice: Option<Notice>,          // Blocking message box, if shown
    pub should_quit: bool,
}

impl App {
    pub fn new(store: FoodStore, status_clear_after: Duration) -> Self {
        Self {
            store,
            status_clear_after,
            headline: Headline::Ready,
            editor: None,
            prompt: None,
            notice: None,
            should_quit: false,
        }
    }

    /// The layer that currently owns keyboard input
    pub fn screen(&self) -> Screen {
        if self.notice.is_some() {
            Screen::Notice
        } else if self.prompt.is_some() {
            Screen::Prompt
        } else if self.editor.is_some() {
            Screen::Editor
        } else {
            Screen::Main
        }
    }

    /// Advances timers. Called once per loop iteration.
    pub fn tick(&mut self, now: Instant) {
        if let Some(editor) = self.editor.as_mut() {
            editor.tick(now);
        }
    }
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit {
            break;
        }

        // Poll with a timeout so the status message can expire without input
        if event::poll(POLL_INTERVAL)? {
            let event = event::read()?;
            if let Some(command) = keyhandler::handle_input_event(app, &event) {
                commands::execute_command(app, command, Instant::now());
            }
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_error) = match crate::config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Err(e) = logging::init(&config.log_file, &config.log_level) {
        eprintln!("Failed to initialize log file: {e}");
    }
    if let Some(e) = config_error {
        log::warn!("failed to load configuration, using defaults: {e}");
    }
    let mut app = App::new(
        FoodStore::new(&config.data_file),
        config.status_clear_after(),
    );
    log::info!("using menu file {}", app.store.path().display());

    if let Err(e) = app.store.ensure_default() {
        log::error!("{e}");
        app.notice = Some(Notice::error("Error", format!("Could not create the menu: {e}")));
    }

    // Set up terminal
    let mut terminal = ui::setup_terminal()?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    ui::restore_terminal(&mut terminal)?;
    result?;

    Ok(())
}
