//! Input handling for mealpicker
//!
//! Maps crossterm key events to [`Command`]s depending on which screen is on
//! top. Keystrokes typed into the "add food" prompt are forwarded to the
//! prompt's `tui_input` buffer directly and produce no command.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::App;
use crate::commands::Command;
use crate::display::Screen;

/// Translates one terminal event into a command for the current screen
pub fn handle_input_event(app: &mut App, event: &Event) -> Option<Command> {
    let Event::Key(key_event) = event else {
        return None; // Ignore non-keyboard events
    };

    // Key release/repeat events are reported on some platforms
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(Command::Quit);
    }

    match app.screen() {
        Screen::Notice => handle_notice_keys(key_event.code),
        Screen::Prompt => handle_prompt_keys(app, event, key_event.code),
        Screen::Editor => handle_editor_keys(key_event.code),
        Screen::Main => handle_main_keys(key_event.code),
    }
}

fn handle_main_keys(key_code: KeyCode) -> Option<Command> {
    match key_code {
        KeyCode::Enter | KeyCode::Char(' ' | 'g') => Some(Command::Pick),
        KeyCode::Char('e') => Some(Command::OpenEditor),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn handle_editor_keys(key_code: KeyCode) -> Option<Command> {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::SelectNext),
        KeyCode::Char('a') => Some(Command::BeginAdd),
        KeyCode::Char('d') | KeyCode::Delete => Some(Command::RemoveSelected),
        KeyCode::Char('s') => Some(Command::SaveAndClose),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::CloseEditor),
        _ => None,
    }
}

fn handle_prompt_keys(app: &mut App, event: &Event, key_code: KeyCode) -> Option<Command> {
    match key_code {
        KeyCode::Enter => {
            let value = app.prompt.as_ref().map(|input| input.value().to_string());
            Some(Command::SubmitAdd(value.unwrap_or_default()))
        }
        KeyCode::Esc => Some(Command::CancelAdd),
        _ => {
            if let Some(input) = app.prompt.as_mut() {
                input.handle_event(event);
            }
            None
        }
    }
}

fn handle_notice_keys(key_code: KeyCode) -> Option<Command> {
    match key_code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Command::DismissNotice),
        _ => None,
    }
}
