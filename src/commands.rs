//! Command processing for mealpicker. Translates user intents into state
//! changes on the [`App`] and calls into storage.

use std::time::Instant;
use tui_input::Input;

use crate::App;
use crate::display::{Headline, Notice};
use crate::foodstore::pick_food;
use crate::session::{EditOutcome, EditSession};

/// Everything the user can ask the application to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick a random food and show it on the main view
    Pick,
    /// Open the menu editor
    OpenEditor,
    /// Dismiss the editor without an explicit save
    CloseEditor,
    /// Show the "add food" prompt
    BeginAdd,
    /// Add the prompt's text to the menu
    SubmitAdd(String),
    /// Hide the prompt without adding
    CancelAdd,
    /// Remove the highlighted food
    RemoveSelected,
    /// Save the menu and close the editor
    SaveAndClose,
    SelectNext,
    SelectPrevious,
    /// Close the current message box
    DismissNotice,
    Quit,
}

/// Applies a command to the application state.
///
/// ### Arguments
/// * `app` - Mutable reference to the application state
/// * `command` - What to do
/// * `now` - Current time, used to schedule the status message expiry
pub fn execute_command(app: &mut App, command: Command, now: Instant) {
    log::debug!("executing {command:?}");

    match command {
        Command::Pick => execute_pick(app),
        Command::OpenEditor => execute_open_editor(app),
        Command::CloseEditor => {
            app.prompt = None;
            app.editor = None;
        }
        Command::BeginAdd => {
            if app.editor.is_some() {
                app.prompt = Some(Input::default());
            }
        }
        Command::SubmitAdd(name) => {
            app.prompt = None;
            if let Some(editor) = app.editor.as_mut() {
                editor.add(&name, now);
            }
        }
        Command::CancelAdd => app.prompt = None,
        Command::RemoveSelected => {
            let outcome = app.editor.as_mut().map(|editor| editor.remove_selected(now));
            if outcome == Some(EditOutcome::NothingSelected) {
                app.notice = Some(Notice::info("Notice", "Select a food first"));
            }
        }
        Command::SaveAndClose => execute_save_and_close(app),
        Command::SelectNext => {
            if let Some(editor) = app.editor.as_mut() {
                editor.select_next();
            }
        }
        Command::SelectPrevious => {
            if let Some(editor) = app.editor.as_mut() {
                editor.select_previous();
            }
        }
        Command::DismissNotice => app.notice = None,
        Command::Quit => app.should_quit = true,
    }
}

fn execute_pick(app: &mut App) {
    match app.store.load() {
        Ok(foods) => {
            app.headline = match pick_food(&foods, &mut rand::rng()) {
                Some(food) => {
                    log::info!("picked {food:?} out of {}", foods.len());
                    Headline::Picked(food.to_string())
                }
                None => Headline::EmptyMenu,
            };
        }
        Err(e) => {
            log::error!("{e}");
            app.notice = Some(Notice::error("Error", format!("Failed to read the menu: {e}")));
        }
    }
}

fn execute_open_editor(app: &mut App) {
    if app.editor.is_some() {
        return;
    }

    match EditSession::open(app.store.clone(), app.status_clear_after) {
        Ok(session) => app.editor = Some(session),
        Err(e) => {
            log::error!("{e}");
            app.notice = Some(Notice::error("Error", format!("Failed to read the menu: {e}")));
        }
    }
}

fn execute_save_and_close(app: &mut App) {
    let Some(editor) = app.editor.as_ref() else {
        return;
    };

    match editor.save_and_close() {
        Ok(()) => {
            app.editor = None;
            app.notice = Some(Notice::info("Saved", "Menu saved!"));
        }
        Err(e) => {
            log::error!("{e}");
            app.notice = Some(Notice::error("Error", format!("Save failed: {e}")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{NoticeKind, Screen};
    use crate::foodstore::FoodStore;
    use crate::session::Status;
    use std::fs;
    use std::time::Duration;
    use tempfile::{TempDir, tempdir};

    fn setup_app(content: Option<&str>) -> std::io::Result<(TempDir, App)> {
        let dir = tempdir()?;
        let path = dir.path().join("data.txt");
        if let Some(content) = content {
            fs::write(&path, content)?;
        }
        let app = App::new(FoodStore::new(path), Duration::from_secs(3));
        Ok((dir, app))
    }

    fn run(app: &mut App, commands: Vec<Command>) {
        for command in commands {
            execute_command(app, command, Instant::now());
        }
    }

    fn read_data(dir: &TempDir) -> std::io::Result<String> {
        fs::read_to_string(dir.path().join("data.txt"))
    }

    #[test]
    fn test_pick_shows_member() -> std::io::Result<()> {
        let (_dir, mut app) = setup_app(Some("饺子 粥 炒面"))?;

        for _ in 0..20 {
            run(&mut app, vec![Command::Pick]);
            let Headline::Picked(food) = &app.headline else {
                panic!("expected a pick, got {:?}", app.headline);
            };
            assert!(["饺子", "粥", "炒面"].contains(&food.as_str()));
        }
        Ok(())
    }

    #[test]
    fn test_pick_from_empty_menu() -> std::io::Result<()> {
        let (_dir, mut app) = setup_app(Some("  \n "))?;

        run(&mut app, vec![Command::Pick]);

        assert_eq!(app.headline, Headline::EmptyMenu);
        assert!(app.notice.is_none());
        Ok(())
    }

    #[test]
    fn test_pick_read_failure_is_notice() -> std::io::Result<()> {
        let (_dir, mut app) = setup_app(None)?;

        run(&mut app, vec![Command::Pick]);

        let notice = app.notice.as_ref().expect("error notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(app.headline, Headline::Ready);

        // Still usable afterwards
        run(&mut app, vec![Command::DismissNotice]);
        assert_eq!(app.screen(), Screen::Main);
        Ok(())
    }

    #[test]
    fn test_open_editor_read_failure_keeps_editor_closed() -> std::io::Result<()> {
        let (_dir, mut app) = setup_app(None)?;

        run(&mut app, vec![Command::OpenEditor]);

        assert!(app.editor.is_none());
        assert_eq!(app.screen(), Screen::Notice);
        Ok(())
    }

    #[test]
    fn test_add_through_prompt() -> std::io::Result<()> {
        let (dir, mut app) = setup_app(Some("粥"))?;

        run(&mut app, vec![Command::OpenEditor, Command::BeginAdd]);
        assert_eq!(app.screen(), Screen::Prompt);

        run(&mut app, vec![Command::SubmitAdd("  炒饭 ".to_string())]);

        assert_eq!(app.screen(), Screen::Editor);
        assert_eq!(read_data(&dir)?, "粥 炒饭");
        assert_eq!(app.editor.as_ref().unwrap().status(), Some(&Status::Saved));
        Ok(())
    }

    #[test]
    fn test_begin_add_requires_editor() -> std::io::Result<()> {
        let (_dir, mut app) = setup_app(Some("粥"))?;
        run(&mut app, vec![Command::BeginAdd]);
        assert!(app.prompt.is_none());
        Ok(())
    }

    #[test]
    fn test_cancel_add_changes_nothing() -> std::io::Result<()> {
        let (dir, mut app) = setup_app(Some("粥"))?;

        run(&mut app, vec![Command::OpenEditor, Command::BeginAdd, Command::CancelAdd]);

        assert_eq!(app.screen(), Screen::Editor);
        assert_eq!(read_data(&dir)?, "粥");
        Ok(())
    }

    #[test]
    fn test_remove_without_selection_shows_notice() -> std::io::Result<()> {
        let (dir, mut app) = setup_app(Some("a b"))?;

        run(&mut app, vec![Command::OpenEditor, Command::RemoveSelected]);

        let notice = app.notice.as_ref().expect("info notice");
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(read_data(&dir)?, "a b");
        Ok(())
    }

    #[test]
    fn test_remove_selected_entry() -> std::io::Result<()> {
        let (dir, mut app) = setup_app(Some("a b c"))?;

        run(
            &mut app,
            vec![
                Command::OpenEditor,
                Command::SelectNext,
                Command::SelectNext,
                Command::RemoveSelected,
            ],
        );

        assert!(app.notice.is_none());
        assert_eq!(read_data(&dir)?, "a c");
        Ok(())
    }

    #[test]
    fn test_save_and_close_confirms() -> std::io::Result<()> {
        let (dir, mut app) = setup_app(Some("a\nb"))?;

        run(&mut app, vec![Command::OpenEditor, Command::SaveAndClose]);

        assert!(app.editor.is_none());
        assert_eq!(app.notice, Some(Notice::info("Saved", "Menu saved!")));
        assert_eq!(read_data(&dir)?, "a b");
        Ok(())
    }

    #[test]
    fn test_save_failure_keeps_editor_open() -> std::io::Result<()> {
        let (dir, mut app) = setup_app(Some("a"))?;
        run(&mut app, vec![Command::OpenEditor]);

        let path = dir.path().join("data.txt");
        fs::remove_file(&path)?;
        fs::create_dir(&path)?;
        run(&mut app, vec![Command::SaveAndClose]);

        assert!(app.editor.is_some());
        assert_eq!(app.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Error));
        Ok(())
    }

    #[test]
    fn test_dismissing_editor_keeps_auto_saved_changes() -> std::io::Result<()> {
        let (dir, mut app) = setup_app(Some("a"))?;

        run(
            &mut app,
            vec![
                Command::OpenEditor,
                Command::SubmitAdd("b".to_string()),
                Command::CloseEditor,
            ],
        );

        assert_eq!(app.screen(), Screen::Main);
        assert_eq!(read_data(&dir)?, "a b");
        Ok(())
    }

    #[test]
    fn test_tick_expires_status() -> std::io::Result<()> {
        let (_dir, mut app) = setup_app(Some("a"))?;
        let start = Instant::now();

        execute_command(&mut app, Command::OpenEditor, start);
        execute_command(&mut app, Command::SubmitAdd("b".to_string()), start);
        app.tick(start + Duration::from_secs(3));

        assert_eq!(app.editor.as_ref().unwrap().status(), None);
        Ok(())
    }

    #[test]
    fn test_quit() -> std::io::Result<()> {
        let (_dir, mut app) = setup_app(Some("a"))?;
        run(&mut app, vec![Command::Quit]);
        assert!(app.should_quit);
        Ok(())
    }
}
