#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::wildcard_imports)]

//! Terminal user interface implementation using ratatui. Manages terminal setup,
//! teardown, and rendering of the picker, the menu editor and their pop-ups.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{prelude::*, widgets::*};
use std::io;
use tui_input::Input;

use crate::App;
use crate::display::{Notice, NoticeKind};
use crate::session::{EditSession, Status};

/// The primary accent color used throughout the UI
const ACCENT_COLOR: Color = Color::Rgb(57, 255, 20);
const ERROR_COLOR: Color = Color::Rgb(243, 139, 168);

/// Initializes the terminal for TUI operation.
///
/// ### Returns
/// * `Ok(Terminal)` - Configured terminal instance ready for TUI
/// * `Err(io::Error)` - If terminal setup fails
///
/// Sets up:
/// * Raw mode for immediate character input
/// * Alternate screen to preserve original terminal content
/// * Mouse capture so clicks don't leak into the shell
pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restores the terminal to its original state.
///
/// ### Returns
/// * `Ok(())` - Terminal successfully restored
/// * `Err(io::Error)` - If cleanup fails
pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draws the application UI.
///
/// ### Layout
/// * The picker view, or the menu editor while one is open
/// * The "add food" prompt on top of the editor
/// * A message box on top of everything
pub fn draw(frame: &mut Frame, app: &App) {
    match &app.editor {
        Some(editor) => draw_editor(frame, editor),
        None => draw_picker(frame, app),
    }

    if let Some(input) = &app.prompt {
        draw_prompt(frame, input);
    }

    if let Some(notice) = &app.notice {
        draw_notice(frame, notice);
    }
}

fn draw_picker(frame: &mut Frame, app: &App) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(" What to eat today ")
        .style(Style::default().fg(ACCENT_COLOR));
    let inner = outer.inner(frame.size());
    frame.render_widget(outer, frame.size());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(1), // Headline
            Constraint::Min(1),
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let headline = Paragraph::new(app.headline.text())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(headline, chunks[1]);

    frame.render_widget(
        create_help_widget(&[("enter", "Go"), ("e", "Edit menu"), ("q", "quit")]),
        chunks[3],
    );
}

fn draw_editor(frame: &mut Frame, editor: &EditSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Food list
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Help
        ])
        .split(frame.size());

    let list_area = chunks[0];
    let visible_rows = list_area.height.saturating_sub(2) as usize; // borders
    let food_lines = create_food_lines(editor.foods(), editor.selected());
    let scroll = editor
        .selected()
        .map_or(0, |selected| (selected + 1).saturating_sub(visible_rows));

    let list = Paragraph::new(food_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Edit menu ({}) ", editor.foods().len())),
        )
        .style(Style::default().fg(ACCENT_COLOR))
        .scroll((scroll as u16, 0));
    frame.render_widget(list, list_area);

    if let Some(status) = editor.status() {
        frame.render_widget(create_status_widget(status), chunks[1]);
    }

    frame.render_widget(
        create_help_widget(&[
            ("↑/↓", "select"),
            ("a", "add"),
            ("d", "remove"),
            ("s", "save"),
            ("esc", "close"),
        ]),
        chunks[2],
    );
}

/// Numbered list of foods, the selected one reversed
fn create_food_lines(foods: &[String], selected: Option<usize>) -> Vec<Line<'_>> {
    if foods.is_empty() {
        return vec![Line::from(Span::styled(
            "(empty)",
            Style::default().add_modifier(Modifier::DIM),
        ))];
    }

    let focused_style = Style::default().add_modifier(Modifier::REVERSED);
    foods
        .iter()
        .enumerate()
        .map(|(i, food)| {
            let text = format!("{}. {food}", i + 1);
            if selected == Some(i) {
                Line::from(Span::styled(text, focused_style))
            } else {
                Line::from(text)
            }
        })
        .collect()
}

fn create_status_widget(status: &Status) -> Paragraph<'static> {
    let (text, color) = match status {
        Status::Saved => ("Auto-saved!".to_string(), ACCENT_COLOR),
        Status::SaveFailed(reason) => (format!("Auto-save failed: {reason}"), ERROR_COLOR),
    };
    Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
        .alignment(Alignment::Center)
}

/// One-line key legend, keys in bold
fn create_help_widget(bindings: &[(&'static str, &'static str)]) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().fg(ACCENT_COLOR)));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(ACCENT_COLOR),
        ));
    }
    Paragraph::new(Line::from(spans))
}

fn draw_prompt(frame: &mut Frame, input: &Input) {
    let area = centered_rect(50, 3, frame.size());
    let available_width = area.width.saturating_sub(2) as usize;
    let scroll = input.visual_scroll(available_width);

    let widget = Paragraph::new(input.value())
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Add food (enter to add, esc to cancel) "),
        )
        .style(Style::default().fg(ACCENT_COLOR));

    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);

    let cursor_x = input.visual_cursor().saturating_sub(scroll) as u16;
    frame.set_cursor(area.x + 1 + cursor_x, area.y + 1);
}

fn draw_notice(frame: &mut Frame, notice: &Notice) {
    let color = match notice.kind {
        NoticeKind::Info => ACCENT_COLOR,
        NoticeKind::Error => ERROR_COLOR,
    };
    let area = centered_rect(50, 6, frame.size());

    let text = vec![
        Line::from(notice.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", Style::default().add_modifier(Modifier::BOLD))),
    ];
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", notice.title)),
        )
        .style(Style::default().fg(color));

    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
