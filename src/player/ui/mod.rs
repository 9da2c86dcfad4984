//! Demo player views.

mod editor;
mod overlay;
mod player;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::app::{Mode, PlayerApp};

/// Render the whole frame: the active screen, the quiz overlay when one
/// is up, and any pending confirmation on top.
pub fn render(frame: &mut Frame, app: &PlayerApp) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match &app.mode {
        Mode::Editor | Mode::ConfirmReplace { .. } => editor::render(frame, area, app),
        Mode::Player | Mode::ConfirmDelete { .. } => player::render(frame, area, app),
    }

    let model = app.overlay.snapshot();
    if model.quiz.is_some() {
        overlay::render(frame, area, &model);
    }

    match &app.mode {
        Mode::ConfirmReplace { draft } => {
            let message = format!(
                "A quiz already exists at {} seconds. Replace it?",
                draft.time
            );
            confirm_popup(frame, area, &message);
        }
        Mode::ConfirmDelete { .. } => {
            confirm_popup(frame, area, "Are you sure you want to delete this quiz?");
        }
        _ => {}
    }
}

fn confirm_popup(frame: &mut Frame, area: Rect, message: &str) {
    let popup = centered_rect(area, 50, 7);
    frame.render_widget(Clear, popup);

    let content = vec![
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "[Y]es  ·  [N]o",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Confirm ")
                .title_style(Style::default().fg(Color::Yellow).bold()),
        );
    frame.render_widget(widget, popup);
}

/// Fixed-height rectangle centered in `area`.
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);

    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);

    horizontal[1]
}
