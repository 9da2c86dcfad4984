//! Add-quiz form.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::models::OPTION_LABELS;
use crate::player::app::{EditorField, PlayerApp};

pub fn render(frame: &mut Frame, area: Rect, app: &PlayerApp) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(12),   // Form
        Constraint::Length(2), // Controls
    ])
    .margin(1)
    .split(area);

    let title = Paragraph::new("ADD QUIZ")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).bold());
    frame.render_widget(title, chunks[0]);

    render_form(frame, chunks[1], app);

    let controls = Paragraph::new("Tab/↓ next field · ↑ previous · Enter save · Esc cancel")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[2]);
}

fn render_form(frame: &mut Frame, area: Rect, app: &PlayerApp) {
    let form = &app.editor;
    let mut lines = vec![
        field_line("Time (seconds)", &form.time, form.focus == EditorField::Time),
        Line::from(""),
        field_line("Question", &form.question, form.focus == EditorField::Question),
        Line::from(""),
    ];

    for (i, option) in form.options.iter().enumerate() {
        lines.push(field_line(
            &format!("Option {}", OPTION_LABELS[i]),
            option,
            form.focus == EditorField::Option(i),
        ));
    }

    lines.push(Line::from(""));
    lines.push(correct_line(form.correct, form.focus == EditorField::Correct));

    if let Some(error) = &form.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red).bold(),
        )));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" New quiz ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::new(1, 1, 1, 0)),
    );
    frame.render_widget(widget, area);
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let style = if focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White)
    };
    let cursor = if focused { "_" } else { "" };

    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(
            format!("{}: ", label),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("{}{}", value, cursor), style),
    ])
}

fn correct_line(correct: usize, focused: bool) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let style = if focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        Span::styled(marker, style),
        Span::styled(
            "Correct answer: ",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    for (i, label) in OPTION_LABELS.iter().enumerate() {
        let option_style = if i == correct {
            Style::default().fg(Color::LightGreen).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let text = if i == correct {
            format!("[{}] ", label)
        } else {
            format!(" {}  ", label)
        };
        spans.push(Span::styled(text, option_style));
    }

    Line::from(spans)
}
