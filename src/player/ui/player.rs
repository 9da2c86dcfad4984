//! Transport view: the simulated video, the quiz list, and controls.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Padding, Paragraph};

use crate::player::app::PlayerApp;

pub fn render(frame: &mut Frame, area: Rect, app: &PlayerApp) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Length(5), // Video
        Constraint::Min(6),    // Quiz list
        Constraint::Length(2), // Controls + status
    ])
    .margin(1)
    .split(area);

    render_title(frame, chunks[0]);
    render_video(frame, chunks[1], app);
    render_quiz_list(frame, chunks[2], app);
    render_controls(frame, chunks[3], app);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("VIDEO QUIZ")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).bold());
    frame.render_widget(widget, area);
}

fn render_video(frame: &mut Frame, area: Rect, app: &PlayerApp) {
    let position = app.video.position();
    let duration = app.video.duration();
    let ratio = if duration > 0.0 {
        (position / duration).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let state = if app.video.is_playing() {
        "playing"
    } else {
        "paused"
    };
    let label = format!(
        "{} / {}  ({})",
        format_time(position),
        format_time(duration),
        state
    );

    let widget = Gauge::default()
        .ratio(ratio)
        .label(label)
        .gauge_style(Style::default().fg(Color::Blue))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Video ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_quiz_list(frame: &mut Frame, area: Rect, app: &PlayerApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Quizzes ")
        .title_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    if app.store.is_empty() {
        let widget = Paragraph::new("No quizzes added yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let lines: Vec<Line> = app
        .store
        .list()
        .iter()
        .enumerate()
        .map(|(i, quiz)| {
            let is_selected = i == app.list_cursor;
            let prefix = if is_selected { "> " } else { "  " };
            let style = if is_selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(format!("{:>4}s  ", quiz.time), style),
                Span::styled(quiz.question.clone(), style),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(block);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &PlayerApp) {
    let chunks =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

    let controls =
        "space play/pause · ←/→ seek 5s · j/k select · e add quiz · d delete · q quit";
    frame.render_widget(
        Paragraph::new(controls)
            .alignment(Alignment::Center)
            .fg(Color::DarkGray),
        chunks[0],
    );

    if let Some(status) = &app.status {
        frame.render_widget(
            Paragraph::new(status.as_str())
                .alignment(Alignment::Center)
                .fg(Color::Green),
            chunks[1],
        );
    }
}

fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
