//! Quiz overlay: question, labelled options, grading feedback.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::models::OPTION_LABELS;
use crate::player::screen::OverlayModel;

pub fn render(frame: &mut Frame, area: Rect, model: &OverlayModel) {
    let Some(quiz) = &model.quiz else { return };

    let popup = super::centered_rect(area, 70, 14);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Quiz ")
        .title_style(Style::default().fg(Color::Cyan).bold())
        .padding(Padding::new(2, 2, 1, 1));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Question
        Constraint::Length(4), // Options
        Constraint::Min(2),    // Feedback or hint
    ])
    .split(inner);

    let question = Paragraph::new(quiz.question.as_str())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).bold());
    frame.render_widget(question, chunks[0]);

    render_options(frame, chunks[1], &quiz.options, model.selected);
    render_verdict(frame, chunks[2], model);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[String; 4],
    selected: Option<usize>,
) {
    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let is_selected = selected == Some(i);
            let prefix = if is_selected { "> " } else { "  " };
            let style = if is_selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(format!("{}) ", OPTION_LABELS[i]), style),
                Span::styled(opt.clone(), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_verdict(frame: &mut Frame, area: Rect, model: &OverlayModel) {
    match &model.feedback {
        Some(feedback) => {
            let color = if feedback.correct {
                Color::LightGreen
            } else {
                Color::Red
            };
            let widget = Paragraph::new(feedback.message.as_str())
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(color).bold());
            frame.render_widget(widget, area);
        }
        None => {
            let hint = "j/k or a-d to select · Enter to submit";
            frame.render_widget(
                Paragraph::new(hint)
                    .alignment(Alignment::Center)
                    .fg(Color::DarkGray),
                area,
            );
        }
    }
}
