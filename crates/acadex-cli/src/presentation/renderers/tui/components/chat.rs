use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::presentation::renderers::tui::app::UiState;

pub(crate) struct ChatPane;

impl Component for ChatPane {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        render_transcript(f, chunks[0], state);
        render_input(f, chunks[1], state);
    }
}

fn render_transcript(f: &mut Frame, area: Rect, state: &UiState) {
    let pane = &state.vm.chat;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray))
        .title(Span::styled(
            format!(" Chat · {} ", pane.model),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);

    let mut lines: Vec<Line> = Vec::new();
    if pane.messages.is_empty() {
        lines.push(Line::from(Span::styled(
            "Ask the study assistant anything about the platform content.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for message in &pane.messages {
        let (label, style) = match message.role.as_str() {
            "user" => (
                "you",
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
            _ => (
                "assistant",
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
        };
        lines.push(Line::from(Span::styled(label, style)));
        for part in message.content.lines() {
            lines.push(Line::from(Span::styled(
                part.to_string(),
                Style::default().fg(Color::White),
            )));
        }
        lines.push(Line::from(""));
    }
    if pane.busy {
        lines.push(Line::from(Span::styled(
            "thinking…",
            Style::default().fg(Color::Yellow),
        )));
    }

    // Rough wrap estimate so the newest turn stays in view.
    let width = inner.width.max(1) as usize;
    let estimated: usize = lines
        .iter()
        .map(|line| (line.width().max(1) + width - 1) / width)
        .sum();
    let scroll = estimated.saturating_sub(inner.height as usize) as u16;

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}

fn render_input(f: &mut Frame, area: Rect, state: &UiState) {
    let title = if state.vm.chat.busy {
        Span::styled(
            " Message (waiting for reply) ",
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled(
            " Message · Enter sends ",
            Style::default().fg(Color::LightCyan),
        )
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);

    let text = Line::from(vec![
        Span::styled(state.input.clone(), Style::default().fg(Color::White)),
        Span::styled("█", Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(text).block(block), area);
}
