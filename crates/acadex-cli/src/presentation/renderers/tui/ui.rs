use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{InputMode, UiState};
use super::components::{
    CascadeBoard, ChatPane, Component, Dashboard, QuizTable, TutorialTable, UserTable,
};
use crate::presentation::view_models::ConsolePage;

pub(crate) fn draw(f: &mut Frame, state: &mut UiState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab strip
            Constraint::Min(0),
            Constraint::Length(3), // Key hints (and input prompt)
        ])
        .split(f.area());

    render_tabs(f, main_chunks[0], state);

    match state.page {
        ConsolePage::Dashboard => Dashboard.render(f, main_chunks[1], state),
        ConsolePage::Users => UserTable.render(f, main_chunks[1], state),
        ConsolePage::Catalog => CascadeBoard.render(f, main_chunks[1], state),
        ConsolePage::Quizzes => QuizTable.render(f, main_chunks[1], state),
        ConsolePage::Tutorials => TutorialTable.render(f, main_chunks[1], state),
        ConsolePage::Chat => ChatPane.render(f, main_chunks[1], state),
    }

    render_footer(f, main_chunks[2], state);
}

fn render_tabs(f: &mut Frame, area: Rect, state: &UiState) {
    let mut spans: Vec<Span> = Vec::new();
    for (idx, page) in ConsolePage::ALL.iter().enumerate() {
        let style = if *page == state.page {
            Style::default()
                .fg(Color::LightCyan)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(
            format!(" {} {} ", idx + 1, page.title()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn page_hints(page: ConsolePage) -> &'static str {
    match page {
        ConsolePage::Dashboard => "r refresh stats",
        ConsolePage::Users => "↑/↓ move · n/p page · Space enable/disable account",
        ConsolePage::Catalog => {
            "←/→ column · ↑/↓ move · Enter select · Backspace clear · n new quiz"
        }
        ConsolePage::Quizzes => "↑/↓ move · n/p page · Space activate/deactivate",
        ConsolePage::Tutorials => "↑/↓ move · Space publish/unpublish · r reload",
        ConsolePage::Chat => "Enter send · Tab next tab · Esc back to dashboard",
    }
}

fn render_footer(f: &mut Frame, area: Rect, state: &UiState) {
    let first = match state.input_mode {
        InputMode::QuizTitle => Line::from(vec![
            Span::styled("New quiz title: ", Style::default().fg(Color::LightCyan)),
            Span::styled(state.input.clone(), Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ]),
        _ => Line::from(Span::styled(
            page_hints(state.page),
            Style::default().fg(Color::Gray),
        )),
    };
    let second = Line::from(Span::styled(
        "q quit · Tab/Shift-Tab switch · 1-6 jump · r refresh",
        Style::default().fg(Color::DarkGray),
    ));

    let footer_widget = Paragraph::new(Text::from(vec![first, second])).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(footer_widget, area);
}
