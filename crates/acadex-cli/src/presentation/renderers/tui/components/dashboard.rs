use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::renderers::tui::app::UiState;
use crate::presentation::view_models::StatusLevel;

pub(crate) struct Dashboard;

impl Component for Dashboard {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Length(3), // Session box
                Constraint::Length(4), // Platform counters
                Constraint::Min(0),
            ])
            .split(area);

        render_title_bar(f, chunks[0], state);
        render_session_box(f, chunks[1], state);
        render_counters_box(f, chunks[2], state);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &UiState) {
    let title = Line::from(vec![
        Span::styled(
            "━━ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Acadex Console",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " ━━",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let status = state.vm.status.as_ref();
    let status_style = match status.map(|s| s.level) {
        Some(StatusLevel::Error) => Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
        Some(StatusLevel::Warning) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::DarkGray),
    };
    let status_text = status.map(|s| s.text.as_str()).unwrap_or("ready");

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    f.render_widget(Paragraph::new(title), layout[0]);
    f.render_widget(
        Paragraph::new(status_text)
            .style(status_style)
            .alignment(Alignment::Right),
        layout[1],
    );
}

fn render_session_box(f: &mut Frame, area: Rect, state: &UiState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(Span::styled(
            " Session ",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ));

    let mut spans = vec![
        Span::styled("Server: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.vm.server.clone(),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    match &state.vm.identifier {
        Some(identifier) => {
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled("Signed in: ", Style::default().fg(Color::Gray)));
            spans.push(Span::styled(
                identifier.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        None => {
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled(
                "not signed in",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_counters_box(f: &mut Frame, area: Rect, state: &UiState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            " Platform ",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ));

    let lines = match &state.vm.stats {
        Some(stats) => {
            let counter = |label: &str, value: u64| {
                vec![
                    Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
                    Span::styled(
                        value.to_string(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                ]
            };
            let mut first = counter("Users", stats.users);
            first.extend(counter("Courses", stats.courses));
            first.extend(counter("Subjects", stats.subjects));
            let mut second = counter("Quizzes", stats.quizzes);
            second.extend(counter("Tutorials", stats.pdfs));
            vec![Line::from(first), Line::from(second)]
        }
        None => vec![Line::from(Span::styled(
            "Loading platform stats… (r to retry)",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}
