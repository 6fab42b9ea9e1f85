use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::Component;
use crate::presentation::renderers::tui::app::UiState;

fn table_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ))
}

fn placeholder(text: &str) -> Vec<ListItem<'static>> {
    vec![ListItem::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    )))]
}

fn highlight() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

pub(crate) struct UserTable;

impl Component for UserTable {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut UiState) {
        let pane = &state.vm.users;
        let title = if pane.loaded {
            format!(" Users · page {}/{} ({}) ", pane.page, pane.pages.max(1), pane.total)
        } else {
            " Users ".to_string()
        };

        let items: Vec<ListItem> = if !pane.loaded {
            placeholder("loading…")
        } else if pane.rows.is_empty() {
            placeholder("no users on this page")
        } else {
            pane.rows
                .iter()
                .map(|row| {
                    let (flag, flag_style) = if row.active {
                        ("✓ ", Style::default().fg(Color::LightGreen))
                    } else {
                        ("✗ ", Style::default().fg(Color::DarkGray))
                    };
                    let role_style = match row.role.as_str() {
                        "admin" => Style::default().fg(Color::LightMagenta),
                        "exec" => Style::default().fg(Color::Yellow),
                        _ => Style::default().fg(Color::Gray),
                    };
                    let name_style = if row.active {
                        Style::default().fg(Color::White)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(flag, flag_style),
                        Span::styled(format!("{:<22}", row.name), name_style),
                        Span::styled(format!("{:<10}", row.role), role_style),
                        Span::styled(row.email.clone(), Style::default().fg(Color::Gray)),
                    ]))
                })
                .collect()
        };

        let list = List::new(items)
            .block(table_block(title))
            .highlight_style(highlight())
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut state.users_list);
    }
}

pub(crate) struct QuizTable;

impl Component for QuizTable {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut UiState) {
        let pane = &state.vm.quizzes;
        let title = if pane.loaded {
            format!(
                " Quizzes · page {}/{} ({}) ",
                pane.page,
                pane.pages.max(1),
                pane.total
            )
        } else {
            " Quizzes ".to_string()
        };

        let items: Vec<ListItem> = if !pane.loaded {
            placeholder("loading…")
        } else if pane.rows.is_empty() {
            placeholder("no quizzes on this page")
        } else {
            pane.rows
                .iter()
                .map(|row| {
                    let (flag, flag_style) = if row.active {
                        ("● ", Style::default().fg(Color::LightGreen))
                    } else {
                        ("○ ", Style::default().fg(Color::DarkGray))
                    };
                    let questions = row
                        .questions
                        .map(|n| format!("{} questions", n))
                        .unwrap_or_default();
                    ListItem::new(Line::from(vec![
                        Span::styled(flag, flag_style),
                        Span::styled(
                            format!("{:<32}", row.title),
                            Style::default().fg(Color::White),
                        ),
                        Span::styled(
                            format!("{:<14}", row.subject),
                            Style::default().fg(Color::Cyan),
                        ),
                        Span::styled(questions, Style::default().fg(Color::Gray)),
                    ]))
                })
                .collect()
        };

        let list = List::new(items)
            .block(table_block(title))
            .highlight_style(highlight())
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut state.quizzes_list);
    }
}

pub(crate) struct TutorialTable;

impl Component for TutorialTable {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut UiState) {
        let pane = &state.vm.tutorials;
        let title = match &pane.scope {
            Some(scope) if pane.loaded => format!(" Tutorials · {} ", scope),
            _ => " Tutorials ".to_string(),
        };

        let items: Vec<ListItem> = if !pane.loaded {
            placeholder("pick a subject or course on the Catalog tab")
        } else if pane.rows.is_empty() {
            placeholder("no tutorials in this scope")
        } else {
            pane.rows
                .iter()
                .map(|row| {
                    let (flag, flag_style) = if row.published {
                        ("▲ ", Style::default().fg(Color::LightGreen))
                    } else {
                        ("△ ", Style::default().fg(Color::Yellow))
                    };
                    let state_text = if row.published { "published" } else { "draft" };
                    ListItem::new(Line::from(vec![
                        Span::styled(flag, flag_style),
                        Span::styled(
                            format!("{:<40}", row.title),
                            Style::default().fg(Color::White),
                        ),
                        Span::styled(state_text, Style::default().fg(Color::Gray)),
                    ]))
                })
                .collect()
        };

        let list = List::new(items)
            .block(table_block(title))
            .highlight_style(highlight())
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, area, &mut state.tutorials_list);
    }
}
