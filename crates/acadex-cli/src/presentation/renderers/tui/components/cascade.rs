use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::Component;
use crate::presentation::formatters::truncate;
use crate::presentation::renderers::tui::app::UiState;

pub(crate) struct CascadeBoard;

impl Component for CascadeBoard {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut UiState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(rows[0]);

        for (idx, column) in columns.iter().enumerate() {
            render_column(f, *column, state, idx);
        }

        render_resolved_line(f, rows[1], state);
    }
}

fn render_column(f: &mut Frame, area: Rect, state: &mut UiState, idx: usize) {
    let Some(level) = state.vm.cascade.levels.get(idx) else {
        return;
    };

    let enabled = level.enabled;
    let loading = level.loading;
    let focused = idx == state.cascade_focus && enabled;
    let error = level.error.clone();
    let title = if loading {
        format!(" {} … ", level.title)
    } else {
        format!(" {} ", level.title)
    };

    let border_style = if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let title_style = if focused {
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    } else {
        border_style
    };

    let items: Vec<ListItem> = if !enabled {
        let parent = idx
            .checked_sub(1)
            .and_then(|p| state.vm.cascade.levels.get(p))
            .map(|parent| parent.title.to_lowercase())
            .unwrap_or_else(|| "parent".to_string());
        vec![ListItem::new(Line::from(Span::styled(
            format!("pick a {} first", parent),
            Style::default().fg(Color::DarkGray),
        )))]
    } else if level.options.is_empty() {
        let text = if loading {
            "loading…"
        } else if error.is_some() {
            "fetch failed"
        } else {
            "(empty)"
        };
        vec![ListItem::new(Line::from(Span::styled(
            text,
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        level
            .options
            .iter()
            .map(|option| {
                let selected = level.selected.as_deref() == Some(option.id.as_str());
                let marker = if selected { "● " } else { "  " };
                let style = if selected {
                    Style::default()
                        .fg(Color::LightGreen)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::LightGreen)),
                    Span::styled(option.label.clone(), style),
                ]))
            })
            .collect()
    };

    let (list_area, error_area) = if error.is_some() {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        (split[0], Some(split[1]))
    } else {
        (area, None)
    };

    // The cursor lives in every column's ListState but the highlight is
    // only painted on the focused one.
    let highlight_style = if focused {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Span::styled(title, title_style)),
        )
        .highlight_style(highlight_style)
        .highlight_symbol(if focused { ">> " } else { "   " });

    f.render_stateful_widget(list, list_area, &mut state.cascade_lists[idx]);

    if let (Some(error_area), Some(message)) = (error_area, error) {
        let width = error_area.width.saturating_sub(2) as usize;
        f.render_widget(
            Paragraph::new(Span::styled(
                truncate(&message, width.max(8)),
                Style::default().fg(Color::LightRed),
            )),
            error_area,
        );
    }
}

fn render_resolved_line(f: &mut Frame, area: Rect, state: &UiState) {
    let line = match &state.vm.cascade.resolved {
        Some(resolved) => {
            let mut spans = vec![
                Span::styled("Selected: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    resolved.label.clone(),
                    Style::default()
                        .fg(Color::LightGreen)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" [{} {}]", resolved.level, resolved.id),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if resolved.level == "subject" {
                spans.push(Span::styled(
                    "  n: new quiz here",
                    Style::default().fg(Color::Cyan),
                ));
            }
            Line::from(spans)
        }
        None => Line::from(Span::styled(
            "Nothing selected yet",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}
