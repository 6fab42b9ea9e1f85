mod cascade;
mod chat;
mod dashboard;
mod tables;

pub(crate) use cascade::CascadeBoard;
pub(crate) use chat::ChatPane;
pub(crate) use dashboard::Dashboard;
pub(crate) use tables::{QuizTable, TutorialTable, UserTable};

use ratatui::Frame;
use ratatui::layout::Rect;

use super::app::UiState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut UiState);
}
