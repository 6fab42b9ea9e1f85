use serde::Serialize;

use super::common::StatusLevel;
use super::quiz::QuizRowViewModel;
use super::stats::StatsViewModel;
use super::tutorial::TutorialRowViewModel;
use super::user::UserRowViewModel;

/// Pages of the interactive console, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsolePage {
    Dashboard,
    Users,
    Catalog,
    Quizzes,
    Tutorials,
    Chat,
}

impl ConsolePage {
    pub const ALL: [ConsolePage; 6] = [
        ConsolePage::Dashboard,
        ConsolePage::Users,
        ConsolePage::Catalog,
        ConsolePage::Quizzes,
        ConsolePage::Tutorials,
        ConsolePage::Chat,
    ];

    pub const fn title(&self) -> &'static str {
        match self {
            ConsolePage::Dashboard => "Dashboard",
            ConsolePage::Users => "Users",
            ConsolePage::Catalog => "Catalog",
            ConsolePage::Quizzes => "Quizzes",
            ConsolePage::Tutorials => "Tutorials",
            ConsolePage::Chat => "Chat",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsoleStatusViewModel {
    pub level: StatusLevel,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CascadeOptionViewModel {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CascadeLevelViewModel {
    pub title: String,
    pub enabled: bool,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub options: Vec<CascadeOptionViewModel>,
    /// Id of the currently selected option, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CascadeResolvedViewModel {
    pub level: String,
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CascadeViewModel {
    pub levels: Vec<CascadeLevelViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<CascadeResolvedViewModel>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UsersPaneViewModel {
    pub rows: Vec<UserRowViewModel>,
    pub page: u64,
    pub pages: u64,
    pub total: u64,
    pub loaded: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct QuizzesPaneViewModel {
    pub rows: Vec<QuizRowViewModel>,
    pub page: u64,
    pub pages: u64,
    pub total: u64,
    pub loaded: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TutorialsPaneViewModel {
    pub rows: Vec<TutorialRowViewModel>,
    /// Label of the catalog scope the list was fetched for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub loaded: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatLineViewModel {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChatPaneViewModel {
    pub model: String,
    pub messages: Vec<ChatLineViewModel>,
    pub busy: bool,
}

/// Snapshot of everything the console can show. The handler thread rebuilds
/// this after every state change and ships it to the renderer; the renderer
/// keeps cursors and focus to itself.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConsoleViewModel {
    pub server: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ConsoleStatusViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsViewModel>,
    pub cascade: CascadeViewModel,
    pub users: UsersPaneViewModel,
    pub quizzes: QuizzesPaneViewModel,
    pub tutorials: TutorialsPaneViewModel,
    pub chat: ChatPaneViewModel,
}
