//! Console presenter: pure functions that turn handler-owned domain state
//! into the ViewModel snapshot the TUI renderer paints.
//!
//! - No state lives here (the handler owns domain state, the renderer owns
//!   cursors and focus)
//! - All mapping decisions happen here so the renderer only lays out widgets

use acadex_core::CascadeState;
use acadex_types::{CatalogLevel, ChatMessage, Page, PlatformStats, Quiz, TutorialFile, User};

use super::quiz::quiz_row;
use super::stats::stats_view_model;
use super::tutorial::tutorial_row;
use super::users::user_row;
use crate::presentation::view_models::{
    CascadeLevelViewModel, CascadeOptionViewModel, CascadeResolvedViewModel, CascadeViewModel,
    ChatLineViewModel, ChatPaneViewModel, ConsoleStatusViewModel, ConsoleViewModel,
    QuizzesPaneViewModel, StatusLevel, TutorialsPaneViewModel, UsersPaneViewModel,
};

fn level_title(level: CatalogLevel) -> &'static str {
    match level {
        CatalogLevel::College => "College",
        CatalogLevel::Department => "Department",
        CatalogLevel::Course => "Course",
        CatalogLevel::Subject => "Subject",
    }
}

/// Snapshot of the whole console. Called by the handler after every state
/// change; the renderer replaces its copy wholesale.
#[allow(clippy::too_many_arguments)]
pub fn build_console_view_model(
    server: &str,
    identifier: Option<&str>,
    status: Option<(StatusLevel, &str)>,
    stats: Option<&PlatformStats>,
    cascade: &CascadeState,
    users: Option<(&Page<User>, u64)>,
    quizzes: Option<(&Page<Quiz>, u64)>,
    tutorials: Option<(&[TutorialFile], &str)>,
    chat_model: &str,
    chat_messages: &[ChatMessage],
    chat_busy: bool,
) -> ConsoleViewModel {
    ConsoleViewModel {
        server: server.to_string(),
        identifier: identifier.map(String::from),
        status: status.map(|(level, text)| ConsoleStatusViewModel {
            level,
            text: text.to_string(),
        }),
        stats: stats.map(|s| stats_view_model(server, s)),
        cascade: build_cascade(cascade),
        users: build_users_pane(users),
        quizzes: build_quizzes_pane(quizzes),
        tutorials: build_tutorials_pane(tutorials),
        chat: build_chat_pane(chat_model, chat_messages, chat_busy),
    }
}

fn build_cascade(cascade: &CascadeState) -> CascadeViewModel {
    let levels = CatalogLevel::ALL
        .iter()
        .map(|&level| CascadeLevelViewModel {
            title: level_title(level).to_string(),
            enabled: cascade.enabled(level),
            loading: cascade.is_loading(level),
            error: cascade.last_error(level).map(String::from),
            options: cascade
                .options(level)
                .iter()
                .map(|option| CascadeOptionViewModel {
                    id: option.id.clone(),
                    label: option.label.clone(),
                })
                .collect(),
            selected: cascade.selection(level).map(String::from),
        })
        .collect();

    let resolved = cascade.resolved().map(|(level, id)| {
        let label = cascade
            .selected_option(level)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| id.to_string());
        CascadeResolvedViewModel {
            level: level.to_string(),
            id: id.to_string(),
            label,
        }
    });

    CascadeViewModel { levels, resolved }
}

fn build_users_pane(users: Option<(&Page<User>, u64)>) -> UsersPaneViewModel {
    match users {
        Some((page, current)) => UsersPaneViewModel {
            rows: page.items.iter().map(user_row).collect(),
            page: current,
            pages: page.pages(),
            total: page.total(),
            loaded: true,
        },
        None => UsersPaneViewModel::default(),
    }
}

fn build_quizzes_pane(quizzes: Option<(&Page<Quiz>, u64)>) -> QuizzesPaneViewModel {
    match quizzes {
        Some((page, current)) => QuizzesPaneViewModel {
            rows: page.items.iter().map(quiz_row).collect(),
            page: current,
            pages: page.pages(),
            total: page.total(),
            loaded: true,
        },
        None => QuizzesPaneViewModel::default(),
    }
}

fn build_tutorials_pane(tutorials: Option<(&[TutorialFile], &str)>) -> TutorialsPaneViewModel {
    match tutorials {
        Some((files, scope)) => TutorialsPaneViewModel {
            rows: files.iter().map(tutorial_row).collect(),
            scope: Some(scope.to_string()),
            loaded: true,
        },
        None => TutorialsPaneViewModel::default(),
    }
}

fn build_chat_pane(model: &str, messages: &[ChatMessage], busy: bool) -> ChatPaneViewModel {
    ChatPaneViewModel {
        model: model.to_string(),
        messages: messages
            .iter()
            .map(|message| ChatLineViewModel {
                role: message.role.to_string(),
                content: message.content.clone(),
            })
            .collect(),
        busy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_maps_to_disabled_levels() {
        let cascade = CascadeState::new();
        let vm = build_console_view_model(
            "http://localhost:5000",
            Some("admin"),
            None,
            None,
            &cascade,
            None,
            None,
            None,
            "gemini-1.5-flash",
            &[],
            false,
        );

        assert_eq!(vm.cascade.levels.len(), 4);
        assert!(vm.cascade.levels[0].enabled);
        assert!(!vm.cascade.levels[1].enabled);
        assert!(!vm.cascade.levels[2].enabled);
        assert!(!vm.cascade.levels[3].enabled);
        assert!(vm.cascade.resolved.is_none());
        assert!(!vm.users.loaded);
        assert!(!vm.chat.busy);
    }

    #[test]
    fn test_user_page_is_mapped() {
        let cascade = CascadeState::new();
        let page: Page<User> = Page::bare(vec![]);
        let vm = build_console_view_model(
            "http://localhost:5000",
            None,
            Some((StatusLevel::Info, "loading")),
            None,
            &cascade,
            Some((&page, 1)),
            None,
            None,
            "gemini-1.5-flash",
            &[],
            true,
        );

        assert!(vm.users.loaded);
        assert_eq!(vm.users.page, 1);
        assert_eq!(vm.status.unwrap().text, "loading");
        assert!(vm.chat.busy);
    }
}
