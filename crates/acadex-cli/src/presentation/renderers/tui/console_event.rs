use acadex_types::CatalogLevel;

use crate::presentation::view_models::{ConsolePage, ConsoleViewModel};

/// Handler -> renderer. Snapshots flow one way; the renderer never mutates
/// domain state itself.
pub enum ConsoleEvent {
    Update(Box<ConsoleViewModel>),
    /// Fatal condition on the handler side; the renderer restores the
    /// terminal and exits its loop.
    Quit,
}

/// Renderer -> handler. Domain actions picked in the UI; everything that
/// only moves a cursor stays inside the renderer. Toggle variants carry
/// the desired new state, not the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleSignal {
    Quit,
    /// The user switched to a page; the handler lazily loads its data.
    PageShown(ConsolePage),
    Refresh(ConsolePage),
    CascadeSelect { level: CatalogLevel, id: String },
    CascadeClear { level: CatalogLevel },
    UsersPage { forward: bool },
    QuizzesPage { forward: bool },
    UserToggleActive { id: String, active: bool },
    QuizToggleActive { id: String, active: bool },
    TutorialTogglePublished { id: String, published: bool },
    /// Create a quiz on the subject currently resolved in the cascade.
    CreateQuiz { subject_id: String, title: String },
    ChatSend { text: String },
}
