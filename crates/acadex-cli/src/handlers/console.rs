//! Console handler: owns the domain state behind the interactive TUI.
//!
//! - Owns the cascade, loaded pages and the chat transcript
//! - Spawns fetches onto the tokio runtime and collects completions
//! - Calls the presenter to build ViewModel snapshots
//! - Ships snapshots to the renderer thread via channel
//!
//! The renderer owns nothing but cursors; every domain action comes back
//! here as a [`ConsoleSignal`].

use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use is_terminal::IsTerminal;

use acadex_client::{Client, NewQuiz, QuizQuery, TutorialQuery, TutorialScope, UserQuery};
use acadex_core::{CascadeState, FetchOutcome, FetchTicket, source::FetchResult};
use acadex_types::{CatalogLevel, ChatMessage, Page, PlatformStats, Quiz, TutorialFile, User};

use crate::context::ExecutionContext;
use crate::presentation::presenters::build_console_view_model;
use crate::presentation::renderers::{ConsoleSignal, ConsoleTui};
use crate::presentation::view_models::{ConsolePage, ConsoleViewModel, StatusLevel};

/// Completion of one background fetch or write.
enum Done {
    Options(FetchTicket, FetchResult),
    Stats(Result<PlatformStats, String>),
    Users(u64, Result<Page<User>, String>),
    Quizzes(u64, Result<Page<Quiz>, String>),
    Tutorials(String, Result<Vec<TutorialFile>, String>),
    ChatReply(Result<String, String>),
    /// A write finished; on success the named page is re-fetched.
    Action(ConsolePage, &'static str, Result<(), String>),
}

struct ConsoleApp {
    client: Client,
    server: String,
    identifier: String,
    page_size: u64,
    status: Option<(StatusLevel, String)>,
    stats: Option<PlatformStats>,
    cascade: CascadeState,
    users: Option<(Page<User>, u64)>,
    quizzes: Option<(Page<Quiz>, u64)>,
    tutorials: Option<(Vec<TutorialFile>, String)>,
    chat_model: String,
    chat_messages: Vec<ChatMessage>,
    chat_busy: bool,
    tui: ConsoleTui,
    done_tx: Sender<Done>,
    runtime: tokio::runtime::Handle,
}

pub fn handle(exec: &ExecutionContext, runtime: tokio::runtime::Handle) -> Result<()> {
    let Some(session) = exec.session()? else {
        anyhow::bail!("not signed in (run 'acadex login' first)");
    };
    if !io::stdout().is_terminal() {
        anyhow::bail!("the console needs an interactive terminal");
    }

    let client = exec.client()?.clone();
    let server = client.base_url().to_string();
    let chat_model = exec.default_model()?;
    let page_size = exec.page_size()?;

    let (tui, event_rx) = ConsoleTui::new();
    let (signal_tx, signal_rx) = mpsc::channel();
    let (done_tx, done_rx) = mpsc::channel();

    let ui_handle = thread::spawn(move || ConsoleTui::run(event_rx, signal_tx));

    let mut app = ConsoleApp {
        client,
        server,
        identifier: session.identifier,
        page_size,
        status: None,
        stats: None,
        cascade: CascadeState::new(),
        users: None,
        quizzes: None,
        tutorials: None,
        chat_model,
        chat_messages: Vec::new(),
        chat_busy: false,
        tui,
        done_tx,
        runtime,
    };

    app.spawn_stats();
    let ticket = app.cascade.begin_load_roots();
    app.spawn_options(ticket);
    app.push_update();

    run_loop(&mut app, &signal_rx, &done_rx);

    let _ = app.tui.quit();
    match ui_handle.join() {
        Ok(result) => result,
        Err(_) => anyhow::bail!("console screen thread panicked"),
    }
}

fn run_loop(app: &mut ConsoleApp, signal_rx: &Receiver<ConsoleSignal>, done_rx: &Receiver<Done>) {
    loop {
        match signal_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(ConsoleSignal::Quit) => break,
            Ok(signal) => app.on_signal(signal),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        // Batch completions into a single snapshot per pass.
        let mut changed = false;
        while let Ok(done) = done_rx.try_recv() {
            app.apply_done(done);
            changed = true;
        }
        if changed {
            app.push_update();
        }
    }
}

impl ConsoleApp {
    fn on_signal(&mut self, signal: ConsoleSignal) {
        match signal {
            // Quit never reaches here; the loop breaks on it.
            ConsoleSignal::Quit => {}
            ConsoleSignal::PageShown(page) => self.ensure_loaded(page),
            ConsoleSignal::Refresh(page) => self.refresh(page),
            ConsoleSignal::CascadeSelect { level, id } => match self.cascade.select(level, &id) {
                Ok(Some(ticket)) => self.spawn_options(ticket),
                Ok(None) => {}
                Err(err) => self.status = Some((StatusLevel::Warning, err.to_string())),
            },
            ConsoleSignal::CascadeClear { level } => self.cascade.clear(level),
            ConsoleSignal::UsersPage { forward } => {
                if let Some(next) = flip_page(self.users.as_ref(), forward) {
                    self.spawn_users(next);
                }
            }
            ConsoleSignal::QuizzesPage { forward } => {
                if let Some(next) = flip_page(self.quizzes.as_ref(), forward) {
                    self.spawn_quizzes(next);
                }
            }
            ConsoleSignal::UserToggleActive { id, active } => self.spawn_user_toggle(id, active),
            ConsoleSignal::QuizToggleActive { id, active } => self.spawn_quiz_toggle(id, active),
            ConsoleSignal::TutorialTogglePublished { id, published } => {
                self.spawn_tutorial_toggle(id, published)
            }
            ConsoleSignal::CreateQuiz { subject_id, title } => {
                self.spawn_create_quiz(subject_id, title)
            }
            ConsoleSignal::ChatSend { text } => {
                if !self.chat_busy {
                    self.chat_messages.push(ChatMessage::user(text));
                    self.chat_busy = true;
                    self.spawn_chat();
                }
            }
        }
        self.push_update();
    }

    /// First visit to a page loads its data; later visits are free.
    fn ensure_loaded(&mut self, page: ConsolePage) {
        match page {
            ConsolePage::Dashboard => {
                if self.stats.is_none() {
                    self.spawn_stats();
                }
            }
            ConsolePage::Users => {
                if self.users.is_none() {
                    self.spawn_users(1);
                }
            }
            ConsolePage::Catalog => {
                if self.cascade.options(CatalogLevel::College).is_empty()
                    && !self.cascade.is_loading(CatalogLevel::College)
                {
                    let ticket = self.cascade.begin_load_roots();
                    self.spawn_options(ticket);
                }
            }
            ConsolePage::Quizzes => {
                if self.quizzes.is_none() {
                    self.spawn_quizzes(1);
                }
            }
            // The tutorials pane follows the cascade, so revisiting it
            // after picking a different subject re-fetches.
            ConsolePage::Tutorials => {
                if let Some((scope, label)) = self.tutorial_scope()
                    && self.tutorials.as_ref().is_none_or(|(_, held)| held != &label)
                {
                    self.spawn_tutorials(scope, label);
                }
            }
            ConsolePage::Chat => {}
        }
    }

    fn refresh(&mut self, page: ConsolePage) {
        match page {
            ConsolePage::Dashboard => self.spawn_stats(),
            ConsolePage::Users => {
                let current = self.users.as_ref().map(|(_, page)| *page).unwrap_or(1);
                self.spawn_users(current);
            }
            // Re-issues the fetch for every reachable level, which doubles
            // as the retry after a failed load.
            ConsolePage::Catalog => {
                for level in CatalogLevel::ALL {
                    if self.cascade.enabled(level)
                        && let Ok(ticket) = self.cascade.reload(level)
                    {
                        self.spawn_options(ticket);
                    }
                }
            }
            ConsolePage::Quizzes => {
                let current = self.quizzes.as_ref().map(|(_, page)| *page).unwrap_or(1);
                self.spawn_quizzes(current);
            }
            ConsolePage::Tutorials => {
                if let Some((scope, label)) = self.tutorial_scope() {
                    self.spawn_tutorials(scope, label);
                }
            }
            ConsolePage::Chat => {}
        }
    }

    fn apply_done(&mut self, done: Done) {
        match done {
            Done::Options(ticket, result) => {
                if self.cascade.apply_fetch(&ticket, result) == FetchOutcome::Failed {
                    self.status = Some((
                        StatusLevel::Warning,
                        format!("couldn't load {} options (r retries)", ticket.level),
                    ));
                }
            }
            Done::Stats(Ok(stats)) => self.stats = Some(stats),
            Done::Stats(Err(err)) => {
                self.status = Some((StatusLevel::Error, format!("stats: {}", err)));
            }
            Done::Users(page, Ok(data)) => self.users = Some((data, page)),
            Done::Users(_, Err(err)) => {
                self.status = Some((StatusLevel::Error, format!("accounts: {}", err)));
            }
            Done::Quizzes(page, Ok(data)) => self.quizzes = Some((data, page)),
            Done::Quizzes(_, Err(err)) => {
                self.status = Some((StatusLevel::Error, format!("quizzes: {}", err)));
            }
            Done::Tutorials(label, Ok(files)) => self.tutorials = Some((files, label)),
            Done::Tutorials(_, Err(err)) => {
                self.status = Some((StatusLevel::Error, format!("tutorials: {}", err)));
            }
            Done::ChatReply(Ok(reply)) => {
                self.chat_busy = false;
                self.chat_messages
                    .push(ChatMessage::assistant(reply.trim()));
            }
            Done::ChatReply(Err(err)) => {
                self.chat_busy = false;
                // Drop the unanswered question so it can be re-sent as-is.
                self.chat_messages.pop();
                self.status = Some((StatusLevel::Error, format!("assistant: {}", err)));
            }
            Done::Action(page, label, Ok(())) => {
                self.status = Some((StatusLevel::Info, label.to_string()));
                self.refresh(page);
            }
            Done::Action(_, _, Err(err)) => {
                self.status = Some((StatusLevel::Error, err));
            }
        }
    }

    /// Scope for the tutorials pane: deepest of subject then course, with
    /// a human label for the pane title.
    fn tutorial_scope(&self) -> Option<(TutorialScope, String)> {
        if let Some(subject) = self.cascade.subject_id() {
            let label = self.level_label(CatalogLevel::Subject, subject);
            return Some((
                TutorialScope::Subject(subject.to_string()),
                format!("subject {}", label),
            ));
        }
        if let Some(course) = self.cascade.course_id() {
            let label = self.level_label(CatalogLevel::Course, course);
            return Some((
                TutorialScope::Course(course.to_string()),
                format!("course {}", label),
            ));
        }
        None
    }

    fn level_label(&self, level: CatalogLevel, id: &str) -> String {
        self.cascade
            .selected_option(level)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn view_model(&self) -> ConsoleViewModel {
        build_console_view_model(
            &self.server,
            Some(&self.identifier),
            self.status
                .as_ref()
                .map(|(level, text)| (*level, text.as_str())),
            self.stats.as_ref(),
            &self.cascade,
            self.users.as_ref().map(|(data, page)| (data, *page)),
            self.quizzes.as_ref().map(|(data, page)| (data, *page)),
            self.tutorials
                .as_ref()
                .map(|(files, label)| (files.as_slice(), label.as_str())),
            &self.chat_model,
            &self.chat_messages,
            self.chat_busy,
        )
    }

    fn push_update(&self) {
        // A send failure means the screen is gone; the loop notices via
        // the signal channel.
        let _ = self.tui.update(self.view_model());
    }

    // ---- background fetches ----

    fn spawn_options(&self, ticket: FetchTicket) {
        let client = self.client.clone();
        let tx = self.done_tx.clone();
        self.runtime.spawn(async move {
            let result = client
                .catalog()
                .options_at(ticket.level, ticket.parent.as_deref())
                .await
                .map_err(|err| err.to_string());
            let _ = tx.send(Done::Options(ticket, result));
        });
    }

    fn spawn_stats(&self) {
        let client = self.client.clone();
        let tx = self.done_tx.clone();
        self.runtime.spawn(async move {
            let result = client.stats().await.map_err(|err| err.to_string());
            let _ = tx.send(Done::Stats(result));
        });
    }

    fn spawn_users(&self, page: u64) {
        let client = self.client.clone();
        let tx = self.done_tx.clone();
        let query = UserQuery {
            page: Some(page),
            limit: Some(self.page_size),
            ..Default::default()
        };
        self.runtime.spawn(async move {
            let result = client
                .users()
                .list(&query)
                .await
                .map_err(|err| err.to_string());
            let _ = tx.send(Done::Users(page, result));
        });
    }

    fn spawn_quizzes(&self, page: u64) {
        let client = self.client.clone();
        let tx = self.done_tx.clone();
        let query = QuizQuery {
            page: Some(page),
            limit: Some(self.page_size),
            ..Default::default()
        };
        self.runtime.spawn(async move {
            let result = client
                .quizzes()
                .list(&query)
                .await
                .map_err(|err| err.to_string());
            let _ = tx.send(Done::Quizzes(page, result));
        });
    }

    fn spawn_tutorials(&self, scope: TutorialScope, label: String) {
        let client = self.client.clone();
        let tx = self.done_tx.clone();
        let query = TutorialQuery {
            limit: Some(self.page_size),
            ..Default::default()
        };
        self.runtime.spawn(async move {
            let result = client
                .tutorials()
                .list(&scope, &query)
                .await
                .map(|page| page.items)
                .map_err(|err| err.to_string());
            let _ = tx.send(Done::Tutorials(label, result));
        });
    }

    fn spawn_chat(&self) {
        let client = self.client.clone();
        let tx = self.done_tx.clone();
        let model = self.chat_model.clone();
        let messages = self.chat_messages.clone();
        self.runtime.spawn(async move {
            let result = client
                .ai()
                .chat(&model, &messages)
                .await
                .map_err(|err| err.to_string());
            let _ = tx.send(Done::ChatReply(result));
        });
    }

    fn spawn_user_toggle(&self, id: String, active: bool) {
        let client = self.client.clone();
        let tx = self.done_tx.clone();
        let label = if active {
            "Account activated"
        } else {
            "Account deactivated"
        };
        self.runtime.spawn(async move {
            let result = client
                .users()
                .set_status(&id, active)
                .await
                .map_err(|err| err.to_string());
            let _ = tx.send(Done::Action(ConsolePage::Users, label, result));
        });
    }

    fn spawn_quiz_toggle(&self, id: String, active: bool) {
        let client = self.client.clone();
        let tx = self.done_tx.clone();
        let label = if active {
            "Quiz activated"
        } else {
            "Quiz deactivated"
        };
        self.runtime.spawn(async move {
            let result = client
                .quizzes()
                .set_active(&id, active)
                .await
                .map_err(|err| err.to_string());
            let _ = tx.send(Done::Action(ConsolePage::Quizzes, label, result));
        });
    }

    fn spawn_tutorial_toggle(&self, id: String, published: bool) {
        let client = self.client.clone();
        let tx = self.done_tx.clone();
        let label = if published {
            "Tutorial published"
        } else {
            "Tutorial unpublished"
        };
        self.runtime.spawn(async move {
            let result = client
                .tutorials()
                .set_published(&id, published)
                .await
                .map_err(|err| err.to_string());
            let _ = tx.send(Done::Action(ConsolePage::Tutorials, label, result));
        });
    }

    fn spawn_create_quiz(&self, subject_id: String, title: String) {
        let client = self.client.clone();
        let tx = self.done_tx.clone();
        self.runtime.spawn(async move {
            let result = client
                .quizzes()
                .create(&NewQuiz {
                    title: &title,
                    description: None,
                    subject: &subject_id,
                })
                .await
                .map_err(|err| err.to_string());
            let _ = tx.send(Done::Action(ConsolePage::Quizzes, "Quiz created", result));
        });
    }
}

/// Next page number for a pager signal; `None` when already at the edge
/// or nothing is loaded yet.
fn flip_page<T>(loaded: Option<&(Page<T>, u64)>, forward: bool) -> Option<u64> {
    let (data, current) = loaded?;
    let next = if forward {
        if *current >= data.pages() {
            return None;
        }
        current + 1
    } else {
        if *current <= 1 {
            return None;
        }
        current - 1
    };
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use acadex_types::Pagination;

    #[test]
    fn test_flip_page_stops_at_edges() {
        let page: Page<u32> = Page {
            items: Vec::new(),
            pagination: Some(Pagination {
                total: 45,
                pages: 5,
                page: Some(1),
                limit: Some(10),
            }),
        };

        assert_eq!(flip_page(Some(&(page.clone(), 1)), true), Some(2));
        assert_eq!(flip_page(Some(&(page.clone(), 1)), false), None);
        assert_eq!(flip_page(Some(&(page.clone(), 5)), true), None);
        assert_eq!(flip_page(Some(&(page, 5)), false), Some(4));
        assert_eq!(flip_page::<u32>(None, true), None);
    }
}
