mod app;
mod components;
mod console_event;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use app::{InputMode, UiState};
pub use console_event::{ConsoleEvent, ConsoleSignal};

use crate::presentation::view_models::{ConsolePage, ConsoleViewModel};

/// Handler-side handle to the console screen. The terminal itself is owned
/// by [`ConsoleTui::run`], which the handler parks on a dedicated thread.
pub struct ConsoleTui {
    tx: Sender<ConsoleEvent>,
}

impl ConsoleTui {
    pub fn new() -> (Self, Receiver<ConsoleEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    pub fn update(&self, vm: ConsoleViewModel) -> Result<()> {
        self.tx
            .send(ConsoleEvent::Update(Box::new(vm)))
            .map_err(|e| anyhow::anyhow!("console screen went away: {}", e))
    }

    pub fn quit(&self) -> Result<()> {
        self.tx
            .send(ConsoleEvent::Quit)
            .map_err(|e| anyhow::anyhow!("console screen went away: {}", e))
    }

    pub fn run(rx: Receiver<ConsoleEvent>, signals: Sender<ConsoleSignal>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let mut state = UiState::new();
        let mut should_quit = false;

        let tick_rate = Duration::from_millis(250);
        let mut last_tick = std::time::Instant::now();

        while !should_quit {
            terminal.draw(|f| {
                ui::draw(f, &mut state);
            })?;

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)?
                && let Event::Key(key) = event::read()?
            {
                handle_key(key.code, &mut state, &signals, &mut should_quit);
            }

            while let Ok(console_event) = rx.try_recv() {
                match console_event {
                    ConsoleEvent::Update(vm) => state.apply(*vm),
                    ConsoleEvent::Quit => should_quit = true,
                }
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = std::time::Instant::now();
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }
}

fn handle_key(
    code: KeyCode,
    state: &mut UiState,
    signals: &Sender<ConsoleSignal>,
    should_quit: &mut bool,
) {
    match state.input_mode {
        InputMode::Chat => handle_chat_key(code, state, signals),
        InputMode::QuizTitle => handle_quiz_title_key(code, state, signals),
        InputMode::Normal => handle_normal_key(code, state, signals, should_quit),
    }
}

fn handle_chat_key(code: KeyCode, state: &mut UiState, signals: &Sender<ConsoleSignal>) {
    match code {
        KeyCode::Enter => {
            let text = state.input.trim().to_string();
            if !text.is_empty() && !state.vm.chat.busy {
                state.input.clear();
                let _ = signals.send(ConsoleSignal::ChatSend { text });
            }
        }
        KeyCode::Backspace => {
            state.input.pop();
        }
        KeyCode::Esc => {
            state.set_page(ConsolePage::Dashboard);
        }
        KeyCode::Tab => {
            state.cycle_page(true);
            let _ = signals.send(ConsoleSignal::PageShown(state.page));
        }
        KeyCode::BackTab => {
            state.cycle_page(false);
            let _ = signals.send(ConsoleSignal::PageShown(state.page));
        }
        KeyCode::Char(c) => state.input.push(c),
        _ => {}
    }
}

fn handle_quiz_title_key(code: KeyCode, state: &mut UiState, signals: &Sender<ConsoleSignal>) {
    match code {
        KeyCode::Enter => {
            let title = state.input.trim().to_string();
            let subject_id = state
                .vm
                .cascade
                .resolved
                .as_ref()
                .filter(|resolved| resolved.level == "subject")
                .map(|resolved| resolved.id.clone());
            if let (false, Some(subject_id)) = (title.is_empty(), subject_id) {
                let _ = signals.send(ConsoleSignal::CreateQuiz { subject_id, title });
            }
            state.input.clear();
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            state.input.clear();
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            state.input.pop();
        }
        KeyCode::Char(c) => state.input.push(c),
        _ => {}
    }
}

fn handle_normal_key(
    code: KeyCode,
    state: &mut UiState,
    signals: &Sender<ConsoleSignal>,
    should_quit: &mut bool,
) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => {
            let _ = signals.send(ConsoleSignal::Quit);
            *should_quit = true;
        }
        KeyCode::Tab => {
            state.cycle_page(true);
            let _ = signals.send(ConsoleSignal::PageShown(state.page));
        }
        KeyCode::BackTab => {
            state.cycle_page(false);
            let _ = signals.send(ConsoleSignal::PageShown(state.page));
        }
        KeyCode::Char(c @ '1'..='6') => {
            let idx = (c as usize) - ('1' as usize);
            state.set_page(ConsolePage::ALL[idx]);
            let _ = signals.send(ConsoleSignal::PageShown(state.page));
        }
        KeyCode::Down | KeyCode::Char('j') => state.move_cursor(true),
        KeyCode::Up | KeyCode::Char('k') => state.move_cursor(false),
        KeyCode::Left | KeyCode::Char('h') if state.page == ConsolePage::Catalog => {
            state.move_focus(false)
        }
        KeyCode::Right | KeyCode::Char('l') if state.page == ConsolePage::Catalog => {
            state.move_focus(true)
        }
        KeyCode::Enter if state.page == ConsolePage::Catalog => {
            if let Some((level, id)) = state.cascade_pick() {
                let _ = signals.send(ConsoleSignal::CascadeSelect { level, id });
            }
        }
        KeyCode::Backspace if state.page == ConsolePage::Catalog => {
            let _ = signals.send(ConsoleSignal::CascadeClear {
                level: state.focused_level(),
            });
        }
        KeyCode::Char('n') => match state.page {
            ConsolePage::Catalog => {
                let subject_resolved = state
                    .vm
                    .cascade
                    .resolved
                    .as_ref()
                    .is_some_and(|resolved| resolved.level == "subject");
                if subject_resolved {
                    state.input_mode = InputMode::QuizTitle;
                    state.input.clear();
                }
            }
            ConsolePage::Users => {
                let _ = signals.send(ConsoleSignal::UsersPage { forward: true });
            }
            ConsolePage::Quizzes => {
                let _ = signals.send(ConsoleSignal::QuizzesPage { forward: true });
            }
            _ => {}
        },
        KeyCode::Char('p') => match state.page {
            ConsolePage::Users => {
                let _ = signals.send(ConsoleSignal::UsersPage { forward: false });
            }
            ConsolePage::Quizzes => {
                let _ = signals.send(ConsoleSignal::QuizzesPage { forward: false });
            }
            _ => {}
        },
        KeyCode::Char(' ') => match state.page {
            ConsolePage::Users => {
                if let Some((id, active)) = state.selected_user() {
                    let _ = signals.send(ConsoleSignal::UserToggleActive {
                        id: id.to_string(),
                        active: !active,
                    });
                }
            }
            ConsolePage::Quizzes => {
                if let Some((id, active)) = state.selected_quiz() {
                    let _ = signals.send(ConsoleSignal::QuizToggleActive {
                        id: id.to_string(),
                        active: !active,
                    });
                }
            }
            ConsolePage::Tutorials => {
                if let Some((id, published)) = state.selected_tutorial() {
                    let _ = signals.send(ConsoleSignal::TutorialTogglePublished {
                        id: id.to_string(),
                        published: !published,
                    });
                }
            }
            _ => {}
        },
        KeyCode::Char('r') => {
            let _ = signals.send(ConsoleSignal::Refresh(state.page));
        }
        _ => {}
    }
}
