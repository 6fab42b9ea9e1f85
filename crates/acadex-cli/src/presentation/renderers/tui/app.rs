use acadex_types::CatalogLevel;
use ratatui::widgets::ListState;

use crate::presentation::view_models::{ConsolePage, ConsoleViewModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    /// Typing a chat message.
    Chat,
    /// Typing a title for a quiz on the resolved subject.
    QuizTitle,
}

/// UI-side state: where the user is, never what the data is. The data
/// snapshot (`vm`) is replaced wholesale on every handler update and all
/// cursors are re-clamped against it.
pub(crate) struct UiState {
    pub page: ConsolePage,
    pub vm: ConsoleViewModel,
    pub users_list: ListState,
    pub quizzes_list: ListState,
    pub tutorials_list: ListState,
    pub cascade_focus: usize,
    pub cascade_lists: [ListState; 4],
    pub input: String,
    pub input_mode: InputMode,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            page: ConsolePage::Dashboard,
            vm: ConsoleViewModel::default(),
            users_list: ListState::default(),
            quizzes_list: ListState::default(),
            tutorials_list: ListState::default(),
            cascade_focus: 0,
            cascade_lists: Default::default(),
            input: String::new(),
            input_mode: InputMode::Normal,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a fresh snapshot and bring every cursor back into range.
    pub fn apply(&mut self, vm: ConsoleViewModel) {
        self.vm = vm;
        clamp(&mut self.users_list, self.vm.users.rows.len());
        clamp(&mut self.quizzes_list, self.vm.quizzes.rows.len());
        clamp(&mut self.tutorials_list, self.vm.tutorials.rows.len());
        for (idx, list) in self.cascade_lists.iter_mut().enumerate() {
            let len = self
                .vm
                .cascade
                .levels
                .get(idx)
                .map(|level| level.options.len())
                .unwrap_or(0);
            clamp(list, len);
        }
        if !self.focus_enabled() {
            self.cascade_focus = self.rightmost_enabled();
        }
    }

    pub fn set_page(&mut self, page: ConsolePage) {
        self.page = page;
        self.input_mode = match page {
            ConsolePage::Chat => InputMode::Chat,
            _ => InputMode::Normal,
        };
        if page != ConsolePage::Chat {
            self.input.clear();
        }
    }

    pub fn cycle_page(&mut self, forward: bool) {
        let count = ConsolePage::ALL.len();
        let current = self.page.index();
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.set_page(ConsolePage::ALL[next]);
    }

    pub fn move_cursor(&mut self, down: bool) {
        match self.page {
            ConsolePage::Users => step(&mut self.users_list, self.vm.users.rows.len(), down),
            ConsolePage::Quizzes => {
                step(&mut self.quizzes_list, self.vm.quizzes.rows.len(), down)
            }
            ConsolePage::Tutorials => step(
                &mut self.tutorials_list,
                self.vm.tutorials.rows.len(),
                down,
            ),
            ConsolePage::Catalog => {
                let len = self
                    .vm
                    .cascade
                    .levels
                    .get(self.cascade_focus)
                    .map(|level| level.options.len())
                    .unwrap_or(0);
                step(&mut self.cascade_lists[self.cascade_focus], len, down);
            }
            _ => {}
        }
    }

    /// Move cascade focus left or right, skipping levels whose parent has
    /// no selection yet.
    pub fn move_focus(&mut self, right: bool) {
        let mut idx = self.cascade_focus;
        loop {
            if right {
                if idx + 1 >= CatalogLevel::COUNT {
                    return;
                }
                idx += 1;
            } else {
                if idx == 0 {
                    return;
                }
                idx -= 1;
            }
            if self.level_enabled(idx) {
                self.cascade_focus = idx;
                return;
            }
        }
    }

    pub fn focused_level(&self) -> CatalogLevel {
        CatalogLevel::from_index(self.cascade_focus).unwrap_or(CatalogLevel::College)
    }

    /// (level, option id) under the cascade cursor, if any.
    pub fn cascade_pick(&self) -> Option<(CatalogLevel, String)> {
        let level_vm = self.vm.cascade.levels.get(self.cascade_focus)?;
        if !level_vm.enabled {
            return None;
        }
        let cursor = self.cascade_lists[self.cascade_focus].selected()?;
        let option = level_vm.options.get(cursor)?;
        Some((self.focused_level(), option.id.clone()))
    }

    pub fn selected_user(&self) -> Option<(&str, bool)> {
        let idx = self.users_list.selected()?;
        self.vm
            .users
            .rows
            .get(idx)
            .map(|row| (row.id.as_str(), row.active))
    }

    pub fn selected_quiz(&self) -> Option<(&str, bool)> {
        let idx = self.quizzes_list.selected()?;
        self.vm
            .quizzes
            .rows
            .get(idx)
            .map(|row| (row.id.as_str(), row.active))
    }

    pub fn selected_tutorial(&self) -> Option<(&str, bool)> {
        let idx = self.tutorials_list.selected()?;
        self.vm
            .tutorials
            .rows
            .get(idx)
            .map(|row| (row.id.as_str(), row.published))
    }

    fn level_enabled(&self, idx: usize) -> bool {
        self.vm
            .cascade
            .levels
            .get(idx)
            .map(|level| level.enabled)
            .unwrap_or(false)
    }

    fn focus_enabled(&self) -> bool {
        self.level_enabled(self.cascade_focus)
    }

    fn rightmost_enabled(&self) -> usize {
        (0..CatalogLevel::COUNT)
            .rev()
            .find(|&idx| self.level_enabled(idx))
            .unwrap_or(0)
    }
}

fn clamp(list: &mut ListState, len: usize) {
    match list.selected() {
        Some(_) if len == 0 => list.select(None),
        Some(idx) if idx >= len => list.select(Some(len - 1)),
        None if len > 0 => list.select(Some(0)),
        _ => {}
    }
}

fn step(list: &mut ListState, len: usize, down: bool) {
    if len == 0 {
        list.select(None);
        return;
    }
    let current = list.selected().unwrap_or(0);
    let next = if down {
        (current + 1).min(len - 1)
    } else {
        current.saturating_sub(1)
    };
    list.select(Some(next));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{
        CascadeLevelViewModel, CascadeOptionViewModel, CascadeViewModel,
    };

    fn level(enabled: bool, options: &[&str]) -> CascadeLevelViewModel {
        CascadeLevelViewModel {
            title: "College".to_string(),
            enabled,
            loading: false,
            error: None,
            options: options
                .iter()
                .map(|id| CascadeOptionViewModel {
                    id: id.to_string(),
                    label: id.to_string(),
                })
                .collect(),
            selected: None,
        }
    }

    fn vm_with_levels(levels: Vec<CascadeLevelViewModel>) -> ConsoleViewModel {
        ConsoleViewModel {
            cascade: CascadeViewModel {
                levels,
                resolved: None,
            },
            ..ConsoleViewModel::default()
        }
    }

    #[test]
    fn test_focus_skips_disabled_levels() {
        let mut state = UiState::new();
        state.apply(vm_with_levels(vec![
            level(true, &["a", "b"]),
            level(false, &[]),
            level(false, &[]),
            level(false, &[]),
        ]));
        state.page = ConsolePage::Catalog;

        state.move_focus(true);
        assert_eq!(state.cascade_focus, 0);

        // Enable the second level and focus moves.
        state.apply(vm_with_levels(vec![
            level(true, &["a", "b"]),
            level(true, &["x"]),
            level(false, &[]),
            level(false, &[]),
        ]));
        state.move_focus(true);
        assert_eq!(state.cascade_focus, 1);
    }

    #[test]
    fn test_cursor_clamps_when_options_shrink() {
        let mut state = UiState::new();
        state.apply(vm_with_levels(vec![
            level(true, &["a", "b", "c"]),
            level(false, &[]),
            level(false, &[]),
            level(false, &[]),
        ]));
        state.page = ConsolePage::Catalog;
        state.move_cursor(true);
        state.move_cursor(true);
        assert_eq!(state.cascade_lists[0].selected(), Some(2));

        state.apply(vm_with_levels(vec![
            level(true, &["a"]),
            level(false, &[]),
            level(false, &[]),
            level(false, &[]),
        ]));
        assert_eq!(state.cascade_lists[0].selected(), Some(0));
    }

    #[test]
    fn test_focus_falls_back_when_level_disabled() {
        let mut state = UiState::new();
        state.apply(vm_with_levels(vec![
            level(true, &["a"]),
            level(true, &["x"]),
            level(false, &[]),
            level(false, &[]),
        ]));
        state.move_focus(true);
        assert_eq!(state.cascade_focus, 1);

        // Parent cleared: child goes dark and focus falls back.
        state.apply(vm_with_levels(vec![
            level(true, &["a"]),
            level(false, &[]),
            level(false, &[]),
            level(false, &[]),
        ]));
        assert_eq!(state.cascade_focus, 0);
    }

    #[test]
    fn test_cascade_pick_requires_enabled_level() {
        let mut state = UiState::new();
        state.apply(vm_with_levels(vec![
            level(true, &["c-eng"]),
            level(false, &[]),
            level(false, &[]),
            level(false, &[]),
        ]));
        state.page = ConsolePage::Catalog;

        let (picked_level, id) = state.cascade_pick().unwrap();
        assert_eq!(picked_level, CatalogLevel::College);
        assert_eq!(id, "c-eng");

        state.cascade_focus = 1;
        assert!(state.cascade_pick().is_none());
    }
}
