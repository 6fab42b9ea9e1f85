use acadex_types::{CatalogLevel, CatalogOption};

use crate::error::{Error, Result};
use crate::source::FetchResult;

/// Identifies one child-options fetch.
///
/// The generation is captured when the fetch starts; a completion whose
/// generation no longer matches the level's current one is stale and must
/// be discarded. This is what makes rapid reselection safe: only the
/// latest fetch per level can ever land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Level whose options are being fetched.
    pub level: CatalogLevel,
    /// Selected parent id the fetch is scoped to; `None` for the root level.
    pub parent: Option<String>,
    pub generation: u64,
}

/// What `apply_fetch` did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Options stored for the level.
    Updated,
    /// Fetch failed; the level now has an empty option list and an error
    /// message. [`CascadeState::reload`] retries.
    Failed,
    /// Generation mismatch; nothing changed.
    Stale,
}

#[derive(Debug, Clone, Default)]
struct LevelState {
    selection: Option<String>,
    options: Vec<CatalogOption>,
    generation: u64,
    loading: bool,
    error: Option<String>,
}

impl LevelState {
    /// Drop selection, options and any in-flight fetch. Bumping the
    /// generation is what invalidates the in-flight fetch.
    fn reset(&mut self) {
        self.selection = None;
        self.options.clear();
        self.generation += 1;
        self.loading = false;
        self.error = None;
    }

    fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }
}

/// Four-level dependent selection over the catalog hierarchy
/// (college, department, course, subject).
///
/// Pure state machine with no I/O: `select` and `begin_load_roots` hand
/// back a [`FetchTicket`] when options need loading, and the caller feeds
/// the completion into [`apply_fetch`]. All ordering rules live here so
/// every surface (TUI picker, path resolution) behaves identically:
///
/// - setting a level clears every deeper selection and option list in the
///   same step;
/// - re-selecting the already-selected value is a no-op;
/// - a level is enabled only once its parent is selected;
/// - stale fetch completions are dropped by generation check.
#[derive(Debug, Clone, Default)]
pub struct CascadeState {
    levels: [LevelState; CatalogLevel::COUNT],
}

impl CascadeState {
    pub fn new() -> Self {
        Self::default()
    }

    fn level(&self, level: CatalogLevel) -> &LevelState {
        &self.levels[level.index()]
    }

    fn level_mut(&mut self, level: CatalogLevel) -> &mut LevelState {
        &mut self.levels[level.index()]
    }

    fn begin_level_fetch(&mut self, level: CatalogLevel) -> FetchTicket {
        let parent = level
            .parent()
            .and_then(|parent| self.selection(parent))
            .map(String::from);
        let generation = self.level_mut(level).begin_fetch();
        FetchTicket {
            level,
            parent,
            generation,
        }
    }

    /// Start loading the root (college) options.
    pub fn begin_load_roots(&mut self) -> FetchTicket {
        self.begin_level_fetch(CatalogLevel::College)
    }

    /// Re-issue the fetch for a level's options, scoped to the current
    /// parent selection. Selections are left alone; this is the retry
    /// path after a failed fetch and the refresh path for loaded lists.
    pub fn reload(&mut self, level: CatalogLevel) -> Result<FetchTicket> {
        if !self.enabled(level) {
            return Err(Error::LevelDisabled(level));
        }
        Ok(self.begin_level_fetch(level))
    }

    /// A level is selectable once its parent is selected; the root always is.
    pub fn enabled(&self, level: CatalogLevel) -> bool {
        match level.parent() {
            None => true,
            Some(parent) => self.level(parent).selection.is_some(),
        }
    }

    pub fn selection(&self, level: CatalogLevel) -> Option<&str> {
        self.level(level).selection.as_deref()
    }

    pub fn options(&self, level: CatalogLevel) -> &[CatalogOption] {
        &self.level(level).options
    }

    pub fn selected_option(&self, level: CatalogLevel) -> Option<&CatalogOption> {
        let state = self.level(level);
        let id = state.selection.as_deref()?;
        state.options.iter().find(|option| option.id == id)
    }

    pub fn is_loading(&self, level: CatalogLevel) -> bool {
        self.level(level).loading
    }

    pub fn last_error(&self, level: CatalogLevel) -> Option<&str> {
        self.level(level).error.as_deref()
    }

    /// Deepest selected level and its id.
    pub fn resolved(&self) -> Option<(CatalogLevel, &str)> {
        CatalogLevel::ALL
            .iter()
            .rev()
            .find_map(|&level| self.selection(level).map(|id| (level, id)))
    }

    pub fn subject_id(&self) -> Option<&str> {
        self.selection(CatalogLevel::Subject)
    }

    pub fn course_id(&self) -> Option<&str> {
        self.selection(CatalogLevel::Course)
    }

    /// Select an option at a level.
    ///
    /// Selecting the value that is already selected changes nothing and
    /// returns no ticket. Otherwise every deeper level is reset in the
    /// same step, and when the level has a child a fetch ticket for the
    /// child's options is returned.
    pub fn select(&mut self, level: CatalogLevel, id: &str) -> Result<Option<FetchTicket>> {
        if !self.enabled(level) {
            return Err(Error::LevelDisabled(level));
        }
        if self.selection(level) == Some(id) {
            return Ok(None);
        }
        if !self.level(level).options.iter().any(|option| option.id == id) {
            return Err(Error::UnknownOption {
                level,
                id: id.to_string(),
            });
        }

        self.level_mut(level).selection = Some(id.to_string());
        self.reset_below(level);

        let Some(child) = level.child() else {
            return Ok(None);
        };
        Ok(Some(self.begin_level_fetch(child)))
    }

    /// Clear the selection at a level and everything below it. The
    /// level's own option list stays so the user can pick again; no fetch
    /// is started.
    pub fn clear(&mut self, level: CatalogLevel) {
        self.level_mut(level).selection = None;
        self.reset_below(level);
    }

    fn reset_below(&mut self, level: CatalogLevel) {
        for index in (level.index() + 1)..CatalogLevel::COUNT {
            self.levels[index].reset();
        }
    }

    /// Feed a fetch completion back in. Stale completions (ticket
    /// generation differs from the level's current one) are discarded
    /// without touching any state.
    pub fn apply_fetch(&mut self, ticket: &FetchTicket, outcome: FetchResult) -> FetchOutcome {
        let state = self.level_mut(ticket.level);
        if ticket.generation != state.generation {
            return FetchOutcome::Stale;
        }
        state.loading = false;
        match outcome {
            Ok(options) => {
                state.options = options;
                state.error = None;
                FetchOutcome::Updated
            }
            Err(message) => {
                state.options.clear();
                state.error = Some(message);
                FetchOutcome::Failed
            }
        }
    }
}
