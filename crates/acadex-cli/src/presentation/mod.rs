//! # Presentation Layer
//!
//! Implements the user interface logic for the CLI as an adaptation of the
//! **MVVM (Model-View-ViewModel)** pattern, keeping domain logic
//! (`acadex-core`, `acadex-client`) strictly separate from output logic.
//!
//! ## Data Flow
//!
//! ### For console output (text/JSON):
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> Output
//!    (Controller)     (Converter)       (Data)          (Driver)   ==(Text)==> [ View ] --> Output
//! ```
//!
//! ### For the interactive console (TUI):
//! The handler thread owns domain state and ships ViewModel snapshots over a
//! channel; the renderer thread owns UI state (cursors, focus, input buffer)
//! and sends domain actions back as signals.
//!
//! ## Rules
//!
//! 1. **The JSON test**: ViewModels carry raw data (`active: bool`), never
//!    pre-formatted strings. `--format json` dumps the complete ViewModel.
//! 2. **Presenters are pure**: they decide totals, badges and when a tip is
//!    shown, and never touch formatting.
//! 3. **Views own layout**: column widths, colors and date formatting happen
//!    in `views/` (via `formatters/`), nowhere else.
//! 4. **TUI state split**: WHAT to display lives in the ViewModel snapshot;
//!    WHERE the user is (scroll, selection, focused cascade level) lives in
//!    the renderer's `UiState`. Cursors are clamped against data on every
//!    draw, never stored in the ViewModel.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};
