use std::fmt;

use crate::presentation::formatters::{format_date, humanize_bytes, terminal_width, truncate};
use crate::presentation::view_models::{
    CreateView, TutorialListViewModel, TutorialUploadViewModel,
};

// --------------------------------------------------------
// Tutorial List View
// --------------------------------------------------------

impl CreateView for TutorialListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(TutorialListView { data: self })
    }
}

struct TutorialListView<'a> {
    data: &'a TutorialListViewModel,
}

impl<'a> fmt::Display for TutorialListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Tutorials for {}:", self.data.scope)?;
        writeln!(f)?;

        if self.data.files.is_empty() {
            return Ok(());
        }

        writeln!(
            f,
            "{:<26} {:<36} {:<12} CREATED",
            "ID", "TITLE", "VISIBILITY"
        )?;
        writeln!(f, "{}", "-".repeat(terminal_width().min(88)))?;

        for file in &self.data.files {
            writeln!(
                f,
                "{:<26} {:<36} {:<12} {}",
                file.id,
                truncate(&file.title, 35),
                if file.published { "published" } else { "hidden" },
                file.created_at
                    .as_ref()
                    .map(format_date)
                    .unwrap_or_else(|| "-".to_string())
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Page {} of {} ({} total)",
            self.data.page,
            self.data.pages.max(1),
            self.data.total
        )
    }
}

// --------------------------------------------------------
// Tutorial Upload View
// --------------------------------------------------------

impl CreateView for TutorialUploadViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(TutorialUploadView { data: self })
    }
}

struct TutorialUploadView<'a> {
    data: &'a TutorialUploadViewModel,
}

impl<'a> fmt::Display for TutorialUploadView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:<7} {}", "Title:", self.data.title)?;
        writeln!(f, "{:<7} {}", "Scope:", self.data.scope)?;
        writeln!(
            f,
            "{:<7} {} ({})",
            "File:",
            self.data.file,
            humanize_bytes(self.data.bytes)
        )
    }
}
