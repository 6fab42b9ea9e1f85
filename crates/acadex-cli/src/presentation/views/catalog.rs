use std::fmt;

use crate::presentation::formatters::{single_line, terminal_width, truncate};
use crate::presentation::view_models::{
    CatalogCreatedViewModel, CatalogListViewModel, CreateView, ResolvedPathViewModel,
};

// --------------------------------------------------------
// Catalog List View (all four levels)
// --------------------------------------------------------

impl CreateView for CatalogListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(CatalogListView { data: self })
    }
}

struct CatalogListView<'a> {
    data: &'a CatalogListViewModel,
}

impl<'a> fmt::Display for CatalogListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(scope) = &self.data.scope {
            writeln!(f, "{}s in {}:", self.data.level, scope)?;
            writeln!(f)?;
        }

        if self.data.entries.is_empty() {
            return Ok(());
        }

        writeln!(
            f,
            "{:<26} {:<10} {:<32} {:<22} DETAIL",
            "ID", "CODE", "NAME", "PARENT"
        )?;
        writeln!(f, "{}", "-".repeat(terminal_width().min(100)))?;

        for entry in &self.data.entries {
            // Subject descriptions are free text; keep the row on one line.
            let detail = entry
                .detail
                .as_deref()
                .map(|d| truncate(&single_line(d), 30))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:<26} {:<10} {:<32} {:<22} {}",
                entry.id,
                entry.code.as_deref().unwrap_or("-"),
                truncate(&entry.name, 31),
                truncate(entry.parent.as_deref().unwrap_or("-"), 21),
                detail
            )?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Catalog Created View
// --------------------------------------------------------

impl CreateView for CatalogCreatedViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(CatalogCreatedView { data: self })
    }
}

struct CatalogCreatedView<'a> {
    data: &'a CatalogCreatedViewModel,
}

impl<'a> fmt::Display for CatalogCreatedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Created {} '{}'", self.data.level, self.data.name)?;
        if let Some(code) = &self.data.code {
            write!(f, " ({})", code)?;
        }
        if let Some(parent) = &self.data.parent {
            write!(f, " under {}", parent)?;
        }
        writeln!(f)
    }
}

// --------------------------------------------------------
// Resolved Path View
// --------------------------------------------------------

impl CreateView for ResolvedPathViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ResolvedPathView { data: self })
    }
}

struct ResolvedPathView<'a> {
    data: &'a ResolvedPathViewModel,
}

impl<'a> fmt::Display for ResolvedPathView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let labels: Vec<&str> = self
            .data
            .segments
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        writeln!(f, "{}", labels.join(" / "))?;
        writeln!(f)?;

        for segment in &self.data.segments {
            writeln!(
                f,
                "  {:<12} {:<32} {}",
                segment.level,
                truncate(&segment.label, 31),
                segment.id
            )?;
        }

        if self.data.subject_id.is_some() || self.data.course_id.is_some() {
            writeln!(f)?;
        }
        if let Some(course) = &self.data.course_id {
            writeln!(f, "Course id:  {}", course)?;
        }
        if let Some(subject) = &self.data.subject_id {
            writeln!(f, "Subject id: {}", subject)?;
        }

        Ok(())
    }
}
