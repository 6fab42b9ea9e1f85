use std::fmt;

use crate::presentation::formatters::{format_date, terminal_width, truncate};
use crate::presentation::view_models::{
    CreateView, UserExportViewModel, UserListViewModel,
};

// --------------------------------------------------------
// User List View
// --------------------------------------------------------

impl CreateView for UserListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(UserListView { data: self })
    }
}

struct UserListView<'a> {
    data: &'a UserListViewModel,
}

impl<'a> fmt::Display for UserListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.users.is_empty() {
            return Ok(());
        }

        writeln!(
            f,
            "{:<26} {:<20} {:<26} {:<8} {:<12} CREATED",
            "ID", "NAME", "EMAIL", "ROLE", "STATUS"
        )?;
        writeln!(f, "{}", "-".repeat(terminal_width().min(104)))?;

        for user in &self.data.users {
            writeln!(
                f,
                "{:<26} {:<20} {:<26} {:<8} {:<12} {}",
                user.id,
                truncate(&user.name, 19),
                truncate(&user.email, 25),
                user.role,
                if user.active { "active" } else { "deactivated" },
                user.created_at
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
// User Export View
// --------------------------------------------------------

impl CreateView for UserExportViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(UserExportView { data: self })
    }
}

struct UserExportView<'a> {
    data: &'a UserExportViewModel,
}

impl<'a> fmt::Display for UserExportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Wrote {} ({})",
            self.data.path,
            crate::presentation::formatters::humanize_bytes(self.data.bytes)
        )
    }
}
