use std::fmt;

use crate::presentation::view_models::{CreateView, StatsViewModel};

impl CreateView for StatsViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(StatsView { data: self })
    }
}

struct StatsView<'a> {
    data: &'a StatsViewModel,
}

impl<'a> fmt::Display for StatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Platform totals on {}", self.data.server)?;
        writeln!(f)?;
        writeln!(f, "{:<10} {}", "Users:", self.data.users)?;
        writeln!(f, "{:<10} {}", "Courses:", self.data.courses)?;
        writeln!(f, "{:<10} {}", "Subjects:", self.data.subjects)?;
        writeln!(f, "{:<10} {}", "Quizzes:", self.data.quizzes)?;
        writeln!(f, "{:<10} {}", "PDFs:", self.data.pdfs)
    }
}
