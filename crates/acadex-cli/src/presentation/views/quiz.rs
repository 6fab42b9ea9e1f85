use std::fmt;

use crate::presentation::formatters::{format_date, terminal_width, truncate};
use crate::presentation::view_models::{CreateView, QuizImportViewModel, QuizListViewModel};

// --------------------------------------------------------
// Quiz List View
// --------------------------------------------------------

impl CreateView for QuizListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(QuizListView { data: self })
    }
}

struct QuizListView<'a> {
    data: &'a QuizListViewModel,
}

impl<'a> fmt::Display for QuizListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.quizzes.is_empty() {
            return Ok(());
        }

        writeln!(
            f,
            "{:<26} {:<32} {:<22} {:<10} {:<10} CREATED",
            "ID", "TITLE", "SUBJECT", "STATUS", "QUESTIONS"
        )?;
        writeln!(f, "{}", "-".repeat(terminal_width().min(112)))?;

        for quiz in &self.data.quizzes {
            writeln!(
                f,
                "{:<26} {:<32} {:<22} {:<10} {:<10} {}",
                quiz.id,
                truncate(&quiz.title, 31),
                truncate(&quiz.subject, 21),
                if quiz.active { "active" } else { "inactive" },
                quiz.questions
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                quiz.created_at
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
// Quiz Import View
// --------------------------------------------------------

impl CreateView for QuizImportViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(QuizImportView { data: self })
    }
}

struct QuizImportView<'a> {
    data: &'a QuizImportViewModel,
}

impl<'a> fmt::Display for QuizImportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:<6} {}", "File:", self.data.file)?;
        writeln!(f, "{:<6} {}", "Quiz:", self.data.quiz_id)?;
        writeln!(f, "{:<6} {}", "Rows:", self.data.rows)?;
        if self.data.dry_run {
            writeln!(f, "{:<6} dry run (no changes written)", "Mode:")?;
        }

        if !self.data.issues.is_empty() {
            writeln!(f)?;
            writeln!(f, "Problems:")?;
            for issue in &self.data.issues {
                writeln!(
                    f,
                    "  line {}: {} - {}",
                    issue.line, issue.field, issue.message
                )?;
            }
        }

        if let Some(report) = &self.data.server_report {
            writeln!(f)?;
            writeln!(
                f,
                "Server result: {} total, {} inserted, {} skipped",
                report.total, report.inserted, report.skipped
            )?;
            for error in &report.errors {
                writeln!(f, "  - {}", error)?;
            }
        }

        Ok(())
    }
}
