use acadex_types::PlatformStats;

use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatsViewModel};

pub(crate) fn stats_view_model(server: &str, stats: &PlatformStats) -> StatsViewModel {
    StatsViewModel {
        server: server.to_string(),
        users: stats.users,
        courses: stats.courses,
        subjects: stats.subjects,
        quizzes: stats.quizzes,
        pdfs: stats.pdfs,
    }
}

pub fn present_stats(server: &str, stats: &PlatformStats) -> CommandResultViewModel<StatsViewModel> {
    let mut result = CommandResultViewModel::new(stats_view_model(server, stats));

    if result.content.quizzes == 0 {
        result = result.with_suggestion(
            Guidance::new("Create your first quiz")
                .with_command("acadex quiz create <TITLE> --path <COLLEGE/DEPT/COURSE/SUBJECT>"),
        );
    }

    result
}
