use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, InitViewModel, StatusBadge,
};

pub fn present_init(
    config_path: &str,
    server: &str,
    created: bool,
) -> CommandResultViewModel<InitViewModel> {
    let content = InitViewModel {
        config_path: config_path.to_string(),
        server: server.to_string(),
        created,
    };

    let result = CommandResultViewModel::new(content);

    // `created == false` means an existing file was overwritten via --force;
    // a plain re-run errors out before reaching the presenter.
    let badge = if created {
        StatusBadge::success("Configuration written")
    } else {
        StatusBadge::success("Configuration overwritten")
    };

    result.with_badge(badge).with_suggestion(
        Guidance::new("Sign in next").with_command("acadex login <username-or-email>"),
    )
}
