use acadex_types::User;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, LoginViewModel, MessageViewModel, ProfileViewModel,
    RegisterViewModel, StatusBadge,
};

pub fn present_login(identifier: &str, server: &str) -> CommandResultViewModel<LoginViewModel> {
    let content = LoginViewModel {
        identifier: identifier.to_string(),
        server: server.to_string(),
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success("Signed in"))
        .with_suggestion(Guidance::new("Check who you are").with_command("acadex whoami"))
        .with_suggestion(Guidance::new("See platform totals").with_command("acadex stats"))
}

pub fn present_logout(existed: bool) -> CommandResultViewModel<MessageViewModel> {
    if existed {
        CommandResultViewModel::new(MessageViewModel::new("The stored session token was removed."))
            .with_badge(StatusBadge::success("Signed out"))
    } else {
        CommandResultViewModel::new(MessageViewModel::new(
            "No session was stored; nothing to remove.",
        ))
        .with_badge(StatusBadge::info("Not signed in"))
    }
}

pub fn present_profile(user: &User) -> CommandResultViewModel<ProfileViewModel> {
    let content = ProfileViewModel {
        id: user.id.clone(),
        name: user.name.clone(),
        username: user.username.clone(),
        email: user.email.clone(),
        role: user.role.to_string(),
        active: user.active,
        faculty: user.faculty.clone(),
        department: user.department.clone(),
        level: user.level.clone(),
        created_at: user.created_at,
    };

    let mut result = CommandResultViewModel::new(content);
    if !user.active {
        result = result.with_badge(StatusBadge::warning("This account is deactivated"));
    }
    result
}

pub fn present_register(
    name: &str,
    username: &str,
    email: &str,
    server: &str,
    message: String,
) -> CommandResultViewModel<RegisterViewModel> {
    let content = RegisterViewModel {
        name: name.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        server: server.to_string(),
        message,
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success("Account created"))
        .with_suggestion(
            Guidance::new("Sign in with the new account")
                .with_command(format!("acadex login {}", username)),
        )
}

pub fn present_promote(role: &str, message: String) -> CommandResultViewModel<MessageViewModel> {
    CommandResultViewModel::new(MessageViewModel::new(message))
        .with_badge(StatusBadge::success(format!("Promotion to {} accepted", role)))
        .with_suggestion(
            Guidance::new("Sign in again so the new role takes effect")
                .with_command("acadex login <identifier>"),
        )
}
