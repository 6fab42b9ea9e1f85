use acadex_types::{Page, Role, User};

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, MessageViewModel, StatusBadge, UserExportViewModel,
    UserListViewModel, UserRowViewModel,
};

pub(crate) fn user_row(user: &User) -> UserRowViewModel {
    UserRowViewModel {
        id: user.id.clone(),
        name: user.name.clone(),
        username: user.username.clone(),
        email: user.email.clone(),
        role: user.role.to_string(),
        active: user.active,
        created_at: user.created_at,
    }
}

pub fn present_user_list(
    page: &Page<User>,
    current_page: u64,
    filtered: bool,
) -> CommandResultViewModel<UserListViewModel> {
    let content = UserListViewModel {
        users: page.items.iter().map(user_row).collect(),
        total: page.total(),
        page: current_page,
        pages: page.pages(),
    };

    let mut result = CommandResultViewModel::new(content);

    if result.content.users.is_empty() {
        let label = if filtered {
            "No accounts match the filters"
        } else {
            "No accounts found"
        };
        result = result.with_badge(StatusBadge::warning(label));
        if filtered {
            result = result.with_suggestion(
                Guidance::new("List every account").with_command("acadex user list"),
            );
        }
    } else {
        let label = format!("{} account(s)", result.content.total);
        result = result.with_badge(StatusBadge::success(label));
        if result.content.page < result.content.pages {
            let command = format!("acadex user list --page {}", result.content.page + 1);
            result = result
                .with_suggestion(Guidance::new("Next page").with_command(command));
        }
    }

    result
}

pub fn present_user_role_set(id: &str, role: Role) -> CommandResultViewModel<MessageViewModel> {
    CommandResultViewModel::new(MessageViewModel::new(format!(
        "Account {} now has the {} role.",
        id, role
    )))
    .with_badge(StatusBadge::success("Role updated"))
}

pub fn present_user_status_set(id: &str, active: bool) -> CommandResultViewModel<MessageViewModel> {
    let (label, message) = if active {
        (
            "Account activated",
            format!("Account {} can sign in again.", id),
        )
    } else {
        (
            "Account deactivated",
            format!("Account {} can no longer sign in.", id),
        )
    };

    CommandResultViewModel::new(MessageViewModel::new(message))
        .with_badge(StatusBadge::success(label))
}

pub fn present_user_deleted(id: &str) -> CommandResultViewModel<MessageViewModel> {
    CommandResultViewModel::new(MessageViewModel::new(format!(
        "Account {} was permanently deleted.",
        id
    )))
    .with_badge(StatusBadge::success("Account deleted"))
}

pub fn present_users_exported(
    path: &str,
    bytes: usize,
) -> CommandResultViewModel<UserExportViewModel> {
    let content = UserExportViewModel {
        path: path.to_string(),
        bytes,
    };

    CommandResultViewModel::new(content).with_badge(StatusBadge::success("Export complete"))
}
