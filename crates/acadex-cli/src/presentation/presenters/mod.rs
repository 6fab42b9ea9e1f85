pub mod auth;
pub mod catalog;
pub mod chat;
pub mod console;
pub mod init;
pub mod quiz;
pub mod stats;
pub mod tutorial;
pub mod users;

pub use auth::{present_login, present_logout, present_profile, present_promote, present_register};
pub use catalog::{
    present_catalog_created, present_colleges, present_courses, present_departments,
    present_resolved_path, present_subjects,
};
pub use chat::present_ask;
pub use console::build_console_view_model;
pub use init::present_init;
pub use quiz::{
    present_quiz_active, present_quiz_created, present_quiz_deleted, present_quiz_import,
    present_quiz_list, present_quiz_updated,
};
pub use stats::present_stats;
pub use tutorial::{
    present_tutorial_deleted, present_tutorial_list, present_tutorial_published,
    present_tutorial_updated, present_tutorial_uploaded,
};
pub use users::{
    present_user_deleted, present_user_list, present_user_role_set, present_user_status_set,
    present_users_exported,
};
