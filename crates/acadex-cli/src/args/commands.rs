use super::common::{PageArgs, ScopeArgs, SubjectScopeArgs};
use super::enums::{CourseLevelArg, PromoteRoleArg, RoleArg, StatusFilter};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Write a starter config.toml under the data directory")]
    Init {
        #[arg(long, help = "Server base URL to record in the config")]
        server: Option<String>,

        #[arg(long, help = "Overwrite an existing config")]
        force: bool,
    },

    #[command(about = "Sign in and store the session token")]
    Login {
        #[arg(help = "Username or email address")]
        identifier: String,

        #[arg(long, help = "Password (prompted when omitted)")]
        password: Option<String>,
    },

    #[command(about = "Discard the stored session token")]
    Logout,

    #[command(about = "Show the currently signed-in account")]
    Whoami,

    #[command(about = "Create a new account")]
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long, help = "Password (prompted when omitted)")]
        password: Option<String>,
    },

    #[command(about = "Request an elevated role with a promotion code")]
    Promote {
        #[arg(help = "Role to request")]
        role: PromoteRoleArg,

        #[arg(long, help = "Promotion code issued by an administrator")]
        code: String,
    },

    #[command(about = "Show platform-wide record counts")]
    Stats,

    #[command(about = "Manage member accounts")]
    User {
        #[command(subcommand)]
        command: UserCommand,
    },

    #[command(about = "Browse and grow the college/department/course/subject catalog")]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },

    #[command(about = "Manage quizzes and their question banks")]
    Quiz {
        #[command(subcommand)]
        command: QuizCommand,
    },

    #[command(about = "Manage tutorial PDFs")]
    Tutorial {
        #[command(subcommand)]
        command: TutorialCommand,
    },

    #[command(about = "Ask the study assistant a single question")]
    Ask {
        #[arg(required = true, help = "The question to ask")]
        prompt: Vec<String>,

        #[arg(long, help = "Model to use (defaults to [chat].default_model)")]
        model: Option<String>,
    },

    #[command(about = "Open an interactive chat with the study assistant")]
    Chat {
        #[arg(long, help = "Model to use (defaults to [chat].default_model)")]
        model: Option<String>,
    },

    #[command(about = "Open the interactive admin console (TUI)")]
    Console,
}

#[derive(Subcommand)]
pub enum UserCommand {
    #[command(about = "List accounts with filtering and paging")]
    List {
        #[arg(long, help = "Search name, username or email")]
        q: Option<String>,

        #[arg(long, help = "Only accounts with this role")]
        role: Option<RoleArg>,

        #[arg(long, default_value = "all")]
        status: StatusFilter,

        #[arg(long, help = "Sort key, e.g. 'name' or '-createdAt'")]
        sort: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    #[command(about = "Change an account's role")]
    SetRole {
        id: String,

        role: RoleArg,
    },

    #[command(about = "Re-enable a deactivated account")]
    Activate { id: String },

    #[command(about = "Deactivate an account without deleting it")]
    Deactivate { id: String },

    #[command(about = "Permanently delete an account")]
    Delete {
        id: String,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    #[command(about = "Download accounts as CSV")]
    Export {
        #[arg(short, long, default_value = "users.csv", help = "Output file")]
        output: PathBuf,

        #[arg(long, help = "Search name, username or email")]
        q: Option<String>,

        #[arg(long, help = "Only accounts with this role")]
        role: Option<RoleArg>,

        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    #[command(about = "Top-level colleges")]
    Colleges {
        #[command(subcommand)]
        command: CollegeCommand,
    },

    #[command(about = "Departments within a college")]
    Departments {
        #[command(subcommand)]
        command: DepartmentCommand,
    },

    #[command(about = "Courses within a department")]
    Courses {
        #[command(subcommand)]
        command: CourseCommand,
    },

    #[command(about = "Subjects within a course")]
    Subjects {
        #[command(subcommand)]
        command: SubjectCommand,
    },

    #[command(about = "Resolve a college/department/course/subject path to ids")]
    Resolve {
        #[arg(help = "Path of codes or names, e.g. 'ENG/CSE/CSC101/Algorithms'")]
        path: String,
    },
}

#[derive(Subcommand)]
pub enum CollegeCommand {
    #[command(about = "List all colleges")]
    List,

    #[command(about = "Create a college")]
    Create {
        name: String,

        #[arg(long, help = "Short form, e.g. 'ENG'")]
        abbr: String,
    },
}

#[derive(Subcommand)]
pub enum DepartmentCommand {
    #[command(about = "List departments, optionally scoped to a college")]
    List {
        #[arg(long, help = "College id")]
        college: Option<String>,
    },

    #[command(about = "Create a department under a college")]
    Create {
        name: String,

        #[arg(long, help = "Department code, e.g. 'CSE'")]
        code: String,

        #[arg(long, help = "Parent college id")]
        college: String,
    },
}

#[derive(Subcommand)]
pub enum CourseCommand {
    #[command(about = "List courses, optionally scoped to a department")]
    List {
        #[arg(long, help = "Department id")]
        department: Option<String>,
    },

    #[command(about = "Create a course under a department")]
    Create {
        #[arg(help = "Course code, e.g. 'CSC101'")]
        code: String,

        #[arg(long)]
        title: String,

        #[arg(long, default_value = "100")]
        level: CourseLevelArg,

        #[arg(long, help = "Parent department id")]
        department: String,
    },
}

#[derive(Subcommand)]
pub enum SubjectCommand {
    #[command(about = "List subjects, optionally scoped to a course")]
    List {
        #[arg(long, help = "Course id")]
        course: Option<String>,
    },

    #[command(about = "Create a subject under a course")]
    Create {
        name: String,

        #[arg(long, help = "Subject code, e.g. 'ALG'")]
        code: String,

        #[arg(long, help = "Parent course id")]
        course: String,

        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum QuizCommand {
    #[command(about = "List quizzes with filtering and paging")]
    List {
        #[arg(long, help = "Search titles")]
        q: Option<String>,

        #[arg(long, default_value = "all")]
        status: StatusFilter,

        #[command(flatten)]
        page: PageArgs,
    },

    #[command(about = "Create a quiz attached to a subject")]
    Create {
        title: String,

        #[arg(long)]
        description: Option<String>,

        #[command(flatten)]
        scope: SubjectScopeArgs,
    },

    #[command(about = "Edit a quiz's title, description or subject")]
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, help = "Move the quiz to another subject id")]
        subject: Option<String>,
    },

    #[command(about = "Make a quiz visible to students")]
    Activate { id: String },

    #[command(about = "Hide a quiz from students")]
    Deactivate { id: String },

    #[command(about = "Permanently delete a quiz and its questions")]
    Delete {
        id: String,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    #[command(about = "Bulk-import questions from a CSV file")]
    Import {
        #[arg(help = "Quiz id to import into")]
        id: String,

        #[arg(help = "CSV file with question,option_a..option_d,answer[,points]")]
        file: PathBuf,

        #[arg(long, help = "Validate and report without writing anything")]
        dry_run: bool,
    },
}

#[derive(Subcommand)]
pub enum TutorialCommand {
    #[command(about = "List tutorial PDFs in a catalog scope")]
    List {
        #[command(flatten)]
        scope: ScopeArgs,

        #[arg(long, help = "Search titles")]
        q: Option<String>,

        #[arg(long, help = "Only published (true) or unpublished (false) files")]
        published: Option<bool>,

        #[command(flatten)]
        page: PageArgs,
    },

    #[command(about = "Upload a tutorial PDF into a catalog scope")]
    Upload {
        #[arg(help = "Path to the PDF file")]
        file: PathBuf,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        #[command(flatten)]
        scope: ScopeArgs,
    },

    #[command(about = "Edit a tutorial's title or description")]
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    #[command(about = "Make a tutorial visible to students")]
    Publish { id: String },

    #[command(about = "Hide a tutorial from students")]
    Unpublish { id: String },

    #[command(about = "Permanently delete a tutorial PDF")]
    Delete {
        id: String,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
