use super::args::{
    CatalogCommand, Cli, CollegeCommand, Commands, CourseCommand, DepartmentCommand,
    QuizCommand, SubjectCommand, TutorialCommand, UserCommand,
};
use super::handlers;
use crate::config::resolve_data_dir;
use crate::context::ExecutionContext;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let exec = ExecutionContext::new(data_dir, cli.server);

    let Some(command) = cli.command else {
        show_guidance(&exec)?;
        return Ok(());
    };

    let format = cli.format;
    let runtime = tokio::runtime::Runtime::new()?;

    match command {
        Commands::Init { server, force } => handlers::init::handle(&exec, server, force, format),

        Commands::Login {
            identifier,
            password,
        } => runtime.block_on(handlers::auth::login(&exec, identifier, password, format)),

        Commands::Logout => handlers::auth::logout(&exec, format),

        Commands::Whoami => runtime.block_on(handlers::auth::whoami(&exec, format)),

        Commands::Register {
            name,
            username,
            email,
            password,
        } => runtime.block_on(handlers::auth::register(
            &exec, name, username, email, password, format,
        )),

        Commands::Promote { role, code } => {
            runtime.block_on(handlers::auth::promote(&exec, role, code, format))
        }

        Commands::Stats => runtime.block_on(handlers::stats::handle(&exec, format)),

        Commands::User { command } => match command {
            UserCommand::List {
                q,
                role,
                status,
                sort,
                page,
            } => runtime.block_on(handlers::users::list(
                &exec, q, role, status, sort, page, format,
            )),
            UserCommand::SetRole { id, role } => {
                runtime.block_on(handlers::users::set_role(&exec, id, role, format))
            }
            UserCommand::Activate { id } => {
                runtime.block_on(handlers::users::set_status(&exec, id, true, format))
            }
            UserCommand::Deactivate { id } => {
                runtime.block_on(handlers::users::set_status(&exec, id, false, format))
            }
            UserCommand::Delete { id, yes } => {
                runtime.block_on(handlers::users::delete(&exec, id, yes, format))
            }
            UserCommand::Export {
                output,
                q,
                role,
                status,
            } => runtime.block_on(handlers::users::export(
                &exec, output, q, role, status, format,
            )),
        },

        Commands::Catalog { command } => match command {
            CatalogCommand::Colleges { command } => match command {
                CollegeCommand::List => {
                    runtime.block_on(handlers::catalog::colleges_list(&exec, format))
                }
                CollegeCommand::Create { name, abbr } => {
                    runtime.block_on(handlers::catalog::college_create(&exec, name, abbr, format))
                }
            },
            CatalogCommand::Departments { command } => match command {
                DepartmentCommand::List { college } => {
                    runtime.block_on(handlers::catalog::departments_list(&exec, college, format))
                }
                DepartmentCommand::Create {
                    name,
                    code,
                    college,
                } => runtime.block_on(handlers::catalog::department_create(
                    &exec, name, code, college, format,
                )),
            },
            CatalogCommand::Courses { command } => match command {
                CourseCommand::List { department } => {
                    runtime.block_on(handlers::catalog::courses_list(&exec, department, format))
                }
                CourseCommand::Create {
                    code,
                    title,
                    level,
                    department,
                } => runtime.block_on(handlers::catalog::course_create(
                    &exec, code, title, level, department, format,
                )),
            },
            CatalogCommand::Subjects { command } => match command {
                SubjectCommand::List { course } => {
                    runtime.block_on(handlers::catalog::subjects_list(&exec, course, format))
                }
                SubjectCommand::Create {
                    name,
                    code,
                    course,
                    description,
                } => runtime.block_on(handlers::catalog::subject_create(
                    &exec,
                    name,
                    code,
                    course,
                    description,
                    format,
                )),
            },
            CatalogCommand::Resolve { path } => {
                runtime.block_on(handlers::catalog::resolve(&exec, path, format))
            }
        },

        Commands::Quiz { command } => match command {
            QuizCommand::List { q, status, page } => {
                runtime.block_on(handlers::quiz::list(&exec, q, status, page, format))
            }
            QuizCommand::Create {
                title,
                description,
                scope,
            } => runtime.block_on(handlers::quiz::create(
                &exec,
                title,
                description,
                scope,
                format,
            )),
            QuizCommand::Update {
                id,
                title,
                description,
                subject,
            } => runtime.block_on(handlers::quiz::update(
                &exec,
                id,
                title,
                description,
                subject,
                format,
            )),
            QuizCommand::Activate { id } => {
                runtime.block_on(handlers::quiz::set_active(&exec, id, true, format))
            }
            QuizCommand::Deactivate { id } => {
                runtime.block_on(handlers::quiz::set_active(&exec, id, false, format))
            }
            QuizCommand::Delete { id, yes } => {
                runtime.block_on(handlers::quiz::delete(&exec, id, yes, format))
            }
            QuizCommand::Import { id, file, dry_run } => {
                runtime.block_on(handlers::quiz::import(&exec, id, file, dry_run, format))
            }
        },

        Commands::Tutorial { command } => match command {
            TutorialCommand::List {
                scope,
                q,
                published,
                page,
            } => runtime.block_on(handlers::tutorial::list(
                &exec, scope, q, published, page, format,
            )),
            TutorialCommand::Upload {
                file,
                title,
                description,
                scope,
            } => runtime.block_on(handlers::tutorial::upload(
                &exec,
                file,
                title,
                description,
                scope,
                format,
            )),
            TutorialCommand::Update {
                id,
                title,
                description,
            } => runtime.block_on(handlers::tutorial::update(
                &exec,
                id,
                title,
                description,
                format,
            )),
            TutorialCommand::Publish { id } => {
                runtime.block_on(handlers::tutorial::set_published(&exec, id, true, format))
            }
            TutorialCommand::Unpublish { id } => {
                runtime.block_on(handlers::tutorial::set_published(&exec, id, false, format))
            }
            TutorialCommand::Delete { id, yes } => {
                runtime.block_on(handlers::tutorial::delete(&exec, id, yes, format))
            }
        },

        Commands::Ask { prompt, model } => {
            runtime.block_on(handlers::chat::ask(&exec, prompt, model, format))
        }

        Commands::Chat { model } => runtime.block_on(handlers::chat::chat(&exec, model)),

        // The console drives the runtime from a sync event loop, so it
        // takes a handle instead of running under block_on.
        Commands::Console => handlers::console::handle(&exec, runtime.handle().clone()),
    }
}

fn show_guidance(exec: &ExecutionContext) -> Result<()> {
    let config_exists = exec.config_path().exists();
    let signed_in = exec.session()?.is_some();

    println!("acadex - administration console for the acadex learning platform\n");

    if !config_exists {
        println!("Get started:");
        println!("  acadex init --server http://your-server:5000");
        println!("  acadex login <USERNAME>\n");
        println!("The init command writes config.toml under the data directory;");
        println!("login stores a session token next to it.\n");
    } else if !signed_in {
        println!("Config found, but no stored session:");
        println!("  acadex login <USERNAME>\n");
    } else {
        println!("Quick commands:");
        println!("  acadex console                       # Full-screen admin console");
        println!("  acadex stats                         # Platform record counts");
        println!("  acadex user list                     # Browse accounts");
        println!("  acadex catalog resolve ENG/CSE       # Resolve a catalog path to ids");
        println!("  acadex quiz list                     # Browse quizzes\n");
    }

    println!("For more commands:");
    println!("  acadex --help");

    Ok(())
}
