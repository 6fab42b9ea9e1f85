use anyhow::Result;

use acadex_client::{NewCollege, NewCourse, NewDepartment, NewSubject};
use acadex_types::CatalogLevel;

use crate::args::{CourseLevelArg, OutputFormat};
use crate::context::ExecutionContext;
use crate::handlers::{HandlerContext, describe};
use crate::presentation::presenters;

pub async fn colleges_list(exec: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;
    let colleges = client.catalog().colleges().await.map_err(describe)?;
    ctx.render(presenters::present_colleges(&colleges))
}

pub async fn college_create(
    exec: &ExecutionContext,
    name: String,
    abbr: String,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;
    client
        .catalog()
        .create_college(&NewCollege {
            name: &name,
            abbr: &abbr,
        })
        .await
        .map_err(describe)?;
    ctx.render(presenters::present_catalog_created(
        CatalogLevel::College,
        &name,
        Some(&abbr),
        None,
    ))
}

pub async fn departments_list(
    exec: &ExecutionContext,
    college: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;
    let departments = client
        .catalog()
        .departments(college.as_deref())
        .await
        .map_err(describe)?;
    ctx.render(presenters::present_departments(&departments, college))
}

pub async fn department_create(
    exec: &ExecutionContext,
    name: String,
    code: String,
    college: String,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;
    client
        .catalog()
        .create_department(&NewDepartment {
            name: &name,
            code: &code,
            college: &college,
        })
        .await
        .map_err(describe)?;
    ctx.render(presenters::present_catalog_created(
        CatalogLevel::Department,
        &name,
        Some(&code),
        Some(&college),
    ))
}

pub async fn courses_list(
    exec: &ExecutionContext,
    department: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;
    let courses = client
        .catalog()
        .courses(department.as_deref())
        .await
        .map_err(describe)?;
    ctx.render(presenters::present_courses(&courses, department))
}

pub async fn course_create(
    exec: &ExecutionContext,
    code: String,
    title: String,
    level: CourseLevelArg,
    department: String,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;
    client
        .catalog()
        .create_course(&NewCourse {
            code: &code,
            title: &title,
            level: level.into(),
            department: &department,
        })
        .await
        .map_err(describe)?;
    ctx.render(presenters::present_catalog_created(
        CatalogLevel::Course,
        &title,
        Some(&code),
        Some(&department),
    ))
}

pub async fn subjects_list(
    exec: &ExecutionContext,
    course: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;
    let subjects = client
        .catalog()
        .subjects(course.as_deref())
        .await
        .map_err(describe)?;
    ctx.render(presenters::present_subjects(&subjects, course))
}

pub async fn subject_create(
    exec: &ExecutionContext,
    name: String,
    code: String,
    course: String,
    description: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;
    client
        .catalog()
        .create_subject(&NewSubject {
            name: &name,
            code: &code,
            course: &course,
            description: description.as_deref(),
        })
        .await
        .map_err(describe)?;
    ctx.render(presenters::present_catalog_created(
        CatalogLevel::Subject,
        &name,
        Some(&code),
        Some(&course),
    ))
}

/// Walk a slash path through the live catalog and print what each segment
/// matched. Useful for scripting ids out of human-readable paths.
pub async fn resolve(exec: &ExecutionContext, path: String, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;
    let resolved = acadex_core::resolve_path(&client.catalog(), &path).await?;
    ctx.render(presenters::present_resolved_path(&path, &resolved))
}
