use uniportal_core::entities::{Course, NewCourse};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{CourseArgs, CourseCommands};
use crate::commands::records;
use crate::context::AppContext;

/// Handle `unip course`.
pub async fn handle(action: &CourseCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        CourseCommands::List => records::list::<Course>("courses", ctx, flags).await,
        CourseCommands::Get { id } => records::get::<Course>(id, ctx, flags).await,
        CourseCommands::Add(args) => records::create::<Course>(draft(args), ctx, flags).await,
        CourseCommands::Edit(args) => records::edit::<Course>(args, ctx, flags).await,
        CourseCommands::Remove(args) => records::remove::<Course>(args, ctx, flags).await,
    }
}

fn draft(args: &CourseArgs) -> NewCourse {
    NewCourse {
        course_code: args.course_code.clone(),
        course_name: args.course_name.clone(),
        credits: args.credits,
        department: args.department.clone(),
        description: args.description.clone(),
    }
}
