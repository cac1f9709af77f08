use uniportal_core::entities::{Faculty, NewFaculty};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{FacultyArgs, FacultyCommands};
use crate::commands::records;
use crate::context::AppContext;

/// Handle `unip faculty`.
pub async fn handle(action: &FacultyCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FacultyCommands::List => records::list::<Faculty>("faculty", ctx, flags).await,
        FacultyCommands::Get { id } => records::get::<Faculty>(id, ctx, flags).await,
        FacultyCommands::Add(args) => records::create::<Faculty>(draft(args), ctx, flags).await,
        FacultyCommands::Edit(args) => records::edit::<Faculty>(args, ctx, flags).await,
        FacultyCommands::Remove(args) => records::remove::<Faculty>(args, ctx, flags).await,
    }
}

fn draft(args: &FacultyArgs) -> NewFaculty {
    NewFaculty {
        faculty_id: args.faculty_id.clone(),
        name: args.name.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        department: args.department.clone(),
        designation: args.designation.clone(),
        phone: args.phone.clone(),
    }
}
