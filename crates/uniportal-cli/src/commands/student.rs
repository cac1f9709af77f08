use uniportal_core::entities::{NewStudent, Student};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{StudentArgs, StudentCommands};
use crate::commands::records;
use crate::context::AppContext;

/// Handle `unip student`.
pub async fn handle(action: &StudentCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        StudentCommands::List => records::list::<Student>("students", ctx, flags).await,
        StudentCommands::Get { id } => records::get::<Student>(id, ctx, flags).await,
        StudentCommands::Add(args) => records::create::<Student>(draft(args), ctx, flags).await,
        StudentCommands::Edit(args) => records::edit::<Student>(args, ctx, flags).await,
        StudentCommands::Remove(args) => records::remove::<Student>(args, ctx, flags).await,
    }
}

fn draft(args: &StudentArgs) -> NewStudent {
    NewStudent {
        student_id: args.student_id.clone(),
        name: args.name.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        programme: args.programme.clone(),
        department: args.department.clone(),
        batch: args.batch.clone(),
        current_semester: args.current_semester,
        phone: args.phone.clone(),
        faculty_advisor_id: args.faculty_advisor_id.clone(),
        address: args.address.clone(),
    }
}
