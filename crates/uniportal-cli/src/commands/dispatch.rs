use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Student { action } => commands::student::handle(&action, ctx, flags).await,
        Commands::Faculty { action } => commands::faculty::handle(&action, ctx, flags).await,
        Commands::Course { action } => commands::course::handle(&action, ctx, flags).await,
        Commands::AcademicYear { action } => {
            commands::academic_year::handle(&action, ctx, flags).await
        }
        Commands::Announcement { action } => {
            commands::announcement::handle(&action, ctx, flags).await
        }
        Commands::Fee { action } => commands::fee::handle(&action, ctx, flags).await,
        Commands::Calendar { action } => commands::calendar::handle(&action, ctx, flags).await,
        Commands::Application { action } => {
            commands::application::handle(&action, ctx, flags).await
        }
        Commands::Register { action } => commands::register::handle(&action, ctx, flags).await,
    }
}
