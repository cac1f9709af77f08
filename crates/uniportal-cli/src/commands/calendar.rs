use serde_json::json;
use uniportal_core::entities::{CalendarEntry, NewCalendarEntry};
use uniportal_workflow::calendar;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{CalendarArgs, CalendarCommands};
use crate::commands::records;
use crate::context::AppContext;
use crate::output::output;

/// Handle `unip calendar`.
pub async fn handle(action: &CalendarCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        CalendarCommands::List { year } => {
            let mut entries = calendar::list(&ctx.portal, year.as_deref()).await?;
            entries.truncate(ctx.limit(flags.limit));
            output(&json!({ "calendar": entries }), flags.format)
        }
        CalendarCommands::Get { id } => output(&calendar::get(&ctx.portal, id).await?, flags.format),
        CalendarCommands::Add(args) => records::create::<CalendarEntry>(draft(args), ctx, flags).await,
        CalendarCommands::Edit(args) => records::edit::<CalendarEntry>(args, ctx, flags).await,
        CalendarCommands::Remove(args) => records::remove::<CalendarEntry>(args, ctx, flags).await,
        CalendarCommands::Download { id, out } => {
            let path = calendar::download(&ctx.portal, id, out).await?;
            output(&json!({ "entry_id": id, "path": path.display().to_string() }), flags.format)
        }
    }
}

fn draft(args: &CalendarArgs) -> NewCalendarEntry {
    NewCalendarEntry {
        academic_year_id: args.academic_year_id.clone(),
        title: args.title.clone(),
        event_type: args.event_type.clone(),
        start_date: args.start_date.clone(),
        end_date: args.end_date.clone(),
        description: args.description.clone(),
    }
}
