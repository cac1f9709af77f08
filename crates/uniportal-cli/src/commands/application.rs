use serde_json::json;
use uniportal_core::enums::ApprovalStatus;
use uniportal_workflow::applications;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ApplicationCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `unip application`.
pub async fn handle(
    action: &ApplicationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let portal = &ctx.portal;
    match action {
        ApplicationCommands::List { status } => {
            let status = status.as_deref().map(str::parse::<ApprovalStatus>).transpose()?;
            let mut items = applications::list(portal, status).await?;
            items.truncate(ctx.limit(flags.limit));
            output(&json!({ "applications": items }), flags.format)
        }
        ApplicationCommands::Get { id } => output(&applications::get(portal, id).await?, flags.format),
        ApplicationCommands::Approve { id, remarks } => {
            let message =
                applications::decide(portal, id, ApprovalStatus::Approved, remarks.clone()).await?;
            output(&json!({ "id": id, "status": "Approved", "message": message }), flags.format)
        }
        ApplicationCommands::Reject { id, remarks } => {
            let message =
                applications::decide(portal, id, ApprovalStatus::Rejected, Some(remarks.clone()))
                    .await?;
            output(&json!({ "id": id, "status": "Rejected", "message": message }), flags.format)
        }
    }
}
