use serde_json::json;
use uniportal_core::enums::ApprovalStatus;
use uniportal_workflow::fees::FeeApproval;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FeeCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `unip fee`.
pub async fn handle(action: &FeeCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let portal = &ctx.portal;
    let mut page = FeeApproval::default();
    match action {
        FeeCommands::List { status, search } => {
            let status = status.as_deref().map(str::parse::<ApprovalStatus>).transpose()?;
            page.load(portal, status).await?;
            let transactions: Vec<_> = page
                .search(search.as_deref().unwrap_or(""))
                .take(ctx.limit(flags.limit))
                .collect();
            output(&json!({ "fee_transactions": transactions }), flags.format)
        }
        FeeCommands::Approve { id, remarks } => {
            // Loaded first so an already decided transaction is refused locally.
            page.load(portal, None).await?;
            let message = page.approve(portal, id, remarks.clone()).await?;
            output(&json!({ "fee_id": id, "status": "Approved", "message": message }), flags.format)
        }
        FeeCommands::Reject { id, remarks } => {
            page.load(portal, None).await?;
            let message = page.reject(portal, id, Some(remarks.clone())).await?;
            output(&json!({ "fee_id": id, "status": "Rejected", "message": message }), flags.format)
        }
    }
}
