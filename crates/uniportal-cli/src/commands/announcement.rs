use serde_json::json;
use uniportal_core::entities::NewAnnouncement;
use uniportal_core::enums::Audience;
use uniportal_workflow::announcements;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AnnouncementCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `unip announcement`.
pub async fn handle(
    action: &AnnouncementCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AnnouncementCommands::List => {
            let mut items = announcements::list(&ctx.portal).await?;
            items.truncate(ctx.limit(flags.limit));
            output(&json!({ "announcements": items }), flags.format)
        }
        AnnouncementCommands::Post {
            title,
            content,
            audience,
        } => {
            let announcement = NewAnnouncement {
                title: title.clone(),
                content: content.clone(),
                audience: audience.parse::<Audience>()?,
                posted_by: None,
            };
            let message = announcements::post(&ctx.portal, announcement).await?;
            output(&json!({ "posted": true, "message": message }), flags.format)
        }
    }
}
