use serde_json::json;
use uniportal_core::entities::NewAcademicYear;
use uniportal_workflow::calendar;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AcademicYearCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `unip academic-year`.
pub async fn handle(
    action: &AcademicYearCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AcademicYearCommands::List => {
            let mut years = calendar::list_years(&ctx.portal).await?;
            years.truncate(ctx.limit(flags.limit));
            output(&json!({ "academic_years": years }), flags.format)
        }
        AcademicYearCommands::Add {
            label,
            start_date,
            end_date,
            current,
        } => {
            let year = NewAcademicYear {
                label: label.clone(),
                start_date: start_date.clone(),
                end_date: end_date.clone(),
                is_current: *current,
            };
            let message = calendar::create_year(&ctx.portal, &year).await?;
            output(&json!({ "created": true, "message": message }), flags.format)
        }
    }
}
