use serde::Serialize;
use uniportal_core::Route;
use uniportal_core::enums::Role;
use uniportal_workflow::auth;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{AuthCommands, AuthLoginArgs};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    cleared: bool,
    route: Route,
}

/// Handle `unip auth <subcommand>`.
pub async fn handle(action: &AuthCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login(args, ctx, flags).await,
        AuthCommands::Logout => {
            let route = auth::logout(&ctx.portal)?;
            output(
                &LogoutResponse {
                    cleared: true,
                    route,
                },
                flags.format,
            )
        }
        AuthCommands::Status => output(&auth::status(&ctx.portal)?, flags.format),
    }
}

async fn login(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role = args.role.as_deref().map(str::parse::<Role>).transpose()?;
    let outcome = auth::login(&ctx.portal, &args.email, &args.password, role).await?;
    output(&outcome, flags.format)
}
