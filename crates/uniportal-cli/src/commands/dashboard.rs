use uniportal_core::enums::Role;
use uniportal_workflow::dashboard;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `unip dashboard`: the landing page of the stored role.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let portal = &ctx.portal;
    match portal.session.role()? {
        Role::Admin => output(&dashboard::admin(portal).await?, flags.format),
        Role::Faculty => output(&dashboard::faculty(portal).await?, flags.format),
        Role::Student => output(&dashboard::student(portal).await?, flags.format),
    }
}
