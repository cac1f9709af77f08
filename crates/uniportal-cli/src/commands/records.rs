//! Handlers shared by the student, faculty, course and calendar pages.

use anyhow::anyhow;
use serde_json::json;
use uniportal_core::updates::SparseUpdate;
use uniportal_core::validation::PasswordChange;
use uniportal_workflow::forms::{CreateForm, EditForm, RemoveForm};
use uniportal_workflow::records::ManagedRecord;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{EditArgs, RemoveArgs};
use crate::context::AppContext;
use crate::output::output;

type FieldOf<R> = <<R as ManagedRecord>::Update as SparseUpdate>::Field;

/// List records under `key` (`{"students": [...]}`).
pub async fn list<R: ManagedRecord>(key: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut form = RemoveForm::<R>::default();
    form.load(&ctx.portal).await?;
    let mut records = form.records;
    records.truncate(ctx.limit(flags.limit));
    output(&json!({ key: records }), flags.format)
}

pub async fn get<R: ManagedRecord>(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut form = EditForm::<R>::new(id);
    let record = form.hydrate(&ctx.portal).await?;
    output(record, flags.format)
}

pub async fn create<R: ManagedRecord>(
    draft: R::New,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut form = CreateForm::<R>::new(draft);
    let message = form.submit(&ctx.portal).await?;
    output(&json!({ "created": true, "message": message }), flags.format)
}

/// Tick the `--set` fields, check them locally, hydrate, then PUT.
pub async fn edit<R: ManagedRecord>(
    args: &EditArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut form = EditForm::<R>::new(args.id.clone());
    for (name, value) in &args.set {
        let field: FieldOf<R> = name.parse()?;
        form.select(field, value.as_str())?;
    }
    if let Some(password) = &args.password {
        let confirm = args.confirm_password.clone().unwrap_or_default();
        form.change_password(PasswordChange::new(password.clone(), confirm))?;
    }
    form.build_update(ctx.portal.settings.min_password_len)?;

    form.hydrate(&ctx.portal).await?;
    let fields: Vec<String> = form.selected_fields().map(|f| f.to_string()).collect();
    let message = form.submit(&ctx.portal).await?;
    output(
        &json!({
            "id": args.id,
            "updated_fields": fields,
            "password_changed": args.password.is_some(),
            "message": message,
        }),
        flags.format,
    )
}

/// Without `--yes` this only shows the record that would be removed.
pub async fn remove<R: ManagedRecord>(
    args: &RemoveArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut form = RemoveForm::<R>::default();
    form.load(&ctx.portal).await?;

    if !args.yes {
        let record = form
            .find(&args.id)
            .ok_or_else(|| anyhow!("{} '{}' is not in the list", R::LABEL, args.id))?;
        return output(
            &json!({
                "removed": false,
                "record": record,
                "note": "re-run with --yes to remove",
            }),
            flags.format,
        );
    }

    let message = form.remove(&ctx.portal, &args.id).await?;
    output(
        &json!({
            "removed": true,
            "id": args.id,
            "remaining": form.records.len(),
            "message": message,
        }),
        flags.format,
    )
}
