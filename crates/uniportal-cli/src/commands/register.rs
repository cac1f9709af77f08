//! `unip register`: the three registration pages plus status and reset.

use serde::Serialize;
use serde_json::json;
use uniportal_core::entities::{CourseOffering, EditableFields};
use uniportal_workflow::registration::{
    self, EditableOutcome, FeeForm, ProfileReview, SelectionOutcome, Toggle,
};
use uniportal_workflow::{Redirect, Step};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{FeeFormArgs, FinalizeArgs, ProfileArgs, RegisterCommands};
use crate::context::AppContext;
use crate::output::output;

/// Handle `unip register`.
pub async fn handle(action: &RegisterCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        RegisterCommands::Profile(args) => profile(args, ctx, flags).await,
        RegisterCommands::Courses { toggle, submit } => courses(toggle, *submit, ctx, flags).await,
        RegisterCommands::Finalize(args) => finalize(args, ctx, flags).await,
        RegisterCommands::Status => output(&registration::status(&ctx.portal)?, flags.format),
        RegisterCommands::Reset { all } => {
            let next = if *all {
                registration::start_over(&ctx.portal)?
            } else {
                registration::reset(&ctx.portal)?
            };
            output(&json!({ "reset": true, "all": all, "next": next }), flags.format)
        }
    }
}

#[derive(Serialize)]
struct ProfileResponse {
    #[serde(flatten)]
    review: ProfileReview,
    #[serde(skip_serializing_if = "Option::is_none")]
    update: Option<EditableOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next: Option<Redirect>,
}

fn editable_from(args: &ProfileArgs) -> EditableFields {
    EditableFields {
        phone: args.phone.clone(),
        email: args.email.clone(),
        contact: args.contact.clone(),
        address: args.address.clone(),
    }
}

async fn profile(args: &ProfileArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let portal = &ctx.portal;
    let student_id = portal.student_id()?;
    let mut review = registration::load_profile(portal, &student_id).await?;

    let fields = editable_from(args);
    let update = if fields.is_empty() {
        None
    } else {
        let outcome = registration::update_editable(portal, &student_id, &mut review, fields).await?;
        if let EditableOutcome::Kept { warning } = &outcome
            && !flags.quiet
        {
            eprintln!("warning: profile not updated: {warning}");
        }
        Some(outcome)
    };

    let next = if args.proceed {
        Some(registration::continue_to_courses(portal, &review)?)
    } else {
        None
    };

    output(&ProfileResponse { review, update, next }, flags.format)
}

#[derive(Serialize)]
struct CoursesResponse<'a> {
    offerings: &'a [CourseOffering],
    selected: &'a [String],
    total_credits: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    toggled: Vec<(String, Toggle)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    submitted: Option<SelectionOutcome>,
}

async fn courses(
    toggles: &[String],
    submit: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let portal = &ctx.portal;
    let student_id = portal.student_id()?;
    let mut picker = registration::load_courses(portal, &student_id).await?;

    let toggled: Vec<(String, Toggle)> = toggles
        .iter()
        .map(|id| (id.clone(), picker.toggle(id)))
        .collect();
    for (id, result) in &toggled {
        if matches!(result, Toggle::Disabled | Toggle::Unknown) {
            tracing::warn!(offering = %id, ?result, "offering not toggled");
        }
    }

    let submitted = if submit {
        Some(registration::submit_courses(portal, &student_id, &picker).await?)
    } else {
        if !toggled.is_empty() {
            portal
                .session
                .save_selected_courses(&picker.selected_courses())?;
        }
        None
    };

    output(
        &CoursesResponse {
            offerings: &picker.offerings,
            selected: picker.selected_ids(),
            total_credits: picker.total_credits(),
            toggled,
            submitted,
        },
        flags.format,
    )
}

fn fee_form(args: &FeeFormArgs) -> FeeForm {
    FeeForm {
        cpi: args.cpi.clone().unwrap_or_default(),
        bank_name: args.bank_name.clone().unwrap_or_default(),
        transaction_id: args.transaction_id.clone().unwrap_or_default(),
        transaction_date: args.transaction_date.clone().unwrap_or_default(),
        amount: args.amount.clone().unwrap_or_default(),
    }
}

async fn finalize(args: &FinalizeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let portal = &ctx.portal;
    if args.fee.is_empty() {
        return match registration::load_finalize(portal).await? {
            Step::Ready(page) => output(&page, flags.format),
            Step::Redirect(next) => output(&json!({ "next": next }), flags.format),
        };
    }

    match registration::finalize(portal, &fee_form(&args.fee)).await? {
        Step::Ready(outcome) => {
            output(&outcome, flags.format)?;
            if !args.no_wait {
                let route = outcome.redirect.follow().await;
                if !flags.quiet {
                    eprintln!("next: {route}");
                }
            }
            Ok(())
        }
        Step::Redirect(next) => output(&json!({ "next": next }), flags.format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_fee_fields_stay_blank_for_validation() {
        let args = FeeFormArgs {
            cpi: Some("8.1".into()),
            bank_name: None,
            transaction_id: Some("UTR9".into()),
            transaction_date: None,
            amount: Some("45000".into()),
        };
        let form = fee_form(&args);
        assert_eq!(form.bank_name, "");
        let err = form.parse(10.0).unwrap_err();
        assert!(err.to_string().contains("bank_name"));
        assert!(err.to_string().contains("transaction_date"));
    }

    #[test]
    fn profile_flags_map_to_editable_fields() {
        let args = ProfileArgs {
            phone: Some("9000".into()),
            email: None,
            contact: None,
            address: Some("Hostel 4".into()),
            proceed: false,
        };
        let fields = editable_from(&args);
        assert_eq!(fields.phone.as_deref(), Some("9000"));
        assert!(fields.email.is_none());
        assert!(!fields.is_empty());
    }
}
