use clap::{Args, Subcommand};

/// Semester registration (student).
#[derive(Clone, Debug, Subcommand)]
pub enum RegisterCommands {
    /// Step 1: review the profile and optionally update contact details.
    Profile(ProfileArgs),
    /// Step 2: pick courses from the current offerings.
    Courses {
        /// Offering id to tick or untick, repeatable.
        #[arg(long)]
        toggle: Vec<String>,
        /// Post the selection and move on to finalize.
        #[arg(long)]
        submit: bool,
    },
    /// Step 3: show the summary, or submit the fee and register.
    Finalize(FinalizeArgs),
    /// Where the registration stands.
    Status,
    /// Drop the selection and fee progress; the reviewed profile is kept.
    Reset {
        /// Also forget the reviewed profile and start from step 1.
        #[arg(long)]
        all: bool,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Emergency contact.
    #[arg(long)]
    pub contact: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    /// Save the profile and continue to course selection.
    #[arg(long = "continue")]
    pub proceed: bool,
}

#[derive(Clone, Debug, Args)]
pub struct FinalizeArgs {
    #[command(flatten)]
    pub fee: FeeFormArgs,
    /// Return right away instead of waiting out the dashboard redirect.
    #[arg(long)]
    pub no_wait: bool,
}

/// Leave every field out to only view the summary.
#[derive(Clone, Debug, Args)]
pub struct FeeFormArgs {
    #[arg(long)]
    pub cpi: Option<String>,
    #[arg(long)]
    pub bank_name: Option<String>,
    #[arg(long)]
    pub transaction_id: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub transaction_date: Option<String>,
    #[arg(long)]
    pub amount: Option<String>,
}

impl FeeFormArgs {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cpi.is_none()
            && self.bank_name.is_none()
            && self.transaction_id.is_none()
            && self.transaction_date.is_none()
            && self.amount.is_none()
    }
}
