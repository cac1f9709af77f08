use clap::Subcommand;

/// Academic years (admin).
#[derive(Clone, Debug, Subcommand)]
pub enum AcademicYearCommands {
    /// List academic years.
    List,
    /// Create an academic year.
    Add {
        /// Display label, e.g. 2026-27.
        #[arg(long)]
        label: String,
        #[arg(long)]
        start_date: String,
        #[arg(long)]
        end_date: String,
        /// Mark as the current year.
        #[arg(long)]
        current: bool,
    },
}
