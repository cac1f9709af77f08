use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::{EditArgs, RemoveArgs};

/// Academic calendar.
#[derive(Clone, Debug, Subcommand)]
pub enum CalendarCommands {
    /// List entries by start date.
    List {
        #[arg(long)]
        year: Option<String>,
    },
    Get {
        id: String,
    },
    /// Add an entry (admin).
    Add(CalendarArgs),
    /// Edit selected fields of an entry (admin).
    Edit(EditArgs),
    /// Remove an entry (admin).
    Remove(RemoveArgs),
    /// Save an entry's PDF.
    Download {
        id: String,
        /// Directory or file path to write to.
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(Clone, Debug, Args)]
pub struct CalendarArgs {
    #[arg(long)]
    pub academic_year_id: String,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub event_type: String,
    #[arg(long)]
    pub start_date: String,
    #[arg(long)]
    pub end_date: String,
    #[arg(long)]
    pub description: Option<String>,
}
