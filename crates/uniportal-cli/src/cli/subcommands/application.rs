use clap::Subcommand;

/// Registration applications assigned to you (faculty).
#[derive(Clone, Debug, Subcommand)]
pub enum ApplicationCommands {
    List {
        /// pending, approved or rejected.
        #[arg(long)]
        status: Option<String>,
    },
    Get {
        id: String,
    },
    Approve {
        id: String,
        #[arg(long)]
        remarks: Option<String>,
    },
    Reject {
        id: String,
        #[arg(long)]
        remarks: String,
    },
}
