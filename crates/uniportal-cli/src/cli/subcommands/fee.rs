use clap::Subcommand;

/// Fee transaction approval (admin).
#[derive(Clone, Debug, Subcommand)]
pub enum FeeCommands {
    /// List fee transactions.
    List {
        /// pending, approved or rejected (filtered by the server).
        #[arg(long)]
        status: Option<String>,
        /// Match student id, student name or bank transaction id.
        #[arg(long)]
        search: Option<String>,
    },
    /// Approve a transaction.
    Approve {
        id: String,
        #[arg(long)]
        remarks: Option<String>,
    },
    /// Reject a transaction.
    Reject {
        id: String,
        #[arg(long)]
        remarks: String,
    },
}
