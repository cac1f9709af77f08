use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in and remember the session.
    Login(AuthLoginArgs),
    /// Forget the stored session and any registration draft.
    Logout,
    /// Show who is logged in and when the token expires.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// admin, faculty or student (default student).
    #[arg(long)]
    pub role: Option<String>,
}
