use clap::Subcommand;

/// Announcements.
#[derive(Clone, Debug, Subcommand)]
pub enum AnnouncementCommands {
    /// List announcements addressed to your role, newest first.
    List,
    /// Post an announcement (admin, faculty).
    Post {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// all, students or faculty.
        #[arg(long, default_value = "all")]
        audience: String,
    },
}
