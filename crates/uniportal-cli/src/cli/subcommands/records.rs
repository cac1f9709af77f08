use clap::{Args, Subcommand};

/// Student records (admin).
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// List students.
    List,
    /// Get a student by ID.
    Get { id: String },
    /// Add a student.
    Add(StudentArgs),
    /// Edit selected fields of a student.
    Edit(EditArgs),
    /// Remove a student.
    Remove(RemoveArgs),
}

/// Faculty records (admin).
#[derive(Clone, Debug, Subcommand)]
pub enum FacultyCommands {
    List,
    Get { id: String },
    Add(FacultyArgs),
    Edit(EditArgs),
    Remove(RemoveArgs),
}

/// Course records (admin).
#[derive(Clone, Debug, Subcommand)]
pub enum CourseCommands {
    List,
    Get { id: String },
    Add(CourseArgs),
    Edit(EditArgs),
    Remove(RemoveArgs),
}

#[derive(Clone, Debug, Args)]
pub struct StudentArgs {
    #[arg(long)]
    pub student_id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub programme: String,
    #[arg(long)]
    pub department: String,
    #[arg(long)]
    pub batch: String,
    #[arg(long)]
    pub current_semester: Option<u32>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub faculty_advisor_id: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct FacultyArgs {
    #[arg(long)]
    pub faculty_id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub department: String,
    #[arg(long)]
    pub designation: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CourseArgs {
    #[arg(long)]
    pub course_code: String,
    #[arg(long)]
    pub course_name: String,
    #[arg(long)]
    pub credits: Option<u32>,
    #[arg(long)]
    pub department: String,
    #[arg(long)]
    pub description: Option<String>,
}

/// Only the fields named with `--set` are sent.
#[derive(Clone, Debug, Args)]
pub struct EditArgs {
    pub id: String,
    /// FIELD=VALUE, repeatable.
    #[arg(long, value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,
    /// New password; needs --confirm-password.
    #[arg(long, requires = "confirm_password")]
    pub password: Option<String>,
    #[arg(long, requires = "password")]
    pub confirm_password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RemoveArgs {
    pub id: String,
    /// Skip the confirmation step.
    #[arg(long)]
    pub yes: bool,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))?;
    if field.trim().is_empty() {
        return Err(format!("missing field name in '{raw}'"));
    }
    Ok((field.trim().to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_assignment;
    use pretty_assertions::assert_eq;

    #[test]
    fn value_may_contain_equals() {
        assert_eq!(
            parse_assignment("address=Block=A").unwrap(),
            ("address".to_string(), "Block=A".to_string())
        );
    }

    #[test]
    fn empty_value_is_kept_for_the_form_to_judge() {
        assert_eq!(
            parse_assignment("phone=").unwrap(),
            ("phone".to_string(), String::new())
        );
        assert!(parse_assignment("=x").is_err());
    }
}
