use serde::{Deserialize, Serialize};

use crate::enums::Audience;
use crate::errors::CoreError;
use crate::lenient;
use crate::validation::require_fields;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(
        alias = "announcementId",
        alias = "id",
        deserialize_with = "lenient::id"
    )]
    pub announcement_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "message", alias = "body")]
    pub content: String,
    #[serde(default)]
    pub audience: Audience,
    #[serde(default, alias = "postedBy", deserialize_with = "lenient::opt_id")]
    pub posted_by: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
    pub audience: Audience,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_by: Option<String>,
}

impl NewAnnouncement {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_fields(&[("title", &self.title), ("content", &self.content)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announcement_defaults_to_everyone() {
        let a: Announcement =
            serde_json::from_str(r#"{"id": 1, "title": "Exams", "message": "Start Monday"}"#)
                .unwrap();
        assert_eq!(a.audience, Audience::All);
        assert_eq!(a.content, "Start Monday");
    }

    #[test]
    fn new_announcement_needs_title_and_content() {
        let err = NewAnnouncement::default().validate().unwrap_err();
        assert!(err.to_string().contains("title, content"));
    }
}
