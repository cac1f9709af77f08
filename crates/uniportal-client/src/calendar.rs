//! Academic calendar entries.

use reqwest::header::CONTENT_DISPOSITION;
use uniportal_core::entities::{CalendarEntry, NewCalendarEntry, Session};
use uniportal_core::updates::CalendarUpdate;

use crate::{Ack, AuthScheme, Call, ClientError, PortalClient, seg};

/// A file served by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Name from `Content-Disposition`, if the server sent one.
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

impl PortalClient {
    pub async fn list_calendar(
        &self,
        session: &Session,
        academic_year_id: Option<&str>,
    ) -> Result<Vec<CalendarEntry>, ClientError> {
        let path = academic_year_id.map_or_else(
            || "/api/academic-calendar".to_string(),
            |id| format!("/api/academic-calendar?academic_year_id={}", seg(id)),
        );
        self.fetch_list(Call::get(path, AuthScheme::Bearer).by(session))
            .await
    }

    pub async fn get_calendar_entry(
        &self,
        session: &Session,
        entry_id: &str,
    ) -> Result<CalendarEntry, ClientError> {
        let path = format!("/api/academic-calendar/{}", seg(entry_id));
        self.fetch(Call::get(path, AuthScheme::Bearer).by(session))
            .await
    }

    pub async fn create_calendar_entry(
        &self,
        session: &Session,
        entry: &NewCalendarEntry,
    ) -> Result<Ack, ClientError> {
        let call = Call::post("/api/academic-calendar", AuthScheme::Bearer).by(session);
        self.mutate(call, Some(entry)).await
    }

    pub async fn update_calendar_entry(
        &self,
        session: &Session,
        entry_id: &str,
        update: &CalendarUpdate,
    ) -> Result<Ack, ClientError> {
        let path = format!("/api/academic-calendar/{}", seg(entry_id));
        self.mutate(Call::put(path, AuthScheme::Bearer).by(session), Some(update))
            .await
    }

    pub async fn delete_calendar_entry(
        &self,
        session: &Session,
        entry_id: &str,
    ) -> Result<Ack, ClientError> {
        let path = format!("/api/academic-calendar/{}", seg(entry_id));
        self.mutate::<()>(Call::delete(path, AuthScheme::Bearer).by(session), None)
            .await
    }

    /// `GET /api/academic-calendar/:id/download`, the entry's PDF.
    ///
    /// # Errors
    ///
    /// [`ClientError::Api`] when the server refuses or has no file.
    pub async fn download_calendar_entry(
        &self,
        session: &Session,
        entry_id: &str,
    ) -> Result<Download, ClientError> {
        let path = format!("/api/academic-calendar/{}/download", seg(entry_id));
        let resp = self
            .respond::<()>(Call::get(path, AuthScheme::Bearer).by(session), None)
            .await?;
        let file_name = resp
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(attachment_name);
        Ok(Download {
            file_name,
            bytes: resp.bytes().await?.to_vec(),
        })
    }
}

/// `attachment; filename="cal.pdf"` → `cal.pdf`.
fn attachment_name(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty() && !name.contains(['/', '\\']))
}

#[cfg(test)]
mod tests {
    use super::attachment_name;

    #[test]
    fn reads_quoted_and_bare_file_names() {
        assert_eq!(
            attachment_name(r#"attachment; filename="calendar-2026.pdf""#).as_deref(),
            Some("calendar-2026.pdf")
        );
        assert_eq!(
            attachment_name("attachment; filename=cal.pdf").as_deref(),
            Some("cal.pdf")
        );
        assert_eq!(attachment_name("inline"), None);
        assert_eq!(attachment_name(r#"attachment; filename="../x""#), None);
    }
}
