//! Academic calendar and academic years.
//!
//! Everyone can read the calendar; writes go through the generic forms with
//! [`CalendarEntry`] as the record. Academic years are admin-only.

use std::path::{Path, PathBuf};

use uniportal_core::entities::{AcademicYear, CalendarEntry, NewAcademicYear};
use uniportal_core::enums::Role;

use crate::error::PortalError;
use crate::portal::Portal;

pub async fn list(
    portal: &Portal,
    academic_year_id: Option<&str>,
) -> Result<Vec<CalendarEntry>, PortalError> {
    let session = portal.signed_in()?;
    let mut entries = portal
        .client
        .list_calendar(&session, academic_year_id)
        .await?;
    entries.sort_by(|a, b| a.start_date.cmp(&b.start_date));
    Ok(entries)
}

pub async fn get(portal: &Portal, entry_id: &str) -> Result<CalendarEntry, PortalError> {
    let session = portal.signed_in()?;
    Ok(portal.client.get_calendar_entry(&session, entry_id).await?)
}

/// Save an entry's PDF into `dir`, or to `dest` if it names a file.
///
/// Returns the path written.
pub async fn download(portal: &Portal, entry_id: &str, dest: &Path) -> Result<PathBuf, PortalError> {
    let session = portal.signed_in()?;
    let file = portal
        .client
        .download_calendar_entry(&session, entry_id)
        .await?;
    let path = if dest.is_dir() {
        dest.join(
            file.file_name
                .unwrap_or_else(|| format!("academic-calendar-{entry_id}.pdf")),
        )
    } else {
        dest.to_path_buf()
    };
    tokio::fs::write(&path, &file.bytes)
        .await
        .map_err(|source| PortalError::Io {
            path: path.display().to_string(),
            source,
        })?;
    tracing::info!(path = %path.display(), bytes = file.bytes.len(), "calendar downloaded");
    Ok(path)
}

pub async fn list_years(portal: &Portal) -> Result<Vec<AcademicYear>, PortalError> {
    let session = portal.authorize(&[Role::Admin])?;
    Ok(portal.client.list_academic_years(&session).await?)
}

pub async fn create_year(portal: &Portal, year: &NewAcademicYear) -> Result<String, PortalError> {
    let session = portal.authorize(&[Role::Admin])?;
    year.validate()?;
    let ack = portal.client.create_academic_year(&session, year).await?;
    Ok(ack.message_or("Academic year created successfully"))
}
