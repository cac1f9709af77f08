//! Knobs for the registration workflow and the edit forms.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const fn default_redirect_delay_ms() -> u64 {
    2000
}

const fn default_min_password_len() -> usize {
    6
}

const fn default_cpi_max() -> f64 {
    10.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistrationConfig {
    /// Delay before the finalize step sends the student to the dashboard.
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,

    /// Minimum length for a password changed through an edit form.
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,

    /// Upper bound of the CPI scale. Values above it only produce a warning.
    #[serde(default = "default_cpi_max")]
    pub cpi_max: f64,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            redirect_delay_ms: default_redirect_delay_ms(),
            min_password_len: default_min_password_len(),
            cpi_max: default_cpi_max(),
        }
    }
}

impl RegistrationConfig {
    #[must_use]
    pub const fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}
