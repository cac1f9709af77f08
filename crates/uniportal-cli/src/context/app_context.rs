use anyhow::Context;
use uniportal_client::PortalClient;
use uniportal_config::PortalConfig;
use uniportal_session::SessionContext;
use uniportal_workflow::Portal;

/// Shared resources built once at startup.
pub struct AppContext {
    pub portal: Portal,
    pub config: PortalConfig,
}

impl AppContext {
    /// Build the backend client and open the session file named by `config`.
    pub fn init(config: PortalConfig) -> anyhow::Result<Self> {
        let client = PortalClient::from_config(&config.api)
            .context("failed to build the portal HTTP client")?;
        let session_path = config.session.path().context(
            "cannot locate a home directory for the session file; set UNIPORTAL_SESSION__DIR",
        )?;
        let session = SessionContext::file(session_path);
        tracing::debug!(backend = %client.base_url(), store = %session.describe(), "portal context ready");

        Ok(Self {
            portal: Portal::new(client, session, config.registration.clone()),
            config,
        })
    }

    /// Rows to print for a list command: `--limit`, else `general.default_limit`.
    #[must_use]
    pub fn limit(&self, global: Option<u32>) -> usize {
        let limit = global.unwrap_or(self.config.general.default_limit);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}
