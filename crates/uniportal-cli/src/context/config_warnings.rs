use uniportal_config::{ApiConfig, PortalConfig};

/// Variables read directly rather than through the config layers.
const STANDALONE: &[&str] = &["UNIPORTAL_LOG"];

/// Emit warnings for env var keys that look like config but were ignored.
pub fn warn_unconfigured(config: &PortalConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PortalConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut warnings = Vec::new();
    for (key, _) in env {
        let Some(rest) = key.strip_prefix("UNIPORTAL_") else {
            continue;
        };
        if STANDALONE.contains(&key.as_str()) || rest.contains("__") {
            continue;
        }
        warnings.push(format!(
            "{key} is not a config key. Use double underscores between section and field (example: UNIPORTAL_API__BASE_URL)."
        ));
    }

    if config.api.base_url == ApiConfig::default().base_url && !warnings.is_empty() {
        warnings.push(format!(
            "Using the default backend {}; set api.base_url to point elsewhere.",
            config.api.base_url
        ));
    }
    warnings
}
