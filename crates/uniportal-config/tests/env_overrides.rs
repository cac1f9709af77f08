use figment::Jail;
use uniportal_config::PortalConfig;

#[test]
fn env_overrides_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("UNIPORTAL_API__BASE_URL", "http://10.0.0.5:5000");
        jail.set_env("UNIPORTAL_REGISTRATION__REDIRECT_DELAY_MS", "0");

        let config = PortalConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://10.0.0.5:5000");
        assert_eq!(config.registration.redirect_delay_ms, 0);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".uniportal")?;
        jail.create_file(
            ".uniportal/config.toml",
            r#"
[general]
default_limit = 50
"#,
        )?;
        jail.set_env("UNIPORTAL_GENERAL__DEFAULT_LIMIT", "5");

        let config = PortalConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}
