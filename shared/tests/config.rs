use figment::Jail;
use shared::{LogFormat, load_config_from};
use std::time::Duration;

#[test]
fn defaults_apply_without_settings_file() {
    Jail::expect_with(|_jail| {
        let config = load_config_from("missing.toml").map_err(|e| e.to_string())?;
        assert_eq!(config.views.page_size, 30);
        assert_eq!(config.views.default_chemical_statuses, "available,low_stock");
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert_eq!(
            config.api.request_timeout().map_err(|e| e.to_string())?,
            Duration::from_secs(30)
        );
        Ok(())
    });
}

#[test]
fn file_then_env_layering() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "Settings.toml",
            r#"
            [api]
            base_url = "https://supplyline.example.com/"
            request_timeout = "5s"

            [views]
            page_size = 10
            "#,
        )?;
        jail.set_env("SUPPLYLINE__VIEWS__PAGE_SIZE", "50");
        jail.set_env("SUPPLYLINE__LOGGING__FORMAT", "json");

        let config = load_config_from("Settings.toml").map_err(|e| e.to_string())?;
        assert_eq!(config.api.base_url, "https://supplyline.example.com/");
        assert_eq!(config.views.page_size, 50);
        assert_eq!(config.logging.format, LogFormat::Json);
        Ok(())
    });
}

#[test]
fn invalid_values_fail_at_load_time() {
    Jail::expect_with(|jail| {
        jail.set_env("SUPPLYLINE__FORMS__SUCCESS_CLOSE_DELAY", "soon");
        assert!(load_config_from("Settings.toml").is_err());
        Ok(())
    });

    Jail::expect_with(|jail| {
        jail.set_env("SUPPLYLINE__VIEWS__PAGE_SIZE", "0");
        assert!(load_config_from("Settings.toml").is_err());
        Ok(())
    });
}
