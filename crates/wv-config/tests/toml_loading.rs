//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use wv_config::{ConfigError, WagerConfig};
use wv_core::Level;

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://intel.wagervs.test/ai"
use_mock = false
timeout_secs = 4
"#,
        )?;

        let config: WagerConfig = Figment::from(Serialized::defaults(WagerConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://intel.wagervs.test/ai");
        assert!(config.api.is_remote());
        assert_eq!(config.api.timeout_secs, 4);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[mock]
catalog_path = "demos/catalog.toml"
"#,
        )?;

        let config: WagerConfig = Figment::from(Serialized::defaults(WagerConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.mock.catalog_path, "demos/catalog.toml");
        assert_eq!(config.mock.latency_ms, 0);
        assert!(config.api.use_mock);
        assert_eq!(config.general.default_level, 1);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_default_chain() {
    Jail::expect_with(|jail| {
        jail.create_dir(".wagervs")?;
        jail.create_file(
            ".wagervs/config.toml",
            r#"
[general]
default_level = 3
user_id = "user-7"

[mock]
latency_ms = 250
"#,
        )?;

        let config = WagerConfig::load().expect("config loads");
        assert_eq!(config.default_level().unwrap(), Level::Strategist);
        assert_eq!(config.general.user_id, "user-7");
        assert_eq!(config.mock.latency_ms, 250);
        Ok(())
    });
}

#[test]
fn invalid_level_in_file_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_dir(".wagervs")?;
        jail.create_file(
            ".wagervs/config.toml",
            r#"
[general]
default_level = 9
"#,
        )?;

        let err = WagerConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".wagervs")?;
        jail.create_file(
            ".wagervs/config.toml",
            r#"
[api]
timeout_secs = "soon"
"#,
        )?;

        let err = WagerConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
