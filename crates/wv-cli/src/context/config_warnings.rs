use wv_config::WagerConfig;

const SECTIONS: [&str; 3] = ["API", "MOCK", "GENERAL"];

/// Emit warnings for likely mistyped env var keys and settings that will
/// make service commands fail.
pub fn warn_unconfigured(config: &WagerConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &WagerConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    for section in SECTIONS {
        let single = format!("WAGERVS_{section}_");
        let double = format!("WAGERVS_{section}__");
        if let Some(key) = env_keys
            .iter()
            .find(|key| key.starts_with(&single) && !key.starts_with(&double))
        {
            warnings.push(format!(
                "{key} is ignored. Use double underscores between section and field (example: {double}{}).",
                key.trim_start_matches(&single)
            ));
        }
    }

    if !config.api.is_remote() && !config.mock.is_configured() {
        warnings.push(
            "api.use_mock is set but mock.catalog_path is empty; chat, insight and draft will fail. Set WAGERVS_MOCK__CATALOG_PATH."
                .to_string(),
        );
    }

    warnings
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wv_config::{MockConfig, WagerConfig};

    use super::collect_unconfigured_warnings;

    fn configured() -> WagerConfig {
        WagerConfig {
            mock: MockConfig {
                catalog_path: "catalog.toml".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &configured(),
            vec![
                ("WAGERVS_MOCK_CATALOG_PATH".to_string(), "c.toml".to_string()),
                ("WAGERVS_API_USE_MOCK".to_string(), "false".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("WAGERVS_API__USE_MOCK"), "{}", warnings[0]);
        assert!(warnings[1].contains("WAGERVS_MOCK__CATALOG_PATH"), "{}", warnings[1]);
    }

    #[test]
    fn does_not_warn_for_well_formed_keys() {
        let warnings = collect_unconfigured_warnings(
            &configured(),
            vec![
                ("WAGERVS_MOCK__CATALOG_PATH".to_string(), "c.toml".to_string()),
                ("WAGERVS_GENERAL__DEFAULT_LEVEL".to_string(), "3".to_string()),
                ("WAGERVS_LOG".to_string(), "debug".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn warns_when_local_mode_has_no_catalog() {
        let warnings = collect_unconfigured_warnings(&WagerConfig::default(), Vec::new());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("mock.catalog_path"));
    }
}
