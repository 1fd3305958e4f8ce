use shared_types::{AppConfig, FeatureFlags, OfficeSettings};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Longest accepted session token lifetime: one year.
pub const MAX_TOKEN_TTL_MINUTES: i64 = 525_600;

/// Longest accepted simulated send delay.
pub const MAX_MESSAGE_DELAY_MS: u64 = 60_000;

/// Parse config text. Unparseable input falls back to defaults; out of
/// range office settings are corrected by [`sanitize_office`].
pub fn parse_config(contents: &str) -> AppConfig {
    let mut config: AppConfig = toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, using defaults");
        AppConfig::default()
    });
    config.office = sanitize_office(config.office);
    config
}

/// A token lifetime outside `1..=MAX_TOKEN_TTL_MINUTES` is replaced by the
/// default; a send delay above `MAX_MESSAGE_DELAY_MS` is clamped.
pub fn sanitize_office(mut office: OfficeSettings) -> OfficeSettings {
    let defaults = OfficeSettings::default();
    if !(1..=MAX_TOKEN_TTL_MINUTES).contains(&office.token_ttl_minutes) {
        tracing::warn!(
            value = office.token_ttl_minutes,
            fallback = defaults.token_ttl_minutes,
            "token_ttl_minutes out of range, using default"
        );
        office.token_ttl_minutes = defaults.token_ttl_minutes;
    }
    if office.message_delay_ms > MAX_MESSAGE_DELAY_MS {
        tracing::warn!(
            value = office.message_delay_ms,
            max = MAX_MESSAGE_DELAY_MS,
            "message_delay_ms too large, clamping"
        );
        office.message_delay_ms = MAX_MESSAGE_DELAY_MS;
    }
    office
}

/// Read `config.toml` once and keep it for the process lifetime. Safe to
/// call repeatedly; only the first call touches the file.
///
/// A missing file yields defaults (optional pages off, 1000 ms send delay).
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            tracing::info!(features = ?config.features, office = %config.office.name, "config loaded");
            config
        }
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "config not found, using defaults");
            AppConfig::default()
        }
    })
}

pub fn feature_flags() -> &'static FeatureFlags {
    &load_config().features
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config_reads_office_section() {
        let config = parse_config(
            r#"
            [features]
            legal_assistant = true

            [office]
            name = "مكتب الاختبار"
            token_ttl_minutes = 60
            "#,
        );
        assert!(config.features.legal_assistant);
        assert!(!config.features.messaging);
        assert_eq!(config.office.name, "مكتب الاختبار");
        assert_eq!(config.office.token_ttl_minutes, 60);
        assert_eq!(config.office.message_delay_ms, 1000);
    }

    #[test]
    fn out_of_range_token_ttl_falls_back_to_default() {
        for ttl in [i64::MAX, MAX_TOKEN_TTL_MINUTES + 1, 0, -5] {
            let config = parse_config(&format!("[office]\ntoken_ttl_minutes = {ttl}\n"));
            assert_eq!(config.office.token_ttl_minutes, 480, "ttl {ttl}");
        }
        let config = parse_config("[office]\ntoken_ttl_minutes = 525600\n");
        assert_eq!(config.office.token_ttl_minutes, MAX_TOKEN_TTL_MINUTES);
    }

    #[test]
    fn oversized_message_delay_is_clamped() {
        let config = parse_config("[office]\nmessage_delay_ms = 5000000000\n");
        assert_eq!(config.office.message_delay_ms, MAX_MESSAGE_DELAY_MS);
        let config = parse_config("[office]\nmessage_delay_ms = 0\n");
        assert_eq!(config.office.message_delay_ms, 0);
    }

    #[test]
    fn parse_config_garbage_defaults() {
        assert_eq!(parse_config("[[[ not toml"), AppConfig::default());
    }
}
