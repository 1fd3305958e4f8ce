use serde::{Deserialize, Serialize};

/// Optional dashboard sections that can be switched off per deployment.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Every field defaults to `false` so that a
/// missing or incomplete config file hides the optional pages.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub legal_assistant: bool,
    #[serde(default)]
    pub messaging: bool,
}

/// Office-level settings shared by the server and the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfficeSettings {
    #[serde(default = "default_office_name")]
    pub name: String,
    /// Fixed delay used by the simulated message send.
    #[serde(default = "default_message_delay_ms")]
    pub message_delay_ms: u64,
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: i64,
}

fn default_office_name() -> String {
    "مكتب المحاماة".to_string()
}

fn default_message_delay_ms() -> u64 {
    1000
}

fn default_token_ttl_minutes() -> i64 {
    480
}

impl Default for OfficeSettings {
    fn default() -> Self {
        Self {
            name: default_office_name(),
            message_delay_ms: default_message_delay_ms(),
            token_ttl_minutes: default_token_ttl_minutes(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub office: OfficeSettings,
}
