use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub providers: ProvidersConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// Outbound request timeout in seconds (default: 30)
    pub request_timeout_seconds: u32,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    /// Maximum database connections (default: 5)
    pub max_db_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:data/recondash.db".to_string(),
            log_level: "info".to_string(),
            request_timeout_seconds: 30,
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,

    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            cors_allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

/// One external lookup integration. A provider is only called when it is
/// enabled and its `api_key` is non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub enabled: bool,

    pub base_url: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_key: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: String::new(),
            api_key: String::new(),
        }
    }
}

impl ProviderConfig {
    fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.enabled && !self.api_key.is_empty()
    }
}

/// The full set of recognized integrations, one entry per vendor endpoint.
/// The Abstract API uses one account key across two endpoints, so it appears
/// twice (phone and email validation are separate hosts).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub numlookup: ProviderConfig,

    pub abstract_phone: ProviderConfig,

    pub abstract_email: ProviderConfig,

    pub veriphone: ProviderConfig,

    pub hunter: ProviderConfig,

    pub ipgeolocation: ProviderConfig,

    pub macvendors: ProviderConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self::with_default_urls()
    }
}

impl ProvidersConfig {
    fn with_default_urls() -> Self {
        Self {
            numlookup: ProviderConfig::with_base_url("https://api.numlookupapi.com/v1"),
            abstract_phone: ProviderConfig::with_base_url(
                "https://phonevalidation.abstractapi.com/v1",
            ),
            abstract_email: ProviderConfig::with_base_url(
                "https://emailvalidation.abstractapi.com/v1",
            ),
            veriphone: ProviderConfig::with_base_url("https://api.veriphone.io/v2"),
            hunter: ProviderConfig::with_base_url("https://api.hunter.io/v2"),
            ipgeolocation: ProviderConfig::with_base_url("https://api.ipgeolocation.io"),
            macvendors: ProviderConfig::with_base_url("https://api.macvendors.com/v1"),
        }
    }

    /// A config file can list just `api_key` for a provider; empty base URLs
    /// fall back to the vendor defaults.
    fn fill_base_url_defaults(&mut self) {
        let defaults = Self::with_default_urls();
        let pairs: [(&mut ProviderConfig, ProviderConfig); 7] = [
            (&mut self.numlookup, defaults.numlookup),
            (&mut self.abstract_phone, defaults.abstract_phone),
            (&mut self.abstract_email, defaults.abstract_email),
            (&mut self.veriphone, defaults.veriphone),
            (&mut self.hunter, defaults.hunter),
            (&mut self.ipgeolocation, defaults.ipgeolocation),
            (&mut self.macvendors, defaults.macvendors),
        ];

        for (provider, default) in pairs {
            if provider.base_url.is_empty() {
                provider.base_url = default.base_url;
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            server: ServerConfig::default(),
            providers: ProvidersConfig::with_default_urls(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                let mut config = Self::load_from_path(path)?;
                config.apply_env_overrides();
                return Ok(config);
            }
        }

        info!("No config file found, using defaults");
        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.providers.fill_base_url_defaults();

        Ok(config)
    }

    /// Environment variables win over the config file so deployments can keep
    /// credentials out of `config.toml`, matching the vendor dashboards' own
    /// variable names.
    pub fn apply_env_overrides(&mut self) {
        let overrides: [(&str, &mut ProviderConfig); 7] = [
            ("NUMLOOKUP_API_KEY", &mut self.providers.numlookup),
            ("ABSTRACT_API_KEY", &mut self.providers.abstract_phone),
            ("ABSTRACT_API_KEY", &mut self.providers.abstract_email),
            ("VERIPHONE_API_KEY", &mut self.providers.veriphone),
            ("HUNTERIO_API_KEY", &mut self.providers.hunter),
            ("IPGEOLOCATION_API_KEY", &mut self.providers.ipgeolocation),
            ("MACVENDORS_API_KEY", &mut self.providers.macvendors),
        ];

        for (var, provider) in overrides {
            if let Ok(key) = std::env::var(var)
                && !key.is_empty()
            {
                provider.api_key = key;
            }
        }
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("recondash").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".recondash").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.general.database_path.is_empty() {
            anyhow::bail!("Database path cannot be empty");
        }

        if self.general.request_timeout_seconds == 0 {
            anyhow::bail!("Request timeout must be > 0");
        }

        let providers = [
            ("numlookup", &self.providers.numlookup),
            ("abstract_phone", &self.providers.abstract_phone),
            ("abstract_email", &self.providers.abstract_email),
            ("veriphone", &self.providers.veriphone),
            ("hunter", &self.providers.hunter),
            ("ipgeolocation", &self.providers.ipgeolocation),
            ("macvendors", &self.providers.macvendors),
        ];

        for (name, provider) in providers {
            if provider.enabled && provider.base_url.is_empty() {
                anyhow::bail!("Provider '{}' is enabled but has no base_url", name);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.general.request_timeout_seconds, 30);
        assert!(config.providers.veriphone.enabled);
        assert!(!config.providers.veriphone.is_configured());
        assert_eq!(
            config.providers.ipgeolocation.base_url,
            "https://api.ipgeolocation.io"
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("[providers.numlookup]"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [providers.hunter]
            api_key = "hk_test"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.providers.hunter.api_key, "hk_test");
        assert!(config.providers.hunter.is_configured());

        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_disabled_provider_is_not_configured() {
        let mut config = Config::default();
        config.providers.macvendors.api_key = "key".to_string();
        config.providers.macvendors.enabled = false;
        assert!(!config.providers.macvendors.is_configured());
    }

    #[test]
    fn test_validate_rejects_enabled_provider_without_base_url() {
        let mut config = Config::default();
        config.providers.numlookup.base_url = String::new();
        assert!(config.validate().is_err());
    }
}
