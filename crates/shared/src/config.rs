//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// JWT configuration.
    pub jwt: JwtSettings,
    /// Email (SMTP) configuration.
    #[serde(default)]
    pub email: EmailConfig,
    /// Registry office configuration.
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// JWT configuration values.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Session token expiration in seconds.
    #[serde(default = "default_session_expiry")]
    pub session_expiry_secs: u64,
}

fn default_session_expiry() -> u64 {
    28800 // 8 hours, one office shift
}

/// Email (SMTP) configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// SMTP host.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username.
    #[serde(default)]
    pub smtp_username: String,
    /// SMTP password.
    #[serde(default)]
    pub smtp_password: String,
    /// From address for outgoing mail.
    #[serde(default = "default_from_email")]
    pub from_email: String,
    /// From display name for outgoing mail.
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025
}

fn default_from_email() -> String {
    "noreply@nagorik.local".to_string()
}

fn default_from_name() -> String {
    "Nagorik Registry".to_string()
}

/// Registry office configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Five-digit jurisdiction code stamped into resident certificate numbers.
    #[serde(default = "default_jurisdiction_code")]
    pub jurisdiction_code: String,
    /// Five-digit sentinel code stamped into non-resident certificate numbers.
    #[serde(default = "default_non_resident_code")]
    pub non_resident_code: String,
    /// Month (1-12) the fiscal year begins.
    #[serde(default = "default_fiscal_start_month")]
    pub fiscal_start_month: u32,
    /// One-time passcode time-to-live in minutes.
    #[serde(default = "default_otp_ttl_minutes")]
    pub otp_ttl_minutes: i64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            jurisdiction_code: default_jurisdiction_code(),
            non_resident_code: default_non_resident_code(),
            fiscal_start_month: default_fiscal_start_month(),
            otp_ttl_minutes: default_otp_ttl_minutes(),
        }
    }
}

fn default_jurisdiction_code() -> String {
    "41725".to_string()
}

fn default_non_resident_code() -> String {
    "99990".to_string()
}

fn default_fiscal_start_month() -> u32 {
    7
}

fn default_otp_ttl_minutes() -> i64 {
    10
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("NAGORIK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_defaults() {
        let registry = RegistryConfig::default();
        assert_eq!(registry.jurisdiction_code.len(), 5);
        assert_eq!(registry.non_resident_code.len(), 5);
        assert_ne!(registry.jurisdiction_code, registry.non_resident_code);
        assert_eq!(registry.fiscal_start_month, 7);
        assert_eq!(registry.otp_ttl_minutes, 10);
    }

    #[test]
    fn test_email_defaults() {
        let email = EmailConfig::default();
        assert_eq!(email.smtp_host, "localhost");
        assert_eq!(email.smtp_port, 1025);
    }
}
