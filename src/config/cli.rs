use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "product-catalog")]
#[command(about = "A small product catalog HTTP service")]
pub struct CatalogConfig {
    #[arg(long, env = "CATALOG_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "CATALOG_PORT", default_value = "8080")]
    pub port: u16,

    /// Base URL of the product-updated webhook receiver; blank or unset disables notifications
    #[arg(long, env = "PRODUCT_UPDATED_BASE_URL")]
    pub product_updated_base_url: Option<String>,

    /// Static key forwarded to the webhook receiver
    #[arg(long, env = "PRODUCT_UPDATED_KEY")]
    pub product_updated_key: Option<String>,

    #[arg(long, env = "PRODUCT_UPDATED_TIMEOUT_SECS", default_value = "10")]
    pub notify_timeout_secs: u64,

    /// TOML file with the products to seed the in-memory store with
    #[arg(long, env = "CATALOG_SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    #[arg(long, help = "Start with an empty catalog")]
    pub no_seed: bool,

    #[arg(long, env = "CATALOG_LOG_FORMAT", value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CatalogConfig {
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The configured webhook base URL, treating a blank value as unset.
    pub fn notifier_base_url(&self) -> Option<&str> {
        self.product_updated_base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn notify_timeout(&self) -> Duration {
        Duration::from_secs(self.notify_timeout_secs)
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;

        if let Some(base_url) = self.notifier_base_url() {
            validate_url("product_updated_base_url", base_url)?;
        }

        validate_range("notify_timeout_secs", self.notify_timeout_secs, 1, 300)?;

        if let Some(seed_file) = &self.seed_file {
            validate_path("seed_file", &seed_file.to_string_lossy())?;
        }

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CatalogConfig {
        let mut argv = vec!["product-catalog"];
        argv.extend_from_slice(args);
        CatalogConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_explicit_flags() {
        let config = parse(&[
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "--product-updated-base-url",
            "https://hooks.example.com",
            "--product-updated-key",
            "k",
            "--notify-timeout-secs",
            "3",
            "--no-seed",
        ]);

        assert_eq!(config.server_address(), "127.0.0.1:9090");
        assert_eq!(config.notifier_base_url(), Some("https://hooks.example.com"));
        assert_eq!(config.product_updated_key.as_deref(), Some("k"));
        assert_eq!(config.notify_timeout(), Duration::from_secs(3));
        assert!(config.no_seed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_base_url_counts_as_unset() {
        let config = parse(&["--product-updated-base-url", "   "]);
        assert_eq!(config.notifier_base_url(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let bad_url = parse(&["--product-updated-base-url", "not a url"]);
        assert!(bad_url.validate().is_err());

        let bad_timeout = parse(&["--notify-timeout-secs", "0"]);
        assert!(bad_timeout.validate().is_err());

        let bad_host = parse(&["--host", " "]);
        assert!(bad_host.validate().is_err());
    }
}
