// src/config.rs
use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    catalog_path: PathBuf,
    product_image_dir: PathBuf,
    site_base_url: String,
    contact_endpoint: Option<String>,
    contact_subject: String,
    contact_recipient: Option<String>,
    contact_timeout: Duration,
    allowed_origins: Vec<String>,
    contact_rate_limit_period: Duration,
    contact_rate_limit_burst: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("public/products.json")
}

fn default_product_image_dir() -> PathBuf {
    PathBuf::from("public/products")
}

fn default_site_base_url() -> String {
    "https://lumezza.com".into()
}

fn default_contact_subject() -> String {
    "Lumezza Jewelry Contact Form Submission".into()
}

const fn default_contact_timeout_secs() -> u64 {
    10
}

const fn default_contact_rate_limit_secs() -> u64 {
    10
}

const fn default_contact_rate_limit_burst() -> u32 {
    3
}

fn positive_var<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let Some(raw) = optional_var(key) else {
        return Ok(default);
    };
    raw.parse::<T>()
        .ok()
        .filter(|value| *value > T::default())
        .ok_or_else(|| {
            ConfigError::Invalid(format!("{key} must be a positive integer, got {raw:?}"))
        })
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

/// Non-blank value of `key`, trimmed.
fn optional_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_http_url(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{key} must be an http(s) URL, got {value:?}"
        )))
    }
}

impl AppConfig {
    /// Build configuration from environment variables. Every key has a
    /// default except `CONTACT_ENDPOINT` and `CONTACT_RECIPIENT`, which are
    /// optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let listen_addr = optional_var("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let catalog_path = optional_var("CATALOG_PATH")
            .map_or_else(default_catalog_path, PathBuf::from);
        let product_image_dir = optional_var("PRODUCT_IMAGE_DIR")
            .map_or_else(default_product_image_dir, PathBuf::from);

        let site_base_url = optional_var("SITE_BASE_URL")
            .unwrap_or_else(default_site_base_url)
            .trim_end_matches('/')
            .to_string();
        validate_http_url("SITE_BASE_URL", &site_base_url)?;

        let contact_endpoint = optional_var("CONTACT_ENDPOINT");
        if let Some(endpoint) = &contact_endpoint {
            validate_http_url("CONTACT_ENDPOINT", endpoint)?;
        }

        let contact_subject =
            optional_var("CONTACT_SUBJECT").unwrap_or_else(default_contact_subject);
        let contact_recipient = optional_var("CONTACT_RECIPIENT");

        let contact_timeout_secs =
            positive_var("CONTACT_TIMEOUT_SECONDS", default_contact_timeout_secs())?;
        let contact_rate_limit_secs =
            positive_var("CONTACT_RATE_LIMIT_SECONDS", default_contact_rate_limit_secs())?;
        let contact_rate_limit_burst =
            positive_var("CONTACT_RATE_LIMIT_BURST", default_contact_rate_limit_burst())?;

        let allowed_origins = optional_var("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            listen_addr,
            catalog_path,
            product_image_dir,
            site_base_url,
            contact_endpoint,
            contact_subject,
            contact_recipient,
            contact_timeout: Duration::from_secs(contact_timeout_secs),
            allowed_origins,
            contact_rate_limit_period: Duration::from_secs(contact_rate_limit_secs),
            contact_rate_limit_burst,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn catalog_path(&self) -> &PathBuf {
        &self.catalog_path
    }

    pub fn product_image_dir(&self) -> &PathBuf {
        &self.product_image_dir
    }

    /// Public site origin without a trailing slash.
    pub fn site_base_url(&self) -> &str {
        &self.site_base_url
    }

    /// Relay endpoint; `None` means submissions are only logged.
    pub fn contact_endpoint(&self) -> Option<&str> {
        self.contact_endpoint.as_deref()
    }

    pub fn contact_subject(&self) -> &str {
        &self.contact_subject
    }

    pub fn contact_recipient(&self) -> Option<&str> {
        self.contact_recipient.as_deref()
    }

    pub fn contact_timeout(&self) -> Duration {
        self.contact_timeout
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Interval after which one more contact submission is allowed per client.
    pub fn contact_rate_limit_period(&self) -> Duration {
        self.contact_rate_limit_period
    }

    pub fn contact_rate_limit_burst(&self) -> u32 {
        self.contact_rate_limit_burst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_url_validation() {
        assert!(validate_http_url("K", "https://lumezza.com").is_ok());
        assert!(validate_http_url("K", "http://localhost:3000").is_ok());
        assert!(validate_http_url("K", "lumezza.com").is_err());
        assert!(validate_http_url("K", "ftp://x").is_err());
    }

    #[test]
    fn positive_var_falls_back_to_default_when_unset() {
        let value: u32 = positive_var("LUMEZZA_TEST_UNSET_POSITIVE_VAR", 7).unwrap();
        assert_eq!(value, 7);
    }
}
