use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use tracing::warn;

/// Which listing backing the process runs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backing {
    /// Hosted PostgREST service (Supabase)
    Durable { url: String, service_key: String },
    /// Process-lifetime memory, seeded with demo listings
    Transient,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub supabase_url: Option<String>,
    pub supabase_service_key: Option<String>,
    pub store_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; missing keys fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = non_empty("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        let timeout_secs: u64 = non_empty("STORE_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .context("STORE_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            host: non_empty("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            supabase_url: non_empty("SUPABASE_URL"),
            supabase_service_key: non_empty("SUPABASE_SERVICE_ROLE_KEY"),
            store_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Durable backing only when both Supabase values are present
    pub fn backing(&self) -> Backing {
        match (&self.supabase_url, &self.supabase_service_key) {
            (Some(url), Some(service_key)) => Backing::Durable {
                url: url.trim_end_matches('/').to_string(),
                service_key: service_key.clone(),
            },
            _ => {
                warn!(
                    "SUPABASE_URL / SUPABASE_SERVICE_ROLE_KEY are not set; listings live in memory and are lost on restart"
                );
                Backing::Transient
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
