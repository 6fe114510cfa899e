//! Server settings: defaults, overridden by `STOCKROOM_*` environment variables,
//! overridden by command-line flags in `main.rs`.

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::models::Variant;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RESTOCK_THRESHOLD: usize = 5;
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Clone, Debug, Serialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub variant: Variant,
    /// More items than this counts as well stocked.
    pub restock_threshold: usize,
    /// Sessions idle longer than this are discarded.
    #[serde(rename = "session_ttl_secs", serialize_with = "as_secs")]
    pub session_ttl: Duration,
    #[serde(rename = "sweep_interval_secs", serialize_with = "as_secs")]
    pub sweep_interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            variant: Variant::default(),
            restock_threshold: DEFAULT_RESTOCK_THRESHOLD,
            session_ttl: DEFAULT_SESSION_TTL,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings from an arbitrary key lookup. Unparseable values are
    /// logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("STOCKROOM_HOST").unwrap_or(defaults.host);
        let port = parse_or("STOCKROOM_PORT", lookup("STOCKROOM_PORT"), defaults.port);
        let restock_threshold = parse_or(
            "STOCKROOM_RESTOCK_THRESHOLD",
            lookup("STOCKROOM_RESTOCK_THRESHOLD"),
            defaults.restock_threshold,
        );
        let session_ttl = parse_or(
            "STOCKROOM_SESSION_TTL_SECS",
            lookup("STOCKROOM_SESSION_TTL_SECS"),
            defaults.session_ttl.as_secs(),
        );

        let variant = match lookup("STOCKROOM_VARIANT") {
            Some(value) => Variant::from_str(value.trim()).unwrap_or_else(|| {
                tracing::warn!("Ignoring invalid STOCKROOM_VARIANT: {}", value);
                defaults.variant
            }),
            None => defaults.variant,
        };

        Self {
            host,
            port,
            variant,
            restock_threshold,
            session_ttl: Duration::from_secs(session_ttl),
            sweep_interval: defaults.sweep_interval,
        }
    }

    /// Apply command-line flags on top of the environment.
    pub fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<u16>,
        variant: Option<Variant>,
    ) {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(variant) = variant {
            self.variant = variant;
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn as_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_secs())
}

fn parse_or<T: std::str::FromStr>(key: &str, value: Option<String>, default: T) -> T {
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}: {}", key, raw);
            default
        }),
        None => default,
    }
}
