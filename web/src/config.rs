use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default SQLite file, created on first start.
pub const DEFAULT_DATABASE_PATH: &str = "default_database";

#[derive(Clone, Debug)]
pub struct Config {
    /// sea-orm connection URL for the SQLite database
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    /// Environment name shown in the startup banner
    pub environment: String,
    /// Debug mode: verbose logging and error details in responses
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: sqlite_url(DEFAULT_DATABASE_PATH),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5000,
            environment: "development".to_string(),
            debug: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            lookup("DATABASE_PATH")
                .map(|path| sqlite_url(&path))
                .unwrap_or(defaults.database_url)
        });

        Self {
            database_url,
            host: lookup("HOST")
                .and_then(|h| h.parse().ok())
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
            debug: lookup("DEBUG")
                .and_then(|d| parse_bool(&d))
                .unwrap_or(defaults.debug),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Check if running in the development environment
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    /// Default tracing filter when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "info,stockroom_web=debug"
        } else {
            "info"
        }
    }
}

/// Connection URL for a SQLite file, creating it when missing.
pub fn sqlite_url(path: &str) -> String {
    format!("sqlite://{}?mode=rwc", path)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
