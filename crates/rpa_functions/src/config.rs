use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Record store table holding package checks (default: "PackageCheck")
    pub record_table_name: String,
    /// Path to SQLite database file (default: "pc269.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Per-request timeout in seconds (default: 30)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PC35_TABLENAME` - Record store table name (default: "PackageCheck")
    /// - `SQLITE_PATH` - SQLite database path (default: "pc269.db")
    /// - `REQUEST_TIMEOUT_SECONDS` - Per-request timeout (default: 30)
    pub fn from_env() -> Self {
        Self {
            record_table_name: env::var("PC35_TABLENAME")
                .unwrap_or_else(|_| "PackageCheck".to_string()),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "pc269.db".to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            record_table_name: "PackageCheck".to_string(),
            sqlite_path: "test.db".to_string(),
            request_timeout_seconds: 45,
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(45));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("PC35_TABLENAME");
        env::remove_var("SQLITE_PATH");
        env::remove_var("REQUEST_TIMEOUT_SECONDS");

        let config = Config::from_env();

        assert_eq!(config.record_table_name, "PackageCheck");
        assert_eq!(config.sqlite_path, "pc269.db");
        assert_eq!(config.request_timeout_seconds, 30);
    }
}
