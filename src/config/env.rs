// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use std::env;
use std::time::Duration;

use dotenv::dotenv;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 5000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Google Maps API key. Required; the service cannot run without it.
    pub google_maps_api_key: String,

    /// Sole origin allowed by the CORS policy
    pub frontend_origin: String,

    /// Admission control: requests allowed per client per window
    pub rate_limit_max_requests: u32,

    /// Admission control: window length in seconds
    pub rate_limit_window_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            // No default for the key; validate() rejects the empty value.
            google_maps_api_key: env::var("GOOGLE_MAPS_API_KEY").unwrap_or_else(|_| String::new()),

            frontend_origin: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),

            rate_limit_max_requests: env::var("RATE_LIMIT_MAX_REQUESTS")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(100),

            rate_limit_window_secs: env::var("RATE_LIMIT_WINDOW_SECS")
                .unwrap_or_else(|_| "900".to_string())
                .parse()
                .unwrap_or(900),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    /// A missing API key is fatal; the caller exits the process.
    pub fn validate(&self) -> Result<(), String> {
        if self.google_maps_api_key.is_empty() {
            return Err("GOOGLE_MAPS_API_KEY not found in environment variables".to_string());
        }

        if self.rate_limit_max_requests == 0 {
            return Err("RATE_LIMIT_MAX_REQUESTS must be greater than zero".to_string());
        }

        Ok(())
    }

    /// Admission control window as a Duration
    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }
}
