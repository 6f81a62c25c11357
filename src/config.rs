// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Configuration is validated eagerly and failures are treated as
//! deployment errors rather than recoverable runtime conditions.

use anyhow::Result;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing, empty, or cannot be parsed, the provided
/// default value is used. This macro is appropriate for non-critical
/// tuning parameters where fallback behavior is acceptable.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
/// All configuration is resolved eagerly during initialization.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: server::ServerConfig,
}

impl AppConfig {
    /// Loads all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if configuration is invalid. This function is
    /// intended to be called exactly once at startup.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            server: server::ServerConfig::from_env()?,
        })
    }
}

// ============================================================
// Server configuration
// ============================================================

mod server {
    // ---
    use super::*;

    /// HTTP listener configuration derived from environment variables.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// TCP port the server listens on. Defaults to 3001.
        pub port: u16,
    }

    impl ServerConfig {
        /// Builds a [`ServerConfig`] from environment variables.
        ///
        /// `PORT` is the only knob this service exposes. An unset, empty,
        /// or unparsable value falls back to the default rather than
        /// failing startup.
        pub fn from_env() -> Result<Self> {
            // ---
            let port = optional_env_parse!("PORT", u16, 3001);

            Ok(Self { port })
        }

        /// Socket address string for the listener bind.
        pub fn bind_addr(&self) -> String {
            // ---
            format!("0.0.0.0:{}", self.port)
        }
    }
}
pub use server::ServerConfig;

// ============================================================
// Tests
// ============================================================
