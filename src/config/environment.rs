// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

//! Environment-based configuration management

use serde::{Deserialize, Serialize};
use std::env;
use treino_core::errors::{AppError, AppResult};

/// Default backend API base URL for local development
const DEFAULT_API_BASE_URL: &str = "http://localhost:3333/api";

/// Default per-source fetch timeout in seconds
pub const DEFAULT_SOURCE_FETCH_TIMEOUT_SECS: u64 = 10;

/// Default HTTP request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default HTTP connect timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default Redis connection timeout in seconds
const DEFAULT_REDIS_CONNECTION_TIMEOUT_SECS: u64 = 5;

/// Default Redis response timeout in seconds
const DEFAULT_REDIS_RESPONSE_TIMEOUT_SECS: u64 = 3;

/// Default number of Redis reconnection retries after a dropped connection
const DEFAULT_REDIS_RECONNECTION_RETRIES: usize = 6;

/// Default number of retries for the initial Redis connection at startup
const DEFAULT_REDIS_INITIAL_CONNECTION_RETRIES: u32 = 3;

/// Default initial Redis retry delay in milliseconds
const DEFAULT_REDIS_INITIAL_RETRY_DELAY_MS: u64 = 500;

/// Default maximum Redis retry delay in milliseconds
const DEFAULT_REDIS_MAX_RETRY_DELAY_MS: u64 = 5000;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Standard operational logging
    #[default]
    Info,
    /// Verbose diagnostics
    Debug,
    /// Full tracing output
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Redis connection and retry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConnectionConfig {
    /// Connection timeout in seconds
    pub connection_timeout_secs: u64,
    /// Response/command timeout in seconds
    pub response_timeout_secs: u64,
    /// Number of reconnection retries after a connection drop
    pub reconnection_retries: usize,
    /// Number of retries for the initial connection at startup
    pub initial_connection_retries: u32,
    /// Initial retry delay in milliseconds (doubles with exponential backoff)
    pub initial_retry_delay_ms: u64,
    /// Maximum retry delay in milliseconds
    pub max_retry_delay_ms: u64,
}

impl Default for RedisConnectionConfig {
    fn default() -> Self {
        Self {
            connection_timeout_secs: DEFAULT_REDIS_CONNECTION_TIMEOUT_SECS,
            response_timeout_secs: DEFAULT_REDIS_RESPONSE_TIMEOUT_SECS,
            reconnection_retries: DEFAULT_REDIS_RECONNECTION_RETRIES,
            initial_connection_retries: DEFAULT_REDIS_INITIAL_CONNECTION_RETRIES,
            initial_retry_delay_ms: DEFAULT_REDIS_INITIAL_RETRY_DELAY_MS,
            max_retry_delay_ms: DEFAULT_REDIS_MAX_RETRY_DELAY_MS,
        }
    }
}

impl RedisConnectionConfig {
    /// Load Redis connection configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            connection_timeout_secs: env_parsed(
                "REDIS_CONNECTION_TIMEOUT_SECS",
                DEFAULT_REDIS_CONNECTION_TIMEOUT_SECS,
            ),
            response_timeout_secs: env_parsed(
                "REDIS_RESPONSE_TIMEOUT_SECS",
                DEFAULT_REDIS_RESPONSE_TIMEOUT_SECS,
            ),
            reconnection_retries: env_parsed(
                "REDIS_RECONNECTION_RETRIES",
                DEFAULT_REDIS_RECONNECTION_RETRIES,
            ),
            initial_connection_retries: env_parsed(
                "REDIS_INITIAL_CONNECTION_RETRIES",
                DEFAULT_REDIS_INITIAL_CONNECTION_RETRIES,
            ),
            initial_retry_delay_ms: env_parsed(
                "REDIS_INITIAL_RETRY_DELAY_MS",
                DEFAULT_REDIS_INITIAL_RETRY_DELAY_MS,
            ),
            max_retry_delay_ms: env_parsed(
                "REDIS_MAX_RETRY_DELAY_MS",
                DEFAULT_REDIS_MAX_RETRY_DELAY_MS,
            ),
        }
    }
}

/// Engine configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Base URL of the dashboard backend API
    pub api_base_url: String,
    /// Per-source fetch timeout in seconds for the aggregation path
    pub source_fetch_timeout_secs: u64,
    /// HTTP request timeout in seconds for the shared client
    pub request_timeout_secs: u64,
    /// HTTP connect timeout in seconds for the shared client
    pub connect_timeout_secs: u64,
    /// Redis URL for the persistent insight store (memory backend when unset)
    pub redis_url: Option<String>,
    /// Redis connection and retry configuration
    pub redis_connection: RedisConnectionConfig,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `TREINO_API_BASE_URL` is set but
    /// empty or when a timeout is set to zero.
    pub fn from_env() -> AppResult<Self> {
        let api_base_url =
            env::var("TREINO_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.into());
        if api_base_url.trim().is_empty() {
            return Err(AppError::config("TREINO_API_BASE_URL must not be empty"));
        }

        let source_fetch_timeout_secs = env_parsed(
            "SOURCE_FETCH_TIMEOUT_SECS",
            DEFAULT_SOURCE_FETCH_TIMEOUT_SECS,
        );
        if source_fetch_timeout_secs == 0 {
            return Err(AppError::config(
                "SOURCE_FETCH_TIMEOUT_SECS must be greater than zero",
            ));
        }

        Ok(Self {
            api_base_url,
            source_fetch_timeout_secs,
            request_timeout_secs: env_parsed("HTTP_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout_secs: env_parsed("HTTP_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
            redis_url: env::var("REDIS_URL").ok(),
            redis_connection: RedisConnectionConfig::from_env(),
            log_level: LogLevel::from_str_or_default(
                &env::var("LOG_LEVEL").unwrap_or_default(),
            ),
            environment: Environment::from_str_or_default(
                &env::var("ENVIRONMENT").unwrap_or_default(),
            ),
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            source_fetch_timeout_secs: DEFAULT_SOURCE_FETCH_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            redis_url: None,
            redis_connection: RedisConnectionConfig::default(),
            log_level: LogLevel::default(),
            environment: Environment::default(),
        }
    }
}

/// Read an environment variable and parse it, falling back to a default
fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
