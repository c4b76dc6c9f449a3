// ABOUTME: Configuration module for the Treino insight engine
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

//! Configuration management
//!
//! The engine is configured exclusively through environment variables;
//! there is no file-based configuration layer.

/// Environment-based configuration for deployment-specific settings
pub mod environment;

pub use environment::{EngineConfig, Environment, LogLevel, RedisConnectionConfig};
