// ABOUTME: Core types for the Treino fitness insight engine
// ABOUTME: Foundation crate with error handling, insight models, and source-data shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

#![deny(unsafe_code)]

//! # Treino Core
//!
//! Foundation crate providing shared types for the Treino insight engine.
//! This crate is I/O-free and designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Insight records, user roles, login metadata, and the raw
//!   source-data shapes the dashboard backend returns

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (Insight, UserRole, LastLoginRecord, source-data shapes)
pub mod models;
