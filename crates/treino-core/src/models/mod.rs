// ABOUTME: Core data models for the Treino insight engine
// ABOUTME: Re-exports Insight, UserRole, LastLoginRecord and raw source-data shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

//! # Data Models
//!
//! Core data structures shared across the insight engine.
//!
//! ## Design Principles
//!
//! - **Backend Agnostic**: source-data shapes are deserialization targets,
//!   not a wire-protocol definition — unknown fields are ignored
//! - **Serializable**: all models round-trip through JSON for the store
//! - **Type Safe**: closed enumerations for kinds, priorities, and roles

// Domain modules
mod insight;
mod login;
mod roles;
mod sources;

pub use insight::{Insight, InsightKind, InsightPriority};
pub use login::LastLoginRecord;
pub use roles::UserRole;
pub use sources::{
    ActivityLogEntry, CriticalAlert, FinanceStats, FinancialSummary, KpiSnapshot, ModuleStats,
    PlatformCounts, PredictiveAnalysis, SystemHealth,
};
