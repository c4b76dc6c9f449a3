// ABOUTME: Insight classification and ranking for the Treino platform
// ABOUTME: Pure threshold-based heuristics mapping backend payloads to insight records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

#![deny(unsafe_code)]

//! # Treino Intelligence
//!
//! Pure insight logic: the threshold table, the per-source classifiers, and
//! the ranking/merge pipeline. Nothing in this crate performs I/O — every
//! function is a deterministic transformation, which keeps the heuristics
//! independently testable and tunable.

/// Threshold table: every trigger threshold and fixed confidence constant
pub mod thresholds;

/// Per-source classifiers mapping raw payloads to insight records
pub mod classifiers;

/// Ranking and merge pipeline for insight lists
pub mod ranking;

pub use classifiers::InsightClassifier;
pub use thresholds::InsightThresholds;
