// ABOUTME: User role enumeration for the multi-role dashboard
// ABOUTME: Gates the admin-only multi-source aggregation path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authenticated user roles on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Platform administrator with access to all modules
    Admin,
    /// Coach managing assigned students
    Coach,
    /// Enrolled fitness student
    FitnessStudent,
}

impl UserRole {
    /// Whether this role may run the admin multi-source aggregation path
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Coach => write!(f, "coach"),
            Self::FitnessStudent => write!(f, "fitness_student"),
        }
    }
}
