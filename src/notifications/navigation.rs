// ABOUTME: Fixed lookup table resolving module keys to dashboard routes
// ABOUTME: Unknown module keys resolve to the dashboard landing page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

/// Route shown when a module key has no dedicated destination
pub const DASHBOARD_ROUTE: &str = "/admin";

/// Resolve an insight's opaque module key to a navigation route
#[must_use]
pub fn route_for_module(module: &str) -> &'static str {
    match module {
        "admin-finance" => "/admin/financeiro",
        "admin-students" => "/admin/alunos",
        "admin-coaches" => "/admin/treinadores",
        "admin-system" => "/admin/sistema",
        "admin-operations" => "/admin/operacoes",
        "coach-dashboard" => "/treinador",
        "student-dashboard" => "/aluno",
        _ => DASHBOARD_ROUTE,
    }
}
