// ABOUTME: Per-source insight classifiers for the Treino dashboard
// ABOUTME: Pure threshold checks mapping one backend payload to zero or more insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

//! Insight classifiers
//!
//! One pure method per backend data source. Each method receives an already
//! deserialized payload and returns zero or more [`Insight`] records; no
//! method performs I/O or observes state outside its input. A source whose
//! fetch failed simply never reaches its classifier.

use crate::thresholds::InsightThresholds;
use serde_json::json;
use treino_core::models::{
    ActivityLogEntry, CriticalAlert, FinancialSummary, Insight, InsightKind, InsightPriority,
    KpiSnapshot, LastLoginRecord, ModuleStats, PlatformCounts, PredictiveAnalysis, SystemHealth,
};

/// Module key for the financial dashboard
pub const MODULE_FINANCE: &str = "admin-finance";
/// Module key for the system health dashboard
pub const MODULE_SYSTEM: &str = "admin-system";
/// Module key for student management
pub const MODULE_STUDENTS: &str = "admin-students";
/// Module key for coach management
pub const MODULE_COACHES: &str = "admin-coaches";
/// Module key for the operations log
pub const MODULE_OPERATIONS: &str = "admin-operations";
/// Module key for the dashboard landing page
pub const MODULE_DASHBOARD: &str = "admin-dashboard";

/// Stateless classifier applying the threshold table to backend payloads
#[derive(Debug, Clone, Default)]
pub struct InsightClassifier {
    thresholds: InsightThresholds,
}

impl InsightClassifier {
    /// Create a classifier with the default threshold table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with a custom threshold table
    #[must_use]
    pub const fn with_thresholds(thresholds: InsightThresholds) -> Self {
        Self { thresholds }
    }

    /// Classify per-module statistics (currently the financial module)
    #[must_use]
    pub fn classify_module_stats(&self, stats: &ModuleStats) -> Vec<Insight> {
        let mut insights = Vec::new();
        let finance = &stats.finance;

        if finance.overdue_count > 0 {
            insights.push(
                Insight::new(
                    InsightKind::Urgent,
                    InsightPriority::High,
                    "Pagamentos Atrasados",
                    format!(
                        "{} assinaturas com pagamento em atraso, totalizando R$ {:.2}",
                        finance.overdue_count, finance.overdue_amount
                    ),
                    MODULE_FINANCE,
                )
                .actionable()
                .with_confidence(self.thresholds.overdue_confidence)
                .with_recommended_action("Revisar cobranças pendentes no módulo financeiro")
                .with_payload(json!({
                    "overdue_count": finance.overdue_count,
                    "overdue_amount": finance.overdue_amount,
                })),
            );
        }

        if finance.pending_requests > self.thresholds.pending_requests_warning {
            insights.push(
                Insight::new(
                    InsightKind::Warning,
                    InsightPriority::Medium,
                    "Solicitações Pendentes Acumuladas",
                    format!(
                        "{} solicitações de assinatura aguardando análise",
                        finance.pending_requests
                    ),
                    MODULE_FINANCE,
                )
                .actionable()
                .with_confidence(80)
                .with_payload(json!({ "pending_requests": finance.pending_requests })),
            );
        }

        insights
    }

    /// Classify the platform health snapshot
    #[must_use]
    pub fn classify_system_health(&self, health: &SystemHealth) -> Vec<Insight> {
        let mut insights = Vec::new();

        if health.performance_score < self.thresholds.performance_score_warning {
            insights.push(
                Insight::new(
                    InsightKind::Warning,
                    InsightPriority::Medium,
                    "Desempenho do Sistema Degradado",
                    format!(
                        "Pontuação de desempenho em {:.0}, abaixo do esperado",
                        health.performance_score
                    ),
                    MODULE_SYSTEM,
                )
                .with_confidence(85)
                .with_payload(json!({ "performance_score": health.performance_score })),
            );
        }

        if health.error_rate_pct > self.thresholds.error_rate_urgent_pct {
            insights.push(
                Insight::new(
                    InsightKind::Urgent,
                    InsightPriority::High,
                    "Taxa de Erros Elevada",
                    format!(
                        "{:.1}% das requisições falharam na última janela",
                        health.error_rate_pct
                    ),
                    MODULE_SYSTEM,
                )
                .actionable()
                .with_confidence(90)
                .with_recommended_action("Verificar os registros de erro do sistema")
                .with_payload(json!({ "error_rate_pct": health.error_rate_pct })),
            );
        }

        insights
    }

    /// Map critical monitoring alerts 1:1 into urgent insights
    #[must_use]
    pub fn classify_alerts(&self, alerts: &[CriticalAlert]) -> Vec<Insight> {
        alerts
            .iter()
            .filter(|alert| alert.is_critical())
            .map(|alert| {
                let target = if alert.module.is_empty() {
                    MODULE_DASHBOARD
                } else {
                    alert.module.as_str()
                };
                Insight::new(
                    InsightKind::Urgent,
                    InsightPriority::High,
                    alert.title.clone(),
                    alert.description.clone(),
                    target,
                )
                .actionable()
                .with_confidence(self.thresholds.critical_alert_confidence)
                .with_payload(json!({
                    "alert_id": alert.id,
                    "priority": alert.priority,
                    "severity": alert.severity,
                }))
            })
            .collect()
    }

    /// Classify the recent activity feed
    #[must_use]
    pub fn classify_activity_log(&self, entries: &[ActivityLogEntry]) -> Vec<Insight> {
        let failed = entries.iter().filter(|e| e.is_error()).count();
        if failed <= self.thresholds.failed_activity_warning {
            return Vec::new();
        }

        vec![Insight::new(
            InsightKind::Warning,
            InsightPriority::Medium,
            "Falhas em Atividades Recentes",
            format!("{failed} ações recentes terminaram em erro"),
            MODULE_OPERATIONS,
        )
        .with_confidence(75)
        .with_payload(json!({ "failed_entries": failed }))]
    }

    /// Classify the KPI snapshot
    #[must_use]
    pub fn classify_kpis(&self, kpis: &KpiSnapshot) -> Vec<Insight> {
        let mut insights = Vec::new();

        if kpis.retention_rate_pct < self.thresholds.retention_warning_pct {
            insights.push(
                Insight::new(
                    InsightKind::Warning,
                    InsightPriority::High,
                    "Taxa de Retenção em Queda",
                    format!(
                        "Retenção de alunos em {:.1}%, abaixo da meta",
                        kpis.retention_rate_pct
                    ),
                    MODULE_STUDENTS,
                )
                .actionable()
                .with_confidence(85)
                .with_recommended_action(
                    "Planejar uma campanha de reengajamento com alunos inativos",
                )
                .with_payload(json!({
                    "retention_rate_pct": kpis.retention_rate_pct,
                    "active_students": kpis.active_students,
                })),
            );
        }

        insights
    }

    /// Classify the monthly financial summary
    #[must_use]
    pub fn classify_financial_summary(&self, summary: &FinancialSummary) -> Vec<Insight> {
        let mut insights = Vec::new();

        if summary.revenue_growth_pct > self.thresholds.revenue_growth_success_pct {
            insights.push(
                Insight::new(
                    InsightKind::Success,
                    InsightPriority::Low,
                    "Crescimento de Receita",
                    format!(
                        "Receita mensal cresceu {:.1}% em relação ao mês anterior",
                        summary.revenue_growth_pct
                    ),
                    MODULE_FINANCE,
                )
                .with_confidence(90)
                .with_payload(json!({
                    "monthly_revenue": summary.monthly_revenue,
                    "revenue_growth_pct": summary.revenue_growth_pct,
                })),
            );
        }

        if summary.revenue_growth_pct < self.thresholds.revenue_drop_warning_pct {
            insights.push(
                Insight::new(
                    InsightKind::Warning,
                    InsightPriority::High,
                    "Queda de Receita",
                    format!(
                        "Receita mensal caiu {:.1}% em relação ao mês anterior",
                        summary.revenue_growth_pct.abs()
                    ),
                    MODULE_FINANCE,
                )
                .actionable()
                .with_confidence(88)
                .with_recommended_action("Analisar cancelamentos e inadimplência do período")
                .with_payload(json!({ "revenue_growth_pct": summary.revenue_growth_pct })),
            );
        }

        insights
    }

    /// Classify platform-wide student and coach counts
    #[must_use]
    pub fn classify_platform_counts(&self, counts: &PlatformCounts) -> Vec<Insight> {
        let ratio = counts.students_per_coach();
        if ratio <= self.thresholds.students_per_coach_warning {
            return Vec::new();
        }

        let message = if counts.total_coaches == 0 {
            format!(
                "{} alunos ativos sem nenhum treinador cadastrado",
                counts.total_students
            )
        } else {
            format!(
                "Média de {ratio:.0} alunos por treinador, acima do recomendado"
            )
        };

        vec![Insight::new(
            InsightKind::Warning,
            InsightPriority::Medium,
            "Proporção Alunos/Treinador Elevada",
            message,
            MODULE_COACHES,
        )
        .actionable()
        .with_confidence(82)
        .with_recommended_action("Considerar a contratação de novos treinadores")
        .with_payload(json!({
            "total_students": counts.total_students,
            "total_coaches": counts.total_coaches,
        }))]
    }

    /// Classify the predictive-analysis output
    #[must_use]
    pub fn classify_predictive(&self, analysis: &PredictiveAnalysis) -> Vec<Insight> {
        let mut insights = Vec::new();

        if analysis.churn_risk_score > self.thresholds.churn_risk_urgent {
            // Confidence mirrors the churn score itself, clamped by the builder.
            let confidence = analysis.churn_risk_score.clamp(0.0, 100.0).round() as u8;
            insights.push(
                Insight::new(
                    InsightKind::Urgent,
                    InsightPriority::High,
                    "Risco de Evasão Elevado",
                    format!(
                        "Modelo preditivo indica risco de evasão de {:.0} com {} alunos em risco",
                        analysis.churn_risk_score, analysis.at_risk_students
                    ),
                    MODULE_STUDENTS,
                )
                .actionable()
                .with_confidence(confidence)
                .with_recommended_action("Contatar os alunos com maior risco de evasão")
                .with_payload(json!({
                    "churn_risk_score": analysis.churn_risk_score,
                    "at_risk_students": analysis.at_risk_students,
                })),
            );
        }

        if analysis.projected_revenue_growth_pct > 0.0 {
            insights.push(
                Insight::new(
                    InsightKind::Trend,
                    InsightPriority::Low,
                    "Projeção de Receita Positiva",
                    format!(
                        "Projeção de crescimento de {:.1}% na receita do próximo mês",
                        analysis.projected_revenue_growth_pct
                    ),
                    MODULE_FINANCE,
                )
                .with_confidence(70)
                .with_payload(json!({
                    "projected_revenue_growth_pct": analysis.projected_revenue_growth_pct,
                })),
            );
        }

        insights
    }

    /// Produce a welcome-back insight after a long login gap
    #[must_use]
    pub fn classify_login_gap(&self, record: &LastLoginRecord) -> Vec<Insight> {
        let days_away = record.days_since_previous_login();
        if days_away <= self.thresholds.inactive_days_info {
            return Vec::new();
        }

        vec![Insight::new(
            InsightKind::Info,
            InsightPriority::Low,
            "Bem-vindo de volta!",
            format!("Você ficou {days_away} dias sem acessar o painel"),
            MODULE_DASHBOARD,
        )
        .with_confidence(100)
        .with_payload(json!({
            "days_away": days_away,
            "session_count": record.session_count,
        }))]
    }
}
