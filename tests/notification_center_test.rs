// ABOUTME: Integration tests for the per-session notification center
// ABOUTME: Covers the session lifecycle, module views, dismissal, navigation, and alerts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Treino Fitness

mod common;

use anyhow::Result;
use common::{test_aggregator, test_aggregator_with_store, StubDashboardApi};
use treino_insight_engine::models::{SystemHealth, UserRole};
use treino_insight_engine::notifications::{NotificationCenter, SessionState};
use treino_insight_engine::store::factory::InsightStore;
use treino_insight_engine::store::memory::MemoryStore;

#[tokio::test]
async fn test_center_starts_idle() {
    let center = NotificationCenter::new(test_aggregator(StubDashboardApi::all_failing()));

    assert_eq!(center.state().await, SessionState::Idle);
    assert!(center.active_insights().await.is_empty());
}

#[tokio::test]
async fn test_refresh_without_session_errors() {
    let center = NotificationCenter::new(test_aggregator(StubDashboardApi::all_failing()));

    assert!(center.refresh().await.is_err());
}

#[tokio::test]
async fn test_initialize_populates_insights_and_state() -> Result<()> {
    let store = InsightStore::memory(MemoryStore::new());
    let api = StubDashboardApi::with_finance(3, 2150.0, 2);
    let center = NotificationCenter::new(test_aggregator_with_store(api, store.clone()));

    let insights = center.initialize("admin-1", UserRole::Admin).await?;

    assert_eq!(insights.len(), 1);
    assert_eq!(center.state().await, SessionState::Ready);
    assert_eq!(center.active_insights().await.len(), 1);

    // Initialization recorded the login
    let login = store.last_login("admin-1").await?;
    assert_eq!(login.map(|r| r.session_count), Some(1));

    Ok(())
}

#[tokio::test]
async fn test_module_filter_and_count() -> Result<()> {
    let api = StubDashboardApi {
        module_stats: StubDashboardApi::with_finance(1, 90.0, 8).module_stats,
        system_health: Some(SystemHealth {
            performance_score: 70.0,
            error_rate_pct: 0.1,
            uptime_pct: 99.0,
        }),
        ..StubDashboardApi::default()
    };
    let center = NotificationCenter::new(test_aggregator(api));
    center.initialize("admin-1", UserRole::Admin).await?;

    // Two finance insights (overdue + pending), one system warning
    assert_eq!(center.module_notification_count("admin-finance").await, 2);
    assert_eq!(center.module_notification_count("admin-system").await, 1);
    assert_eq!(center.module_notification_count("admin-students").await, 0);

    let finance = center.insights_for_module("admin-finance").await;
    assert!(finance.iter().all(|i| i.target_module == "admin-finance"));

    Ok(())
}

#[tokio::test]
async fn test_dismiss_removes_from_memory_and_store() -> Result<()> {
    let store = InsightStore::memory(MemoryStore::new());
    let api = StubDashboardApi::with_finance(3, 2150.0, 2);
    let center = NotificationCenter::new(test_aggregator_with_store(api, store.clone()));

    let insights = center.initialize("admin-1", UserRole::Admin).await?;
    let id = insights[0].id.clone();

    center.dismiss(&id).await?;

    assert!(center.active_insights().await.is_empty());
    assert!(store.active_insights("admin-1").await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_dismiss_unknown_id_is_noop() -> Result<()> {
    let api = StubDashboardApi::with_finance(3, 2150.0, 2);
    let center = NotificationCenter::new(test_aggregator(api));
    center.initialize("admin-1", UserRole::Admin).await?;

    center.dismiss("no-such-insight").await?;

    assert_eq!(center.active_insights().await.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_open_insight_navigates_and_dismisses() -> Result<()> {
    let api = StubDashboardApi::with_finance(3, 2150.0, 2);
    let center = NotificationCenter::new(test_aggregator(api));

    let insights = center.initialize("admin-1", UserRole::Admin).await?;
    let id = insights[0].id.clone();

    let route = center.open_insight(&id).await?;

    assert_eq!(route.as_deref(), Some("/admin/financeiro"));
    assert!(center.active_insights().await.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_open_unknown_insight_returns_none() -> Result<()> {
    let api = StubDashboardApi::with_finance(3, 2150.0, 2);
    let center = NotificationCenter::new(test_aggregator(api));
    center.initialize("admin-1", UserRole::Admin).await?;

    assert_eq!(center.open_insight("missing").await?, None);
    assert_eq!(center.active_insights().await.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_urgent_refresh_emits_one_aggregate_alert() -> Result<()> {
    let api = StubDashboardApi {
        module_stats: StubDashboardApi::with_finance(4, 5000.0, 0).module_stats,
        system_health: Some(SystemHealth {
            performance_score: 90.0,
            error_rate_pct: 12.0,
            uptime_pct: 98.0,
        }),
        ..StubDashboardApi::default()
    };
    let center = NotificationCenter::new(test_aggregator(api));
    let mut alerts = center.subscribe_alerts();

    center.initialize("admin-1", UserRole::Admin).await?;

    // Two urgent high-priority insights, exactly one aggregate event
    let event = alerts.recv().await?;
    assert_eq!(event.urgent_count, 2);
    assert!(event.message.contains('2'));
    assert!(alerts.try_recv().is_err());

    Ok(())
}

#[tokio::test]
async fn test_non_urgent_refresh_emits_no_alert() -> Result<()> {
    let center = NotificationCenter::new(test_aggregator(StubDashboardApi::all_failing()));
    let mut alerts = center.subscribe_alerts();

    center.initialize("admin-1", UserRole::Admin).await?;

    assert!(alerts.try_recv().is_err());

    Ok(())
}

#[tokio::test]
async fn test_non_admin_session_sees_fallback_only() -> Result<()> {
    let api = StubDashboardApi::with_finance(3, 2150.0, 2);
    let calls = api.call_counter();
    let center = NotificationCenter::new(test_aggregator(api));

    let insights = center.initialize("student-1", UserRole::FitnessStudent).await?;

    assert_eq!(insights.len(), 1);
    assert!(insights[0].title.contains("Indisponível"));
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);

    Ok(())
}
