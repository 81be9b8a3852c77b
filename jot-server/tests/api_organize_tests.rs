//! Integration tests for the classification and save handlers
mod common;

use crate::common::{
    ScriptedClassifier, body_json, cookie_value, create_test_app_state, register_user, send_json,
    task_and_issue_result,
};

use axum::http::StatusCode;
use jot_server::build_router;
use serde_json::json;

#[tokio::test]
async fn test_guest_organize_counts_uses_in_cookie() {
    let classifier = ScriptedClassifier::returning(task_and_issue_result());
    let state = create_test_app_state(classifier.clone()).await;
    let app = build_router(state.clone());

    let mut cookie: Option<String> = None;

    for expected_count in 1..=3 {
        let response = send_json(
            app.clone(),
            "POST",
            "/api/ai/organize",
            cookie.as_deref(),
            json!({"text": "meet the team tomorrow at 3pm"}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let count = cookie_value(&response, "guest_organize_count").unwrap();
        assert_eq!(count, expected_count.to_string());

        cookie = Some(format!("guest_organize_count={count}"));

        let json = body_json(response).await;
        assert_eq!(json["tasks"].as_array().unwrap().len(), 1);
        assert_eq!(json["issues"].as_array().unwrap().len(), 1);
    }

    assert_eq!(classifier.call_count(), 3);
}

#[tokio::test]
async fn test_guest_over_quota_is_forbidden_without_calling_classifier() {
    let classifier = ScriptedClassifier::returning(task_and_issue_result());
    let state = create_test_app_state(classifier.clone()).await;
    let app = build_router(state.clone());

    let response = send_json(
        app,
        "POST",
        "/api/ai/organize",
        Some("guest_organize_count=3"),
        json!({"text": "anything"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(classifier.call_count(), 0);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("limit"));
}

#[tokio::test]
async fn test_quota_check_runs_before_text_validation() {
    let classifier = ScriptedClassifier::returning(task_and_issue_result());
    let state = create_test_app_state(classifier.clone()).await;
    let app = build_router(state.clone());

    // Exhausted guest sending empty text still gets the quota answer
    let response = send_json(
        app,
        "POST",
        "/api/ai/organize",
        Some("guest_organize_count=3"),
        json!({"text": "   "}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_organize_empty_text_is_bad_request() {
    let classifier = ScriptedClassifier::returning(task_and_issue_result());
    let state = create_test_app_state(classifier.clone()).await;
    let app = build_router(state.clone());

    let response = send_json(
        app,
        "POST",
        "/api/ai/organize",
        None,
        json!({"text": "   \n  "}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(classifier.call_count(), 0);
}

#[tokio::test]
async fn test_signed_in_caller_bypasses_guest_quota() {
    let classifier = ScriptedClassifier::returning(task_and_issue_result());
    let state = create_test_app_state(classifier.clone()).await;
    let app = build_router(state.clone());
    let session = register_user(&app, "alice@example.com").await;

    // Even with an exhausted guest cookie alongside the session
    let cookie = format!("{session}; guest_organize_count=3");
    let response = send_json(
        app,
        "POST",
        "/api/ai/organize",
        Some(&cookie),
        json!({"text": "fix the login bug"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(classifier.call_count(), 1);
    // No guest counter issued to a signed-in caller
    assert!(cookie_value(&response, "guest_organize_count").is_none());
}

#[tokio::test]
async fn test_save_persists_only_non_empty_categories() {
    let classifier = ScriptedClassifier::returning(task_and_issue_result());
    let state = create_test_app_state(classifier).await;
    let app = build_router(state.clone());
    let session = register_user(&app, "alice@example.com").await;

    let response = send_json(
        app,
        "POST",
        "/api/ai/organize/save",
        Some(&session),
        serde_json::to_value(task_and_issue_result()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let report = body_json(response).await;
    assert_eq!(report["tasks"], 1);
    assert_eq!(report["events"], 0);
    assert_eq!(report["issues"], 1);
    assert_eq!(report["notes"], 0);

    let (tasks,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
        .fetch_one(&state.pool)
        .await
        .unwrap();
    let (issues,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM issues")
        .fetch_one(&state.pool)
        .await
        .unwrap();
    let (events,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
        .fetch_one(&state.pool)
        .await
        .unwrap();
    assert_eq!(tasks, 1);
    assert_eq!(issues, 1);
    assert_eq!(events, 0);
}

#[tokio::test]
async fn test_save_with_nothing_to_save_is_bad_request() {
    let classifier = ScriptedClassifier::returning(task_and_issue_result());
    let state = create_test_app_state(classifier).await;
    let app = build_router(state.clone());
    let session = register_user(&app, "alice@example.com").await;

    let response = send_json(
        app,
        "POST",
        "/api/ai/organize/save",
        Some(&session),
        json!({"tasks": [], "events": [], "issues": [], "notes": []}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_save_requires_sign_in() {
    let classifier = ScriptedClassifier::returning(task_and_issue_result());
    let state = create_test_app_state(classifier).await;
    let app = build_router(state.clone());

    let response = send_json(
        app,
        "POST",
        "/api/ai/organize/save",
        None,
        serde_json::to_value(task_and_issue_result()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_save_partial_failure_keeps_committed_batches() {
    let classifier = ScriptedClassifier::returning(task_and_issue_result());
    let state = create_test_app_state(classifier).await;
    let app = build_router(state.clone());
    let session = register_user(&app, "alice@example.com").await;

    // Break the issues collection so its batch fails while tasks commit
    sqlx::query("DROP TABLE issues")
        .execute(&state.pool)
        .await
        .unwrap();

    let response = send_json(
        app,
        "POST",
        "/api/ai/organize/save",
        Some(&session),
        serde_json::to_value(task_and_issue_result()).unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("issues"));

    // The tasks batch is not rolled back
    let (tasks,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
        .fetch_one(&state.pool)
        .await
        .unwrap();
    assert_eq!(tasks, 1);
}
