//! Automation service API contract tests
//!
//! Verify the exact HTTP shapes the client sends and the envelopes it
//! parses: routes, query parameters, error `detail` extraction.

use overseer_client::{AutomationClient, ClientError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn trigger_run_returns_execution_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "자동화 프로세스가 백그라운드에서 시작되었습니다",
            "execution_id": "abc123",
            "started_at": "2025-01-10T06:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AutomationClient::new(server.uri());
    let accepted = client.trigger_run().await.unwrap();

    assert_eq!(accepted.execution_id, "abc123");
    assert!(accepted.success);
}

#[tokio::test]
async fn trigger_run_surfaces_error_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "detail": "db error" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = AutomationClient::new(server.uri());
    let err = client.trigger_run().await.unwrap_err();

    match &err {
        ClientError::Api { status, detail } => {
            assert_eq!(*status, 500);
            assert_eq!(detail, "db error");
        }
        other => panic!("expected API error, got {:?}", other),
    }
    assert!(err.is_server_error());
}

#[tokio::test]
async fn trigger_run_falls_back_to_raw_body_on_unparseable_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/run"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = AutomationClient::new(server.uri());
    let err = client.trigger_run().await.unwrap_err();

    match err {
        ClientError::Api { status, detail } => {
            assert_eq!(status, 502);
            assert_eq!(detail, "bad gateway");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn recent_logs_sends_limit_and_parses_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/logs"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 1,
            "logs": [{
                "execution_id": "abc123",
                "started_at": "2025-01-10T06:00:00Z",
                "completed_at": "2025-01-10T06:02:30Z",
                "success": true,
                "message": "ok",
                "results": { "weeks_processed": 4, "participants": [1, 2, 3] }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AutomationClient::new(server.uri());
    let page = client.recent_logs(10).await.unwrap();

    assert_eq!(page.total_count, 1);
    let record = page.find("abc123").unwrap();
    assert!(record.is_completed());
    assert_eq!(record.results.as_ref().unwrap().weeks_processed, 4);
    assert_eq!(record.results.as_ref().unwrap().participants.len(), 3);
}

#[tokio::test]
async fn schedule_status_unwraps_cron_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/schedule"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cron_status": {
                "active": true,
                "schedule": "매일 06:30",
                "next_run": "2025-01-11T06:30:00Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AutomationClient::new(server.uri());
    let status = client.schedule_status().await.unwrap();

    assert!(status.active);
    assert_eq!(status.schedule.as_deref(), Some("매일 06:30"));
    assert!(status.next_run.is_some());
}

#[tokio::test]
async fn set_schedule_sends_hour_and_minute_query() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/schedule"))
        .and(query_param("hour", "6"))
        .and(query_param("minute", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "스케줄이 설정되었습니다"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AutomationClient::new(server.uri());
    client.set_schedule(6, 30).await.unwrap();
}

#[tokio::test]
async fn remove_schedule_issues_delete() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/schedule"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "스케줄이 제거되었습니다"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AutomationClient::new(server.uri());
    client.remove_schedule().await.unwrap();
}

#[tokio::test]
async fn remove_schedule_surfaces_rejection_detail() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/schedule"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "detail": "스케줄 제거에 실패했습니다" })),
        )
        .mount(&server)
        .await;

    let client = AutomationClient::new(server.uri());
    let err = client.remove_schedule().await.unwrap_err();

    assert!(err.is_client_error());
    assert!(err.to_string().contains("스케줄 제거에 실패했습니다"));
}
