use std::net::TcpListener;
use std::time::Duration;

use api_smoke_core::action_client::HttpActionClient;
use api_smoke_core::runner::run_all;
use api_smoke_core::types::{CaseOutcome, SmokeConfig};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The blocking client must not run on the async test runtime.
async fn run_smoke(config: SmokeConfig) -> (Vec<CaseOutcome>, String) {
    tokio::task::spawn_blocking(move || {
        let client = HttpActionClient::new(&config).unwrap();
        let cases = config.cases().unwrap();
        let mut out = Vec::new();
        let outcomes = run_all(&client, &cases, &mut out, |_, _| {}).unwrap();
        (outcomes, String::from_utf8(out).unwrap())
    })
    .await
    .unwrap()
}

fn config_for(server: &MockServer) -> SmokeConfig {
    SmokeConfig::default().with_base_url(format!("{}/api.php", server.uri()))
}

async fn mount_action(server: &MockServer, action: &str, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/api.php"))
        .and(query_param("action", action))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_both_actions_succeed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api.php"))
        .and(query_param("action", "get_company_employees"))
        .and(body_json(json!({
            "company_name": "WIZONE IT NETWORK INDIA PVT LTD",
            "page": 1,
            "limit": 100
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"records": [], "pagination": {"total_records": 0}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api.php"))
        .and(query_param("action", "get_departments"))
        .and(body_json(json!({"company_name": "WIZONE IT NETWORK INDIA PVT LTD"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": ["Engineering", "Support"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (outcomes, text) = run_smoke(config_for(&server)).await;

    assert!(outcomes.iter().all(CaseOutcome::is_passed));
    assert_eq!(text.matches("Status Code: 200").count(), 2);
    assert!(text.contains("?action=get_company_employees\n"));
    assert!(text.contains("\"Engineering\""));
    assert!(
        text.find("get_company_employees").unwrap() < text.find("get_departments").unwrap()
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_non_json_body_fails_only_that_case() {
    let server = MockServer::start().await;
    mount_action(
        &server,
        "get_company_employees",
        ResponseTemplate::new(200).set_body_string("<b>Fatal error</b>"),
    )
    .await;
    mount_action(
        &server,
        "get_departments",
        ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": []})),
    )
    .await;

    let (outcomes, text) = run_smoke(config_for(&server)).await;

    match &outcomes[0] {
        CaseOutcome::Failed(message) => assert!(message.contains("is not JSON")),
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(outcomes[1].is_passed());
    assert_eq!(text.matches("Error: ").count(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_error_status_is_still_reported() {
    let server = MockServer::start().await;
    mount_action(
        &server,
        "get_company_employees",
        ResponseTemplate::new(500).set_body_json(json!({"success": false, "error": "db down"})),
    )
    .await;
    mount_action(
        &server,
        "get_departments",
        ResponseTemplate::new(404).set_body_json(json!({"success": false})),
    )
    .await;

    let (outcomes, text) = run_smoke(config_for(&server)).await;

    assert!(outcomes.iter().all(CaseOutcome::is_passed));
    assert!(text.contains("Status Code: 500"));
    assert!(text.contains("Status Code: 404"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_timeout_is_reported_and_run_continues() {
    let server = MockServer::start().await;
    mount_action(
        &server,
        "get_company_employees",
        ResponseTemplate::new(200)
            .set_body_json(json!({"success": true}))
            .set_delay(Duration::from_secs(3)),
    )
    .await;
    mount_action(
        &server,
        "get_departments",
        ResponseTemplate::new(200).set_body_json(json!({"success": true})),
    )
    .await;

    let mut config = config_for(&server);
    config.timeout = Duration::from_millis(300);
    let (outcomes, _) = run_smoke(config).await;

    assert!(!outcomes[0].is_passed());
    assert!(outcomes[1].is_passed());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unreachable_server_reports_both_cases() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = SmokeConfig::default().with_base_url(format!("http://127.0.0.1:{}/api.php", port));

    let (outcomes, text) = run_smoke(config).await;

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| !o.is_passed()));
    assert_eq!(text.matches("Error: request to http://127.0.0.1:").count(), 2);
    assert!(text.contains("Testing get_departments..."));
}
