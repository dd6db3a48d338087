// Integration tests: fetch from a mocked backend, compose, post to a webhook

use chrono::{TimeZone, Utc};
use statusbridge::config::{BackendConfig, WebhookConfig};
use statusbridge::nagios_repo::NagiosRepo;
use statusbridge::report::compose_report;
use statusbridge::webhook_repo::WebhookRepo;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_pipeline_posts_composed_report() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/statusjson.cgi"))
        .and(query_param("query", "hostlist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "format_version": 0,
            "result": { "type_code": 0, "type_text": "Success", "message": "" },
            "data": { "hostlist": { "alpha": "up", "beta": "down" } }
        })))
        .expect(1)
        .mount(&backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/statusjson.cgi"))
        .and(query_param("query", "servicelist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "format_version": 0,
            "result": { "type_code": 0, "type_text": "Success", "message": "" },
            "data": { "servicelist": { "gateway": { "HTTP": "critical", "PING": "ok" } } }
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let hook = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hooks/report"))
        .and(body_string_contains("##### HOST SUMMARY"))
        .and(body_string_contains("##### SERVICE SUMMARY"))
        .and(body_string_contains(":bangbang: `gateway`"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&hook)
        .await;

    let nagios = NagiosRepo::new(&BackendConfig {
        base_url: backend.uri(),
        timeout_secs: 5,
        username: None,
        password: None,
    })
    .unwrap();
    let webhook = WebhookRepo::new(&WebhookConfig {
        url: format!("{}/hooks/report", hook.uri()),
        timeout_secs: 5,
        username: None,
        channel: None,
    })
    .unwrap();

    let (hosts, services) = tokio::join!(nagios.fetch_hosts(), nagios.fetch_services());
    let hosts = hosts.map_err(|e| e.to_string());
    let services = services.map_err(|e| e.to_string());

    let now = Utc.with_ymd_and_hms(2024, 8, 23, 15, 4, 5).unwrap();
    let report = compose_report(&hosts, &services, now, 50);
    assert!(report.contains(":small_red_triangle_down: `beta`"));
    assert!(report.contains(":up: Up: **1**"));

    webhook.post_text(&report).await.expect("post_text");
}

#[tokio::test]
async fn test_pipeline_delivers_report_when_backend_is_down() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/statusjson.cgi"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&backend)
        .await;

    let hook = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hooks/report"))
        .and(body_string_contains("Getting monitoring report unsuccessful"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&hook)
        .await;

    let nagios = NagiosRepo::new(&BackendConfig {
        base_url: backend.uri(),
        timeout_secs: 5,
        username: None,
        password: None,
    })
    .unwrap();
    let webhook = WebhookRepo::new(&WebhookConfig {
        url: format!("{}/hooks/report", hook.uri()),
        timeout_secs: 5,
        username: None,
        channel: None,
    })
    .unwrap();

    let (hosts, services) = tokio::join!(nagios.fetch_hosts(), nagios.fetch_services());
    let hosts = hosts.map_err(|e| e.to_string());
    let services = services.map_err(|e| e.to_string());

    let now = Utc.with_ymd_and_hms(2024, 8, 23, 15, 4, 5).unwrap();
    let report = compose_report(&hosts, &services, now, 50);
    webhook.post_text(&report).await.expect("post_text");
}
