use std::time::Duration;

use reachsms::{
    Auth, DEFAULT_USER_AGENT, MessageId, ReachSmsClient, ReachSmsError, SendResult,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReachSmsClient {
    ReachSmsClient::builder(Auth::credentials("user", "pass").unwrap())
        .endpoint(server.uri())
        .build()
        .unwrap()
}

fn json_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "application/json")
}

#[tokio::test]
async fn get_balance_sends_credential_and_json_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sms/balance"))
        .and(header("accept", "application/json"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .and(header("username", "user"))
        .and(header("password", "pass"))
        .respond_with(json_response(
            r#"{"success":true,"balance":"10.00","description":""}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let balance = client_for(&server).get_balance().await.unwrap();
    assert!(balance.success);
    assert_eq!(balance.balance.as_deref(), Some("10.00"));

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("content-type").is_none());
}

#[tokio::test]
async fn get_balance_surfaces_description_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sms/balance"))
        .respond_with(json_response(
            r#"{"success":false,"description":"insufficient funds"}"#,
        ))
        .mount(&server)
        .await;

    let err = client_for(&server).get_balance().await.unwrap_err();
    assert!(matches!(err, ReachSmsError::Api { .. }));
    assert_eq!(err.to_string(), "insufficient funds");
}

#[tokio::test]
async fn get_message_requests_exact_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sms/message/abc-123"))
        .respond_with(json_response(
            r#"[{"Method":"API","To":"64211234567","Message Status":"Delivered","Success":true}]"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let details = client_for(&server)
        .get_message(&MessageId::new("abc-123").unwrap())
        .await
        .unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].status, "Delivered");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.path(), "/sms/message/abc-123");
}

#[tokio::test]
async fn send_message_posts_defaults_and_keeps_every_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sms/message"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "to": "+64211234567",
            "from": "TEST",
            "message": "hello",
            "valid": "72",
            "reference": "",
            "callbackUrl": "",
            "scheduled": "",
            "coding": "1",
            "udh": ""
        })))
        .respond_with(json_response(
            r#"[
                {"success":true,"id":"id-1","description":""},
                {"success":false,"id":"","description":"Invalid destination"}
            ]"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let message = ReachSmsClient::construct_message("+64211234567", "TEST", "hello");
    let results = client_for(&server).send_message(&message).await.unwrap();

    assert_eq!(
        results,
        vec![
            SendResult {
                success: true,
                id: Some("id-1".to_owned()),
                description: String::new(),
            },
            SendResult {
                success: false,
                id: Some(String::new()),
                description: "Invalid destination".to_owned(),
            },
        ]
    );
}

#[tokio::test]
async fn malformed_body_is_a_parse_error_and_client_stays_usable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sms/message/broken"))
        .respond_with(json_response("{ not json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sms/balance"))
        .respond_with(json_response(r#"{"success":true,"balance":"3.50"}"#))
        .mount(&server)
        .await;

    let client = client_for(&server);
    for _ in 0..3 {
        let err = client
            .get_message(&MessageId::new("broken").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, ReachSmsError::Parse { status: 200, .. }));
    }

    let balance = client.get_balance().await.unwrap();
    assert_eq!(balance.balance.as_deref(), Some("3.50"));
}

#[tokio::test]
async fn non_json_error_page_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sms/message/unknown"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_message(&MessageId::new("unknown").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, ReachSmsError::Parse { status: 404, .. }));
}

#[tokio::test]
async fn timeout_is_reported_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sms/balance"))
        .respond_with(
            json_response(r#"{"success":true,"balance":"1.00"}"#)
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = ReachSmsClient::builder(Auth::credentials("user", "pass").unwrap())
        .endpoint(server.uri())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.get_balance().await.unwrap_err();
    assert!(matches!(err, ReachSmsError::Transport(_)));
}

#[tokio::test]
async fn custom_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sms/balance"))
        .and(header("user-agent", "my-app/2.0"))
        .respond_with(json_response(r#"{"success":true,"balance":"1.00"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReachSmsClient::builder(Auth::credentials("user", "pass").unwrap())
        .endpoint(server.uri())
        .user_agent("my-app/2.0")
        .build()
        .unwrap();

    client.get_balance().await.unwrap();
}
