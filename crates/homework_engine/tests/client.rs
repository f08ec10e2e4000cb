use std::time::Duration;

use homework_core::ParseError;
use homework_engine::{
    EndpointError, EndpointSettings, FetchError, HomeworkSource, PracticumClient, RequestFailure,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATUSES_PATH: &str = "/api/user_api/homework_statuses/";

fn client_for(server: &MockServer) -> PracticumClient {
    let settings = EndpointSettings {
        endpoint: format!("{}{}", server.uri(), STATUSES_PATH),
        ..EndpointSettings::default()
    };
    PracticumClient::new(settings, "practicum-token").expect("client")
}

#[tokio::test]
async fn fetch_sends_token_and_cursor() {
    let server = MockServer::start().await;
    let body = json!({
        "homeworks": [{"homework_name": "hw1", "status": "approved"}],
        "current_date": 1_700_000_000,
    });
    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .and(header("Authorization", "OAuth practicum-token"))
        .and(query_param("from_date", "1699999000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let payload = client_for(&server).fetch(1_699_999_000).await.expect("fetch ok");
    assert_eq!(payload, body);
}

#[tokio::test]
async fn non_200_status_is_an_endpoint_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(0).await.unwrap_err();
    assert_eq!(err, FetchError::Endpoint(EndpointError::BadStatus(500)));
    assert_eq!(err.to_string(), "bad status 500");
}

#[tokio::test]
async fn other_success_codes_are_rejected_too() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(0).await.unwrap_err();
    assert_eq!(err, FetchError::Endpoint(EndpointError::BadStatus(204)));
}

#[tokio::test]
async fn undecodable_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(0).await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(ParseError::MalformedPayload(_))));
    assert!(err.to_string().starts_with("malformed payload"));
}

#[tokio::test]
async fn slow_response_is_a_request_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"homeworks": []})),
        )
        .mount(&server)
        .await;

    let settings = EndpointSettings {
        endpoint: format!("{}{}", server.uri(), STATUSES_PATH),
        request_timeout: Duration::from_millis(50),
        ..EndpointSettings::default()
    };
    let client = PracticumClient::new(settings, "practicum-token").unwrap();

    let err = client.fetch(0).await.unwrap_err();
    assert_eq!(
        err,
        FetchError::Endpoint(EndpointError::RequestFailed {
            reason: RequestFailure::Timeout
        })
    );
    assert_eq!(err.to_string(), "request failed: timeout");
}

#[tokio::test]
async fn unreachable_host_is_a_request_failure() {
    let settings = EndpointSettings {
        endpoint: "http://127.0.0.1:1/api/user_api/homework_statuses/".to_string(),
        ..EndpointSettings::default()
    };
    let client = PracticumClient::new(settings, "practicum-token").unwrap();

    let err = client.fetch(0).await.unwrap_err();
    assert!(matches!(
        err,
        FetchError::Endpoint(EndpointError::RequestFailed { .. })
    ));
}
