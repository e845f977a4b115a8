//! End-to-end envelope behavior against a mock backend.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use teamup_client::api;
use teamup_client::{
    ApiClient, ClientConfig, FailureKind, Notifier, NotifyingClient, SessionAuth,
    SERVICE_ERROR_FALLBACK,
};
use teamup_session::MemorySessionStore;
use teamup_types::{LoginRequest, TeamSearch};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Captures everything pushed at the user-visible error channel.
#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

fn client_for(base_url: String) -> (NotifyingClient, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let config = ClientConfig {
        base_url,
        timeout: Duration::from_secs(2),
    };
    let api = ApiClient::new(&config).unwrap();
    (NotifyingClient::new(api, notifier.clone()), notifier)
}

#[tokio::test]
async fn success_unwraps_data_and_stays_silent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {
                "id": 7,
                "username": "Alice",
                "userAccount": "alice"
            },
            "message": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, notifier) = client_for(server.uri());
    let user = api::user::current_user(&client).await.unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.username, "Alice");
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn business_failure_notifies_once_with_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 40000,
            "data": null,
            "message": "Invalid password"
        })))
        .mount(&server)
        .await;

    let (client, notifier) = client_for(server.uri());
    let request = LoginRequest {
        user_account: "alice".to_string(),
        user_password: "nope".to_string(),
    };
    let error = api::user::login(&client, &request).await.unwrap_err();

    assert_eq!(error.kind(), FailureKind::Business);
    assert_eq!(notifier.messages(), vec!["Invalid password".to_string()]);
}

#[tokio::test]
async fn empty_business_message_notifies_with_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/team/get/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 40000,
            "data": null,
            "message": ""
        })))
        .mount(&server)
        .await;

    let (client, notifier) = client_for(server.uri());
    let error = api::team::team_by_id(&client, 5).await.unwrap_err();

    assert_eq!(error.kind(), FailureKind::Business);
    assert_eq!(notifier.messages(), vec![SERVICE_ERROR_FALLBACK.to_string()]);
}

#[tokio::test]
async fn http_failure_notifies_once_and_never_reads_an_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/current"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let (client, notifier) = client_for(server.uri());
    let error = api::user::current_user(&client).await.unwrap_err();

    assert_eq!(error.kind(), FailureKind::Transport);
    assert_eq!(notifier.messages().len(), 1);
}

#[tokio::test]
async fn connection_failure_notifies_once() {
    // Nothing listens on the discard port.
    let (client, notifier) = client_for("http://127.0.0.1:9".to_string());
    let error = api::user::current_user(&client).await.unwrap_err();

    assert_eq!(error.kind(), FailureKind::Transport);
    assert_eq!(notifier.messages().len(), 1);
}

#[tokio::test]
async fn interceptor_attaches_session_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/current"))
        .and(header("authorization", "Bearer state-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {
                "id": 7,
                "username": "Alice",
                "userAccount": "alice"
            },
            "message": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::with_token("state-123"));
    let config = ClientConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(2),
    };
    let api_client = ApiClient::new(&config)
        .unwrap()
        .with_interceptor(Arc::new(SessionAuth::new(store)));
    let notifier = Arc::new(RecordingNotifier::default());
    let client = NotifyingClient::new(api_client, notifier);

    let user = api::user::current_user(&client).await.unwrap();
    assert_eq!(user.user_account, "alice");
}

#[tokio::test]
async fn query_parameters_reach_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat/history"))
        .and(query_param("teamId", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": [{
                "id": 1,
                "userId": 7,
                "username": "Alice",
                "content": "anyone up for doubles?",
                "createTime": "2026-08-01 10:15:00",
                "isMine": true
            }],
            "message": ""
        })))
        .mount(&server)
        .await;

    let (client, notifier) = client_for(server.uri());
    let messages = api::chat::history(&client, 7).await.unwrap();

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "anyone up for doubles?");
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn multipart_upload_unwraps_like_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/file/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": "https://cdn.example.com/avatar.png",
            "message": ""
        })))
        .mount(&server)
        .await;

    let (client, notifier) = client_for(server.uri());
    let url = api::file::upload_file(&client, "avatar.png", b"png bytes".to_vec())
        .await
        .unwrap();

    assert_eq!(url, "https://cdn.example.com/avatar.png");
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn paged_search_round_trips() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/team/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {
                "records": [{
                    "id": 5,
                    "name": "Morning crew",
                    "maxNum": 6,
                    "userId": 7,
                    "status": 0
                }],
                "total": 1
            },
            "message": ""
        })))
        .mount(&server)
        .await;

    let (client, _) = client_for(server.uri());
    let page = api::team::search_teams(&client, &TeamSearch::default())
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.records[0].name, "Morning crew");
}
