//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `TodoApi` and
//! `HttpTransport` over real HTTP. Each test gets its own server, so the
//! in-memory store starts empty.

use todo_client::{
    ApiError, ClientConfig, Credentials, HttpTransport, TodoApi, CONTENT_TYPE_JSON,
};

fn start_server() -> String {
    let addr = mock_server::spawn(mock_server::Credentials::new("user", "secret")).unwrap();
    format!("http://{addr}")
}

fn api(host: &str, password: &str) -> TodoApi {
    TodoApi::new(&ClientConfig::new(host, Credentials::new("user", password)))
}

#[test]
fn create_list_delete_lifecycle() {
    let host = start_server();
    let api = api(&host, "secret");

    // Step 1: list — should be empty.
    let todos = api.list_all().expect("list should succeed");
    assert!(todos.is_empty(), "expected empty list");

    // Step 2: create two todos; the server echo carries the assigned id.
    let study = api.create("Study", "Study for exam", 2).unwrap();
    assert_eq!(study.title, "Study");
    assert_eq!(study.body, "Study for exam");
    assert_eq!(study.priority, 2);
    let study_id = study.id.clone().expect("server assigns an id");

    let dinner = api.create("Dinner", "Prepare dinner", 3).unwrap();
    assert!(dinner.id.is_some());

    // Step 3: list — both, in creation order.
    let todos = api.list_all().unwrap();
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0], study);
    assert_eq!(todos[1], dinner);

    // Step 4: get by id and by title.
    assert_eq!(api.get_by_id(&study_id), Some(study.clone()));
    assert_eq!(api.get_by_title("Dinner"), Some(dinner.clone()));
    assert_eq!(api.get_by_title("Nothing"), None);

    // Step 5: delete the first.
    assert!(api.delete(&study_id));

    // Step 6: gone — get and delete both report failure.
    assert_eq!(api.get_by_id(&study_id), None);
    assert!(!api.delete(&study_id));
    let err = api.try_get_by_id(&study_id).unwrap_err();
    assert!(err.is_not_found());

    // Step 7: list — only the second remains.
    let todos = api.list_all().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].title, "Dinner");
}

#[test]
fn wrong_credentials_surface_as_absent_results() {
    let host = start_server();
    let api = api(&host, "wrong");

    assert!(api.list_all().is_none());
    assert!(api.create("Study", "Study for exam", 2).is_none());
    assert!(api.get_by_id("anything").is_none());
    assert!(api.get_by_title("Study").is_none());
    assert!(!api.delete("anything"));

    let err = api.try_list_all().unwrap_err();
    match err {
        ApiError::HttpError { status, reason, .. } => {
            assert_eq!(status, 401);
            assert_eq!(reason, "Unauthorized");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unreachable_host_is_a_transport_error() {
    // Bind then drop a listener to get a port nothing is listening on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let api = api(&format!("http://127.0.0.1:{port}"), "secret");

    assert!(api.list_all().is_none());
    assert!(matches!(
        api.try_list_all().unwrap_err(),
        ApiError::TransportError(_)
    ));
}

#[test]
fn transport_primitives_return_body_or_http_error() {
    let host = start_server();
    let transport = HttpTransport::new(Credentials::new("user", "secret"), None);

    let created = transport
        .post(
            &format!("{host}/todos/api/v1.0/todo/create"),
            CONTENT_TYPE_JSON,
            r#"{"title":"Raw","body":"posted directly","priority":1}"#,
        )
        .unwrap();
    let created: serde_json::Value = serde_json::from_str(&created).unwrap();
    let id = created["uuid"].as_str().unwrap().to_string();

    let fetched = transport
        .get(&format!("{host}/todos/api/v1.0/todo/{id}"))
        .unwrap();
    assert!(fetched.contains("posted directly"));

    let ack = transport
        .delete(&format!("{host}/todos/api/v1.0/todo/delete/{id}"))
        .unwrap();
    assert!(ack.contains("true"));

    let err = transport
        .get(&format!("{host}/todos/api/v1.0/todo/{id}"))
        .unwrap_err();
    assert_eq!(err.to_string(), "404: Not Found");

    // The API exposes no PUT route, so the server rejects the method.
    let err = transport
        .put(
            &format!("{host}/todos/api/v1.0/todos"),
            CONTENT_TYPE_JSON,
            "{}",
        )
        .unwrap_err();
    assert_eq!(err.status(), Some(405));
}
