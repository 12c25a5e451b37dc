//! Integration tests for the GitHub client using wiremock mock server

mod common;

use common::{LOGIN, TOKEN, client_for, mount_login};

use gd_github::{ContentKind, GithubError};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

#[tokio::test]
async fn test_login_is_fetched_with_auth_headers_and_cached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .and(header("accept", "application/vnd.github+json"))
        .and(header(
            "user-agent",
            concat!("gitdrop/", env!("CARGO_PKG_VERSION")),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": LOGIN })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    assert_eq!(client.current_login().await.unwrap(), LOGIN);
    assert_eq!(client.current_login().await.unwrap(), LOGIN);
}

#[tokio::test]
async fn test_login_failure_is_not_cached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&mock_server)
        .await;
    mount_login(&mock_server).await;

    let client = client_for(&mock_server);

    assert!(client.current_login().await.is_err());
    assert_eq!(client.current_login().await.unwrap(), LOGIN);
}

#[tokio::test]
async fn test_create_repository_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .and(body_json(json!({
            "name": "demo",
            "description": "Project uploaded via Telegram Bot",
            "private": false,
            "auto_init": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "name": "demo" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .create_repository("demo", "Project uploaded via Telegram Bot")
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_create_repository_conflict_is_already_exists() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Repository creation failed.",
            "errors": [{ "message": "name already exists on this account" }]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.create_repository("demo", "").await.unwrap_err();

    assert!(matches!(err, GithubError::AlreadyExists { ref name, .. } if name == "demo"));
}

#[tokio::test]
async fn test_create_repository_other_failure_carries_status_and_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "message": "Resource not accessible" })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.create_repository("demo", "").await.unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert!(err.to_string().contains("Resource not accessible"));
}

#[tokio::test]
async fn test_list_repositories_sends_paging_and_sort() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/repos"))
        .and(query_param("per_page", "100"))
        .and(query_param("sort", "updated"))
        .and(query_param("direction", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "newest", "description": "fresh", "stargazers_count": 4, "private": false, "html_url": "https://github.com/octo/newest" },
            { "name": "older", "description": null, "stargazers_count": 0, "private": true, "html_url": "https://github.com/octo/older" }
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let repos = client.list_repositories().await.unwrap();

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].name, "newest");
    assert_eq!(repos[0].stargazers_count, 4);
    assert_eq!(repos[1].description, None);
    assert!(repos[1].private);
}

#[tokio::test]
async fn test_get_repository_found_and_missing() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "demo",
            "description": "A demo",
            "stargazers_count": 1,
            "forks_count": 2,
            "watchers_count": 3,
            "size": 120,
            "private": false,
            "language": "Python",
            "html_url": "https://github.com/octo/demo"
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let found = client.get_repository("demo").await.unwrap().unwrap();
    assert_eq!(found.forks_count, 2);
    assert_eq!(found.size, 120);
    assert_eq!(found.language.as_deref(), Some("Python"));

    assert!(client.get_repository("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_repository_expects_no_content() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    Mock::given(method("DELETE"))
        .and(path("/repos/octo/demo"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/repos/octo/locked"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "message": "Must have admin rights" })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    assert!(client.delete_repository("demo").await.is_ok());
    let err = client.delete_repository("locked").await.unwrap_err();
    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn test_set_visibility_patches_private_flag() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    Mock::given(method("PATCH"))
        .and(path("/repos/octo/demo"))
        .and(body_json(json!({ "private": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "demo", "private": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    assert!(client.set_visibility("demo", true).await.is_ok());
}

#[tokio::test]
async fn test_get_contents_root_listing_and_missing_path() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/demo/contents/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "path": "README.md", "type": "file", "sha": "r1" },
            { "path": "src", "type": "dir", "sha": "t1" }
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/demo/contents/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let root = client.get_contents("demo", "").await.unwrap();
    assert_eq!(root.len(), 2);
    assert_eq!(root[1].kind, ContentKind::Dir);

    assert!(client.get_contents("demo", "missing").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_contents_of_file_is_single_entry() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/demo/contents/src/main.py"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "path": "src/main.py", "type": "file", "sha": "m1", "content": "cHJpbnQoKQ=="
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let entries = client.get_contents("demo", "src/main.py").await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].sha, "m1");
}

#[tokio::test]
async fn test_put_file_sends_base64_content() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    Mock::given(method("PUT"))
        .and(path("/repos/octo/demo/contents/docs/notes.txt"))
        .and(body_json(json!({ "message": "Add docs/notes.txt", "content": "aGVsbG8=" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "content": {} })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .put_file("demo", "docs/notes.txt", b"hello", "Add docs/notes.txt")
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_file_sends_sha() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    Mock::given(method("DELETE"))
        .and(path("/repos/octo/demo/contents/a.txt"))
        .and(body_json(json!({ "message": "chore: delete a.txt", "sha": "s1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "commit": {} })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    assert!(
        client
            .delete_file("demo", "a.txt", "s1", "chore: delete a.txt")
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_repository_url_uses_web_base_and_login() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    let client = client_for(&mock_server);

    assert_eq!(
        client.repository_url("demo").await.unwrap(),
        "https://github.com/octo/demo"
    );
}

#[test]
fn test_invalid_api_base_is_rejected() {
    let result = gd_github::GithubClient::new("not a url", "https://github.com", None);

    assert!(matches!(result, Err(GithubError::InvalidBaseUrl { .. })));
}
