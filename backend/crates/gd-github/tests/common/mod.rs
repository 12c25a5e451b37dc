#![allow(dead_code)]

use gd_github::GithubClient;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const LOGIN: &str = "octo";
pub const TOKEN: &str = "test-token";

pub fn client_for(server: &MockServer) -> GithubClient {
    GithubClient::new(&server.uri(), "https://github.com", Some(TOKEN)).unwrap()
}

pub async fn mount_login(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": LOGIN })))
        .mount(server)
        .await;
}

pub fn file_entry(path: &str, sha: &str) -> serde_json::Value {
    json!({ "path": path, "type": "file", "sha": sha })
}

pub fn dir_entry(path: &str) -> serde_json::Value {
    json!({ "path": path, "type": "dir", "sha": format!("tree-{}", path) })
}
