#![allow(dead_code)]

use gd_bot::{AppContext, Chat, Document, TelegramMessage, TelegramUser, Update};
use gd_config::Config;

use std::io::{Cursor, Write};

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const OWNER: u64 = 42;
pub const STRANGER: u64 = 7;
pub const BOT_TOKEN: &str = "123:test";
pub const GITHUB_TOKEN: &str = "gh-test";
pub const LOGIN: &str = "octo";

pub fn config_for(telegram: &MockServer, github: &MockServer, cooldown_ms: u64) -> Config {
    let mut config = Config::default();
    config.telegram.bot_token = Some(BOT_TOKEN.to_string());
    config.telegram.api_base = telegram.uri();
    config.telegram.poll_timeout_secs = 1;
    config.github.token = Some(GITHUB_TOKEN.to_string());
    config.github.api_base = github.uri();
    config.github.web_base = "https://github.com".to_string();
    config.owner.id = Some(OWNER);
    config.rate_limit.cooldown_ms = cooldown_ms;
    config
}

pub fn context_for(telegram: &MockServer, github: &MockServer, cooldown_ms: u64) -> AppContext {
    AppContext::from_config(config_for(telegram, github, cooldown_ms)).unwrap()
}

pub fn bot_path(method_name: &str) -> String {
    format!("/bot{}/{}", BOT_TOKEN, method_name)
}

/// sendMessage and editMessageText always succeed
pub async fn mount_chat(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(bot_path("sendMessage")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": { "message_id": 100, "chat": { "id": OWNER } }
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(bot_path("editMessageText")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "result": true })))
        .mount(server)
        .await;
}

/// getFile plus the download of `bytes`
pub async fn mount_archive(server: &MockServer, file_id: &str, bytes: Vec<u8>) {
    let file_path = format!("documents/{}.zip", file_id);

    Mock::given(method("POST"))
        .and(path(bot_path("getFile")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": { "file_id": file_id, "file_path": file_path }
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/file/bot{}/{}", BOT_TOKEN, file_path)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(bytes))
        .mount(server)
        .await;
}

pub async fn mount_login(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": LOGIN })))
        .mount(server)
        .await;
}

fn message(update_id: i64, from: u64) -> TelegramMessage {
    TelegramMessage {
        message_id: update_id,
        from: Some(TelegramUser {
            id: from,
            is_bot: false,
            username: None,
        }),
        chat: Chat { id: from as i64 },
        text: None,
        document: None,
    }
}

pub fn text_update(update_id: i64, from: u64, text: &str) -> Update {
    let mut message = message(update_id, from);
    message.text = Some(text.to_string());
    Update {
        update_id,
        message: Some(message),
    }
}

pub fn document_update(update_id: i64, from: u64, file_name: &str, file_id: &str) -> Update {
    let mut message = message(update_id, from);
    message.document = Some(Document {
        file_id: file_id.to_string(),
        file_name: Some(file_name.to_string()),
        file_size: Some(1024),
    });
    Update {
        update_id,
        message: Some(message),
    }
}

/// In-memory zip; names ending in '/' become directory entries
pub fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();

    for (name, contents) in entries {
        if name.ends_with('/') {
            zip.add_directory(*name, options).unwrap();
        } else {
            zip.start_file(*name, options).unwrap();
            zip.write_all(contents.as_bytes()).unwrap();
        }
    }

    zip.finish().unwrap().into_inner()
}

/// `text` of every sendMessage / editMessageText call, in order
pub async fn chat_texts(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| {
            let p = r.url.path();
            p.ends_with("/sendMessage") || p.ends_with("/editMessageText")
        })
        .filter_map(|r| serde_json::from_slice::<Value>(&r.body).ok())
        .filter_map(|body| body["text"].as_str().map(str::to_string))
        .collect()
}

pub async fn last_chat_text(server: &MockServer) -> String {
    chat_texts(server).await.pop().unwrap_or_default()
}

/// Let a 1 ms cooldown elapse between events
pub async fn pause() {
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
}
