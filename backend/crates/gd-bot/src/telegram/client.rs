use crate::{MessageRef, TelegramError, TelegramFile, TelegramMessage, TelegramResult, Update};

use std::path::Path;
use std::time::Duration;

use log::{debug, error};
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Extra time on top of the long-poll timeout before the HTTP request gives up
const POLL_GRACE: Duration = Duration::from_secs(10);

/// Bot API client over plain HTTP.
///
/// Every method is a JSON `POST` to `{api_base}/bot{token}/{method}`; file
/// downloads use `{api_base}/file/bot{token}/{file_path}`. Messages are sent
/// as plain text.
pub struct TelegramClient {
    api_base: String,
    token: String,
    client: ReqwestClient,
}

/// Standard Bot API response wrapper
#[derive(Deserialize)]
struct Envelope<T> {
    ok: bool,
    result: Option<T>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    error_code: Option<i64>,
}

impl TelegramClient {
    pub fn new(api_base: &str, token: &str) -> TelegramResult<Self> {
        let client = ReqwestClient::builder()
            .user_agent(concat!("gitdrop/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }

    /// POST `body` to `method` and unwrap the response envelope
    async fn call<B, T>(&self, method: &str, body: &B, timeout: Option<Duration>) -> TelegramResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut req = self.client.post(self.method_url(method)).json(body);
        if let Some(timeout) = timeout {
            req = req.timeout(timeout);
        }

        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let envelope: Envelope<T> = serde_json::from_str(&text).map_err(|e| {
            error!("Telegram {} returned unparseable body ({}): {}", method, status, text);
            TelegramError::from_json(e)
        })?;

        if !envelope.ok {
            let description = envelope
                .description
                .unwrap_or_else(|| format!("request failed with status {}", status));
            error!("Telegram {} failed: {}", method, description);
            return Err(TelegramError::api(envelope.error_code, description));
        }

        envelope
            .result
            .ok_or_else(|| TelegramError::api(None, format!("{} returned no result", method)))
    }

    /// Long-poll for updates starting at `offset`
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> TelegramResult<Vec<Update>> {
        #[derive(Serialize)]
        struct GetUpdates<'a> {
            offset: i64,
            timeout: u64,
            allowed_updates: &'a [&'a str],
        }

        let body = GetUpdates {
            offset,
            timeout: timeout_secs,
            allowed_updates: &["message"],
        };
        let http_timeout = Duration::from_secs(timeout_secs) + POLL_GRACE;
        self.call("getUpdates", &body, Some(http_timeout)).await
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> TelegramResult<MessageRef> {
        #[derive(Serialize)]
        struct SendMessage<'a> {
            chat_id: i64,
            text: &'a str,
        }

        let message: TelegramMessage = self
            .call("sendMessage", &SendMessage { chat_id, text }, None)
            .await?;

        Ok(MessageRef {
            chat_id: message.chat.id,
            message_id: message.message_id,
        })
    }

    pub async fn edit_message_text(&self, target: MessageRef, text: &str) -> TelegramResult<()> {
        #[derive(Serialize)]
        struct EditMessageText<'a> {
            chat_id: i64,
            message_id: i64,
            text: &'a str,
        }

        let body = EditMessageText {
            chat_id: target.chat_id,
            message_id: target.message_id,
            text,
        };
        // Result is the edited message, or `true` for inline messages
        let _: Value = self.call("editMessageText", &body, None).await?;
        Ok(())
    }

    pub async fn get_file(&self, file_id: &str) -> TelegramResult<TelegramFile> {
        #[derive(Serialize)]
        struct GetFile<'a> {
            file_id: &'a str,
        }

        self.call("getFile", &GetFile { file_id }, None).await
    }

    /// Download a file previously resolved with [`get_file`](Self::get_file)
    /// into `dest`. Returns the number of bytes written.
    pub async fn download_file(&self, file_path: &str, dest: &Path) -> TelegramResult<u64> {
        let url = format!(
            "{}/file/bot{}/{}",
            self.api_base,
            self.token,
            file_path.trim_start_matches('/')
        );

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("Telegram file download failed with status {}", status);
            return Err(TelegramError::api(
                Some(i64::from(status.as_u16())),
                "file download failed",
            ));
        }

        let bytes = response.bytes().await?;
        tokio::fs::write(dest, &bytes)
            .await
            .map_err(|e| TelegramError::io(dest, e))?;

        debug!("Downloaded {} bytes to {}", bytes.len(), dest.display());
        Ok(bytes.len() as u64)
    }
}
