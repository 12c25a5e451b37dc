use crate::models::ContentsResponse;
use crate::{ContentEntry, GithubError, GithubResult, RepositoryDetail, RepositorySummary};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use log::{debug, error, info, warn};
use reqwest::{Client as ReqwestClient, Method, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

const USER_AGENT: &str = concat!("gitdrop/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";

/// HTTP client for the GitHub REST API, authenticated with a single token.
///
/// Every operation is exactly one awaited request; nothing is retried. The
/// authenticated login is resolved on first use and cached for the life of
/// the client.
pub struct GithubClient {
    api_base: Url,
    web_base: String,
    token: Option<String>,
    client: ReqwestClient,
    login: OnceCell<String>,
}

impl GithubClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `api_base` - REST root (e.g., "https://api.github.com")
    /// * `web_base` - Browser root used for repository links (e.g., "https://github.com")
    /// * `token` - Bearer token; requests go out unauthenticated without one
    pub fn new(api_base: &str, web_base: &str, token: Option<&str>) -> GithubResult<Self> {
        let parsed = Url::parse(api_base.trim_end_matches('/'))
            .map_err(|_| GithubError::invalid_base_url(api_base))?;
        if parsed.cannot_be_a_base() {
            return Err(GithubError::invalid_base_url(api_base));
        }

        let client = ReqwestClient::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            api_base: parsed,
            web_base: web_base.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()).map(String::from),
            client,
            login: OnceCell::new(),
        })
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    /// Append already-split path segments to the API root, percent-encoding each
    fn url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `/repos/{login}/{name}` followed by `tail`
    async fn repo_url<'a>(
        &self,
        name: &str,
        tail: impl IntoIterator<Item = &'a str>,
    ) -> GithubResult<Url> {
        let login = self.current_login().await?;
        let mut url = self.url(["repos", login, name]);
        if let Ok(mut path) = url.path_segments_mut() {
            path.extend(tail);
        }
        Ok(url)
    }

    /// `/repos/{login}/{name}/contents/{path}`; the root keeps its trailing slash
    async fn contents_url(&self, name: &str, path: &str) -> GithubResult<Url> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            self.repo_url(name, ["contents", ""]).await
        } else {
            self.repo_url(name, std::iter::once("contents").chain(segments))
                .await
        }
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, url).header("Accept", ACCEPT);

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Send and collect status plus raw body
    async fn execute(&self, req: reqwest::RequestBuilder) -> GithubResult<(StatusCode, String)> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    /// Log the full rejection and turn it into an `Api` error carrying the
    /// server's message when it sent one
    #[track_caller]
    fn reject(action: &str, status: StatusCode, body: &str) -> GithubError {
        error!("GitHub {} failed: {} - {}", action, status, body);

        let message = serde_json::from_str::<ApiMessage>(body)
            .ok()
            .map(|m| m.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected response")
                    .to_string()
            });

        GithubError::api(status.as_u16(), message)
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Login of the token's owner. Successful lookups are cached; failures
    /// are retried on the next call.
    pub async fn current_login(&self) -> GithubResult<&str> {
        let login = self.login.get_or_try_init(|| self.fetch_login()).await?;
        Ok(login.as_str())
    }

    async fn fetch_login(&self) -> GithubResult<String> {
        #[derive(Deserialize)]
        struct User {
            login: String,
        }

        let req = self.request(Method::GET, self.url(["user"]));
        let (status, body) = self.execute(req).await?;
        if status != StatusCode::OK {
            return Err(Self::reject("login lookup", status, &body));
        }

        let user: User = serde_json::from_str(&body)?;
        if user.login.is_empty() {
            return Err(GithubError::missing_login());
        }

        debug!("Resolved GitHub login '{}'", user.login);
        Ok(user.login)
    }

    /// Browser URL of a repository owned by the authenticated user
    pub async fn repository_url(&self, name: &str) -> GithubResult<String> {
        let login = self.current_login().await?;
        Ok(format!("{}/{}/{}", self.web_base, login, name))
    }

    // =========================================================================
    // Repositories
    // =========================================================================

    /// Create a public, empty repository
    pub async fn create_repository(&self, name: &str, description: &str) -> GithubResult<()> {
        #[derive(Serialize)]
        struct CreateRequest<'a> {
            name: &'a str,
            description: &'a str,
            private: bool,
            auto_init: bool,
        }

        let body = CreateRequest {
            name,
            description,
            private: false,
            auto_init: false,
        };
        let req = self
            .request(Method::POST, self.url(["user", "repos"]))
            .json(&body);
        let (status, text) = self.execute(req).await?;

        match status {
            StatusCode::CREATED => {
                info!("Repository '{}' created", name);
                Ok(())
            }
            StatusCode::UNPROCESSABLE_ENTITY => {
                warn!("Repository '{}' already exists: {}", name, text);
                Err(GithubError::already_exists(name))
            }
            _ => Err(Self::reject("repository creation", status, &text)),
        }
    }

    /// Up to 100 repositories of the authenticated user, most recently updated first
    pub async fn list_repositories(&self) -> GithubResult<Vec<RepositorySummary>> {
        let mut url = self.url(["user", "repos"]);
        url.set_query(Some("per_page=100&sort=updated&direction=desc"));

        let (status, body) = self.execute(self.request(Method::GET, url)).await?;
        if status != StatusCode::OK {
            return Err(Self::reject("repository listing", status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Repository details, or `None` when it does not exist
    pub async fn get_repository(&self, name: &str) -> GithubResult<Option<RepositoryDetail>> {
        let url = self.repo_url(name, []).await?;
        let (status, body) = self.execute(self.request(Method::GET, url)).await?;

        match status {
            StatusCode::OK => Ok(Some(serde_json::from_str(&body)?)),
            StatusCode::NOT_FOUND => Ok(None),
            _ => Err(Self::reject("repository lookup", status, &body)),
        }
    }

    pub async fn delete_repository(&self, name: &str) -> GithubResult<()> {
        let url = self.repo_url(name, []).await?;
        let (status, body) = self.execute(self.request(Method::DELETE, url)).await?;

        if status != StatusCode::NO_CONTENT {
            return Err(Self::reject("repository deletion", status, &body));
        }

        info!("Repository '{}' deleted", name);
        Ok(())
    }

    pub async fn set_visibility(&self, name: &str, private: bool) -> GithubResult<()> {
        #[derive(Serialize)]
        struct VisibilityRequest {
            private: bool,
        }

        let url = self.repo_url(name, []).await?;
        let req = self
            .request(Method::PATCH, url)
            .json(&VisibilityRequest { private });
        let (status, body) = self.execute(req).await?;

        if status != StatusCode::OK {
            return Err(Self::reject("visibility change", status, &body));
        }

        info!(
            "Repository '{}' visibility set to {}",
            name,
            if private { "private" } else { "public" }
        );
        Ok(())
    }

    // =========================================================================
    // Contents
    // =========================================================================

    /// Items at `path` ("" for the root). A missing path and an empty
    /// directory both come back as an empty list.
    pub async fn get_contents(&self, name: &str, path: &str) -> GithubResult<Vec<ContentEntry>> {
        let url = self.contents_url(name, path).await?;
        let (status, body) = self.execute(self.request(Method::GET, url)).await?;

        match status {
            StatusCode::OK => {
                let response: ContentsResponse = serde_json::from_str(&body)?;
                Ok(response.into_entries())
            }
            StatusCode::NOT_FOUND => {
                warn!("Path '{}' not found in repository '{}'", path, name);
                Ok(Vec::new())
            }
            _ => Err(Self::reject("contents listing", status, &body)),
        }
    }

    /// Create or overwrite a single file
    pub async fn put_file(
        &self,
        name: &str,
        path: &str,
        bytes: &[u8],
        message: &str,
    ) -> GithubResult<()> {
        #[derive(Serialize)]
        struct PutRequest<'a> {
            message: &'a str,
            content: String,
        }

        let url = self.contents_url(name, path).await?;
        let body = PutRequest {
            message,
            content: BASE64.encode(bytes),
        };
        let (status, text) = self
            .execute(self.request(Method::PUT, url).json(&body))
            .await?;

        match status {
            StatusCode::OK | StatusCode::CREATED => Ok(()),
            _ => Err(Self::reject("file upload", status, &text)),
        }
    }

    pub async fn delete_file(
        &self,
        name: &str,
        path: &str,
        sha: &str,
        message: &str,
    ) -> GithubResult<()> {
        #[derive(Serialize)]
        struct DeleteRequest<'a> {
            message: &'a str,
            sha: &'a str,
        }

        let url = self.contents_url(name, path).await?;
        let req = self
            .request(Method::DELETE, url)
            .json(&DeleteRequest { message, sha });
        let (status, body) = self.execute(req).await?;

        if status != StatusCode::OK {
            return Err(Self::reject("file deletion", status, &body));
        }

        debug!("Deleted '{}' from '{}'", path, name);
        Ok(())
    }
}

/// Error body shape used by GitHub (`{"message": "..."}`)
#[derive(Deserialize)]
struct ApiMessage {
    #[serde(default)]
    message: String,
}
