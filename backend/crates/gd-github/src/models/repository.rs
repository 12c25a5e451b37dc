use serde::Deserialize;

/// Entry of `GET /user/repos`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub html_url: String,
}

/// Body of `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryDetail {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    /// Size in kilobytes, as reported by GitHub
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub html_url: String,
}
