use serde::Deserialize;

/// Kind of an item returned by the contents endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

/// One item of a directory listing (or the single item of a file lookup)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub sha: String,
}

impl ContentEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == ContentKind::Dir
    }
}

/// `GET .../contents/{path}` answers with an array for directories and a
/// bare object for files.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ContentsResponse {
    Listing(Vec<ContentEntry>),
    Single(ContentEntry),
}

impl ContentsResponse {
    pub fn into_entries(self) -> Vec<ContentEntry> {
        match self {
            ContentsResponse::Listing(entries) => entries,
            ContentsResponse::Single(entry) => vec![entry],
        }
    }
}
