use serde::{Deserialize, Serialize};

/// What a pending archive upload will do to the remote side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Create a new repository named after the archive.
    Create,
    /// Replace the whole content of an existing repository.
    Refresh,
}

impl Operation {
    /// Verb used in the basic README line ("Project uploaded via ...").
    pub fn readme_verb(&self) -> &'static str {
        match self {
            Self::Create => "uploaded",
            Self::Refresh => "updated",
        }
    }
}
