use serde::{Deserialize, Serialize};

/// How the README of an uploaded project is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionMode {
    /// Keep the archive's README.md, or add a one-line one when missing.
    #[default]
    Plain,
    /// Always replace README.md with a generated document.
    Templated,
}

impl DescriptionMode {
    pub fn from_template_flag(template: bool) -> Self {
        if template {
            Self::Templated
        } else {
            Self::Plain
        }
    }

    pub fn is_templated(&self) -> bool {
        matches!(self, Self::Templated)
    }

    /// Label shown in chat replies
    pub fn label(&self) -> &'static str {
        match self {
            Self::Plain => "Normal",
            Self::Templated => "Template",
        }
    }
}
