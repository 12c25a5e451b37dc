use gd_core::DescriptionMode;

const TEMPLATE_KEYWORD: &str = "template";
const HELP_KEYWORDS: &[&str] = &["help", "bantuan", "gimana", "cara"];
const UPLOAD_KEYWORDS: &[&str] = &["upload", "project"];

/// A parsed chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Upload { mode: DescriptionMode },
    UpdateRepo { name: Option<String>, mode: DescriptionMode },
    Info,
    Delete { name: Option<String> },
    MakePrivate { name: Option<String> },
    MakePublic { name: Option<String> },
    Inspect { name: Option<String> },
    /// Slash command that is not recognised (keyword, lowercased)
    Unknown(String),
    /// Anything that is not a slash command
    Text(String),
}

impl Command {
    /// Parse message text. Keywords are case-insensitive and may carry an
    /// `@botname` suffix.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Command::Text(trimmed.to_string());
        };

        let mut parts = rest.split_whitespace();
        let head = parts.next().unwrap_or_default();
        let keyword = head
            .split_once('@')
            .map_or(head, |(keyword, _)| keyword)
            .to_lowercase();
        let args: Vec<&str> = parts.collect();

        let first_arg = || args.first().map(|s| s.to_string());
        let templated = args.iter().any(|a| a.eq_ignore_ascii_case(TEMPLATE_KEYWORD));
        let mode = DescriptionMode::from_template_flag(templated);

        match keyword.as_str() {
            "start" => Command::Start,
            "help" => Command::Help,
            "upload" => Command::Upload { mode },
            "upd_repo" => Command::UpdateRepo {
                name: args
                    .iter()
                    .find(|a| !a.eq_ignore_ascii_case(TEMPLATE_KEYWORD))
                    .map(|s| s.to_string()),
                mode,
            },
            "info" => Command::Info,
            "del" => Command::Delete { name: first_arg() },
            "priv" => Command::MakePrivate { name: first_arg() },
            "pblc" => Command::MakePublic { name: first_arg() },
            "inp" => Command::Inspect { name: first_arg() },
            _ => Command::Unknown(keyword),
        }
    }

    /// Short name for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::Upload { .. } => "upload",
            Command::UpdateRepo { .. } => "upd_repo",
            Command::Info => "info",
            Command::Delete { .. } => "del",
            Command::MakePrivate { .. } => "priv",
            Command::MakePublic { .. } => "pblc",
            Command::Inspect { .. } => "inp",
            Command::Unknown(_) => "unknown",
            Command::Text(_) => "text",
        }
    }
}

/// Keyword classification of free text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextIntent {
    HelpHint,
    UploadHint,
    Fallback,
}

pub fn classify_text(text: &str) -> TextIntent {
    let lowered = text.to_lowercase();

    if HELP_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        TextIntent::HelpHint
    } else if UPLOAD_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        TextIntent::UploadHint
    } else {
        TextIntent::Fallback
    }
}
