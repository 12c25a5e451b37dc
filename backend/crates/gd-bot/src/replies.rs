//! User-facing texts.

use gd_core::DescriptionMode;
use gd_github::{RepositoryDetail, RepositorySummary};

const DESCRIPTION_PREVIEW_CHARS: usize = 60;
const RECENT_REPOSITORIES: usize = 5;

pub const START: &str = "🤖 GitHub Upload Bot

Send me a project as a ZIP archive and I will create a GitHub repository for it.

Features:
• Upload a project from a ZIP file
• Create the GitHub repository automatically
• Generate a README.md
• Two README modes: normal and template

How to upload:
1. Send /upload or /upload template
2. Send the ZIP file with your project
3. The bot creates the repository and uploads every file

Project files should sit at the root of the ZIP. A single wrapping folder is unwrapped automatically.

Type /help to see every command.";

pub const HELP: &str = "📋 Commands

/start - Welcome message
/help - This guide
/upload - Upload a new project
/upload template - Upload a new project with a generated README
/upd_repo <name> - Replace the content of an existing repository
/upd_repo <name> template - Same, with a generated README
/priv <name> - Make a repository private
/pblc <name> - Make a repository public
/info - Upload statistics and recent repositories
/del <name> - Delete a repository
/inp <name> - Repository details

README modes:
• Normal: keep the README.md from the ZIP, or add a basic one when missing
• Template: always replace README.md with a generated one

Notes:
• The repository is named after the ZIP file
• Every file in the ZIP is uploaded to the repository root";

pub const NO_PENDING_UPLOAD: &str =
    "To upload or update a project, send /upload or /upd_repo first.";
pub const UNKNOWN_COMMAND: &str = "Unknown command. Type /help to see every available command.";
pub const HELP_HINT: &str = "Type /help to see every available command!";
pub const UPLOAD_HINT: &str =
    "Type /upload to upload a project or /upload template for template mode.";
pub const FALLBACK: &str = "Sorry, I didn't understand that. Type /help for help.";
pub const NO_REPOSITORIES: &str = "There are no repositories on your GitHub account yet.";
pub const LIST_FAILED: &str = "❌ Could not fetch your repositories from GitHub.";

pub fn usage(command: &str) -> String {
    format!(
        "Usage: /{0} <repository-name>\n\nExample: /{0} my-project",
        command
    )
}

pub fn upload_armed(mode: DescriptionMode, max_megabytes: u64, extension: &str) -> String {
    let readme = if mode.is_templated() {
        "README.md will be generated from the source code, replacing any README.md in the ZIP."
    } else {
        "The README.md from the ZIP is kept. If there is none, a basic README.md is added."
    };

    format!(
        "📤 Upload mode active ({})\n\nSend the ZIP file with your project.\n\n{}\n\nSupported format: {}\nMaximum size: {}MB",
        mode.label(),
        readme,
        extension,
        max_megabytes
    )
}

pub fn checking_repository(name: &str) -> String {
    format!("Checking repository '{}'...", name)
}

pub fn refresh_armed(name: &str, mode: DescriptionMode) -> String {
    format!(
        "✅ Update mode active for repository '{}'\n📄 README mode: {}\n\nSend the ZIP file with the new content for this project.",
        name,
        mode.label()
    )
}

pub fn repository_not_found(name: &str) -> String {
    format!("❌ Repository '{}' was not found on your GitHub account.", name)
}

pub fn lookup_failed(name: &str) -> String {
    format!("❌ Could not look up repository '{}'.", name)
}

pub fn unsupported_file(extension: &str) -> String {
    format!(
        "❌ Only {} files are supported. Please send a {} archive.",
        extension, extension
    )
}

pub fn file_too_large(max_megabytes: u64) -> String {
    format!("❌ File is too large. Maximum size: {}MB", max_megabytes)
}

pub fn invalid_project_name(name: &str, reason: &str) -> String {
    format!(
        "❌ '{}' cannot be used as a repository name: {}. Rename the ZIP file and try again.",
        name, reason
    )
}

pub fn deleting(name: &str) -> String {
    format!("🔄 Deleting repository '{}'...", name)
}

pub fn deleted(name: &str) -> String {
    format!("✅ Repository '{}' was deleted!", name)
}

pub fn delete_failed(name: &str) -> String {
    format!(
        "❌ Failed to delete repository '{}'. Make sure the name is correct.",
        name
    )
}

fn visibility_word(private: bool) -> &'static str {
    if private { "private" } else { "public" }
}

pub fn changing_visibility(name: &str, private: bool) -> String {
    format!(
        "🔄 Making repository '{}' {}...",
        name,
        visibility_word(private)
    )
}

pub fn visibility_changed(name: &str, private: bool) -> String {
    format!("✅ Repository '{}' is now {}.", name, visibility_word(private))
}

pub fn visibility_failed(name: &str) -> String {
    format!("❌ Failed to change the visibility of repository '{}'.", name)
}

pub fn fetching_details(name: &str) -> String {
    format!("📡 Fetching details of repository '{}'...", name)
}

/// Cut `text` to `max` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

pub fn repository_overview(repos: &[RepositorySummary], uploads: u64) -> String {
    if repos.is_empty() {
        return NO_REPOSITORIES.to_string();
    }

    let mut text = format!(
        "📊 GitHub statistics\n\n📁 Total repositories: {}\n📤 Uploaded via bot: {}\n\n🔗 {} most recent repositories:\n",
        repos.len(),
        uploads,
        RECENT_REPOSITORIES.min(repos.len())
    );

    for (i, repo) in repos.iter().take(RECENT_REPOSITORIES).enumerate() {
        let description = repo
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(|d| truncate(d, DESCRIPTION_PREVIEW_CHARS))
            .unwrap_or_else(|| "No description".to_string());

        text.push_str(&format!(
            "\n{}. {}\n   📝 {}\n   🌟 {} stars\n",
            i + 1,
            repo.name,
            description,
            repo.stargazers_count
        ));
    }

    text
}

pub fn repository_details(repo: &RepositoryDetail) -> String {
    format!(
        "📊 Repository info: {}\n\n📝 Description: {}\n🌟 Stars: {}\n🍴 Forks: {}\n👁️ Watchers: {}\n📏 Size: {} KB\n🔒 Private: {}\n💻 Language: {}\n🔗 URL: {}",
        repo.name,
        repo.description.as_deref().unwrap_or("No description"),
        repo.stargazers_count,
        repo.forks_count,
        repo.watchers_count,
        repo.size,
        if repo.private { "Yes" } else { "No" },
        repo.language.as_deref().unwrap_or("Unknown"),
        repo.html_url
    )
}

pub fn repository_details_missing(name: &str) -> String {
    format!("Repository '{}' was not found on your account.", name)
}

// =========================================================================
// Workflows
// =========================================================================

pub fn create_title(name: &str, mode: DescriptionMode) -> String {
    format!("Uploading project '{}' (mode: {})", name, mode.label())
}

pub fn refresh_title(name: &str) -> String {
    format!("Updating repository '{}'", name)
}

pub fn already_exists(name: &str) -> String {
    format!(
        "❌ Repository '{}' already exists\n\nUse /upd_repo {} to replace its content, or rename the ZIP file.",
        name, name
    )
}

pub fn create_failed(name: &str) -> String {
    format!(
        "❌ Failed to create repository '{}'\n\nThere was a problem with the GitHub API.",
        name
    )
}

pub fn upload_succeeded(name: &str, url: &str, mode: DescriptionMode, total_uploads: u64) -> String {
    format!(
        "🎉 Upload complete!\n\n📁 Project: {}\n🔗 Repository: {}\n📂 Mode: {}\n📊 Total uploads: {}",
        name,
        url,
        mode.label(),
        total_uploads
    )
}

pub fn upload_failed_after_create(name: &str) -> String {
    format!(
        "❌ Upload failed\n\nRepository '{}' was created but no file could be uploaded. Try again later.",
        name
    )
}

pub fn clear_failed(name: &str, deleted: usize, discovered: usize) -> String {
    format!(
        "❌ Failed to clear repository '{}' ({}/{} files deleted)\n\nThere may be a permission or GitHub API problem. The update was cancelled.",
        name, deleted, discovered
    )
}

pub fn refresh_succeeded(name: &str, url: &str, mode: DescriptionMode) -> String {
    format!(
        "🎉 Update complete!\n\n📁 Project: {}\n🔗 Repository: {}\n📄 README mode: {}",
        name,
        url,
        mode.label()
    )
}

pub fn refresh_upload_failed(name: &str) -> String {
    format!(
        "❌ Update failed\n\nNo new file could be uploaded to '{}'. The repository may now be empty.",
        name
    )
}

pub fn workflow_fault(operation: &str, detail: &str) -> String {
    format!("❌ Error while processing the {}\n\n{}", operation, detail)
}
