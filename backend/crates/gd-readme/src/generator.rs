use crate::{ProjectAnalysis, analyze_project};

use std::path::Path;

use gd_core::Operation;

const FOOTER: &str = "*Project uploaded via Telegram Bot*";

/// One-line README used when the archive ships none in plain mode
pub fn basic_readme(name: &str, operation: Operation) -> String {
    format!(
        "# {}\n\nProject {} via Telegram Bot\n",
        name,
        operation.readme_verb()
    )
}

/// Render the templated README for the project staged at `root`.
///
/// Never fails: an unreadable or empty tree simply yields the generic
/// sections.
pub fn generate_readme(root: &Path, name: &str) -> String {
    let analysis = analyze_project(root);
    render(&analysis, name)
}

pub(crate) fn render(analysis: &ProjectAnalysis, name: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", name));
    out.push_str(&tagline(analysis));
    push_technologies(&mut out, analysis);
    push_structure(&mut out, analysis, name);
    push_getting_started(&mut out, analysis, name);

    out.push_str("## Contributing\n\n");
    out.push_str("1. Fork the repository\n");
    out.push_str("2. Create your feature branch (`git checkout -b feature/amazing-feature`)\n");
    out.push_str("3. Commit your changes (`git commit -m 'Add some amazing feature'`)\n");
    out.push_str("4. Push to the branch (`git push origin feature/amazing-feature`)\n");
    out.push_str("5. Open a Pull Request\n\n");

    out.push_str("## License\n\n");
    out.push_str(
        "This project is licensed under the MIT License - see the LICENSE file for details.\n\n",
    );

    out.push_str("---\n\n");
    out.push_str(FOOTER);
    out.push('\n');

    out
}

fn tagline(analysis: &ProjectAnalysis) -> String {
    let project_type = analysis.project_type;
    match analysis.main_language {
        Some(language) => format!(
            "{} {} built with {}.\n\n",
            project_type.article(),
            project_type,
            language
        ),
        None => format!("{} {}.\n\n", project_type.article(), project_type),
    }
}

fn push_technologies(out: &mut String, analysis: &ProjectAnalysis) {
    if analysis.languages.is_empty() && analysis.frameworks.is_empty() {
        return;
    }

    out.push_str("## Technologies Used\n\n");

    if !analysis.languages.is_empty() {
        out.push_str("**Languages:**\n");
        for (language, _) in &analysis.languages {
            out.push_str(&format!("- {}\n", language));
        }
        out.push('\n');
    }

    if !analysis.frameworks.is_empty() {
        out.push_str("**Frameworks/Libraries:**\n");
        for framework in &analysis.frameworks {
            out.push_str(&format!("- {}\n", framework));
        }
        out.push('\n');
    }
}

/// Single level only: top-level directories, then top-level files
fn push_structure(out: &mut String, analysis: &ProjectAnalysis, name: &str) {
    out.push_str("## Project Structure\n\n");
    out.push_str("```\n");
    out.push_str(&format!("{}/\n", name));

    let dirs = analysis.top_level_dirs();
    let files = analysis.top_level_files();
    let entries: Vec<String> = dirs
        .iter()
        .map(|d| format!("{}/", d))
        .chain(files.iter().map(|f| f.to_string()))
        .collect();

    for (i, entry) in entries.iter().enumerate() {
        let branch = if i + 1 == entries.len() { "└──" } else { "├──" };
        out.push_str(&format!("{} {}\n", branch, entry));
    }

    out.push_str("```\n\n");
}

fn push_getting_started(out: &mut String, analysis: &ProjectAnalysis, name: &str) {
    out.push_str("## Getting Started\n\n");

    let clone = format!(
        "# Clone the repository\ngit clone https://github.com/your-username/{0}.git\ncd {0}\n",
        name
    );

    if analysis.has_file_named("package.json") {
        out.push_str("### Prerequisites\n\n");
        out.push_str("- Node.js (v14 or higher)\n");
        out.push_str("- npm or yarn\n\n");
        out.push_str("### Installation\n\n");
        out.push_str("```bash\n");
        out.push_str(&clone);
        out.push_str("\n# Install dependencies\nnpm install\n# or\nyarn install\n");
        out.push_str("```\n\n");
        out.push_str("### Usage\n\n");
        out.push_str("```bash\n");
        out.push_str("# Start the application\nnpm start\n# or\nyarn start\n");
        out.push_str("```\n\n");
    } else if analysis.has_file_named("requirements.txt") {
        out.push_str("### Prerequisites\n\n");
        out.push_str("- Python 3.7+\n");
        out.push_str("- pip\n\n");
        out.push_str("### Installation\n\n");
        out.push_str("```bash\n");
        out.push_str(&clone);
        out.push_str("\n# Install dependencies\npip install -r requirements.txt\n");
        out.push_str("```\n\n");
        out.push_str("### Usage\n\n");
        out.push_str("```bash\n");
        out.push_str("# Run the application\npython main.py\n");
        out.push_str("```\n\n");
    } else {
        out.push_str("### Installation\n\n");
        out.push_str("```bash\n");
        out.push_str(&clone);
        out.push_str("```\n\n");
        out.push_str("### Usage\n\n");
        out.push_str("Follow the specific instructions for your project type.\n\n");
    }
}
