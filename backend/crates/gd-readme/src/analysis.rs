use crate::tables::{
    framework_for_dependency, frameworks_for_marker, language_for_extension, language_rank,
};

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use walkdir::WalkDir;

/// Overall classification shown in the README tagline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    WebApplication,
    PythonApplication,
    DjangoApplication,
    JavaApplication,
    CppApplication,
    GoApplication,
    RustApplication,
    PhpApplication,
    RubyApplication,
    Application,
}

impl ProjectType {
    pub fn label(self) -> &'static str {
        match self {
            ProjectType::WebApplication => "Web Application",
            ProjectType::PythonApplication => "Python Application",
            ProjectType::DjangoApplication => "Django Application",
            ProjectType::JavaApplication => "Java Application",
            ProjectType::CppApplication => "C/C++ Application",
            ProjectType::GoApplication => "Go Application",
            ProjectType::RustApplication => "Rust Application",
            ProjectType::PhpApplication => "PHP Application",
            ProjectType::RubyApplication => "Ruby Application",
            ProjectType::Application => "Application",
        }
    }

    /// "A" or "An" to precede the label
    pub fn article(self) -> &'static str {
        match self.label().chars().next() {
            Some('A' | 'E' | 'I' | 'O' | 'U') => "An",
            _ => "A",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The parts of `package.json` the analyzer reads
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageManifest {
    pub dependencies: BTreeMap<String, serde_json::Value>,
    pub dev_dependencies: BTreeMap<String, serde_json::Value>,
}

impl PackageManifest {
    /// Runtime and dev dependency names, sorted and deduplicated
    pub fn dependency_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectAnalysis {
    /// Every file, relative and `/`-separated, sorted
    pub files: Vec<String>,
    /// Language tallies, highest first; equal tallies keep table order
    pub languages: Vec<(&'static str, usize)>,
    /// Detected frameworks in first-seen order
    pub frameworks: Vec<&'static str>,
    pub main_language: Option<&'static str>,
    pub project_type: ProjectType,
}

impl ProjectAnalysis {
    /// Some file anywhere in the tree has this exact name
    pub fn has_file_named(&self, name: &str) -> bool {
        self.files.iter().any(|f| file_name(f) == name)
    }

    fn has_extension(&self, extensions: &[&str]) -> bool {
        self.files
            .iter()
            .any(|f| extensions.iter().any(|ext| f.ends_with(ext)))
    }

    /// Top-level directory names, sorted
    pub fn top_level_dirs(&self) -> Vec<&str> {
        let mut dirs: Vec<&str> = self
            .files
            .iter()
            .filter_map(|f| f.split_once('/').map(|(dir, _)| dir))
            .collect();
        dirs.sort_unstable();
        dirs.dedup();
        dirs
    }

    /// Files directly under the root, sorted
    pub fn top_level_files(&self) -> Vec<&str> {
        self.files
            .iter()
            .filter(|f| !f.contains('/'))
            .map(String::as_str)
            .collect()
    }
}

/// Inspect every file under `root`. Unreadable entries are skipped.
pub fn analyze_project(root: &Path) -> ProjectAnalysis {
    let files = collect_files(root);

    let mut tallies: HashMap<&'static str, usize> = HashMap::new();
    for file in &files {
        if let Some(language) = extension_of(file).and_then(language_for_extension) {
            *tallies.entry(language).or_default() += 1;
        }
    }

    let mut languages: Vec<(&'static str, usize)> = tallies.into_iter().collect();
    languages.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| language_rank(a.0).cmp(&language_rank(b.0)))
    });
    let main_language = languages.first().map(|(language, _)| *language);

    let frameworks = detect_frameworks(root, &files);

    let mut analysis = ProjectAnalysis {
        files,
        languages,
        frameworks,
        main_language,
        project_type: ProjectType::Application,
    };
    analysis.project_type = detect_project_type(&analysis);

    debug!(
        "Analyzed {}: {} files, main language {:?}, type {}",
        root.display(),
        analysis.files.len(),
        analysis.main_language,
        analysis.project_type
    );
    analysis
}

fn collect_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let relative = entry.path().strip_prefix(root).ok()?;
            let parts = relative
                .components()
                .map(|c| c.as_os_str().to_str())
                .collect::<Option<Vec<_>>>()?;
            Some(parts.join("/"))
        })
        .collect();
    files.sort();
    files
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Extension including the dot; dotfiles such as `.env` have none
fn extension_of(path: &str) -> Option<&str> {
    let name = file_name(path);
    let dot = name.rfind('.')?;
    if dot == 0 {
        return None;
    }
    name.get(dot..)
}

fn detect_frameworks(root: &Path, files: &[String]) -> Vec<&'static str> {
    let mut found: Vec<&'static str> = Vec::new();
    let mut push = |framework: &'static str| {
        if !found.contains(&framework) {
            found.push(framework);
        }
    };

    for file in files {
        for &framework in frameworks_for_marker(file_name(file)) {
            push(framework);
        }
    }

    if let Some(manifest) = read_manifest(&root.join("package.json")) {
        for dependency in manifest.dependency_names() {
            if let Some(framework) = framework_for_dependency(dependency) {
                push(framework);
            }
        }
    }

    found
}

fn read_manifest(path: &Path) -> Option<PackageManifest> {
    let contents = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            debug!("Ignoring unparseable {}: {}", path.display(), e);
            None
        }
    }
}

fn detect_project_type(analysis: &ProjectAnalysis) -> ProjectType {
    if analysis.has_file_named("package.json") {
        return ProjectType::WebApplication;
    }

    if analysis.has_extension(&[".py"]) {
        if analysis.has_file_named("requirements.txt") {
            return ProjectType::PythonApplication;
        }
        if analysis.has_file_named("manage.py") {
            return ProjectType::DjangoApplication;
        }
        if analysis.has_file_named("app.py") || analysis.has_file_named("main.py") {
            return ProjectType::PythonApplication;
        }
        return ProjectType::Application;
    }

    let families = [
        (&[".java"][..], ProjectType::JavaApplication),
        (&[".cpp", ".c"][..], ProjectType::CppApplication),
        (&[".go"][..], ProjectType::GoApplication),
        (&[".rs"][..], ProjectType::RustApplication),
        (&[".php"][..], ProjectType::PhpApplication),
        (&[".rb"][..], ProjectType::RubyApplication),
    ];

    families
        .iter()
        .find(|(extensions, _)| analysis.has_extension(extensions))
        .map(|(_, project_type)| *project_type)
        .unwrap_or(ProjectType::Application)
}
