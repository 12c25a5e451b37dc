//! Fixed lookup tables. Order matters: it breaks ties between languages and
//! decides which package pattern wins for a dependency.

/// File extension (with dot) to language
pub const LANGUAGE_EXTENSIONS: &[(&str, &str)] = &[
    (".py", "Python"),
    (".js", "JavaScript"),
    (".ts", "TypeScript"),
    (".java", "Java"),
    (".cpp", "C++"),
    (".c", "C"),
    (".cs", "C#"),
    (".php", "PHP"),
    (".rb", "Ruby"),
    (".go", "Go"),
    (".rs", "Rust"),
    (".swift", "Swift"),
    (".kt", "Kotlin"),
    (".dart", "Dart"),
    (".html", "HTML"),
    (".css", "CSS"),
    (".scss", "SCSS"),
    (".sass", "Sass"),
    (".vue", "Vue.js"),
    (".jsx", "React JSX"),
    (".tsx", "React TSX"),
    (".r", "R"),
    (".m", "Objective-C"),
    (".sh", "Shell"),
    (".bat", "Batch"),
    (".ps1", "PowerShell"),
];

/// Marker file name to the frameworks it implies
pub const FRAMEWORK_MARKERS: &[(&str, &[&str])] = &[
    ("package.json", &["Node.js", "npm"]),
    ("requirements.txt", &["Python"]),
    ("Pipfile", &["Python", "Pipenv"]),
    ("setup.py", &["Python"]),
    ("composer.json", &["PHP", "Composer"]),
    ("Gemfile", &["Ruby"]),
    ("go.mod", &["Go"]),
    ("Cargo.toml", &["Rust"]),
    ("pom.xml", &["Java", "Maven"]),
    ("build.gradle", &["Java", "Gradle"]),
    ("pubspec.yaml", &["Dart", "Flutter"]),
    ("vue.config.js", &["Vue.js"]),
    ("angular.json", &["Angular"]),
    ("next.config.js", &["Next.js"]),
    ("nuxt.config.js", &["Nuxt.js"]),
    ("gatsby-config.js", &["Gatsby"]),
    ("webpack.config.js", &["Webpack"]),
    ("vite.config.js", &["Vite"]),
    ("tsconfig.json", &["TypeScript"]),
    ("tailwind.config.js", &["Tailwind CSS"]),
    ("postcss.config.js", &["PostCSS"]),
];

/// npm package name fragment to framework (case-sensitive substring match)
pub const FRAMEWORK_PACKAGES: &[(&str, &str)] = &[
    ("react", "React"),
    ("vue", "Vue.js"),
    ("angular", "Angular"),
    ("express", "Express.js"),
    ("koa", "Koa.js"),
    ("fastify", "Fastify"),
    ("nest", "NestJS"),
    ("svelte", "Svelte"),
    ("solid-js", "Solid.js"),
    ("lit", "Lit"),
    ("bootstrap", "Bootstrap"),
    ("bulma", "Bulma"),
    ("material-ui", "Material-UI"),
    ("ant-design", "Ant Design"),
    ("chakra-ui", "Chakra UI"),
];

pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    LANGUAGE_EXTENSIONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, language)| *language)
}

pub fn language_rank(language: &str) -> usize {
    LANGUAGE_EXTENSIONS
        .iter()
        .position(|(_, l)| *l == language)
        .unwrap_or(usize::MAX)
}

pub fn frameworks_for_marker(file_name: &str) -> &'static [&'static str] {
    FRAMEWORK_MARKERS
        .iter()
        .find(|(marker, _)| *marker == file_name)
        .map(|(_, frameworks)| *frameworks)
        .unwrap_or(&[])
}

/// First package pattern contained in `dependency`
pub fn framework_for_dependency(dependency: &str) -> Option<&'static str> {
    FRAMEWORK_PACKAGES
        .iter()
        .find(|(pattern, _)| dependency.contains(*pattern))
        .map(|(_, framework)| *framework)
}
