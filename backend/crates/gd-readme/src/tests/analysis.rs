use crate::tests::project;
use crate::{ProjectType, analyze_project};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn given_empty_project_when_analyzed_then_generic_application() {
    let dir = project(&[]);

    let analysis = analyze_project(dir.path());

    assert_that!(analysis.files.is_empty(), eq(true));
    assert_that!(analysis.main_language, none());
    assert_that!(analysis.project_type, eq(ProjectType::Application));
}

#[test]
fn given_two_python_one_js_when_analyzed_then_python_is_main() {
    // Given
    let dir = project(&[("a.py", ""), ("b.py", ""), ("c.js", "")]);

    // When
    let analysis = analyze_project(dir.path());

    // Then
    assert_that!(analysis.main_language, some(eq("Python")));
    assert_eq!(analysis.languages, vec![("Python", 2), ("JavaScript", 1)]);
}

#[test]
fn given_tied_tallies_when_analyzed_then_table_order_wins() {
    let dir = project(&[("z.js", ""), ("a.go", ""), ("m.py", "")]);

    let analysis = analyze_project(dir.path());

    assert_that!(analysis.main_language, some(eq("Python")));
    assert_eq!(
        analysis.languages,
        vec![("Python", 1), ("JavaScript", 1), ("Go", 1)]
    );
}

#[test]
fn given_nested_files_when_analyzed_then_paths_are_relative_and_sorted() {
    let dir = project(&[("src/lib.rs", ""), ("Cargo.toml", ""), ("src/bin/cli.rs", "")]);

    let analysis = analyze_project(dir.path());

    assert_eq!(
        analysis.files,
        vec!["Cargo.toml", "src/bin/cli.rs", "src/lib.rs"]
    );
    assert_that!(analysis.project_type, eq(ProjectType::RustApplication));
    assert_eq!(analysis.frameworks, vec!["Rust"]);
}

#[test]
fn given_markers_at_any_depth_when_analyzed_then_frameworks_deduplicated_in_order() {
    let dir = project(&[
        ("backend/requirements.txt", ""),
        ("backend/setup.py", ""),
        ("web/tsconfig.json", ""),
    ]);

    let analysis = analyze_project(dir.path());

    assert_eq!(analysis.frameworks, vec!["Python", "TypeScript"]);
}

#[test]
fn given_package_json_dependencies_when_analyzed_then_frameworks_detected() {
    // Given
    let dir = project(&[(
        "package.json",
        r#"{
            "dependencies": { "react-dom": "^18.0.0", "express": "^4.0.0" },
            "devDependencies": { "@nestjs/core": "^10.0.0", "left-pad": "1.0.0" }
        }"#,
    )]);

    // When
    let analysis = analyze_project(dir.path());

    // Then
    assert_eq!(
        analysis.frameworks,
        vec!["Node.js", "npm", "NestJS", "Express.js", "React"]
    );
    assert_that!(analysis.project_type, eq(ProjectType::WebApplication));
}

#[test]
fn given_malformed_package_json_when_analyzed_then_markers_only() {
    let dir = project(&[("package.json", "{ not json")]);

    let analysis = analyze_project(dir.path());

    assert_eq!(analysis.frameworks, vec!["Node.js", "npm"]);
}

#[test]
fn given_python_layouts_when_analyzed_then_type_follows_decision_order() {
    let requirements = project(&[("manage.py", ""), ("requirements.txt", "")]);
    let django = project(&[("manage.py", ""), ("blog/views.py", "")]);
    let entry_point = project(&[("app.py", "")]);
    let plain = project(&[("tool.py", "")]);

    assert_that!(
        analyze_project(requirements.path()).project_type,
        eq(ProjectType::PythonApplication)
    );
    assert_that!(
        analyze_project(django.path()).project_type,
        eq(ProjectType::DjangoApplication)
    );
    assert_that!(
        analyze_project(entry_point.path()).project_type,
        eq(ProjectType::PythonApplication)
    );
    assert_that!(
        analyze_project(plain.path()).project_type,
        eq(ProjectType::Application)
    );
}

#[test]
fn given_other_families_when_analyzed_then_priority_order_applies() {
    let java_and_go = project(&[("Main.java", ""), ("main.go", "")]);
    let c = project(&[("main.c", "")]);
    let ruby = project(&[("app.rb", "")]);

    assert_that!(
        analyze_project(java_and_go.path()).project_type,
        eq(ProjectType::JavaApplication)
    );
    assert_that!(
        analyze_project(c.path()).project_type,
        eq(ProjectType::CppApplication)
    );
    assert_that!(
        analyze_project(ruby.path()).project_type,
        eq(ProjectType::RubyApplication)
    );
}

#[test]
fn given_dotfile_when_analyzed_then_not_counted_as_language() {
    let dir = project(&[(".r", ""), ("notes.R", "")]);

    let analysis = analyze_project(dir.path());

    assert_that!(analysis.main_language, none());
}

#[test]
fn given_project_types_when_article_then_vowel_aware() {
    assert_that!(ProjectType::Application.article(), eq("An"));
    assert_that!(ProjectType::WebApplication.article(), eq("A"));
}
