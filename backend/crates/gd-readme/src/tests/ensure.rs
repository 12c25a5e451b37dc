use crate::tests::{project, write};
use crate::{README_FILE_NAME, ReadmeAction, ensure_readme};

use gd_core::{DescriptionMode, Operation};
use googletest::assert_that;
use googletest::prelude::{contains_substring, eq};

fn read_readme(root: &std::path::Path) -> String {
    std::fs::read_to_string(root.join(README_FILE_NAME)).unwrap()
}

#[test]
fn given_plain_mode_without_readme_when_ensured_then_basic_written() {
    let dir = project(&[("main.py", "print()")]);

    let action =
        ensure_readme(dir.path(), "demo", DescriptionMode::Plain, Operation::Create).unwrap();

    assert_that!(action, eq(ReadmeAction::Basic));
    assert_that!(
        read_readme(dir.path()).as_str(),
        eq("# demo\n\nProject uploaded via Telegram Bot\n")
    );
}

#[test]
fn given_plain_refresh_without_readme_when_ensured_then_updated_wording() {
    let dir = project(&[("main.py", "")]);

    ensure_readme(dir.path(), "demo", DescriptionMode::Plain, Operation::Refresh).unwrap();

    assert_that!(
        read_readme(dir.path()).as_str(),
        eq("# demo\n\nProject updated via Telegram Bot\n")
    );
}

#[test]
fn given_plain_mode_with_readme_when_ensured_then_kept() {
    let dir = project(&[("README.md", "# mine\n")]);

    let action =
        ensure_readme(dir.path(), "demo", DescriptionMode::Plain, Operation::Create).unwrap();

    assert_that!(action, eq(ReadmeAction::KeptExisting));
    assert_that!(read_readme(dir.path()).as_str(), eq("# mine\n"));
}

#[test]
fn given_nested_readme_only_when_plain_then_top_level_basic_written() {
    let dir = project(&[("docs/README.md", "# docs\n")]);

    let action =
        ensure_readme(dir.path(), "demo", DescriptionMode::Plain, Operation::Create).unwrap();

    assert_that!(action, eq(ReadmeAction::Basic));
}

#[test]
fn given_templated_mode_with_readme_when_ensured_then_replaced() {
    let dir = project(&[("README.md", "# mine\n")]);
    write(dir.path(), "main.go", "package main");

    let action =
        ensure_readme(dir.path(), "svc", DescriptionMode::Templated, Operation::Create).unwrap();

    assert_that!(action, eq(ReadmeAction::Generated));
    let readme = read_readme(dir.path());
    assert_that!(readme, contains_substring("# svc\n\nA Go Application built with Go."));
    assert_that!(readme, contains_substring("## Project Structure"));
}
