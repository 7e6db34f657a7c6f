//! Integration tests for `wikitoc print`.

use super::wikitoc;
use predicates::prelude::*;
use wikitoc::test_utils::WikiFixture;

#[test]
fn test_print_markdown() {
    let wiki = WikiFixture::new()
        .tagged_page("Deep.md", "Alpha-Beta-Gamma")
        .page("Loose.md", "text\n");

    wikitoc()
        .arg("print")
        .arg(wiki.path())
        .assert()
        .success()
        .stdout(
            "<!--start TOC-->\n\n# Table of Contents\n\n[Loose](Loose.md)\n\n## Alpha\n\n\
             ### Beta\n\n#### Gamma\n\n[Deep](Deep.md)\n\n<!--end TOC-->\n",
        );

    assert!(!wiki.file("Home.md").exists());
}

#[test]
fn test_print_github_links() {
    let wiki = WikiFixture::new().tagged_page("Setup-Guide.md", "Guide");

    wikitoc()
        .args(["print", "--link-style", "github"])
        .arg(wiki.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[Setup Guide](wiki/Setup-Guide)"));
}

#[test]
fn test_print_json_tree() {
    let wiki = WikiFixture::new()
        .page("Intro.md", "")
        .tagged_page("Setup-Guide.md", "Guide-Install");

    let output = wikitoc()
        .args(["print", "--format", "json"])
        .arg(wiki.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tree["untagged"], serde_json::json!(["Intro.md"]));
    assert_eq!(
        tree["children"]["Guide"]["children"]["Install"]["untagged"],
        serde_json::json!(["Setup-Guide.md"])
    );
}

#[test]
fn test_print_skips_excluded_files() {
    let wiki = WikiFixture::new()
        .tagged_page(".hidden.md", "Secret")
        .tagged_page("_Sidebar.md", "Secret")
        .tagged_page("Old-Home.md", "Secret")
        .tagged_page("Visible.md", "Shown");

    wikitoc()
        .arg("print")
        .arg(wiki.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("## Shown"))
        .stdout(predicate::str::contains("Secret").not());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let wiki = WikiFixture::new().page("Intro.md", "");

    wikitoc()
        .args(["--verbose", "print"])
        .arg(wiki.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!--start TOC-->"))
        .stderr(predicate::str::contains("Scanned 1 pages"));
}
