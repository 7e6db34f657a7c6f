//! Integration tests for configuration files.

use super::wikitoc;
use predicates::prelude::*;
use wikitoc::test_utils::WikiFixture;

#[test]
fn test_wiki_config_is_applied() {
    let wiki = WikiFixture::new()
        .config("link_style = \"github\"\nstart_level = 3\nexclude = ['^Draft']\n")
        .tagged_page("Guide.md", "Docs")
        .tagged_page("Draft-Notes.md", "Docs");

    wikitoc()
        .arg("print")
        .arg(wiki.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("### Docs\n\n[Guide](wiki/Guide)\n"))
        .stdout(predicate::str::contains("Draft").not());
}

#[test]
fn test_flags_override_config() {
    let wiki = WikiFixture::new()
        .config("link_style = \"github\"\n")
        .tagged_page("Guide.md", "Docs");

    wikitoc()
        .args(["print", "--link-style", "markdown"])
        .arg(wiki.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[Guide](Guide.md)"));
}

#[test]
fn test_explicit_config_path() {
    let wiki = WikiFixture::new().tagged_page("Guide.md", "Docs");
    let other = WikiFixture::new().page("toc.toml", "start_level = 4\n");

    wikitoc()
        .arg("--config")
        .arg(other.file("toc.toml"))
        .arg("print")
        .arg(wiki.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("#### Docs\n"));
}

#[test]
fn test_config_home_and_backup() {
    let wiki = WikiFixture::new()
        .config("home = \"Index.md\"\nbackup = true\n")
        .page("Index.md", "Old index\n")
        .tagged_page("Guide.md", "Docs");

    wikitoc().arg("update").arg(wiki.path()).assert().success();

    assert_eq!(wiki.read("Index.md.old"), "Old index\n");
    assert!(wiki.read("Index.md").ends_with("<!--end TOC-->\nOld index\n"));
}
