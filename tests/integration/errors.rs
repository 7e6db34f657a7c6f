//! Error reporting and exit codes.

use super::wikitoc;
use predicates::prelude::*;
use wikitoc::test_utils::WikiFixture;

#[test]
fn test_missing_directory() {
    let wiki = WikiFixture::new();

    wikitoc()
        .arg("update")
        .arg(wiki.file("does-not-exist"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Wiki directory not found"))
        .stderr(predicate::str::contains("suggestion"));
}

#[test]
fn test_file_instead_of_directory() {
    let wiki = WikiFixture::new().page("Page.md", "");

    wikitoc()
        .arg("print")
        .arg(wiki.file("Page.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_invalid_start_level() {
    let wiki = WikiFixture::new();

    wikitoc()
        .args(["print", "--start-level", "7"])
        .arg(wiki.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid start level 7"));
}

#[test]
fn test_malformed_config() {
    let wiki = WikiFixture::new().config("start_level = [\n");

    wikitoc()
        .arg("print")
        .arg(wiki.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration file syntax"));
}

#[test]
fn test_invalid_exclude_pattern() {
    let wiki = WikiFixture::new().config("exclude = ['(']\n");

    wikitoc()
        .arg("print")
        .arg(wiki.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid exclude pattern '('"));
}

#[test]
fn test_missing_explicit_config() {
    let wiki = WikiFixture::new();

    wikitoc()
        .arg("-c")
        .arg(wiki.file("nope.toml"))
        .arg("print")
        .arg(wiki.path())
        .assert()
        .failure();
}

#[test]
fn test_non_utf8_home_is_left_alone() {
    let wiki = WikiFixture::new().page("Intro.md", "").page("Home.md", b"\xff\xfe\n".as_slice());

    wikitoc().arg("update").arg(wiki.path()).assert().failure();

    assert_eq!(std::fs::read(wiki.file("Home.md")).unwrap(), b"\xff\xfe\n");
}

#[test]
fn test_unknown_subcommand() {
    wikitoc().arg("install").assert().failure();
}
