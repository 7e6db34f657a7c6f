//! Integration tests for `wikitoc update`.

use super::wikitoc;
use predicates::prelude::*;
use wikitoc::test_utils::WikiFixture;

const EXPECTED_TOC: &str = "\
<!--start TOC-->

# Table of Contents

[Intro](Intro.md)

## FAQ Topics

[FAQ](FAQ.md)

## Guide

### Install

[FAQ](FAQ.md)

[Setup Guide](Setup-Guide.md)

<!--end TOC-->
";

fn sample_wiki() -> WikiFixture {
    WikiFixture::new()
        .page("Intro.md", "# Intro\n\nNo tags here.\n")
        .tagged_page("Setup-Guide.md", "Guide-Install")
        .tagged_page("FAQ.md", "Guide-Install FAQ_Topics")
        .page("_Sidebar.md", "Tags: Sidebar\n")
        .page("_Footer.md", "Tags: Footer\n")
}

#[test]
fn test_update_replaces_existing_toc() {
    let wiki = sample_wiki().home("Welcome!\n<!--start TOC-->\nold toc\n<!--end TOC-->\nThanks\n");

    wikitoc()
        .arg("update")
        .arg(wiki.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated TOC in"));

    assert_eq!(wiki.read("Home.md"), format!("Welcome!\n{EXPECTED_TOC}Thanks\n"));
    assert!(!wiki.file("Home.md.tmp").exists());
    assert!(!wiki.file("Home.md.old").exists());
}

#[test]
fn test_update_prepends_when_no_markers() {
    let wiki = sample_wiki().home("# Welcome\n");

    wikitoc()
        .args(["update", "--quiet"])
        .arg(wiki.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(wiki.read("Home.md"), format!("{EXPECTED_TOC}# Welcome\n"));
}

#[test]
fn test_update_creates_home() {
    let wiki = sample_wiki();

    wikitoc().arg("update").arg(wiki.path()).assert().success();

    assert_eq!(wiki.read("Home.md"), EXPECTED_TOC);
}

#[test]
fn test_update_is_idempotent() {
    let wiki = sample_wiki().home("Intro text\n");

    wikitoc().arg("update").arg(wiki.path()).assert().success();
    let first = wiki.read("Home.md");

    wikitoc()
        .arg("update")
        .arg(wiki.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("is up to date"));
    assert_eq!(wiki.read("Home.md"), first);
}

#[test]
fn test_update_with_backup() {
    let wiki = sample_wiki().home("Previous home\n");

    wikitoc().args(["update", "--backup"]).arg(wiki.path()).assert().success();

    assert_eq!(wiki.read("Home.md.old"), "Previous home\n");
    assert!(wiki.read("Home.md").starts_with("<!--start TOC-->"));
}

#[test]
fn test_dry_run_prints_without_writing() {
    let wiki = sample_wiki().home("Welcome\n");

    wikitoc()
        .args(["update", "--dry-run"])
        .arg(wiki.path())
        .assert()
        .success()
        .stdout(format!("{EXPECTED_TOC}Welcome\n"));

    assert_eq!(wiki.read("Home.md"), "Welcome\n");
}

#[test]
fn test_update_custom_home_and_style() {
    let wiki = sample_wiki().page("Index.md", "<!-- start TOC -->\n<!-- end TOC -->\nFooter\n");

    wikitoc()
        .args(["update", "--home", "Index.md", "--link-style", "wiki", "--start-level", "1"])
        .arg(wiki.path())
        .assert()
        .success();

    let index = wiki.read("Index.md");
    assert!(index.contains("# Guide\n\n## Install\n\n[[FAQ|FAQ]]\n\n[[Setup Guide|Setup Guide]]\n"));
    assert!(index.ends_with("<!--end TOC-->\nFooter\n"));
    assert!(!wiki.file("Home.md").exists());
}

#[test]
fn test_update_defaults_to_current_directory() {
    let wiki = sample_wiki();

    wikitoc().current_dir(wiki.path()).arg("update").assert().success();

    assert_eq!(wiki.read("Home.md"), EXPECTED_TOC);
}
