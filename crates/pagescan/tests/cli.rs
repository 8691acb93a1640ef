//! CLI integration tests for pagescan commands.
//!
//! These tests focus on exit codes, written artifacts and the key status
//! lines, not on table layout which may change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Helper to get a pagescan command.
fn pagescan() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("pagescan").unwrap()
}

/// Strips ANSI escape sequences from a string.
fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(ch);
        }
    }

    output
}

/// Writes a file, creating parent directories.
fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A workspace holding a small site under `site/`.
fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let site = dir.path().join("site");
    write(
        &site,
        "index.html",
        r#"<html><head><title>Home</title></head><body><main>
           <h1>Welcome</h1><p>Start here.</p>
           <h2 id="start">Getting started</h2><p>Read the guide.</p>
           </main></body></html>"#,
    );
    write(
        &site,
        "guide.html",
        "<html><body><h1>Guide</h1><h3>Too deep</h3><p>Steps.</p></body></html>",
    );
    write(&site, "blank.html", "<html><body><p>No headings.</p></body></html>");
    write(&site, "shared/footer.html", "<footer>Footer</footer>");
    dir
}

/// Runs a command and returns its stdout with colors removed.
fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    strip_ansi(&String::from_utf8(output).unwrap())
}

mod headings {
    use super::*;

    #[test]
    fn writes_report_and_json() {
        let dir = workspace();
        let stdout = stdout_of(
            pagescan()
                .current_dir(dir.path())
                .args(["headings", "site"]),
        );

        assert!(stdout.contains("Found 4 HTML files to analyze..."));
        assert!(stdout.contains("Analyzing 1/4: blank.html"));
        assert!(stdout.contains("Report saved to: heading_hierarchy_report.txt"));
        assert!(stdout.contains("Detailed results saved to: heading_analysis_detailed.json"));

        let report = fs::read_to_string(dir.path().join("heading_hierarchy_report.txt")).unwrap();
        assert!(report.contains("guide.html"));
        assert!(report.contains("Skipped from h1 to h3, missing levels: h2"));

        let json: Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("heading_analysis_detailed.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(json["summary"]["total_files"], 4);
        assert_eq!(json["summary"]["proper_hierarchy_count"], 1);
        assert_eq!(json["summary"]["improper_hierarchy_count"], 1);
        assert_eq!(json["summary"]["no_headings_count"], 2);
        assert_eq!(json["improper_hierarchy"][0]["file"], "guide.html");
    }

    #[test]
    fn quiet_and_no_json() {
        let dir = workspace();
        let stdout = stdout_of(
            pagescan()
                .current_dir(dir.path())
                .args(["headings", "site", "--quiet", "--no-json", "--report", "out/r.txt"]),
        );

        assert!(!stdout.contains("Analyzing"));
        assert!(dir.path().join("out/r.txt").is_file());
        assert!(!dir.path().join("heading_analysis_detailed.json").exists());
    }

    #[test]
    fn config_excludes_apply() {
        let dir = workspace();
        write(
            &dir.path().join("site"),
            ".pagescan.toml",
            "[headings]\nexclude = [\"shared/**\"]\n",
        );
        let stdout = stdout_of(
            pagescan()
                .current_dir(dir.path())
                .args(["headings", "site", "-q"]),
        );
        assert!(stdout.contains("Report saved to"));

        let json: Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("heading_analysis_detailed.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(json["summary"]["total_files"], 3);
    }

    #[test]
    fn missing_root_fails() {
        let dir = temp_dir();
        pagescan()
            .current_dir(dir.path())
            .args(["headings", "nowhere"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not a directory"));
    }

    fn temp_dir() -> TempDir {
        tempfile::tempdir().unwrap()
    }
}

mod index {
    use super::*;

    fn read_index(path: &Path) -> Vec<Value> {
        let json: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        json["searchIndex"].as_array().unwrap().clone()
    }

    #[test]
    fn writes_default_output() {
        let dir = workspace();
        let stdout = stdout_of(
            pagescan()
                .current_dir(dir.path())
                .args(["index", "--root", "site"]),
        );
        assert!(stdout.contains("Wrote 4 search items to shared/search-index.json"));

        let items = read_index(&dir.path().join("shared/search-index.json"));
        let urls: Vec<_> = items.iter().map(|i| i["url"].as_str().unwrap()).collect();
        assert_eq!(urls, ["/blank.html", "/guide.html", "/", "/"]);
        assert_eq!(items[3]["anchor"], "start");
        assert_eq!(items[3]["sectionTitle"], "Home");
        assert_eq!(items[3]["type"], "module");
    }

    #[test]
    fn flags_override_config() {
        let dir = workspace();
        write(
            &dir.path().join("site"),
            ".pagescan.toml",
            "[index]\noutput = \"from-config.json\"\n",
        );

        pagescan()
            .current_dir(dir.path())
            .args(["index", "--root", "site"])
            .assert()
            .success();
        assert_eq!(read_index(&dir.path().join("from-config.json")).len(), 4);

        let stdout = stdout_of(
            pagescan()
                .current_dir(dir.path())
                .args(["index", "--root", "site", "--no-sections", "--output", "flag.json"]),
        );
        assert!(stdout.contains("Wrote 3 search items to flag.json"));
        assert_eq!(read_index(&dir.path().join("flag.json")).len(), 3);
    }

    #[test]
    fn invalid_config_fails() {
        let dir = workspace();
        write(&dir.path().join("site"), ".pagescan.toml", "[index\n");
        pagescan()
            .current_dir(dir.path())
            .args(["index", "--root", "site"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let dir = workspace();
        pagescan()
            .current_dir(dir.path())
            .args(["init", "site"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Created"));

        let contents = fs::read_to_string(dir.path().join("site/.pagescan.toml")).unwrap();
        assert!(contents.contains("# [index]"));
        assert!(contents.contains("# max_page_chars = 5000"));
    }

    #[test]
    fn fails_if_config_exists() {
        let dir = workspace();
        write(&dir.path().join("site"), ".pagescan.toml", "existing");

        pagescan()
            .current_dir(dir.path())
            .args(["init", "site"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn force_overwrites_invalid_config() {
        let dir = workspace();
        write(&dir.path().join("site"), ".pagescan.toml", "not [valid");

        pagescan()
            .current_dir(dir.path())
            .args(["init", "site", "--force"])
            .assert()
            .success();

        let contents = fs::read_to_string(dir.path().join("site/.pagescan.toml")).unwrap();
        assert!(contents.contains("# [headings]"));
    }
}

mod config {
    use super::*;

    #[test]
    fn shows_defaults_without_file() {
        let dir = workspace();
        let stdout = stdout_of(pagescan().current_dir(dir.path()).args(["config", "site"]));
        assert!(stdout.contains("showing defaults"));
        assert!(stdout.contains("[index]"));
        assert!(stdout.contains("max_page_chars = 5000"));
        assert!(stdout.contains("[headings]"));
    }

    #[test]
    fn shows_file_overrides() {
        let dir = workspace();
        write(
            &dir.path().join("site"),
            ".pagescan.toml",
            "[index]\nmax_section_chars = 300\n",
        );
        let stdout = stdout_of(pagescan().current_dir(dir.path()).args(["config", "site"]));
        assert!(stdout.contains("# from"));
        assert!(stdout.contains("max_section_chars = 300"));
    }
}
