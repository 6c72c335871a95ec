//! Binary-level checks that never reach the model

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const FAQS: &str = r#"{"faqs": [
  {"id": "1", "question": "What are your hours?", "answer": "9 to 5.", "category": "General", "tags": ["hours"]}
]}"#;

/// `faqbot` isolated from any config file or key on the host
fn faqbot(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("faqbot").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env_remove("GEMINI_API_KEY")
        .env_remove("GOOGLE_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn faq_file(dir: &TempDir) -> String {
    let path = dir.path().join("faqs.json");
    std::fs::write(&path, FAQS).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn tools_lists_all_four_without_api_key() {
    let dir = TempDir::new().unwrap();
    let faqs = faq_file(&dir);

    faqbot(dir.path())
        .args(["tools", "--faq-data", &faqs])
        .assert()
        .success()
        .stdout(predicate::str::contains("search_faqs"))
        .stdout(predicate::str::contains("get_faqs_by_category"))
        .stdout(predicate::str::contains("get_categories"))
        .stdout(predicate::str::contains("get_faq_by_id"))
        .stdout(predicate::str::contains("keyword (string, required)"))
        .stdout(predicate::str::contains("Get a specific FAQ by its ID"));
}

#[test]
fn tools_fails_on_missing_data() {
    let dir = TempDir::new().unwrap();

    faqbot(dir.path())
        .args(["tools", "--faq-data", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load FAQ data"));
}

#[test]
fn duplicate_ids_fail_loading() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dupes.json");
    std::fs::write(
        &path,
        r#"{"faqs": [
          {"id": "7", "question": "a", "answer": "b", "category": "c"},
          {"id": "7", "question": "d", "answer": "e", "category": "f"}
        ]}"#,
    )
    .unwrap();

    faqbot(dir.path())
        .args(["tools", "--faq-data"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate FAQ id: 7"));
}

#[test]
fn ask_requires_api_key() {
    let dir = TempDir::new().unwrap();
    let faqs = faq_file(&dir);

    faqbot(dir.path())
        .args(["ask", "What are your hours?", "--faq-data", &faqs])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No API key configured"));
}

#[test]
fn ask_rejects_blank_message_as_json() {
    let dir = TempDir::new().unwrap();
    let faqs = faq_file(&dir);

    faqbot(dir.path())
        .args(["ask", "   ", "--json", "--faq-data", &faqs, "--api-key", "unused"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            r#""error": "Agent error: Invalid input: Message cannot be empty""#,
        ));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();

    faqbot(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
