use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn vault_press(config_dir: &TempDir) -> Command {
    let config = config_dir.path().join("config.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }
    let mut cmd = Command::cargo_bin("vault-press").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn publishes_vault_given_on_command_line() {
    let config_dir = tempfile::tempdir().unwrap();
    let vault = tempfile::tempdir().unwrap();
    write(vault.path(), "docs/Project Plan.md", "# Plan");
    write(vault.path(), "docs/index.md", "See [[Project Plan]] for details");

    vault_press(&config_dir)
        .arg(vault.path())
        .args(["--url-base", "/posts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docs/index.md (1 links)"))
        .stdout(predicate::str::contains("Published 2 documents"));

    assert_eq!(
        fs::read_to_string(vault.path().join("docs/index.md")).unwrap(),
        "See [Project Plan](/posts/docs/Project Plan) for details"
    );
}

#[test]
fn vault_and_excludes_come_from_config() {
    let config_dir = tempfile::tempdir().unwrap();
    let vault = tempfile::tempdir().unwrap();
    write(vault.path(), "note.md", "[!NOTE] hi");
    write(vault.path(), "_site/note.md", "[!NOTE] generated");
    fs::write(
        config_dir.path().join("config.toml"),
        format!(
            "vault_path = {:?}\nurl_base = \"/k\"\nexclude = [\"_site\"]\n",
            vault.path().to_str().unwrap()
        ),
    )
    .unwrap();

    vault_press(&config_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Published 1 documents"));

    assert_eq!(
        fs::read_to_string(vault.path().join("note.md")).unwrap(),
        "📝 hi"
    );
    assert_eq!(
        fs::read_to_string(vault.path().join("_site/note.md")).unwrap(),
        "[!NOTE] generated"
    );
}

#[test]
fn dry_run_reports_renames_without_writing() {
    let config_dir = tempfile::tempdir().unwrap();
    let vault = tempfile::tempdir().unwrap();
    write(vault.path(), "Meeting: kickoff.md", "[[Missing]]");

    vault_press(&config_dir)
        .arg(vault.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Meeting: kickoff.md -> Meeting - kickoff.md (1 links, 1 unresolved)",
        ))
        .stdout(predicate::str::contains("Would publish 1 documents"));

    assert!(vault.path().join("Meeting: kickoff.md").exists());
    assert!(!vault.path().join("Meeting - kickoff.md").exists());
}

#[test]
fn missing_vault_fails() {
    let config_dir = tempfile::tempdir().unwrap();

    vault_press(&config_dir)
        .arg("/definitely/not/a/vault")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vault directory not found"));
}

#[test]
fn no_vault_anywhere_fails() {
    let config_dir = tempfile::tempdir().unwrap();

    vault_press(&config_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No vault directory given"));
}

#[test]
fn unreadable_document_sets_failure_exit_code() {
    let config_dir = tempfile::tempdir().unwrap();
    let vault = tempfile::tempdir().unwrap();
    fs::write(vault.path().join("bad.md"), [0xff, 0xfe]).unwrap();
    write(vault.path(), "good.md", "fine");

    vault_press(&config_dir)
        .arg(vault.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bad.md"))
        .stdout(predicate::str::contains("1 failed"));

    assert_eq!(
        fs::read_to_string(vault.path().join("good.md")).unwrap(),
        "fine"
    );
}
