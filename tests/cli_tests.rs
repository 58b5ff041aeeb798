use std::{fs, path::Path, process::Command};

use tempfile::TempDir;

fn mfeindex_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mfeindex"));
    cmd.env_remove("MFEINDEX_CONVERTER")
        .env_remove("MFEINDEX_INDEXER")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_help_flag() {
    let output = mfeindex_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mfeindex"));
    assert!(stdout.contains("--reindex"));
}

#[test]
fn cli_version_flag() {
    let output = mfeindex_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_missing_args() {
    let output = mfeindex_cmd().output().expect("Failed to execute");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("required") || stderr.contains("Usage"));
}

#[test]
fn cli_k_zero_rejected() {
    let output = mfeindex_cmd()
        .args(["-k", "0", "tests/fixtures/two_records.fa"])
        .output()
        .expect("Failed to execute");
    assert!(!output.status.success());
}

#[test]
fn cli_missing_source_fails_without_sidecars() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("absent.fa");

    let output = mfeindex_cmd()
        .arg(&source)
        .output()
        .expect("Failed to execute");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn cli_status_reports_unindexed() {
    let output = mfeindex_cmd()
        .args(["--status", "tests/fixtures/two_records.fa"])
        .output()
        .expect("Failed to execute");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("not indexed"));
}

#[test]
fn cli_missing_converter_fails() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("db.fa");
    fs::copy("tests/fixtures/two_records.fa", &source).unwrap();

    let output = mfeindex_cmd()
        .arg("--converter")
        .arg(dir.path().join("no-such-converter"))
        .arg(&source)
        .output()
        .expect("Failed to execute");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to launch 2-bit converter"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

/// Writes an executable shell script that creates the file named by its last argument.
#[cfg(unix)]
fn touching_tool(dir: &Path, name: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(
        &path,
        "#!/bin/sh\nfor last in \"$@\"; do :; done\necho \"$*\" > \"$last\"\n",
    )
    .unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn cli_builds_bundle_with_external_tools() {
    let tools = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let source = data.path().join("db.fa");
    fs::copy("tests/fixtures/two_records.fa", &source).unwrap();

    let output = mfeindex_cmd()
        .env("MFEINDEX_CONVERTER", touching_tool(tools.path(), "faToTwoBit"))
        .env("MFEINDEX_INDEXER", touching_tool(tools.path(), "kmerdb"))
        .args(["-k", "7"])
        .arg(&source)
        .output()
        .expect("Failed to execute");

    assert!(output.status.success(), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Begin index database"));
    assert!(stderr.contains("Done index database"));

    let json = fs::read_to_string(data.path().join("db.fa.json")).unwrap();
    assert!(json.starts_with(r#"{"0":{"id":"seq1""#));
    let sqlite_args = fs::read_to_string(data.path().join("db.fa.sqlite3.db")).unwrap();
    assert!(sqlite_args.contains("-k 7"));
    assert!(!data.path().join("db.fa.unifasta").exists());

    let status = mfeindex_cmd()
        .arg("--status")
        .arg(&source)
        .output()
        .expect("Failed to execute");
    assert!(status.status.success());
}
