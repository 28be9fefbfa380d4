use sam_upload_file::cli::HELP_TEXT;
use std::path::Path;
use std::process::{Command, Output};

/// Runs the binary with an empty environment plus `vars`.
fn run(args: &[&str], vars: &[(&str, &Path)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sam-upload-file"));
    cmd.env_clear().args(args);
    for (name, value) in vars {
        cmd.env(name, value);
    }
    cmd.output().unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn scratch_file() -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    std::fs::write(&path, b"hello").unwrap();
    let path = path.to_string_lossy().into_owned();
    (dir, path)
}

#[test]
fn test_help_exits_zero_without_config() {
    let out = run(&["--help"], &[]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), format!("{}\n", HELP_TEXT));
    assert!(stderr(&out).is_empty());
}

#[test]
fn test_help_wins_over_other_flags() {
    let out = run(&["--json", "--bucket", "x", "--help"], &[]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), format!("{}\n", HELP_TEXT));

    let out = run(&["--help", "--help"], &[]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_missing_file_goes_to_stderr_even_with_json() {
    let out = run(&["--json"], &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert_eq!(stderr(&out), "Error: --file is required\n");
}

#[test]
fn test_empty_file_value_is_missing_file() {
    let out = run(&["--file", ""], &[]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stderr(&out), "Error: --file is required\n");
}

#[test]
fn test_parse_errors_exit_one() {
    for args in [
        &["--file", "a.txt", "--verbose"][..],
        &["--file"][..],
        &["--version"][..],
    ] {
        let out = run(args, &[]);
        assert_eq!(out.status.code(), Some(1), "args: {:?}", args);
        assert!(stdout(&out).is_empty(), "args: {:?}", args);
        assert!(!stderr(&out).is_empty(), "args: {:?}", args);
    }
}

#[test]
fn test_missing_config_text_mode() {
    let (_dir, path) = scratch_file();
    let out = run(&["--file", &path], &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert_eq!(stderr(&out), "Error: R2_ACCESS_KEY_ID not set\n");
}

#[test]
fn test_missing_config_json_mode_uses_stdout() {
    let (_dir, path) = scratch_file();
    let out = run(&["--file", &path, "--json"], &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).is_empty());
    assert_eq!(stdout(&out), "{\"error\":\"R2_ACCESS_KEY_ID not set\"}\n");
}

#[test]
fn test_dotfile_under_home_is_read() {
    let home = tempfile::tempdir().unwrap();
    let env_dir = home.path().join(".baoyu-skills");
    std::fs::create_dir_all(&env_dir).unwrap();
    std::fs::write(
        env_dir.join(".env"),
        "R2_ACCESS_KEY_ID=id\nR2_SECRET_ACCESS_KEY=secret\nR2_ENDPOINT=https://r2.example.com\n",
    )
    .unwrap();
    let (_dir, path) = scratch_file();

    let out = run(
        &["--file", &path, "--bucket", "media"],
        &[("HOME", home.path())],
    );
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stderr(&out), "Error: R2_PUBLIC_URL not set\n");
}
