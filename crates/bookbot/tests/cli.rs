use assert_cmd::prelude::*;
use assert_fs::prelude::*;

use predicates::prelude::*;
use predicates::str::contains;
use std::process::Command;

/// `bookbot` running inside `dir`, with logging left at its defaults.
fn bookbot_cmd(dir: &assert_fs::TempDir) -> Command {
  let mut cmd = Command::cargo_bin("bookbot").expect("binary exists");
  cmd.current_dir(dir.path());
  cmd.env_remove("RUST_LOG");
  cmd
}

fn write_default_book(dir: &assert_fs::TempDir, contents: &str) {
  dir.child("books").create_dir_all().unwrap();
  dir.child("books/frankenstein.txt").write_str(contents).unwrap();
}

#[test]
fn test_default_path_report() {
  let temp = assert_fs::TempDir::new().unwrap();
  write_default_book(&temp, "Bb aA");

  bookbot_cmd(&temp).assert().success().stdout(
    "--- Begin report of books/frankenstein.txt ---\n\
     2 words found in the document\n\
     \n\
     The 'a' character was found 2 times\n\
     The 'b' character was found 2 times\n",
  );

  temp.close().unwrap();
}

#[test]
fn test_explicit_path_argument() {
  let temp = assert_fs::TempDir::new().unwrap();
  temp.child("letter.txt").write_str("To Mrs. Saville, England.\n").unwrap();

  bookbot_cmd(&temp)
    .arg("letter.txt")
    .assert()
    .success()
    .stdout(contains("--- Begin report of letter.txt ---"))
    .stdout(contains("4 words found in the document"))
    .stdout(contains("The 'e' character was found 2 times"))
    .stdout(contains("The 'z' character").not());

  temp.close().unwrap();
}

#[test]
fn test_empty_book() {
  let temp = assert_fs::TempDir::new().unwrap();
  write_default_book(&temp, "");

  bookbot_cmd(&temp)
    .assert()
    .success()
    .stdout("--- Begin report of books/frankenstein.txt ---\n0 words found in the document\n\n");

  temp.close().unwrap();
}

#[test]
fn test_missing_file_fails_without_report() {
  let temp = assert_fs::TempDir::new().unwrap();

  bookbot_cmd(&temp)
    .assert()
    .failure()
    .code(1)
    .stdout(predicate::str::is_empty())
    .stderr(contains("Error:").and(contains("books/frankenstein.txt")));

  temp.close().unwrap();
}

#[test]
fn test_directory_path_fails() {
  let temp = assert_fs::TempDir::new().unwrap();
  temp.child("books").create_dir_all().unwrap();

  bookbot_cmd(&temp)
    .arg("books")
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(contains("Failed to read books"));

  temp.close().unwrap();
}

#[test]
fn test_invalid_utf8_fails_without_report() {
  let temp = assert_fs::TempDir::new().unwrap();
  temp.child("latin1.txt").write_binary(&[b'c', b'a', b'f', 0xe9]).unwrap();

  bookbot_cmd(&temp)
    .arg("latin1.txt")
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(contains("not valid UTF-8"));

  temp.close().unwrap();
}

#[test]
fn test_json_format() {
  let temp = assert_fs::TempDir::new().unwrap();
  write_default_book(&temp, "Bb aA");

  let output = bookbot_cmd(&temp).args(["--format", "json"]).output().unwrap();
  assert!(output.status.success());

  let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(parsed["path"], "books/frankenstein.txt");
  assert_eq!(parsed["word_count"], 2);
  assert_eq!(parsed["letters"][0]["letter"], "a");
  assert_eq!(parsed["letters"][0]["count"], 2);

  temp.close().unwrap();
}

#[test]
fn test_config_file_in_working_directory() {
  let temp = assert_fs::TempDir::new().unwrap();
  temp.child("notes.txt").write_str("hello").unwrap();
  temp.child("bookbot.json").write_str(r#"{ "path": "notes.txt", "format": "json" }"#).unwrap();

  bookbot_cmd(&temp)
    .assert()
    .success()
    .stdout(contains(r#""path": "notes.txt""#))
    .stdout(contains(r#""word_count": 1"#));

  // command line still wins
  bookbot_cmd(&temp)
    .args(["--format", "pretty"])
    .assert()
    .success()
    .stdout(contains("--- Begin report of notes.txt ---"));

  temp.close().unwrap();
}

#[test]
fn test_invalid_config_file() {
  let temp = assert_fs::TempDir::new().unwrap();
  write_default_book(&temp, "text");
  temp.child("custom.json").write_str("not json").unwrap();

  bookbot_cmd(&temp)
    .args(["--config", "custom.json"])
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(contains("Invalid config file custom.json"));

  temp.close().unwrap();
}

#[test]
fn test_verbose_logs_go_to_stderr() {
  let temp = assert_fs::TempDir::new().unwrap();
  write_default_book(&temp, "Bb aA");

  bookbot_cmd(&temp)
    .arg("--verbose")
    .assert()
    .success()
    .stdout(contains("analyzed document").not())
    .stderr(contains("analyzed document"));

  temp.close().unwrap();
}
