use crate::common::command::{read_branch, repository_dir, run_trk_command, stdout_of, trk_commit};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn commit_records_root_commit(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_trk_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("f.txt"), "hello\n".to_string()));
    run_trk_command(dir, &["add", "f.txt"]).assert().success();

    trk_commit(dir, "c1")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[main \(root-commit\) [0-9a-f]{7}\] c1\n$")?);

    let commit_id = read_branch(dir, "main");
    let commit = stdout_of(&mut run_trk_command(dir, &["cat-file", &commit_id]));
    let lines = commit.lines().collect::<Vec<_>>();

    assert!(lines[0].starts_with("tree "));
    assert!(!commit.contains("parent "));
    assert_eq!(lines[1], "author fake_user <fake_email@email.com> 1672574400");
    assert_eq!(lines[2], "committer fake_user <fake_email@email.com> 1672574400");
    assert_eq!(lines[4], "c1");

    Ok(())
}

#[rstest]
fn commit_accepts_positional_message(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_trk_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("f.txt"), "hello\n".to_string()));
    run_trk_command(dir, &["add", "."]).assert().success();

    run_trk_command(dir, &["commit", "positional message"])
        .env("TRK_DATE", "0")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("] positional message\n"));
}
