use crate::common::command::{repository_dir, run_trk_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn print_nothing_to_commit_in_empty_repository(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_trk_command(dir, &["init"]).assert().success();

    run_trk_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::eq("nothing to commit, working tree clean\n"));

    run_trk_command(dir, &["status", "--porcelain"])
        .assert()
        .success()
        .stdout(predicate::eq(""));
}
