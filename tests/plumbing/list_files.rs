use crate::common::command::{init_repository_dir, repository_dir, run_trk_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn list_files_prints_head_tree(init_repository_dir: TempDir) {
    run_trk_command(init_repository_dir.path(), &["list-files"])
        .assert()
        .success()
        .stdout(predicate::eq("f.txt\n"));
}

#[rstest]
fn list_files_without_commits_fails(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_trk_command(dir, &["init"]).assert().success();

    run_trk_command(dir, &["list-files"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no commits yet"));
}
