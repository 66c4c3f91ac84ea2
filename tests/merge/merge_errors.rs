use crate::common::command::{
    init_repository_dir, read_branch, repository_dir, run_trk_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn merge_missing_branch_fails(init_repository_dir: TempDir) {
    run_trk_command(init_repository_dir.path(), &["merge", "missing"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("branch 'missing' does not exist"));
}

#[rstest]
fn merge_into_unborn_branch_fails(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_trk_command(dir, &["init"]).assert().success();

    run_trk_command(dir, &["merge", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch 'main' has no commits yet"));
}

#[rstest]
fn merge_on_detached_head_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let tip = read_branch(dir, "main");
    run_trk_command(dir, &["branch", "feature"]).assert().success();
    run_trk_command(dir, &["checkout", &tip]).assert().success();

    run_trk_command(dir, &["merge", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid ref"));
}
