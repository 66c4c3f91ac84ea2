use crate::common::command::{init_repository_dir, repository_dir, run_trk_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn create_branch_without_commits_fails(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_trk_command(dir, &["init"]).assert().success();

    run_trk_command(dir, &["branch", "dev"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("branch 'main' has no commits yet"));

    assert!(!dir.join(".trk/refs/heads/dev").exists());
}

#[rstest]
fn create_duplicate_branch_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_trk_command(dir, &["branch", "dev"]).assert().success();

    run_trk_command(dir, &["branch", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("a branch named 'dev' already exists"));
}

#[rstest]
#[case::double_dot("bad..name")]
#[case::leading_dot(".hidden")]
#[case::lock_suffix("topic.lock")]
#[case::trailing_slash("topic/")]
fn create_branch_with_invalid_name_fails(init_repository_dir: TempDir, #[case] name: &str) {
    run_trk_command(init_repository_dir.path(), &["branch", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "'{name}' is not a valid branch name"
        )));
}
