use crate::common::command::{repository_dir, run_trk_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::status(&["status"])]
#[case::log(&["log"])]
#[case::add(&["add", "."])]
#[case::list_branches(&["list-branches"])]
fn commands_outside_a_repository_fail(repository_dir: TempDir, #[case] args: &[&str]) {
    run_trk_command(repository_dir.path(), args)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a trk repository"));
}
