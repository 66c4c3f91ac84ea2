use crate::common::command::{init_repository_dir, run_trk_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn list_branches_marks_current(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_trk_command(dir, &["branch", "dev"]).assert().success();
    run_trk_command(dir, &["branch", "zeta"]).assert().success();

    run_trk_command(dir, &["list-branches"])
        .assert()
        .success()
        .stdout(predicate::eq("  dev\n* main\n  zeta\n"));

    run_trk_command(dir, &["checkout", "dev"]).assert().success();

    run_trk_command(dir, &["list-branches"])
        .assert()
        .success()
        .stdout(predicate::eq("* dev\n  main\n  zeta\n"));
}
