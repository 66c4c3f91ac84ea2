use crate::common::command::{init_repository_dir, read_branch, run_trk_command};
use crate::common::file::read_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn merge_same_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let tip = read_branch(dir, "main");
    run_trk_command(dir, &["branch", "same"]).assert().success();

    run_trk_command(dir, &["merge", "same"])
        .assert()
        .success()
        .stdout(predicate::eq("Already up to date.\n"));

    assert_eq!(read_branch(dir, "main"), tip);
    assert_eq!(read_file(&dir.join("f.txt")), "hello\n");
}
