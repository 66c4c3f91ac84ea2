use crate::common::command::{
    index_paths, init_repository_dir, read_branch, read_head, run_trk_command, stage_and_commit,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn checkout_branch_removes_missing_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_trk_command(dir, &["branch", "dev"]).assert().success();

    write_file(FileSpec::new(dir.join("g.txt"), "world\n".to_string()));
    write_file(FileSpec::new(dir.join("a/b/nested.txt"), "deep\n".to_string()));
    stage_and_commit(dir, "c2");
    let main_tip = read_branch(dir, "main");

    run_trk_command(dir, &["checkout", "dev"])
        .assert()
        .success()
        .stdout(predicate::eq("Switched to branch 'dev'\n"));

    assert_eq!(read_head(dir), "ref: refs/heads/dev");
    assert_eq!(read_file(&dir.join("f.txt")), "hello\n");
    assert!(!dir.join("g.txt").exists());
    assert!(!dir.join("a").exists());
    assert_eq!(index_paths(dir), vec!["f.txt"]);
    assert_eq!(read_branch(dir, "main"), main_tip);

    run_trk_command(dir, &["checkout", "main"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("g.txt")), "world\n");
    assert_eq!(read_file(&dir.join("a/b/nested.txt")), "deep\n");
    assert_eq!(index_paths(dir), vec!["a/b/nested.txt", "f.txt", "g.txt"]);
}

#[rstest]
fn commit_after_checkout_starts_from_target_tree(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_trk_command(dir, &["branch", "dev"]).assert().success();
    write_file(FileSpec::new(dir.join("g.txt"), "world\n".to_string()));
    stage_and_commit(dir, "c2");

    run_trk_command(dir, &["checkout", "dev"]).assert().success();
    write_file(FileSpec::new(dir.join("h.txt"), "dev only\n".to_string()));
    run_trk_command(dir, &["add", "h.txt"]).assert().success();
    crate::common::command::trk_commit(dir, "d1")
        .assert()
        .success();

    run_trk_command(dir, &["list-files"])
        .assert()
        .success()
        .stdout(predicate::eq("f.txt\nh.txt\n"));
}
