use crate::common::command::{init_repository_dir, run_trk_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Status compares the index with the working tree; a file staged after the
/// last commit is simply "staged", never "new"
#[rstest]
fn status_ignores_head_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("g.txt"), "world\n".to_string()));
    run_trk_command(dir, &["add", "g.txt"]).assert().success();

    let status = stdout_of(&mut run_trk_command(dir, &["status", "--porcelain"]));

    assert_eq!(status, "S  f.txt\nS  g.txt\n");
}
