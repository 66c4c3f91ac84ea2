use crate::common::command::{read_index, repository_dir, run_trk_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::missing("missing.txt")]
#[case::outside_root("../outside.txt")]
fn adding_a_missing_file_fails(repository_dir: TempDir, #[case] path: &str) {
    let dir = repository_dir.path();
    run_trk_command(dir, &["init"]).assert().success();

    run_trk_command(dir, &["add", path])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "pathspec '{path}' did not match any files"
        )));

    assert_eq!(read_index(dir), "");
}
