use crate::common::command::{index_paths, repository_dir, run_trk_command};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_all_replaces_index_with_snapshot(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_trk_command(dir, &["init"]).assert().success();

    let generated = write_generated_files(dir, 3);
    write_file(FileSpec::new(dir.join("doomed.txt"), "bye\n".to_string()));

    run_trk_command(dir, &["add", "."])
        .assert()
        .success()
        .stdout(predicate::eq("Staged all changes.\n"));
    assert_eq!(index_paths(dir).len(), generated.len() + 1);

    std::fs::remove_file(dir.join("doomed.txt")).unwrap();
    run_trk_command(dir, &["add", "."]).assert().success();

    let mut expected = generated
        .iter()
        .map(|spec| spec.path.file_name().unwrap().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    expected.sort();
    assert_eq!(index_paths(dir), expected);
}
