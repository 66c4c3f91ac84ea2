use crate::common::command::{index_paths, read_index, repository_dir, run_trk_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_single_file_to_index(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_trk_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("f.txt"), "hello\n".to_string()));
    write_file(FileSpec::new(dir.join("g.txt"), "other\n".to_string()));

    run_trk_command(dir, &["add", "f.txt"])
        .assert()
        .success()
        .stdout(predicate::eq("added 'f.txt' to index\n"));

    assert_eq!(index_paths(dir), vec!["f.txt"]);
    assert_eq!(
        read_index(dir),
        "ce013625030ba8dba906f756967f9e9ca394464a f.txt\n"
    );
}
