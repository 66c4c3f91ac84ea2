use crate::common::command::{repository_dir, run_trk_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::{fixture, rstest};

const HELLO_BLOB: &str = "ce013625030ba8dba906f756967f9e9ca394464a";

#[fixture]
fn hello_repository(repository_dir: TempDir) -> TempDir {
    run_trk_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("f.txt"),
        "hello\n".to_string(),
    ));

    repository_dir
}

#[rstest]
fn hash_object_stores_blob(hello_repository: TempDir) {
    let dir = hello_repository.path();

    run_trk_command(dir, &["hash-object", "f.txt"])
        .assert()
        .success()
        .stdout(predicate::eq(format!("{HELLO_BLOB}\n")));

    assert!(
        dir.join(".trk/objects")
            .join(&HELLO_BLOB[..2])
            .join(&HELLO_BLOB[2..])
            .is_file()
    );

    run_trk_command(dir, &["cat-file", HELLO_BLOB])
        .assert()
        .success()
        .stdout(predicate::eq("hello\n"));
}

#[rstest]
fn hash_object_of_missing_file_fails(hello_repository: TempDir) {
    run_trk_command(hello_repository.path(), &["hash-object", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did not match any files"));
}

#[rstest]
#[case::malformed("xyz", "not a valid object name")]
#[case::absent("0123456789012345678901234567890123456789", "not found")]
fn cat_file_of_unknown_object_fails(
    hello_repository: TempDir,
    #[case] object_id: &str,
    #[case] message: &str,
) {
    run_trk_command(hello_repository.path(), &["cat-file", object_id])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(message));
}
