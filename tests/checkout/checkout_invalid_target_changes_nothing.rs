use crate::common::command::{
    init_repository_dir, read_head, read_index, run_trk_command, stage_and_commit, stdout_of,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::unknown_name("nope", "commit 'nope' not found")]
#[case::absent_digest(
    "0000000000000000000000000000000000000000",
    "commit '0000000000000000000000000000000000000000' not found"
)]
fn checkout_unknown_target_fails(
    init_repository_dir: TempDir,
    #[case] target: &str,
    #[case] message: &str,
) {
    let dir = init_repository_dir.path();

    run_trk_command(dir, &["checkout", target])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(message));

    assert_eq!(read_head(dir), "ref: refs/heads/main");
    assert_eq!(read_file(&dir.join("f.txt")), "hello\n");
}

#[rstest]
fn checkout_non_commit_object_fails_before_touching_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let index = read_index(dir);
    let blob_id = stdout_of(&mut run_trk_command(dir, &["hash-object", "f.txt"]))
        .trim()
        .to_string();

    run_trk_command(dir, &["checkout", &blob_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("object is not a commit"));

    assert_eq!(read_head(dir), "ref: refs/heads/main");
    assert_eq!(read_file(&dir.join("f.txt")), "hello\n");
    assert_eq!(read_index(dir), index);
}

#[rstest]
fn checkout_with_missing_blob_fails_before_touching_files(init_repository_dir: TempDir) {
    const HELLO_BLOB: &str = "ce013625030ba8dba906f756967f9e9ca394464a";

    let dir = init_repository_dir.path();
    run_trk_command(dir, &["branch", "feature"]).assert().success();
    write_file(FileSpec::new(dir.join("f.txt"), "changed\n".to_string()));
    stage_and_commit(dir, "c2");
    let index = read_index(dir);

    std::fs::remove_file(
        dir.join(".trk/objects")
            .join(&HELLO_BLOB[..2])
            .join(&HELLO_BLOB[2..]),
    )
    .unwrap();

    run_trk_command(dir, &["checkout", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "blob {HELLO_BLOB} at f.txt is missing"
        )));

    assert_eq!(read_head(dir), "ref: refs/heads/main");
    assert_eq!(read_file(&dir.join("f.txt")), "changed\n");
    assert_eq!(read_index(dir), index);
}
