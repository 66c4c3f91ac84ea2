use crate::common::command::{read_head, repository_dir, run_trk_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let trk_path = repository_dir.path().canonicalize()?.join(".trk");

    run_trk_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Initialized empty trk repository in",
        ))
        .stdout(predicate::str::contains(trk_path.display().to_string()));

    assert!(trk_path.join("objects").is_dir());
    assert!(trk_path.join("refs").join("heads").is_dir());
    assert_eq!(read_head(repository_dir.path()), "ref: refs/heads/main");

    Ok(())
}
