use crate::common::command::{
    init_repository_dir, read_branch, run_trk_command, stdout_of, trk_commit,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn commit_chains_to_parent(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = read_branch(dir, "main");

    write_file(FileSpec::new(dir.join("g.txt"), "world\n".to_string()));
    run_trk_command(dir, &["add", "g.txt"]).assert().success();
    trk_commit(dir, "c2\n\nlonger body")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[main [0-9a-f]{7}\] c2\n$")?);

    let second = read_branch(dir, "main");
    assert_ne!(first, second);

    let commit = stdout_of(&mut run_trk_command(dir, &["cat-file", &second]));
    assert!(commit.contains(&format!("\nparent {first}\n")));
    assert!(commit.ends_with("c2\n\nlonger body\n"));

    Ok(())
}
