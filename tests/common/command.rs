use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Repository with a single commit "c1" holding `f.txt` = "hello\n"
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_trk_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("f.txt"),
        "hello\n".to_string(),
    ));

    run_trk_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    trk_commit(repository_dir.path(), "c1").assert().success();

    repository_dir
}

pub fn run_trk_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("trk").expect("Failed to find trk binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    for var in ["TRK_NAME", "TRK_EMAIL", "TRK_DATE", "TRK_LOG"] {
        cmd.env_remove(var);
    }
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn trk_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_trk_command(dir, &["commit", "-m", message]);
    cmd.envs(vec![
        ("TRK_NAME", "fake_user"),
        ("TRK_EMAIL", "fake_email@email.com"),
        ("TRK_DATE", "2023-01-01 12:00:00 +0000"), // %Y-%m-%d %H:%M:%S %z
    ]);
    cmd
}

pub fn stage_and_commit(dir: &Path, message: &str) {
    run_trk_command(dir, &["add", "."]).assert().success();
    trk_commit(dir, message).assert().success();
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run trk");
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}

/// Raw content of `.trk/HEAD`, trimmed
pub fn read_head(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(".trk").join("HEAD"))
        .expect("Failed to read HEAD")
        .trim()
        .to_string()
}

/// Commit digest a branch points at
pub fn read_branch(dir: &Path, branch: &str) -> String {
    std::fs::read_to_string(dir.join(".trk/refs/heads").join(branch))
        .unwrap_or_else(|e| panic!("Failed to read branch {}: {}", branch, e))
        .trim()
        .to_string()
}

pub fn read_index(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(".trk").join("index.txt")).unwrap_or_default()
}

/// Paths listed in the index file, in file order
pub fn index_paths(dir: &Path) -> Vec<String> {
    read_index(dir)
        .lines()
        .filter_map(|line| line.split_once(' ').map(|(_, path)| path.to_string()))
        .collect()
}
