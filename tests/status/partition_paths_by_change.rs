use crate::common::command::{repository_dir, run_trk_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

/// a.txt staged, b.txt modified, c.txt deleted, d.txt untracked, e.log ignored
#[fixture]
fn mixed_workspace(repository_dir: TempDir) -> TempDir {
    let dir = repository_dir.path();
    run_trk_command(dir, &["init"]).assert().success();

    for name in ["a.txt", "b.txt", "c.txt"] {
        write_file(FileSpec::new(dir.join(name), format!("{name}\n")));
    }
    run_trk_command(dir, &["add", "a.txt", "b.txt", "c.txt"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("b.txt"), "changed\n".to_string()));
    std::fs::remove_file(dir.join("c.txt")).unwrap();
    write_file(FileSpec::new(dir.join("d.txt"), "new\n".to_string()));
    write_file(FileSpec::new(dir.join(".trkignore"), "*.log\n".to_string()));
    write_file(FileSpec::new(dir.join("e.log"), "noise\n".to_string()));

    repository_dir
}

#[rstest]
fn porcelain_status_lists_every_path_once(mixed_workspace: TempDir) {
    let status = stdout_of(&mut run_trk_command(
        mixed_workspace.path(),
        &["status", "--porcelain"],
    ));

    assert_eq!(
        status,
        "?? .trkignore\n\
         S  a.txt\n\
         M  b.txt\n\
         D  c.txt\n\
         ?? d.txt\n"
    );
}

#[rstest]
fn long_status_groups_paths_in_sections(mixed_workspace: TempDir) {
    let status = stdout_of(&mut run_trk_command(mixed_workspace.path(), &["status"]));

    assert_eq!(
        status,
        "Modified files:\n  b.txt\n\
         Deleted files:\n  c.txt\n\
         Untracked files:\n  .trkignore\n  d.txt\n\
         Unchanged (staged) files:\n  a.txt\n"
    );
}

#[rstest]
fn restaging_a_modified_file_marks_it_staged(mixed_workspace: TempDir) {
    let dir = mixed_workspace.path();
    run_trk_command(dir, &["add", "b.txt"]).assert().success();

    let status = stdout_of(&mut run_trk_command(dir, &["status", "--porcelain"]));

    assert!(status.contains("S  b.txt\n"));
    assert!(!status.contains("M  b.txt"));
}
