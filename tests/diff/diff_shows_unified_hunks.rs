use crate::common::command::{repository_dir, run_trk_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn file_a() -> String {
    (1..=12).map(|i| format!("line {i}\n")).collect()
}

#[fixture]
fn file_b() -> String {
    (1..=12)
        .map(|i| match i {
            2 => "line two\n".to_string(),
            11 => String::new(),
            i => format!("line {i}\n"),
        })
        .collect()
}

#[rstest]
fn diff_shows_unified_hunks(repository_dir: TempDir, file_a: String, file_b: String) {
    let dir = repository_dir.path();
    run_trk_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("f.txt"), file_a));
    write_file(FileSpec::new(dir.join("same.txt"), "same\n".to_string()));
    run_trk_command(dir, &["add", "."]).assert().success();
    write_file(FileSpec::new(dir.join("f.txt"), file_b));

    let diff = stdout_of(&mut run_trk_command(dir, &["diff"]));

    assert_eq!(
        diff,
        "diff --trk a/f.txt b/f.txt\n\
         --- a/f.txt (staged)\n\
         +++ b/f.txt (working)\n\
         @@ -1,5 +1,5 @@\n \
         line 1\n\
         -line 2\n\
         +line two\n \
         line 3\n \
         line 4\n \
         line 5\n\
         @@ -8,5 +8,4 @@\n \
         line 8\n \
         line 9\n \
         line 10\n\
         -line 11\n \
         line 12\n"
    );
}

#[rstest]
fn diff_is_empty_when_nothing_changed(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_trk_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("f.txt"), "hello\n".to_string()));
    run_trk_command(dir, &["add", "."]).assert().success();
    write_file(FileSpec::new(dir.join("untracked.txt"), "new\n".to_string()));

    assert_eq!(stdout_of(&mut run_trk_command(dir, &["diff"])), "");
}
