use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use trk::areas::repository::Repository;
use trk::artifacts::core::{PagerWriter, should_page};

const LOG_ENV: &str = "TRK_LOG";

#[derive(Parser)]
#[command(
    name = "trk",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal version control system",
    long_about = "trk tracks snapshots of a directory tree in a private .trk directory. \
    It stores content-addressed blobs, trees and commits, \
    supports branches, checkout and fast-forward merges.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .trk directory in the current directory. \
        Running it again on an existing repository keeps HEAD, refs and the index."
    )]
    Init,
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stores the given files as blobs and records them in the index. \
        A directory stages every non-ignored file below it; '.' replaces the index with \
        a snapshot of the whole working tree."
    )]
    Add {
        #[arg(index = 1, required = true, help = "Files or directories to stage, or '.'")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command stores the index as a tree and records a commit on top of HEAD."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: Option<String>,
        #[arg(
            short = 'm',
            long = "message",
            help = "The commit message",
            conflicts_with = "message"
        )]
        message_flag: Option<String>,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command walks the parent chain starting at HEAD."
    )]
    Log {
        #[arg(long, help = "Print each commit on a single line")]
        oneline: bool,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command compares the index with the working tree and lists \
        modified, deleted, untracked and unchanged files."
    )]
    Status {
        #[arg(long, help = "Give the output in an easy-to-parse format")]
        porcelain: bool,
    },
    #[command(
        name = "diff",
        about = "Show changes between the index and the working tree",
        long_about = "This command prints a unified diff for every staged file modified in the working tree."
    )]
    Diff,
    #[command(
        name = "checkout",
        about = "Switch to a branch or a commit",
        long_about = "This command replaces the working tree with the tree of the target commit. \
        The target is a branch name or a full commit digest; a digest detaches HEAD."
    )]
    Checkout {
        #[arg(index = 1, help = "Branch name or commit digest")]
        target: String,
    },
    #[command(
        name = "branch",
        about = "Create a new branch at the current commit",
        long_about = "This command creates a branch pointing at the commit HEAD resolves to."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the new branch")]
        name: String,
    },
    #[command(name = "list-branches", about = "List all branches")]
    ListBranches,
    #[command(name = "list-files", about = "List the files recorded in HEAD's tree")]
    ListFiles,
    #[command(
        name = "merge",
        about = "Merge a branch into the current branch",
        long_about = "This command fast-forwards the current branch when possible. \
        Otherwise it reports conflicting paths or a diverged history and changes nothing."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        branch: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the digest of the object to be specified."
    )]
    CatFile {
        #[arg(index = 1, help = "The object digest to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Store a file as a blob and print its digest",
        long_about = "This command hashes a file and writes it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "write-tree",
        about = "Store the index as a tree and print its digest"
    )]
    WriteTree,
}

fn main() -> ExitCode {
    init_tracing();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let pwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init => {
            let mut repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;
            repository.init()?
        }
        Commands::Add { paths } => open(&pwd)?.add(&paths)?,
        Commands::Commit {
            message,
            message_flag,
        } => {
            let message = message
                .or(message_flag)
                .ok_or_else(|| anyhow::anyhow!("a commit message is required"))?;
            open(&pwd)?.commit(&message)?
        }
        Commands::Log { oneline } => {
            if should_page() {
                let pager = minus::Pager::new();
                let writer = PagerWriter::new(pager.clone());
                let repository = Repository::open(&pwd, Box::new(writer))?;
                repository.log(oneline)?;
                minus::page_all(pager)?;
            } else {
                open(&pwd)?.log(oneline)?
            }
        }
        Commands::Status { porcelain } => open(&pwd)?.status(porcelain)?,
        Commands::Diff => open(&pwd)?.diff()?,
        Commands::Checkout { target } => open(&pwd)?.checkout(&target)?,
        Commands::Branch { name } => open(&pwd)?.branch(&name)?,
        Commands::ListBranches => open(&pwd)?.list_branches()?,
        Commands::ListFiles => open(&pwd)?.list_files()?,
        Commands::Merge { branch } => open(&pwd)?.merge(&branch)?,
        Commands::CatFile { sha } => open(&pwd)?.cat_file(&sha)?,
        Commands::HashObject { file } => open(&pwd)?.hash_object(&file)?,
        Commands::WriteTree => open(&pwd)?.write_tree()?,
    }

    std::io::stdout().flush()?;

    Ok(())
}

fn open(pwd: &Path) -> Result<Repository> {
    Ok(Repository::open(pwd, Box::new(std::io::stdout()))?)
}
