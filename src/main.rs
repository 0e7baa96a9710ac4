use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use trove::areas::repository::Repository;
use trove::artifacts::objects::object_type::ObjectType;
use trove::commands::plumbing::hash_object::hash_object;

const LOG_ENV: &str = "TROVE_LOG";

#[derive(Parser)]
#[command(
    name = "trove",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal git-compatible object store",
    long_about = "This is a small content tracker that reads and writes git's on-disk format. \
    It stores loose objects, follows references, and resolves object names, \
    but leaves staging, committing and merging to git itself.",
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
        long_about = "This command creates a new repository in the current directory or at the specified path. \
        The target must not exist or must be an empty directory."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the raw payload of an object. \
        Tags are peeled and commits are replaced by their tree until an object of the requested type is found."
    )]
    CatFile {
        #[arg(index = 1, help = "The expected object type (blob, commit, tag, tree)")]
        object_type: ObjectType,
        #[arg(index = 2, help = "The object to print")]
        object: String,
    },
    #[command(
        name = "hash-object",
        about = "Compute an object ID and optionally write the object to the database",
        long_about = "This command hashes a file as an object of the given type. \
        A repository is only needed when the object is written."
    )]
    HashObject {
        #[arg(short = 't', long = "type", default_value = "blob", help = "The object type")]
        object_type: ObjectType,
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1, help = "The file to hash")]
        path: PathBuf,
    },
    #[command(
        name = "log",
        about = "Render the commit graph as Graphviz",
        long_about = "This command prints a Graphviz digraph with one edge per commit-parent pair \
        reachable from the given commit."
    )]
    Log {
        #[arg(index = 1, default_value = "HEAD", help = "The commit to start from")]
        commit: String,
    },
    #[command(
        name = "ls-tree",
        about = "List the entries of a tree",
        long_about = "This command lists the entries of a tree object, or of the tree of a commit."
    )]
    LsTree {
        #[arg(index = 1, help = "The tree or commit to list")]
        object: String,
    },
    #[command(
        name = "checkout",
        about = "Write a commit's tree into an empty directory",
        long_about = "This command writes every file and directory of a commit's tree to the target path. \
        The target must not exist or must be an empty directory."
    )]
    Checkout {
        #[arg(index = 1, help = "The commit or tree to check out")]
        commit: String,
        #[arg(index = 2, help = "The empty directory to write into")]
        path: PathBuf,
    },
    #[command(
        name = "show-ref",
        about = "List references",
        long_about = "This command lists every reference under refs/ with the object it resolves to."
    )]
    ShowRef,
    #[command(
        name = "rev-parse",
        about = "Resolve an object name",
        long_about = "This command resolves HEAD, a full object ID or an abbreviated one to a single object ID."
    )]
    RevParse {
        #[arg(long = "type", help = "Peel the object until it has this type")]
        object_type: Option<ObjectType>,
        #[arg(index = 1, help = "The name to resolve")]
        name: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();

    match &cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => path.clone(),
                None => std::env::current_dir()?,
            };

            Repository::init(&path, &mut writer)?;
        }
        Commands::CatFile {
            object_type,
            object,
        } => current_repository()?.cat_file(*object_type, object, &mut writer)?,
        Commands::HashObject {
            object_type,
            write,
            path,
        } => {
            let repository = if *write {
                Some(current_repository()?)
            } else {
                None
            };

            hash_object(path, *object_type, repository.as_ref(), &mut writer)?
        }
        Commands::Log { commit } => current_repository()?.log(commit, &mut writer)?,
        Commands::LsTree { object } => current_repository()?.ls_tree(object, &mut writer)?,
        Commands::Checkout { commit, path } => current_repository()?.checkout(commit, path)?,
        Commands::ShowRef => current_repository()?.show_ref(&mut writer)?,
        Commands::RevParse { object_type, name } => {
            current_repository()?.rev_parse(name, *object_type, &mut writer)?
        }
    }

    writer.flush()?;
    Ok(())
}

fn current_repository() -> Result<Repository> {
    let pwd = std::env::current_dir()?;

    Repository::locate(&pwd, true)?
        .ok_or_else(|| anyhow::anyhow!("not a repository: {}", pwd.display()))
}
