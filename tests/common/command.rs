use crate::common::file::{FileSpec, write_file};
use crate::common::{commit_payload, tree_payload};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// A repository holding two commits built entirely through `hash-object`
///
/// ```text
/// 1.txt    "one"
/// a/2.txt  "two"
/// ```
///
/// `second` has `first` as its parent and the same tree; `master` points at
/// `second`.
pub struct CommittedRepository {
    pub dir: TempDir,
    pub scratch: TempDir,
    pub blob_one: String,
    pub blob_two: String,
    pub tree_a: String,
    pub tree_root: String,
    pub first: String,
    pub second: String,
}

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_trove_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

#[fixture]
pub fn committed_repository(init_repository_dir: TempDir) -> CommittedRepository {
    let dir = init_repository_dir;
    let scratch = TempDir::new().expect("Failed to create scratch dir");

    let blob_one = hash_object_bytes(dir.path(), &scratch, "blob", "1.txt", b"one");
    let blob_two = hash_object_bytes(dir.path(), &scratch, "blob", "2.txt", b"two");
    let tree_a = hash_object_bytes(
        dir.path(),
        &scratch,
        "tree",
        "tree_a",
        &tree_payload(&[("100644", "2.txt", &blob_two)]),
    );
    let tree_root = hash_object_bytes(
        dir.path(),
        &scratch,
        "tree",
        "tree_root",
        &tree_payload(&[("100644", "1.txt", &blob_one), ("40000", "a", &tree_a)]),
    );
    let first = hash_object_bytes(
        dir.path(),
        &scratch,
        "commit",
        "first",
        &commit_payload(&tree_root, &[], "First commit"),
    );
    let second = hash_object_bytes(
        dir.path(),
        &scratch,
        "commit",
        "second",
        &commit_payload(&tree_root, &[&first], "Second commit"),
    );

    write_file(FileSpec::new(
        dir.path()
            .join(".git")
            .join("refs")
            .join("heads")
            .join("master"),
        format!("{second}\n").into_bytes(),
    ));

    CommittedRepository {
        dir,
        scratch,
        blob_one,
        blob_two,
        tree_a,
        tree_root,
        first,
        second,
    }
}

pub fn run_trove_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("trove").expect("Failed to find trove binary");
    cmd.env_remove("TROVE_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Run a command that must succeed and return its stdout
pub fn trove_stdout(dir: &Path, args: &[&str]) -> String {
    let output = run_trove_command(dir, args).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("Non UTF-8 output")
}

/// Write `content` to a scratch file and store it as an object of `object_type`
pub fn hash_object_bytes(
    repository: &Path,
    scratch: &TempDir,
    object_type: &str,
    name: &str,
    content: &[u8],
) -> String {
    let path = scratch.path().join(name);
    write_file(FileSpec::new(path.clone(), content.to_vec()));

    let path = path.to_string_lossy().into_owned();
    trove_stdout(repository, &["hash-object", "-t", object_type, "-w", &path])
        .trim()
        .to_string()
}
