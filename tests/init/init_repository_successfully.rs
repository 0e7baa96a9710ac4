use crate::common::command::{repository_dir, run_trove_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let git_dir = repository_dir.path().canonicalize()?.join(".git");

    run_trove_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty Git repository in .+\n$",
        )?)
        .stdout(predicate::str::contains(git_dir.display().to_string()));

    for dir in ["branches", "objects", "refs/heads", "refs/tags"] {
        assert!(git_dir.join(dir).is_dir(), "missing {dir}");
    }
    pretty_assertions::assert_eq!(
        std::fs::read_to_string(git_dir.join("HEAD"))?,
        "ref: refs/heads/master\n"
    );

    let config = std::fs::read_to_string(git_dir.join("config"))?;
    assert!(config.contains("[core]"));
    assert!(config.contains("repositoryformatversion=0"));

    Ok(())
}

#[rstest]
fn init_creates_missing_target(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_trove_command(repository_dir.path(), &["init", "nested/project"])
        .assert()
        .success();

    assert!(
        repository_dir
            .path()
            .join("nested/project/.git/objects")
            .is_dir()
    );

    Ok(())
}
