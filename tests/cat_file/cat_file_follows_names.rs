use crate::common::command::{
    CommittedRepository, committed_repository, run_trove_command, trove_stdout,
};
use crate::common::commit_payload;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn print_commit_payload_from_head(
    committed_repository: CommittedRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = committed_repository;
    let expected = commit_payload(&repo.tree_root, &[&repo.first], "Second commit");

    run_trove_command(repo.dir.path(), &["cat-file", "commit", "HEAD"])
        .assert()
        .success()
        .stdout(predicate::eq(expected));

    Ok(())
}

#[rstest]
fn print_blob_from_abbreviated_oid(
    committed_repository: CommittedRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = committed_repository;

    let stdout = trove_stdout(repo.dir.path(), &["cat-file", "blob", &repo.blob_two[..7]]);
    pretty_assertions::assert_eq!(stdout, "two");

    Ok(())
}

#[rstest]
fn blob_requested_as_commit_fails(
    committed_repository: CommittedRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = committed_repository;

    run_trove_command(repo.dir.path(), &["cat-file", "commit", &repo.blob_one])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a blob, not a commit"));

    Ok(())
}

#[rstest]
fn unknown_name_fails(
    committed_repository: CommittedRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = committed_repository;

    run_trove_command(repo.dir.path(), &["cat-file", "blob", "nonexistent"])
        .assert()
        .failure();

    Ok(())
}
