use crate::common::command::{CommittedRepository, committed_repository, run_trove_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn checkout_into_missing_directory(
    committed_repository: CommittedRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = committed_repository;
    let target = TempDir::new()?;
    let out = target.child("out");

    run_trove_command(
        repo.dir.path(),
        &["checkout", "HEAD", &out.path().to_string_lossy()],
    )
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

    out.child("1.txt").assert("one");
    out.child("a").child("2.txt").assert("two");

    Ok(())
}

#[rstest]
fn checkout_refuses_non_empty_directory(
    committed_repository: CommittedRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = committed_repository;
    let target = TempDir::new()?;
    target.child("keep.txt").write_str("keep")?;

    run_trove_command(
        repo.dir.path(),
        &["checkout", &repo.first, &target.path().to_string_lossy()],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("not empty"));

    target.child("keep.txt").assert("keep");
    target.child("1.txt").assert(predicate::path::missing());

    Ok(())
}
