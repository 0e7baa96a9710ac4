use crate::common::command::{
    CommittedRepository, committed_repository, hash_object_bytes, run_trove_command,
    trove_stdout,
};
use crate::common::commit_payload;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn log_from_head(committed_repository: CommittedRepository) -> Result<(), Box<dyn std::error::Error>> {
    let repo = committed_repository;

    let expected = format!(
        "digraph trovelog{{\n  c_{} -> c_{};\n}}\n",
        repo.second, repo.first
    );
    pretty_assertions::assert_eq!(trove_stdout(repo.dir.path(), &["log"]), expected);

    Ok(())
}

#[rstest]
fn log_from_first_commit(
    committed_repository: CommittedRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = committed_repository;

    pretty_assertions::assert_eq!(
        trove_stdout(repo.dir.path(), &["log", &repo.first]),
        "digraph trovelog{\n}\n"
    );

    Ok(())
}

#[rstest]
fn log_merge_lists_each_parent(
    committed_repository: CommittedRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = committed_repository;
    let side = hash_object_bytes(
        repo.dir.path(),
        &repo.scratch,
        "commit",
        "side",
        &commit_payload(&repo.tree_root, &[&repo.first], "Side commit"),
    );
    let merge = hash_object_bytes(
        repo.dir.path(),
        &repo.scratch,
        "commit",
        "merge",
        &commit_payload(&repo.tree_root, &[&repo.second, &side], "Merge"),
    );

    let stdout = trove_stdout(repo.dir.path(), &["log", &merge]);

    assert_eq!(stdout.matches(" -> ").count(), 4);
    assert_eq!(
        stdout
            .matches(&format!("-> c_{};", repo.first))
            .count(),
        2
    );
    assert!(stdout.contains(&format!("c_{merge} -> c_{side};")));

    Ok(())
}

#[rstest]
fn log_without_commits_fails(
    committed_repository: CommittedRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = committed_repository;
    std::fs::remove_file(repo.dir.path().join(".git/refs/heads/master"))?;

    run_trove_command(repo.dir.path(), &["log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refs/heads/master"));

    Ok(())
}
