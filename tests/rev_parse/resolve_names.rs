use crate::common::command::{
    CommittedRepository, committed_repository, hash_object_bytes, run_trove_command,
    trove_stdout,
};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case("HEAD")]
#[case("@")]
fn head_resolves_to_master(
    committed_repository: CommittedRepository,
    #[case] name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = committed_repository;

    pretty_assertions::assert_eq!(
        trove_stdout(repo.dir.path(), &["rev-parse", name]),
        format!("{}\n", repo.second)
    );

    Ok(())
}

#[rstest]
fn upper_case_prefix_resolves(
    committed_repository: CommittedRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = committed_repository;
    let prefix = repo.first[..10].to_ascii_uppercase();

    pretty_assertions::assert_eq!(
        trove_stdout(repo.dir.path(), &["rev-parse", &prefix]),
        format!("{}\n", repo.first)
    );

    Ok(())
}

#[rstest]
fn tree_type_peels_tag_and_commit(
    committed_repository: CommittedRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = committed_repository;
    let tag = hash_object_bytes(
        repo.dir.path(),
        &repo.scratch,
        "tag",
        "tag",
        format!(
            "object {}\ntype commit\ntag v1\ntagger fake_user <fake_email@email.com> 1672574400 +0000\n\nRelease\n",
            repo.second
        )
        .as_bytes(),
    );

    pretty_assertions::assert_eq!(
        trove_stdout(repo.dir.path(), &["rev-parse", "--type", "commit", &tag]),
        format!("{}\n", repo.second)
    );
    pretty_assertions::assert_eq!(
        trove_stdout(repo.dir.path(), &["rev-parse", "--type", "tree", &tag]),
        format!("{}\n", repo.tree_root)
    );

    Ok(())
}

#[rstest]
fn branch_names_are_not_resolved(
    committed_repository: CommittedRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = committed_repository;

    run_trove_command(repo.dir.path(), &["rev-parse", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("master"));

    Ok(())
}
