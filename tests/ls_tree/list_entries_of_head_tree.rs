use crate::common::command::{CommittedRepository, committed_repository, trove_stdout};
use rstest::rstest;

#[rstest]
fn list_entries_of_head_tree(
    committed_repository: CommittedRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = committed_repository;

    let expected_output = "100644 blob 43dd47ea691c90a5fa7827892c70241913351963\t1.txt\n040000 tree 6bd86417cbe0c4abfe2e4cdbef17eba948ff298c\ta\n";
    let actual_output = trove_stdout(repo.dir.path(), &["ls-tree", "HEAD"]);

    pretty_assertions::assert_eq!(actual_output, expected_output);
    pretty_assertions::assert_eq!(repo.tree_root, "302a2caed7030e78cfe91e221c270df9f3031422");

    Ok(())
}

#[rstest]
fn list_entries_of_subtree(
    committed_repository: CommittedRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = committed_repository;

    let actual_output = trove_stdout(repo.dir.path(), &["ls-tree", &repo.tree_a]);

    pretty_assertions::assert_eq!(
        actual_output,
        "100644 blob 64c5e5885a4b06010b3a0c20edb7900dd0311025\t2.txt\n"
    );

    Ok(())
}
