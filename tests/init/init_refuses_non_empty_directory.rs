use crate::common::command::{repository_dir, run_trove_command};
use crate::common::file::write_generated_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_refuses_non_empty_directory(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_generated_file(repository_dir.path());

    run_trove_command(repository_dir.path(), &["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not empty"));

    assert!(!repository_dir.path().join(".git").exists());

    Ok(())
}
