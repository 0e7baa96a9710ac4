use crate::common::command::{repository_dir, run_trove_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn hash_blob_without_repository(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        repository_dir.path().join("hello.txt"),
        b"hello\n".to_vec(),
    ));

    run_trove_command(repository_dir.path(), &["hash-object", "hello.txt"])
        .assert()
        .success()
        .stdout(predicate::eq("ce013625030ba8dba906f756967f9e9ca394464a\n"));

    assert!(!repository_dir.path().join(".git").exists());

    Ok(())
}

#[rstest]
fn hash_rejects_unknown_type(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        repository_dir.path().join("hello.txt"),
        b"hello\n".to_vec(),
    ));

    run_trove_command(
        repository_dir.path(),
        &["hash-object", "-t", "blorb", "hello.txt"],
    )
    .assert()
    .failure();

    Ok(())
}
