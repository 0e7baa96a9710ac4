use crate::common::command::{init_repository_dir, repository_dir, run_trove_command};
use crate::common::file::write_generated_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn write_blob_object_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = write_generated_file(init_repository_dir.path());
    let file_name = file.path.to_string_lossy().into_owned();

    let output = run_trove_command(init_repository_dir.path(), &["hash-object", "-w", &file_name])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[0-9a-f]{40}\n$")?);
    let oid = String::from_utf8(output.get_output().stdout.clone())?;
    let oid = oid.trim();

    let object_path = init_repository_dir
        .path()
        .join(".git/objects")
        .join(&oid[..2])
        .join(&oid[2..]);
    assert!(object_path.is_file());

    run_trove_command(init_repository_dir.path(), &["cat-file", "blob", oid])
        .assert()
        .success()
        .stdout(predicate::eq(file.content));

    Ok(())
}

#[rstest]
fn write_requires_a_repository(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let file = write_generated_file(repository_dir.path());
    let file_name = file.path.to_string_lossy().into_owned();

    // only meaningful when no ancestor of the temp dir is a repository
    if repository_dir
        .path()
        .ancestors()
        .any(|dir| dir.join(".git").is_dir())
    {
        return Ok(());
    }

    run_trove_command(repository_dir.path(), &["hash-object", "-w", &file_name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no git directory found"));

    Ok(())
}
