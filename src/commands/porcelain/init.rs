use crate::areas::repository::Repository;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Create a repository at `path` and report where its metadata lives
    pub fn init(path: &Path, writer: &mut dyn Write) -> anyhow::Result<Repository> {
        let repository = Repository::create(path)
            .with_context(|| format!("Failed to initialize repository at {}", path.display()))?;

        writeln!(
            writer,
            "Initialized empty Git repository in {}",
            repository.git_dir().display()
        )?;

        Ok(repository)
    }
}
