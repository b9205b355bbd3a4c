use std::path::Path;

use tokio::fs::DirBuilder;

use crate::services::Toolkit;

impl Toolkit {
    /// Creates `dir` and any missing parents. Succeeds if it already exists.
    pub async fn create_dir_if_not_exists(&self, dir: impl AsRef<Path>) -> std::io::Result<()> {
        create_dir_if_not_exists(dir.as_ref()).await
    }
}

pub(crate) async fn create_dir_if_not_exists(dir: &Path) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o755);
    builder.create(dir).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("a").join("b");
        let toolkit = Toolkit::default();

        toolkit.create_dir_if_not_exists(&dir).await.unwrap();
        toolkit.create_dir_if_not_exists(&dir).await.unwrap();

        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn fails_when_path_is_a_file() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("taken");
        std::fs::write(&file, b"x").unwrap();

        assert!(Toolkit::default().create_dir_if_not_exists(&file).await.is_err());
    }
}
