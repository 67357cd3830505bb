use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// The rendered map, persisted as a single file.
///
/// Every write replaces the previous content. Readers never observe a
/// partially written file because the content is written to a temporary
/// sibling first and then renamed.
#[derive(Debug, Clone)]
pub struct MapArtifact {
    path: PathBuf,
}

impl MapArtifact {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, content: &str) -> io::Result<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.path)
    }

    pub fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut file_name = self.path.file_name().unwrap_or_default().to_os_string();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = MapArtifact::new(dir.path().join("coffee.html"));
        artifact.write("first run").unwrap();
        artifact.write("second run").unwrap();
        assert_eq!(b"second run".to_vec(), artifact.read().unwrap());
        assert!(!dir.path().join("coffee.html.tmp").exists());
    }

    #[test]
    fn create_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = MapArtifact::new(dir.path().join("out").join("map.html"));
        artifact.write("<html></html>").unwrap();
        assert!(artifact.path().exists());
    }

    #[test]
    fn read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = MapArtifact::new(dir.path().join("coffee.html"));
        assert_eq!(
            io::ErrorKind::NotFound,
            artifact.read().unwrap_err().kind()
        );
    }
}
