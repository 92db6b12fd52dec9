use crate::upload::types::{FileSource, SelectedFile};
use ignore::Walk;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Turns picked or dropped paths into upload candidates. Folders are walked
/// recursively (honouring `.gitignore`), plain files are taken as they are.
pub struct FileCollector;

impl FileCollector {
    pub fn collect<I, P>(paths: I) -> Vec<SelectedFile>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut files = Vec::new();
        for path in paths {
            let path = path.as_ref();
            if path.is_dir() {
                for entry in Walk::new(path) {
                    match entry {
                        Ok(entry) if entry.path().is_file() => {
                            if let Some(file) = Self::from_path(entry.path()) {
                                files.push(file);
                            }
                        }
                        Ok(_) => {}
                        Err(e) => warn!(error = %e, "skipping unreadable entry"),
                    }
                }
            } else if let Some(file) = Self::from_path(path) {
                files.push(file);
            }
        }
        files
    }

    pub fn from_path(path: &Path) -> Option<SelectedFile> {
        let name = path.file_name()?.to_string_lossy().to_string();
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => Some(SelectedFile {
                name,
                size: meta.len(),
                source: FileSource::Path(PathBuf::from(path)),
            }),
            Ok(_) => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot stat file");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn collects_plain_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.mp4");
        fs::write(&a, b"hello").unwrap();
        fs::write(&b, vec![0u8; 2048]).unwrap();

        let files = FileCollector::collect([&b, &a]);
        let names: Vec<_> = files.iter().map(|f| (f.name.as_str(), f.size)).collect();
        assert_eq!(names, vec![("b.mp4", 2048), ("a.txt", 5)]);
    }

    #[test]
    fn walks_folders_and_skips_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("top.bin"), b"1").unwrap();
        fs::write(dir.path().join("nested").join("deep.bin"), b"22").unwrap();

        let files = FileCollector::collect([dir.path().to_path_buf(), dir.path().join("gone.txt")]);
        let mut names: Vec<_> = files.into_iter().map(|f| f.name).collect();
        names.sort();
        assert_eq!(names, vec!["deep.bin", "top.bin"]);
    }
}
