use crate::upload::{FileCollector, SelectedFile};
use egui::DroppedFile;
use rfd::FileDialog;
use std::path::PathBuf;

/// Maps egui drop events to upload candidates, keeping drop order.
/// Native drops carry a path; web-style drops only carry bytes.
pub fn from_dropped(dropped: &[DroppedFile]) -> Vec<SelectedFile> {
    let mut files = Vec::new();
    for file in dropped {
        if let Some(path) = &file.path {
            files.extend(FileCollector::collect([path]));
        } else if let Some(bytes) = &file.bytes {
            files.push(SelectedFile::from_bytes(file.name.clone(), bytes.clone()));
        }
    }
    files
}

/// `None` when the dialog was cancelled.
pub fn browse_files() -> Option<Vec<SelectedFile>> {
    from_picked(FileDialog::new().pick_files())
}

/// `None` when the dialog was cancelled; an empty folder yields `Some(vec![])`.
pub fn browse_folder() -> Option<Vec<SelectedFile>> {
    from_picked(FileDialog::new().pick_folder().map(|folder| vec![folder]))
}

fn from_picked(picked: Option<Vec<PathBuf>>) -> Option<Vec<SelectedFile>> {
    picked.map(FileCollector::collect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn byte_drops_become_in_memory_files() {
        let dropped = vec![DroppedFile {
            name: "clip.mp4".into(),
            bytes: Some(Arc::from(vec![1u8, 2, 3])),
            ..Default::default()
        }];
        let files = from_dropped(&dropped);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "clip.mp4");
        assert_eq!(files[0].size, 3);
    }

    #[test]
    fn cancelled_dialog_is_not_an_empty_selection() {
        assert!(from_picked(None).is_none());

        let dir = tempfile::tempdir().unwrap();
        let picked = from_picked(Some(vec![dir.path().to_path_buf()]));
        assert_eq!(picked.map(|files| files.len()), Some(0));
    }

    #[test]
    fn path_drops_are_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").unwrap();

        let dropped = vec![
            DroppedFile {
                path: Some(path),
                ..Default::default()
            },
            DroppedFile::default(),
        ];
        let files = from_dropped(&dropped);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "notes.txt");
        assert_eq!(files[0].size, 5);
    }
}
