use crate::error::GENERIC_FAILURE;
use crate::utils::{FileSizeUtils, ItemId};
use std::path::PathBuf;
use std::sync::Arc;

pub const SUCCESS_LABEL: &str = "upload complete";
pub const WAITING_LABEL: &str = "waiting";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    Waiting,
    Uploading(u8),
    Success,
    Error(String),
}

impl UploadStatus {
    fn rank(&self) -> u8 {
        match self {
            UploadStatus::Waiting => 0,
            UploadStatus::Uploading(_) => 1,
            UploadStatus::Success | UploadStatus::Error(_) => 2,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.rank() == 2
    }

    /// Whether moving from `self` to `next` keeps the lifecycle monotonic.
    pub fn can_advance_to(&self, next: &UploadStatus) -> bool {
        match (self, next) {
            (UploadStatus::Uploading(current), UploadStatus::Uploading(p)) => p >= current,
            _ if self.is_terminal() => false,
            _ => next.rank() >= self.rank(),
        }
    }
}

/// Visual style of a record, independent of any particular UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    Waiting,
    Uploading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadItem {
    pub id: ItemId,
    pub name: String,
    pub size: u64,
    pub status: UploadStatus,
    /// Last fill reached; an error leaves it where it was.
    pub progress: u8,
}

impl UploadItem {
    pub fn new(id: ItemId, name: String, size: u64) -> Self {
        Self {
            id,
            name,
            size,
            status: UploadStatus::Waiting,
            progress: 0,
        }
    }

    pub fn ext_label(&self) -> String {
        FileSizeUtils::file_ext(&self.name)
    }

    pub fn size_label(&self) -> String {
        FileSizeUtils::format_size(self.size)
    }

    pub fn status_text(&self) -> String {
        match &self.status {
            UploadStatus::Waiting => WAITING_LABEL.to_string(),
            UploadStatus::Uploading(percent) => format!("{}%", percent),
            UploadStatus::Success => SUCCESS_LABEL.to_string(),
            UploadStatus::Error(message) if message.is_empty() => GENERIC_FAILURE.to_string(),
            UploadStatus::Error(message) => message.clone(),
        }
    }

    pub fn style(&self) -> StatusStyle {
        match self.status {
            UploadStatus::Waiting => StatusStyle::Waiting,
            UploadStatus::Uploading(_) => StatusStyle::Uploading,
            UploadStatus::Success => StatusStyle::Success,
            UploadStatus::Error(_) => StatusStyle::Error,
        }
    }

    pub fn progress_fraction(&self) -> f32 {
        f32::from(self.progress) / 100.0
    }

    /// Applies `next` if the transition is legal. Returns whether anything changed.
    pub fn advance(&mut self, next: UploadStatus) -> bool {
        if !self.status.can_advance_to(&next) || self.status == next {
            return false;
        }
        match &next {
            UploadStatus::Uploading(percent) => self.progress = *percent,
            UploadStatus::Success => self.progress = 100,
            UploadStatus::Waiting | UploadStatus::Error(_) => {}
        }
        self.status = next;
        true
    }
}

#[derive(Debug, Clone)]
pub enum FileSource {
    Path(PathBuf),
    Bytes(Arc<[u8]>),
}

/// A file handed over by the input side, not yet uploaded.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub source: FileSource,
}

impl SelectedFile {
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let bytes = bytes.into();
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            source: FileSource::Bytes(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> UploadItem {
        UploadItem::new(ItemId::from("1_abcdef"), "clip.mp4".into(), 1536)
    }

    #[test]
    fn new_item_is_waiting() {
        let item = item();
        assert_eq!(item.status_text(), "waiting");
        assert_eq!(item.style(), StatusStyle::Waiting);
        assert_eq!(item.ext_label(), "MP4");
        assert_eq!(item.size_label(), "1.5 KB");
        assert_eq!(item.progress_fraction(), 0.0);
    }

    #[test]
    fn percent_never_goes_back() {
        let mut item = item();
        assert!(item.advance(UploadStatus::Uploading(50)));
        assert!(!item.advance(UploadStatus::Uploading(40)));
        assert!(!item.advance(UploadStatus::Waiting));
        assert_eq!(item.status_text(), "50%");
        assert!(item.advance(UploadStatus::Uploading(100)));
        assert_eq!(item.progress, 100);
    }

    #[test]
    fn terminal_states_are_final() {
        let mut item = item();
        item.advance(UploadStatus::Uploading(30));
        assert!(item.advance(UploadStatus::Error("network error".into())));
        assert_eq!(item.progress, 30);
        assert!(!item.advance(UploadStatus::Success));
        assert!(!item.advance(UploadStatus::Uploading(90)));
        assert_eq!(item.status_text(), "network error");
        assert_eq!(item.style(), StatusStyle::Error);
    }

    #[test]
    fn waiting_can_finish_directly() {
        let mut item = item();
        assert!(item.advance(UploadStatus::Success));
        assert_eq!(item.progress, 100);
        assert_eq!(item.status_text(), "upload complete");
    }

    #[test]
    fn empty_error_message_uses_generic_label() {
        let mut item = item();
        item.advance(UploadStatus::Error(String::new()));
        assert_eq!(item.status_text(), "upload failed");
    }
}
