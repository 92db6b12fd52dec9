use crate::upload::{ItemBoard, UploadItem};

#[derive(Default)]
pub struct UploadState {
    pub board: ItemBoard,
    pub is_hovering: bool,
    pub error_message: Option<String>,
}

impl UploadState {
    pub fn new(board: ItemBoard) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }

    pub fn items(&self) -> Vec<UploadItem> {
        self.board.snapshot()
    }

    /// Mean fill across every record; 0 when nothing was picked yet.
    pub fn get_progress_percentage(&self) -> f32 {
        let items = self.board.snapshot();
        if items.is_empty() {
            return 0.0;
        }
        let sum: f32 = items.iter().map(UploadItem::progress_fraction).sum();
        sum / items.len() as f32
    }

    pub fn get_status_text(&self) -> String {
        let summary = self.board.summary();
        if summary.total() == 0 {
            return String::new();
        }
        if summary.in_flight() > 0 {
            format!(
                "Uploading: {} of {} files | ✅ Success: {} | ❌ Failed: {}",
                summary.in_flight(),
                summary.total(),
                summary.succeeded,
                summary.failed
            )
        } else {
            format!(
                "Final Status: {} files | ✅ Success: {} | ❌ Failed: {}",
                summary.total(),
                summary.succeeded,
                summary.failed
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::{ItemPresenter, SelectedFile};

    #[test]
    fn empty_state_has_no_status() {
        let state = UploadState::default();
        assert_eq!(state.get_status_text(), "");
        assert_eq!(state.get_progress_percentage(), 0.0);
    }

    #[test]
    fn status_reflects_board() {
        let state = UploadState::new(ItemBoard::new());
        let a = state.board.create_item(&SelectedFile::from_bytes("a.txt", vec![1u8]));
        let b = state.board.create_item(&SelectedFile::from_bytes("b.txt", vec![1u8]));
        state.board.update_progress(&a, 50);
        assert_eq!(
            state.get_status_text(),
            "Uploading: 2 of 2 files | ✅ Success: 0 | ❌ Failed: 0"
        );
        assert_eq!(state.get_progress_percentage(), 0.25);

        state.board.mark_success(&a);
        state.board.mark_error(&b, Some("network error"));
        assert_eq!(
            state.get_status_text(),
            "Final Status: 2 files | ✅ Success: 1 | ❌ Failed: 1"
        );
    }
}
