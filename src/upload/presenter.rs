use crate::upload::types::{SelectedFile, UploadItem, UploadStatus};
use crate::utils::ItemId;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use tracing::debug;

/// Rendering target for upload records. Every update is a silent no-op when
/// the id is unknown or the record already reached a terminal state.
pub trait ItemPresenter: Send + Sync {
    fn create_item(&self, file: &SelectedFile) -> ItemId;
    fn update_progress(&self, id: &ItemId, percent: u8);
    fn mark_success(&self, id: &ItemId);
    fn mark_error(&self, id: &ItemId, message: Option<&str>);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardSummary {
    pub waiting: usize,
    pub uploading: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BoardSummary {
    pub fn total(&self) -> usize {
        self.waiting + self.uploading + self.succeeded + self.failed
    }

    pub fn in_flight(&self) -> usize {
        self.waiting + self.uploading
    }
}

type ChangeHook = Box<dyn Fn() + Send + Sync>;

/// In-memory record list, newest first. Cheap to clone; clones share state,
/// including the change hook.
#[derive(Clone, Default)]
pub struct ItemBoard {
    items: Arc<Mutex<Vec<UploadItem>>>,
    on_change: Arc<OnceLock<ChangeHook>>,
}

impl ItemBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `hook` after every change that actually touched a record. Only
    /// the first hook installed on a board is kept.
    pub fn set_change_hook(&self, hook: impl Fn() + Send + Sync + 'static) -> bool {
        self.on_change.set(Box::new(hook)).is_ok()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<UploadItem>> {
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> Vec<UploadItem> {
        self.lock().clone()
    }

    pub fn get(&self, id: &ItemId) -> Option<UploadItem> {
        self.lock().iter().find(|item| &item.id == id).cloned()
    }

    pub fn summary(&self) -> BoardSummary {
        let mut summary = BoardSummary::default();
        for item in self.lock().iter() {
            match item.status {
                UploadStatus::Waiting => summary.waiting += 1,
                UploadStatus::Uploading(_) => summary.uploading += 1,
                UploadStatus::Success => summary.succeeded += 1,
                UploadStatus::Error(_) => summary.failed += 1,
            }
        }
        summary
    }

    fn notify(&self) {
        if let Some(hook) = self.on_change.get() {
            hook();
        }
    }

    fn transition(&self, id: &ItemId, next: UploadStatus) {
        let changed = {
            let mut items = self.lock();
            match items.iter_mut().find(|item| &item.id == id) {
                Some(item) => item.advance(next),
                None => {
                    debug!(%id, "ignoring update for unknown item");
                    false
                }
            }
        };
        if changed {
            self.notify();
        }
    }
}

impl ItemPresenter for ItemBoard {
    fn create_item(&self, file: &SelectedFile) -> ItemId {
        let mut items = self.lock();
        let mut id = ItemId::generate();
        while items.iter().any(|item| item.id == id) {
            id = ItemId::generate();
        }
        items.insert(0, UploadItem::new(id.clone(), file.name.clone(), file.size));
        drop(items);
        self.notify();
        id
    }

    fn update_progress(&self, id: &ItemId, percent: u8) {
        self.transition(id, UploadStatus::Uploading(percent.min(100)));
    }

    fn mark_success(&self, id: &ItemId) {
        self.transition(id, UploadStatus::Success);
    }

    fn mark_error(&self, id: &ItemId, message: Option<&str>) {
        let message = message.unwrap_or(crate::error::GENERIC_FAILURE);
        self.transition(id, UploadStatus::Error(message.to_string()));
    }
}
