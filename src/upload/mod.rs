mod file_collector;
mod orchestrator;
mod presenter;
mod progress;
mod response;
mod types;

pub use file_collector::FileCollector;
pub use orchestrator::{
    UploadOutcome, UploadSettings, Uploader, DEFAULT_TIMEOUT, DIRECTORY_ID, UPLOAD_PATH,
};
pub use presenter::{BoardSummary, ItemBoard, ItemPresenter};
pub use progress::{percent, ProgressStream};
pub use response::ServerResponse;
pub use types::{FileSource, SelectedFile, StatusStyle, UploadItem, UploadStatus};
