use crate::upload::UploadSettings;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "wopan_uploader", version, about = "Upload files to a Wopan video service")]
pub struct Settings {
    /// Scheme, host and port of the upload service.
    #[arg(long, env = "WOPAN_UPLOAD_ORIGIN", default_value = "http://127.0.0.1:8000")]
    pub origin: String,

    /// Per-request timeout.
    #[arg(long, env = "WOPAN_UPLOAD_TIMEOUT_SECS", default_value_t = 600)]
    pub timeout_secs: u64,

    /// Cap on simultaneous requests; unbounded when omitted.
    #[arg(long, env = "WOPAN_UPLOAD_MAX_CONCURRENT")]
    pub max_concurrent: Option<usize>,

    /// Upload PATHS without opening a window.
    #[arg(long, requires = "paths")]
    pub headless: bool,

    /// Files or folders to upload.
    pub paths: Vec<PathBuf>,
}

impl Settings {
    pub fn upload_settings(&self) -> UploadSettings {
        UploadSettings {
            origin: self.origin.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            max_concurrent: self.max_concurrent,
        }
    }
}
