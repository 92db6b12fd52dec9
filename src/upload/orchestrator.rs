use crate::error::UploadError;
use crate::upload::presenter::ItemPresenter;
use crate::upload::progress::ProgressStream;
use crate::upload::response::ServerResponse;
use crate::upload::types::{FileSource, SelectedFile};
use crate::utils::ItemId;
use bytes::Bytes;
use derivative::Derivative;
use futures_util::future;
use futures_util::stream::{self, Stream};
use reqwest::multipart::{Form, Part};
use reqwest::Body;
use std::io;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio_util::io::ReaderStream;
use tracing::{debug, error, info, warn};

pub const UPLOAD_PATH: &str = "/api/video/wopan/file-upload";
pub const DIRECTORY_ID: &str = "0";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(600_000);
const CHUNK_SIZE: usize = 64 * 1024;

type ChunkStream = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send + Sync>>;

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub origin: String,
    pub timeout: Duration,
    /// `None` issues every request at once.
    pub max_concurrent: Option<usize>,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            origin: "http://127.0.0.1:8000".to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_concurrent: None,
        }
    }
}

#[derive(Debug)]
pub struct UploadOutcome {
    pub id: ItemId,
    pub name: String,
    pub result: Result<(), UploadError>,
}

#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct Uploader {
    #[derivative(Debug = "ignore")]
    client: reqwest::Client,
    endpoint: String,
    #[derivative(Debug = "ignore")]
    presenter: Arc<dyn ItemPresenter>,
    #[derivative(Debug = "ignore")]
    limiter: Option<Arc<Semaphore>>,
}

impl Uploader {
    pub fn new(
        settings: &UploadSettings,
        presenter: Arc<dyn ItemPresenter>,
    ) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| UploadError::Client(e.to_string()))?;
        let endpoint = format!("{}{}", settings.origin.trim_end_matches('/'), UPLOAD_PATH);
        let limiter = settings
            .max_concurrent
            .map(|n| Arc::new(Semaphore::new(n.max(1))));

        Ok(Self {
            client,
            endpoint,
            presenter,
            limiter,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Creates one record per file, in order, then spawns an independent
    /// upload task for each. Must be called from within a tokio runtime.
    pub fn handle_files(&self, files: Vec<SelectedFile>) -> Vec<JoinHandle<UploadOutcome>> {
        info!(count = files.len(), endpoint = %self.endpoint, "starting upload batch");
        files
            .into_iter()
            .map(|file| {
                let id = self.presenter.create_item(&file);
                let uploader = self.clone();
                tokio::spawn(async move { uploader.run(id, file).await })
            })
            .collect()
    }

    /// Runs a whole batch and waits for every upload to settle.
    pub async fn upload_all(&self, files: Vec<SelectedFile>) -> Vec<UploadOutcome> {
        let handles = self.handle_files(files);
        let mut outcomes = Vec::with_capacity(handles.len());
        for joined in future::join_all(handles).await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => error!(error = %e, "upload task aborted"),
            }
        }
        outcomes
    }

    /// Uploads a single file, creating its record first.
    pub async fn upload_file(&self, file: SelectedFile) -> UploadOutcome {
        let id = self.presenter.create_item(&file);
        self.run(id, file).await
    }

    async fn run(&self, id: ItemId, file: SelectedFile) -> UploadOutcome {
        let _permit = match &self.limiter {
            Some(limiter) => limiter.clone().acquire_owned().await.ok(),
            None => None,
        };

        let result = self.send(&id, &file).await;
        match &result {
            Ok(()) => {
                info!(%id, name = %file.name, "upload succeeded");
                self.presenter.mark_success(&id);
            }
            Err(e) => {
                warn!(%id, name = %file.name, error = %e, "upload failed");
                self.presenter.mark_error(&id, Some(e.to_string().as_str()));
            }
        }

        UploadOutcome {
            id,
            name: file.name,
            result,
        }
    }

    async fn send(&self, id: &ItemId, file: &SelectedFile) -> Result<(), UploadError> {
        let chunks = open_source(&file.source).await?;
        let presenter = self.presenter.clone();
        let progress_id = id.clone();
        let body = ProgressStream::new(chunks, file.size, move |percent| {
            debug!(id = %progress_id, percent, "upload progress");
            presenter.update_progress(&progress_id, percent);
        });

        let part = Part::stream_with_length(Body::wrap_stream(body), file.size)
            .file_name(file.name.clone())
            .mime_str("application/octet-stream")?;
        let form = Form::new()
            .part("file", part)
            .text("directory_id", DIRECTORY_ID);

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(%id, status, bytes = body.len(), "upload response received");

        ServerResponse::parse(&body).into_outcome(status)
    }
}

async fn open_source(source: &FileSource) -> Result<ChunkStream, UploadError> {
    match source {
        FileSource::Path(path) => {
            let file = tokio::fs::File::open(path).await?;
            Ok(Box::pin(ReaderStream::with_capacity(file, CHUNK_SIZE)))
        }
        FileSource::Bytes(bytes) => {
            let chunks: Vec<io::Result<Bytes>> = bytes
                .chunks(CHUNK_SIZE)
                .map(|chunk| Ok(Bytes::copy_from_slice(chunk)))
                .collect();
            Ok(Box::pin(stream::iter(chunks)))
        }
    }
}
