pub mod input;
mod state;
mod ui;

use crate::upload::{ItemBoard, SelectedFile, Uploader};
use eframe::App;
pub use state::UploadState;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::info;

pub struct WopanUploader {
    state: UploadState,
    uploader: Uploader,
    runtime: Arc<Runtime>,
    origin: String,
}

impl WopanUploader {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        board: ItemBoard,
        uploader: Uploader,
        runtime: Arc<Runtime>,
        origin: String,
    ) -> Self {
        info!("Initializing Wopan File Uploader");
        let ctx = cc.egui_ctx.clone();
        board.set_change_hook(move || ctx.request_repaint());
        Self {
            state: UploadState::new(board),
            uploader,
            runtime,
            origin,
        }
    }

    /// Hands a picked or dropped batch to the orchestrator. Tasks run
    /// detached on the shared runtime; their records live on the board.
    pub fn start_upload(&mut self, files: Vec<SelectedFile>) {
        if files.is_empty() {
            self.state.error_message = Some("No files found to upload".to_string());
            return;
        }
        self.state.error_message = None;
        let _guard = self.runtime.enter();
        self.uploader.handle_files(files);
    }

    pub fn collect_drops(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.clone(),
            )
        });
        self.state.is_hovering = hovering;
        if !dropped.is_empty() {
            let files = input::from_dropped(&dropped);
            info!(count = files.len(), "files dropped");
            self.start_upload(files);
        }
    }
}

impl App for WopanUploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.collect_drops(ctx);
        self.render(ctx);
    }
}
