use clap::Parser;
use eframe::CreationContext;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::{error, info, warn};
use wopan_uploader::app::WopanUploader;
use wopan_uploader::config::Settings;
use wopan_uploader::error::AppError;
use wopan_uploader::logging;
use wopan_uploader::upload::{FileCollector, ItemBoard, Uploader};

fn main() {
    logging::init();
    if let Err(e) = run(Settings::parse()) {
        error!(error = %e, "exiting");
        std::process::exit(1);
    }
}

fn run(settings: Settings) -> Result<(), AppError> {
    let runtime = Arc::new(Runtime::new().map_err(AppError::Runtime)?);
    let board = ItemBoard::new();
    let uploader = Uploader::new(&settings.upload_settings(), Arc::new(board.clone()))?;
    info!(endpoint = uploader.endpoint(), "upload endpoint configured");

    if settings.headless {
        return run_headless(&runtime, &uploader, &settings.paths);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 600.0])
            .with_min_inner_size([400.0, 500.0]),
        ..Default::default()
    };

    let origin = settings.origin.clone();
    eframe::run_native(
        "Wopan File Uploader",
        options,
        Box::new(move |cc: &CreationContext| {
            Box::new(WopanUploader::new(cc, board, uploader, runtime, origin))
        }),
    )
    .map_err(|e| AppError::Window(e.to_string()))
}

fn run_headless(runtime: &Runtime, uploader: &Uploader, paths: &[PathBuf]) -> Result<(), AppError> {
    let files = FileCollector::collect(paths);
    if files.is_empty() {
        warn!("no files found to upload");
        return Ok(());
    }

    let outcomes = runtime.block_on(uploader.upload_all(files));
    let total = outcomes.len();
    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) => info!(name = %outcome.name, "✅ uploaded"),
            Err(e) => {
                failed += 1;
                warn!(name = %outcome.name, reason = %e, "❌ failed");
            }
        }
    }

    if failed > 0 {
        return Err(AppError::UploadsFailed(failed, total));
    }
    info!(total, "all uploads finished");
    Ok(())
}
