//! Rehbar - Community resource directory
//!
//! Main entry point. Renders the directory page to an HTML file.
//!
//! # Execution Flow
//!
//! 1. Load settings and the catalog from `Rehbar Data/`
//!    - `Rehbar Settings.yaml` → logging and output options (`REHBAR_*` env overrides)
//!    - `Rehbar Catalog.yaml` → categories and resources (built-in catalog if absent)
//! 2. Initialize logging → logs/rehbar.<date>
//! 3. Create the page, the controller and the event loop
//! 4. Raise the document-ready notification and run the loop on a
//!    current-thread tokio runtime until it drains
//! 5. Write the rendered page to the configured output path

use anyhow::{Context, Result};
use camino::Utf8Path;
use rehbar::ui::{EventLoop, HtmlPage, UiEvent};
use rehbar::{APP_NAME, ConfigManager, DirectoryController, RenderMetrics, VERSION};
use std::fs;
use std::sync::Arc;

fn main() -> Result<()> {
    let config_manager = ConfigManager::new("Rehbar Data")?;
    let settings = config_manager.load_settings()?;

    let _log_guard = rehbar::logging::setup_from_settings(&settings)?;
    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let catalog = Arc::new(config_manager.load_catalog()?);

    // All handlers run on this one thread, one notification at a time
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    let metrics = Arc::new(RenderMetrics::new());
    let page = HtmlPage::new(settings.page_title.clone());
    let mut controller = DirectoryController::with_metrics(catalog, page, metrics.clone());

    let (mut event_loop, sender) = EventLoop::new(metrics.clone());
    sender.send(UiEvent::DocumentReady);
    drop(sender);

    let handled = runtime
        .block_on(event_loop.run(&mut controller))
        .inspect_err(|e| tracing::error!("Rendering failed: {:#}", e))?;
    tracing::info!("Processed {} UI events", handled);

    write_page(Utf8Path::new(&settings.output_path), &controller.view().to_document())?;

    metrics.log_summary();
    tracing::info!("Shutdown complete");
    Ok(())
}

fn write_page(path: &Utf8Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent))?;
    }

    fs::write(path, document).with_context(|| format!("Failed to write page: {}", path))?;
    tracing::info!("Wrote page to {}", path);
    Ok(())
}
