/// One-shot background load: read → normalise → report on a worker thread.
///
/// The caller keeps a [`LoadHandle`], drains [`LoadProgress`] messages from
/// it, and may cancel at any time. Cancellation is checked between stages;
/// a cancelled load never delivers a report.
use super::progress::LoadProgress;
use super::{read_rows_from_path, Catalog};
use crate::config::AnalysisConfig;
use crate::report::CatalogReport;
use crossbeam_channel::{Receiver, Sender};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{info, warn};

/// A load sends at most one `Parsed` and one terminal message.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4;

/// Handle to a running or finished load.
pub struct LoadHandle {
    /// Receiver for progress updates from the loader thread.
    pub progress_rx: Receiver<LoadProgress>,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
    /// Join handle for the loader thread.
    thread: Option<thread::JoinHandle<()>>,
}

impl LoadHandle {
    /// Request the load to stop at the next stage boundary.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    /// Block until the terminal message arrives.
    ///
    /// A loader thread that disappears without reporting is treated as a
    /// failure.
    pub fn wait(mut self) -> LoadProgress {
        let outcome = loop {
            match self.progress_rx.recv() {
                Ok(msg) if msg.is_terminal() => break msg,
                Ok(_) => continue,
                Err(_) => {
                    break LoadProgress::Failed {
                        message: "loader thread exited without a result".to_owned(),
                    }
                }
            }
        };
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
        outcome
    }
}

/// Start loading `path` on a background thread.
///
/// Fails only if the OS refuses to spawn the thread.
pub fn start_load(path: PathBuf, config: AnalysisConfig) -> std::io::Result<LoadHandle> {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<LoadProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let thread = thread::Builder::new()
        .name("titlelens-loader".into())
        .spawn(move || run_load(path, config, progress_tx, cancel_clone))?;

    Ok(LoadHandle {
        progress_rx,
        cancel_flag,
        thread: Some(thread),
    })
}

fn run_load(
    path: PathBuf,
    config: AnalysisConfig,
    progress_tx: Sender<LoadProgress>,
    cancel_flag: Arc<AtomicBool>,
) {
    let start = Instant::now();
    let cancelled = || cancel_flag.load(Ordering::Relaxed);
    info!("Loading catalog from {}", path.display());

    let rows = match read_rows_from_path(&path) {
        Ok(rows) => rows,
        Err(e) => {
            warn!("Catalog load failed: {e}");
            let _ = progress_tx.send(LoadProgress::Failed {
                message: e.to_string(),
            });
            return;
        }
    };
    if cancelled() {
        let _ = progress_tx.send(LoadProgress::Cancelled);
        return;
    }
    let _ = progress_tx.send(LoadProgress::Parsed { rows: rows.len() });

    let catalog = Catalog::from_rows(&rows);
    drop(rows);
    if cancelled() {
        let _ = progress_tx.send(LoadProgress::Cancelled);
        return;
    }

    let report = CatalogReport::build(catalog.original_count, &catalog.records, &config);
    if cancelled() {
        let _ = progress_tx.send(LoadProgress::Cancelled);
        return;
    }

    let duration = start.elapsed();
    info!(
        "Catalog ready: {} of {} rows kept in {:?}",
        catalog.records.len(),
        catalog.original_count,
        duration
    );
    let _ = progress_tx.send(LoadProgress::Complete {
        catalog: Box::new(catalog),
        report: Box::new(report),
        duration,
    });
}
