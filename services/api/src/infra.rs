use career_fit::assessment::SubmissionBatch;
use career_fit::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads a `{"responses": [...]}` document from disk.
pub(crate) fn load_submission(path: &Path) -> Result<SubmissionBatch, AppError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
