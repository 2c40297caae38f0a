/// Outcome counts for one batch run. Recoverable per-record failures are
/// recorded here and reported with the summary, they never abort the batch.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub written: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

impl RunReport {
    pub fn record_error(&mut self, message: String) {
        log::error!("{message}");
        self.errors.push(message);
    }

    pub fn log_summary(&self, dry_run: bool) {
        log::info!("summary:");
        log::info!("  written: {} files", self.written);
        log::info!("  skipped: {} (not completed)", self.skipped);
        log::info!("  errors:  {}", self.errors.len());

        for error in &self.errors {
            log::info!("    {error}");
        }

        if dry_run {
            log::info!("dry run, no files were actually written");
        }
    }
}
