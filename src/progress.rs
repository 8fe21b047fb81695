// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape/export).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of clusters.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one cluster was read; `found` is its number of KS/ACP rows.
    fn item_done(&mut self, _cluster_id: &str, _found: usize) {}

    /// Called when a cluster was skipped.
    fn item_failed(&mut self, _cluster_id: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

