// src/progress.rs
/// Progress reporting for a refresh (fetch → parse → project).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of steps.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one step completes, e.g. "standings".
    fn step_done(&mut self, _step: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
