// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn step_done(&mut self, step: &str) {
        self.done += 1;
        self.set_status(format!("Loaded {} ({}/{})", step, self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Refresh complete"));
        } else {
            self.set_status(format!("Refresh complete ({}/{})", self.done, self.total));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_steps_into_status() {
        let status = Arc::new(Mutex::new(s!()));
        let mut p = GuiProgress::new(status.clone());
        p.begin(3);
        p.step_done("standings");
        assert_eq!(*status.lock().unwrap(), "Loaded standings (1/3)");
        p.finish();
        assert_eq!(*status.lock().unwrap(), "Refresh complete (1/3)");
    }
}
