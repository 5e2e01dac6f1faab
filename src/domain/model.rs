use std::time::Duration;

/// Line written to stdout once the wait has elapsed.
pub const COMPLETION_MARKER: &str = "Done.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Running,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub waited: Duration,
    pub interrupts_ignored: usize,
}
