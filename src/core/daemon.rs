use crate::config::DaemonConfig;
use crate::core::worker::DaemonWorker;
use crate::domain::model::{ProcessState, RunReport, COMPLETION_MARKER};
use crate::domain::ports::InterruptSource;
use crate::utils::error::Result;
use std::io::Write;
use tokio::time::Instant;

/// The mock process: a detached background worker plus a bounded foreground wait.
pub struct MockDaemon {
    config: DaemonConfig,
    state: ProcessState,
    worker: Option<DaemonWorker>,
}

impl MockDaemon {
    pub fn new(config: DaemonConfig) -> Self {
        Self {
            config,
            state: ProcessState::Running,
            worker: None,
        }
    }

    /// Spawns the background worker. A second call keeps the existing one.
    pub fn start(&mut self) -> Result<()> {
        if self.worker.is_none() {
            self.worker = Some(DaemonWorker::spawn(self.config.tick())?);
        }
        Ok(())
    }

    /// Waits out the configured duration, then writes the completion marker.
    ///
    /// Interruptions delivered by `interrupts` are swallowed and the wait
    /// resumes toward the original deadline. A closed source is treated the
    /// same as a quiet one.
    pub async fn run<W, I>(&mut self, out: &mut W, interrupts: &mut I) -> Result<RunReport>
    where
        W: Write,
        I: InterruptSource,
    {
        let started = Instant::now();
        let deadline = started + self.config.wait();
        let mut interrupts_ignored = 0;
        let mut listening = true;

        loop {
            tokio::select! {
                _ = tokio::time::sleep_until(deadline) => break,
                interrupt = interrupts.interrupted(), if listening => match interrupt {
                    Some(()) => interrupts_ignored += 1,
                    None => listening = false,
                },
            }
        }

        writeln!(out, "{}", COMPLETION_MARKER)?;
        out.flush()?;
        self.state = ProcessState::Terminated;

        let waited = started.elapsed();
        tracing::debug!("✅ Wait elapsed after {:?}", waited);

        Ok(RunReport {
            waited,
            interrupts_ignored,
        })
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    pub fn worker(&self) -> Option<&DaemonWorker> {
        self.worker.as_ref()
    }
}
