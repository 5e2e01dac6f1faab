use crate::utils::error::Result;
use std::thread;
use std::time::Duration;

pub const WORKER_THREAD_NAME: &str = "daemon-worker";

/// Background thread that does nothing but sleep, one tick at a time.
///
/// The handle is never joined. Dropping it detaches the thread, and process
/// exit tears it down mid-sleep.
pub struct DaemonWorker {
    handle: thread::JoinHandle<()>,
    tick: Duration,
}

impl DaemonWorker {
    pub fn spawn(tick: Duration) -> Result<Self> {
        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || loop {
                thread::sleep(tick);
            })?;

        tracing::debug!("Daemon worker started (tick {:?})", tick);
        Ok(Self { handle, tick })
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn name(&self) -> Option<&str> {
        self.handle.thread().name()
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_keeps_running() {
        let worker = DaemonWorker::spawn(Duration::from_millis(5)).unwrap();
        assert_eq!(worker.name(), Some(WORKER_THREAD_NAME));
        assert_eq!(worker.tick(), Duration::from_millis(5));

        // Many ticks later it is still looping.
        thread::sleep(Duration::from_millis(100));
        assert!(worker.is_running());
    }

    #[cfg(target_os = "linux")]
    fn live_worker_threads() -> usize {
        std::fs::read_dir("/proc/self/task")
            .unwrap()
            .filter_map(|entry| std::fs::read_to_string(entry.ok()?.path().join("comm")).ok())
            .filter(|comm| comm.trim() == WORKER_THREAD_NAME)
            .count()
    }

    // Workers never exit, so the count in this test process only grows.
    #[cfg(target_os = "linux")]
    #[test]
    fn test_thread_outlives_dropped_handle() {
        let worker = DaemonWorker::spawn(Duration::from_millis(5)).unwrap();
        let with_worker = live_worker_threads();
        assert!(with_worker >= 1);

        drop(worker);
        thread::sleep(Duration::from_millis(50));

        assert!(live_worker_threads() >= with_worker);
    }
}
