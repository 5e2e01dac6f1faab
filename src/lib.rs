pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::channel::{interrupt_channel, ChannelInterrupts, Interrupter};
pub use config::DaemonConfig;
pub use crate::core::{daemon::MockDaemon, worker::DaemonWorker};
pub use utils::error::{DaemonError, Result};
