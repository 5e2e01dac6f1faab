use crate::utils::validation::parse_u64_in_range;
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_WAIT_MS: u64 = 30_000;
pub const DEFAULT_TICK_MS: u64 = 500;

const MAX_WAIT_MS: u64 = 86_400_000;
const MAX_TICK_MS: u64 = 60_000;

const WAIT_ENV: &str = "MOCK_DAEMON_WAIT_MS";
const TICK_ENV: &str = "MOCK_DAEMON_TICK_MS";

/// Raw timing overrides as found in the environment.
///
/// Only the environment is consulted. Command-line arguments are never handed
/// to the parser, so whatever the harness passes on argv is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "mock-daemon")]
#[command(about = "Bounded-lifetime mock process for discovery harnesses")]
pub struct EnvOverrides {
    #[arg(long, env = WAIT_ENV)]
    pub wait_ms: Option<String>,

    #[arg(long, env = TICK_ENV)]
    pub tick_ms: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> crate::Result<Self> {
        Ok(Self::try_parse_from([env!("CARGO_PKG_NAME")])?)
    }
}

/// Timing knobs for the mock process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonConfig {
    pub wait_ms: u64,
    pub tick_ms: u64,
}

impl DaemonConfig {
    /// Reads the overrides from the environment. Never fails: an unreadable
    /// environment or a bad value leaves the affected setting at its default.
    pub fn from_env() -> Self {
        let overrides = EnvOverrides::from_env().unwrap_or_else(|e| {
            tracing::warn!("⚠️ Ignoring environment overrides: {}", e);
            EnvOverrides::default()
        });
        Self::from_overrides(&overrides)
    }

    /// Resolves each override on its own, so a bad tick does not throw away a
    /// good wait (or the other way round).
    pub fn from_overrides(overrides: &EnvOverrides) -> Self {
        let defaults = Self::default();
        Self {
            wait_ms: resolve(
                WAIT_ENV,
                overrides.wait_ms.as_deref(),
                defaults.wait_ms,
                0,
                MAX_WAIT_MS,
            ),
            tick_ms: resolve(
                TICK_ENV,
                overrides.tick_ms.as_deref(),
                defaults.tick_ms,
                1,
                MAX_TICK_MS,
            ),
        }
    }

    pub fn wait(&self) -> Duration {
        Duration::from_millis(self.wait_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            wait_ms: DEFAULT_WAIT_MS,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

fn resolve(field: &str, raw: Option<&str>, default: u64, min: u64, max: u64) -> u64 {
    match raw {
        None => default,
        Some(raw) => parse_u64_in_range(field, raw, min, max).unwrap_or_else(|e| {
            tracing::warn!("⚠️ Ignoring {} override: {}", field, e);
            default
        }),
    }
}
