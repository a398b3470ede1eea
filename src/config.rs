//! Startup configuration read from the environment.

use std::fs::File;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::core::SessionConfig;

/// Binary configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Pinned piece sequence seed; `None` draws a fresh one per session.
    pub seed: Option<u32>,
    /// Start every level without the intro pause.
    pub skip_intro: bool,
    /// Where tracing output goes; no subscriber is installed when unset.
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create from `HANAMI_SEED`, `HANAMI_SKIP_INTRO` and `HANAMI_LOG_PATH`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("HANAMI_SEED").and_then(|s| s.trim().parse().ok());

        let skip_intro = lookup("HANAMI_SKIP_INTRO")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let log_path = lookup("HANAMI_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            seed,
            skip_intro,
            log_path,
        }
    }

    /// Config for a new session. Unpinned seeds differ on every call.
    pub fn session_config(&self) -> SessionConfig {
        let config = SessionConfig::new(self.seed.unwrap_or_else(fresh_seed));
        if self.skip_intro {
            config.without_intro()
        } else {
            config
        }
    }

    /// Install a file-backed tracing subscriber when `log_path` is set.
    ///
    /// Returns whether a subscriber was installed. Level filtering follows
    /// `RUST_LOG`, defaulting to `info`.
    pub fn init_logging(&self) -> Result<bool> {
        let Some(path) = &self.log_path else {
            return Ok(false);
        };
        let file = File::create(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;
        Ok(true)
    }
}

/// Clock nanos mixed with a per-process counter, so two sessions created
/// within one clock tick still get different seeds.
fn fresh_seed() -> u32 {
    static DRAWS: AtomicU32 = AtomicU32::new(1);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(0);
    let draw = DRAWS.fetch_add(1, Ordering::Relaxed);
    nanos ^ draw.wrapping_mul(0x9E37_79B9)
}
