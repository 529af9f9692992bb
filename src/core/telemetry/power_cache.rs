use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::error::Result;

/// Default lifetime of a cached power profile report.
pub const DEFAULT_POWER_CACHE_TTL: Duration = Duration::from_secs(30);

/// Source of "now" for cache expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Debug, Clone)]
struct CachedText {
    text: String,
    fetched_at: Instant,
}

/// Memoizes the output of one slow probe behind a TTL.
///
/// The check-refresh-store sequence runs under a single lock, so concurrent
/// callers see at most one refresh per expiry.
pub struct PowerDataCache {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    state: Mutex<Option<CachedText>>,
}

impl PowerDataCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            state: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached text, calling `refresh` first if it is missing or stale.
    ///
    /// A failed or empty refresh keeps whatever was cached before; with nothing
    /// cached the result is an empty string.
    pub fn get_or_refresh<F>(&self, refresh: F) -> String
    where
        F: FnOnce() -> Result<String>,
    {
        let mut state = self.state.lock();
        let now = self.clock.now();

        if let Some(cached) = state.as_ref() {
            if now.saturating_duration_since(cached.fetched_at) < self.ttl {
                return cached.text.clone();
            }
        }

        match refresh() {
            Ok(text) if !text.is_empty() => {
                *state = Some(CachedText {
                    text,
                    fetched_at: now,
                });
            }
            Ok(_) => log::debug!("Power profile probe returned no output"),
            Err(e) => log::debug!("Power profile refresh failed: {}", e),
        }

        state
            .as_ref()
            .map(|cached| cached.text.clone())
            .unwrap_or_default()
    }

    /// When the cached text was captured, if ever.
    pub fn last_fetch(&self) -> Option<Instant> {
        self.state.lock().as_ref().map(|cached| cached.fetched_at)
    }
}

impl Default for PowerDataCache {
    fn default() -> Self {
        Self::new(DEFAULT_POWER_CACHE_TTL)
    }
}
