use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use hwsnap::core::telemetry::{
    Clock, PowerDataCache, PowerPlatform, PowerProfile, DEFAULT_POWER_CACHE_TTL,
};
use hwsnap::platform::GenericPowerPlatform;
use hwsnap::Result;
use parking_lot::Mutex;

struct ManualClock {
    base: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    fn advance(&self, by: Duration) {
        *self.offset.lock() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock()
    }
}

/// Power profile probe whose output changes on every call.
#[derive(Default)]
struct CountingPlatform {
    calls: AtomicUsize,
}

impl PowerPlatform for CountingPlatform {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn has_power_profile(&self) -> bool {
        true
    }

    fn power_profile_report(&self) -> Result<String> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("Cycle Count: {}\nCondition: Normal", n))
    }
}

#[test]
fn test_cached_text_identical_within_ttl() {
    let clock = Arc::new(ManualClock::new());
    let platform = Arc::new(CountingPlatform::default());
    let profile = PowerProfile::new(
        platform.clone(),
        PowerDataCache::with_clock(DEFAULT_POWER_CACHE_TTL, clock.clone()),
    );

    let first = profile.system_power_output();
    clock.advance(Duration::from_secs(10));
    let second = profile.system_power_output();

    assert_eq!(first, second);
    assert_eq!(profile.cached_power_data().cycles, 1);
    assert_eq!(platform.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_expired_cache_probes_exactly_once() {
    let clock = Arc::new(ManualClock::new());
    let platform = Arc::new(CountingPlatform::default());
    let profile = PowerProfile::new(
        platform.clone(),
        PowerDataCache::with_clock(DEFAULT_POWER_CACHE_TTL, clock.clone()),
    );

    profile.system_power_output();
    clock.advance(Duration::from_secs(31));
    profile.system_power_output();
    profile.system_power_output();

    assert_eq!(platform.calls.load(Ordering::SeqCst), 2);
    assert_eq!(profile.cached_power_data().cycles, 2);
}

#[test]
fn test_no_profile_probe_returns_empty() {
    let profile = PowerProfile::new(Arc::new(GenericPowerPlatform), PowerDataCache::default());

    assert!(profile.system_power_output().is_empty());
    assert_eq!(profile.cached_power_data().cycles, 0);
    assert!(profile.cached_power_data().health.is_none());
    assert!(profile.cache().last_fetch().is_none());
}

#[test]
fn test_concurrent_pollers_share_one_refresh() {
    let platform = Arc::new(CountingPlatform::default());
    let profile = Arc::new(PowerProfile::new(
        platform.clone(),
        PowerDataCache::new(DEFAULT_POWER_CACHE_TTL),
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let profile = profile.clone();
            thread::spawn(move || profile.system_power_output())
        })
        .collect();
    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(platform.calls.load(Ordering::SeqCst), 1);
    assert!(outputs.iter().all(|o| o == &outputs[0]));
}
