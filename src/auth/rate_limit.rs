//! Fixed-window login throttle keyed by client address. Counters live in
//! process memory and die with the process, matching the stateless-token
//! model of the rest of the service.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::config::LoginRateLimitConfig;

#[derive(Debug)]
struct Window {
    started_at: Instant,
    attempts: u32,
}

#[derive(Debug)]
pub struct LoginRateLimiter {
    max_attempts: u32,
    window: Duration,
    counters: Mutex<HashMap<IpAddr, Window>>,
}

impl LoginRateLimiter {
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        Self {
            max_attempts,
            window,
            counters: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_config(cfg: &LoginRateLimitConfig) -> Self {
        Self::new(cfg.max_attempts, Duration::from_secs(cfg.window_secs))
    }

    /// Records one attempt for `key` and reports whether it still fits the
    /// window's budget. Increment and check happen under one lock, so
    /// concurrent attempts cannot slip past the limit. Expired windows are
    /// pruned on every call.
    pub fn try_acquire(&self, key: IpAddr) -> bool {
        let now = Instant::now();
        let mut counters = self.counters.lock().expect("rate limiter lock poisoned");
        counters.retain(|_, w| now.duration_since(w.started_at) < self.window);
        let window = counters.entry(key).or_insert(Window {
            started_at: now,
            attempts: 0,
        });
        window.attempts += 1;
        window.attempts <= self.max_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(last: u8) -> IpAddr {
        IpAddr::from([127, 0, 0, last])
    }

    #[test]
    fn allows_up_to_max_then_denies() {
        let limiter = LoginRateLimiter::new(10, Duration::from_secs(300));
        for _ in 0..10 {
            assert!(limiter.try_acquire(ip(1)));
        }
        assert!(!limiter.try_acquire(ip(1)));
        assert!(!limiter.try_acquire(ip(1)));
    }

    #[test]
    fn keys_are_independent() {
        let limiter = LoginRateLimiter::new(1, Duration::from_secs(300));
        assert!(limiter.try_acquire(ip(1)));
        assert!(!limiter.try_acquire(ip(1)));
        assert!(limiter.try_acquire(ip(2)));
    }

    #[test]
    fn window_expiry_resets_the_counter() {
        let limiter = LoginRateLimiter::new(1, Duration::from_millis(40));
        assert!(limiter.try_acquire(ip(1)));
        assert!(!limiter.try_acquire(ip(1)));
        std::thread::sleep(Duration::from_millis(60));
        assert!(limiter.try_acquire(ip(1)));
    }

    #[test]
    fn concurrent_attempts_never_exceed_the_budget() {
        use std::sync::atomic::{AtomicU32, Ordering};
        use std::sync::Arc;

        let limiter = Arc::new(LoginRateLimiter::new(10, Duration::from_secs(300)));
        let allowed = Arc::new(AtomicU32::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                let allowed = Arc::clone(&allowed);
                std::thread::spawn(move || {
                    for _ in 0..5 {
                        if limiter.try_acquire(ip(1)) {
                            allowed.fetch_add(1, Ordering::SeqCst);
                        }
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(allowed.load(Ordering::SeqCst), 10);
    }
}
