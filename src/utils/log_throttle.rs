//! Keyed rate limiting for log lines that would otherwise repeat every cycle.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

#[derive(Debug)]
struct WindowState {
    window_started_at: Instant,
    suppressed: u64,
}

static LOG_WINDOWS: OnceLock<Mutex<HashMap<String, WindowState>>> = OnceLock::new();

fn windows() -> &'static Mutex<HashMap<String, WindowState>> {
    LOG_WINDOWS.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Returns `Some(suppressed_count)` when a log for `key` should be emitted,
/// otherwise `None` and the event is counted as suppressed for the active window.
pub fn should_emit(key: &str, interval: Duration) -> Option<u64> {
    // A panic while holding the lock cannot leave the map inconsistent.
    let mut map = windows().lock().unwrap_or_else(|e| e.into_inner());
    let now = Instant::now();

    let Some(state) = map.get_mut(key) else {
        map.insert(
            key.to_string(),
            WindowState {
                window_started_at: now,
                suppressed: 0,
            },
        );
        return Some(0);
    };

    if now.duration_since(state.window_started_at) < interval {
        state.suppressed += 1;
        return None;
    }
    let suppressed = std::mem::take(&mut state.suppressed);
    state.window_started_at = now;
    Some(suppressed)
}
