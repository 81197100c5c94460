//! Wall-clock timing for the top-level render

use std::time::{Duration, Instant};

/// Run `f` and report how long it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// Format an elapsed time as `Done in: 1.23s`.
pub fn done_message(elapsed: Duration) -> String {
    format!("Done in: {:.2}s", elapsed.as_secs_f64())
}
