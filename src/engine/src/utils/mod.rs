use log::debug;
use std::time::Instant;

const SLOW_OPERATION_THRESHOLD_MS: u128 = 100;

pub struct TimeEstimation;

impl TimeEstimation {
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let now = Instant::now();

        let result = action();

        (result, now.elapsed().as_millis())
    }
}

pub struct Logging;

impl Logging {
    /// Runs `action` and logs its duration, louder when it crosses the slow threshold.
    pub fn estimate_result<T, F: FnOnce() -> T>(action: F, message: &str) -> T {
        let (result, elapsed) = TimeEstimation::estimate(action);

        if elapsed > SLOW_OPERATION_THRESHOLD_MS {
            debug!("slow operation: {}, {} ms", message, elapsed);
        } else {
            debug!("{}, {} ms", message, elapsed);
        }

        result
    }
}
