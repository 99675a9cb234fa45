//! App-relative monotonic clock.
//!
//! Backdrop motion, toast expiry and the FPS readout all share seconds
//! counted from the first call.

use std::sync::OnceLock;
use std::time::Instant;

pub fn app_seconds() -> f64 {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64()
}
