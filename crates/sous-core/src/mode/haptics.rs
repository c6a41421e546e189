//! Expiry feedback.

use std::time::Duration;

use log::info;

/// A vibration made of identical pulses separated by gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VibrationPattern {
    pub pulses: u8,
    pub pulse: Duration,
    pub gap: Duration,
}

impl VibrationPattern {
    /// Two short pulses, played when a step timer runs out.
    pub const TIMER_EXPIRED: Self = Self {
        pulses: 2,
        pulse: Duration::from_millis(400),
        gap: Duration::from_millis(200),
    };
}

/// Device feedback fired once each time a step timer expires.
///
/// Called from the tick task, outside the session lock.
pub trait Haptics: Send + Sync {
    fn vibrate(&self, pattern: VibrationPattern);
}

/// Default feedback for hosts without a vibration motor: writes a log line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn vibrate(&self, pattern: VibrationPattern) {
        info!(
            "Timer expired: vibrating {} x {}ms",
            pattern.pulses,
            pattern.pulse.as_millis()
        );
    }
}
