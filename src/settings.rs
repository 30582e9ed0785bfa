//! The one piece of state shared between the tick loop and the status
//! server: the alarm-enabled flag.

use portable_atomic::{AtomicBool, Ordering};

/// Cross-task alarm settings. Lives in a `static`; the tick loop reads it
/// every evaluation and the HTTP status server may flip it at any point;
/// only eventual consistency between the two is promised.
#[derive(Debug)]
pub struct AlarmSettings {
    enabled: AtomicBool,
}

impl AlarmSettings {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_round_trips() {
        let settings = AlarmSettings::new(true);
        assert!(settings.is_enabled());
        settings.set_enabled(false);
        assert!(!settings.is_enabled());
        settings.set_enabled(true);
        assert!(settings.is_enabled());
    }
}
