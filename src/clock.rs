// Wall-clock source for the "now" anchor of the time mode
// Native builds: chrono local time
// WASM builds: the browser's Date object

/// Time of day source
pub trait Clock {
    /// Seconds elapsed since local midnight
    fn seconds_since_midnight(&self) -> u32;
}

/// Local wall clock of the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn seconds_since_midnight(&self) -> u32 {
        use chrono::Timelike;
        chrono::Local::now().num_seconds_from_midnight()
    }
}

#[cfg(target_arch = "wasm32")]
impl Clock for SystemClock {
    fn seconds_since_midnight(&self) -> u32 {
        let now = js_sys::Date::new_0();
        now.get_hours() * 3600 + now.get_minutes() * 60 + now.get_seconds()
    }
}

/// Clock frozen at a given time of day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u32);

impl FixedClock {
    pub fn at(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self(hours * 3600 + minutes * 60 + seconds)
    }
}

impl Clock for FixedClock {
    fn seconds_since_midnight(&self) -> u32 {
        self.0
    }
}
