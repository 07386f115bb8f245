//! Hand-angle computation and the sub-second sweep model

use chrono::{NaiveTime, Timelike};

use crate::angle::Angle;

/// Nominal interval between animation timer firings, in milliseconds.
///
/// The host re-arms a one-shot timer with this interval after each firing;
/// it determines the granularity of the second-hand sweep.
pub const TICK_INTERVAL_MS: u32 = 200;

/// Animation ticks expected per wall-clock second
pub const TICKS_PER_SECOND: u32 = 1000 / TICK_INTERVAL_MS;

/// Sub-second animation state, owned by whatever drives the timer loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SweepCounter {
    last_second: Option<u32>,
    sub_tick: u32,
}

impl SweepCounter {
    pub const fn new() -> Self {
        Self {
            last_second: None,
            sub_tick: 0,
        }
    }

    /// Record one timer firing and return the current sub-tick index.
    ///
    /// Resets to 0 whenever the observed whole second changes, so the sweep
    /// restarts cleanly at each second boundary. On a repeated second the
    /// index increments without an upper bound: timer jitter can squeeze more
    /// than [`TICKS_PER_SECOND`] firings into one wall-clock second, and the
    /// resulting slight overshoot of the second hand is an accepted
    /// approximation of true elapsed time, not an error.
    pub fn advance(&mut self, current_second: u32) -> u32 {
        if self.last_second != Some(current_second) {
            self.last_second = Some(current_second);
            self.sub_tick = 0;
        } else {
            self.sub_tick += 1;
        }
        self.sub_tick
    }

    pub const fn sub_tick(&self) -> u32 {
        self.sub_tick
    }
}

/// Angular positions of the three hands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandAngles {
    pub second: Angle,
    pub minute: Angle,
    pub hour: Angle,
}

/// Compute all three hand angles for a time sample and sub-tick index.
///
/// The second hand advances in [`TICKS_PER_SECOND`] sub-steps per second
/// rather than jumping once a second. The minute hand creeps forward in six
/// 10-second steps across each minute, the hour hand in 2-minute steps
/// across each hour.
pub fn hand_angles(time: NaiveTime, sub_tick: u32) -> HandAngles {
    let (hour, minute, second) = (time.hour(), time.minute(), time.second());
    HandAngles {
        second: Angle::from_turn_fraction(
            second * TICKS_PER_SECOND + sub_tick,
            60 * TICKS_PER_SECOND,
        ),
        minute: Angle::from_turn_fraction(minute * 6 + second / 10, 360),
        hour: Angle::from_turn_fraction((hour % 12) * 30 + minute / 2, 360),
    }
}
