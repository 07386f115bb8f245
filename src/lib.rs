//! Analog sweep watchface
//!
//! An analog clock face with a smoothly animated second hand, a battery
//! readout and a day/date readout, rendered against any
//! [`embedded_graphics::draw_target::DrawTarget`]. The host platform owns the
//! display driver and the animation timer: it re-arms a one-shot timer every
//! [`TICK_INTERVAL_MS`] milliseconds and calls [`WatchFace::draw`] with a
//! fresh [`WatchFaceState`] on each firing. Rather than jumping once per
//! second, the second hand advances one sub-tick per firing, completing the
//! sweep across each second in [`TICKS_PER_SECOND`] steps.

#![cfg_attr(not(test), no_std)]

pub mod angle;
pub mod clock;
pub mod format;
pub mod ui;

pub use angle::Angle;
pub use clock::{hand_angles, HandAngles, SweepCounter, TICKS_PER_SECOND, TICK_INTERVAL_MS};
pub use ui::{sweep_watchface::SweepWatchface, WatchFace, WatchFaceState};
