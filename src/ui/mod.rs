//! UI definitions module
//! Based on: https://github.com/lupyuen/pinetime-watchface/blob/master/src/lib.rs

use chrono::NaiveDateTime;
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb565};

pub mod sweep_watchface;

/// State for the watch face, sampled by the host from its clock and power
/// services once per redraw.
#[derive(Clone, Copy, Debug)]
pub struct WatchFaceState {
    pub time: NaiveDateTime,
    pub percent: u8,
    pub charging: bool,
}

pub trait WatchFace {
    /// Create new watchface
    fn new() -> Self;

    /// Redraw the watchface for the given state.
    ///
    /// Called by the host once per animation timer firing; drives the
    /// sub-second sweep forward as a side effect.
    fn draw<D>(&mut self, target: &mut D, state: WatchFaceState) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>;
}
