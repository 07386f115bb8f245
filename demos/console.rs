//! Host-side stand-in for the platform timer/redraw loop.
//!
//! Samples the system clock, redraws the face once per tick into an
//! in-memory target and prints it as ASCII. The sleep-then-redraw loop plays
//! the role of the one-shot animation timer that the firmware host re-arms
//! after each firing.

use std::{
    thread,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use chrono::NaiveDateTime;
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use sweep_watchface::{SweepWatchface, WatchFace, WatchFaceState, TICK_INTERVAL_MS};

const TIMEZONE: i64 = 0 * 3_600;

const WIDTH: usize = 144;
const HEIGHT: usize = 168;

/// 1-bit frame store for ASCII output
struct Frame {
    ink: Vec<bool>,
}

impl Frame {
    fn new() -> Self {
        Self {
            ink: vec![false; WIDTH * HEIGHT],
        }
    }

    /// Downsample to one character per 2x4 pixel block
    fn ascii(&self) -> String {
        let mut out = String::with_capacity((WIDTH / 2 + 1) * HEIGHT / 4);
        for block_y in 0..HEIGHT / 4 {
            for block_x in 0..WIDTH / 2 {
                let mut lit = 0;
                for dy in 0..4 {
                    for dx in 0..2 {
                        if self.ink[(block_y * 4 + dy) * WIDTH + block_x * 2 + dx] {
                            lit += 1;
                        }
                    }
                }
                out.push(match lit {
                    0 => ' ',
                    1..=2 => '.',
                    3..=5 => 'o',
                    _ => '#',
                });
            }
            out.push('\n');
        }
        out
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for Frame {
    type Color = Rgb565;
    type Error = std::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Rgb565>>,
    {
        for Pixel(point, color) in pixels {
            if (0..WIDTH as i32).contains(&point.x) && (0..HEIGHT as i32).contains(&point.y) {
                let dark = (color.r() as u16 + color.g() as u16 + color.b() as u16) < 60;
                self.ink[point.y as usize * WIDTH + point.x as usize] = dark;
            }
        }
        Ok(())
    }
}

fn main() {
    let mut face = SweepWatchface::new();
    let mut frame = Frame::new();

    loop {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        let time = NaiveDateTime::from_timestamp_opt(secs + TIMEZONE, 0).unwrap();

        face.draw(
            &mut frame,
            WatchFaceState {
                time,
                percent: 73,
                charging: false,
            },
        )
        .unwrap();

        print!("\x1b[H\x1b[2J{}", frame.ascii());

        // re-arm the tick
        thread::sleep(Duration::from_millis(TICK_INTERVAL_MS as u64));
    }
}
