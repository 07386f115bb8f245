//! Analog sweep watchface with a smooth second hand

use embedded_graphics::{
    mono_font::MonoTextStyleBuilder,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Triangle},
    text::{Baseline, Text},
};
use libm::{cosf, roundf, sinf};
use profont::PROFONT_18_POINT;

use super::{WatchFace, WatchFaceState};
use crate::{
    angle::Angle,
    clock::{self, SweepCounter},
    format,
};

/// Canvas size the face is laid out for
pub const FACE_WIDTH: u32 = 144;
pub const FACE_HEIGHT: u32 = 168;

/// Rotation point of the hands
const CENTER: Point = Point::new(71, 83);

const INK: Rgb565 = Rgb565::BLACK;
const PLATE: Rgb565 = Rgb565::WHITE;

// Hand outlines pointing at 12 o'clock, relative to the rotation point
const SECOND_HAND: [Point; 5] = [
    Point::new(0, 0),
    Point::new(-2, 0),
    Point::new(-2, -80),
    Point::new(2, -80),
    Point::new(2, 0),
];
const MINUTE_HAND: [Point; 4] = [
    Point::new(0, 0),
    Point::new(-8, 0),
    Point::new(0, -80),
    Point::new(8, 0),
];
const HOUR_HAND: [Point; 4] = [
    Point::new(0, 0),
    Point::new(-6, 0),
    Point::new(0, -50),
    Point::new(6, 0),
];

/// Analog face with battery and day/date readouts.
///
/// Owns the sweep counter and the label buffers; one [`draw`] call per
/// animation timer firing advances the sweep and redraws everything.
///
/// [`draw`]: WatchFace::draw
pub struct SweepWatchface {
    counter: SweepCounter,
    battery_buf: [u8; 6],
    day_buf: [u8; 6],
    num_buf: [u8; 4],
}

impl WatchFace for SweepWatchface {
    fn new() -> Self {
        Self {
            counter: SweepCounter::new(),
            battery_buf: [0; 6],
            day_buf: [0; 6],
            num_buf: [0; 4],
        }
    }

    fn draw<D>(&mut self, target: &mut D, state: WatchFaceState) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        use chrono::Timelike;

        target.clear(PLATE)?;
        draw_hour_marks(target)?;

        // labels sit under the hands
        let label_style = MonoTextStyleBuilder::new()
            .font(&PROFONT_18_POINT)
            .text_color(INK)
            .background_color(PLATE)
            .build();

        let battery = format::battery_text(&mut self.battery_buf, state.percent, state.charging);
        Text::with_baseline(battery, Point::new(50, 40), label_style, Baseline::Top)
            .draw(target)?;

        let date = state.time.date();
        let day = format::day_text(&mut self.day_buf, date);
        Text::with_baseline(day, Point::new(40, 90), label_style, Baseline::Top).draw(target)?;
        let num = format::day_number_text(&mut self.num_buf, date);
        Text::with_baseline(num, Point::new(80, 90), label_style, Baseline::Top).draw(target)?;

        // hands
        let sub_tick = self.counter.advance(state.time.second());
        let angles = clock::hand_angles(state.time.time(), sub_tick);
        draw_hand(target, &SECOND_HAND, angles.second)?;
        draw_hand(target, &MINUTE_HAND, angles.minute)?;
        draw_hand(target, &HOUR_HAND, angles.hour)?;

        // hub rings on top of the hands
        for (diameter, color) in [(15, INK), (9, PLATE), (7, INK), (3, PLATE)] {
            Circle::with_center(CENTER, diameter)
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(target)?;
        }

        Ok(())
    }
}

impl SweepWatchface {
    /// Current sub-tick index of the sweep counter
    pub const fn sub_tick(&self) -> u32 {
        self.counter.sub_tick()
    }
}

/// Rotate a hand outline clockwise around [`CENTER`] and fill it as a
/// triangle fan. All hand outlines are convex, so the fan covers them.
fn draw_hand<D>(target: &mut D, outline: &[Point], angle: Angle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyleBuilder::new()
        .fill_color(INK)
        .stroke_color(INK)
        .stroke_width(1)
        .build();

    let mut rotated = [Point::zero(); 5];
    for (dst, src) in rotated.iter_mut().zip(outline) {
        *dst = CENTER + rotate(*src, angle);
    }

    for i in 1..outline.len() - 1 {
        Triangle::new(rotated[0], rotated[i], rotated[i + 1])
            .into_styled(style)
            .draw(target)?;
    }
    Ok(())
}

/// Twelve tick marks standing in for the printed dial
fn draw_hour_marks<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(INK, 2);
    for hour in 0..12 {
        let angle = Angle::from_turn_fraction(hour, 12);
        let inner = CENTER + rotate(Point::new(0, -60), angle);
        let outer = CENTER + rotate(Point::new(0, -68), angle);
        Line::new(inner, outer).into_styled(style).draw(target)?;
    }
    Ok(())
}

/// Clockwise rotation in screen coordinates (y grows downwards)
fn rotate(p: Point, angle: Angle) -> Point {
    let rad = angle.to_radians();
    let (sin, cos) = (sinf(rad), cosf(rad));
    Point::new(
        roundf(p.x as f32 * cos - p.y as f32 * sin) as i32,
        roundf(p.x as f32 * sin + p.y as f32 * cos) as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core::convert::Infallible;

    /// Counts drawn pixels, ink and plate separately
    struct Canvas {
        ink: usize,
        plate: usize,
    }

    impl Canvas {
        fn new() -> Self {
            Self { ink: 0, plate: 0 }
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size {
            Size::new(FACE_WIDTH, FACE_HEIGHT)
        }
    }

    impl DrawTarget for Canvas {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Rgb565>>,
        {
            for Pixel(_, color) in pixels {
                if color == INK {
                    self.ink += 1;
                } else {
                    self.plate += 1;
                }
            }
            Ok(())
        }
    }

    fn state_at(hour: u32, minute: u32, second: u32) -> WatchFaceState {
        WatchFaceState {
            time: NaiveDate::from_ymd_opt(2025, 2, 5)
                .unwrap()
                .and_hms_opt(hour, minute, second)
                .unwrap(),
            percent: 64,
            charging: false,
        }
    }

    #[test]
    fn draws_a_full_frame() {
        let mut face = SweepWatchface::new();
        let mut canvas = Canvas::new();
        face.draw(&mut canvas, state_at(10, 9, 30)).unwrap();
        // background clear plus hands, marks, labels and hub
        assert!(canvas.plate >= (FACE_WIDTH * FACE_HEIGHT) as usize);
        assert!(canvas.ink > 0);
    }

    #[test]
    fn repeated_draws_within_a_second_advance_the_sweep() {
        let mut face = SweepWatchface::new();
        let mut canvas = Canvas::new();
        face.draw(&mut canvas, state_at(10, 9, 30)).unwrap();
        assert_eq!(face.sub_tick(), 0);
        face.draw(&mut canvas, state_at(10, 9, 30)).unwrap();
        face.draw(&mut canvas, state_at(10, 9, 30)).unwrap();
        assert_eq!(face.sub_tick(), 2);
        face.draw(&mut canvas, state_at(10, 9, 31)).unwrap();
        assert_eq!(face.sub_tick(), 0);
    }

    #[test]
    fn rotate_quarter_turn_points_right() {
        let p = rotate(Point::new(0, -80), Angle::from_turn_fraction(1, 4));
        assert_eq!(p, Point::new(80, 0));
        let half = rotate(Point::new(0, -80), Angle::from_turn_fraction(1, 2));
        assert_eq!(half, Point::new(0, 80));
    }
}
