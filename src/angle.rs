//! Normalized angle unit for hand rotation

/// An angle stored as a binary fraction of one full turn.
///
/// The raw value is a 16-bit fixed-point fraction, so arithmetic is modular
/// and every angle is normalized to `[0, FULL_TURN)` by construction. Convert
/// to radians or degrees only at the drawing boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Angle(u16);

impl Angle {
    /// 12 o'clock
    pub const ZERO: Angle = Angle(0);

    /// One full rotation in raw fixed-point units
    pub const FULL_TURN: u32 = 1 << 16;

    /// Build an angle from an exact fraction `num / den` of a full turn,
    /// reduced modulo one turn.
    pub fn from_turn_fraction(num: u32, den: u32) -> Self {
        debug_assert!(den > 0);
        Angle(((num % den) as u64 * Self::FULL_TURN as u64 / den as u64) as u16)
    }

    /// Raw fixed-point value in `[0, FULL_TURN)`
    pub const fn raw(self) -> u16 {
        self.0
    }

    pub fn to_radians(self) -> f32 {
        self.0 as f32 * (core::f32::consts::TAU / Self::FULL_TURN as f32)
    }

    pub fn to_degrees(self) -> f32 {
        self.0 as f32 * (360.0 / Self::FULL_TURN as f32)
    }
}
