// src/types/q8_8.rs

/// Signed fixed-point value in Q8.8 format: 8 integer bits, 8 fractional
/// bits, two's complement, 16 bits total.
///
/// This is the lane format of every signal and coefficient in the generated
/// network. Encoding from a float wraps modulo 2^16 instead of saturating;
/// the butterfly hardware itself wraps, and the constant table has to agree
/// with it bit-for-bit.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Q8_8(i16);

impl Q8_8 {
    /// Number of fractional bits.
    pub const FRAC_BITS: u32 = 8;

    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1 << Self::FRAC_BITS);

    /// Creates a Q8_8 from the raw integer value (without shift).
    #[inline]
    pub const fn from_bits(bits: i16) -> Self {
        Self(bits)
    }

    /// Returns the stored raw value.
    #[inline]
    pub const fn to_bits(self) -> i16 {
        self.0
    }

    /// Creates a Q8_8 from an integer, applying the necessary shift.
    /// E.g.: Q8_8::from_int(1) will result in internal value 256.
    #[inline]
    pub const fn from_int(value: i16) -> Self {
        Self(value.wrapping_shl(Self::FRAC_BITS))
    }

    /// Converts an f64 to Q8_8.
    ///
    /// The value is scaled by 256, rounded half away from zero
    /// (`round` semantics of both `f64` and `libm`, identical in std and
    /// no_std builds), and reduced to the low 16 bits. Magnitudes outside
    /// [-128, 127.99609375] therefore wrap modulo 2^16.
    pub fn from_f64(value: f64) -> Self {
        let scaled = round(value * (1u64 << Self::FRAC_BITS) as f64);
        Self::from_bits((scaled as i64 & 0xFFFF) as u16 as i16)
    }

    /// Reports whether `value` encodes without wrapping.
    pub fn fits(value: f64) -> bool {
        let scaled = round(value * (1u64 << Self::FRAC_BITS) as f64);
        (f64::from(i16::MIN)..=f64::from(i16::MAX)).contains(&scaled)
    }

    /// Decodes back to a float. Exact: every Q8.8 value is a multiple
    /// of 2^-8.
    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / (1u64 << Self::FRAC_BITS) as f64
    }
}

/// Rounding helper agnostic to std/no_std.
fn round(value: f64) -> f64 {
    #[cfg(feature = "std")]
    return value.round();

    #[cfg(not(feature = "std"))]
    return libm::round(value);
}

use core::fmt;

impl fmt::Display for Q8_8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_f64())
    }
}

impl fmt::Debug for Q8_8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // In Debug, show both the decimal value and the raw value in parentheses
        write!(f, "{:.6} (raw: {})", self.to_f64(), self.0)
    }
}

/// Prints the raw 16 bits as four hex digits, the way the emitter writes
/// `16'hXXXX` literals.
impl fmt::UpperHex for Q8_8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0 as u16)
    }
}
