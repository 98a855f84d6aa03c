use std::num::FpCategory;

use crate::extended::Extended;
use crate::nan::{make_nan, NANCOMP};

// 2^63, exactly representable in every binary width
const LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// The SANE `comp` type: a 64-bit signed integer whose most negative
/// bit pattern is reserved as a NaN.
///
/// A comp holds any integer in `[-(2^63 - 1), 2^63 - 1]` or the single
/// NaN encoding `0x8000_0000_0000_0000`. Conversions from the binary
/// floating-point widths truncate toward zero, mapping NaNs,
/// infinities and out-of-range magnitudes to the comp NaN; conversions
/// out rebuild a floating NaN carrying [`NANCOMP`].
#[derive(Clone, Copy, Debug)]
pub struct Comp {
    data: i64,
}

impl Comp {
    /// Bit pattern reserved for the comp NaN.
    pub const NAN: u64 = 0x8000_0000_0000_0000;

    pub fn from_bits(bits: u64) -> Self {
        Comp { data: bits as i64 }
    }

    pub fn to_bits(self) -> u64 {
        self.data as u64
    }

    /// The stored integer, or `None` for the NaN encoding.
    pub fn to_i64(self) -> Option<i64> {
        if self.is_nan() {
            None
        } else {
            Some(self.data)
        }
    }

    pub fn is_nan(self) -> bool {
        self.data as u64 == Self::NAN
    }

    pub fn classify(self) -> FpCategory {
        if self.is_nan() {
            FpCategory::Nan
        } else if self.data == 0 {
            FpCategory::Zero
        } else {
            FpCategory::Normal
        }
    }

    pub fn is_infinite(self) -> bool {
        false
    }

    pub fn is_finite(self) -> bool {
        !self.is_nan()
    }

    pub fn is_normal(self) -> bool {
        !self.is_nan() && self.data != 0
    }

    /// The sign of the stored integer; false for the NaN.
    pub fn signbit(self) -> bool {
        !self.is_nan() && self.data < 0
    }

    /// NaN-preserving integer absolute value.
    pub fn abs(self) -> Self {
        if self.is_nan() {
            self
        } else {
            Comp { data: self.data.abs() }
        }
    }
}

impl From<i64> for Comp {
    fn from(v: i64) -> Self {
        Comp { data: v }
    }
}

impl From<i32> for Comp {
    fn from(v: i32) -> Self {
        Comp { data: i64::from(v) }
    }
}

impl From<f64> for Comp {
    fn from(t: f64) -> Self {
        if !t.is_finite() || t >= LIMIT || t <= -LIMIT {
            return Comp::from_bits(Comp::NAN);
        }
        Comp { data: t as i64 }
    }
}

impl From<f32> for Comp {
    fn from(t: f32) -> Self {
        Comp::from(f64::from(t))
    }
}

impl From<Extended> for Comp {
    fn from(x: Extended) -> Self {
        match x.classify() {
            FpCategory::Nan | FpCategory::Infinite => return Comp::from_bits(Comp::NAN),
            FpCategory::Zero => return Comp { data: 0 },
            _ => {}
        }

        // integer part of c * 2^(e - 63), truncated toward zero
        let c = x.significand();
        let e = x.exponent_field() - Extended::BIAS;
        let t: u128 = if e >= 63 {
            if e - 63 >= 64 {
                return Comp::from_bits(Comp::NAN);
            }
            u128::from(c) << (e - 63)
        } else {
            let sh = 63 - e;
            if sh >= 64 {
                0
            } else {
                u128::from(c >> sh)
            }
        };

        if t > i64::MAX as u128 {
            return Comp::from_bits(Comp::NAN);
        }
        let v = t as i64;
        Comp {
            data: if x.signbit() { -v } else { v },
        }
    }
}

impl From<Comp> for f64 {
    fn from(c: Comp) -> Self {
        if c.is_nan() {
            make_nan(NANCOMP)
        } else {
            c.data as f64
        }
    }
}

impl From<Comp> for f32 {
    fn from(c: Comp) -> Self {
        if c.is_nan() {
            make_nan(NANCOMP)
        } else {
            c.data as f32
        }
    }
}

impl From<Comp> for Extended {
    fn from(c: Comp) -> Self {
        if c.is_nan() {
            make_nan(NANCOMP)
        } else {
            Extended::from(c.data)
        }
    }
}
