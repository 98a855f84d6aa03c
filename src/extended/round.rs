//! Conversions between [`Extended`] and [`rug::Float`].
//!
//! `Float` at 64 bits of precision is the working representation for
//! anything that needs real arithmetic (decimal parsing, comparisons);
//! `Extended` is the bit-exact interchange encoding. Going from
//! `Float` back to `Extended` is where the format's exponent range is
//! enforced: too large saturates to an infinity, too small
//! denormalizes and eventually flushes to a signed zero.

use gmp_mpfr_sys::mpfr;
use num_traits::Zero;
use rug::{float::Special, Float, Integer};

use crate::extended::Extended;
use crate::notation::div_round_even;

/// Working precision of the extended significand.
pub const PREC: u32 = 64;

impl From<Extended> for Float {
    fn from(x: Extended) -> Self {
        if x.is_nan() {
            let f = Float::with_val(PREC, Special::Nan);
            return if x.signbit() { -f } else { f };
        }
        if x.is_infinite() {
            let s = if x.signbit() {
                Special::NegInfinity
            } else {
                Special::Infinity
            };
            return Float::with_val(PREC, s);
        }
        if x.is_zero() {
            let s = if x.signbit() {
                Special::NegZero
            } else {
                Special::Zero
            };
            return Float::with_val(PREC, s);
        }

        let e = x.exponent_field() - Extended::BIAS;
        let c = Integer::from(x.significand());
        let m = if x.signbit() { -c } else { c };
        let mut f = Float::new(PREC);
        unsafe {
            // set `f` to `m * 2^(e - 63)`
            let t = mpfr::set_z_2exp(f.as_raw_mut(), m.as_raw(), i64::from(e - 63), mpfr::rnd_t::RNDN);
            assert_eq!(t, 0, "should have been exact");
        }
        f
    }
}

impl From<Float> for Extended {
    fn from(val: Float) -> Self {
        if val.is_nan() {
            return Extended::nan(val.is_sign_negative(), 0);
        }
        if val.is_infinite() {
            return Extended::infinity(val.is_sign_negative());
        }
        if val.is_zero() {
            return Extended::zero(val.is_sign_negative());
        }

        let mut m = Integer::zero();
        let lsb = unsafe { mpfr::get_z_2exp(m.as_raw_mut(), val.as_raw()) as i64 };
        let sign = m.is_negative();
        round_finite(sign, m.abs(), lsb)
    }
}

/// Rounds `(-1)^sign * c * 2^lsb` into the extended format.
/// `c` must be a non-zero integer.
fn round_finite(sign: bool, c: Integer, lsb: i64) -> Extended {
    let bits = i64::from(c.significant_bits());
    let mut e = lsb + bits - 1;

    if e > i64::from(Extended::BIAS) {
        return Extended::infinity(sign);
    }

    if e >= -16382 {
        // normal: the leading bit lands at position 63
        let c64 = if bits <= 64 {
            (c << (64 - bits) as u32).to_u64().unwrap()
        } else {
            let d = Integer::from(1) << (bits - 64) as u32;
            let q = div_round_even(c, &d);
            if q.significant_bits() > 64 {
                // the round-up carried into the next binade
                e += 1;
                if e > i64::from(Extended::BIAS) {
                    return Extended::infinity(sign);
                }
                (q >> 1u32).to_u64().unwrap()
            } else {
                q.to_u64().unwrap()
            }
        };
        return Extended::from_parts(sign, (e as i32 + Extended::BIAS) as u16, c64);
    }

    // below the normal range: denormalize at the fixed encoding
    // exponent, rounding half-to-even on the dropped bits
    let dst_lsb: i64 = -16383 - 63;
    let sh = dst_lsb - lsb;
    let c2 = if sh <= 0 {
        c << (-sh) as u32
    } else {
        let d = Integer::from(1) << sh as u32;
        div_round_even(c, &d)
    };

    if c2.significant_bits() > 64 {
        // carried all the way up to the smallest normal value
        return Extended::from_parts(sign, 1, 1u64 << 63);
    }
    Extended::from_parts(sign, 0, c2.to_u64().unwrap())
}
