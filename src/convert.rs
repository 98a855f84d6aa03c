//! Conversions between the decimal record and the extended binary
//! width.

use std::num::FpCategory;

use rug::Float;

use crate::decimal::{DecForm, Decimal, Style};
use crate::extended::{Extended, PREC};
use crate::nan::{make_nan, NANASCBIN};
use crate::notation::{format_fixed, format_sci};

/// Converts a decimal record to extended binary.
///
/// Zero, infinity and NaN significands map to their binary
/// counterparts directly, a NaN keeping the code parsed from its hex
/// tail (or [`NANASCBIN`] when the tail holds no hex digit at all).
/// Anything else is read as `sig * 10^exp`, correctly rounded to the
/// extended significand; exponents beyond the format saturate to a
/// signed infinity or signed zero, so `dec2x` of `1e5000` is `+Inf`.
pub fn dec2x(d: &Decimal) -> Extended {
    let x = match d.classify() {
        FpCategory::Zero => Extended::zero(false),
        FpCategory::Infinite => Extended::infinity(false),
        FpCategory::Nan => make_nan(d.nan_code().unwrap_or(NANASCBIN)),
        _ => {
            let src = format!("{}e{}", d.sig, d.exp);
            match Float::parse(&src) {
                Ok(p) => Extended::from(Float::with_val(PREC, p)),
                Err(_) => make_nan(NANASCBIN),
            }
        }
    };
    if d.sgn {
        -x
    } else {
        x
    }
}

/// Converts an extended binary value to a decimal record under `df`.
///
/// The digit count is clamped to `[0, SIGDIGLEN]`. A NaN keeps the low
/// 16 bits of its payload as the four-hex-digit tail of the
/// significand; zeros and infinities keep their sign. Finite values go
/// through the fixed or scientific emitter matching `df.style`.
pub fn x2dec(x: &Extended, df: &DecForm) -> Decimal {
    let mut digits = i32::from(df.digits);
    if digits < 0 {
        digits = 0;
    }
    if digits > Decimal::SIGDIGLEN as i32 {
        digits = Decimal::SIGDIGLEN as i32;
    }

    let mut d = Decimal {
        sgn: x.signbit(),
        exp: 0,
        sig: String::new(),
    };

    match x.classify() {
        FpCategory::Zero => {
            d.sig.push('0');
            return d;
        }
        FpCategory::Nan => {
            d.sig = format!("N{:04x}", x.nan_payload().unwrap() & 0xffff);
            return d;
        }
        FpCategory::Infinite => {
            d.sig.push('I');
            return d;
        }
        _ => {}
    }

    let x = x.abs();
    match df.style {
        Style::Float => {
            let (digs, k) = format_sci(&x, digits - 1);
            let frac = digs.len() as i32 - 1;
            d.exp = (k - frac) as i16;
            d.sig = digs;
        }
        Style::Fixed => {
            let (mut mm, mut nn) = format_fixed(&x, digits);
            // skip mm if it's 0, nn if it's all zeros
            if mm == "0" {
                mm.clear();
            }
            if nn.bytes().all(|b| b == b'0') {
                nn.clear();
            }

            if mm.is_empty() && nn.is_empty() {
                d.sig.push('0');
                return d;
            }
            if mm.is_empty() {
                d.sig = nn.trim_start_matches('0').to_string();
            } else {
                let pad = digits as usize - nn.len();
                nn.push_str(&"0".repeat(pad));
                d.sig = mm + &nn;
            }
            d.exp = -digits as i16;

            if d.sig.len() > Decimal::SIGDIGLEN {
                d.exp = d
                    .exp
                    .saturating_add((d.sig.len() - Decimal::SIGDIGLEN) as i16);
                d.sig.truncate(Decimal::SIGDIGLEN);
            }
        }
    }
    d
}
