//! Exact decimal digit generation for the extended width: the
//! `printf`-style fixed and scientific emitters, computed with integer
//! arithmetic so that every digit is correctly rounded (half-to-even,
//! the way the C library rounds its conversions).

use rug::{ops::Pow, Integer};

use crate::extended::Extended;

/// `n / d` rounded to the nearest integer, ties to even.
/// Both operands must be non-negative.
pub(crate) fn div_round_even(n: Integer, d: &Integer) -> Integer {
    let (mut q, r) = n.div_rem(d.clone());
    let r2 = r * 2u32;
    if r2 > *d || (r2 == *d && q.is_odd()) {
        q += 1;
    }
    q
}

fn pow10(k: u32) -> Integer {
    Integer::from(10).pow(k)
}

/// Splits a finite non-zero `x` into `(c, lsb)` with `|x| = c * 2^lsb`.
fn decompose(x: &Extended) -> (u64, i32) {
    let e = x.exponent_field() - Extended::BIAS;
    (x.significand(), e - 63)
}

/// `|x| * 10^t` as an exact numerator/denominator pair.
fn scaled(c: u64, lsb: i32, t: i32) -> (Integer, Integer) {
    let mut n = Integer::from(c);
    let mut d = Integer::from(1);
    if lsb >= 0 {
        n <<= lsb as u32;
    } else {
        d <<= (-lsb) as u32;
    }
    if t >= 0 {
        n *= pow10(t as u32);
    } else {
        d *= pow10((-t) as u32);
    }
    (n, d)
}

/// The `%.*Lf` equivalent: `|x|` with `prec` digits after the decimal
/// point, returned as the integer part and the fraction part.
pub(crate) fn format_fixed(x: &Extended, prec: i32) -> (String, String) {
    let prec = prec.max(0);
    let (c, lsb) = decompose(x);
    let (n, d) = scaled(c, lsb, prec);
    let q = div_round_even(n, &d);

    let mut s = q.to_string();
    let width = prec as usize + 1;
    if s.len() < width {
        s.insert_str(0, &"0".repeat(width - s.len()));
    }
    let nn = s.split_off(s.len() - prec as usize);
    (s, nn)
}

/// The `%.*Le` equivalent: `prec + 1` significant digits of `|x|`,
/// plus the decimal exponent of the leading digit.
pub(crate) fn format_sci(x: &Extended, prec: i32) -> (String, i32) {
    let prec = prec.max(0);
    let total = (prec + 1) as u32;
    let (c, lsb) = decompose(x);

    // estimate floor(log10(x)) from the binary exponent, then correct
    // against the digits actually produced
    let msb = 63 - c.leading_zeros() as i32;
    let e2 = i64::from(lsb + msb);
    let mut k = (e2 * 30103).div_euclid(100_000) as i32;

    let lo = pow10(total - 1);
    let hi = pow10(total);
    loop {
        let (n, d) = scaled(c, lsb, prec - k);
        let q = div_round_even(n, &d);
        if q < lo {
            k -= 1;
        } else if q >= hi {
            k += 1;
        } else {
            return (q.to_string(), k);
        }
    }
}
