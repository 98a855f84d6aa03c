//! The decimal-string scanner.
//!
//! [`str2dec`] walks a small DFA over sign, integer digits, fraction
//! digits, exponent and the `INF`/`NAN` keyword paths. Each committed
//! prefix records a cursor position the scanner can fall back to when
//! a later field fails to materialize: `"12E-3"` parses fully, `"12E-"`
//! falls back to the mantissa. Running out of input inside a field that
//! could still have completed is not an error; hitting a character that
//! can never extend the token is.

use crate::decimal::Decimal;
use crate::nan::{make_nan, NANASCBIN};

/// Scans one numeric token from `s` starting at `*index`.
///
/// On return `*index` sits after the last consumed character, `*d`
/// holds the parsed decimal and `*valid` tells whether the input made
/// one complete well-formed token from the cursor to the point the
/// scan stopped. Empty, blank and leading-garbage input leaves the
/// cursor alone and yields the invalid-conversion NaN `"N0011"` — the
/// canonical, and valid, result for "no input".
pub fn str2dec(s: &str, index: &mut usize, d: &mut Decimal, valid: &mut bool) {
    let b = s.as_bytes();
    let n = b.len();
    let start = *index;
    let mut i = start.min(n);

    while i < n && b[i].is_ascii_whitespace() {
        i += 1;
    }

    let mut sgn = false;
    if i < n && (b[i] == b'+' || b[i] == b'-') {
        sgn = b[i] == b'-';
        i += 1;
    }

    match b.get(i).map(|c| c | 0x20) {
        Some(b'i') => scan_inf(b, i, start, sgn, index, d, valid),
        Some(b'n') => scan_nan(b, i, start, sgn, index, d, valid),
        _ => scan_number(b, i, start, sgn, index, d, valid),
    }
}

/// Nothing numeric: restore the cursor and hand back the
/// invalid-conversion NaN. `at_end` is false when a rejecting
/// character, rather than the end of input, cut the scan short.
fn no_input(start: usize, index: &mut usize, d: &mut Decimal, valid: &mut bool, at_end: bool) {
    *d = make_nan(NANASCBIN);
    *index = start;
    *valid = at_end;
}

fn scan_inf(
    b: &[u8],
    i: usize,
    start: usize,
    sgn: bool,
    index: &mut usize,
    d: &mut Decimal,
    valid: &mut bool,
) {
    let n = b.len();
    if i + 1 < n && b[i + 1] | 0x20 == b'n' {
        if i + 2 < n && b[i + 2] | 0x20 == b'f' {
            *d = Decimal {
                sgn,
                exp: 0,
                sig: String::from("I"),
            };
            *index = i + 3;
            *valid = i + 3 == n;
            return;
        }
        // "IN" either ran out of input or hit something other than F
        no_input(start, index, d, valid, i + 2 >= n);
        return;
    }
    no_input(start, index, d, valid, i + 1 >= n);
}

fn scan_nan(
    b: &[u8],
    i: usize,
    start: usize,
    sgn: bool,
    index: &mut usize,
    d: &mut Decimal,
    valid: &mut bool,
) {
    let n = b.len();
    if i + 1 >= n {
        return no_input(start, index, d, valid, true);
    }
    if b[i + 1] | 0x20 != b'a' {
        return no_input(start, index, d, valid, false);
    }
    if i + 2 >= n {
        return no_input(start, index, d, valid, true);
    }
    if b[i + 2] | 0x20 != b'n' {
        return no_input(start, index, d, valid, false);
    }

    let j = i + 3;
    if b.get(j) == Some(&b'(') {
        let mut k = j + 1;
        let mut code: u32 = 0;
        while k < n && b[k].is_ascii_digit() {
            code = code.wrapping_mul(10).wrapping_add(u32::from(b[k] - b'0'));
            k += 1;
        }
        if k < n && b[k] == b')' {
            // 0x4000 marks a NaN that came in through ASCII conversion
            *d = Decimal {
                sgn,
                exp: 0,
                sig: format!("N{:04x}", (0x4000 | code) & 0xffff),
            };
            *index = k + 1;
            *valid = k + 1 == n;
            return;
        }
        // parentheses must close to be consumed
        *d = Decimal {
            sgn,
            exp: 0,
            sig: String::from("N4000"),
        };
        *index = j;
        *valid = k >= n;
        return;
    }

    *d = Decimal {
        sgn,
        exp: 0,
        sig: String::from("N4000"),
    };
    *index = j;
    *valid = j == n;
}

fn scan_number(
    b: &[u8],
    mut i: usize,
    start: usize,
    sgn: bool,
    index: &mut usize,
    d: &mut Decimal,
    valid: &mut bool,
) {
    let n = b.len();
    let mut sig = String::new();
    let mut saw_digit = false;
    let mut int_extra: i64 = 0; // integer digits absorbed into the exponent
    let mut frac_seen: i64 = 0;
    let mut frac_used: i64 = 0;

    while i < n && b[i].is_ascii_digit() {
        saw_digit = true;
        if !(sig.is_empty() && b[i] == b'0') {
            if sig.len() < Decimal::SIGDIGLEN {
                sig.push(b[i] as char);
            } else {
                int_extra += 1;
            }
        }
        i += 1;
    }

    if i < n && b[i] == b'.' {
        let mut j = i + 1;
        let mut any = false;
        while j < n && b[j].is_ascii_digit() {
            any = true;
            frac_seen += 1;
            if sig.is_empty() && b[j] == b'0' {
                // a leading zero of the mantissa, tracked by position only
            } else if sig.len() < Decimal::SIGDIGLEN {
                sig.push(b[j] as char);
                frac_used = frac_seen;
            }
            j += 1;
        }
        if any {
            saw_digit = true;
            i = j;
        } else if !saw_digit {
            // a bare dot is not a number
            return no_input(start, index, d, valid, j >= n);
        } else {
            // the fraction never materialized: fall back to the mantissa
            return finish(sig, sgn, int_extra, frac_used, 0, i, j >= n, index, d, valid);
        }
    } else if !saw_digit {
        return no_input(start, index, d, valid, true);
    }

    let mut e_val: i64 = 0;
    let ok;
    if i < n && b[i] | 0x20 == b'e' {
        let mut j = i + 1;
        let mut esgn = false;
        if j < n && (b[j] == b'+' || b[j] == b'-') {
            esgn = b[j] == b'-';
            j += 1;
        }
        let ds = j;
        let mut acc: i64 = 0;
        while j < n && b[j].is_ascii_digit() {
            acc = (acc * 10 + i64::from(b[j] - b'0')).min(99_999);
            j += 1;
        }
        if j > ds {
            e_val = if esgn { -acc } else { acc };
            i = j;
            ok = j == n;
        } else {
            // "12E", "12E-": fall back to the mantissa
            ok = j >= n;
        }
    } else {
        ok = i == n;
    }
    finish(sig, sgn, int_extra, frac_used, e_val, i, ok, index, d, valid)
}

#[allow(clippy::too_many_arguments)]
fn finish(
    mut sig: String,
    sgn: bool,
    int_extra: i64,
    frac_used: i64,
    e_val: i64,
    i: usize,
    ok: bool,
    index: &mut usize,
    d: &mut Decimal,
    valid: &mut bool,
) {
    if sig.is_empty() {
        sig.push('0');
    }
    let exp = (int_extra - frac_used + e_val).clamp(i64::from(i16::MIN), i64::from(i16::MAX));
    *d = Decimal {
        sgn,
        exp: exp as i16,
        sig,
    };
    *index = i;
    *valid = ok;
}
