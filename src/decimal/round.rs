//! Significand truncation.

use crate::decimal::Decimal;

/// Rounds `d` down to at most `digits` significant characters,
/// compensating in the exponent, then strips trailing zeros.
///
/// Rounding is half-up: the first discarded character decides, and a
/// live carry walks leftward through the kept digits. `"99"` cut to
/// one digit becomes `"1"` with the exponent advanced twice. The SANE
/// documentation asks for half-to-even here; half-up is what shipped
/// and is the behavior preserved.
pub fn truncate(d: &mut Decimal, digits: i32) {
    let digits = digits.max(1) as usize;
    if d.sig.len() <= digits {
        return;
    }

    // infinity and NaN significands are simply cut
    let first = d.sig.as_bytes()[0];
    if first == b'I' || first == b'N' {
        d.sig.truncate(digits);
        return;
    }

    let mut ru = d.sig.as_bytes()[digits] >= b'5';
    d.exp = d.exp.saturating_add((d.sig.len() - digits) as i16);

    let mut sig = std::mem::take(&mut d.sig).into_bytes();
    sig.truncate(digits);

    // round up...
    while ru && !sig.is_empty() {
        let c = sig.last_mut().unwrap();
        *c += 1;
        ru = *c > b'9';
        if ru {
            d.exp = d.exp.saturating_add(1);
            sig.pop();
        }
    }

    // 99 -> (1) 00; the exponent is already bumped
    if ru && sig.is_empty() {
        sig.push(b'1');
    }

    // remove trailing 0s
    while sig.len() > 1 && sig.last() == Some(&b'0') {
        sig.pop();
        d.exp = d.exp.saturating_add(1);
    }

    d.sig = String::from_utf8(sig).unwrap();
}
