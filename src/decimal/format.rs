//! The decimal formatter.

use crate::decimal::{DecForm, Decimal, Style};

// SANE caps formatted output at 80 characters; anything longer is
// replaced wholesale by "?".
const MAX_WIDTH: usize = 80;

/// Renders `d` under the format `df`.
///
/// Floating style is `[-| ]m[.nnn]e[+|-]dddd` — a space holds the sign
/// column for non-negative values. Fixed style is `[-]mmm[.nnn]`, with
/// `df.digits` places after the point (negative digit counts format as
/// zero). NaNs render as `NAN(ddd)` with the decimal code when it fits
/// in three digits, infinities as `INF`. Output longer than 80
/// characters becomes `"?"`.
pub fn dec2str(df: &DecForm, d: &Decimal) -> String {
    // "Negative values for digits are treated as 0 for fixed
    //  formatting, but give unspecified results in floating format."
    let mut digits = i32::from(df.digits);
    if digits < 0 {
        digits = 0;
    }

    let sig: &str = if d.sig.is_empty() { "0" } else { &d.sig };
    let mut exp = i32::from(d.exp);

    let mut s = String::new();
    if d.sgn {
        s.push('-');
    } else if df.style == Style::Float {
        s.push(' ');
    }

    // handle INF/NAN early
    let first = sig.as_bytes()[0];
    if first == b'I' {
        s.push_str("INF");
        return s;
    }
    if first == b'N' {
        let code = d.nan_code().unwrap_or(0);
        if code > 0 && code < 1000 {
            s.push_str(&format!("NAN({:03})", code));
        } else {
            s.push_str("NAN(000)");
        }
        return s;
    }

    match df.style {
        Style::Float => {
            // one leading digit, the rest behind the point
            s.push(first as char);
            if sig.len() > 1 || digits > 1 {
                s.push('.');
                s.push_str(&sig[1..]);
                let fudge = sig.len() as i32 - 1;
                exp += fudge;
                digits -= fudge;
            }
            if digits > MAX_WIDTH as i32 {
                return String::from("?");
            }
            while digits > 1 {
                s.push('0');
                digits -= 1;
            }

            s.push('e');
            if exp >= 0 {
                s.push('+');
            }
            s.push_str(&exp.to_string());

            if s.len() > MAX_WIDTH {
                return String::from("?");
            }
            s
        }
        Style::Fixed => {
            let mut rest = sig;
            let mm: String;
            if exp >= 0 {
                // 1, "12" -> 120
                if exp > MAX_WIDTH as i32 {
                    return String::from("?");
                }
                mm = format!("{}{}", rest, "0".repeat(exp as usize));
                rest = "";
            } else {
                // -1, "12" -> 1.2
                // -3, "12" -> 0.012
                let m = rest.len() as i32 + exp;
                if m > 0 {
                    mm = rest[..m as usize].to_string();
                    rest = &rest[m as usize..];
                    exp = 0;
                } else {
                    mm = String::from("0");
                    exp = m;
                }
            }
            s.push_str(&mm);

            if digits > 0 {
                s.push('.');
                let mut nn = String::new();
                if exp < 0 {
                    // leading zeros of a pure fraction
                    nn.push_str(&"0".repeat((-exp).min(digits) as usize));
                }
                nn.push_str(rest);
                // TODO: round the discarded tail instead of truncating
                if nn.len() > digits as usize {
                    nn.truncate(digits as usize);
                } else {
                    let pad = digits as usize - nn.len();
                    nn.push_str(&"0".repeat(pad));
                }
                s.push_str(&nn);
            }

            if s.len() > MAX_WIDTH {
                return String::from("?");
            }
            s
        }
    }
}
