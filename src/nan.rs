/*!
NaN codes and typed NaN construction.

SANE tags every NaN with a 16-bit code recording why it arose
(table 5-1 of the Apple Numerics Manual). The code rides in the low
bits of a binary significand, or as four hex digits in a decimal
significand. A zero code is never produced; it is replaced by
[`NANZERO`].
*/

use crate::comp::Comp;
use crate::decimal::Decimal;
use crate::extended::Extended;
use crate::fpinfo::FpInfo;

/// Invalid square root, such as sqrt(-1)
pub const NANSQRT: u32 = 1;
/// Invalid addition, such as +INF - +INF
pub const NANADD: u32 = 2;
/// Invalid division, such as 0/0
pub const NANDIV: u32 = 4;
/// Invalid multiply, such as 0 * INF
pub const NANMUL: u32 = 8;
/// Invalid rem or mod, such as x REM 0
pub const NANREM: u32 = 9;
/// Conversion of invalid ASCII string
pub const NANASCBIN: u32 = 17;
/// Comp NaN converted to floating
pub const NANCOMP: u32 = 20;
/// Attempt to create a NaN with zero code
pub const NANZERO: u32 = 21;
/// Invalid argument to trig routine
pub const NANTRIG: u32 = 33;
/// Invalid arg to inverse trig routine
pub const NANINVTRIG: u32 = 34;
/// Invalid argument to log routine
pub const NANLOG: u32 = 36;
/// Invalid argument to x^i or x^y routine
pub const NANPOWER: u32 = 37;
/// Invalid argument to financial function
pub const NANFINAN: u32 = 38;

/// Types that can encode a NaN carrying a SANE code.
pub trait MakeNan {
    /// Builds a NaN whose significand carries `code`.
    /// The code is masked to 16 bits; zero becomes [`NANZERO`].
    fn make_nan(code: u32) -> Self;
}

/// Builds a `T`-typed NaN carrying `code` in its significand.
pub fn make_nan<T: MakeNan>(code: u32) -> T {
    T::make_nan(code)
}

fn nan_code(code: u32) -> u32 {
    let code = code & 0xffff;
    if code == 0 {
        NANZERO
    } else {
        code
    }
}

impl MakeNan for Decimal {
    fn make_nan(code: u32) -> Self {
        Decimal {
            sgn: false,
            exp: 0,
            sig: format!("N{:04x}", nan_code(code)),
        }
    }
}

impl MakeNan for f32 {
    fn make_nan(code: u32) -> Self {
        let info = FpInfo {
            sign: false,
            one: true,
            exp: 0,
            sig: u64::from(nan_code(code)),
            frac: 23,
            nan: true,
            inf: false,
        };
        info.into()
    }
}

impl MakeNan for f64 {
    fn make_nan(code: u32) -> Self {
        let info = FpInfo {
            sign: false,
            one: true,
            exp: 0,
            sig: u64::from(nan_code(code)),
            frac: 52,
            nan: true,
            inf: false,
        };
        info.into()
    }
}

impl MakeNan for Extended {
    fn make_nan(code: u32) -> Self {
        Extended::nan(false, u64::from(nan_code(code)))
    }
}

impl MakeNan for Comp {
    // the comp NaN is a single bit pattern; the code does not survive
    fn make_nan(_code: u32) -> Self {
        Comp::from_bits(Comp::NAN)
    }
}
