/*!
The 80-bit extended-precision interchange type.

This module implements the extended binary width with the [`Extended`]
type: the x87 encoding of a sign, a 15-bit biased exponent and a
64-bit significand with an explicit integer bit, padded to 12 or 16
bytes on real hardware. Every decimal conversion in the crate pivots
through this width, the way the original SANE implementation pivoted
through `long double`.
*/

mod number;
mod round;

pub use number::Extended;
pub use round::PREC;
