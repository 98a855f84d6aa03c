/*!
`sanenum` implements the decimal-string interchange layer of the
Standard Apple Numeric Environment (SANE), as documented in the Apple
Numerics Manual.

The crate is a canonical, round-trippable bridge between binary
floating-point numbers (single, double and 80-bit extended precision),
the 64-bit [`Comp`] integer type with its reserved NaN encoding, and a
pair of external representations: the structured [`Decimal`] record of
sign, exponent and textual significand, and formatted strings in
either a scientific "floating" or a positional "fixed" style.

The public surface is the classic SANE operation set:
  [`str2dec`] parses a string into a decimal record,
  [`dec2str`] renders a record under a [`DecForm`],
  [`dec2x`] and [`x2dec`] convert between records and the
  [`Extended`] binary type,
  [`truncate`] rounds a significand in place, and
  [`make_nan`] builds a typed NaN carrying one of the documented
  [NaN codes][crate::nan].

Failures never raise: malformed input, overflow and underflow come
back as coded NaNs, signed infinities and signed zeros, and formatted
output longer than 80 characters is replaced by `"?"`. Everything is
plain data with value semantics; there is no global state.
*/

pub mod comp;
pub mod convert;
pub mod decimal;
pub mod extended;
pub mod fpinfo;
pub mod nan;

mod notation;

pub use crate::comp::Comp;
pub use crate::convert::{dec2x, x2dec};
pub use crate::decimal::{dec2str, str2dec, truncate, DecForm, Decimal, Style};
pub use crate::extended::Extended;
pub use crate::fpinfo::FpInfo;
pub use crate::nan::{make_nan, MakeNan};
