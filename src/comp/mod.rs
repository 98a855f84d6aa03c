/*!
The SANE `comp` type.

This module implements the 64-bit "computational" integer with the
[`Comp`] type: two's-complement storage where the most negative bit
pattern stands for NaN, conversions to and from the three binary
floating-point widths, and IEEE-unordered comparisons.
*/

mod number;
mod ops;

pub use number::Comp;
