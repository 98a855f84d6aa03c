/*!
The decimal record and its string forms.

This module implements the canonical decimal representation with the
[`Decimal`] type: a sign, a decimal exponent and a textual significand
whose first character classifies the value. Around it sit the scanner
[`str2dec`], the formatter [`dec2str`] with its [`DecForm`] style
selector, and the significand rounding operation [`truncate`].
*/

mod format;
mod number;
mod parse;
mod round;

pub use format::dec2str;
pub use number::{DecForm, Decimal, Style};
pub use parse::str2dec;
pub use round::truncate;
