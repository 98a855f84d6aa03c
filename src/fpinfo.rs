/*!
Field-level view of the binary floating-point widths.

An [`FpInfo`] holds the sign, leading-one bit, unbiased exponent and
significand of one binary floating-point number, together with the
width of the fraction field the significand was read from. It converts
losslessly from each of the three supported widths and reconstructs
any of them, rounding half-to-even when the target is narrower and
saturating to an infinity past the target's range. NaN payloads travel
in the low bits of the significand and are truncated to whatever the
target's fraction field can hold.
*/

use crate::extended::Extended;

/// Encoding parameters of one binary width.
struct Encoding {
    /// fraction bits in the significand field
    frac: u32,
    /// smallest normal exponent
    emin: i32,
    /// largest finite exponent (also the bias)
    emax: i32,
    /// exponent applied to the all-zero exponent field
    den: i32,
    /// the leading one is stored rather than implied
    explicit_one: bool,
}

const SINGLE: Encoding = Encoding {
    frac: 23,
    emin: -126,
    emax: 127,
    den: -126,
    explicit_one: false,
};

const DOUBLE: Encoding = Encoding {
    frac: 52,
    emin: -1022,
    emax: 1023,
    den: -1022,
    explicit_one: false,
};

// The all-zero exponent field decodes to -16383, not the -16382 of the
// normal range; 80-bit denormals round-trip on that convention.
const EXTENDED: Encoding = Encoding {
    frac: 63,
    emin: -16382,
    emax: 16383,
    den: -16383,
    explicit_one: true,
};

/// A structured view of one binary floating-point number.
///
/// For a finite value the magnitude is
/// `(one * 2^frac + sig) * 2^(exp - frac)`. For binary32 `sig` holds
/// the 23-bit fraction in its low bits, for binary64 the 52-bit
/// fraction, and for the 80-bit extended format the low 63 bits of the
/// significand with the explicit integer bit split off into `one`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FpInfo {
    pub sign: bool,
    pub one: bool,
    pub exp: i32,
    pub sig: u64,
    /// fraction bits carried in `sig` (23, 52 or 63)
    pub frac: u32,
    pub nan: bool,
    pub inf: bool,
}

impl From<f32> for FpInfo {
    fn from(f: f32) -> Self {
        let i = f.to_bits();
        let mut info = FpInfo {
            sign: i >> 31 != 0,
            one: true,
            exp: ((i >> 23) & 0xff) as i32,
            sig: u64::from(i & 0x7f_ffff),
            frac: SINGLE.frac,
            nan: false,
            inf: false,
        };

        if info.exp == 255 {
            if info.sig == 0 {
                info.inf = true;
            } else {
                info.nan = true;
            }
            return info;
        }

        if info.exp == 0 {
            // 0 or denormalized
            info.one = false;
            info.exp = -126;
            return info;
        }

        info.exp -= 127; // bias
        info
    }
}

impl From<f64> for FpInfo {
    fn from(f: f64) -> Self {
        let i = f.to_bits();
        let mut info = FpInfo {
            sign: i >> 63 != 0,
            one: true,
            exp: ((i >> 52) & 0x7ff) as i32,
            sig: i & ((1u64 << 52) - 1),
            frac: DOUBLE.frac,
            nan: false,
            inf: false,
        };

        if info.exp == 2047 {
            if info.sig == 0 {
                info.inf = true;
            } else {
                info.nan = true;
            }
            return info;
        }

        if info.exp == 0 {
            // 0 or denormalized
            info.one = false;
            info.exp = -1022;
            return info;
        }

        info.exp -= 1023; // bias
        info
    }
}

impl From<Extended> for FpInfo {
    fn from(x: Extended) -> Self {
        let i = x.significand();
        let mut info = FpInfo {
            sign: x.signbit(),
            one: i >> 63 != 0,
            exp: x.exponent_field(),
            sig: i & ((1u64 << 63) - 1),
            frac: EXTENDED.frac,
            nan: false,
            inf: false,
        };

        if info.exp == 32767 {
            if info.sig == 0 {
                info.inf = true;
            } else {
                info.nan = true;
            }
            return info;
        }

        info.exp -= 16383;
        info
    }
}

impl FpInfo {
    /// Packs this view into the fields of the target encoding,
    /// returning `(sign, exponent field, significand field)`.
    fn encode(&self, enc: &Encoding) -> (bool, u32, u64) {
        let fmask = (1u64 << enc.frac) - 1;
        let special = (2 * enc.emax + 1) as u32;
        let int_bit = if enc.explicit_one { 1u64 << 63 } else { 0 };

        if self.nan {
            let mut payload = self.sig & fmask;
            if payload == 0 {
                // keep it a NaN: raise the quiet bit
                payload = 1 << (enc.frac - 1);
            }
            return (self.sign, special, int_bit | payload);
        }
        if self.inf {
            return (self.sign, special, int_bit);
        }

        let c = (u64::from(self.one) << self.frac) | (self.sig & ((1u64 << self.frac) - 1));
        if c == 0 {
            return (self.sign, 0, 0);
        }

        let lsb = self.exp - self.frac as i32;
        let msb = 63 - c.leading_zeros() as i32;
        let mut e = lsb + msb;
        if e > enc.emax {
            return (self.sign, special, int_bit);
        }

        // re-anchor the significand at the target's fraction width,
        // rounding half-to-even on the dropped bits
        let subnormal = e < enc.emin;
        let dst_lsb = if subnormal {
            enc.den - enc.frac as i32
        } else {
            e - enc.frac as i32
        };
        let sh = dst_lsb - lsb;
        let mut c2 = u128::from(c);
        if sh > 0 {
            if sh >= 128 {
                c2 = 0;
            } else {
                let rem = c2 & ((1u128 << sh) - 1);
                let half = 1u128 << (sh - 1);
                c2 >>= sh;
                if rem > half || (rem == half && c2 & 1 == 1) {
                    c2 += 1;
                }
            }
        } else {
            c2 <<= (-sh) as u32;
        }

        // rounding may carry into the next binade
        if !subnormal && (c2 >> (enc.frac + 1)) != 0 {
            c2 >>= 1;
            e += 1;
            if e > enc.emax {
                return (self.sign, special, int_bit);
            }
        }

        if c2 == 0 {
            return (self.sign, 0, 0);
        }

        let sigc = c2 as u64;
        let one = (sigc >> enc.frac) & 1 == 1;
        let field = if enc.explicit_one {
            if subnormal {
                0
            } else {
                (e + enc.emax) as u32
            }
        } else if one {
            let e = if subnormal { enc.emin } else { e };
            (e + enc.emax) as u32
        } else {
            0
        };
        let sigf = if enc.explicit_one { sigc } else { sigc & fmask };
        (self.sign, field, sigf)
    }
}

impl From<FpInfo> for f32 {
    fn from(info: FpInfo) -> Self {
        let (sign, field, sig) = info.encode(&SINGLE);
        f32::from_bits((u32::from(sign) << 31) | (field << 23) | sig as u32)
    }
}

impl From<FpInfo> for f64 {
    fn from(info: FpInfo) -> Self {
        let (sign, field, sig) = info.encode(&DOUBLE);
        f64::from_bits((u64::from(sign) << 63) | (u64::from(field) << 52) | sig)
    }
}

impl From<FpInfo> for Extended {
    fn from(info: FpInfo) -> Self {
        let (sign, field, sig) = info.encode(&EXTENDED);
        Extended::from_parts(sign, field as u16, sig)
    }
}
