use sanenum::{dec2str, dec2x, make_nan, x2dec, DecForm, Decimal, Extended, Style};

#[test]
fn dec2x_finite() {
    let cases = [
        (Decimal::new(false, 0, "0"), 0.0f64),
        (Decimal::new(false, 0, "1"), 1.0),
        (Decimal::new(false, 1, "1"), 10.0),
        (Decimal::new(false, -2, "625"), 6.25),
        (Decimal::new(true, -1, "5"), -0.5),
        (Decimal::new(false, 0, "123456789"), 123456789.0),
    ];

    for (d, expected) in &cases {
        let x = dec2x(d);
        assert_eq!(
            f64::from(x),
            *expected,
            "dec2x of {:?}: expected {}, actual {}",
            d,
            expected,
            f64::from(x)
        );
    }
}

#[test]
fn dec2x_specials() {
    let x = dec2x(&Decimal::new(false, 0, "I"));
    assert!(x.is_infinite() && !x.signbit());

    let x = dec2x(&Decimal::new(true, 0, "I"));
    assert!(x.is_infinite() && x.signbit());

    let x = dec2x(&Decimal::new(false, 0, "N0001"));
    assert!(x.is_nan() && !x.signbit());
    assert_eq!(x.nan_payload(), Some(1));

    let x = dec2x(&Decimal::new(true, 0, "N0001"));
    assert!(x.is_nan() && x.signbit());

    // the code survives the hex tail
    let x = dec2x(&Decimal::new(false, 0, "N00ff"));
    assert_eq!(x.nan_payload(), Some(0xff));
}

/// Exponents beyond the format saturate: huge positive to a signed
/// infinity, huge negative to a signed zero.
#[test]
fn dec2x_saturation() {
    let x = dec2x(&Decimal::new(false, 5000, "1"));
    assert!(x.is_infinite() && !x.signbit());

    let x = dec2x(&Decimal::new(true, 5000, "1"));
    assert!(x.is_infinite() && x.signbit());

    let x = dec2x(&Decimal::new(false, -5000, "1"));
    assert!(x.is_zero() && !x.signbit());

    let x = dec2x(&Decimal::new(true, -5000, "1"));
    assert!(x.is_zero() && x.signbit());
}

/// Page 38: a significand with a leading zero classifies as zero no
/// matter what follows.
#[test]
fn dec2x_leading_zero_quirk() {
    let x = dec2x(&Decimal::new(false, 0, "0913"));
    assert!(x.is_zero());
    assert!(!x.signbit());
}

#[test]
fn x2dec_fixed() {
    let df = DecForm::new(Style::Fixed, 6);
    let d = x2dec(&Extended::from(1.0 / 16.0), &df);
    assert!(!d.sgn);
    assert_eq!(d.exp, -6);
    assert_eq!(d.sig, "62500");

    let df = DecForm::new(Style::Fixed, 2);
    let d = x2dec(&Extended::from(1234.0), &df);
    assert!(!d.sgn);
    assert_eq!(d.exp, -2);
    assert_eq!(d.sig, "123400");

    // digits = 0 leaves a bare integer part
    let df = DecForm::new(Style::Fixed, 0);
    let d = x2dec(&Extended::from(120i64), &df);
    assert!(!d.sgn);
    assert_eq!(d.exp, 0);
    assert_eq!(d.sig, "120");
}

#[test]
fn x2dec_float() {
    let df = DecForm::new(Style::Float, 2);
    let d = x2dec(&Extended::from(1.0 / 16.0), &df);
    assert!(!d.sgn);
    assert_eq!(d.exp, -3);
    assert_eq!(d.sig, "62");

    let df = DecForm::new(Style::Float, 3);
    let d = x2dec(&Extended::from(1234.0), &df);
    assert_eq!(d.exp, 1);
    assert_eq!(d.sig, "123");

    let df = DecForm::new(Style::Float, 4);
    let d = x2dec(&Extended::from(-2.5), &df);
    assert!(d.sgn);
    assert_eq!(d.exp, -3);
    assert_eq!(d.sig, "2500");
}

#[test]
fn x2dec_specials() {
    let df = DecForm::new(Style::Fixed, 2);

    let d = x2dec(&Extended::zero(false), &df);
    assert_eq!(d, Decimal::new(false, 0, "0"));

    let d = x2dec(&Extended::from(-0.0f64), &df);
    assert_eq!(d, Decimal::new(true, 0, "0"));

    let d = x2dec(&Extended::infinity(true), &df);
    assert_eq!(d, Decimal::new(true, 0, "I"));

    let nan: Extended = make_nan(36);
    let d = x2dec(&nan, &df);
    assert_eq!(d.sig, "N0024");
    assert!(!d.sgn);
}

/// Page 33: scale an x2dec result by hand, then render it.
#[test]
fn x2dec_then_dec2str() {
    let mut df = DecForm::new(Style::Fixed, 0);
    let mut d = x2dec(&Extended::from(120i64), &df);
    d.exp -= 2; // divide by 100
    df.digits = 2;
    assert_eq!(dec2str(&df, &d), "1.20");
}

/// The formatter reproduces the emitter's text for x2dec output, so a
/// decimal produced under a decform renders cleanly under it.
#[test]
fn x2dec_dec2str_agreement() {
    let df = DecForm::new(Style::Fixed, 6);
    let d = x2dec(&Extended::from(1.0 / 16.0), &df);
    assert_eq!(dec2str(&df, &d), "0.062500");

    let df = DecForm::new(Style::Fixed, 3);
    let d = x2dec(&Extended::from(-12.25), &df);
    assert_eq!(dec2str(&df, &d), "-12.250");
}

/// Nineteen significant digits are enough to carry any double-width
/// value through the decimal record and back.
#[test]
fn round_trip_through_decimal() {
    let vals = [
        1.0f64,
        -1.0,
        0.5,
        1.0 / 3.0,
        std::f64::consts::PI,
        6.25e-2,
        1234.5678,
        1e10,
        -9.109383e-31,
        1.7976931348623157e308,
    ];

    let df = DecForm::new(Style::Float, 19);
    for &v in &vals {
        let d = x2dec(&Extended::from(v), &df);
        let back = dec2x(&d);
        assert_eq!(
            f64::from(back),
            v,
            "{} did not survive the round trip (got {:?})",
            v,
            d
        );
    }
}
