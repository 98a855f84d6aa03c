use std::num::FpCategory;

use sanenum::{dec2str, make_nan, truncate, DecForm, Decimal, Style};

/// Floating-style rendering, page 34, table 3-6 of the manual.
#[test]
fn dec2str_float() {
    let cases = [
        (Decimal::new(false, -2, "123"), 3, " 1.23e+0"),
        (Decimal::new(true, -4, "123"), 3, "-1.23e-2"),
        (Decimal::new(false, 200, "123"), 1, " 1.23e+202"),
        (Decimal::new(true, 1000, "123"), 5, "-1.2300e+1002"),
        (Decimal::new(false, -30, "4"), 1, " 4e-30"),
        (Decimal::new(true, 0, "0"), 1, "-0e+0"),
        (
            Decimal::new(false, 0, "1"),
            30,
            " 1.00000000000000000000000000000e+0",
        ),
        (Decimal::new(false, 0, "1"), 76, "?"),
        (Decimal::new(true, 0, "1"), 76, "?"),
        (Decimal::new(false, -98, "N0024"), 5, " NAN(036)"),
        (Decimal::new(true, 103, "N0015"), 2, "-NAN(021)"),
        (Decimal::new(false, 0, "I"), 2, " INF"),
        (Decimal::new(true, -217, "I"), 2, "-INF"),
    ];

    for (d, digits, expected) in &cases {
        let df = DecForm::new(Style::Float, *digits);
        let actual = dec2str(&df, d);
        assert_eq!(
            &actual, expected,
            "formatting {:?} with {} digits: expected {:?}, actual {:?}",
            d, digits, expected, actual
        );
    }
}

/// Fixed-style rendering, same table.
#[test]
fn dec2str_fixed() {
    let cases = [
        (Decimal::new(false, -3, "12345"), 3, "12.345"),
        (Decimal::new(true, -3, "12345"), 3, "-12.345"),
        (Decimal::new(false, -3, "12345"), 5, "12.34500"),
        (Decimal::new(true, -5, "1234567"), 5, "-12.34567"),
        (Decimal::new(false, 0, "12345"), 0, "12345"),
        (Decimal::new(true, 3, "12345"), 0, "-12345000"),
        (Decimal::new(false, 2, "12345"), -2, "1234500"),
        (Decimal::new(true, 1, "12345"), -2, "-123450"),
        (Decimal::new(true, 0, "0"), 3, "-0.000"),
        (Decimal::new(true, 0, "0"), -3, "-0"),
        (Decimal::new(false, -5, "123"), 7, "0.0012300"),
        (Decimal::new(false, 74, "1"), 5, "?"),
        (Decimal::new(true, 74, "1"), 4, "?"),
        (Decimal::new(false, -98, "N0024"), 5, "NAN(036)"),
        (Decimal::new(true, 103, "N0015"), 2, "-NAN(021)"),
        (Decimal::new(false, 0, "I"), 2, "INF"),
        (Decimal::new(true, -217, "I"), 2, "-INF"),
    ];

    for (d, digits, expected) in &cases {
        let df = DecForm::new(Style::Fixed, *digits);
        let actual = dec2str(&df, d);
        assert_eq!(
            &actual, expected,
            "formatting {:?} with {} digits: expected {:?}, actual {:?}",
            d, digits, expected, actual
        );
    }
}

/// A NaN code outside 1..999 renders as NAN(000), and the hex tail is
/// read case-insensitively.
#[test]
fn dec2str_nan_codes() {
    let df = DecForm::new(Style::Fixed, 2);

    let big = Decimal::new(false, 0, "N4024");
    assert_eq!(dec2str(&df, &big), "NAN(000)");

    let empty = Decimal::new(false, 0, "N");
    assert_eq!(dec2str(&df, &empty), "NAN(000)");

    let mixed = Decimal::new(false, 0, "N00Ff");
    assert_eq!(dec2str(&df, &mixed), "NAN(255)");
}

#[test]
fn truncation() {
    // 99 -> 1e2
    let mut d = Decimal::new(false, 0, "99");
    truncate(&mut d, 1);
    assert_eq!(d, Decimal::new(false, 2, "1"));

    // 101 -> 1e2
    let mut d = Decimal::new(false, 0, "101");
    truncate(&mut d, 1);
    assert_eq!(d, Decimal::new(false, 2, "1"));

    // plain truncation, no carry
    let mut d = Decimal::new(false, 0, "1234567");
    truncate(&mut d, 3);
    assert_eq!(d, Decimal::new(false, 4, "123"));

    // carry rippling through nines
    let mut d = Decimal::new(false, 0, "995");
    truncate(&mut d, 2);
    assert_eq!(d, Decimal::new(false, 3, "1"));

    // the carry's trailing zero folds into the exponent: 1095 -> 110e1
    let mut d = Decimal::new(false, 0, "1095");
    truncate(&mut d, 3);
    assert_eq!(d, Decimal::new(false, 2, "11"));
}

#[test]
fn truncation_keeps_short_significands() {
    let mut d = Decimal::new(true, -3, "12");
    truncate(&mut d, 5);
    assert_eq!(d, Decimal::new(true, -3, "12"));

    // digit counts below one are clamped to one
    let mut d = Decimal::new(false, 0, "42");
    truncate(&mut d, 0);
    assert_eq!(d, Decimal::new(false, 1, "4"));
}

#[test]
fn truncation_cuts_specials() {
    let mut d = Decimal::new(false, 0, "N0024");
    truncate(&mut d, 2);
    assert_eq!(d.sig, "N0");
    assert_eq!(d.exp, 0);

    let mut d = Decimal::new(true, 0, "Ixxxx");
    truncate(&mut d, 1);
    assert_eq!(d.sig, "I");
}

#[test]
fn classification() {
    let vals = [
        Decimal::new(false, 0, ""),
        Decimal::new(false, 0, "0913"),
        Decimal::new(true, 3, "42"),
        Decimal::new(false, 0, "I"),
        Decimal::new(true, 0, "N0011"),
    ];

    let expected = [
        FpCategory::Zero,
        FpCategory::Zero,
        FpCategory::Normal,
        FpCategory::Infinite,
        FpCategory::Nan,
    ];
    for (val, &expected) in vals.iter().zip(expected.iter()) {
        let actual = val.classify();
        assert_eq!(
            actual, expected,
            "{:?} classified as {:?}, expected {:?}",
            val, actual, expected
        );
    }

    let expected = [true, true, true, false, false];
    for (val, &expected) in vals.iter().zip(expected.iter()) {
        assert_eq!(val.is_finite(), expected, "{:?} finiteness", val);
    }
}

#[test]
fn sign_handling() {
    // the sign of a NaN is not observable through signbit
    let nan = Decimal::new(true, 0, "N0011");
    assert!(!nan.signbit());

    let neg = Decimal::new(true, 0, "42");
    assert!(neg.signbit());
    assert!(!neg.abs().signbit());
    assert!(!neg.abs().sgn);
}

#[test]
fn make_nan_decimal() {
    let d: Decimal = make_nan(0xff);
    assert_eq!(d.sig, "N00ff");

    // a zero code is replaced by NANZERO (21 = 0x15)
    let zero: Decimal = make_nan(0);
    let nanzero: Decimal = make_nan(sanenum::nan::NANZERO);
    assert_eq!(zero, nanzero);
    assert_eq!(zero.sig, "N0015");

    // codes are masked to 16 bits
    let wide: Decimal = make_nan(0x1_0024);
    assert_eq!(wide.sig, "N0024");
}
