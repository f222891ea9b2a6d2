use logspace::LogValue;

#[test]
fn round_trip_preserves_signed_values() {
    let values = [
        1.0,
        -1.0,
        0.5,
        2.0,
        1e10,
        1e-10,
        -1e-10,
        std::f64::consts::PI,
        -std::f64::consts::PI,
        1e300,
        -1e300,
        1e-300,
    ];
    for v in values {
        let back = LogValue::from_f64(v).unwrap().to_f64();
        assert!(
            (back - v).abs() < v.abs() * 1e-12 + 1e-300,
            "from_f64({}) -> to_f64() = {}, diff = {}",
            v,
            back,
            (back - v).abs()
        );
    }
}

#[test]
fn round_trip_of_zero_is_exact() {
    let back = LogValue::from_f64(0.0).unwrap().to_f64();
    assert_eq!(back, 0.0);
    assert!(back.is_sign_positive());
}

#[test]
fn to_f64_overflows_for_extreme_magnitudes() {
    // Documented lossiness of de-logging: the stored value is fine, the
    // linear projection saturates.
    let huge = LogValue::from_ln(800.0, true).unwrap();
    assert_eq!(huge.to_f64(), f64::INFINITY);
    let neg_huge = LogValue::from_ln(800.0, false).unwrap();
    assert_eq!(neg_huge.to_f64(), f64::NEG_INFINITY);
    assert!(huge.ln_magnitude().is_finite());
}

#[test]
fn to_f64_underflows_to_zero_for_tiny_magnitudes() {
    let tiny = LogValue::from_ln(-800.0, true).unwrap();
    assert_eq!(tiny.to_f64(), 0.0);
    assert!(!tiny.is_zero());
}

#[test]
fn from_trait_delogs() {
    let v: f64 = LogValue::from_f64(-6.0).unwrap().into();
    assert!((v + 6.0).abs() < 1e-12);
}

#[test]
fn display_renders_zero_as_literal_zero() {
    assert_eq!(LogValue::ZERO.to_string(), "0");
}

#[test]
fn display_renders_exponential_notation() {
    assert_eq!(LogValue::ONE.to_string(), "exp(0)");
    assert_eq!(
        LogValue::from_ln(2.5, true).unwrap().to_string(),
        "exp(2.5)"
    );
    assert_eq!(
        LogValue::from_ln(2.5, false).unwrap().to_string(),
        "-exp(2.5)"
    );
}

#[test]
fn serde_round_trip_preserves_value() {
    let original = LogValue::from_f64(-3.5).unwrap();
    let json = serde_json::to_string(&original).unwrap();
    let restored: LogValue = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}
