//! 온도(아핀) 변환 회귀 테스트.
use unit_converter::conversion::{convert, evaluate};
use unit_converter::ConversionRequest;

const UNITS: [&str; 3] = ["Celsius", "Fahrenheit", "Kelvin"];

#[test]
fn celsius_zero_is_32_fahrenheit() {
    assert_eq!(convert("Temperature", "Celsius", "Fahrenheit", 0.0).unwrap(), 32.0);
}

#[test]
fn freezing_point_in_kelvin() {
    let k = convert("Temperature", "Fahrenheit", "Kelvin", 32.0).unwrap();
    assert!((k - 273.15).abs() < 1e-9, "k={k}");
}

#[test]
fn minus_forty_is_shared_by_celsius_and_fahrenheit() {
    let f = convert("Temperature", "Celsius", "Fahrenheit", -40.0).unwrap();
    assert!((f + 40.0).abs() < 1e-12);
}

#[test]
fn same_unit_round_trips_through_celsius() {
    for unit in UNITS {
        for x in [-459.67, -40.0, 0.0, 36.6, 1000.0] {
            let out = convert("Temperature", unit, unit, x).unwrap();
            assert!((out - x).abs() < 1e-9, "{unit}: {x} -> {out}");
        }
    }
}

#[test]
fn celsius_identity_is_exact() {
    assert_eq!(convert("Temperature", "Celsius", "Celsius", 21.3).unwrap(), 21.3);
}

#[test]
fn symbols_are_accepted() {
    let c = convert("temp", "°F", "C", 212.0).unwrap();
    assert!((c - 100.0).abs() < 1e-9);
    let k = convert("Temperature", "c", "k", -273.15).unwrap();
    assert!(k.abs() < 1e-9);
}

#[test]
fn temperature_results_have_no_formula() {
    let req = ConversionRequest::new("Temperature", "Kelvin", "Celsius", 300.0);
    let res = evaluate(&req, 6).unwrap();
    assert_eq!(res.display, "26.85");
    assert_eq!(res.formula, None);
}
