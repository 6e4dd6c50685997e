use super::AffineUnit;

/// 온도 단위. 배율 하나로 표현할 수 없으므로 섭씨를 거쳐 변환한다.
pub const UNITS: &[AffineUnit] = &[
    AffineUnit {
        name: "Celsius",
        symbols: &["C", "°C", "degC"],
        to_celsius: identity,
        from_celsius: identity,
    },
    AffineUnit {
        name: "Fahrenheit",
        symbols: &["F", "°F", "degF"],
        to_celsius: fahrenheit_to_celsius,
        from_celsius: celsius_to_fahrenheit,
    },
    AffineUnit {
        name: "Kelvin",
        symbols: &["K"],
        to_celsius: kelvin_to_celsius,
        from_celsius: celsius_to_kelvin,
    },
];

const KELVIN_OFFSET: f64 = 273.15;

fn identity(v: f64) -> f64 {
    v
}

fn fahrenheit_to_celsius(v: f64) -> f64 {
    (v - 32.0) * 5.0 / 9.0
}

fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn kelvin_to_celsius(v: f64) -> f64 {
    v - KELVIN_OFFSET
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + KELVIN_OFFSET
}

/// 두 온도 단위 사이를 변환한다. 같은 단위여도 섭씨 왕복을 그대로 거친다.
pub fn convert_temperature(value: f64, from: &AffineUnit, to: &AffineUnit) -> f64 {
    let c = (from.to_celsius)(value);
    (to.from_celsius)(c)
}
