use super::LinearUnit;

/// 속도 단위. 기준은 m/s 이다.
pub const UNITS: &[LinearUnit] = &[
    LinearUnit::new("Meter per second", &["m/s", "mps"], 1.0),
    LinearUnit::new("Kilometer per hour", &["km/h", "kph"], 0.277778),
    LinearUnit::new("Mile per hour", &["mph", "mi/h"], 0.44704),
    LinearUnit::new("Knot", &["kn", "kt"], 0.514444),
    LinearUnit::new("Foot per second", &["ft/s", "fps"], 0.3048),
];
