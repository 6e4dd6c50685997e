use super::LinearUnit;

/// 시간 단위. 기준은 초이다.
///
/// 월/년/10년/100년은 평균 달력 근사값(1년 = 3.154e7 s)을 그대로 쓴다.
/// 정확한 정의로 바꾸면 기존 출력과 달라진다.
pub const UNITS: &[LinearUnit] = &[
    LinearUnit::new("Nanosecond", &["ns"], 1e-9),
    LinearUnit::new("Microsecond", &["us", "µs"], 1e-6),
    LinearUnit::new("Millisecond", &["ms"], 1e-3),
    LinearUnit::new("Second", &["s", "sec"], 1.0),
    LinearUnit::new("Minute", &["min"], 60.0),
    LinearUnit::new("Hour", &["h", "hr"], 3600.0),
    LinearUnit::new("Day", &["d"], 86400.0),
    LinearUnit::new("Week", &["wk"], 604800.0),
    LinearUnit::new("Month", &["mo"], 2.628e6),
    LinearUnit::new("Year", &["yr", "y"], 3.154e7),
    LinearUnit::new("Decade", &[], 3.154e8),
    LinearUnit::new("Century", &[], 3.154e9),
];
