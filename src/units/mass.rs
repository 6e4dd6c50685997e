use super::LinearUnit;

/// 질량(무게) 단위. 기준은 킬로그램이다.
pub const UNITS: &[LinearUnit] = &[
    LinearUnit::new("Microgram", &["ug", "µg", "mcg"], 1e-9),
    LinearUnit::new("Milligram", &["mg"], 1e-6),
    LinearUnit::new("Gram", &["g"], 1e-3),
    LinearUnit::new("Kilogram", &["kg"], 1.0),
    LinearUnit::new("Metric ton", &["t", "tonne"], 1000.0),
    LinearUnit::new("Ounce", &["oz"], 0.0283495),
    LinearUnit::new("Pound", &["lb", "lbs", "lbm"], 0.453592),
    LinearUnit::new("Stone", &["st"], 6.35029),
    LinearUnit::new("Short ton", &["ton", "tn"], 907.185),
    LinearUnit::new("Long ton", &["lt"], 1016.05),
];
