use super::LinearUnit;

/// 면적 단위. 기준은 제곱미터이다.
pub const UNITS: &[LinearUnit] = &[
    LinearUnit::new("Square millimeter", &["mm2", "mm^2"], 1e-6),
    LinearUnit::new("Square centimeter", &["cm2", "cm^2"], 1e-4),
    LinearUnit::new("Square meter", &["m2", "m^2", "sqm"], 1.0),
    LinearUnit::new("Hectare", &["ha"], 10000.0),
    LinearUnit::new("Square kilometer", &["km2", "km^2"], 1e6),
    LinearUnit::new("Square inch", &["in2", "in^2"], 0.00064516),
    LinearUnit::new("Square foot", &["ft2", "ft^2", "sqft"], 0.092903),
    LinearUnit::new("Square yard", &["yd2", "yd^2"], 0.836127),
    LinearUnit::new("Acre", &["ac"], 4046.86),
    LinearUnit::new("Square mile", &["mi2", "mi^2"], 2.59e6),
];
