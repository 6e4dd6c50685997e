use super::LinearUnit;

/// 길이 단위. 기준은 미터이다.
pub const UNITS: &[LinearUnit] = &[
    LinearUnit::new("Nanometer", &["nm"], 1e-9),
    LinearUnit::new("Micrometer", &["um", "µm"], 1e-6),
    LinearUnit::new("Millimeter", &["mm"], 1e-3),
    LinearUnit::new("Centimeter", &["cm"], 1e-2),
    LinearUnit::new("Meter", &["m", "metre"], 1.0),
    LinearUnit::new("Kilometer", &["km"], 1e3),
    LinearUnit::new("Inch", &["in", "\""], 0.0254),
    LinearUnit::new("Foot", &["ft", "'"], 0.3048),
    LinearUnit::new("Yard", &["yd"], 0.9144),
    LinearUnit::new("Mile", &["mi"], 1609.34),
    LinearUnit::new("Nautical mile", &["nmi"], 1852.0),
];
