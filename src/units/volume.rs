use super::LinearUnit;

/// 체적 단위. 기준은 세제곱미터이다. 미국 관용 단위는 US 정의를 따른다.
pub const UNITS: &[LinearUnit] = &[
    LinearUnit::new("Milliliter", &["ml"], 1e-6),
    LinearUnit::new("Liter", &["l", "litre"], 1e-3),
    LinearUnit::new("Cubic meter", &["m3", "m^3"], 1.0),
    LinearUnit::new("Teaspoon (US)", &["tsp"], 4.92892e-6),
    LinearUnit::new("Tablespoon (US)", &["tbsp"], 1.47868e-5),
    LinearUnit::new("Fluid ounce (US)", &["fl oz", "floz"], 2.95735e-5),
    LinearUnit::new("Cup (US)", &["cup"], 2.36588e-4),
    LinearUnit::new("Pint (US)", &["pt"], 4.73176e-4),
    LinearUnit::new("Quart (US)", &["qt"], 9.46353e-4),
    LinearUnit::new("Gallon (US)", &["gal"], 0.00378541),
    LinearUnit::new("Cubic inch", &["in3", "in^3"], 1.63871e-5),
    LinearUnit::new("Cubic foot", &["ft3", "ft^3", "cuft"], 0.0283168),
    LinearUnit::new("Cubic yard", &["yd3", "yd^3"], 0.764555),
];
