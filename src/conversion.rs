use crate::format::format_significant;
use crate::table::{self, ConversionTable};

/// 화면 표시에 쓰는 기본 유효숫자 자릿수.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 6;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// 변환표에 없는 카테고리
    #[error("알 수 없는 카테고리: {0}")]
    UnknownCategory(String),
    /// 카테고리에 없는 단위
    #[error("{category} 카테고리에 없는 단위: {unit}")]
    InvalidUnit { category: String, unit: String },
    /// 유한하지 않은 입력값 (NaN, ±inf)
    #[error("유한한 숫자가 아닙니다: {0}")]
    InvalidValue(f64),
}

/// 변환 요청 한 건.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub value: f64,
}

impl ConversionRequest {
    pub fn new(
        category: impl Into<String>,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            category: category.into(),
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            value,
        }
    }
}

/// 변환 결과. `display`는 유효숫자 포맷을 적용한 값이다.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub value: f64,
    pub display: String,
    /// 정식 목표 단위 이름
    pub to_unit: &'static str,
    /// `1 X = k Y` 형태의 환산식. 온도 또는 같은 단위이면 없다.
    pub formula: Option<String>,
}

/// 내장 변환표로 값을 변환한다.
///
/// ```
/// use unit_converter::conversion::convert;
/// assert_eq!(convert("Length", "Meter", "Kilometer", 1000.0).unwrap(), 1.0);
/// ```
pub fn convert(
    category: &str,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    convert_in(table::builtin(), category, from_unit, to_unit, value)
}

/// 지정한 변환표로 값을 변환한다.
pub fn convert_in(
    table: &ConversionTable,
    category: &str,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue(value));
    }
    table
        .find_category(category)?
        .convert(from_unit, to_unit, value)
}

/// 선형 카테고리에서 두 단위가 다를 때 `1 X = k Y` 환산식을 만든다.
///
/// 계수는 표시 설정과 관계없이 항상 유효숫자 6자리로 쓴다.
pub fn formula(
    category: &str,
    from_unit: &str,
    to_unit: &str,
) -> Result<Option<String>, ConversionError> {
    let cat = table::builtin().find_category(category)?;
    let ratio = cat.ratio(from_unit, to_unit)?;
    Ok(ratio.map(|k| {
        let from = canonical(cat, from_unit);
        let to = canonical(cat, to_unit);
        format!(
            "1 {from} = {} {to}",
            format_significant(k, DEFAULT_SIGNIFICANT_DIGITS)
        )
    }))
}

fn canonical(cat: &table::CategoryTable, unit: &str) -> &'static str {
    cat.resolve_unit(unit)
        .ok()
        .and_then(|i| cat.unit_name(i))
        .unwrap_or_default()
}

/// 요청 한 건을 처리해 값, 표시 문자열, 환산식을 함께 돌려준다.
///
/// `digits`는 `display`에만 적용되며 1..=17로 제한된다.
pub fn evaluate(
    request: &ConversionRequest,
    digits: usize,
) -> Result<ConversionResult, ConversionError> {
    let value = convert(
        &request.category,
        &request.from_unit,
        &request.to_unit,
        request.value,
    )?;
    let cat = table::builtin().find_category(&request.category)?;
    let formula = formula(&request.category, &request.from_unit, &request.to_unit)?;
    Ok(ConversionResult {
        value,
        display: format_significant(value, digits),
        to_unit: canonical(cat, &request.to_unit),
        formula,
    })
}
