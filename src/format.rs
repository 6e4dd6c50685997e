//! 결과 표시용 숫자 포맷.

/// f64를 구분하는 데 충분한 최대 유효숫자 자릿수.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// printf `%.{digits}g` 와 같은 규칙으로 유효숫자 `digits` 자리 문자열을 만든다.
///
/// 지수가 `-4 <= X < digits` 이면 고정소수점, 아니면 `1e+06` 처럼
/// 두 자리 이상의 부호 있는 지수를 쓴다. 끝의 0과 소수점은 지운다.
/// `digits`는 `1..=MAX_SIGNIFICANT_DIGITS`로 잘라 쓴다.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.into();
    }
    let precision = digits.clamp(1, MAX_SIGNIFICANT_DIGITS);
    // 반올림 후의 지수를 얻기 위해 먼저 지수 표기로 만든다.
    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exponent: i32 = exp.parse().unwrap_or(0);

    if exponent >= -4 && exponent < precision as i32 {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(format!("{value:.decimals$}"))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa.to_string()),
            exponent.unsigned_abs()
        )
    }
}

fn trim_fraction(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::format_significant as g6;

    fn g(v: f64) -> String {
        g6(v, 6)
    }

    #[test]
    fn fixed_notation_range() {
        assert_eq!(g(0.001), "0.001");
        assert_eq!(g(1.0), "1");
        assert_eq!(g(3600.0), "3600");
        assert_eq!(g(-40.0), "-40");
        assert_eq!(g(0.0), "0");
        assert_eq!(g(273.15), "273.15");
        assert_eq!(g(123456.7), "123457");
        assert_eq!(g(0.0001), "0.0001");
    }

    #[test]
    fn rounds_to_six_significant_digits() {
        assert_eq!(g(1.0 / 0.453592), "2.20462");
        assert_eq!(g(2.0 / 3.0), "0.666667");
    }

    #[test]
    fn scientific_notation_outside_range() {
        assert_eq!(g(1e-9), "1e-09");
        assert_eq!(g(0.00001), "1e-05");
        assert_eq!(g(1e6), "1e+06");
        assert_eq!(g(999999.5), "1e+06");
        assert_eq!(g(3.154e9), "3.154e+09");
        assert_eq!(g(-2.5e-7), "-2.5e-07");
        assert_eq!(g(1.5e100), "1.5e+100");
    }

    #[test]
    fn other_precisions_and_non_finite() {
        assert_eq!(g6(3.14159, 3), "3.14");
        assert_eq!(g6(1234.0, 2), "1.2e+03");
        assert_eq!(g6(7.0, 0), "7");
        assert_eq!(g(f64::NAN), "nan");
        assert_eq!(g(f64::INFINITY), "inf");
        assert_eq!(g(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn oversized_precision_is_capped_at_seventeen() {
        assert_eq!(g6(1.0 / 3.0, usize::MAX), g6(1.0 / 3.0, 17));
        assert_eq!(g6(0.1, 1000), "0.10000000000000001");
        assert_eq!(g6(1e300, usize::MAX), g6(1e300, 17));
    }
}
