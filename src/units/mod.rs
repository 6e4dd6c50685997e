//! 카테고리별 단위 정의 모음.
//!
//! 선형 카테고리는 기준 단위 대비 배율 하나로, 온도는 섭씨를 거치는
//! 아핀 변환 한 쌍으로 표현한다.

pub mod area;
pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;
pub mod velocity;
pub mod volume;

/// 배율 하나로 기준 단위와 연결되는 단위. `기준값 = 입력 × factor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearUnit {
    pub name: &'static str,
    pub symbols: &'static [&'static str],
    pub factor: f64,
}

impl LinearUnit {
    pub const fn new(name: &'static str, symbols: &'static [&'static str], factor: f64) -> Self {
        Self {
            name,
            symbols,
            factor,
        }
    }
}

/// 오프셋이 필요한 단위. 섭씨로 정규화한 뒤 목표 단위로 보낸다.
#[derive(Debug, Clone, Copy)]
pub struct AffineUnit {
    pub name: &'static str,
    pub symbols: &'static [&'static str],
    pub to_celsius: fn(f64) -> f64,
    pub from_celsius: fn(f64) -> f64,
}

/// 단위 정의의 공통 조회 인터페이스.
pub trait UnitDef {
    fn name(&self) -> &'static str;
    fn symbols(&self) -> &'static [&'static str];

    /// 정식 이름(대소문자 무시) 또는 기호가 일치하는지 확인한다.
    fn matches_loose(&self, s: &str) -> bool {
        self.name().eq_ignore_ascii_case(s)
            || self
                .symbols()
                .iter()
                .any(|sym| sym.eq_ignore_ascii_case(s))
    }
}

impl UnitDef for LinearUnit {
    fn name(&self) -> &'static str {
        self.name
    }

    fn symbols(&self) -> &'static [&'static str] {
        self.symbols
    }
}

impl UnitDef for AffineUnit {
    fn name(&self) -> &'static str {
        self.name
    }

    fn symbols(&self) -> &'static [&'static str] {
        self.symbols
    }
}
