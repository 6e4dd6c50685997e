use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 변환 가능한 단위 묶음(카테고리)을 나타낸다.
///
/// 선언 순서가 곧 화면/목록에 표시되는 순서이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Temperature,
    Weight,
    Volume,
    Area,
    Speed,
    Time,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Length,
        Category::Temperature,
        Category::Weight,
        Category::Volume,
        Category::Area,
        Category::Speed,
        Category::Time,
    ];

    /// 표시 및 조회에 쓰는 정식 이름.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Temperature => "Temperature",
            Category::Weight => "Weight",
            Category::Volume => "Volume",
            Category::Area => "Area",
            Category::Speed => "Speed",
            Category::Time => "Time",
        }
    }

    /// 번역 키 (`category.length` 등).
    pub fn label_key(&self) -> &'static str {
        match self {
            Category::Length => "category.length",
            Category::Temperature => "category.temperature",
            Category::Weight => "category.weight",
            Category::Volume => "category.volume",
            Category::Area => "category.area",
            Category::Speed => "category.speed",
            Category::Time => "category.time",
        }
    }

    /// 대소문자를 무시하고 이름/별칭으로 카테고리를 찾는다.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "length" | "distance" => Some(Category::Length),
            "temperature" | "temp" => Some(Category::Temperature),
            "weight" | "mass" => Some(Category::Weight),
            "volume" => Some(Category::Volume),
            "area" => Some(Category::Area),
            "speed" | "velocity" => Some(Category::Speed),
            "time" | "duration" => Some(Category::Time),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = crate::conversion::ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_name(s)
            .ok_or_else(|| crate::conversion::ConversionError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_name() {
        for cat in Category::ALL {
            assert_eq!(Category::from_name(cat.name()), Some(cat));
        }
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(Category::from_name("MASS"), Some(Category::Weight));
        assert_eq!(Category::from_name(" velocity "), Some(Category::Speed));
        assert_eq!(Category::from_name("temp"), Some(Category::Temperature));
        assert_eq!(Category::from_name("Distance"), Some(Category::Length));
        assert_eq!(Category::from_name("duration"), Some(Category::Time));
        assert!("Energy".parse::<Category>().is_err());
    }
}
