//! 카테고리 → 단위 목록 변환표.
//!
//! 내장 변환표는 컴파일 타임 `static` 이며 실행 중에는 바뀌지 않는다.

use std::collections::HashSet;

use crate::category::Category;
use crate::conversion::ConversionError;
use crate::units::{self, temperature, AffineUnit, LinearUnit, UnitDef};

/// 한 카테고리의 단위 목록. 선형/아핀을 카테고리 단위로 구분한다.
#[derive(Debug, Clone, Copy)]
pub enum CategoryUnits {
    /// 공통 기준 단위 대비 배율.
    Linear(&'static [LinearUnit]),
    /// 섭씨를 거치는 아핀 변환 (온도).
    Affine(&'static [AffineUnit]),
}

/// 카테고리 하나와 그 단위들.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTable {
    pub category: Category,
    pub units: CategoryUnits,
}

/// 전체 변환표. 카테고리 순서가 곧 표시 순서이다.
#[derive(Debug, Clone, Copy)]
pub struct ConversionTable {
    categories: &'static [CategoryTable],
}

/// 변환표 불변식 위반.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("카테고리 중복: {0}")]
    DuplicateCategory(Category),
    #[error("{category} 카테고리에 단위가 없습니다")]
    EmptyCategory { category: Category },
    #[error("{category} 카테고리의 이름/기호 중복: {key}")]
    DuplicateUnit { category: Category, key: String },
    #[error("{category} 카테고리의 {unit} 배율이 양의 유한수가 아닙니다: {factor}")]
    InvalidFactor {
        category: Category,
        unit: &'static str,
        factor: f64,
    },
}

static BUILTIN_CATEGORIES: [CategoryTable; 7] = [
    CategoryTable {
        category: Category::Length,
        units: CategoryUnits::Linear(units::length::UNITS),
    },
    CategoryTable {
        category: Category::Temperature,
        units: CategoryUnits::Affine(temperature::UNITS),
    },
    CategoryTable {
        category: Category::Weight,
        units: CategoryUnits::Linear(units::mass::UNITS),
    },
    CategoryTable {
        category: Category::Volume,
        units: CategoryUnits::Linear(units::volume::UNITS),
    },
    CategoryTable {
        category: Category::Area,
        units: CategoryUnits::Linear(units::area::UNITS),
    },
    CategoryTable {
        category: Category::Speed,
        units: CategoryUnits::Linear(units::velocity::UNITS),
    },
    CategoryTable {
        category: Category::Time,
        units: CategoryUnits::Linear(units::time::UNITS),
    },
];

static BUILTIN: ConversionTable = ConversionTable {
    categories: &BUILTIN_CATEGORIES,
};

/// 내장 변환표.
pub fn builtin() -> &'static ConversionTable {
    &BUILTIN
}

impl ConversionTable {
    /// 임의의 정적 카테고리 목록으로 변환표를 만든다. 검증은 `validate`로 한다.
    pub const fn new(categories: &'static [CategoryTable]) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &'static [CategoryTable] {
        self.categories
    }

    pub fn category_names(&self) -> Vec<&'static str> {
        self.categories.iter().map(|c| c.category.name()).collect()
    }

    pub fn get(&self, category: Category) -> Option<&'static CategoryTable> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// 이름(대소문자 무시, 별칭 허용)으로 카테고리를 찾는다.
    pub fn find_category(&self, name: &str) -> Result<&'static CategoryTable, ConversionError> {
        Category::from_name(name)
            .and_then(|cat| self.get(cat))
            .ok_or_else(|| ConversionError::UnknownCategory(name.to_string()))
    }

    /// 카테고리/단위 불변식을 검사한다.
    pub fn validate(&self) -> Result<(), TableError> {
        let mut seen = HashSet::new();
        for table in self.categories {
            if !seen.insert(table.category) {
                return Err(TableError::DuplicateCategory(table.category));
            }
            table.validate()?;
        }
        Ok(())
    }
}

impl CategoryTable {
    pub fn len(&self) -> usize {
        match self.units {
            CategoryUnits::Linear(u) => u.len(),
            CategoryUnits::Affine(u) => u.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_linear(&self) -> bool {
        matches!(self.units, CategoryUnits::Linear(_))
    }

    fn unit_defs(&self) -> Vec<&'static dyn UnitDef> {
        match self.units {
            CategoryUnits::Linear(u) => u.iter().map(|x| x as &dyn UnitDef).collect(),
            CategoryUnits::Affine(u) => u.iter().map(|x| x as &dyn UnitDef).collect(),
        }
    }

    /// 표시 순서대로의 단위 정식 이름.
    pub fn unit_names(&self) -> Vec<&'static str> {
        self.unit_defs().iter().map(|u| u.name()).collect()
    }

    /// (정식 이름, 기호 목록) 쌍.
    pub fn unit_entries(&self) -> Vec<(&'static str, &'static [&'static str])> {
        self.unit_defs()
            .iter()
            .map(|u| (u.name(), u.symbols()))
            .collect()
    }

    /// 단위 이름을 인덱스로 해석한다.
    ///
    /// 정식 이름 정확 일치 → 대소문자 무시 이름/기호 일치 순으로 찾는다.
    pub fn resolve_unit(&self, name: &str) -> Result<usize, ConversionError> {
        let defs = self.unit_defs();
        let key = name.trim();
        defs.iter()
            .position(|u| u.name() == key)
            .or_else(|| defs.iter().position(|u| u.matches_loose(key)))
            .ok_or_else(|| ConversionError::InvalidUnit {
                category: self.category.name().to_string(),
                unit: name.to_string(),
            })
    }

    /// 인덱스에 해당하는 정식 이름.
    pub fn unit_name(&self, index: usize) -> Option<&'static str> {
        match self.units {
            CategoryUnits::Linear(u) => u.get(index).map(|x| x.name),
            CategoryUnits::Affine(u) => u.get(index).map(|x| x.name),
        }
    }

    /// 선형 카테고리의 배율. 아핀 카테고리이면 `None`.
    pub fn factor(&self, unit: &str) -> Option<f64> {
        match self.units {
            CategoryUnits::Linear(u) => {
                let idx = self.resolve_unit(unit).ok()?;
                u.get(idx).map(|x| x.factor)
            }
            CategoryUnits::Affine(_) => None,
        }
    }

    /// 값을 변환한다. 선형 카테고리에서 같은 단위면 입력을 그대로 돌려준다.
    pub fn convert(&self, from: &str, to: &str, value: f64) -> Result<f64, ConversionError> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidValue(value));
        }
        let from_idx = self.resolve_unit(from)?;
        let to_idx = self.resolve_unit(to)?;
        let out = match self.units {
            CategoryUnits::Linear(u) => {
                if from_idx == to_idx {
                    value
                } else {
                    value * u[from_idx].factor / u[to_idx].factor
                }
            }
            CategoryUnits::Affine(u) => {
                temperature::convert_temperature(value, &u[from_idx], &u[to_idx])
            }
        };
        tracing::debug!(
            category = self.category.name(),
            from,
            to,
            value,
            result = out,
            "converted"
        );
        Ok(out)
    }

    /// `1 from = ratio to` 의 배율. 아핀 카테고리이거나 같은 단위면 `None`.
    pub fn ratio(&self, from: &str, to: &str) -> Result<Option<f64>, ConversionError> {
        let from_idx = self.resolve_unit(from)?;
        let to_idx = self.resolve_unit(to)?;
        match self.units {
            CategoryUnits::Linear(u) if from_idx != to_idx => {
                Ok(Some(u[from_idx].factor / u[to_idx].factor))
            }
            _ => Ok(None),
        }
    }

    fn validate(&self) -> Result<(), TableError> {
        if self.is_empty() {
            return Err(TableError::EmptyCategory {
                category: self.category,
            });
        }
        if let CategoryUnits::Linear(u) = self.units {
            if let Some(bad) = u.iter().find(|x| !(x.factor.is_finite() && x.factor > 0.0)) {
                return Err(TableError::InvalidFactor {
                    category: self.category,
                    unit: bad.name,
                    factor: bad.factor,
                });
            }
        }
        let mut keys = HashSet::new();
        for def in self.unit_defs() {
            let names = std::iter::once(def.name()).chain(def.symbols().iter().copied());
            for key in names {
                if !keys.insert(key.to_lowercase()) {
                    return Err(TableError::DuplicateUnit {
                        category: self.category,
                        key: key.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static BAD_FACTOR: [LinearUnit; 2] = [
        LinearUnit::new("One", &[], 1.0),
        LinearUnit::new("Zero", &[], 0.0),
    ];
    static CLASHING: [LinearUnit; 2] = [
        LinearUnit::new("Meter", &["m"], 1.0),
        LinearUnit::new("Mile", &["M"], 1609.34),
    ];
    static BAD_TABLE: [CategoryTable; 1] = [CategoryTable {
        category: Category::Length,
        units: CategoryUnits::Linear(&BAD_FACTOR),
    }];
    static CLASH_TABLE: [CategoryTable; 1] = [CategoryTable {
        category: Category::Length,
        units: CategoryUnits::Linear(&CLASHING),
    }];
    static DUP_TABLE: [CategoryTable; 2] = [
        CategoryTable {
            category: Category::Time,
            units: CategoryUnits::Linear(units::time::UNITS),
        },
        CategoryTable {
            category: Category::Time,
            units: CategoryUnits::Linear(units::time::UNITS),
        },
    ];

    #[test]
    fn builtin_table_is_valid() {
        builtin().validate().unwrap();
    }

    #[test]
    fn zero_factor_is_rejected() {
        let err = ConversionTable::new(&BAD_TABLE).validate().unwrap_err();
        assert!(matches!(err, TableError::InvalidFactor { unit: "Zero", .. }));
    }

    #[test]
    fn case_insensitive_symbol_clash_is_rejected() {
        let err = ConversionTable::new(&CLASH_TABLE).validate().unwrap_err();
        assert!(matches!(err, TableError::DuplicateUnit { .. }));
    }

    #[test]
    fn duplicate_category_is_rejected() {
        let err = ConversionTable::new(&DUP_TABLE).validate().unwrap_err();
        assert_eq!(err, TableError::DuplicateCategory(Category::Time));
    }

    #[test]
    fn resolve_prefers_exact_name_then_symbol() {
        let length = builtin().get(Category::Length).unwrap();
        assert_eq!(length.resolve_unit("Meter").unwrap(), 4);
        assert_eq!(length.resolve_unit("meter").unwrap(), 4);
        assert_eq!(length.resolve_unit("km").unwrap(), 5);
        assert_eq!(length.resolve_unit("nautical MILE").unwrap(), 10);
        assert!(length.resolve_unit("furlong").is_err());
    }

    #[test]
    fn temperature_has_no_factor_or_ratio() {
        let temp = builtin().get(Category::Temperature).unwrap();
        assert!(!temp.is_linear());
        assert_eq!(temp.factor("Celsius"), None);
        assert_eq!(temp.ratio("Celsius", "Kelvin").unwrap(), None);
    }
}
