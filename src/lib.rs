//! 변환 엔진을 라이브러리로 분리하여 CLI 와 GUI 가 같은 로직을 쓰도록 한다.

pub mod app;
pub mod category;
pub mod config;
pub mod conversion;
pub mod format;
pub mod i18n;
pub mod table;
pub mod ui_cli;
pub mod units;

pub use category::Category;
pub use conversion::{convert, ConversionError, ConversionRequest, ConversionResult};
