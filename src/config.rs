use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::category::Category;
use crate::conversion::DEFAULT_SIGNIFICANT_DIGITS;

/// 기본 설정 파일 이름. 작업 디렉터리 기준이다.
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 누락된 항목은 기본값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI 언어 코드 (auto / en-us / ko-kr ...)
    pub language: String,
    /// 외부 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// 결과 표시 유효숫자
    pub significant_digits: usize,
    /// 시작 시 선택되는 카테고리
    pub default_category: Category,
    /// GUI 창 불투명도 (0.3 ~ 1.0)
    pub window_alpha: f32,
    pub always_on_top: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            default_category: Category::Length,
            window_alpha: 1.0,
            always_on_top: false,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_from(Path::new(CONFIG_FILE))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값으로 만들어 저장한다.
pub fn load_or_default_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg.sanitized())
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        tracing::info!(path = %path.display(), "created default config");
        Ok(cfg)
    }
}

/// 파일이 있으면 읽고, 없으면 기본값을 돌려준다. 파일을 만들지 않는다.
pub fn load_if_exists(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg.sanitized())
    } else {
        Ok(Config::default())
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self, Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }

    /// 범위를 벗어난 값을 보정한다.
    pub fn sanitized(mut self) -> Self {
        self.significant_digits = self.significant_digits.clamp(1, 17);
        if !self.window_alpha.is_finite() {
            self.window_alpha = Config::default().window_alpha;
        }
        self.window_alpha = self.window_alpha.clamp(0.3, 1.0);
        self
    }
}
