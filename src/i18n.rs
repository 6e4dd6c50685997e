use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::category::Category;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_PROMPT_CATEGORY: &str = "unit_conversion.prompt_category";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_FORMULA: &str = "unit_conversion.formula";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_CURRENT_DIGITS: &str = "settings.current_digits";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_DIGITS: &str = "settings.prompt_digits";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_RESTART_NOTE: &str = "settings.restart_note";

    pub const HELP_UNIT_CONVERSION: &str = "help.unit_conversion";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
///
/// 조회 순서: 선택 언어팩(외부 디렉터리 → 내장) → 내장 영어 → 키 자체.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    strings: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Translator {
    /// 언어 코드에 맞는 내장 언어팩으로 번역기를 만든다.
    pub fn new(lang_code: &str) -> Self {
        Self::new_with_pack(lang_code, None)
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리에 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let mut strings = built_in_pack(lang_code).unwrap_or_default();
        if let Some(extra) = pack_dir.and_then(|dir| load_overrides(dir, lang_code)) {
            tracing::debug!(lang = lang_code, entries = extra.len(), "language pack loaded");
            strings.extend(extra);
        }
        Self {
            lang: Language::from_code(lang_code),
            strings,
            fallback: built_in_pack("en-us").unwrap_or_default(),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 선택 언어에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// 번역을 가져온다. 없으면 영어, 그것도 없으면 키를 그대로 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key)
            .or_else(|| self.fallback.get(key).map(String::as_str))
            .unwrap_or(key)
    }

    /// 카테고리 표시 이름.
    pub fn category_label(&self, category: Category) -> &str {
        self.lookup(category.label_key())
            .or_else(|| self.fallback.get(category.label_key()).map(String::as_str))
            .unwrap_or(category.name())
    }
}

/// `{name}` 자리표시자를 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "ko" | "ko-kr" | "ko_kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en_us" | "en-uk" | "en-gb" => Some("en-us".into()),
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 전체 코드(en-us) → 기본 코드(en) 순으로 찾는다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    tracing::warn!(dir, lang, "language pack not found; using built-in strings");
    None
}

/// 중첩 테이블을 `a.b.c` 키의 플랫 맵으로 편다.
fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = match toml::from_str(src) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "invalid language pack");
            return None;
        }
    };
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => parse_toml_to_map(include_str!("../locales/en-us.toml")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_pack_is_built_in() {
        let tr = Translator::new("ko-kr");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(keys::APP_EXIT), "프로그램을 종료합니다.");
        assert_eq!(tr.category_label(Category::Weight), "무게");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let tr = Translator::new("en-us");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
        assert_eq!(tr.t(keys::MAIN_MENU_EXIT), "0) Exit");
    }

    #[test]
    fn nested_tables_are_flattened() {
        let map = parse_toml_to_map("[gui.unit]\nfrom = \"From\"\n").unwrap();
        assert_eq!(map.get("gui.unit.from").map(String::as_str), Some("From"));
    }

    #[test]
    fn explicit_language_wins_over_config() {
        assert_eq!(resolve_language("ko", Some("en-us")), "ko-kr");
        assert_eq!(resolve_language("auto", Some("en")), "en-us");
        assert_eq!(resolve_language("EN_us", None), "en-us");
    }

    #[test]
    fn locale_strings_are_normalized() {
        assert_eq!(normalize_locale_string("ko_KR.UTF-8").as_deref(), Some("ko-kr"));
        assert_eq!(normalize_locale_string("en-GB").as_deref(), Some("en-us"));
        assert_eq!(normalize_locale_string("fr_FR"), None);
    }

    #[test]
    fn template_placeholders_are_replaced() {
        let s = fill_template("Saved to {path}", &[("path", "config.toml".into())]);
        assert_eq!(s, "Saved to config.toml");
    }
}
