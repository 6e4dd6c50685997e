use std::io::{BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion::{self, ConversionRequest};
use crate::i18n::{self, keys, Translator};
use crate::table::{self, CategoryTable};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    Settings,
    Exit,
}

/// 입력/출력 스트림을 묶은 콘솔. 테스트에서는 버퍼를 넣어 쓴다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝나면 `InputClosed`.
    fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(buf.trim().to_string())
    }

    /// 유한한 숫자가 들어올 때까지 다시 묻는다.
    fn read_f64(&mut self, tr: &Translator, prompt: &str) -> Result<f64, AppError> {
        loop {
            let s = self.read_line(prompt)?;
            match s.parse::<f64>() {
                Ok(v) if v.is_finite() => return Ok(v),
                _ => self.say(tr.t(keys::ERROR_INVALID_NUMBER))?,
            }
        }
    }

    /// 메인 메뉴를 표시하고 선택값을 반환한다.
    pub fn main_menu(&mut self, tr: &Translator) -> Result<MenuChoice, AppError> {
        self.say(tr.t(keys::MAIN_MENU_TITLE))?;
        self.say(tr.t(keys::MAIN_MENU_UNIT_CONVERSION))?;
        self.say(tr.t(keys::MAIN_MENU_SETTINGS))?;
        self.say(tr.t(keys::MAIN_MENU_EXIT))?;
        loop {
            let sel = self.read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
            match sel.as_str() {
                "1" => return Ok(MenuChoice::UnitConversion),
                "2" => return Ok(MenuChoice::Settings),
                "0" => return Ok(MenuChoice::Exit),
                _ => self.say(tr.t(keys::INVALID_SELECTION_RETRY))?,
            }
        }
    }

    /// 단위 변환 메뉴를 처리한다. 결과는 유효숫자 `digits` 자리로 표시한다.
    pub fn handle_unit_conversion(
        &mut self,
        tr: &Translator,
        digits: usize,
    ) -> Result<(), AppError> {
        self.say(tr.t(keys::UNIT_CONVERSION_HEADING))?;
        self.say(tr.t(keys::HELP_UNIT_CONVERSION))?;
        let categories = table::builtin().categories();
        let line = categories
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}) {}", i + 1, tr.category_label(c.category)))
            .collect::<Vec<_>>()
            .join("  ");
        self.say(&line)?;
        let cat = loop {
            let sel = self.read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_CATEGORY))?;
            if let Some(c) = pick_category(categories, &sel) {
                break c;
            }
            self.say(tr.t(keys::INVALID_SELECTION_RETRY))?;
        };

        let names = cat.unit_names();
        for (i, (name, symbols)) in cat.unit_entries().iter().enumerate() {
            if symbols.is_empty() {
                self.say(&format!("{:>3}) {name}", i + 1))?;
            } else {
                self.say(&format!("{:>3}) {name} [{}]", i + 1, symbols.join(", ")))?;
            }
        }
        let from = self.read_unit(tr, cat, &names, keys::UNIT_CONVERSION_PROMPT_FROM_UNIT)?;
        let to = self.read_unit(tr, cat, &names, keys::UNIT_CONVERSION_PROMPT_TO_UNIT)?;
        let value = self.read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;

        let request = ConversionRequest::new(cat.category.name(), from, to, value);
        let result = conversion::evaluate(&request, digits)?;
        self.say(&format!(
            "{} {} {}",
            tr.t(keys::UNIT_CONVERSION_RESULT),
            result.display,
            result.to_unit
        ))?;
        if let Some(formula) = result.formula {
            self.say(&format!("{} {formula}", tr.t(keys::UNIT_CONVERSION_FORMULA)))?;
        }
        Ok(())
    }

    /// 번호 또는 이름/기호로 단위를 받는다.
    fn read_unit(
        &mut self,
        tr: &Translator,
        cat: &CategoryTable,
        names: &[&'static str],
        prompt_key: &str,
    ) -> Result<&'static str, AppError> {
        loop {
            let sel = self.read_line(tr.t(prompt_key))?;
            let by_number = sel
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| names.get(i).copied());
            let picked = by_number.or_else(|| {
                cat.resolve_unit(&sel)
                    .ok()
                    .and_then(|i| cat.unit_name(i))
            });
            match picked {
                Some(name) => return Ok(name),
                None => self.say(tr.t(keys::INVALID_SELECTION_RETRY))?,
            }
        }
    }

    /// 설정 메뉴를 처리한다. 빈 입력은 기존 값을 유지한다.
    pub fn handle_settings(&mut self, tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
        self.say(tr.t(keys::SETTINGS_HEADING))?;
        self.say(&format!(
            "{} {}",
            tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
            cfg.language
        ))?;
        self.say(&format!(
            "{} {}",
            tr.t(keys::SETTINGS_CURRENT_DIGITS),
            cfg.significant_digits
        ))?;

        let lang = self.read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
        if !lang.is_empty() {
            let chosen = if lang.eq_ignore_ascii_case("auto") {
                "auto".to_string()
            } else {
                i18n::resolve_language(&lang, None)
            };
            if chosen != cfg.language {
                cfg.language = chosen;
                self.say(tr.t(keys::SETTINGS_RESTART_NOTE))?;
            }
        }

        let digits = self.read_line(tr.t(keys::SETTINGS_PROMPT_DIGITS))?;
        if !digits.is_empty() {
            match digits.parse::<usize>() {
                Ok(n) if (1..=17).contains(&n) => cfg.significant_digits = n,
                _ => self.say(tr.t(keys::SETTINGS_INVALID))?,
            }
        }
        Ok(())
    }

    pub fn print_exit(&mut self, tr: &Translator) -> Result<(), AppError> {
        self.say(tr.t(keys::APP_EXIT))
    }

    pub fn print_saved(&mut self, tr: &Translator) -> Result<(), AppError> {
        self.say(tr.t(keys::SETTINGS_SAVED))
    }
}

fn pick_category(
    categories: &'static [CategoryTable],
    sel: &str,
) -> Option<&'static CategoryTable> {
    if let Ok(n) = sel.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| categories.get(i));
    }
    table::builtin().find_category(sel).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_conversion(script: &str) -> String {
        let tr = Translator::new("en-us");
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        console.handle_unit_conversion(&tr, 6).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn converts_by_number_selection() {
        // Length, Meter(5), Kilometer(6), 1000
        let out = run_conversion("1\n5\n6\n1000\n");
        assert!(out.contains("Result: 1 Kilometer"), "{out}");
        assert!(out.contains("Formula: 1 Meter = 0.001 Kilometer"), "{out}");
    }

    #[test]
    fn accepts_names_and_retries_bad_input() {
        let out = run_conversion("temperature\nfurlong\nC\nF\nabc\nnan\n100\n");
        assert!(out.contains("Invalid input"), "{out}");
        assert!(out.contains("Please enter a finite number."), "{out}");
        assert!(out.contains("Result: 212 Fahrenheit"), "{out}");
        assert!(!out.contains("Formula:"), "{out}");
    }

    #[test]
    fn same_unit_prints_no_formula() {
        let out = run_conversion("7\nHour\nh\n2.5\n");
        assert!(out.contains("Result: 2.5 Hour"), "{out}");
        assert!(!out.contains("Formula:"), "{out}");
    }

    #[test]
    fn closed_input_is_reported() {
        let tr = Translator::new("en-us");
        let mut console = Console::new(Cursor::new("1\n"), Vec::new());
        let err = console.handle_unit_conversion(&tr, 6).unwrap_err();
        assert!(matches!(err, AppError::InputClosed));
    }

    #[test]
    fn settings_update_language_and_digits() {
        let tr = Translator::new("en-us");
        let mut cfg = Config::default();
        let mut console = Console::new(Cursor::new("ko\n3\n"), Vec::new());
        console.handle_settings(&tr, &mut cfg).unwrap();
        assert_eq!(cfg.language, "ko-kr");
        assert_eq!(cfg.significant_digits, 3);
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("Language changes apply after restart."), "{out}");
    }

    #[test]
    fn unchanged_language_prints_no_restart_note() {
        let tr = Translator::new("en-us");
        let mut cfg = Config::default();
        let mut console = Console::new(Cursor::new("AUTO

"), Vec::new());
        console.handle_settings(&tr, &mut cfg).unwrap();
        assert_eq!(cfg.language, "auto");
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(!out.contains("restart"), "{out}");
    }

    #[test]
    fn display_precision_follows_digits_argument() {
        let tr = Translator::new("en-us");
        let mut console = Console::new(Cursor::new("weight
kg
lb
1
"), Vec::new());
        console.handle_unit_conversion(&tr, 3).unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("Result: 2.2 Pound"), "{out}");
        assert!(out.contains("Formula: 1 Kilogram = 2.20462 Pound"), "{out}");
    }

    #[test]
    fn settings_keep_values_on_empty_or_invalid_input() {
        let tr = Translator::new("en-us");
        let mut cfg = Config::default();
        let mut console = Console::new(Cursor::new("\n99\n"), Vec::new());
        console.handle_settings(&tr, &mut cfg).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
