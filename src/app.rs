use std::io::{BufRead, Write};

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::i18n::Translator;
use crate::ui_cli::{Console, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 표준 입력이 닫힘
    #[error("입력이 종료되었습니다")]
    InputClosed,
}

/// 대화형 CLI 메인 루프를 실행한다.
///
/// 설정이 바뀌면 `save`를 호출한다. 입력이 끊기면 정상 종료로 본다.
/// `digits_override`는 이번 실행의 표시 자릿수에만 쓰이고 저장되지 않는다.
pub fn run<R, W, S>(
    console: &mut Console<R, W>,
    config: &mut Config,
    tr: &Translator,
    digits_override: Option<usize>,
    mut save: S,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    S: FnMut(&Config) -> Result<(), ConfigError>,
{
    loop {
        let step = match console.main_menu(tr) {
            Ok(MenuChoice::UnitConversion) => {
                let digits = digits_override.unwrap_or(config.significant_digits);
                console.handle_unit_conversion(tr, digits)
            }
            Ok(MenuChoice::Settings) => match console.handle_settings(tr, config) {
                Ok(()) => {
                    save(config)?;
                    console.print_saved(tr)
                }
                Err(e) => Err(e),
            },
            Ok(MenuChoice::Exit) => {
                console.print_exit(tr)?;
                break;
            }
            Err(e) => Err(e),
        };
        match step {
            Ok(()) => {}
            Err(AppError::InputClosed) => {
                tracing::debug!("input closed, leaving interactive mode");
                break;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn settings_are_saved_and_loop_exits() {
        let tr = Translator::new("en-us");
        let mut cfg = Config::default();
        let mut saved = Vec::new();
        let mut console = Console::new(Cursor::new("2\n\n4\n1\n1\nm\nft\n1\n0\n"), Vec::new());
        run(&mut console, &mut cfg, &tr, None, |c| {
            saved.push(c.significant_digits);
            Ok(())
        })
        .unwrap();
        assert_eq!(saved, vec![4]);
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("Result: 3.281 Foot"), "{out}");
        assert!(out.contains("Exiting application."), "{out}");
    }

    #[test]
    fn end_of_input_is_a_clean_exit() {
        let tr = Translator::new("en-us");
        let mut cfg = Config::default();
        let mut console = Console::new(Cursor::new(""), Vec::new());
        run(&mut console, &mut cfg, &tr, None, |_| Ok(())).unwrap();
    }

    #[test]
    fn digit_override_is_used_but_never_saved() {
        let tr = Translator::new("en-us");
        let mut cfg = Config::default();
        let mut saved = Vec::new();
        // 변환 1회 후 설정 메뉴에서 두 항목 모두 빈 입력
        let script = "1\n3\nkg\nlb\n1\n2\n\n\n0\n";
        let mut console = Console::new(Cursor::new(script), Vec::new());
        run(&mut console, &mut cfg, &tr, Some(3), |c| {
            saved.push(c.clone());
            Ok(())
        })
        .unwrap();
        assert_eq!(saved, vec![Config::default()]);
        assert_eq!(cfg.significant_digits, 6);
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("Result: 2.2 Pound"), "{out}");
    }
}
