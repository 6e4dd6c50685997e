use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use unit_converter::{app, config, conversion, i18n, table, ui_cli::Console};

#[derive(Parser)]
#[command(name = "unit_converter_cli")]
#[command(about = "Convert values between units of length, weight, temperature and more", long_about = None)]
struct Cli {
    /// UI language (auto, en-us, ko-kr)
    #[arg(short = 'L', long, default_value = "auto", global = true)]
    lang: String,

    /// Significant digits for displayed results (overrides config)
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(1..=17))]
    digits: Option<u8>,

    /// Path to the config file
    #[arg(long, global = true, default_value = config::CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one value and print the result and formula
    Convert {
        /// Category name (e.g. Length, Temperature)
        category: String,
        /// Source unit name or symbol
        from: String,
        /// Target unit name or symbol
        to: String,
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// List category names
    Categories,

    /// List the units of a category
    Units {
        /// Category name
        category: String,
    },

    /// Menu-driven console converter (default)
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match try_run(cli, &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// 명령 하나를 실행하고 결과를 `out`에 쓴다.
fn try_run(cli: Cli, out: &mut impl Write) -> Result<(), app::AppError> {
    let command = cli.command.unwrap_or(Commands::Interactive);
    let interactive = matches!(command, Commands::Interactive);
    let mut cfg = if interactive {
        config::load_or_default_from(&cli.config)?
    } else {
        config::load_if_exists(&cli.config)?
    };
    let digits_override = cli.digits.map(usize::from);

    match command {
        Commands::Convert {
            category,
            from,
            to,
            value,
        } => {
            let digits = digits_override.unwrap_or(cfg.significant_digits);
            let request = conversion::ConversionRequest::new(category, from, to, value);
            let result = conversion::evaluate(&request, digits)?;
            writeln!(out, "{} {}", result.display, result.to_unit)?;
            if let Some(formula) = result.formula {
                writeln!(out, "{formula}")?;
            }
        }
        Commands::Categories => {
            for name in table::builtin().category_names() {
                writeln!(out, "{name}")?;
            }
        }
        Commands::Units { category } => {
            let cat = table::builtin().find_category(&category)?;
            for (name, symbols) in cat.unit_entries() {
                if symbols.is_empty() {
                    writeln!(out, "{name}")?;
                } else {
                    writeln!(out, "{name} ({})", symbols.join(", "))?;
                }
            }
        }
        Commands::Interactive => {
            let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
            let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), out);
            let path = cli.config.clone();
            app::run(&mut console, &mut cfg, &tr, digits_override, |c| {
                c.save_to(&path)
            })?;
        }
    }
    Ok(())
}
