#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 위젯 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use tracing_subscriber::EnvFilter;
use unit_converter::{
    config, conversion,
    i18n::{self, fill_template},
    table::{self, CategoryTable},
    Category, ConversionRequest,
};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config unreadable; using defaults");
        config::Config::default()
    });
    // --lang 은 이번 실행의 표시 언어에만 쓰고 설정에는 넣지 않는다.
    let lang_code = i18n::resolve_language(
        cli_lang.as_deref().unwrap_or("auto"),
        Some(app_cfg.language.as_str()),
    );

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(480.0, 360.0))
        .with_transparent(true);
    if app_cfg.always_on_top {
        viewport = viewport.with_always_on_top();
    }
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Unit Converter",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg, &lang_code))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["assets/icon.png", "icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    category: Category,
    from_unit: &'static str,
    to_unit: &'static str,
    value: f64,
    show_settings: bool,
    lang_input: String,
    pack_dir_input: String,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, lang_code: &str) -> Self {
        let tr = i18n::Translator::new_with_pack(lang_code, config.language_pack_dir.as_deref());
        tracing::debug!(lang = %lang_code, "GUI language resolved");
        let lang_input = config.language.clone();
        let pack_dir_input = config.language_pack_dir.clone().unwrap_or_default();
        let mut s = Self {
            category: config.default_category,
            config,
            tr,
            from_unit: "",
            to_unit: "",
            value: 1.0,
            show_settings: false,
            lang_input,
            pack_dir_input,
            settings_status: None,
        };
        s.select_category(s.category);
        s
    }

    fn category_table(&self) -> Option<&'static CategoryTable> {
        table::builtin().get(self.category)
    }

    /// 카테고리를 바꾸고 두 선택기를 첫 번째 단위로 되돌린다.
    fn select_category(&mut self, category: Category) {
        self.category = category;
        let first = self
            .category_table()
            .and_then(|t| t.unit_name(0))
            .unwrap_or_default();
        self.from_unit = first;
        self.to_unit = first;
    }

    /// 현재 입력으로 (결과 문자열, 환산식)을 계산한다.
    fn result_text(&self) -> (String, Option<String>) {
        let request = ConversionRequest::new(
            self.category.name(),
            self.from_unit,
            self.to_unit,
            self.value,
        );
        match conversion::evaluate(&request, self.config.significant_digits) {
            Ok(res) => (res.display, res.formula),
            Err(e) => (
                format!("{}: {e}", self.tr.t("gui.unit.error_prefix")),
                None,
            ),
        }
    }

    fn ui_converter(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t("gui.app_title"));
        ui.add_space(8.0);

        let before = self.category;
        let mut selected = self.category;
        ui.label(tr.t("gui.unit.category"));
        egui::ComboBox::from_id_source("conv_category")
            .selected_text(tr.category_label(selected))
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for t in table::builtin().categories() {
                    ui.selectable_value(&mut selected, t.category, tr.category_label(t.category));
                }
            });
        if selected != before {
            self.select_category(selected);
        }
        ui.add_space(8.0);

        let Some(cat) = self.category_table() else {
            return;
        };
        let names = cat.unit_names();
        let (result, formula) = self.result_text();

        ui.columns(2, |cols| {
            cols[0].label(tr.t("gui.unit.from"));
            unit_combo(&mut cols[0], "conv_from", &mut self.from_unit, &names);
            cols[0].label(tr.t("gui.unit.value"));
            cols[0].add(
                egui::DragValue::new(&mut self.value)
                    .speed(0.1)
                    .max_decimals(6),
            );

            cols[1].label(tr.t("gui.unit.to"));
            unit_combo(&mut cols[1], "conv_to", &mut self.to_unit, &names);
            cols[1].label(egui::RichText::new(result).size(24.0).strong());
        });

        if let Some(formula) = formula {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(formula).weak());
        }
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let mut open = self.show_settings;
        egui::Window::new(tr.t("gui.settings.title"))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(tr.t("gui.settings.language"));
                        ui.text_edit_singleline(&mut self.lang_input);
                        ui.end_row();

                        ui.label(tr.t("gui.settings.pack_dir"));
                        ui.horizontal(|ui| {
                            ui.text_edit_singleline(&mut self.pack_dir_input);
                            if ui.button(tr.t("gui.settings.browse")).clicked() {
                                if let Some(dir) = FileDialog::new().pick_folder() {
                                    self.pack_dir_input = dir.display().to_string();
                                }
                            }
                        });
                        ui.end_row();

                        ui.label(tr.t("gui.settings.digits"));
                        ui.add(egui::Slider::new(&mut self.config.significant_digits, 1..=17));
                        ui.end_row();

                        ui.label(tr.t("gui.settings.always_on_top"));
                        ui.checkbox(&mut self.config.always_on_top, "");
                        ui.end_row();

                        ui.label(tr.t("gui.settings.opacity"));
                        ui.add(egui::Slider::new(&mut self.config.window_alpha, 0.3..=1.0));
                        ui.end_row();
                    });
                ui.small(tr.t("gui.settings.restart_note"));
                if ui.button(tr.t("gui.settings.save")).clicked() {
                    self.settings_status = Some(self.save_settings());
                }
                if let Some(status) = &self.settings_status {
                    ui.label(status.as_str());
                }
            });
        self.show_settings = open;
    }

    /// 입력란 값을 설정에 반영하고 저장한다. 결과 메시지를 돌려준다.
    fn save_settings(&mut self) -> String {
        self.apply_settings_inputs();
        match self.config.save() {
            Ok(()) => fill_template(
                self.tr.t("gui.settings.saved"),
                &[("path", config::CONFIG_FILE.to_string())],
            ),
            Err(e) => format!("{}: {e}", self.tr.t("gui.unit.error_prefix")),
        }
    }

    fn apply_settings_inputs(&mut self) {
        let lang = self.lang_input.trim();
        self.config.language = if lang.is_empty() || lang.eq_ignore_ascii_case("auto") {
            "auto".into()
        } else {
            i18n::resolve_language(lang, None)
        };
        let dir = self.pack_dir_input.trim();
        self.config.language_pack_dir = (!dir.is_empty()).then(|| dir.to_string());
        self.config.default_category = self.category;
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(
            if self.config.always_on_top {
                egui::WindowLevel::AlwaysOnTop
            } else {
                egui::WindowLevel::Normal
            },
        ));

        let mut style = (*ctx.style()).clone();
        let alpha = self.config.window_alpha.clamp(0.3, 1.0);
        style.visuals.panel_fill = egui::Visuals::default().panel_fill.linear_multiply(alpha);
        ctx.set_style(style);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(self.tr.t("gui.settings.title")).clicked() {
                    self.show_settings = true;
                }
            });
        });

        if self.show_settings {
            self.ui_settings(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                self.ui_converter(ui);
            });
        });
    }
}

fn unit_combo(ui: &mut egui::Ui, id: &str, value: &mut &'static str, options: &[&'static str]) {
    egui::ComboBox::from_id_source(id)
        .selected_text(*value)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for name in options {
                ui.selectable_value(value, *name, *name);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_first_unit_and_value_one() {
        let app = GuiApp::new(config::Config::default(), "en-us");
        assert_eq!(app.category, Category::Length);
        assert_eq!(app.from_unit, "Nanometer");
        assert_eq!(app.to_unit, "Nanometer");
        assert_eq!(app.value, 1.0);
        assert_eq!(app.result_text(), ("1".to_string(), None));
    }

    #[test]
    fn category_change_resets_units() {
        let mut app = GuiApp::new(config::Config::default(), "en-us");
        app.to_unit = "Kilometer";
        app.select_category(Category::Temperature);
        assert_eq!(app.from_unit, "Celsius");
        assert_eq!(app.to_unit, "Celsius");
    }

    #[test]
    fn result_and_formula_for_linear_pair() {
        let mut app = GuiApp::new(config::Config::default(), "en-us");
        app.from_unit = "Meter";
        app.to_unit = "Kilometer";
        app.value = 1000.0;
        let (result, formula) = app.result_text();
        assert_eq!(result, "1");
        assert_eq!(formula.as_deref(), Some("1 Meter = 0.001 Kilometer"));
    }

    #[test]
    fn temperature_hides_formula() {
        let mut app = GuiApp::new(config::Config::default(), "en-us");
        app.select_category(Category::Temperature);
        app.to_unit = "Fahrenheit";
        app.value = 0.0;
        assert_eq!(app.result_text(), ("32".to_string(), None));
    }

    #[test]
    fn settings_inputs_are_normalized() {
        let mut app = GuiApp::new(config::Config::default(), "en-us");
        app.lang_input = "ko".into();
        app.pack_dir_input = "  ".into();
        app.select_category(Category::Time);
        app.apply_settings_inputs();
        assert_eq!(app.config.language, "ko-kr");
        assert_eq!(app.config.language_pack_dir, None);
        assert_eq!(app.config.default_category, Category::Time);
    }

    #[test]
    fn command_line_language_is_not_saved() {
        let mut app = GuiApp::new(config::Config::default(), "ko-kr");
        assert_eq!(app.tr.language(), i18n::Language::Ko);
        assert_eq!(app.lang_input, "auto");
        app.apply_settings_inputs();
        assert_eq!(app.config.language, "auto");
    }
}
