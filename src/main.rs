#![windows_subsystem = "windows"]
//! Sprout Travel - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod planner;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use tracing::info;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, EnvFilter, prelude::*};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "sprout-travel.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sprout_travel=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Sprout Travel starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(settings.window_size().unwrap_or(egui::vec2(1200.0, 860.0)))
        .with_min_inner_size([900.0, 600.0])
        .with_title(APP_TITLE);

    if let Some(icon) = utils::window_icon() {
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }
    if let Some(pos) = settings.window_pos() {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, &settings, data_dir)))),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Header and footer must be added BEFORE CentralPanel
        egui::TopBottomPanel::top("header")
            .frame(theme::bar_frame())
            .show_separator_line(false)
            .show(ctx, |ui| self.render_header(ui));

        egui::TopBottomPanel::bottom("footer")
            .frame(theme::bar_frame())
            .show_separator_line(false)
            .show(ctx, |ui| self.render_footer(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG_BASE))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        // Center a fixed-width column inside the window
                        let content_w = ui.available_width().min(theme::CONTENT_MAX_WIDTH);
                        let side = ((ui.available_width() - content_w) / 2.0).max(0.0);
                        ui.add_space(theme::SPACING_XXL);
                        ui.horizontal(|ui| {
                            ui.add_space(side);
                            ui.vertical(|ui| {
                                ui.set_width(content_w);
                                theme::card_frame().show(ui, |ui| {
                                    ui.set_min_width(ui.available_width());
                                    self.render_plan_form(ui);
                                });
                                ui.add_space(theme::SPACING_XXL);
                                theme::card_frame().show(ui, |ui| {
                                    ui.set_min_width(ui.available_width());
                                    self.render_plan_list(ui);
                                });
                            });
                        });
                        ui.add_space(theme::SPACING_XXL);
                    });
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(plans = self.board.planner.len(), "Application shutting down");
        self.save_settings();
    }
}
