//! App module - contains the main application state and logic

mod board;
mod filters;
mod form;
mod views;

use crate::constants::CONTACT_EMAIL;
use crate::settings::Settings;
use crate::theme;
use board::PlanBoard;
use eframe::egui;
use std::path::PathBuf;
use tracing::warn;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) board: PlanBoard,
    pub(crate) focus_packing_input: bool,
    // Window geometry, saved on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self {
            board: PlanBoard::new(),
            focus_packing_input: false,
            window_pos: settings.window_pos(),
            window_size: settings.window_size(),
            needs_center: settings.window_pos().is_none(),
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }

    pub fn open_contact_email(&self) {
        if let Err(e) = open::that(format!("mailto:{}", CONTACT_EMAIL)) {
            warn!(error = %e, "Failed to open mail client");
        }
    }
}
