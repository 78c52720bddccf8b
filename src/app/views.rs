//! View rendering (header, footer, search box, plan list)

use super::App;
use crate::constants::*;
use crate::theme;
use crate::types::{ItemId, PlanId, TravelPlan};
use crate::ui::components::{
    category_badge, format_budget, format_trip_dates, icon_button, styled_checkbox,
};
use eframe::egui;
use egui_phosphor::regular as icons;

/// User interaction collected while drawing the list, applied afterwards
enum PlanAction {
    ToggleExpand(PlanId),
    Delete(PlanId),
    TogglePacked(PlanId, ItemId),
}

impl App {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(icons::AIRPLANE)
                        .size(30.0)
                        .color(theme::ACCENT),
                )
                .selectable(false),
            );
            ui.add(
                egui::Label::new(
                    egui::RichText::new(APP_TITLE)
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let email = ui
                    .add(
                        egui::Label::new(
                            egui::RichText::new(format!("{}  {}", icons::ENVELOPE, CONTACT_EMAIL))
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_MUTED),
                        )
                        .selectable(false)
                        .sense(egui::Sense::click()),
                    )
                    .on_hover_cursor(egui::CursorIcon::PointingHand);
                if email.clicked() {
                    self.open_contact_email();
                }
            });
        });
    }

    pub(crate) fn render_footer(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!("{}  {}", icons::BUILDINGS, FOOTER_BRAND))
                        .color(theme::TEXT_MUTED),
                )
                .selectable(false),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(FOOTER_CREDIT)
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
            });
        });
    }

    pub(crate) fn render_search_box(&mut self, ui: &mut egui::Ui) {
        let search_frame_resp = theme::input_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(icons::MAGNIFYING_GLASS)
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
                let search_response = ui.add(
                    egui::TextEdit::singleline(&mut self.board.search_query)
                        .hint_text("Search destinations...")
                        .frame(false)
                        .desired_width(ui.available_width() - 24.0),
                );
                if search_response.changed() {
                    self.board.apply_filters();
                }
            });
        });

        // Clear button overlaid on right side of search frame
        if !self.board.search_query.is_empty() {
            let frame_rect = search_frame_resp.response.rect;
            let btn_rect = egui::Rect::from_center_size(
                egui::pos2(frame_rect.right() - 16.0, frame_rect.center().y),
                egui::vec2(16.0, 16.0),
            );
            let clear_resp = ui.interact(btn_rect, ui.id().with("search_clear"), egui::Sense::click());
            let color = if clear_resp.hovered() { theme::TEXT_MUTED } else { theme::TEXT_DIM };
            if clear_resp.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            ui.painter().text(
                btn_rect.center(),
                egui::Align2::CENTER_CENTER,
                icons::X,
                egui::FontId::proportional(12.0),
                color,
            );
            if clear_resp.clicked() {
                self.board.clear_search();
            }
        }
    }

    pub(crate) fn render_plan_list(&mut self, ui: &mut egui::Ui) {
        self.render_search_box(ui);
        ui.add_space(theme::SPACING_XL);

        if self.board.filtered_ids.is_empty() {
            ui.add_space(theme::SPACING_LG);
            ui.vertical_centered(|ui| {
                ui.add(
                    egui::Label::new(egui::RichText::new(EMPTY_LIST_MESSAGE).color(theme::TEXT_DIM))
                        .selectable(false),
                );
            });
            ui.add_space(theme::SPACING_LG);
            return;
        }

        let mut action = None;
        for &id in &self.board.filtered_ids {
            let Some(plan) = self.board.planner.get(id) else {
                continue;
            };
            let expanded = self.board.planner.is_selected(id);
            if let Some(a) = render_plan_row(ui, plan, expanded) {
                action = Some(a);
            }
            ui.add_space(theme::SPACING_MD);
        }

        match action {
            Some(PlanAction::ToggleExpand(id)) => self.board.planner.toggle_selected(id),
            Some(PlanAction::Delete(id)) => {
                self.board.delete_plan(id);
            }
            Some(PlanAction::TogglePacked(plan_id, item_id)) => {
                self.board.planner.toggle_packed(plan_id, item_id);
            }
            None => {}
        }
    }
}

/// One plan: a clickable summary plus, when expanded, its packing checklist
fn render_plan_row(ui: &mut egui::Ui, plan: &TravelPlan, expanded: bool) -> Option<PlanAction> {
    let mut action = None;
    let row_id = ui.id().with(plan.id);
    let hovered = ui.ctx().data(|d| d.get_temp::<bool>(row_id).unwrap_or(false));

    theme::row_frame(hovered).show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            let info_w = ui.available_width() - theme::ICON_BUTTON_SIZE - ui.spacing().item_spacing.x;
            let info = ui.allocate_ui_with_layout(
                egui::vec2(info_w, 0.0),
                egui::Layout::top_down(egui::Align::Min),
                |ui| {
                    ui.set_min_width(info_w);
                    render_plan_summary(ui, plan);
                },
            );

            // Summary area toggles expansion; the delete button sits outside it
            let summary = ui
                .interact(info.response.rect, row_id.with("summary"), egui::Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            ui.ctx().data_mut(|d| d.insert_temp(row_id, summary.hovered()));
            if summary.clicked() {
                action = Some(PlanAction::ToggleExpand(plan.id));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                if icon_button(ui, icons::TRASH, theme::STATUS_ERROR, theme::ICON_BUTTON_SIZE)
                    .on_hover_text("Delete plan")
                    .clicked()
                {
                    action = Some(PlanAction::Delete(plan.id));
                }
            });
        });

        if expanded && !plan.packing_list.is_empty() {
            ui.add_space(theme::SPACING_MD);
            ui.separator();
            ui.add_space(theme::SPACING_SM);
            if let Some(item_id) = render_packing_checklist(ui, plan) {
                action = Some(PlanAction::TogglePacked(plan.id, item_id));
            }
        }
    });

    action
}

fn render_plan_summary(ui: &mut egui::Ui, plan: &TravelPlan) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = theme::SPACING_LG;
        ui.add(
            egui::Label::new(
                egui::RichText::new(&plan.destination)
                    .size(theme::FONT_SUBHEADING)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new(plan.priority.label())
                    .size(theme::FONT_LABEL)
                    .strong()
                    .color(theme::priority_color(plan.priority)),
            )
            .selectable(false),
        );
        category_badge(ui, plan.category);
    });

    ui.add(
        egui::Label::new(
            egui::RichText::new(format_trip_dates(plan.start_date, plan.end_date))
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_DIM),
        )
        .selectable(false),
    );
    ui.add(
        egui::Label::new(
            egui::RichText::new(format!("Budget: {}", format_budget(plan.budget)))
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_SECONDARY),
        )
        .selectable(false),
    );
    if !plan.notes.is_empty() {
        ui.add(
            egui::Label::new(
                egui::RichText::new(&plan.notes)
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
            )
            .selectable(false),
        );
    }
}

/// Returns the id of the item whose packed state was clicked
fn render_packing_checklist(ui: &mut egui::Ui, plan: &TravelPlan) -> Option<ItemId> {
    let mut toggled = None;

    ui.add(
        egui::Label::new(
            egui::RichText::new("Packing List")
                .size(theme::FONT_LABEL)
                .strong()
                .color(theme::TEXT_SECONDARY),
        )
        .selectable(false),
    );
    ui.add_space(theme::SPACING_SM);

    for item in &plan.packing_list {
        let row = ui.horizontal(|ui| {
            let checkbox = styled_checkbox(ui, item.packed, theme::CHECKBOX_SIZE);
            let text = if item.packed {
                egui::RichText::new(&item.item)
                    .strikethrough()
                    .color(theme::TEXT_DIM)
            } else {
                egui::RichText::new(&item.item).color(theme::TEXT_SECONDARY)
            };
            let label = ui.add(
                egui::Label::new(text.size(theme::FONT_LABEL))
                    .selectable(false)
                    .sense(egui::Sense::click()),
            );
            checkbox.clicked() || label.clicked()
        });
        if row.inner {
            toggled = Some(item.id);
        }
        if row.response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
    }

    toggled
}
