//! "Plan Your Next Adventure" form and its draft packing list

use super::App;
use crate::planner::PlanDraft;
use crate::theme;
use crate::types::{Category, ItemId, Priority};
use crate::ui::components::{field_label, icon_button, icon_input, optional_date_picker};
use eframe::egui;
use egui_phosphor::regular as icons;
use tracing::debug;

impl App {
    pub(crate) fn render_plan_form(&mut self, ui: &mut egui::Ui) {
        ui.add(
            egui::Label::new(
                egui::RichText::new("Plan Your Next Adventure")
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_XL);

        render_field_grid(ui, &mut self.board.draft);

        ui.add_space(theme::SPACING_XXL);
        self.render_draft_packing_list(ui);

        ui.add_space(theme::SPACING_XXL);
        let add_plan = ui.add(
            theme::button_accent(format!("{}  Add Plan", icons::PLUS))
                .min_size(egui::vec2(120.0, 32.0)),
        );
        if add_plan.clicked() {
            self.board.submit_plan();
        }
    }

    fn render_draft_packing_list(&mut self, ui: &mut egui::Ui) {
        ui.add(
            egui::Label::new(
                egui::RichText::new("Packing List")
                    .size(theme::FONT_SUBHEADING)
                    .color(theme::TEXT_SECONDARY),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_MD);

        let draft = &mut self.board.draft;
        let mut add_item = false;
        ui.horizontal(|ui| {
            let button_w = 100.0;
            let input_w = ui.available_width() - button_w - ui.spacing().item_spacing.x;
            ui.allocate_ui(egui::vec2(input_w, 0.0), |ui| {
                ui.set_min_width(input_w);
                icon_input(ui, Some(icons::BACKPACK), |ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut draft.packing_input)
                            .hint_text("Add item to pack...")
                            .frame(false)
                            .desired_width(ui.available_width()),
                    );
                    // Enter submits the item and keeps typing focus in the box
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        add_item = true;
                        self.focus_packing_input = true;
                    } else if self.focus_packing_input {
                        self.focus_packing_input = false;
                        response.request_focus();
                    }
                });
            });
            if ui
                .add(theme::button("Add Item").min_size(egui::vec2(button_w, 30.0)))
                .clicked()
            {
                add_item = true;
            }
        });

        if add_item && draft.add_packing_item() {
            debug!(count = draft.packing_list.len(), "Packing item added to draft");
        }

        let mut remove: Option<ItemId> = None;
        for item in &draft.packing_list {
            egui::Frame::new()
                .fill(theme::BG_INPUT)
                .corner_radius(theme::RADIUS_MEDIUM)
                .inner_margin(egui::Margin::symmetric(10, 4))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&item.item).color(theme::TEXT_SECONDARY),
                            )
                            .selectable(false),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if icon_button(ui, icons::TRASH, theme::STATUS_ERROR, 22.0)
                                .on_hover_text("Remove item")
                                .clicked()
                            {
                                remove = Some(item.id);
                            }
                        });
                    });
                });
        }
        if let Some(id) = remove {
            draft.remove_packing_item(id);
        }
    }
}

/// Destination, dates, budget, category, priority and notes inputs
fn render_field_grid(ui: &mut egui::Ui, draft: &mut PlanDraft) {
    ui.columns(4, |cols| {
        field_label(&mut cols[0], "Destination");
        icon_input(&mut cols[0], Some(icons::MAP_PIN), |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut draft.destination)
                    .hint_text("Where to?")
                    .frame(false)
                    .desired_width(ui.available_width()),
            );
        });

        field_label(&mut cols[1], "Start Date");
        icon_input(&mut cols[1], Some(icons::CALENDAR), |ui| {
            optional_date_picker(ui, &mut draft.start_date, "start_date");
        });

        field_label(&mut cols[2], "End Date");
        icon_input(&mut cols[2], Some(icons::CALENDAR), |ui| {
            optional_date_picker(ui, &mut draft.end_date, "end_date");
        });

        field_label(&mut cols[3], "Budget");
        icon_input(&mut cols[3], Some(icons::WALLET), |ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut draft.budget)
                    .hint_text("Enter budget")
                    .frame(false)
                    .desired_width(ui.available_width()),
            );
            if response.changed() {
                draft.sanitize_budget();
            }
        });
    });

    ui.add_space(theme::SPACING_LG);

    ui.columns(4, |cols| {
        field_label(&mut cols[0], "Category");
        icon_input(&mut cols[0], Some(icons::TAG), |ui| {
            egui::ComboBox::from_id_salt("category")
                .selected_text(draft.category.label())
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for category in Category::ALL {
                        ui.selectable_value(&mut draft.category, category, category.label());
                    }
                });
        });

        field_label(&mut cols[1], "Priority");
        icon_input(&mut cols[1], Some(icons::FLAG), |ui| {
            egui::ComboBox::from_id_salt("priority")
                .selected_text(draft.priority.label())
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for priority in Priority::ALL {
                        ui.selectable_value(&mut draft.priority, priority, priority.label());
                    }
                });
        });

        field_label(&mut cols[2], "Notes");
        icon_input(&mut cols[2], None, |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut draft.notes)
                    .hint_text("Add notes...")
                    .frame(false)
                    .desired_width(ui.available_width()),
            );
        });
    });
}
