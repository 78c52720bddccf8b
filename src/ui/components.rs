//! Reusable UI components
//!
//! Standalone widgets and formatting helpers shared by the form and the
//! plan list.

use crate::theme;
use crate::types::Category;
use chrono::NaiveDate;
use eframe::egui;

/// Format a budget with thousands separators and at most three decimals,
/// e.g. `1234.5` -> `"$1,234.5"`
pub fn format_budget(budget: f64) -> String {
    let rounded = round_half_up_3(budget.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if budget.is_sign_negative() && !is_zero { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{}", sign, grouped, frac_part)
    }
}

/// Non-negative `value` to three decimals, ties rounded up.
/// Works on the exact decimal digits so `1.0625` becomes `1.063`.
fn round_half_up_3(value: f64) -> String {
    let exact = format!("{:.40}", value);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let frac_part = format!("{:0<4}", frac_part);

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(3))
        .map(|b| b - b'0')
        .collect();
    if frac_part.as_bytes()[3] >= b'5' {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 3;
    let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    format!("{}.{}", &text[..split], &text[split..])
}

/// Format a trip's date range as `M/D/YYYY - M/D/YYYY`
pub fn format_trip_dates(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", start.format("%-m/%-d/%Y"), end.format("%-m/%-d/%Y"))
}

/// Small label shown above a form input
pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
        )
        .selectable(false),
    );
}

/// Bordered input row with an optional leading icon
pub fn icon_input<R>(
    ui: &mut egui::Ui,
    icon: Option<&str>,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    theme::input_frame()
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.x = 6.0;
            ui.horizontal(|ui| {
                if let Some(icon) = icon {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(icon)
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                }
                add_contents(ui)
            })
            .inner
        })
        .inner
}

/// Date picker that can also be empty. Returns true if the value changed.
pub fn optional_date_picker(
    ui: &mut egui::Ui,
    date: &mut Option<NaiveDate>,
    id_salt: &str,
) -> bool {
    let mut changed = false;
    let mut clear = false;
    match date.as_mut() {
        Some(d) => {
            let before = *d;
            ui.add(egui_extras::DatePickerButton::new(d).id_salt(id_salt));
            changed = *d != before;
            clear = ui
                .add(
                    egui::Button::new(
                        egui::RichText::new(egui_phosphor::regular::X)
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    )
                    .frame(false),
                )
                .on_hover_text("Clear date")
                .clicked();
        }
        None => {
            let pick = ui.add(
                egui::Button::new(egui::RichText::new("mm/dd/yyyy").color(theme::TEXT_DIM))
                    .frame(false),
            );
            if pick.clicked() {
                *date = Some(chrono::Local::now().date_naive());
                changed = true;
            }
        }
    }
    if clear {
        *date = None;
        changed = true;
    }
    changed
}

/// Pill showing a plan's category
pub fn category_badge(ui: &mut egui::Ui, category: Category) {
    let (bg, fg) = theme::category_colors(category);
    let galley = ui.painter().layout_no_wrap(
        category.label().to_string(),
        egui::FontId::proportional(theme::FONT_SMALL),
        fg,
    );
    let size = egui::vec2(galley.size().x + 16.0, theme::BADGE_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, theme::BADGE_HEIGHT / 2.0, bg);
        ui.painter()
            .galley(rect.center() - galley.size() / 2.0, galley, fg);
    }
}

/// Square icon-only button painted in `color`, e.g. the trash can on a row
pub fn icon_button(ui: &mut egui::Ui, icon: &str, color: egui::Color32, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    if ui.is_rect_visible(rect) {
        let (fill, draw_rect) = theme::button_visual(&response, theme::BG_INPUT, rect);
        if response.hovered() {
            ui.painter().rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
        }
        ui.painter().text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(size * 0.6),
            color,
        );
    }
    response
}

/// Custom checkbox widget with consistent styling
pub fn styled_checkbox(ui: &mut egui::Ui, selected: bool, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let rounding = 3.0;

        if selected {
            painter.rect_filled(rect, rounding, theme::STATUS_SUCCESS);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                egui_phosphor::regular::CHECK,
                egui::FontId::proportional(size * 0.7),
                theme::BG_BASE,
            );
        } else {
            painter.rect_stroke(
                rect,
                rounding,
                egui::Stroke::new(theme::STROKE_MEDIUM, theme::BORDER_DEFAULT),
                egui::StrokeKind::Inside,
            );
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_groups_thousands() {
        assert_eq!(format_budget(0.0), "$0");
        assert_eq!(format_budget(999.0), "$999");
        assert_eq!(format_budget(1000.0), "$1,000");
        assert_eq!(format_budget(1234567.0), "$1,234,567");
    }

    #[test]
    fn budget_keeps_up_to_three_decimals() {
        assert_eq!(format_budget(1234.5), "$1,234.5");
        assert_eq!(format_budget(12.25), "$12.25");
        assert_eq!(format_budget(0.1234), "$0.123");
        assert_eq!(format_budget(2.0004), "$2");
    }

    #[test]
    fn budget_ties_round_up() {
        assert_eq!(format_budget(1.0625), "$1.063");
        assert_eq!(format_budget(2.0625), "$2.063");
        assert_eq!(format_budget(0.0625), "$0.063");
        assert_eq!(format_budget(-1.0625), "-$1.063");
    }

    #[test]
    fn budget_rounding_carries_into_integer_part() {
        assert_eq!(format_budget(1.9999), "$2");
        assert_eq!(format_budget(999.9999), "$1,000");
    }

    #[test]
    fn negative_budget_keeps_sign() {
        assert_eq!(format_budget(-1500.0), "-$1,500");
        assert_eq!(format_budget(-0.0001), "$0");
    }

    fn date_picker_frame(
        ctx: &egui::Context,
        events: Vec<egui::Event>,
        date: &mut Option<NaiveDate>,
    ) -> egui::Rect {
        let mut rect = egui::Rect::NOTHING;
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                rect = ui
                    .scope(|ui| {
                        optional_date_picker(ui, date, "trip_date");
                    })
                    .response
                    .rect;
            });
        });
        rect
    }

    fn primary_button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    #[test]
    fn empty_date_stays_empty_without_a_click() {
        let ctx = egui::Context::default();
        let mut date = None;
        for _ in 0..3 {
            date_picker_frame(&ctx, Vec::new(), &mut date);
        }
        assert!(date.is_none());
    }

    #[test]
    fn clicking_empty_date_fills_today() {
        let ctx = egui::Context::default();
        let mut date = None;
        let rect = date_picker_frame(&ctx, Vec::new(), &mut date);
        let pos = rect.center();

        date_picker_frame(&ctx, vec![egui::Event::PointerMoved(pos)], &mut date);
        date_picker_frame(&ctx, vec![primary_button(pos, true)], &mut date);
        date_picker_frame(&ctx, vec![primary_button(pos, false)], &mut date);

        assert_eq!(date, Some(chrono::Local::now().date_naive()));
    }

    #[test]
    fn trip_dates_are_month_day_year() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();
        assert_eq!(format_trip_dates(start, end), "3/5/2025 - 12/24/2025");
    }
}
