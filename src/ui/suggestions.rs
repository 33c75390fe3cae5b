//! Suggestion dropdown
//!
//! A small popup anchored at the caret listing the registry's prefix
//! matches. Hover moves the selection; a click accepts the entry. Keyboard
//! navigation lives in the input controller, not here.

use eframe::egui;

use crate::input::InputController;
use crate::ui::colors::UiColors;

/// Render the dropdown. Returns the index of a clicked entry, if any.
pub fn show(
    ctx: &egui::Context,
    anchor: egui::Pos2,
    controller: &mut InputController,
    colors: &UiColors,
    font_size: f32,
) -> Option<usize> {
    let mut clicked = None;
    let items: Vec<String> = controller.suggestions().items().to_vec();
    if items.is_empty() {
        return None;
    }
    let selected = controller.suggestions().selected_index();

    egui::Window::new("suggestions")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .fixed_pos(anchor)
        .frame(
            egui::Frame::none()
                .fill(colors.background)
                .stroke(egui::Stroke::new(1.0, colors.selection))
                .inner_margin(egui::Margin::same(4.0))
                .rounding(egui::Rounding::same(3.0)),
        )
        .show(ctx, |ui| {
            for (index, item) in items.iter().enumerate() {
                let is_selected = selected == Some(index);
                let text_color = if is_selected {
                    colors.background
                } else {
                    colors.foreground
                };
                let text = egui::RichText::new(item)
                    .font(egui::FontId::monospace(font_size))
                    .color(text_color)
                    .background_color(if is_selected {
                        colors.selection
                    } else {
                        egui::Color32::TRANSPARENT
                    });
                let response = ui.label(text).interact(egui::Sense::click());
                if response.hovered() && !is_selected {
                    controller.suggestions_select(index);
                }
                if response.clicked() {
                    clicked = Some(index);
                }
            }
        });

    clicked
}
