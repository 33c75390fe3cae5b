//! Input row
//!
//! The visible prompt line: colored `user@host:path$` decoration, the text
//! field, and a block caret placed by measuring the pixel width of the text
//! before the logical caret. Key events that belong to the controller
//! (history recall, dropdown navigation, accept/cancel, submit) are
//! consumed before the text widget sees them.

use std::time::Duration;

use eframe::egui;
use eframe::egui::text::CCursor;
use eframe::egui::text_selection::CCursorRange;
use eframe::egui::widgets::text_edit::TextEditState;

use crate::commands::CommandRegistry;
use crate::config::PromptConfig;
use crate::input::{EnterOutcome, InputController};
use crate::ui::colors::UiColors;

/// Stable widget id for the command input field.
pub fn input_field_id() -> egui::Id {
    egui::Id::new("termfolio-command-input")
}

/// What the input row produced this frame.
pub struct InputRowResult {
    /// A raw line captured by a submission, to hand to the interpreter.
    pub submitted: Option<String>,
    /// Anchor for the suggestion dropdown: the caret x, just under the row.
    pub dropdown_anchor: egui::Pos2,
}

/// Render the input row. `caret_to_end` forces the widget cursor to the end
/// of the value after an external change (history recall, accepted
/// suggestion, synthetic boot keystrokes).
pub fn show(
    ui: &mut egui::Ui,
    controller: &mut InputController,
    registry: &CommandRegistry,
    colors: &UiColors,
    prompt: &PromptConfig,
    font_size: f32,
    caret_to_end: bool,
    request_focus: bool,
) -> InputRowResult {
    let font = egui::FontId::monospace(font_size);
    let id = input_field_id();
    let mut submitted = None;
    let mut value_replaced = caret_to_end;

    // Controller-owned keys are intercepted ahead of the text widget;
    // dropdown navigation outranks history recall outranks submission.
    let pressed = |ui: &mut egui::Ui, key: egui::Key| {
        ui.input_mut(|i| i.consume_key(egui::Modifiers::NONE, key))
    };

    if pressed(ui, egui::Key::ArrowDown) {
        controller.on_arrow_down();
        value_replaced = true;
    } else if pressed(ui, egui::Key::ArrowUp) {
        controller.on_arrow_up();
        value_replaced = true;
    } else if controller.suggestions().is_open() && pressed(ui, egui::Key::Tab) {
        if controller.on_tab() {
            value_replaced = true;
        }
    } else if controller.suggestions().is_open() && pressed(ui, egui::Key::Escape) {
        controller.on_escape();
    } else if pressed(ui, egui::Key::Enter) {
        match controller.on_enter() {
            EnterOutcome::SuggestionAccepted => value_replaced = true,
            EnterOutcome::Submitted(raw) => submitted = Some(raw),
        }
    }

    let mut field_rect = egui::Rect::NOTHING;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.label(
            egui::RichText::new(&prompt.user)
                .font(font.clone())
                .color(colors.prompt_user),
        );
        ui.label(
            egui::RichText::new("@")
                .font(font.clone())
                .color(colors.foreground),
        );
        ui.label(
            egui::RichText::new(&prompt.host)
                .font(font.clone())
                .color(colors.prompt_host),
        );
        ui.label(
            egui::RichText::new(&prompt.path)
                .font(font.clone())
                .color(colors.prompt_path),
        );
        ui.add_space(font_size * 0.5);

        let output = egui::TextEdit::singleline(controller.buffer_mut())
            .id(id)
            .font(font.clone())
            .text_color(colors.foreground)
            .frame(false)
            .desired_width(f32::INFINITY)
            .show(ui);
        field_rect = output.response.rect;

        if request_focus {
            ui.ctx().memory_mut(|m| m.request_focus(id));
        }

        if value_replaced {
            // Park the widget cursor at the end of the new value.
            let end = CCursor::new(controller.value().chars().count());
            let mut state = TextEditState::load(ui.ctx(), id).unwrap_or_default();
            state.cursor.set_char_range(Some(CCursorRange::one(end)));
            state.store(ui.ctx(), id);
            controller.set_caret(controller.value().chars().count());
        } else if let Some(range) = output.cursor_range {
            controller.set_caret(range.primary.ccursor.index);
        }

        if output.response.changed() {
            controller.sync_edited(registry);
        }
    });

    // Caret placement: prompt offset plus measured width of the text before
    // the logical caret.
    controller.set_prompt_offset(field_rect.left());
    let caret_x = controller.caret_px(|text| {
        ui.fonts(|f| {
            f.layout_no_wrap(text.to_string(), font.clone(), colors.foreground)
                .size()
                .x
        })
    });

    let caret_width = ui.fonts(|f| f.glyph_width(&font, 'M'));
    let blink_on = ui.input(|i| i.time) % 1.0 < 0.6;
    if blink_on {
        let caret_rect = egui::Rect::from_min_size(
            egui::pos2(caret_x, field_rect.top() + 1.0),
            egui::vec2(caret_width, field_rect.height() - 2.0),
        );
        ui.painter().rect_filled(caret_rect, 0.0, colors.caret);
    }
    ui.ctx().request_repaint_after(Duration::from_millis(400));

    InputRowResult {
        submitted,
        dropdown_anchor: egui::pos2(caret_x, field_rect.bottom() + 4.0),
    }
}
