//! Output rendering
//!
//! Turns buffered markup lines into egui labels. Every line, typed or
//! pre-rendered, goes through the same span parser; span classes pick the
//! color, the line's style tag supplies the base color for unclassed text.

use eframe::egui;
use eframe::egui::text::{LayoutJob, TextFormat};

use crate::markup::{self, MarkupSpan};
use crate::terminal::output::{lock_line, SharedLine};
use crate::ui::colors::UiColors;

/// Render every buffer line, oldest first.
pub fn render_lines(
    ui: &mut egui::Ui,
    lines: &[SharedLine],
    colors: &UiColors,
    font: &egui::FontId,
) {
    for line in lines {
        let (content, style) = {
            let line = lock_line(line);
            (line.content.clone(), line.style)
        };
        let base = colors.style_color(style);
        for row in markup::parse_rows(&content) {
            render_row(ui, &row, base, colors, font);
        }
    }
}

fn render_row(
    ui: &mut egui::Ui,
    row: &[MarkupSpan],
    base: egui::Color32,
    colors: &UiColors,
    font: &egui::FontId,
) {
    if row.is_empty() {
        // An empty row still occupies a line of vertical space.
        ui.label(egui::RichText::new(" ").font(font.clone()));
        return;
    }
    let mut job = LayoutJob::default();
    for span in row {
        let color = span
            .class
            .as_deref()
            .map(|class| colors.class_color(class))
            .unwrap_or(base);
        job.append(
            &span.text,
            0.0,
            TextFormat {
                font_id: font.clone(),
                color,
                ..Default::default()
            },
        );
    }
    ui.label(job);
}
