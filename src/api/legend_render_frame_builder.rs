use crate::render::{Color, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};
use crate::surface::Legend;

use super::number_format::format_fr;
use super::palette::INK;

const SWATCH_SIZE_PX: f64 = 10.0;
const RAMP_SWATCH_WIDTH_PX: f64 = 48.0;
const GAP_PX: f64 = 4.0;
const ENTRY_GAP_PX: f64 = 12.0;
/// Rough advance of one glyph, as a share of the font size.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Top-left anchor and text size of a legend block.
#[derive(Debug, Clone, Copy)]
pub(super) struct LegendLayout {
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
}

/// Draws `legend` into the frame as swatch rects plus labels.
pub(super) fn push_legend(frame: &mut RenderFrame, legend: &Legend, layout: LegendLayout) {
    match legend {
        Legend::Categorical { label, entries } => {
            let baseline = layout.y + layout.font_size_px;
            let mut x = layout.x;
            if !label.is_empty() {
                push_label(frame, label, x, baseline, layout.font_size_px, TextHAlign::Left);
                x += text_width(label, layout.font_size_px) + ENTRY_GAP_PX;
            }
            for entry in entries {
                push_swatch(frame, x, baseline - SWATCH_SIZE_PX, SWATCH_SIZE_PX, entry.color);
                x += SWATCH_SIZE_PX + GAP_PX;
                if !entry.label.is_empty() {
                    push_label(
                        frame,
                        &entry.label,
                        x,
                        baseline,
                        layout.font_size_px,
                        TextHAlign::Left,
                    );
                    x += text_width(&entry.label, layout.font_size_px);
                }
                x += ENTRY_GAP_PX;
            }
        }
        Legend::Quantile {
            label,
            colors,
            thresholds,
        } => {
            let mut top = layout.y;
            if !label.is_empty() {
                push_label(
                    frame,
                    label,
                    layout.x,
                    top + layout.font_size_px,
                    layout.font_size_px,
                    TextHAlign::Left,
                );
                top += layout.font_size_px + GAP_PX;
            }
            for (index, color) in colors.iter().enumerate() {
                let x = layout.x + index as f64 * RAMP_SWATCH_WIDTH_PX;
                push_swatch(frame, x, top, RAMP_SWATCH_WIDTH_PX, *color);
            }
            // Thresholds sit on the boundaries between buckets.
            let baseline = top + SWATCH_SIZE_PX + layout.font_size_px;
            for (index, threshold) in thresholds.iter().enumerate() {
                let x = layout.x + (index + 1) as f64 * RAMP_SWATCH_WIDTH_PX;
                push_label(
                    frame,
                    &format_fr(threshold.round()),
                    x,
                    baseline,
                    layout.font_size_px,
                    TextHAlign::Center,
                );
            }
        }
    }
}

fn push_swatch(frame: &mut RenderFrame, x: f64, y: f64, width: f64, color: Color) {
    frame
        .rects
        .push(RectPrimitive::new(x, y, width, SWATCH_SIZE_PX, color));
}

fn push_label(
    frame: &mut RenderFrame,
    text: &str,
    x: f64,
    y: f64,
    font_size_px: f64,
    h_align: TextHAlign,
) {
    frame
        .texts
        .push(TextPrimitive::new(text, x, y, font_size_px, INK, h_align));
}

fn text_width(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * GLYPH_WIDTH_RATIO
}
