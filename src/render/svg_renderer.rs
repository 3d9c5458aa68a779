use std::fmt::Write;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub polygons_drawn: usize,
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Renders frames into a standalone SVG document kept in memory.
///
/// The last rendered document stays available through
/// [`SvgRenderer::document`] until the next render replaces it.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    aria_label: Option<String>,
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Label exposed as the document's `aria-label` and `<title>`.
    pub fn set_aria_label(&mut self, label: Option<String>) {
        self.aria_label = label.filter(|label| !label.is_empty());
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn write_document(&self, frame: &RenderFrame) -> Result<(String, SvgRenderStats), std::fmt::Error> {
        let mut out = String::new();
        let mut stats = SvgRenderStats::default();
        let width = frame.viewport.width;
        let height = frame.viewport.height;

        write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}""#
        )?;
        match &self.aria_label {
            Some(label) => {
                write!(out, r#" role="img" aria-label="{}">"#, escape(label))?;
                write!(out, "<title>{}</title>", escape(label))?;
            }
            None => out.push('>'),
        }

        for polygon in &frame.polygons {
            out.push_str(r#"<path d=""#);
            for ring in &polygon.rings {
                for (index, (x, y)) in ring.iter().enumerate() {
                    let command = if index == 0 { 'M' } else { 'L' };
                    write!(out, "{command}{} {}", number(*x), number(*y))?;
                }
                out.push('Z');
            }
            write!(
                out,
                r#"" fill-rule="evenodd" fill="{}"{} stroke="{}"{} stroke-width="{}""#,
                rgb(polygon.fill_color),
                opacity_attr("fill-opacity", polygon.fill_color),
                rgb(polygon.stroke_color),
                opacity_attr("stroke-opacity", polygon.stroke_color),
                number(polygon.stroke_width)
            )?;
            close_element(&mut out, "path", polygon.title.as_deref())?;
            stats.polygons_drawn += 1;
        }

        for rect in &frame.rects {
            write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
                number(rect.x),
                number(rect.y),
                number(rect.width),
                number(rect.height),
                rgb(rect.fill_color),
                opacity_attr("fill-opacity", rect.fill_color)
            )?;
            stats.rects_drawn += 1;
        }

        for line in &frame.lines {
            write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"{} stroke-width="{}"/>"#,
                number(line.x1),
                number(line.y1),
                number(line.x2),
                number(line.y2),
                rgb(line.color),
                opacity_attr("stroke-opacity", line.color),
                number(line.stroke_width)
            )?;
            stats.lines_drawn += 1;
        }

        for circle in &frame.circles {
            let fill = match circle.fill_color {
                Some(color) => format!(
                    r#"fill="{}"{}"#,
                    rgb(color),
                    opacity_attr("fill-opacity", color)
                ),
                None => r#"fill="none""#.to_owned(),
            };
            write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" {fill} stroke="{}"{} stroke-width="{}""#,
                number(circle.cx),
                number(circle.cy),
                number(circle.radius),
                rgb(circle.stroke_color),
                opacity_attr("stroke-opacity", circle.stroke_color),
                number(circle.stroke_width)
            )?;
            close_element(&mut out, "circle", circle.title.as_deref())?;
            stats.circles_drawn += 1;
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" text-anchor="{anchor}" fill="{}"{}>{}</text>"#,
                number(text.x),
                number(text.y),
                number(text.font_size_px),
                rgb(text.color),
                opacity_attr("fill-opacity", text.color),
                escape(&text.text)
            )?;
            stats.texts_drawn += 1;
        }

        out.push_str("</svg>");
        Ok((out, stats))
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let (document, stats) = self
            .write_document(frame)
            .map_err(|err| ChartError::InvalidData(format!("failed to write svg: {err}")))?;
        self.document = document;
        self.last_stats = stats;
        Ok(())
    }
}

/// Ends an open start tag, nesting `title` as a `<title>` child when present.
fn close_element(out: &mut String, tag: &str, title: Option<&str>) -> std::fmt::Result {
    match title {
        Some(title) => write!(out, "><title>{}</title></{tag}>", escape(title)),
        None => {
            out.push_str("/>");
            Ok(())
        }
    }
}

fn rgb(color: Color) -> String {
    let (red, green, blue) = color.to_rgb8();
    format!("#{red:02x}{green:02x}{blue:02x}")
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        String::new()
    } else {
        format!(r#" {name}="{}""#, number(color.alpha))
    }
}

fn number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // Avoids printing `-0`.
        return "0".to_owned();
    }
    rounded.to_string()
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape, number};

    #[test]
    fn numbers_are_trimmed_to_two_decimals() {
        assert_eq!(number(12.3456), "12.35");
        assert_eq!(number(40.0), "40");
        assert_eq!(number(-0.001), "0");
    }

    #[test]
    fn markup_characters_are_escaped() {
        assert_eq!(escape(r#"a < b & "c""#), "a &lt; b &amp; &quot;c&quot;");
    }
}
