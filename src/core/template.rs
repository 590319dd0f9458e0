// MwIcons - core/template.rs
//
// SVG rendering of an `IconParams` layout.
// The template (colours, mark, font) is kept apart from the geometry so a
// different mark or palette never touches `core::params`.

use crate::core::params::IconParams;
use std::fmt::Write;

/// Anything that can turn an icon layout into a complete document.
pub trait IconTemplate {
    /// Render `params` to a complete, standalone document.
    ///
    /// Must be deterministic: equal params yield byte-identical output.
    fn render(&self, params: &IconParams) -> String;
}

/// Palette, font, and text of the mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconStyle {
    /// Outer circle fill.
    pub ring_fill: String,
    /// Outer circle outline.
    pub ring_stroke: String,
    /// Inner circle fill.
    pub disc_fill: String,
    /// Inner circle outline, checkmark stroke, and text fill.
    pub accent: String,
    pub font_family: String,
    /// Text drawn at the centre of the icon.
    pub mark: String,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            ring_fill: "#677eea".to_string(),
            ring_stroke: "#5a6fd8".to_string(),
            disc_fill: "rgba(255,255,255,0.9)".to_string(),
            accent: "#677eea".to_string(),
            font_family: "Arial, sans-serif".to_string(),
            mark: "MW".to_string(),
        }
    }
}

/// Ring, disc, checkmark, and bold centred mark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkTemplate {
    pub style: IconStyle,
}

impl MarkTemplate {
    pub fn new(style: IconStyle) -> Self {
        Self { style }
    }
}

impl IconTemplate for MarkTemplate {
    fn render(&self, p: &IconParams) -> String {
        use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

        let s = &self.style;
        let mut out = String::with_capacity(640);

        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            r#"<svg width="{size}" height="{size}" xmlns="http://www.w3.org/2000/svg">"#,
            size = p.size,
        );
        let _ = writeln!(
            out,
            r#"  <circle cx="{c}" cy="{c}" r="{r}" fill="{fill}" stroke="{stroke}" stroke-width="2"/>"#,
            c = p.center,
            r = p.radius,
            fill = attr(&s.ring_fill),
            stroke = attr(&s.ring_stroke),
        );
        let _ = writeln!(
            out,
            r#"  <circle cx="{c}" cy="{c}" r="{r}" fill="{fill}" stroke="{stroke}" stroke-width="1"/>"#,
            c = p.center,
            r = p.inner_radius,
            fill = attr(&s.disc_fill),
            stroke = attr(&s.accent),
        );
        let _ = writeln!(
            out,
            r#"  <path d="M {} {} L {} {} L {} {}""#,
            p.check_x1, p.check_y1, p.check_x2, p.check_y2, p.check_x3, p.check_y3,
        );
        let _ = writeln!(
            out,
            r#"        stroke="{stroke}" stroke-width="{w}" fill="none" stroke-linecap="round"/>"#,
            stroke = attr(&s.accent),
            w = p.stroke_width,
        );
        let _ = writeln!(
            out,
            r#"  <text x="{x}" y="{y}" text-anchor="middle" font-family="{font}""#,
            x = p.center,
            y = p.text_y,
            font = attr(&s.font_family),
        );
        let _ = writeln!(
            out,
            r#"        font-size="{fs}" font-weight="bold" fill="{fill}">{mark}</text>"#,
            fs = p.font_size,
            fill = attr(&s.accent),
            mark = text(&s.mark),
        );
        out.push_str("</svg>");
        out
    }
}

/// Render `params` with the default mark template.
pub fn render(params: &IconParams) -> String {
    MarkTemplate::default().render(params)
}
