//! SVG emission for scene graphs.
//!
//! The renderer walks nodes in graph order (draw order) and writes one element
//! per node. Shared visual effects are declared exactly once per surface: the
//! `glow` blur filter lives in `<defs>` and active shapes reference it by id.

use std::fmt::Write as _;

use hopeviz_core::scene::{GroupNode, SceneGraph, SceneNode, TextNode};
use hopeviz_core::theme::Theme;

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Root `id` attribute, also used to prefix internal ids (filter defs) so
    /// several panels can share one host document.
    pub diagram_id: Option<String>,
    /// Surface background; falls back to the theme surface color.
    pub background: Option<String>,
}

/// Converts an arbitrary string into a conservative SVG `id` token.
///
/// The root id prefixes internal ids like the glow filter, so embedding two
/// diagrams with the same id would make those references collide.
pub fn sanitize_svg_id(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "hope-untitled".to_string();
    }

    let mut out = String::with_capacity(raw.len() + 5);
    for ch in raw.chars() {
        let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':' || ch == '.';
        out.push(if ok { ch } else { '-' });
    }

    let starts_ok = out.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_ok {
        out.insert_str(0, "hope-");
    }

    while out.contains("--") {
        out = out.replace("--", "-");
    }
    let out = out.trim_matches('-');
    if out.is_empty() || out == "hope" {
        return "hope-untitled".to_string();
    }
    out.to_string()
}

/// Renders one scene graph to a standalone `<svg>` document fragment.
pub fn render_scene_svg(graph: &SceneGraph, theme: &Theme, options: &SvgRenderOptions) -> String {
    let id_prefix = options
        .diagram_id
        .as_deref()
        .map(|id| format!("{id}-"))
        .unwrap_or_default();
    let background = options.background.as_deref().unwrap_or(&theme.surface);

    let mut out = String::new();
    out.push_str("<svg");
    if let Some(id) = options.diagram_id.as_deref() {
        let _ = write!(&mut out, r#" id="{}""#, escape_xml(id));
    }
    let _ = write!(
        &mut out,
        r#" width="100%" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {vbw} {vbh}" role="graphics-document document" aria-roledescription="architecture" style="background-color: {bg};">"#,
        vbw = fmt(graph.viewbox_width),
        vbh = fmt(graph.viewbox_height),
        bg = escape_xml(background),
    );

    // One shared filter definition regardless of how many shapes reference it.
    let _ = write!(
        &mut out,
        r#"<defs><filter id="{prefix}glow"><feGaussianBlur stdDeviation="4" result="blur"/><feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge></filter></defs>"#,
        prefix = id_prefix,
    );

    for node in &graph.nodes {
        write_node(&mut out, node, &id_prefix);
    }

    out.push_str("</svg>\n");
    out
}

fn write_node(out: &mut String, node: &SceneNode, id_prefix: &str) {
    match node {
        SceneNode::Rect(r) => {
            let _ = write!(
                out,
                r#"<rect x="{x}" y="{y}" width="{w}" height="{h}""#,
                x = fmt(r.x),
                y = fmt(r.y),
                w = fmt(r.width),
                h = fmt(r.height),
            );
            if r.rx > 0.0 {
                let _ = write!(out, r#" rx="{}""#, fmt(r.rx));
            }
            if let Some(fill) = &r.fill {
                let _ = write!(out, r#" fill="{}""#, escape_xml(fill));
            }
            if let Some(stroke) = &r.stroke {
                let _ = write!(
                    out,
                    r#" stroke="{}" stroke-width="{}""#,
                    escape_xml(stroke),
                    fmt(r.stroke_width)
                );
            }
            if let Some(dash) = &r.dash {
                let _ = write!(out, r#" stroke-dasharray="{}""#, escape_xml(dash));
            }
            if let Some(opacity) = r.opacity {
                let _ = write!(out, r#" opacity="{}""#, fmt(opacity));
            }
            if let Some(filter) = &r.filter {
                let _ = write!(out, r#" filter="url(#{id_prefix}{})""#, escape_xml(filter));
            }
            out.push_str("/>");
        }
        SceneNode::Line(l) => {
            let _ = write!(
                out,
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{stroke}" stroke-width="{sw}""#,
                x1 = fmt(l.x1),
                y1 = fmt(l.y1),
                x2 = fmt(l.x2),
                y2 = fmt(l.y2),
                stroke = escape_xml(&l.stroke),
                sw = fmt(l.stroke_width),
            );
            if let Some(dash) = &l.dash {
                let _ = write!(out, r#" stroke-dasharray="{}""#, escape_xml(dash));
            }
            if let Some(opacity) = l.opacity {
                let _ = write!(out, r#" opacity="{}""#, fmt(opacity));
            }
            out.push_str("/>");
            if l.animated {
                // Decorative traveling marker; loops forever and is dropped
                // with the rest of the graph on the next view switch.
                let _ = write!(
                    out,
                    r#"<circle r="3" fill="{fill}"><animateMotion dur="2s" repeatCount="indefinite" path="M{x1},{y1} L{x2},{y2}"/></circle>"#,
                    fill = escape_xml(&l.stroke),
                    x1 = fmt(l.x1),
                    y1 = fmt(l.y1),
                    x2 = fmt(l.x2),
                    y2 = fmt(l.y2),
                );
            }
        }
        SceneNode::Polygon(p) => {
            let mut points = String::new();
            for (i, pt) in p.points.iter().enumerate() {
                if i > 0 {
                    points.push(' ');
                }
                let _ = write!(&mut points, "{},{}", fmt(pt.x), fmt(pt.y));
            }
            let _ = write!(
                out,
                r#"<polygon points="{points}" fill="{fill}""#,
                fill = escape_xml(&p.fill)
            );
            if let Some(opacity) = p.opacity {
                let _ = write!(out, r#" opacity="{}""#, fmt(opacity));
            }
            out.push_str("/>");
        }
        SceneNode::Path(p) => {
            let _ = write!(
                out,
                r#"<path d="{d}" fill="none" stroke="{stroke}" stroke-width="{sw}""#,
                d = escape_xml(&p.d),
                stroke = escape_xml(&p.stroke),
                sw = fmt(p.stroke_width),
            );
            if let Some(dash) = &p.dash {
                let _ = write!(out, r#" stroke-dasharray="{}""#, escape_xml(dash));
            }
            if let Some(opacity) = p.opacity {
                let _ = write!(out, r#" opacity="{}""#, fmt(opacity));
            }
            out.push_str("/>");
        }
        SceneNode::Text(t) => write_text(out, t),
        SceneNode::Group(g) => write_group(out, g, id_prefix),
    }
}

fn write_text(out: &mut String, t: &TextNode) {
    let _ = write!(
        out,
        r#"<text x="{x}" y="{y}" fill="{fill}" font-size="{size}""#,
        x = fmt(t.x),
        y = fmt(t.y),
        fill = escape_xml(&t.fill),
        size = fmt(t.font_size),
    );
    if let Some(weight) = &t.font_weight {
        let _ = write!(out, r#" font-weight="{}""#, escape_xml(weight));
    }
    let _ = write!(
        out,
        r#" text-anchor="{anchor}" font-family="{family}""#,
        anchor = t.anchor.as_str(),
        family = escape_xml(&t.font_family),
    );
    if let Some(opacity) = t.opacity {
        let _ = write!(out, r#" opacity="{}""#, fmt(opacity));
    }
    let _ = write!(out, ">{}</text>", escape_xml(&t.content));
}

fn write_group(out: &mut String, g: &GroupNode, id_prefix: &str) {
    out.push_str("<g");
    if let Some(target) = &g.on_activate {
        // Hosts route clicks on this group back to the controller as a
        // BoxActivated event carrying this target id.
        let _ = write!(
            out,
            r#" data-view-target="{}" style="cursor: pointer;""#,
            escape_xml(target)
        );
    }
    out.push('>');
    for child in &g.children {
        write_node(out, child, id_prefix);
    }
    out.push_str("</g>");
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Stringifies numbers for SVG attributes: round-trippable decimal form, but
/// no `-0` and no tiny float noise from our own calculations.
pub(crate) fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_drops_float_noise_and_negative_zero() {
        assert_eq!(fmt(245.00000000001), "245");
        assert_eq!(fmt(-0.0), "0");
        assert_eq!(fmt(1.5), "1.5");
        assert_eq!(fmt(f64::NAN), "0");
    }

    #[test]
    fn escape_xml_covers_attribute_contexts() {
        assert_eq!(
            escape_xml(r#"'JetBrains Mono', "mono" <&>"#),
            "&#39;JetBrains Mono&#39;, &quot;mono&quot; &lt;&amp;&gt;"
        );
    }

    #[test]
    fn sanitize_svg_id_is_conservative() {
        assert_eq!(sanitize_svg_id("  my diagram!  "), "my-diagram");
        assert_eq!(sanitize_svg_id("42nd"), "hope-42nd");
        assert_eq!(sanitize_svg_id(""), "hope-untitled");
        assert_eq!(sanitize_svg_id("***"), "hope-untitled");
    }
}
