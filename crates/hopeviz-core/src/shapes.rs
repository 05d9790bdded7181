//! Stateless shape primitives.
//!
//! Each builder maps a spec plus the theme to drawable scene nodes. Nothing in
//! here holds state between calls; active emphasis, interactivity and the
//! animated marker are all encoded on the emitted nodes.

use crate::geom::{self, Point};
use crate::scene::{
    GLOW_FILTER, GroupNode, LineNode, PolygonNode, RectNode, SceneNode, TextNode,
};
use crate::theme::Theme;

pub const BOX_CORNER_RADIUS: f64 = 8.0;
pub const ARROW_HEAD_LENGTH: f64 = 8.0;
pub const ARROW_OPACITY: f64 = 0.7;
pub const ARROW_LABEL_OFFSET: f64 = 8.0;
/// Block count shared by every bar within one diagram so columns align.
pub const FREQ_BAR_BLOCKS: usize = 12;
pub const FREQ_BLOCK_HEIGHT: f64 = 6.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BoxSpec {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub sublabel: Option<String>,
    pub color: String,
    pub glow_color: String,
    pub active: bool,
    /// Target view id; when set the whole box becomes a pointer target.
    pub on_activate: Option<String>,
}

impl BoxSpec {
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        label: impl Into<String>,
        color: impl Into<String>,
        glow_color: impl Into<String>,
    ) -> Self {
        Self {
            origin: geom::point(x, y),
            width,
            height,
            label: label.into(),
            sublabel: None,
            color: color.into(),
            glow_color: glow_color.into(),
            active: false,
            on_activate: None,
        }
    }

    pub fn sublabel(mut self, sublabel: impl Into<String>) -> Self {
        self.sublabel = Some(sublabel.into());
        self
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn on_activate(mut self, target: impl Into<String>) -> Self {
        self.on_activate = Some(target.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowSpec {
    pub from: Point,
    pub to: Point,
    pub color: String,
    pub dashed: bool,
    pub label: Option<String>,
    pub animated: bool,
}

impl ArrowSpec {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, color: impl Into<String>) -> Self {
        Self {
            from: geom::point(x1, y1),
            to: geom::point(x2, y2),
            color: color.into(),
            dashed: false,
            label: None,
            animated: false,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn animated(mut self) -> Self {
        self.animated = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyBarSpec {
    pub origin: Point,
    pub width: f64,
    pub block_count: usize,
    /// Normalized update rate in `[0, 1]`; clamped before quantization.
    pub frequency: f64,
    pub color: String,
    pub label: String,
}

impl FrequencyBarSpec {
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        frequency: f64,
        color: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            origin: geom::point(x, y),
            width,
            block_count: FREQ_BAR_BLOCKS,
            frequency,
            color: color.into(),
            label: label.into(),
        }
    }
}

/// Builds a labeled rounded box, with a glow outline and emphasized border when
/// active. The label centers horizontally; with a sublabel the pair splits
/// around the vertical center, otherwise the label centers vertically.
pub fn build_box(spec: &BoxSpec, theme: &Theme) -> SceneNode {
    let (x, y, w, h) = (spec.origin.x, spec.origin.y, spec.width, spec.height);
    let mut children: Vec<SceneNode> = Vec::new();

    let fill = if spec.active {
        spec.glow_color.clone()
    } else {
        theme.surface.clone()
    };
    let stroke = if spec.active {
        spec.color.clone()
    } else {
        theme.border.clone()
    };
    children.push(
        RectNode::new(x, y, w, h)
            .rounded(BOX_CORNER_RADIUS)
            .fill(fill)
            .stroke(stroke)
            .stroke_width(if spec.active { 2.0 } else { 1.0 })
            .into(),
    );

    if spec.active {
        children.push(
            RectNode::new(x, y, w, h)
                .rounded(BOX_CORNER_RADIUS)
                .fill("none")
                .stroke(spec.color.clone())
                .stroke_width(1.0)
                .opacity(0.3)
                .filter(GLOW_FILTER)
                .into(),
        );
    }

    let label_y = if spec.sublabel.is_some() {
        y + h / 2.0 - 4.0
    } else {
        y + h / 2.0 + 1.0
    };
    let label_fill = if spec.active {
        spec.color.clone()
    } else {
        theme.text.clone()
    };
    children.push(
        TextNode::new(x + w / 2.0, label_y, spec.label.clone())
            .fill(label_fill)
            .size(12.0)
            .weight("600")
            .middle()
            .into(),
    );

    if let Some(sublabel) = &spec.sublabel {
        children.push(
            TextNode::new(x + w / 2.0, y + h / 2.0 + 12.0, sublabel.clone())
                .fill(theme.text_muted.clone())
                .size(9.0)
                .middle()
                .into(),
        );
    }

    let mut group = GroupNode::new(children);
    if let Some(target) = &spec.on_activate {
        group = group.on_activate(target.clone());
    }
    group.into()
}

/// Builds a directed arrow: translucent line, arrowhead polygon, optional
/// traveling marker and optional midpoint label. A degenerate segment
/// (`from == to`) yields the line only, with no head.
pub fn build_arrow(spec: &ArrowSpec, theme: &Theme) -> SceneNode {
    let mut children: Vec<SceneNode> = Vec::new();

    let mut line = LineNode::new(
        spec.from.x,
        spec.from.y,
        spec.to.x,
        spec.to.y,
        spec.color.clone(),
    )
    .stroke_width(1.5)
    .opacity(ARROW_OPACITY);
    if spec.dashed {
        line = line.dash("6,4");
    }
    if spec.animated {
        line = line.animated();
    }
    children.push(line.into());

    if let Some((left, right)) = geom::arrowhead_wings(spec.from, spec.to, ARROW_HEAD_LENGTH) {
        children.push(
            PolygonNode::new(
                vec![spec.to.into(), left.into(), right.into()],
                spec.color.clone(),
            )
            .opacity(ARROW_OPACITY)
            .into(),
        );
    }

    if let Some(label) = &spec.label {
        let mid = geom::midpoint(spec.from, spec.to);
        children.push(
            TextNode::new(mid.x, mid.y - ARROW_LABEL_OFFSET, label.clone())
                .fill(theme.text_muted.clone())
                .size(9.0)
                .middle()
                .into(),
        );
    }

    GroupNode::new(children).into()
}

/// Builds a quantized rate indicator: `block_count` small blocks, the first
/// `quantize_frequency(..)` of them filled with the spec color, the rest dimmed
/// to the neutral border color. No interactivity, no animation.
pub fn build_frequency_bar(spec: &FrequencyBarSpec, theme: &Theme) -> SceneNode {
    let (x, y) = (spec.origin.x, spec.origin.y);
    let mut children: Vec<SceneNode> = Vec::new();

    if !spec.label.is_empty() {
        children.push(
            TextNode::new(x, y - 4.0, spec.label.clone())
                .fill(theme.text_muted.clone())
                .size(8.0)
                .into(),
        );
    }

    let active = geom::quantize_frequency(spec.frequency, spec.block_count);
    let blocks = spec.block_count.max(1) as f64;
    let step = spec.width / blocks + 1.0;
    let block_width = spec.width / blocks - 1.0;
    for i in 0..spec.block_count {
        let filled = i < active;
        children.push(
            RectNode::new(x + i as f64 * step, y, block_width, FREQ_BLOCK_HEIGHT)
                .rounded(1.0)
                .fill(if filled {
                    spec.color.clone()
                } else {
                    theme.border.clone()
                })
                .opacity(if filled { 0.8 } else { 0.3 })
                .into(),
        );
    }

    GroupNode::new(children).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(node: SceneNode) -> GroupNode {
        match node {
            SceneNode::Group(g) => g,
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn inactive_box_has_no_glow_outline() {
        let theme = Theme::default();
        let spec = BoxSpec::new(0.0, 0.0, 100.0, 50.0, "A", "#fff", "#333");
        let g = group(build_box(&spec, &theme));
        let rects = g
            .children
            .iter()
            .filter(|n| matches!(n, SceneNode::Rect(_)))
            .count();
        assert_eq!(rects, 1);
    }

    #[test]
    fn active_box_adds_glow_outline_referencing_shared_filter() {
        let theme = Theme::default();
        let spec = BoxSpec::new(0.0, 0.0, 100.0, 50.0, "A", "#fff", "#333").active();
        let g = group(build_box(&spec, &theme));
        let filters: Vec<_> = g
            .children
            .iter()
            .filter_map(|n| match n {
                SceneNode::Rect(r) => r.filter.as_deref(),
                _ => None,
            })
            .collect();
        assert_eq!(filters, vec![GLOW_FILTER]);
    }

    #[test]
    fn box_label_splits_around_center_with_sublabel() {
        let theme = Theme::default();
        let plain = BoxSpec::new(0.0, 0.0, 100.0, 50.0, "A", "#fff", "#333");
        let with_sub = plain.clone().sublabel("sub");

        let texts = |node: SceneNode| -> Vec<f64> {
            group(node)
                .children
                .into_iter()
                .filter_map(|n| match n {
                    SceneNode::Text(t) => Some(t.y),
                    _ => None,
                })
                .collect()
        };

        assert_eq!(texts(build_box(&plain, &theme)), vec![26.0]);
        assert_eq!(texts(build_box(&with_sub, &theme)), vec![21.0, 37.0]);
    }

    #[test]
    fn box_activation_target_lands_on_the_group() {
        let theme = Theme::default();
        let spec = BoxSpec::new(0.0, 0.0, 10.0, 10.0, "A", "#fff", "#333").on_activate("cms");
        let g = group(build_box(&spec, &theme));
        assert_eq!(g.on_activate.as_deref(), Some("cms"));
    }

    #[test]
    fn arrow_has_translucent_line_and_head() {
        let theme = Theme::default();
        let spec = ArrowSpec::new(0.0, 0.0, 100.0, 0.0, "#abc").animated();
        let g = group(build_arrow(&spec, &theme));
        assert_eq!(g.children.len(), 2);
        let SceneNode::Line(line) = &g.children[0] else {
            panic!("line first");
        };
        assert_eq!(line.opacity, Some(ARROW_OPACITY));
        assert!(line.animated);
        let SceneNode::Polygon(head) = &g.children[1] else {
            panic!("head second");
        };
        assert_eq!(head.points.len(), 3);
        assert_eq!(head.points[0].x, 100.0);
    }

    #[test]
    fn degenerate_arrow_omits_the_head() {
        let theme = Theme::default();
        let spec = ArrowSpec::new(5.0, 5.0, 5.0, 5.0, "#abc");
        let g = group(build_arrow(&spec, &theme));
        assert!(
            g.children
                .iter()
                .all(|n| !matches!(n, SceneNode::Polygon(_)))
        );
    }

    #[test]
    fn dashed_arrow_uses_dash_pattern() {
        let theme = Theme::default();
        let spec = ArrowSpec::new(0.0, 0.0, 10.0, 0.0, "#abc").dashed();
        let g = group(build_arrow(&spec, &theme));
        let SceneNode::Line(line) = &g.children[0] else {
            panic!("line first");
        };
        assert_eq!(line.dash.as_deref(), Some("6,4"));
    }

    #[test]
    fn arrow_label_sits_above_the_midpoint() {
        let theme = Theme::default();
        let spec = ArrowSpec::new(0.0, 10.0, 100.0, 10.0, "#abc").label("flow");
        let g = group(build_arrow(&spec, &theme));
        let SceneNode::Text(t) = g.children.last().expect("label node") else {
            panic!("label last");
        };
        assert_eq!((t.x, t.y), (50.0, 2.0));
    }

    #[test]
    fn frequency_bar_fills_quantized_prefix() {
        let theme = Theme::default();
        let spec = FrequencyBarSpec::new(0.0, 0.0, 90.0, 0.35, "#f59e0b", "freq");
        let g = group(build_frequency_bar(&spec, &theme));
        let fills: Vec<_> = g
            .children
            .iter()
            .filter_map(|n| match n {
                SceneNode::Rect(r) => Some((r.fill.clone(), r.opacity)),
                _ => None,
            })
            .collect();
        assert_eq!(fills.len(), FREQ_BAR_BLOCKS);
        // round(0.35 * 12) = 4 filled blocks.
        for (i, (fill, opacity)) in fills.iter().enumerate() {
            if i < 4 {
                assert_eq!(fill.as_deref(), Some("#f59e0b"));
                assert_eq!(*opacity, Some(0.8));
            } else {
                assert_eq!(fill.as_deref(), Some(theme.border.as_str()));
                assert_eq!(*opacity, Some(0.3));
            }
        }
    }

    #[test]
    fn frequency_bar_label_is_above_the_leftmost_block() {
        let theme = Theme::default();
        let spec = FrequencyBarSpec::new(10.0, 20.0, 90.0, 1.0, "#fff", "fast");
        let g = group(build_frequency_bar(&spec, &theme));
        let SceneNode::Text(t) = &g.children[0] else {
            panic!("label first");
        };
        assert_eq!((t.x, t.y), (10.0, 16.0));
    }

    #[test]
    fn empty_frequency_bar_label_is_skipped() {
        let theme = Theme::default();
        let spec = FrequencyBarSpec::new(0.0, 0.0, 90.0, 1.0, "#fff", "");
        let g = group(build_frequency_bar(&spec, &theme));
        assert!(g.children.iter().all(|n| !matches!(n, SceneNode::Text(_))));
    }
}
