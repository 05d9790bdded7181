//! Drawable scene-graph model.
//!
//! A [`SceneGraph`] is the ordered list of primitives produced for one view.
//! Order is draw order: later nodes paint over earlier ones, so background
//! frames must be listed before the shapes placed on top of them. The whole
//! graph is rebuilt on every view switch; nothing here carries identity across
//! views.

use serde::{Deserialize, Serialize};

use crate::geom;

/// Symbolic name of the shared blur filter. Renderers declare the filter
/// definition once per surface; nodes only reference it by this name.
pub const GLOW_FILTER: &str = "glow";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
}

impl From<geom::Point> for ScenePoint {
    fn from(p: geom::Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAnchor {
    Start,
    Middle,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectNode {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rx: f64,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f64,
    pub dash: Option<String>,
    pub opacity: Option<f64>,
    /// Symbolic filter reference, e.g. [`GLOW_FILTER`].
    pub filter: Option<String>,
}

impl RectNode {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rx: 0.0,
            fill: None,
            stroke: None,
            stroke_width: 1.0,
            dash: None,
            opacity: None,
            filter: None,
        }
    }

    pub fn rounded(mut self, rx: f64) -> Self {
        self.rx = rx;
        self
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn dash(mut self, pattern: impl Into<String>) -> Self {
        self.dash = Some(pattern.into());
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn filter(mut self, name: impl Into<String>) -> Self {
        self.filter = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineNode {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: String,
    pub stroke_width: f64,
    pub dash: Option<String>,
    pub opacity: Option<f64>,
    /// When set, renderers attach a small marker that travels the segment on an
    /// infinite fixed-duration loop. Purely decorative; carries no state.
    pub animated: bool,
}

impl LineNode {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke: impl Into<String>) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke: stroke.into(),
            stroke_width: 1.0,
            dash: None,
            opacity: None,
            animated: false,
        }
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn dash(mut self, pattern: impl Into<String>) -> Self {
        self.dash = Some(pattern.into());
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn animated(mut self) -> Self {
        self.animated = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonNode {
    pub points: Vec<ScenePoint>,
    pub fill: String,
    pub opacity: Option<f64>,
}

impl PolygonNode {
    pub fn new(points: Vec<ScenePoint>, fill: impl Into<String>) -> Self {
        Self {
            points,
            fill: fill.into(),
            opacity: None,
        }
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathNode {
    pub d: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub dash: Option<String>,
    pub opacity: Option<f64>,
}

impl PathNode {
    pub fn new(d: impl Into<String>, stroke: impl Into<String>) -> Self {
        Self {
            d: d.into(),
            stroke: stroke.into(),
            stroke_width: 1.0,
            dash: None,
            opacity: None,
        }
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn dash(mut self, pattern: impl Into<String>) -> Self {
        self.dash = Some(pattern.into());
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub fill: String,
    pub font_size: f64,
    pub font_weight: Option<String>,
    pub font_family: String,
    pub anchor: TextAnchor,
    pub opacity: Option<f64>,
}

impl TextNode {
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            fill: "#000000".to_string(),
            font_size: 9.0,
            font_weight: None,
            font_family: crate::theme::Theme::FONT_MONO.to_string(),
            anchor: TextAnchor::Start,
            opacity: None,
        }
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn middle(mut self) -> Self {
        self.anchor = TextAnchor::Middle;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupNode {
    pub children: Vec<SceneNode>,
    /// Target view id for pointer activation. Renderers mark the group as a
    /// pointer target; hosts route the activation back to the controller as a
    /// `BoxActivated` event.
    pub on_activate: Option<String>,
}

impl GroupNode {
    pub fn new(children: Vec<SceneNode>) -> Self {
        Self {
            children,
            on_activate: None,
        }
    }

    pub fn on_activate(mut self, target: impl Into<String>) -> Self {
        self.on_activate = Some(target.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SceneNode {
    Rect(RectNode),
    Line(LineNode),
    Polygon(PolygonNode),
    Path(PathNode),
    Text(TextNode),
    Group(GroupNode),
}

impl From<RectNode> for SceneNode {
    fn from(node: RectNode) -> Self {
        SceneNode::Rect(node)
    }
}

impl From<LineNode> for SceneNode {
    fn from(node: LineNode) -> Self {
        SceneNode::Line(node)
    }
}

impl From<PolygonNode> for SceneNode {
    fn from(node: PolygonNode) -> Self {
        SceneNode::Polygon(node)
    }
}

impl From<PathNode> for SceneNode {
    fn from(node: PathNode) -> Self {
        SceneNode::Path(node)
    }
}

impl From<TextNode> for SceneNode {
    fn from(node: TextNode) -> Self {
        SceneNode::Text(node)
    }
}

impl From<GroupNode> for SceneNode {
    fn from(node: GroupNode) -> Self {
        SceneNode::Group(node)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneGraph {
    pub viewbox_width: f64,
    pub viewbox_height: f64,
    pub nodes: Vec<SceneNode>,
}

impl SceneGraph {
    pub fn new(viewbox_width: f64, viewbox_height: f64) -> Self {
        Self {
            viewbox_width,
            viewbox_height,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: impl Into<SceneNode>) {
        self.nodes.push(node.into());
    }

    /// Depth-first walk over every node, entering groups.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a SceneNode)) {
        fn go<'a>(nodes: &'a [SceneNode], visit: &mut impl FnMut(&'a SceneNode)) {
            for node in nodes {
                visit(node);
                if let SceneNode::Group(g) = node {
                    go(&g.children, visit);
                }
            }
        }
        go(&self.nodes, visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_enters_nested_groups() {
        let mut graph = SceneGraph::new(100.0, 100.0);
        graph.push(RectNode::new(0.0, 0.0, 10.0, 10.0));
        graph.push(GroupNode::new(vec![
            TextNode::new(0.0, 0.0, "a").into(),
            GroupNode::new(vec![TextNode::new(0.0, 0.0, "b").into()]).into(),
        ]));

        let mut texts = Vec::new();
        graph.walk(&mut |node| {
            if let SceneNode::Text(t) = node {
                texts.push(t.content.clone());
            }
        });
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn scene_graph_serializes_with_node_kind_tags() {
        let mut graph = SceneGraph::new(10.0, 10.0);
        graph.push(LineNode::new(0.0, 0.0, 5.0, 5.0, "#fff").animated());
        let json = serde_json::to_value(&graph).expect("serialize");
        assert_eq!(json["nodes"][0]["kind"], "line");
        assert_eq!(json["nodes"][0]["animated"], true);
    }
}
