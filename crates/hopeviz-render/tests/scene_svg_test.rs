use hopeviz_core::scene::{GLOW_FILTER, GroupNode, LineNode, RectNode, SceneGraph, TextNode};
use hopeviz_core::theme::Theme;
use hopeviz_core::views::ViewRegistry;
use hopeviz_render::svg::{render_scene_svg, SvgRenderOptions};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.match_indices(needle).count()
}

#[test]
fn glow_filter_is_declared_once_per_surface() {
    let registry = ViewRegistry::builtin();
    let theme = Theme::default();
    let entry = registry.get("overview").expect("overview registered");
    let graph = (entry.build)(&theme);
    let svg = render_scene_svg(&graph, &theme, &SvgRenderOptions::default());

    // The overview has several active boxes, all referencing one definition.
    assert_eq!(count(&svg, "<feGaussianBlur"), 1);
    assert!(count(&svg, "url(#glow)") >= 2);
}

#[test]
fn diagram_id_prefixes_internal_ids() {
    let theme = Theme::default();
    let mut graph = SceneGraph::new(100.0, 100.0);
    graph.push(
        RectNode::new(0.0, 0.0, 10.0, 10.0)
            .fill("none")
            .filter(GLOW_FILTER),
    );
    let options = SvgRenderOptions {
        diagram_id: Some("left".to_string()),
        background: None,
    };
    let svg = render_scene_svg(&graph, &theme, &options);
    assert!(svg.contains(r#"<svg id="left""#));
    assert!(svg.contains(r#"<filter id="left-glow">"#));
    assert!(svg.contains(r#"filter="url(#left-glow)""#));
}

#[test]
fn nodes_are_emitted_in_graph_order() {
    let theme = Theme::default();
    let mut graph = SceneGraph::new(100.0, 100.0);
    graph.push(RectNode::new(0.0, 0.0, 50.0, 50.0).fill("#111"));
    graph.push(TextNode::new(5.0, 5.0, "on top").fill("#eee"));
    let svg = render_scene_svg(&graph, &theme, &SvgRenderOptions::default());

    let rect_at = svg.find("<rect").expect("rect emitted");
    let text_at = svg.find("<text").expect("text emitted");
    assert!(rect_at < text_at, "background frame draws before the label");
}

#[test]
fn text_content_is_escaped() {
    let theme = Theme::default();
    let mut graph = SceneGraph::new(100.0, 100.0);
    graph.push(TextNode::new(0.0, 0.0, "a < b & \"c\"").fill("#fff"));
    let svg = render_scene_svg(&graph, &theme, &SvgRenderOptions::default());
    assert!(svg.contains("a &lt; b &amp; &quot;c&quot;</text>"));
}

#[test]
fn animated_line_gains_a_looping_marker() {
    let theme = Theme::default();
    let mut graph = SceneGraph::new(100.0, 100.0);
    graph.push(LineNode::new(0.0, 0.0, 50.0, 0.0, "#f59e0b").animated());
    let svg = render_scene_svg(&graph, &theme, &SvgRenderOptions::default());
    assert!(
        svg.contains(r#"<animateMotion dur="2s" repeatCount="indefinite" path="M0,0 L50,0"/>"#)
    );
}

#[test]
fn static_line_has_no_marker() {
    let theme = Theme::default();
    let mut graph = SceneGraph::new(100.0, 100.0);
    graph.push(LineNode::new(0.0, 0.0, 50.0, 0.0, "#f59e0b"));
    let svg = render_scene_svg(&graph, &theme, &SvgRenderOptions::default());
    assert!(!svg.contains("animateMotion"));
}

#[test]
fn interactive_groups_carry_their_target() {
    let theme = Theme::default();
    let mut graph = SceneGraph::new(100.0, 100.0);
    graph.push(GroupNode::new(vec![RectNode::new(0.0, 0.0, 10.0, 10.0).into()]).on_activate("cms"));
    graph.push(GroupNode::new(vec![RectNode::new(20.0, 0.0, 10.0, 10.0).into()]));
    let svg = render_scene_svg(&graph, &theme, &SvgRenderOptions::default());
    assert_eq!(count(&svg, r#"data-view-target="cms""#), 1);
    assert_eq!(count(&svg, "cursor: pointer"), 1);
}

#[test]
fn background_defaults_to_the_theme_surface() {
    let theme = Theme::default();
    let graph = SceneGraph::new(100.0, 100.0);
    let svg = render_scene_svg(&graph, &theme, &SvgRenderOptions::default());
    assert!(svg.contains(r#"style="background-color: #111827;""#));

    let options = SvgRenderOptions {
        diagram_id: None,
        background: Some("#000000".to_string()),
    };
    let svg = render_scene_svg(&graph, &theme, &options);
    assert!(svg.contains(r#"style="background-color: #000000;""#));
}
