//! Full-pipeline view: tokens through Titans and the CMS stack to the output
//! logits, with update-frequency indicators and the residual path.

use super::{VIEWBOX_HEIGHT, VIEWBOX_WIDTH};
use crate::scene::{GroupNode, PathNode, RectNode, SceneGraph, TextNode};
use crate::shapes::{
    ArrowSpec, BoxSpec, FrequencyBarSpec, build_arrow, build_box, build_frequency_bar,
};
use crate::theme::Theme;

pub(super) fn build(theme: &Theme) -> SceneGraph {
    let mut graph = SceneGraph::new(VIEWBOX_WIDTH, VIEWBOX_HEIGHT);

    graph.push(build_box(
        &BoxSpec::new(20.0, 220.0, 120.0, 50.0, "Input Tokens", &theme.text, &theme.surface_light)
            .sublabel("\"The cat sat\""),
        theme,
    ));
    graph.push(build_arrow(
        &ArrowSpec::new(140.0, 245.0, 180.0, 245.0, &theme.text_muted).animated(),
        theme,
    ));

    graph.push(build_box(
        &BoxSpec::new(180.0, 220.0, 100.0, 50.0, "Embedding", &theme.text, &theme.surface_light)
            .sublabel("+ Position"),
        theme,
    ));
    graph.push(build_arrow(
        &ArrowSpec::new(280.0, 245.0, 320.0, 245.0, &theme.text_muted).animated(),
        theme,
    ));

    // HOPE block frame; drawn before its contents so they paint on top.
    graph.push(
        RectNode::new(320.0, 60.0, 380.0, 380.0)
            .rounded(12.0)
            .fill("none")
            .stroke(&theme.accent)
            .stroke_width(1.5)
            .dash("8,4")
            .opacity(0.4),
    );
    graph.push(
        TextNode::new(510.0, 85.0, "HOPE Block (xN layers)")
            .fill(&theme.accent)
            .size(13.0)
            .weight("700")
            .family(Theme::FONT_DISPLAY)
            .middle(),
    );

    graph.push(build_box(
        &BoxSpec::new(
            350.0,
            110.0,
            320.0,
            60.0,
            "Self-Modifying Titans",
            &theme.fast,
            &theme.fast_glow,
        )
        .sublabel("Learns its own update rules (Eqs 83-93)")
        .active()
        .on_activate("selfmod"),
        theme,
    ));
    graph.push(build_arrow(
        &ArrowSpec::new(510.0, 170.0, 510.0, 200.0, &theme.fast).animated(),
        theme,
    ));

    // CMS frame is itself a navigation target for the detailed view.
    graph.push(GroupNode::new(vec![
        RectNode::new(350.0, 200.0, 320.0, 200.0)
            .rounded(8.0)
            .fill(&theme.surface_light)
            .stroke(&theme.border)
            .into(),
        TextNode::new(510.0, 222.0, "Continuum Memory System")
            .fill(&theme.text)
            .size(11.0)
            .weight("700")
            .family(Theme::FONT_DISPLAY)
            .middle()
            .into(),
    ])
    .on_activate("cms"));

    graph.push(build_box(
        &BoxSpec::new(370.0, 235.0, 280.0, 40.0, "Fast MLP", &theme.fast, &theme.fast_glow)
            .sublabel("Update every ~16 tokens")
            .active(),
        theme,
    ));
    graph.push(build_arrow(
        &ArrowSpec::new(510.0, 275.0, 510.0, 290.0, &theme.medium),
        theme,
    ));
    graph.push(build_box(
        &BoxSpec::new(370.0, 290.0, 280.0, 40.0, "Medium MLP", &theme.medium, &theme.medium_glow)
            .sublabel("Update every ~64 tokens")
            .active(),
        theme,
    ));
    graph.push(build_arrow(
        &ArrowSpec::new(510.0, 330.0, 510.0, 345.0, &theme.slow),
        theme,
    ));
    graph.push(build_box(
        &BoxSpec::new(370.0, 345.0, 280.0, 40.0, "Slow MLP", &theme.slow, &theme.slow_glow)
            .sublabel("Update every ~256 tokens")
            .active(),
        theme,
    ));

    graph.push(build_frequency_bar(
        &FrequencyBarSpec::new(370.0, 410.0, 90.0, 1.0, &theme.fast, "Fast freq"),
        theme,
    ));
    graph.push(build_frequency_bar(
        &FrequencyBarSpec::new(475.0, 410.0, 90.0, 0.4, &theme.medium, "Med freq"),
        theme,
    ));
    graph.push(build_frequency_bar(
        &FrequencyBarSpec::new(580.0, 410.0, 90.0, 0.1, &theme.slow, "Slow freq"),
        theme,
    ));

    graph.push(build_arrow(
        &ArrowSpec::new(700.0, 245.0, 740.0, 245.0, &theme.text_muted).animated(),
        theme,
    ));
    graph.push(build_box(
        &BoxSpec::new(740.0, 220.0, 140.0, 50.0, "Output Logits", &theme.accent, &theme.accent_glow)
            .sublabel("Next token pred")
            .active(),
        theme,
    ));

    graph.push(
        PathNode::new("M 340 245 L 340 460 L 720 460 L 720 245", &theme.text_muted)
            .dash("4,4")
            .opacity(0.4),
    );
    graph.push(
        TextNode::new(530.0, 475.0, "residual connection")
            .fill(&theme.text_muted)
            .size(9.0)
            .middle(),
    );

    graph.push(
        TextNode::new(20.0, 460.0, "Click components to explore")
            .fill(&theme.text_muted)
            .size(9.0),
    );

    graph
}
