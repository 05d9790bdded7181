//! Optimizer view: standard momentum next to the learned-memory DMGD update.

use super::{VIEWBOX_HEIGHT, VIEWBOX_WIDTH};
use crate::scene::{RectNode, SceneGraph, TextNode};
use crate::shapes::{ArrowSpec, BoxSpec, build_arrow, build_box};
use crate::theme::Theme;

pub(super) fn build(theme: &Theme) -> SceneGraph {
    let mut graph = SceneGraph::new(VIEWBOX_WIDTH, VIEWBOX_HEIGHT);

    graph.push(
        TextNode::new(450.0, 30.0, "Deep Momentum Gradient Descent (DMGD)")
            .fill(&theme.text)
            .size(16.0)
            .weight("700")
            .family(Theme::FONT_DISPLAY)
            .middle(),
    );
    graph.push(
        TextNode::new(
            450.0,
            50.0,
            "Replacing hand-crafted optimizer rules with learned neural networks (Paper Eqs. 21-23)",
        )
        .fill(&theme.text_muted)
        .size(11.0)
        .middle(),
    );

    graph.push(
        RectNode::new(30.0, 80.0, 380.0, 220.0)
            .rounded(10.0)
            .fill(&theme.danger_glow)
            .stroke(&theme.danger)
            .dash("6,3"),
    );
    graph.push(
        TextNode::new(220.0, 105.0, "Standard Adam/SGD")
            .fill(&theme.danger)
            .size(13.0)
            .weight("700")
            .family(Theme::FONT_DISPLAY)
            .middle(),
    );
    graph.push(build_box(
        &BoxSpec::new(
            60.0,
            120.0,
            140.0,
            36.0,
            "Gradient g_t",
            &theme.text_muted,
            &theme.surface_light,
        ),
        theme,
    ));
    graph.push(build_arrow(
        &ArrowSpec::new(200.0, 138.0, 230.0, 138.0, &theme.text_muted),
        theme,
    ));
    graph.push(build_box(
        &BoxSpec::new(
            230.0,
            120.0,
            150.0,
            36.0,
            "m = beta*m + g",
            &theme.danger,
            &theme.danger_glow,
        )
        .sublabel("Simple average")
        .active(),
        theme,
    ));
    graph.push(build_arrow(
        &ArrowSpec::new(305.0, 156.0, 305.0, 176.0, &theme.text_muted),
        theme,
    ));
    graph.push(build_box(
        &BoxSpec::new(
            230.0,
            176.0,
            150.0,
            36.0,
            "W -= lr * m",
            &theme.text_muted,
            &theme.surface_light,
        )
        .sublabel("Update weights"),
        theme,
    ));
    graph.push(
        TextNode::new(220.0, 240.0, "Dot-product similarity only")
            .fill(&theme.text_muted)
            .size(9.0)
            .middle(),
    );
    graph.push(
        TextNode::new(220.0, 255.0, "Can't relate different samples")
            .fill(&theme.text_muted)
            .size(9.0)
            .middle(),
    );
    graph.push(
        TextNode::new(220.0, 270.0, "Prone to forgetting")
            .fill(&theme.danger)
            .size(9.0)
            .middle(),
    );

    graph.push(
        RectNode::new(450.0, 80.0, 430.0, 220.0)
            .rounded(10.0)
            .fill(&theme.accent_glow)
            .stroke(&theme.accent)
            .stroke_width(1.5),
    );
    graph.push(
        TextNode::new(665.0, 105.0, "DMGD (Nested Learning)")
            .fill(&theme.accent)
            .size(13.0)
            .weight("700")
            .family(Theme::FONT_DISPLAY)
            .middle(),
    );
    graph.push(build_box(
        &BoxSpec::new(
            480.0,
            120.0,
            120.0,
            36.0,
            "Gradient g_t",
            &theme.text_muted,
            &theme.surface_light,
        ),
        theme,
    ));
    graph.push(build_arrow(
        &ArrowSpec::new(600.0, 138.0, 630.0, 138.0, &theme.accent).animated(),
        theme,
    ));

    graph.push(
        RectNode::new(630.0, 115.0, 220.0, 50.0)
            .rounded(8.0)
            .fill(&theme.fast_glow)
            .stroke(&theme.fast)
            .stroke_width(1.5),
    );
    graph.push(
        TextNode::new(740.0, 137.0, "Neural Memory Module")
            .fill(&theme.fast)
            .size(11.0)
            .weight("700")
            .family(Theme::FONT_DISPLAY)
            .middle(),
    );
    graph.push(
        TextNode::new(740.0, 153.0, "MLP that LEARNS momentum")
            .fill(&theme.text_muted)
            .size(9.0)
            .middle(),
    );

    graph.push(build_arrow(
        &ArrowSpec::new(740.0, 165.0, 740.0, 185.0, &theme.accent).animated(),
        theme,
    ));
    graph.push(build_box(
        &BoxSpec::new(
            630.0,
            185.0,
            220.0,
            36.0,
            "m = Memory(g_t)",
            &theme.accent,
            &theme.accent_glow,
        )
        .sublabel("L2 regression loss")
        .active(),
        theme,
    ));
    graph.push(build_arrow(
        &ArrowSpec::new(740.0, 221.0, 740.0, 241.0, &theme.accent),
        theme,
    ));
    graph.push(build_box(
        &BoxSpec::new(
            630.0,
            241.0,
            220.0,
            36.0,
            "W -= lr * m",
            &theme.text_muted,
            &theme.surface_light,
        )
        .sublabel("Expressive update"),
        theme,
    ));

    graph.push(
        TextNode::new(430.0, 200.0, "vs")
            .fill(&theme.text_muted)
            .size(10.0)
            .weight("600")
            .family(Theme::FONT_DISPLAY)
            .middle(),
    );

    graph.push(
        RectNode::new(30.0, 330.0, 850.0, 100.0)
            .rounded(10.0)
            .fill(&theme.surface_light)
            .stroke(&theme.border),
    );
    graph.push(
        TextNode::new(450.0, 355.0, "The Key Insight")
            .fill(&theme.text)
            .size(13.0)
            .weight("700")
            .family(Theme::FONT_DISPLAY)
            .middle(),
    );
    graph.push(
        TextNode::new(
            450.0,
            378.0,
            "Adam/SGD are actually associative memory modules; they just use a very simple (dot product) memory.",
        )
        .fill(&theme.text_muted)
        .size(10.0)
        .middle(),
    );
    graph.push(
        TextNode::new(
            450.0,
            396.0,
            "DMGD replaces this with a neural network that maps: data -> error (how surprising it was).",
        )
        .fill(&theme.text_muted)
        .size(10.0)
        .middle(),
    );
    graph.push(
        TextNode::new(
            450.0,
            414.0,
            "Result: more resilient to imperfect/noisy data, better gradient compression, less forgetting.",
        )
        .fill(&theme.accent)
        .size(10.0)
        .weight("600")
        .middle(),
    );

    graph.push(
        RectNode::new(30.0, 450.0, 850.0, 55.0)
            .rounded(8.0)
            .fill(&theme.surface)
            .stroke(&theme.accent)
            .dash("4,3"),
    );
    graph.push(
        TextNode::new(450.0, 472.0, "This is WHY it's called \"Nested\" Learning:")
            .fill(&theme.accent)
            .size(10.0)
            .weight("600")
            .family(Theme::FONT_DISPLAY)
            .middle(),
    );
    graph.push(
        TextNode::new(
            450.0,
            490.0,
            "Level 0: Attention (per token) -> Level 1: Weights (per batch) -> Level 2: Momentum/Memory (across batches); each is its own optimization problem",
        )
        .fill(&theme.text_muted)
        .size(9.0)
        .middle(),
    );

    graph
}
