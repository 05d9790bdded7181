//! CMS detail view: a traditional-transformer comparison frame next to the
//! three-level continuum memory stack.

use super::{VIEWBOX_HEIGHT, VIEWBOX_WIDTH};
use crate::scene::{RectNode, SceneGraph, TextNode};
use crate::shapes::{
    ArrowSpec, BoxSpec, FrequencyBarSpec, build_arrow, build_box, build_frequency_bar,
};
use crate::theme::Theme;

struct LevelPanel<'a> {
    y: f64,
    color: &'a str,
    glow: &'a str,
    title: &'a str,
    update_line: &'a str,
    stores_line: &'a str,
    frequency: f64,
}

fn push_level_panel(graph: &mut SceneGraph, panel: &LevelPanel<'_>, theme: &Theme) {
    let y = panel.y;
    graph.push(
        RectNode::new(510.0, y, 350.0, 70.0)
            .rounded(8.0)
            .fill(panel.glow)
            .stroke(panel.color)
            .stroke_width(1.5),
    );
    graph.push(
        TextNode::new(530.0, y + 21.0, panel.title)
            .fill(panel.color)
            .size(12.0)
            .weight("700")
            .family(Theme::FONT_DISPLAY),
    );
    graph.push(
        TextNode::new(530.0, y + 38.0, panel.update_line)
            .fill(&theme.text_muted)
            .size(9.0),
    );
    graph.push(
        TextNode::new(530.0, y + 53.0, panel.stores_line)
            .fill(&theme.text_muted)
            .size(9.0),
    );
    graph.push(build_frequency_bar(
        &FrequencyBarSpec::new(750.0, y + 18.0, 90.0, panel.frequency, panel.color, ""),
        theme,
    ));
}

pub(super) fn build(theme: &Theme) -> SceneGraph {
    let mut graph = SceneGraph::new(VIEWBOX_WIDTH, VIEWBOX_HEIGHT);

    graph.push(
        TextNode::new(450.0, 30.0, "Continuum Memory System (CMS)")
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
            "Multi-frequency MLP layers - the key to avoiding catastrophic forgetting",
        )
        .fill(&theme.text_muted)
        .size(11.0)
        .middle(),
    );

    // Comparison frame: what a single-FFN transformer looks like.
    graph.push(
        RectNode::new(30.0, 75.0, 250.0, 200.0)
            .rounded(10.0)
            .fill(&theme.danger_glow)
            .stroke(&theme.danger)
            .dash("6,3"),
    );
    graph.push(
        TextNode::new(155.0, 100.0, "Traditional Transformer")
            .fill(&theme.danger)
            .size(13.0)
            .weight("700")
            .family(Theme::FONT_DISPLAY)
            .middle(),
    );
    graph.push(build_box(
        &BoxSpec::new(
            55.0,
            115.0,
            200.0,
            40.0,
            "Attention",
            &theme.text_muted,
            &theme.surface_light,
        )
        .sublabel("Short-term memory"),
        theme,
    ));
    graph.push(build_arrow(
        &ArrowSpec::new(155.0, 155.0, 155.0, 175.0, &theme.text_muted),
        theme,
    ));
    graph.push(build_box(
        &BoxSpec::new(55.0, 175.0, 200.0, 40.0, "Single FFN", &theme.danger, &theme.danger_glow)
            .sublabel("Long-term (frozen after training)")
            .active(),
        theme,
    ));
    graph.push(
        TextNode::new(155.0, 240.0, "Only 2 memory levels")
            .fill(&theme.text_muted)
            .size(9.0)
            .middle(),
    );
    graph.push(
        TextNode::new(155.0, 255.0, "Learns new = forgets old")
            .fill(&theme.danger)
            .size(9.0)
            .middle(),
    );

    graph.push(
        RectNode::new(320.0, 75.0, 560.0, 430.0)
            .rounded(10.0)
            .fill(&theme.accent_glow)
            .stroke(&theme.accent)
            .stroke_width(1.5),
    );
    graph.push(
        TextNode::new(600.0, 100.0, "HOPE Continuum Memory System")
            .fill(&theme.accent)
            .size(13.0)
            .weight("700")
            .family(Theme::FONT_DISPLAY)
            .middle(),
    );

    graph.push(build_box(
        &BoxSpec::new(345.0, 120.0, 120.0, 36.0, "Input x", &theme.text, &theme.surface_light),
        theme,
    ));
    graph.push(build_arrow(
        &ArrowSpec::new(465.0, 138.0, 510.0, 138.0, &theme.text_muted).animated(),
        theme,
    ));

    push_level_panel(
        &mut graph,
        &LevelPanel {
            y: 115.0,
            color: &theme.fast,
            glow: &theme.fast_glow,
            title: "Level 0 - Fast Memory",
            update_line: "Update freq: every step | MLP with residual",
            stores_line: "Stores: immediate context, current sentence",
            frequency: 1.0,
        },
        theme,
    );
    graph.push(build_arrow(
        &ArrowSpec::new(685.0, 185.0, 685.0, 205.0, &theme.fast)
            .animated()
            .label("output + residual"),
        theme,
    ));

    push_level_panel(
        &mut graph,
        &LevelPanel {
            y: 205.0,
            color: &theme.medium,
            glow: &theme.medium_glow,
            title: "Level 1 - Medium Memory",
            update_line: "Update freq: every ~64 steps | Slower MLP",
            stores_line: "Stores: paragraph context, topic continuity",
            frequency: 0.35,
        },
        theme,
    );
    graph.push(build_arrow(
        &ArrowSpec::new(685.0, 275.0, 685.0, 295.0, &theme.medium)
            .animated()
            .label("output + residual"),
        theme,
    ));

    push_level_panel(
        &mut graph,
        &LevelPanel {
            y: 295.0,
            color: &theme.slow,
            glow: &theme.slow_glow,
            title: "Level 2 - Slow Memory",
            update_line: "Update freq: every ~256 steps | Deep MLP",
            stores_line: "Stores: grammar, facts, world knowledge",
            frequency: 0.08,
        },
        theme,
    );

    graph.push(
        RectNode::new(345.0, 300.0, 140.0, 120.0)
            .rounded(8.0)
            .fill(&theme.surface_light)
            .stroke(&theme.border),
    );
    graph.push(
        TextNode::new(415.0, 320.0, "Brain Analogy")
            .fill(&theme.text)
            .size(10.0)
            .weight("600")
            .family(Theme::FONT_DISPLAY)
            .middle(),
    );
    graph.push(
        TextNode::new(415.0, 340.0, "Fast -> Working memory")
            .fill(&theme.fast)
            .size(9.0)
            .middle(),
    );
    graph.push(
        TextNode::new(415.0, 358.0, "Med -> Short-term mem")
            .fill(&theme.medium)
            .size(9.0)
            .middle(),
    );
    graph.push(
        TextNode::new(415.0, 376.0, "Slow -> Long-term mem")
            .fill(&theme.slow)
            .size(9.0)
            .middle(),
    );
    graph.push(
        TextNode::new(415.0, 406.0, "= Neuroplasticity")
            .fill(&theme.accent)
            .size(9.0)
            .middle(),
    );

    graph.push(build_arrow(
        &ArrowSpec::new(685.0, 365.0, 685.0, 395.0, &theme.slow).animated(),
        theme,
    ));
    graph.push(build_box(
        &BoxSpec::new(
            610.0,
            395.0,
            150.0,
            36.0,
            "Combined Output",
            &theme.accent,
            &theme.accent_glow,
        )
        .active(),
        theme,
    ));

    graph.push(
        RectNode::new(345.0, 440.0, 515.0, 50.0)
            .rounded(8.0)
            .fill(&theme.surface)
            .stroke(&theme.accent)
            .dash("4,3"),
    );
    graph.push(
        TextNode::new(
            600.0,
            462.0,
            "KEY: New data updates fast layers; slow layers stay stable; no forgetting",
        )
        .fill(&theme.accent)
        .size(10.0)
        .weight("600")
        .family(Theme::FONT_DISPLAY)
        .middle(),
    );
    graph.push(
        TextNode::new(
            600.0,
            478.0,
            "Each level is a nested optimization problem with its own context flow and update rate",
        )
        .fill(&theme.text_muted)
        .size(9.0)
        .middle(),
    );

    graph
}
