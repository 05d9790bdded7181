//! Self-modification view: the surprise-gated fast-weight update path.

use super::{VIEWBOX_HEIGHT, VIEWBOX_WIDTH};
use crate::scene::{GroupNode, RectNode, SceneGraph, SceneNode, TextNode};
use crate::shapes::{ArrowSpec, build_arrow};
use crate::theme::Theme;

const TOKENS: [&str; 7] = ["The", "cat", "sat", "on", "the", "quantum", "computer"];
const SURPRISING: usize = 5;

pub(super) fn build(theme: &Theme) -> SceneGraph {
    let mut graph = SceneGraph::new(VIEWBOX_WIDTH, VIEWBOX_HEIGHT);

    graph.push(
        TextNode::new(450.0, 30.0, "Self-Modifying Titans")
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
            "A model that rewrites its own weights during inference (Paper Eqs. 83-93)",
        )
        .fill(&theme.text_muted)
        .size(11.0)
        .middle(),
    );

    for (i, token) in TOKENS.iter().enumerate() {
        let x = 60.0 + i as f64 * 110.0;
        let cx = 105.0 + i as f64 * 110.0;
        let surprising = i == SURPRISING;
        graph.push(
            RectNode::new(x, 80.0, 90.0, 32.0)
                .rounded(6.0)
                .fill(if surprising {
                    &theme.fast_glow
                } else {
                    &theme.surface_light
                })
                .stroke(if surprising { &theme.fast } else { &theme.border })
                .stroke_width(if surprising { 2.0 } else { 1.0 }),
        );
        let mut text = TextNode::new(cx, 100.0, *token)
            .fill(if surprising { &theme.fast } else { &theme.text })
            .size(11.0)
            .middle();
        if surprising {
            text = text.weight("700");
        }
        graph.push(text);
        if surprising {
            graph.push(
                TextNode::new(cx, 78.0, "SURPRISING!")
                    .fill(&theme.fast)
                    .size(8.0)
                    .middle(),
            );
        }
    }

    graph.push(build_arrow(
        &ArrowSpec::new(450.0, 112.0, 450.0, 145.0, &theme.fast).animated(),
        theme,
    ));

    graph.push(
        RectNode::new(100.0, 145.0, 700.0, 70.0)
            .rounded(10.0)
            .fill(&theme.surface_light)
            .stroke(&theme.fast),
    );
    graph.push(
        TextNode::new(140.0, 168.0, "Step 1: Compute Teach Signal (Surprise)")
            .fill(&theme.fast)
            .size(12.0)
            .weight("700")
            .family(Theme::FONT_DISPLAY),
    );
    graph.push(
        TextNode::new(
            140.0,
            186.0,
            "delta = prediction_error(token), i.e. how unexpected this token was",
        )
        .fill(&theme.text_muted)
        .size(10.0),
    );
    graph.push(
        TextNode::new(
            140.0,
            200.0,
            "\"quantum\" after \"sat on the\" is HIGH surprise; \"mat\" is LOW surprise",
        )
        .fill(&theme.text_muted)
        .size(10.0),
    );

    graph.push(build_arrow(
        &ArrowSpec::new(450.0, 215.0, 450.0, 240.0, &theme.fast).animated(),
        theme,
    ));

    graph.push(
        RectNode::new(200.0, 240.0, 500.0, 55.0)
            .rounded(10.0)
            .fill(&theme.surface_light)
            .stroke(&theme.medium),
    );
    graph.push(
        TextNode::new(240.0, 263.0, "Step 2: Surprise Gate")
            .fill(&theme.medium)
            .size(12.0)
            .weight("700")
            .family(Theme::FONT_DISPLAY),
    );
    graph.push(
        TextNode::new(
            240.0,
            281.0,
            "if ||delta|| > threshold then UPDATE weights, else SKIP (save compute)",
        )
        .fill(&theme.text_muted)
        .size(10.0),
    );

    graph.push(build_arrow(
        &ArrowSpec::new(350.0, 295.0, 250.0, 330.0, &theme.accent).animated(),
        theme,
    ));
    graph.push(build_arrow(
        &ArrowSpec::new(550.0, 295.0, 650.0, 330.0, &theme.danger),
        theme,
    ));

    // Update branch; the fast-weight story continues in the CMS view.
    graph.push(
        GroupNode::new(vec![
            RectNode::new(100.0, 330.0, 300.0, 120.0)
                .rounded(10.0)
                .fill(&theme.accent_glow)
                .stroke(&theme.accent)
                .stroke_width(1.5)
                .into(),
            TextNode::new(250.0, 353.0, "HIGH Surprise -> Update")
                .fill(&theme.accent)
                .size(12.0)
                .weight("700")
                .family(Theme::FONT_DISPLAY)
                .middle()
                .into(),
            TextNode::new(130.0, 375.0, "W_fast += eta * delta * x^T")
                .fill(&theme.text_muted)
                .size(10.0)
                .into(),
            text_bullet(130.0, 395.0, "Fast weights learn new pattern", theme),
            text_bullet(130.0, 412.0, "Alpha decay prevents overflow", theme),
            text_bullet(130.0, 429.0, "Momentum smooths updates", theme),
        ])
        .on_activate("cms"),
    );

    graph.push(
        RectNode::new(500.0, 330.0, 300.0, 120.0)
            .rounded(10.0)
            .fill(&theme.danger_glow)
            .stroke(&theme.danger)
            .dash("6,3"),
    );
    graph.push(
        TextNode::new(650.0, 353.0, "LOW Surprise -> Skip")
            .fill(&theme.danger)
            .size(12.0)
            .weight("700")
            .family(Theme::FONT_DISPLAY)
            .middle(),
    );
    graph.push(
        TextNode::new(530.0, 375.0, "No weight update")
            .fill(&theme.text_muted)
            .size(10.0),
    );
    graph.push(text_bullet(530.0, 395.0, "Already knew this pattern", theme));
    graph.push(text_bullet(530.0, 412.0, "Saves computation", theme));
    graph.push(text_bullet(530.0, 429.0, "Preserves existing knowledge", theme));

    graph.push(
        RectNode::new(100.0, 470.0, 700.0, 40.0)
            .rounded(8.0)
            .fill(&theme.surface)
            .stroke(&theme.accent)
            .dash("4,3"),
    );
    graph.push(
        TextNode::new(
            450.0,
            494.0,
            "KEY: The model rewrites its own weights as it reads, like a brain forming new memories in real time",
        )
        .fill(&theme.accent)
        .size(10.0)
        .weight("600")
        .family(Theme::FONT_DISPLAY)
        .middle(),
    );

    graph
}

fn text_bullet(x: f64, y: f64, content: &str, theme: &Theme) -> SceneNode {
    TextNode::new(x, y, content)
        .fill(&theme.text_muted)
        .size(9.0)
        .into()
}
