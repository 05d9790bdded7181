//! Training-pipeline view: four phase bands connected top to bottom.

use super::{VIEWBOX_HEIGHT, VIEWBOX_WIDTH};
use crate::scene::{RectNode, SceneGraph, TextNode};
use crate::shapes::{ArrowSpec, build_arrow};
use crate::theme::Theme;

struct PhaseBand<'a> {
    y: f64,
    height: f64,
    color: &'a str,
    title: &'a str,
    lines: &'a [(f64, &'a str)],
    command: Option<(f64, &'a str)>,
}

fn push_phase_band(graph: &mut SceneGraph, band: &PhaseBand<'_>, theme: &Theme) {
    graph.push(
        RectNode::new(30.0, band.y, 840.0, band.height)
            .rounded(10.0)
            .fill(&theme.surface_light)
            .stroke(band.color)
            .stroke_width(1.5),
    );
    // Colored spine along the left edge of the band.
    graph.push(
        RectNode::new(30.0, band.y, 6.0, band.height)
            .rounded(3.0)
            .fill(band.color),
    );
    graph.push(
        TextNode::new(60.0, band.y + 25.0, band.title)
            .fill(band.color)
            .size(14.0)
            .weight("700")
            .family(Theme::FONT_DISPLAY),
    );
    for (y, line) in band.lines {
        graph.push(
            TextNode::new(60.0, *y, *line)
                .fill(&theme.text_muted)
                .size(10.0),
        );
    }
    if let Some((y, command)) = band.command {
        graph.push(TextNode::new(60.0, y, command).fill(band.color).size(9.0));
    }
}

pub(super) fn build(theme: &Theme) -> SceneGraph {
    let mut graph = SceneGraph::new(VIEWBOX_WIDTH, VIEWBOX_HEIGHT);

    graph.push(
        TextNode::new(450.0, 30.0, "Training Pipeline - Step by Step")
            .fill(&theme.text)
            .size(16.0)
            .weight("700")
            .family(Theme::FONT_DISPLAY)
            .middle(),
    );

    push_phase_band(
        &mut graph,
        &PhaseBand {
            y: 60.0,
            height: 100.0,
            color: &theme.medium,
            title: "Phase 1: Pre-Training",
            lines: &[
                (105.0, "Standard language modeling on large corpus (WikiText, RefinedWeb)"),
                (120.0, "Config: pilot_smoke -> pilot -> mid -> target (scale up gradually)"),
            ],
            command: Some((
                140.0,
                "$ uv run python train.py --config-name pilot train.device=cuda:0",
            )),
        },
        theme,
    );
    graph.push(build_arrow(
        &ArrowSpec::new(450.0, 160.0, 450.0, 185.0, &theme.text_muted),
        theme,
    ));

    push_phase_band(
        &mut graph,
        &PhaseBand {
            y: 185.0,
            height: 115.0,
            color: &theme.fast,
            title: "Phase 2: Paper-Faithful Training (Self-Modification)",
            lines: &[
                (230.0, "Enable self-modifying Titans + CMS multi-frequency updates"),
                (
                    248.0,
                    "batch_size=1 (strict per-context semantics, no cross-sample memory sharing)",
                ),
                (
                    266.0,
                    "Self-mod: l2 objective, retention gate (alpha), surprise-threshold gating",
                ),
            ],
            command: Some((
                284.0,
                "$ uv run python train.py --config-name pilot_selfmod_paper_faithful",
            )),
        },
        theme,
    );
    graph.push(build_arrow(
        &ArrowSpec::new(450.0, 300.0, 450.0, 325.0, &theme.text_muted),
        theme,
    ));

    push_phase_band(
        &mut graph,
        &PhaseBand {
            y: 325.0,
            height: 100.0,
            color: &theme.accent,
            title: "Phase 3: Evaluate Continual Learning",
            lines: &[
                (370.0, "Zero-shot benchmarks (PIQA, HellaSwag, ARC, BoolQ, WinoGrande)"),
                (
                    388.0,
                    "Test-time memorization: --memorize --memorize-steps 2 --memorize-surprise-threshold 0.01",
                ),
            ],
            command: Some((
                406.0,
                "$ uv run python scripts/eval/continual.py --memorize --memorize-steps 2",
            )),
        },
        theme,
    );
    graph.push(build_arrow(
        &ArrowSpec::new(450.0, 425.0, 450.0, 448.0, &theme.text_muted),
        theme,
    ));

    push_phase_band(
        &mut graph,
        &PhaseBand {
            y: 448.0,
            height: 60.0,
            color: &theme.slow,
            title: "Phase 4: Your Domain / Scale Up",
            lines: &[(
                493.0,
                "Fine-tune on your data -> FSDP multi-GPU -> 1.3B target model -> deploy",
            )],
            command: None,
        },
        theme,
    );

    graph
}
