#![forbid(unsafe_code)]

pub mod svg;

use hopeviz_core::DiagramController;
use hopeviz_core::theme::Theme;
use hopeviz_core::views::ViewDescriptor;
use serde::{Deserialize, Serialize};

use crate::svg::SvgRenderOptions;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] hopeviz_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A rendered view: the SVG document plus the descriptor for the companion
/// title/description panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedView {
    pub descriptor: ViewDescriptor,
    pub svg: String,
}

/// Builds the active view's scene graph and renders it in one pass.
pub fn render_view_svg(
    controller: &DiagramController,
    theme: &Theme,
    options: &SvgRenderOptions,
) -> Result<RenderedView> {
    let (descriptor, graph) = controller.current_view(theme)?;
    tracing::debug!(
        view = %descriptor.id,
        nodes = graph.nodes.len(),
        "rendering scene graph"
    );
    let svg = svg::render_scene_svg(&graph, theme, options);
    Ok(RenderedView {
        descriptor: descriptor.clone(),
        svg,
    })
}
