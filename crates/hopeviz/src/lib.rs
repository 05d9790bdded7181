#![forbid(unsafe_code)]

//! `hopeviz` renders an interactive, multi-view diagram of the HOPE (Nested
//! Learning) architecture: a selected view id maps to a scene graph of boxes,
//! arrows and frequency bars, emitted headlessly as SVG.
//!
//! # Features
//!
//! - `render`: enable SVG rendering (`hopeviz::render`)

pub use hopeviz_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use hopeviz_render::svg::{SvgRenderOptions, render_scene_svg, sanitize_svg_id};
    pub use hopeviz_render::{RenderedView, render_view_svg};

    use hopeviz_core::{DiagramController, Event, Theme, ViewDescriptor, ViewRegistry};

    #[derive(Debug, thiserror::Error)]
    pub enum PanelError {
        #[error(transparent)]
        Core(#[from] hopeviz_core::Error),
        #[error(transparent)]
        Render(#[from] hopeviz_render::Error),
    }

    pub type Result<T> = std::result::Result<T, PanelError>;

    /// Convenience wrapper that bundles a controller, theme and SVG options
    /// for embedding in a host page.
    ///
    /// A host wires its navigation buttons and SVG click handlers to
    /// [`DiagramPanel::handle_event`] and re-reads
    /// [`DiagramPanel::current_view`] after each event; the previous SVG is
    /// simply replaced.
    #[derive(Debug, Clone)]
    pub struct DiagramPanel {
        controller: DiagramController,
        pub theme: Theme,
        pub svg: SvgRenderOptions,
    }

    impl DiagramPanel {
        /// Panel over the built-in view set, starting on the overview.
        pub fn builtin() -> Result<Self> {
            Ok(Self {
                controller: DiagramController::new(ViewRegistry::builtin())?,
                theme: Theme::default(),
                svg: SvgRenderOptions::default(),
            })
        }

        pub fn with_theme(mut self, theme: Theme) -> Self {
            self.theme = theme;
            self
        }

        pub fn with_diagram_id(mut self, diagram_id: &str) -> Self {
            self.svg.diagram_id = Some(sanitize_svg_id(diagram_id));
            self
        }

        pub fn controller(&self) -> &DiagramController {
            &self.controller
        }

        pub fn active_view_id(&self) -> &str {
            self.controller.active_view_id()
        }

        /// Descriptors in navigation order, for rendering the button row.
        pub fn nav_descriptors(&self) -> Vec<&ViewDescriptor> {
            self.controller
                .registry()
                .iter()
                .map(|entry| &entry.descriptor)
                .collect()
        }

        pub fn select_view(&mut self, id: &str) -> Result<()> {
            self.controller.select_view(id)?;
            Ok(())
        }

        pub fn handle_event(&mut self, event: &Event) {
            self.controller.handle_event(event);
        }

        /// Renders the active view; the result carries both the SVG and the
        /// descriptor for the companion info panel.
        pub fn current_view(&self) -> Result<RenderedView> {
            Ok(render_view_svg(&self.controller, &self.theme, &self.svg)?)
        }
    }
}
