//! Selection state machine.
//!
//! One state per registered view id; `select_view(target)` transitions from
//! any state to `target`. All calls run synchronously on the caller's thread;
//! there is no shared mutable state besides the controller itself.

use crate::error::{Error, Result};
use crate::scene::SceneGraph;
use crate::theme::Theme;
use crate::views::{ViewDescriptor, ViewRegistry};

/// The single piece of process-wide UI state: which view is selected.
/// Owned exclusively by [`DiagramController`]; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub active_view_id: String,
}

/// The two interaction sources that can request a view switch. Both normalize
/// to the same validated `select_view` call, so an invalid id can never reach
/// render state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A navigation button for `view_id` was activated.
    NavButton { view_id: String },
    /// An in-diagram pointer target with activation target `target` was
    /// clicked or tapped.
    BoxActivated { target: String },
}

#[derive(Debug, Clone)]
pub struct DiagramController {
    registry: ViewRegistry,
    state: SelectionState,
}

impl DiagramController {
    /// Starts on [`ViewRegistry::DEFAULT_VIEW`] when registered, else on the
    /// registry's first view. An empty registry has no valid initial state.
    pub fn new(registry: ViewRegistry) -> Result<Self> {
        let initial = if registry.contains(ViewRegistry::DEFAULT_VIEW) {
            ViewRegistry::DEFAULT_VIEW.to_string()
        } else {
            registry
                .first()
                .ok_or(Error::EmptyRegistry)?
                .descriptor
                .id
                .clone()
        };
        Ok(Self {
            registry,
            state: SelectionState {
                active_view_id: initial,
            },
        })
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    pub fn active_view_id(&self) -> &str {
        &self.state.active_view_id
    }

    pub fn selection(&self) -> &SelectionState {
        &self.state
    }

    /// Switches to `id`. Unknown ids are rejected and leave the current
    /// selection untouched. Re-selecting the active view is a valid no-op.
    pub fn select_view(&mut self, id: &str) -> Result<()> {
        if !self.registry.contains(id) {
            return Err(Error::UnknownView { id: id.to_string() });
        }
        self.state.active_view_id = id.to_string();
        Ok(())
    }

    /// Event entry point for hosts. Invalid targets are logged and dropped;
    /// the worst user-visible outcome is an unchanged view.
    pub fn handle_event(&mut self, event: &Event) {
        let target = match event {
            Event::NavButton { view_id } => view_id,
            Event::BoxActivated { target } => target,
        };
        if let Err(err) = self.select_view(target) {
            tracing::warn!(view = %target, %err, "ignoring view-switch event");
        }
    }

    /// The active view's descriptor plus a freshly built scene graph. The
    /// graph is rebuilt on every call; nothing is cached across renders.
    pub fn current_view(&self, theme: &Theme) -> Result<(&ViewDescriptor, SceneGraph)> {
        let entry = self
            .registry
            .get(&self.state.active_view_id)
            .ok_or_else(|| Error::UnknownView {
                id: self.state.active_view_id.clone(),
            })?;
        Ok((&entry.descriptor, (entry.build)(theme)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DiagramController {
        DiagramController::new(ViewRegistry::builtin()).expect("builtin registry is non-empty")
    }

    #[test]
    fn initial_selection_is_the_overview() {
        let c = controller();
        assert_eq!(c.active_view_id(), "overview");
        let theme = Theme::default();
        let (descriptor, _) = c.current_view(&theme).expect("current view");
        assert_eq!(descriptor.id, "overview");
    }

    #[test]
    fn select_view_switches_and_is_idempotent() {
        let mut c = controller();
        c.select_view("cms").expect("cms registered");
        assert_eq!(c.active_view_id(), "cms");
        c.select_view("cms").expect("reselect is a no-op");
        assert_eq!(c.active_view_id(), "cms");

        let theme = Theme::default();
        let (descriptor, _) = c.current_view(&theme).expect("current view");
        assert_eq!(descriptor.title, "Continuum Memory System (CMS)");
    }

    #[test]
    fn unknown_view_is_rejected_without_state_change() {
        let mut c = controller();
        c.select_view("selfmod").expect("selfmod registered");
        let err = c.select_view("nonexistent").expect_err("unknown id");
        assert!(matches!(err, Error::UnknownView { .. }));
        assert_eq!(c.active_view_id(), "selfmod");
    }

    #[test]
    fn both_event_kinds_drive_the_same_transition() {
        let mut c = controller();
        c.handle_event(&Event::NavButton {
            view_id: "training".to_string(),
        });
        assert_eq!(c.active_view_id(), "training");
        c.handle_event(&Event::BoxActivated {
            target: "cms".to_string(),
        });
        assert_eq!(c.active_view_id(), "cms");
    }

    #[test]
    fn invalid_event_is_ignored() {
        let mut c = controller();
        c.handle_event(&Event::BoxActivated {
            target: "bogus".to_string(),
        });
        assert_eq!(c.active_view_id(), "overview");
    }

    #[test]
    fn empty_registry_has_no_initial_state() {
        let err = DiagramController::new(ViewRegistry::empty()).expect_err("no views");
        assert!(matches!(err, Error::EmptyRegistry));
    }
}
