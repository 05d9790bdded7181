//! View registry: the fixed, ordered set of diagram views.
//!
//! Each view couples a descriptor (title + description for the companion info
//! panel) with a pure build function that emits the full scene graph for that
//! view. The registry is populated once at construction and never mutated;
//! insertion order is the navigation order.

mod cms;
mod optimizer;
mod overview;
mod selfmod;
mod training;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::scene::SceneGraph;
use crate::theme::Theme;

/// Shared viewbox for every view so the host container never reflows.
pub const VIEWBOX_WIDTH: f64 = 900.0;
pub const VIEWBOX_HEIGHT: f64 = 520.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewDescriptor {
    pub id: String,
    pub title: String,
    pub description: String,
}

pub type BuildFn = fn(&Theme) -> SceneGraph;

#[derive(Debug, Clone)]
pub struct ViewEntry {
    pub descriptor: ViewDescriptor,
    pub build: BuildFn,
}

#[derive(Debug, Clone)]
pub struct ViewRegistry {
    entries: IndexMap<String, ViewEntry>,
}

impl ViewRegistry {
    pub const DEFAULT_VIEW: &'static str = "overview";

    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// The five shipped views, in navigation order.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(
            "overview",
            "HOPE Architecture Overview",
            "The full pipeline: Input tokens flow through Self-Modifying Titans (or Attention), \
             then through the Continuum Memory System with 3 frequency levels. Each HOPE Block \
             repeats this pattern.",
            overview::build,
        );
        registry.register(
            "cms",
            "Continuum Memory System (CMS)",
            "Unlike standard Transformers with just one FFN, CMS uses multiple MLP layers that \
             update at different speeds. Fast layers capture immediate context, slow layers store \
             long-term knowledge. This is what prevents catastrophic forgetting.",
            cms::build,
        );
        registry.register(
            "selfmod",
            "Self-Modifying Titans",
            "The model modifies its own weights during the forward pass. It measures how \
             'surprising' each token is (teach signal). High surprise means update fast weights; \
             low surprise means skip. This is like neuroplasticity in the brain.",
            selfmod::build,
        );
        registry.register(
            "optimizer",
            "Deep Momentum GD (DMGD)",
            "Standard optimizers (Adam, SGD) use simple running averages. DMGD replaces momentum \
             with a neural network that learns to compress gradient history, acting as associative \
             memory that maps data to its error signal.",
            optimizer::build,
        );
        registry.register(
            "training",
            "Training Pipeline",
            "Phase 1: Pre-train with standard objectives. Phase 2: Enable self-modification and \
             CMS multi-frequency updates. Phase 3: Evaluate continual learning by training on new \
             data and checking whether old knowledge is preserved.",
            training::build,
        );
        registry
    }

    fn register(&mut self, id: &str, title: &str, description: &str, build: BuildFn) {
        self.entries.insert(
            id.to_string(),
            ViewEntry {
                descriptor: ViewDescriptor {
                    id: id.to_string(),
                    title: title.to_string(),
                    description: description.to_string(),
                },
                build,
            },
        );
    }

    pub fn get(&self, id: &str) -> Option<&ViewEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn first(&self) -> Option<&ViewEntry> {
        self.entries.first().map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewEntry> {
        self.entries.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneNode;

    #[test]
    fn builtin_registry_lists_views_in_navigation_order() {
        let registry = ViewRegistry::builtin();
        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(
            ids,
            vec!["overview", "cms", "selfmod", "optimizer", "training"]
        );
        assert!(registry.contains(ViewRegistry::DEFAULT_VIEW));
    }

    #[test]
    fn every_view_builds_deterministically() {
        let registry = ViewRegistry::builtin();
        let theme = Theme::default();
        for entry in registry.iter() {
            let first = (entry.build)(&theme);
            let second = (entry.build)(&theme);
            assert_eq!(first, second, "view {} must be pure", entry.descriptor.id);
            assert!(!first.nodes.is_empty());
            assert_eq!(first.viewbox_width, VIEWBOX_WIDTH);
            assert_eq!(first.viewbox_height, VIEWBOX_HEIGHT);
        }
    }

    #[test]
    fn every_activation_target_is_a_registered_view() {
        let registry = ViewRegistry::builtin();
        let theme = Theme::default();
        for entry in registry.iter() {
            let graph = (entry.build)(&theme);
            graph.walk(&mut |node| {
                if let SceneNode::Group(g) = node {
                    if let Some(target) = &g.on_activate {
                        assert!(
                            registry.contains(target),
                            "view {} links to unknown view {target}",
                            entry.descriptor.id
                        );
                    }
                }
            });
        }
    }

    #[test]
    fn overview_links_into_selfmod_and_cms() {
        let registry = ViewRegistry::builtin();
        let theme = Theme::default();
        let entry = registry.get("overview").expect("overview registered");
        let graph = (entry.build)(&theme);
        let mut targets = Vec::new();
        graph.walk(&mut |node| {
            if let SceneNode::Group(g) = node {
                if let Some(target) = &g.on_activate {
                    targets.push(target.clone());
                }
            }
        });
        assert!(targets.contains(&"selfmod".to_string()));
        assert!(targets.contains(&"cms".to_string()));
    }
}
