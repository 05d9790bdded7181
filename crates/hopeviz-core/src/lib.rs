#![forbid(unsafe_code)]

//! Scene model and view-selection state for the HOPE architecture diagram.
//!
//! Design goals:
//! - headless: views build plain scene graphs; rendering lives in
//!   `hopeviz-render`
//! - deterministic: each view's build function is a pure function of layout
//!   constants and the theme
//! - rebuild-on-switch: the whole scene graph is discarded and rebuilt on
//!   every view change, so no node carries identity across views

pub mod controller;
pub mod error;
pub mod geom;
pub mod scene;
pub mod shapes;
pub mod theme;
pub mod views;

pub use controller::{DiagramController, Event, SelectionState};
pub use error::{Error, Result};
pub use scene::{SceneGraph, SceneNode};
pub use theme::Theme;
pub use views::{ViewDescriptor, ViewRegistry};
