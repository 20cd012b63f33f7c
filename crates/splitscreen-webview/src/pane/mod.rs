//! Per-pane control surface over a [`crate::Renderer`].

mod controller;

pub use controller::PaneController;
