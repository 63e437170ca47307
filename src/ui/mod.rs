//! Presentation layer.
//!
//! The front-end only renders state and forwards input; it holds no logic of
//! its own. This module turns application state into a view model and writes
//! it as plain text.
//!
//! ```text
//! AppState → compute_viewmodel → ResultsView → render → stdout
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Plain-text renderer

pub mod renderer;
pub mod viewmodel;

pub use renderer::render;
pub use viewmodel::{EmptyState, ResultsView, SearchBarInfo, StoryRow};
