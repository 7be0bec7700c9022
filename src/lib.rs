//! pie-labels-rs: collision-aware leader-line label placement for pie charts.
//!
//! This crate covers only the annotation layer of a pie chart: computing the
//! bent connector line from a slice edge to its title/value label pair,
//! testing candidate labels against everything placed before them, and
//! degrading to a small marker dot once collisions start. Slice geometry,
//! fills, input handling, and the view hierarchy belong to the host, behind
//! the [`render::ChartSurface`] and [`extensions::LayerAnimator`] seams.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{LineTextLayer, LineTextLayerSettings};
pub use error::{LayerError, LayerResult};
