//! Renderers: structured export, SVG scene building and PNG rasterization.

pub mod description;
pub mod geometry;
pub mod png;
pub mod svg;

pub use description::GraphDescription;
pub use svg::Canvas;
