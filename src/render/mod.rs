//! Slide rasterization: one PNG per scene.

pub mod raster;
pub mod svg;
