//! Video plan generation: preferences in, headline/hook/scenes/soundtrack out.

pub mod generator;
pub mod model;
mod pacing;
pub mod picker;
mod script;
pub mod tables;
pub mod templates;
