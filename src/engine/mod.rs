// src/engine/mod.rs
pub mod aggregate;
#[allow(clippy::module_inception)]
pub mod engine;
pub mod types;

pub use engine::Calendar;
