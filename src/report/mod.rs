// src/report/mod.rs
mod render;
mod summary;

pub use render::{Reporter, SEPARATOR_WIDTH};
pub use summary::{Recommendation, Summary};
