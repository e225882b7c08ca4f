pub mod catalog;
pub mod render;

pub use crate::domain::ports::Renderer;
