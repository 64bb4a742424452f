//! Command implementations for region-cli

pub mod check;
pub mod extract;
pub mod render;

pub use check::run_check;
pub use extract::run_extract;
pub use render::run_render;
