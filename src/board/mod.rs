//! Board spaces.
//!
//! - `Grid`: the landing-effect contract the session drives
//! - `Space`: stock spaces (start, plain, flat cash change)

pub mod grid;
pub mod space;

pub use grid::Grid;
pub use space::{Space, SpaceKind};
