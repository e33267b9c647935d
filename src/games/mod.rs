//! Game implementations.

pub mod monopoly;
