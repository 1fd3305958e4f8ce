//! Right-to-left component library for the office dashboard.

pub mod components;
pub mod theme;

pub use components::*;
