//! # Rendering Module
//!
//! Terminal rendering for the home, call, and game screens.

pub mod display;

pub use display::*;
