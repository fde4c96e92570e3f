//! UI panels for the inspector.

pub mod range_panel;

pub use range_panel::*;
