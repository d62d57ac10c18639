//! Page effects that share the viewport with the particle overlay but none of its state.

pub mod parallax;
pub mod reveal;
