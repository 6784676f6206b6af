//! Home screen.

pub mod view;
