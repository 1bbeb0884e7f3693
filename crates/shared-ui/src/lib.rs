//! Presentational building blocks shared by the CMS screens.
//!
//! Components here hold no application state; pages pass data in and
//! receive events back through handlers.

pub mod components;

pub use components::*;
