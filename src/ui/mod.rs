//! Interactive terminal UI for `filefind`.
//!
//! [`SearchUi`] is the public entry point. The remaining submodules hold the
//! event loop, drawing, key and mouse handling, and the hit map that routes
//! clicks to the row they landed on.

mod actions;
mod builder;
mod hit;
pub mod input;
mod render;
mod runtime;
mod state;
pub mod style;

pub use builder::SearchUi;
pub use state::App;
