//! Terminal front-end for the `filefind` search demo.
//!
//! The search itself lives in `filefind-core`; this crate draws the display
//! surface with ratatui and wires keyboard and mouse input to it.

pub mod app_dirs;
pub mod logging;
mod outcome;
pub mod ui;

pub use outcome::SessionOutcome;
pub use ui::input::SearchInput;
pub use ui::style::Theme;
pub use ui::{App, SearchUi};
