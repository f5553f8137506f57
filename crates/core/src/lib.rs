//! Core pieces of `filefind`: the mock catalog and backend, keyword
//! matching, icon selection, and the display surface that search results are
//! rendered into.
//!
//! Nothing here knows about terminals. The UI crate owns a
//! [`SearchPipeline`] and draws whatever its [`DisplaySurface`] holds.

pub mod catalog;
pub mod error;
pub mod icon;
pub mod pipeline;
pub mod provider;
pub mod query;
pub mod record;
pub mod surface;

#[cfg(test)]
mod test_log;

pub use catalog::{Catalog, DEFAULT_FILES};
pub use error::{CatalogError, FetchError};
pub use icon::Icon;
pub use pipeline::{SearchPipeline, SearchTicket};
pub use provider::{CancelToken, DEFAULT_DELAY, MockProvider, PendingFetch};
pub use query::{MatchMode, SearchQuery, filter};
pub use record::FileRecord;
pub use surface::{DisplaySurface, RenderedRow, RowKey, SurfaceState};
