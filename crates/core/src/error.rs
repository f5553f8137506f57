use std::time::Duration;

use thiserror::Error;

/// Failures surfaced while waiting on a mock fetch from the owning thread.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FetchError {
	/// The response did not arrive before the caller's deadline.
	#[error("no response from the mock backend within {0:?}")]
	Timeout(Duration),

	/// The delay thread went away without delivering a response.
	#[error("mock backend channel disconnected")]
	Disconnected,
}

/// Problems with a catalog supplied from configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
	#[error("catalog must contain at least one file name")]
	Empty,

	#[error("catalog entry {index} has a blank file name")]
	BlankName { index: usize },
}
