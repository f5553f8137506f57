use std::fmt;

use serde::{Deserialize, Serialize};

/// A single named entry in the mock catalog.
///
/// The display name is the only attribute and doubles as the identity of the
/// record. Uniqueness is assumed by callers but never enforced.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileRecord {
	pub name: String,
}

impl FileRecord {
	#[must_use]
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}

	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}
}

impl fmt::Display for FileRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}

impl From<&str> for FileRecord {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

impl From<String> for FileRecord {
	fn from(name: String) -> Self {
		Self { name }
	}
}
