//! Keyword matching over the catalog.

use serde::{Deserialize, Serialize};

use crate::record::FileRecord;

/// How a keyword is compared against a file name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
	/// Case-insensitive equality with the whole name.
	Exact,
	/// Case-insensitive containment anywhere in the name.
	#[default]
	Substring,
}

impl MatchMode {
	#[must_use]
	pub fn from_exact(exact: bool) -> Self {
		if exact { Self::Exact } else { Self::Substring }
	}

	#[must_use]
	pub fn is_exact(self) -> bool {
		matches!(self, Self::Exact)
	}

	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Exact => Self::Substring,
			Self::Substring => Self::Exact,
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Exact => "exact",
			Self::Substring => "substring",
		}
	}
}

/// A normalized keyword paired with its match mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
	keyword: String,
	needle: String,
	mode: MatchMode,
}

impl SearchQuery {
	/// Trim the keyword and precompute its lowercase form.
	#[must_use]
	pub fn new(keyword: &str, mode: MatchMode) -> Self {
		let keyword = keyword.trim().to_string();
		let needle = keyword.to_lowercase();
		Self {
			keyword,
			needle,
			mode,
		}
	}

	#[must_use]
	pub fn keyword(&self) -> &str {
		&self.keyword
	}

	#[must_use]
	pub fn mode(&self) -> MatchMode {
		self.mode
	}

	#[must_use]
	pub fn matches(&self, record: &FileRecord) -> bool {
		let name = record.name.to_lowercase();
		match self.mode {
			MatchMode::Exact => name == self.needle,
			MatchMode::Substring => name.contains(&self.needle),
		}
	}
}

/// Keep the records accepted by `query`, preserving source order.
#[must_use]
pub fn filter(records: &[FileRecord], query: &SearchQuery) -> Vec<FileRecord> {
	records
		.iter()
		.filter(|record| query.matches(record))
		.cloned()
		.collect()
}
