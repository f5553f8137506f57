//! The fixed in-memory list of file names served by the mock backend.

use std::sync::Arc;

use crate::error::CatalogError;
use crate::record::FileRecord;

/// File names returned by the mock backend, in source order.
pub const DEFAULT_FILES: [&str; 6] = [
	"项目计划书.docx",
	"团队周报.xlsx",
	"新功能设计稿.pdf",
	"会议纪要.txt",
	"系统架构图.png",
	"用户反馈.md",
];

/// Immutable, cheaply clonable list of file records.
///
/// Nothing in the crate mutates a catalog after construction; removing a row
/// from the display never reaches back into this list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
	files: Arc<[FileRecord]>,
}

impl Catalog {
	/// Build a catalog from configured names, rejecting empty lists and blank
	/// entries.
	pub fn from_names<I, S>(names: I) -> Result<Self, CatalogError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let files: Vec<FileRecord> = names.into_iter().map(|name| FileRecord::new(name)).collect();
		if files.is_empty() {
			return Err(CatalogError::Empty);
		}
		if let Some(index) = files.iter().position(|file| file.name.trim().is_empty()) {
			return Err(CatalogError::BlankName { index });
		}
		Ok(Self {
			files: files.into(),
		})
	}

	#[must_use]
	pub fn files(&self) -> &[FileRecord] {
		&self.files
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.files.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.files.is_empty()
	}

	/// Copy the records out for delivery to a fetch handler.
	#[must_use]
	pub fn snapshot(&self) -> Vec<FileRecord> {
		self.files.to_vec()
	}
}

impl Default for Catalog {
	fn default() -> Self {
		let files: Vec<FileRecord> = DEFAULT_FILES.iter().copied().map(FileRecord::from).collect();
		Self {
			files: files.into(),
		}
	}
}
