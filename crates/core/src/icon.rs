use std::fmt;

use serde::{Serialize, Serializer};

/// Glyph shown in front of a result row, picked from the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
	Document,
	Image,
	Web,
	Plain,
}

/// Suffix groups checked in order; the first hit wins.
const SUFFIXES: [(&[&str], Icon); 3] = [
	(&[".pdf", ".docx", ".xlsx"], Icon::Document),
	(&[".png", ".jpg"], Icon::Image),
	(&[".md"], Icon::Web),
];

impl Icon {
	/// Pick the icon for `name`. The suffix check is case-sensitive.
	#[must_use]
	pub fn for_name(name: &str) -> Self {
		SUFFIXES
			.iter()
			.find(|(suffixes, _)| suffixes.iter().any(|suffix| name.ends_with(suffix)))
			.map_or(Self::Plain, |(_, icon)| *icon)
	}

	#[must_use]
	pub fn glyph(self) -> &'static str {
		match self {
			Self::Document => "📕",
			Self::Image => "🖼️",
			Self::Web => "🌐",
			Self::Plain => "📄",
		}
	}
}

impl fmt::Display for Icon {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.glyph())
	}
}

impl Serialize for Icon {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.glyph())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn office_documents_share_the_book_icon() {
		for name in ["a.pdf", "b.docx", "c.xlsx"] {
			assert_eq!(Icon::for_name(name), Icon::Document, "{name}");
		}
		assert_eq!(Icon::for_name("新功能设计稿.pdf").glyph(), "📕");
	}

	#[test]
	fn images_and_markdown_have_their_own_icons() {
		assert_eq!(Icon::for_name("系统架构图.png").glyph(), "🖼️");
		assert_eq!(Icon::for_name("photo.jpg"), Icon::Image);
		assert_eq!(Icon::for_name("用户反馈.md").glyph(), "🌐");
	}

	#[test]
	fn suffix_check_is_case_sensitive() {
		assert_eq!(Icon::for_name("REPORT.PDF"), Icon::Plain);
		assert_eq!(Icon::for_name("会议纪要.txt"), Icon::Plain);
		assert_eq!(Icon::for_name(""), Icon::Plain);
	}

	#[test]
	fn first_matching_group_wins() {
		assert_eq!(Icon::for_name("scan.png.pdf"), Icon::Document);
		assert_eq!(Icon::for_name("notes.pdf.md"), Icon::Web);
	}
}
