//! State of the region that shows search feedback.
//!
//! The surface moves through `Idle -> Loading -> {Populated | Empty}` and is
//! re-entered from `Loading` on every search. Rows are addressed by a
//! generated [`RowKey`]; the key maps to the record the row displays, so a
//! removal never has to recover data from what is on screen.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::icon::Icon;
use crate::record::FileRecord;

/// Identity of a rendered row. Keys are never reused within a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceState {
	Idle,
	Loading,
	Populated,
	Empty,
}

/// A row as it should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedRow<'a> {
	#[serde(skip)]
	pub key: RowKey,
	pub icon: Icon,
	pub name: &'a str,
}

impl fmt::Display for RenderedRow<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.icon, self.name)
	}
}

#[derive(Debug)]
pub struct DisplaySurface {
	state: SurfaceState,
	rows: IndexMap<RowKey, FileRecord>,
	removed: Vec<FileRecord>,
	next_key: u64,
}

impl Default for DisplaySurface {
	fn default() -> Self {
		Self::new()
	}
}

impl DisplaySurface {
	#[must_use]
	pub fn new() -> Self {
		Self {
			state: SurfaceState::Idle,
			rows: IndexMap::new(),
			removed: Vec::new(),
			next_key: 0,
		}
	}

	#[must_use]
	pub fn state(&self) -> SurfaceState {
		self.state
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.state == SurfaceState::Loading
	}

	/// Drop whatever is shown and display the loading notice.
	pub fn begin_loading(&mut self) {
		self.rows.clear();
		self.state = SurfaceState::Loading;
	}

	/// Replace the content with one row per record, or the empty notice.
	pub fn show_results(&mut self, results: Vec<FileRecord>) {
		self.rows.clear();
		if results.is_empty() {
			self.state = SurfaceState::Empty;
			return;
		}
		for record in results {
			let key = RowKey(self.next_key);
			self.next_key += 1;
			self.rows.insert(key, record);
		}
		self.state = SurfaceState::Populated;
	}

	/// Remove a displayed row and return the record it stood for.
	///
	/// The catalog is untouched; the log line stands in for the request a
	/// real backend would receive. Unknown keys are ignored.
	pub fn remove_row(&mut self, key: RowKey) -> Option<FileRecord> {
		let record = self.rows.shift_remove(&key)?;
		log::info!("simulated API call: delete file -> {}", record.name);
		self.removed.push(record.clone());
		Some(record)
	}

	#[must_use]
	pub fn row_count(&self) -> usize {
		self.rows.len()
	}

	#[must_use]
	pub fn key_at(&self, index: usize) -> Option<RowKey> {
		self.rows.get_index(index).map(|(key, _)| *key)
	}

	pub fn rows(&self) -> impl Iterator<Item = RenderedRow<'_>> {
		self.rows.iter().map(|(key, record)| RenderedRow {
			key: *key,
			icon: Icon::for_name(&record.name),
			name: &record.name,
		})
	}

	/// Records currently displayed, in display order.
	#[must_use]
	pub fn displayed(&self) -> Vec<FileRecord> {
		self.rows.values().cloned().collect()
	}

	/// Every record removed over the lifetime of the surface.
	#[must_use]
	pub fn removed(&self) -> &[FileRecord] {
		&self.removed
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn records(names: &[&str]) -> Vec<FileRecord> {
		names.iter().copied().map(FileRecord::from).collect()
	}

	#[test]
	fn surface_starts_idle_and_loads() {
		let mut surface = DisplaySurface::new();
		assert_eq!(surface.state(), SurfaceState::Idle);
		surface.begin_loading();
		assert!(surface.is_loading());
		assert_eq!(surface.row_count(), 0);
	}

	#[test]
	fn empty_results_show_the_notice_state() {
		let mut surface = DisplaySurface::new();
		surface.begin_loading();
		surface.show_results(Vec::new());
		assert_eq!(surface.state(), SurfaceState::Empty);
		assert_eq!(surface.rows().count(), 0);
	}

	#[test]
	fn rows_carry_icons_and_names_in_order() {
		let mut surface = DisplaySurface::new();
		surface.show_results(records(&["a.pdf", "b.png", "c.txt"]));
		let rendered: Vec<String> = surface.rows().map(|row| row.to_string()).collect();
		assert_eq!(rendered, ["📕 a.pdf", "🖼️ b.png", "📄 c.txt"]);
	}

	#[test]
	fn removal_only_touches_the_target_row() {
		let mut surface = DisplaySurface::new();
		surface.show_results(records(&["a.pdf", "b.png", "c.txt"]));
		let middle = surface.key_at(1).expect("middle row");

		let removed = surface.remove_row(middle).expect("removed");
		assert_eq!(removed.name, "b.png");
		assert_eq!(surface.displayed(), records(&["a.pdf", "c.txt"]));
		assert_eq!(surface.removed(), records(&["b.png"]).as_slice());
		assert_eq!(surface.state(), SurfaceState::Populated);

		assert_eq!(surface.remove_row(middle), None, "second removal is a no-op");
	}

	#[test]
	fn removing_every_row_keeps_populated_state() {
		let mut surface = DisplaySurface::new();
		surface.show_results(records(&["only.md"]));
		let key = surface.key_at(0).expect("row");
		surface.remove_row(key);
		assert_eq!(surface.state(), SurfaceState::Populated);
		assert_eq!(surface.row_count(), 0);
	}

	#[test]
	fn keys_are_not_reused_across_renders() {
		let mut surface = DisplaySurface::new();
		surface.show_results(records(&["a.md"]));
		let first = surface.key_at(0).expect("first");
		surface.show_results(records(&["a.md"]));
		let second = surface.key_at(0).expect("second");
		assert_ne!(first, second);
		assert_eq!(surface.remove_row(first), None);
	}
}
