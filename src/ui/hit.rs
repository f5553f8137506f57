//! Clickable regions recorded while drawing.
//!
//! Every draw rebuilds a small tree of regions: containers first, then their
//! children. A click resolves to the innermost region under the pointer and
//! handlers walk up the parent chain to find the element they care about,
//! the same way a delegated DOM listener inspects `event.target`.

use filefind_core::RowKey;
use ratatui::layout::{Position, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Target {
	ResultsContainer,
	Row(RowKey),
	DeleteButton(RowKey),
	SearchButton,
	ExactToggle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RegionId(usize);

#[derive(Debug)]
struct Region {
	area: Rect,
	target: Target,
	parent: Option<RegionId>,
}

#[derive(Debug, Default)]
pub(crate) struct HitMap {
	regions: Vec<Region>,
}

impl HitMap {
	pub(crate) fn clear(&mut self) {
		self.regions.clear();
	}

	/// Record a region. Children must be pushed after their parent.
	pub(crate) fn push(&mut self, area: Rect, target: Target, parent: Option<RegionId>) -> RegionId {
		let id = RegionId(self.regions.len());
		self.regions.push(Region {
			area,
			target,
			parent,
		});
		id
	}

	/// Innermost region containing the point.
	pub(crate) fn target_at(&self, column: u16, row: u16) -> Option<RegionId> {
		let point = Position::new(column, row);
		self.regions
			.iter()
			.rposition(|region| region.area.contains(point))
			.map(RegionId)
	}

	pub(crate) fn target(&self, id: RegionId) -> Option<Target> {
		self.regions.get(id.0).map(|region| region.target)
	}

	/// Walk from `id` up through its ancestors and return the first target
	/// accepted by `predicate`.
	pub(crate) fn closest(
		&self,
		id: RegionId,
		predicate: impl Fn(Target) -> bool,
	) -> Option<Target> {
		let mut current = Some(id);
		while let Some(RegionId(index)) = current {
			let region = self.regions.get(index)?;
			if predicate(region.target) {
				return Some(region.target);
			}
			current = region.parent;
		}
		None
	}

	#[cfg(test)]
	pub(crate) fn targets(&self) -> impl Iterator<Item = (Rect, Target)> + '_ {
		self.regions.iter().map(|region| (region.area, region.target))
	}
}
