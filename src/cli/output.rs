use anyhow::Result;
use filefind::SessionOutcome;
use filefind_core::{FileRecord, Icon};
use serde_json::json;

const NO_RESULTS: &str = "No matching files found.";

fn icon_line(file: &FileRecord) -> String {
	format!("{} {}", Icon::for_name(&file.name), file.name)
}

/// Print one line per displayed row, or the no-results notice.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	if !outcome.searched {
		println!("No search was run (query: '{}')", outcome.query);
		return;
	}

	for line in plain_lines(outcome) {
		println!("{line}");
	}
}

fn plain_lines(outcome: &SessionOutcome) -> Vec<String> {
	if outcome.loading {
		return vec![format!("Search for '{}' was still loading", outcome.query)];
	}
	if outcome.empty {
		return vec![NO_RESULTS.to_string()];
	}
	outcome.displayed.iter().map(icon_line).collect()
}

/// Format the outcome as a JSON document.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	let results: Vec<_> = outcome
		.displayed
		.iter()
		.map(|file| {
			json!({
				"name": file.name,
				"icon": Icon::for_name(&file.name),
			})
		})
		.collect();

	let payload = json!({
		"query": outcome.query,
		"mode": outcome.mode,
		"searched": outcome.searched,
		"loading": outcome.loading,
		"empty": outcome.empty,
		"results": results,
		"removed": outcome.removed,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use filefind_core::MatchMode;
	use serde_json::Value;

	use super::*;

	fn outcome() -> SessionOutcome {
		SessionOutcome {
			query: "pdf".into(),
			mode: MatchMode::Substring,
			searched: true,
			loading: false,
			empty: false,
			displayed: vec![FileRecord::new("新功能设计稿.pdf")],
			removed: vec![FileRecord::new("用户反馈.md")],
		}
	}

	#[test]
	fn json_format_lists_rows_with_icons() {
		let json = format_outcome_json(&outcome()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["query"], "pdf");
		assert_eq!(value["mode"], "substring");
		assert_eq!(value["results"][0]["name"], "新功能设计稿.pdf");
		assert_eq!(value["results"][0]["icon"], "📕");
		assert_eq!(value["removed"][0], "用户反馈.md");
	}

	#[test]
	fn no_results_notice_survives_earlier_removals() {
		let outcome = SessionOutcome {
			query: "xyz".into(),
			empty: true,
			displayed: Vec::new(),
			..outcome()
		};
		assert_eq!(plain_lines(&outcome), [NO_RESULTS]);
	}

	#[test]
	fn pending_search_is_reported_as_loading() {
		let outcome = SessionOutcome {
			query: "md".into(),
			loading: true,
			displayed: Vec::new(),
			..outcome()
		};
		assert_eq!(plain_lines(&outcome), ["Search for 'md' was still loading"]);
	}

	#[test]
	fn removing_every_row_prints_nothing() {
		let outcome = SessionOutcome {
			displayed: Vec::new(),
			..outcome()
		};
		assert!(plain_lines(&outcome).is_empty());
	}

	#[test]
	fn plain_lines_prefix_the_icon() {
		assert_eq!(icon_line(&FileRecord::new("用户反馈.md")), "🌐 用户反馈.md");
	}
}
