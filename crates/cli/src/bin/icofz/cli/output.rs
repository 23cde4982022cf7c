use anyhow::Result;
use icofz_tui::FinderOutcome;
use serde::Serialize;

/// Print a plain-text representation of the finder outcome.
pub(crate) fn print_outcome_plain(outcome: &FinderOutcome) {
	print!("{}", format_outcome_plain(outcome));
}

fn format_outcome_plain(outcome: &FinderOutcome) -> String {
	let mut text = String::new();
	if outcome.accepted {
		match &outcome.selection {
			Some(name) => text.push_str(name),
			None => text.push_str("No selection"),
		}
	} else {
		text.push_str(&format!("Search cancelled (keyword: '{}')", outcome.keyword));
	}
	text.push('\n');
	for path in &outcome.exported {
		text.push_str(&format!("exported {}\n", path.display()));
	}
	text
}

/// Format any serialisable value as pretty JSON.
pub(crate) fn format_json(value: &impl Serialize) -> Result<String> {
	Ok(serde_json::to_string_pretty(value)?)
}

/// Print a serialisable value as pretty JSON.
pub(crate) fn print_json(value: &impl Serialize) -> Result<()> {
	println!("{}", format_json(value)?);
	Ok(())
}
