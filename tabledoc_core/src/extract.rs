use std::collections::BTreeMap;

use crate::ColumnType;
use crate::TabledocError;
use crate::TabledocResult;

/// Position of the line scan relative to a column-definition block.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ScanState {
	OutsideTable,
	InsideTable,
}

/// Schema details recovered from one document.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TableDetails {
	/// Second whitespace-separated token of the document's first level-1
	/// heading. `None` when the document never declares a heading; callers
	/// discard such results.
	pub name: Option<String>,
	/// Column name → canonical type. A later row for the same column
	/// overwrites an earlier one.
	pub columns: BTreeMap<String, ColumnType>,
}

/// Extract the declared table name and column definitions from (possibly
/// include-expanded) document text.
///
/// The scan is deliberately tolerant of markdown authoring noise: separator
/// rows, repeated header rows, and rows with a missing name or type are
/// skipped without comment. A type outside the closed vocabulary is the one
/// fatal condition.
pub fn extract_table(text: &str) -> TabledocResult<TableDetails> {
	let mut state = ScanState::OutsideTable;
	let mut details = TableDetails::default();

	for line in text.lines() {
		let line = line.trim();
		if line.is_empty() {
			continue;
		}
		// inline code ticks are cosmetic
		let line = line.replace('`', "");

		if details.name.is_none() && line.starts_with("# ") {
			details.name = line.split_whitespace().nth(1).map(str::to_string);
		}
		if is_columns_marker(&line) {
			state = ScanState::InsideTable;
			continue;
		}
		// a new section heading always terminates the column block
		if line.starts_with('#') {
			state = ScanState::OutsideTable;
		}
		if state == ScanState::OutsideTable || !line.starts_with('|') {
			continue;
		}

		let packed: String = line.chars().filter(|c| !matches!(c, ' ' | '\t')).collect();
		let cells: Vec<&str> = packed.split('|').collect();
		if cells.len() < 4 {
			continue;
		}
		let column_name = cells[1];
		let raw_type = cells[2].to_lowercase();
		if raw_type.is_empty() {
			continue;
		}
		if column_name.is_empty() || column_name == "Column" || column_name.starts_with("--") {
			continue;
		}

		let Some(column_type) = ColumnType::normalize(&raw_type) else {
			return Err(TabledocError::UnknownColumnType {
				type_token: raw_type,
				table: details.name.clone().unwrap_or_else(|| "<unnamed>".to_string()),
				column: column_name.to_string(),
				row: packed.clone(),
			});
		};
		details.columns.insert(column_name.to_string(), column_type);
	}

	tracing::debug!(
		table = details.name.as_deref().unwrap_or("<unnamed>"),
		columns = details.columns.len(),
		"extracted table details"
	);

	Ok(details)
}

/// Lines that open a column-definition block. The marker line itself is
/// never data.
fn is_columns_marker(line: &str) -> bool {
	let lower = line.to_lowercase();
	lower.starts_with("## columns")
		|| lower.starts_with("| column name")
		|| lower.starts_with("|column name")
}
