use std::fs;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::TabledocError;
use crate::TabledocResult;

const INCLUDE_OPEN: &str = "[!INCLUDE [";
const TARGET_OPEN: &str = "](";
const TARGET_CLOSE: &str = ")]";

/// The cross-cutting content area that include resolution cannot support;
/// directives pointing there must abort rather than silently mis-resolve.
const REUSABLE_CONTENT: &str = "reusable-content";

/// Find the relative targets of every `[!INCLUDE [label](path)]` directive,
/// in order of appearance. Directives never span physical lines.
pub fn include_targets(text: &str) -> Vec<&str> {
	let mut targets = Vec::new();

	for line in text.lines() {
		let mut rest = line;
		while let Some(open) = rest.find(INCLUDE_OPEN) {
			// the bracketed label is display-only; skip to the target argument
			let after_label = &rest[open + INCLUDE_OPEN.len()..];
			let Some(separator) = after_label.find(TARGET_OPEN) else {
				break;
			};
			let after_separator = &after_label[separator + TARGET_OPEN.len()..];
			let Some(close) = after_separator.find(TARGET_CLOSE) else {
				break;
			};
			targets.push(&after_separator[..close]);
			rest = &after_separator[close + TARGET_CLOSE.len()..];
		}
	}

	targets
}

/// Expand the include directives of one document by appending each resolved
/// target's content (plus a newline separator) to the raw text.
///
/// Expansion is single-level: directives inside included content are left
/// as-is, matching the depth observed in the documentation corpora. Every
/// resolved target must stay within `base_dir`, judged by the grandparent
/// directory of the resolved file.
pub fn expand_includes(text: &str, document: &Path, base_dir: &Path) -> TabledocResult<String> {
	let document_dir = document.parent().unwrap_or_else(|| Path::new("."));
	let mut expanded = text.to_string();

	for target in include_targets(text) {
		if target.contains(REUSABLE_CONTENT) {
			return Err(TabledocError::UnsupportedInclude(target.to_string()));
		}

		let include_path = normalize_path(&document_dir.join(target));
		let parsed_dir = include_path
			.parent()
			.and_then(Path::parent)
			.map(Path::to_path_buf)
			.unwrap_or_default();
		if !parsed_dir.starts_with(base_dir) {
			return Err(TabledocError::SandboxViolation {
				dir: parsed_dir.display().to_string(),
				base_dir: base_dir.display().to_string(),
			});
		}

		tracing::debug!(
			document = %document.display(),
			include = %include_path.display(),
			"expanding include directive"
		);
		expanded.push_str(&fs::read_to_string(&include_path)?);
		expanded.push('\n');
	}

	Ok(expanded)
}

/// Resolve `.` and `..` components lexically, without touching the
/// filesystem. Parent components at the front of a relative path (or at the
/// root of an absolute one) are dropped, the way absolute-path normalization
/// clamps at the root.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
	let mut normalized = PathBuf::new();

	for component in path.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => {
				normalized.pop();
			}
			other => normalized.push(other),
		}
	}

	normalized
}
