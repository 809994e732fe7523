use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use globset::Glob;
use serde::Deserialize;
use serde::Serialize;

use crate::ColumnType;
use crate::Environment;
use crate::TabledocError;
use crate::TabledocResult;
use crate::expand_includes;
use crate::extract_table;
use crate::include::normalize_path;
use crate::select_environments;

/// Column name → canonical type for one table.
pub type ColumnMap = BTreeMap<String, ColumnType>;

/// Table name → column map for one environment.
pub type TableRegistry = BTreeMap<String, ColumnMap>;

/// The additional-columns document: environment → table → column → type.
/// Deserializing through [`ColumnType`] rejects out-of-vocabulary types at
/// load time.
pub type AdditionalColumns = BTreeMap<String, BTreeMap<String, ColumnMap>>;

/// Final per-environment output. Field order here is the serialized key
/// order.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EnvironmentResult {
	pub tables: TableRegistry,
	pub magic_functions: Vec<String>,
}

/// Load and validate the additional-columns document.
pub fn load_additional_columns(path: &Path) -> TabledocResult<AdditionalColumns> {
	let content = fs::read_to_string(path).map_err(|error| TabledocError::AdditionalColumns {
		path: path.display().to_string(),
		reason: error.to_string(),
	})?;

	serde_json::from_str(&content).map_err(|error| TabledocError::AdditionalColumns {
		path: path.display().to_string(),
		reason: error.to_string(),
	})
}

/// Enumerate the environment's candidate documents, lexicographically
/// sorted. The corpus layout is flat; the glob matches file names only.
fn corpus_documents(root: &Path, environment: &Environment) -> TabledocResult<Vec<PathBuf>> {
	let dir = root.join(environment.dir_name);
	let matcher = Glob::new(environment.glob)?.compile_matcher();

	let mut documents = Vec::new();
	for entry in fs::read_dir(&dir)? {
		let path = entry?.path();
		if path.is_file() && path.file_name().is_some_and(|name| matcher.is_match(name)) {
			documents.push(path);
		}
	}
	documents.sort();

	Ok(documents)
}

/// Process one environment: extract every matching document in order, merge
/// the table registry, then layer on the environment's additional columns.
///
/// Two documents declaring the same table name replace at the table level
/// (last writer in sort order wins); additional columns merge at the column
/// level.
pub fn process_environment(
	root: &Path,
	environment: &Environment,
	additional_columns: &Path,
) -> TabledocResult<EnvironmentResult> {
	let corpus_dir = root.join(environment.dir_name);
	if !corpus_dir.exists() {
		return Err(TabledocError::MissingCorpus {
			dir: environment.dir_name.to_string(),
			acquire: environment.help.to_string(),
		});
	}

	let base_dir = normalize_path(&root.join(environment.base_dir));
	let mut tables = TableRegistry::new();

	for document in corpus_documents(root, environment)? {
		let text = fs::read_to_string(&document)?;
		let expanded = expand_includes(&text, &document, &base_dir)?;
		let details = extract_table(&expanded)?;

		// a document that never declares a heading has no registry identity
		let Some(name) = details.name else {
			tracing::debug!(document = %document.display(), "skipping nameless document");
			continue;
		};
		tables.insert(name, details.columns);
	}
	tracing::debug!(
		environment = environment.name,
		tables = tables.len(),
		"extracted corpus"
	);

	let additional = load_additional_columns(additional_columns)?;
	let Some(extra_tables) = additional.get(environment.name) else {
		return Err(TabledocError::MissingEnvironmentEntry(environment.name.to_string()));
	};
	for (table_name, extra_columns) in extra_tables {
		let table = tables.entry(table_name.clone()).or_default();
		for (column_name, column_type) in extra_columns {
			table.insert(column_name.clone(), *column_type);
		}
	}

	Ok(EnvironmentResult {
		tables,
		magic_functions: environment
			.magic_functions
			.iter()
			.map(ToString::to_string)
			.collect(),
	})
}

/// Run extraction for the named environments (every configured environment
/// when `names` is empty) and assemble the consolidated mapping.
pub fn extract_schemas(
	root: &Path,
	names: &[String],
	additional_columns: &Path,
) -> TabledocResult<BTreeMap<String, EnvironmentResult>> {
	// absolute paths keep the sandbox prefix check meaningful for `..`-heavy
	// include targets
	let root = normalize_path(&std::path::absolute(root)?);
	let additional_columns = if additional_columns.is_absolute() {
		additional_columns.to_path_buf()
	} else {
		root.join(additional_columns)
	};

	let mut results = BTreeMap::new();
	for environment in select_environments(names)? {
		let result = process_environment(&root, environment, &additional_columns)?;
		results.insert(environment.name.to_string(), result);
	}

	Ok(results)
}
