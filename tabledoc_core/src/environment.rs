use crate::TabledocError;
use crate::TabledocResult;

/// One documentation corpus with its own layout conventions.
#[derive(Clone, Copy, Debug)]
pub struct Environment {
	/// Registry key, also the key into the additional-columns document.
	pub name: &'static str,
	/// Directory searched for candidate documents, relative to the working
	/// root.
	pub dir_name: &'static str,
	/// Include-resolution sandbox boundary, relative to the working root.
	pub base_dir: &'static str,
	/// File-name pattern selecting candidate documents inside `dir_name`.
	pub glob: &'static str,
	/// Environment-specific function names, passed through to the output
	/// untouched.
	pub magic_functions: &'static [&'static str],
	/// Corpus acquisition command, shown when `dir_name` is missing.
	pub help: &'static str,
}

/// The built-in corpus registry. New corpora are additions here, not edits
/// to control flow.
pub const ENVIRONMENTS: &[Environment] = &[
	Environment {
		name: "m365",
		dir_name: "defender-docs/defender-xdr",
		base_dir: "defender-docs",
		glob: "*-table.md",
		magic_functions: &["AssignedIPAddresses", "FileProfile", "DeviceFromIP", "SeenBy"],
		help: "git clone --filter=blob:none --sparse --depth=1 \
		       https://github.com/MicrosoftDocs/defender-docs ; cd defender-docs ; git \
		       sparse-checkout set defender-docs/defender-xdr ; cd ..",
	},
	Environment {
		name: "sentinel",
		dir_name: "azure-reference-other/azure-monitor-ref/tables",
		base_dir: "azure-reference-other",
		glob: "*.md",
		magic_functions: &[],
		help: "git clone --depth=1 https://github.com/MicrosoftDocs/azure-reference-other ; cd \
		       azure-reference-other ; git checkout bea53845fef94ad4f1887d306e6618a34efefc01 ; \
		       cd ..",
	},
];

/// Resolve a list of environment names against the registry, preserving the
/// requested order. An empty list selects every configured environment.
pub fn select_environments(names: &[String]) -> TabledocResult<Vec<&'static Environment>> {
	if names.is_empty() {
		return Ok(ENVIRONMENTS.iter().collect());
	}

	names
		.iter()
		.map(|name| {
			ENVIRONMENTS
				.iter()
				.find(|environment| environment.name == name)
				.ok_or_else(|| TabledocError::UnknownEnvironment(name.clone()))
		})
		.collect()
}
