use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum TabledocError {
	#[error(transparent)]
	#[diagnostic(code(tabledoc::io_error))]
	Io(#[from] std::io::Error),

	#[error("invalid document glob pattern")]
	#[diagnostic(code(tabledoc::glob))]
	Glob(#[from] globset::Error),

	#[error("corpus directory `{dir}` does not exist")]
	#[diagnostic(code(tabledoc::missing_corpus), help("to create it, run:\n{acquire}"))]
	MissingCorpus { dir: String, acquire: String },

	#[error("include directive targets unsupported reusable content: `{0}`")]
	#[diagnostic(
		code(tabledoc::unsupported_include),
		help(
			"reusable-content targets resolve outside a docs checkout; the resolver must be \
			 taught this layout before it can be parsed"
		)
	)]
	UnsupportedInclude(String),

	#[error("include path `{dir}` is not in `{base_dir}`")]
	#[diagnostic(code(tabledoc::include_sandbox))]
	SandboxViolation { dir: String, base_dir: String },

	#[error("`{type_token}` is not a valid column type (table `{table}`, column `{column}`, row `{row}`)")]
	#[diagnostic(
		code(tabledoc::unknown_column_type),
		help("new documentation type conventions must be added to the normalizer alias table")
	)]
	UnknownColumnType {
		type_token: String,
		table: String,
		column: String,
		row: String,
	},

	#[error("failed to load additional columns from `{path}`: {reason}")]
	#[diagnostic(code(tabledoc::additional_columns))]
	AdditionalColumns { path: String, reason: String },

	#[error("no additional-columns entry for environment `{0}`")]
	#[diagnostic(
		code(tabledoc::missing_environment_entry),
		help("add an entry (an empty object is fine) for this environment to the additional-columns document")
	)]
	MissingEnvironmentEntry(String),

	#[error("unknown environment: `{0}`")]
	#[diagnostic(code(tabledoc::unknown_environment))]
	UnknownEnvironment(String),
}

pub type TabledocResult<T> = Result<T, TabledocError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
