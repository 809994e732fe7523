use serde::Deserialize;
use serde::Serialize;

/// The closed scalar type vocabulary accepted from the documentation corpus.
///
/// Anything outside this set (after alias rewriting) aborts the run so that
/// new documentation conventions are reviewed instead of silently coerced.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
	Datetime,
	String,
	Int,
	Boolean,
	Long,
	Bool,
	Dynamic,
	Real,
	Guid,
	Double,
}

impl ColumnType {
	/// Canonicalize a raw type token into the vocabulary, or `None` when the
	/// token is unknown.
	///
	/// The token must already be lower-cased and whitespace-free, which is
	/// how the table extractor produces cells. Alias rewrites apply first,
	/// in order; they are simple renames, never compositions.
	pub fn normalize(raw: &str) -> Option<Self> {
		let canonical = match raw {
			"integer" => "int",
			"bigint" => "long",
			// some tables refer to the non-existing types `list` and `enum`
			"list" | "enum" => "string",
			"nullablebool" => "bool",
			// the bool and boolean data types are equivalent
			"boolean" => "bool",
			other => other,
		};

		match canonical {
			"datetime" => Some(Self::Datetime),
			"string" => Some(Self::String),
			"int" => Some(Self::Int),
			"boolean" => Some(Self::Boolean),
			"long" => Some(Self::Long),
			"bool" => Some(Self::Bool),
			"dynamic" => Some(Self::Dynamic),
			"real" => Some(Self::Real),
			"guid" => Some(Self::Guid),
			"double" => Some(Self::Double),
			_ => None,
		}
	}

	/// The canonical lowercase name, as serialized in the output document.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Datetime => "datetime",
			Self::String => "string",
			Self::Int => "int",
			Self::Boolean => "boolean",
			Self::Long => "long",
			Self::Bool => "bool",
			Self::Dynamic => "dynamic",
			Self::Real => "real",
			Self::Guid => "guid",
			Self::Double => "double",
		}
	}
}

impl std::fmt::Display for ColumnType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
