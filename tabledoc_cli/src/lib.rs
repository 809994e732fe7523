use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
	version,
	about = "Extract table schemas from markdown documentation corpora.",
	long_about = "tabledoc scans per-environment documentation corpora (Defender XDR \
	              advanced-hunting tables, Azure Monitor / Sentinel table references) for \
	              markdown table definitions and prints one consolidated JSON document mapping \
	              environment → table → column → type, together with each environment's magic \
	              functions.\n\nThe corpora are expected as checkouts under the working root; \
	              when one is missing the error names the exact acquisition command."
)]
pub struct TabledocCli {
	/// Working root containing the documentation checkouts and the
	/// additional-columns document.
	#[arg(long, short, default_value = ".")]
	pub path: PathBuf,

	/// Restrict the run to the named environment(s). May be repeated;
	/// defaults to every configured environment.
	#[arg(long, short)]
	pub environment: Vec<String>,

	/// Location of the additional-columns document, resolved against the
	/// working root when relative.
	#[arg(long, default_value = "additional_columns.json")]
	pub additional_columns: PathBuf,

	/// Enable verbose logging on stderr.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,
}
