use std::process;

use clap::Parser;
use tabledoc_cli::TabledocCli;
use tabledoc_core::AnyEmptyResult;
use tabledoc_core::TabledocError;
use tabledoc_core::extract_schemas;
use tracing_subscriber::EnvFilter;

fn main() {
	let args = TabledocCli::parse();

	let use_color = std::env::var_os("NO_COLOR").is_none();

	let default_filter = if args.verbose { "tabledoc_core=debug" } else { "warn" };
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
		)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.init();

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	if let Err(e) = run(&args) {
		// Render core errors through miette for diagnostic codes and help
		// text (the missing-corpus help carries the acquisition command).
		match e.downcast::<TabledocError>() {
			Ok(core_error) => {
				let report: miette::Report = (*core_error).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("error: {e}");
			}
		}
		process::exit(1);
	}
}

fn run(args: &TabledocCli) -> AnyEmptyResult {
	let results = extract_schemas(&args.path, &args.environment, &args.additional_columns)?;

	// stdout carries the JSON document and nothing else
	println!("{}", serde_json::to_string_pretty(&results)?);

	Ok(())
}
