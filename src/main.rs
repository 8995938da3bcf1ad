use std::path::PathBuf;
use std::process::ExitCode;

use clap::{
	ArgAction,
	Args,
	Parser,
	Subcommand
};
use log::LevelFilter;

use motlite::{
	convert::convert,
	load_with,
	LoadOptions,
	Stage
};

/// Load a JSON word list into a SQLite table
#[derive(Parser)]
#[command(name = "motlite", version, about, args_conflicts_with_subcommands = true)]
struct Cli {
	/// Log more (-v info, -vv debug); RUST_LOG takes precedence
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,

	/// `load` options, used when no subcommand is given
	#[command(flatten)]
	load: LoadArgs,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
	/// Replace the `words_ods6` table with the words of a JSON document
	Load(LoadArgs),
	/// Turn a text file with one word per line into a JSON document
	Convert(ConvertArgs),
}

#[derive(Args)]
struct LoadArgs {
	/// JSON document of the form {"mots": [...]}
	#[arg(long, env = "MOTLITE_SOURCE", default_value = "ods6.json")]
	source: PathBuf,

	/// SQLite database file, created if absent
	#[arg(long, env = "MOTLITE_DATABASE", default_value = "ods6.sqlite")]
	database: PathBuf,

	/// Skip repeated words instead of failing the run
	#[arg(long)]
	skip_duplicates: bool,

	/// Print the run summary as JSON
	#[arg(long)]
	json: bool,
}

#[derive(Args)]
struct ConvertArgs {
	#[arg(long, default_value = "ods6.txt")]
	input: PathBuf,

	#[arg(long, default_value = "ods6.json")]
	output: PathBuf,
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		_ => LevelFilter::Debug,
	};
	env_logger::Builder::new()
		.filter_level(level)
		.parse_default_env()
		.init();
}

fn fail(stage: Stage, err: &dyn std::error::Error) -> ExitCode {
	eprintln!("error ({stage}): {err}");
	ExitCode::from(stage.exit_code())
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let command = cli.command.unwrap_or(Command::Load(cli.load));

	match command {
		Command::Load(args) => {
			let options = LoadOptions { skip_duplicates: args.skip_duplicates };
			match load_with(&args.source, &args.database, &options) {
				Ok(report) if args.json => match serde_json::to_string_pretty(&report) {
					Ok(json) => {
						println!("{json}");
						ExitCode::SUCCESS
					}
					Err(err) => fail(Stage::Store, &err),
				},
				Ok(report) => {
					println!(
						"loaded {} words into {} ({}), {} duplicates skipped",
						report.rows_inserted,
						report.table,
						report.database.display(),
						report.duplicates_skipped
					);
					ExitCode::SUCCESS
				}
				Err(err) => fail(err.stage(), &err),
			}
		}
		Command::Convert(args) => match convert(&args.input, &args.output) {
			Ok(count) => {
				println!("wrote {count} words to {}", args.output.display());
				ExitCode::SUCCESS
			}
			Err(err) => fail(err.stage(), &err),
		},
	}
}
