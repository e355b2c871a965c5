use {
	self::{config::Config, error::Error},
	std::path::PathBuf,
	tracing_subscriber::prelude::*,
};

mod check;
mod compare;
mod config;
mod error;
mod sort;

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub struct Cli {
	args: Args,
	config: Option<Config>,
}

#[derive(Clone, Debug, clap::Parser)]
#[command(
	about = "Parse and order release versions.",
	arg_required_else_help = true,
	disable_help_subcommand = true,
	name = "stagever",
	version
)]
struct Args {
	#[command(subcommand)]
	command: Command,

	/// The path to the config file.
	#[arg(env = "STAGEVER_CONFIG", long, short)]
	config: Option<PathBuf>,

	/// Override the tracing filter.
	#[arg(env = "STAGEVER_TRACING", long)]
	tracing: Option<String>,
}

#[derive(Clone, Debug, clap::Subcommand)]
enum Command {
	Check(self::check::Args),

	#[command(alias = "cmp")]
	Compare(self::compare::Args),

	Sort(self::sort::Args),
}

fn main() -> std::process::ExitCode {
	// Parse the args.
	let args = <Args as clap::Parser>::parse();

	// Read the config.
	let config = match Cli::read_config(args.config.clone()) {
		Ok(config) => config,
		Err(error) => {
			error::print(&error);
			return std::process::ExitCode::FAILURE;
		},
	};

	// Initialize tracing.
	if let Err(error) = Cli::initialize_tracing(config.as_ref(), args.tracing.as_ref()) {
		error::print(&error);
		return std::process::ExitCode::FAILURE;
	}

	// Run the command.
	let cli = Cli { args, config };
	match cli.run() {
		Ok(()) => std::process::ExitCode::SUCCESS,
		Err(error) => {
			tracing::debug!(%error, "the command failed");
			error::print(&error);
			std::process::ExitCode::FAILURE
		},
	}
}

impl Cli {
	fn run(&self) -> Result<()> {
		match self.args.command.clone() {
			Command::Check(args) => self.command_check(args),
			Command::Compare(args) => self.command_compare(args),
			Command::Sort(args) => self.command_sort(args),
		}
	}

	fn config_path(path: Option<PathBuf>) -> Option<PathBuf> {
		path.or_else(|| {
			let home = std::env::var_os("HOME")?;
			Some(PathBuf::from(home).join(".config/stagever/config.json"))
		})
	}

	fn read_config(path: Option<PathBuf>) -> Result<Option<Config>> {
		let Some(path) = Self::config_path(path) else {
			return Ok(None);
		};
		let config = match std::fs::read_to_string(&path) {
			Ok(config) => config,
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
				return Ok(None);
			},
			Err(source) => {
				return Err(Error::ReadConfig { path, source });
			},
		};
		let config = serde_json::from_str(&config)
			.map_err(|source| Error::DeserializeConfig { path, source })?;
		Ok(Some(config))
	}

	/// Initialize tracing.
	fn initialize_tracing(config: Option<&Config>, tracing_filter: Option<&String>) -> Result<()> {
		let config_tracing = config.and_then(|config| config.tracing.as_ref());
		let output_layer = if tracing_filter.is_some() || config_tracing.is_some() {
			let filter_string = tracing_filter
				.or(config_tracing.map(|tracing| &tracing.filter))
				.cloned()
				.unwrap_or_default();
			let filter = tracing_subscriber::filter::EnvFilter::try_new(&filter_string).map_err(
				|source| Error::TracingFilter {
					filter: filter_string.clone(),
					source,
				},
			)?;
			let format = config_tracing
				.and_then(|tracing| tracing.format)
				.unwrap_or_default();
			let output_layer = match format {
				self::config::TracingFormat::Json => tracing_subscriber::fmt::layer()
					.with_writer(std::io::stderr)
					.json()
					.boxed(),
				self::config::TracingFormat::Pretty => tracing_tree::HierarchicalLayer::new(2)
					.with_writer(std::io::stderr)
					.with_bracketed_fields(true)
					.boxed(),
			};
			Some(output_layer.with_filter(filter))
		} else {
			None
		};
		tracing_subscriber::registry().with(output_layer).init();
		Ok(())
	}
}
