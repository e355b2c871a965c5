use {
	anstream::eprintln,
	crossterm::style::Stylize as _,
	std::path::PathBuf,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("failed to read the config file at {}", path.display())]
	ReadConfig {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("failed to deserialize the config at {}", path.display())]
	DeserializeConfig {
		path: PathBuf,
		source: serde_json::Error,
	},

	#[error("invalid tracing filter {filter:?}")]
	TracingFilter {
		filter: String,
		source: tracing_subscriber::filter::ParseError,
	},

	#[error("failed to read the pairs file at {}", path.display())]
	ReadPairs {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("failed to deserialize the pairs file at {}", path.display())]
	DeserializePairs {
		path: PathBuf,
		source: serde_json::Error,
	},

	#[error("failed to read from stdin")]
	Stdin(#[source] std::io::Error),

	#[error(transparent)]
	Version(#[from] stagever_version::Error),

	#[error("{failed} of {total} pairs are out of order")]
	Check { failed: usize, total: usize },
}

/// Print an error and its sources to stderr.
pub fn print(error: &Error) {
	eprintln!("{} an error occurred", "error".red().bold());
	let mut error: Option<&dyn std::error::Error> = Some(error);
	while let Some(current) = error {
		eprintln!("{} {current}", "->".red());
		error = current.source();
	}
}
