use {
	crate::{Cli, Result, error::Error},
	anstream::println,
	crossterm::style::Stylize as _,
	stagever_version::Operand as _,
	std::path::PathBuf,
};

/// Check that pairs of versions are ordered.
///
/// The file holds a JSON array of `[lower, higher]` pairs. Without a file, a built-in list of pairs is checked.
#[derive(Clone, Debug, clap::Args)]
#[group(skip)]
pub struct Args {
	#[arg(index = 1)]
	pub path: Option<PathBuf>,
}

const PAIRS: [(&str, &str); 6] = [
	("1.0.0", "2.0.0"),
	("1.0.0", "1.42.0"),
	("1.2.0", "1.2.42"),
	("1.1.0-alpha", "1.2.0-alpha.1"),
	("1.0.1b77.6", "1.0.10-alpha.beta"),
	("1.0.0-rc.1", "1.0.0"),
];

impl Cli {
	pub fn command_check(&self, args: Args) -> Result<()> {
		let pairs: Vec<(serde_json::Value, serde_json::Value)> = match args.path {
			Some(path) => Self::read_pairs(path)?,
			None => PAIRS
				.iter()
				.map(|(lower, higher)| ((*lower).into(), (*higher).into()))
				.collect(),
		};

		let total = pairs.len();
		let mut failed = 0;
		for (lower, higher) in &pairs {
			let lower_version = lower.to_version()?;
			let higher_version = higher.to_version()?;
			let ordered = lower_version.lt_with(higher)?
				&& higher_version.gt_with(lower)?
				&& higher_version.ne_with(lower)?;
			if ordered {
				println!("{} {lower} < {higher}", "ok".green());
			} else {
				failed += 1;
				println!("{} {lower} < {higher}", "failed".red());
			}
		}
		tracing::debug!(total, failed, "checked the pairs");

		if failed > 0 {
			return Err(Error::Check { failed, total });
		}
		Ok(())
	}

	fn read_pairs(path: PathBuf) -> Result<Vec<(serde_json::Value, serde_json::Value)>> {
		let pairs = match std::fs::read_to_string(&path) {
			Ok(pairs) => pairs,
			Err(source) => return Err(Error::ReadPairs { path, source }),
		};
		serde_json::from_str(&pairs).map_err(|source| Error::DeserializePairs { path, source })
	}
}
