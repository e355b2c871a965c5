use {
	crate::{Cli, Result, error::Error},
	stagever_version::Version,
	std::io::BufRead as _,
};

/// Sort versions in ascending order.
///
/// Versions are read from the arguments, or one per line from stdin if there are none. Equal versions keep their input order.
#[derive(Clone, Debug, clap::Args)]
#[group(skip)]
pub struct Args {
	/// Sort in descending order.
	#[arg(long, short)]
	pub reverse: bool,

	pub versions: Vec<String>,
}

impl Cli {
	pub fn command_sort(&self, args: Args) -> Result<()> {
		let inputs = if args.versions.is_empty() {
			let lines = std::io::stdin()
				.lock()
				.lines()
				.collect::<std::io::Result<Vec<_>>>()
				.map_err(Error::Stdin)?;
			lines
				.iter()
				.map(|line| line.trim())
				.filter(|line| !line.is_empty())
				.map(ToOwned::to_owned)
				.collect()
		} else {
			args.versions
		};

		let mut entries = inputs
			.into_iter()
			.map(|input| {
				let version = Version::parse(&input)?;
				Ok((input, version))
			})
			.collect::<Result<Vec<_>>>()?;
		if args.reverse {
			entries.sort_by(|(_, a), (_, b)| b.cmp(a));
		} else {
			entries.sort_by(|(_, a), (_, b)| a.cmp(b));
		}
		tracing::debug!(count = entries.len(), "sorted");

		for (input, _) in entries {
			println!("{input}");
		}
		Ok(())
	}
}
