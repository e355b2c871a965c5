use {
	crate::{Cli, Result},
	stagever_version::Version,
	std::cmp::Ordering,
};

/// Compare two versions.
#[derive(Clone, Debug, clap::Args)]
#[group(skip)]
pub struct Args {
	#[arg(index = 1)]
	pub left: String,

	#[arg(index = 2)]
	pub right: String,

	/// Print `-1`, `0`, or `1` instead of `<`, `=`, or `>`.
	#[arg(long)]
	pub numeric: bool,
}

impl Cli {
	pub fn command_compare(&self, args: Args) -> Result<()> {
		let left = Version::parse(&args.left)?;
		let ordering = left.compare_with(args.right.as_str())?;
		tracing::debug!(left = %args.left, right = %args.right, ?ordering, "compared");
		let numeric = args.numeric
			|| self
				.config
				.as_ref()
				.and_then(|config| config.numeric)
				.unwrap_or(false);
		let output = match (ordering, numeric) {
			(Ordering::Less, false) => "<",
			(Ordering::Equal, false) => "=",
			(Ordering::Greater, false) => ">",
			(Ordering::Less, true) => "-1",
			(Ordering::Equal, true) => "0",
			(Ordering::Greater, true) => "1",
		};
		println!("{output}");
		Ok(())
	}
}
