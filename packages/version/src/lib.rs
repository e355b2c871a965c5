use {
	itertools::{EitherOrBoth, Itertools as _},
	std::cmp::Ordering,
};

pub use self::{operand::Operand, parse::parse};

pub mod operand;
mod parse;


/// A result alias that defaults to `Error` as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The value a missing main version component compares as.
pub const MAIN_VERSION_FILL: u64 = 0;

/// The value a missing pre-release element compares as.
///
/// This makes a final release, which has no pre-release elements, outrank its pre-releases. A pre-release number of at least this value at the deciding index inverts that.
pub const PRE_RELEASE_FILL: u64 = 100;

/// A parsed version.
///
/// Equality and ordering both come from [`compare`], so `1.0` and `1.0.0` are equal, as are `1.0.0-alpha` and `1.0.0-alpha.1`.
#[derive(Clone, Debug, serde_with::DeserializeFromStr)]
pub struct Version {
	main_version: Vec<u64>,
	pre_release: Vec<u64>,
}

/// A pre-release stage.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Stage {
	Alpha = 0,
	Beta = 1,
	Rc = 2,
}

#[derive(Clone, Debug, derive_more::Display, derive_more::Error)]
pub enum Error {
	#[display("malformed version {input:?}: {reason}")]
	Malformed { input: String, reason: String },

	#[display("expected a version or a string, found {kind}")]
	Operand { kind: &'static str },
}

impl Version {
	pub fn parse(input: &str) -> Result<Self> {
		parse(input)
	}

	/// The major, minor, and patch components, as many as were present.
	#[must_use]
	pub fn main_version(&self) -> &[u64] {
		&self.main_version
	}

	/// The flat sequence of stage codes and their numbers.
	#[must_use]
	pub fn pre_release(&self) -> &[u64] {
		&self.pre_release
	}

	#[must_use]
	pub fn is_prerelease(&self) -> bool {
		!self.pre_release.is_empty()
	}

	pub fn compare_with<T>(&self, other: &T) -> Result<Ordering>
	where
		T: Operand + ?Sized,
	{
		let other = other.to_version()?;
		Ok(compare(self, &other))
	}

	pub fn eq_with<T>(&self, other: &T) -> Result<bool>
	where
		T: Operand + ?Sized,
	{
		Ok(self.compare_with(other)?.is_eq())
	}

	pub fn ne_with<T>(&self, other: &T) -> Result<bool>
	where
		T: Operand + ?Sized,
	{
		Ok(self.compare_with(other)?.is_ne())
	}

	pub fn lt_with<T>(&self, other: &T) -> Result<bool>
	where
		T: Operand + ?Sized,
	{
		Ok(self.compare_with(other)?.is_lt())
	}

	pub fn le_with<T>(&self, other: &T) -> Result<bool>
	where
		T: Operand + ?Sized,
	{
		Ok(self.compare_with(other)?.is_le())
	}

	pub fn gt_with<T>(&self, other: &T) -> Result<bool>
	where
		T: Operand + ?Sized,
	{
		Ok(self.compare_with(other)?.is_gt())
	}

	pub fn ge_with<T>(&self, other: &T) -> Result<bool>
	where
		T: Operand + ?Sized,
	{
		Ok(self.compare_with(other)?.is_ge())
	}
}

impl Stage {
	/// Look up a lowercase pre-release identifier.
	#[must_use]
	pub fn from_identifier(identifier: &str) -> Option<Self> {
		match identifier {
			"a" | "alpha" => Some(Self::Alpha),
			"b" | "beta" => Some(Self::Beta),
			"c" | "rc" => Some(Self::Rc),
			_ => None,
		}
	}

	#[must_use]
	pub fn code(self) -> u64 {
		self as u64
	}
}

impl Error {
	pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
		Self::Malformed {
			input: input.to_owned(),
			reason: reason.into(),
		}
	}
}

/// Compare two versions.
///
/// The main versions are compared first, element by element, with missing components treated as [`MAIN_VERSION_FILL`]. If they are equal, the pre-release sequences are compared the same way with missing elements treated as [`PRE_RELEASE_FILL`].
#[must_use]
pub fn compare(a: &Version, b: &Version) -> Ordering {
	compare_padded(&a.main_version, &b.main_version, MAIN_VERSION_FILL)
		.then_with(|| compare_padded(&a.pre_release, &b.pre_release, PRE_RELEASE_FILL))
}

fn compare_padded(a: &[u64], b: &[u64], fill: u64) -> Ordering {
	a.iter()
		.zip_longest(b)
		.map(|pair| match pair {
			EitherOrBoth::Both(a, b) => a.cmp(b),
			EitherOrBoth::Left(a) => a.cmp(&fill),
			EitherOrBoth::Right(b) => fill.cmp(b),
		})
		.find(|ordering| ordering.is_ne())
		.unwrap_or(Ordering::Equal)
}

/// Strip the trailing elements that compare equal to a missing element.
fn trim_fill(values: &[u64], fill: u64) -> &[u64] {
	let len = values
		.iter()
		.rposition(|value| *value != fill)
		.map_or(0, |index| index + 1);
	&values[..len]
}

impl PartialEq for Version {
	fn eq(&self, other: &Self) -> bool {
		compare(self, other).is_eq()
	}
}

impl Eq for Version {}

impl std::hash::Hash for Version {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		trim_fill(&self.main_version, MAIN_VERSION_FILL).hash(state);
		trim_fill(&self.pre_release, PRE_RELEASE_FILL).hash(state);
	}
}

impl PartialOrd for Version {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Version {
	fn cmp(&self, other: &Self) -> Ordering {
		compare(self, other)
	}
}

impl PartialEq<str> for Version {
	fn eq(&self, other: &str) -> bool {
		self.eq_with(other).unwrap_or(false)
	}
}

impl PartialEq<&str> for Version {
	fn eq(&self, other: &&str) -> bool {
		self.eq_with(*other).unwrap_or(false)
	}
}

impl PartialOrd<str> for Version {
	fn partial_cmp(&self, other: &str) -> Option<Ordering> {
		self.compare_with(other).ok()
	}
}

impl PartialOrd<&str> for Version {
	fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
		self.compare_with(*other).ok()
	}
}

impl std::str::FromStr for Version {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse(s)
	}
}

impl TryFrom<&str> for Version {
	type Error = Error;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		parse(value)
	}
}
