use {
	crate::{Error, Result, Version},
	std::borrow::Cow,
};

/// A value that a [`Version`] can be compared against.
///
/// Strings are parsed before comparing. Dynamically typed values that hold anything other than a string fail with [`Error::Operand`].
pub trait Operand {
	fn to_version(&self) -> Result<Cow<'_, Version>>;
}

impl Operand for Version {
	fn to_version(&self) -> Result<Cow<'_, Version>> {
		Ok(Cow::Borrowed(self))
	}
}

impl Operand for str {
	fn to_version(&self) -> Result<Cow<'_, Version>> {
		Version::parse(self).map(Cow::Owned)
	}
}

impl Operand for String {
	fn to_version(&self) -> Result<Cow<'_, Version>> {
		self.as_str().to_version()
	}
}

impl Operand for serde_json::Value {
	fn to_version(&self) -> Result<Cow<'_, Version>> {
		let kind = match self {
			serde_json::Value::String(string) => return string.to_version(),
			serde_json::Value::Null => "null",
			serde_json::Value::Bool(_) => "a boolean",
			serde_json::Value::Number(_) => "a number",
			serde_json::Value::Array(_) => "an array",
			serde_json::Value::Object(_) => "an object",
		};
		tracing::debug!(kind, "rejected a non-string operand");
		Err(Error::Operand { kind })
	}
}

impl<T> Operand for &T
where
	T: Operand + ?Sized,
{
	fn to_version(&self) -> Result<Cow<'_, Version>> {
		(**self).to_version()
	}
}
