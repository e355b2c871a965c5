#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
	/// Print comparisons as `-1`, `0`, or `1` instead of `<`, `=`, or `>`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub numeric: Option<bool>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tracing: Option<Tracing>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Tracing {
	pub filter: String,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub format: Option<TracingFormat>,
}

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TracingFormat {
	Json,
	#[default]
	Pretty,
}
