//! SQL writer used by the statement renderers.
//!
//! [`SqlWriter`] accumulates statement text and the parameters bound by the
//! fragments pushed into it. Sequence numbers are not tracked here; they come
//! from the [`RenderingContext`](super::RenderingContext), which every clause
//! of a statement shares.

use super::fragment::{FragmentAndParameters, Parameters};

/// Accumulates SQL text and bound parameters.
///
/// # Examples
///
/// ```rust
/// use dynasql_query::render::{FragmentAndParameters, SqlWriter};
///
/// let mut writer = SqlWriter::new();
/// writer.push("delete from person");
/// writer.push_keyword("where");
/// writer.push_space();
/// writer.push_fragment(FragmentAndParameters::from_fragment("id is null"));
///
/// let (sql, parameters) = writer.finish().into_parts();
/// assert_eq!(sql, "delete from person where id is null");
/// assert!(parameters.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SqlWriter {
	sql: String,
	parameters: Parameters,
}

impl SqlWriter {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Push raw text.
	pub fn push(&mut self, s: &str) {
		self.sql.push_str(s);
	}

	/// Push a space unless the text is empty or already ends with one.
	pub fn push_space(&mut self) {
		if !self.sql.is_empty() && !self.sql.ends_with(' ') {
			self.sql.push(' ');
		}
	}

	/// Push a keyword preceded by a space.
	pub fn push_keyword(&mut self, keyword: &str) {
		self.push_space();
		self.sql.push_str(keyword);
	}

	/// Push a fragment's text and take over its parameters.
	pub fn push_fragment(&mut self, fragment: FragmentAndParameters) {
		let (text, parameters) = fragment.into_parts();
		self.sql.push_str(&text);
		self.parameters.append(parameters);
	}

	/// Push `keyword fragment` when a fragment is present; nothing otherwise.
	pub fn push_clause(&mut self, keyword: &str, fragment: Option<FragmentAndParameters>) {
		if let Some(fragment) = fragment {
			self.push_keyword(keyword);
			self.push_space();
			self.push_fragment(fragment);
		}
	}

	/// Push a list of items with a separator.
	pub fn push_list<I, T, F>(&mut self, items: I, separator: &str, mut f: F)
	where
		I: IntoIterator<Item = T>,
		F: FnMut(&mut Self, T),
	{
		let mut first = true;
		for item in items {
			if !first {
				self.sql.push_str(separator);
			}
			f(self, item);
			first = false;
		}
	}

	/// Parameters collected so far, for binding new values in place.
	pub fn parameters_mut(&mut self) -> &mut Parameters {
		&mut self.parameters
	}

	/// Current SQL text.
	pub fn sql(&self) -> &str {
		&self.sql
	}

	/// Check if SQL is empty
	pub fn is_empty(&self) -> bool {
		self.sql.is_empty()
	}

	/// Consume the writer.
	pub fn finish(self) -> FragmentAndParameters {
		FragmentAndParameters::new(self.sql, self.parameters)
	}
}
