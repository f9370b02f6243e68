//! Rendered fragments and their bound parameters.

use std::collections::BTreeMap;

use super::strategy::parameter_key;
use crate::value::{Value, Values};

/// Parameters bound by a rendered fragment.
///
/// Entries are kept in the order their placeholders appear in the text, so
/// [`to_values`](Self::to_values) is what a positional driver binds. Lookup by
/// key (`"p3"`) or by sequence number serves named drivers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
	entries: Vec<(usize, Value)>,
}

impl Parameters {
	/// Create an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Record the value bound to parameter `sequence`.
	pub fn insert(&mut self, sequence: usize, value: Value) {
		self.entries.push((sequence, value));
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true when nothing is bound.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Value bound to a key such as `"p3"`.
	pub fn get(&self, key: &str) -> Option<&Value> {
		let sequence = key.strip_prefix('p')?.parse::<usize>().ok()?;
		self.get_by_sequence(sequence)
	}

	/// Value bound to parameter `sequence`.
	pub fn get_by_sequence(&self, sequence: usize) -> Option<&Value> {
		self.entries
			.iter()
			.find(|(s, _)| *s == sequence)
			.map(|(_, value)| value)
	}

	/// Keys and values in text order.
	pub fn iter(&self) -> impl Iterator<Item = (String, &Value)> {
		self.entries
			.iter()
			.map(|(sequence, value)| (parameter_key(*sequence), value))
	}

	/// Sequence numbers in text order.
	pub fn sequences(&self) -> Vec<usize> {
		self.entries.iter().map(|(sequence, _)| *sequence).collect()
	}

	/// Values in text order, for positional binding.
	pub fn to_values(&self) -> Values {
		self.entries.iter().map(|(_, value)| value.clone()).collect()
	}

	/// Keyed view, ordered by sequence number.
	pub fn to_map(&self) -> BTreeMap<usize, Value> {
		self.entries.iter().cloned().collect()
	}

	/// Keyed view with string keys (`p1`, `p2`, ...).
	pub fn to_named_map(&self) -> BTreeMap<String, Value> {
		self.iter().map(|(key, value)| (key, value.clone())).collect()
	}

	/// Add every parameter of `other` after the parameters already held.
	///
	/// Used when the text that binds `other` follows the text that bound
	/// `self`, so entries stay in placeholder order.
	pub fn append(&mut self, other: Parameters) {
		self.entries.extend(other.entries);
	}

	/// Union with `other`, ordered by sequence number.
	///
	/// Sequence numbers are unique within one render, so the result is the
	/// same whichever side is merged into the other. When fragments were
	/// numbered in text order, sequence order is also placeholder order.
	pub fn merge(&mut self, other: Parameters) {
		self.entries.extend(other.entries);
		self.entries.sort_by_key(|(sequence, _)| *sequence);
	}
}

/// A piece of SQL text with the parameters its placeholders refer to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FragmentAndParameters {
	fragment: String,
	parameters: Parameters,
}

impl FragmentAndParameters {
	/// Create a fragment.
	pub fn new(fragment: impl Into<String>, parameters: Parameters) -> Self {
		Self {
			fragment: fragment.into(),
			parameters,
		}
	}

	/// A fragment that binds nothing.
	pub fn from_fragment(fragment: impl Into<String>) -> Self {
		Self::new(fragment, Parameters::new())
	}

	/// SQL text.
	pub fn fragment(&self) -> &str {
		&self.fragment
	}

	/// Bound parameters.
	pub fn parameters(&self) -> &Parameters {
		&self.parameters
	}

	/// Split into text and parameters.
	pub fn into_parts(self) -> (String, Parameters) {
		(self.fragment, self.parameters)
	}

	/// Same parameters, transformed text.
	#[must_use]
	pub fn map_fragment<F>(self, f: F) -> Self
	where
		F: FnOnce(String) -> String,
	{
		Self {
			fragment: f(self.fragment),
			parameters: self.parameters,
		}
	}
}

/// Fragments awaiting a join, each tagged with its position in the output.
///
/// The join orders fragments by position, so collectors can be merged in any
/// order. Fragments sharing a position are ordered by their text and then by
/// the sequence numbers they bind.
///
/// # Example
///
/// ```rust
/// use dynasql_query::render::{FragmentAndParameters, FragmentCollector};
///
/// let mut tail = FragmentCollector::new();
/// tail.add_at(1, FragmentAndParameters::from_fragment("b is null"));
/// let mut head = FragmentCollector::new();
/// head.add_at(0, FragmentAndParameters::from_fragment("a is null"));
///
/// tail.merge(head);
/// assert_eq!(tail.join(" and ").fragment(), "a is null and b is null");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FragmentCollector {
	fragments: Vec<(usize, FragmentAndParameters)>,
}

impl FragmentCollector {
	/// Create an empty collector.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a fragment after every fragment collected so far.
	pub fn add(&mut self, fragment: FragmentAndParameters) {
		let position = self
			.fragments
			.iter()
			.map(|(position, _)| position + 1)
			.max()
			.unwrap_or(0);
		self.fragments.push((position, fragment));
	}

	/// Place a fragment at `position`.
	pub fn add_at(&mut self, position: usize, fragment: FragmentAndParameters) {
		self.fragments.push((position, fragment));
	}

	/// Take every fragment of `other`, keeping their positions.
	pub fn merge(&mut self, other: FragmentCollector) {
		self.fragments.extend(other.fragments);
	}

	/// Number of fragments.
	pub fn len(&self) -> usize {
		self.fragments.len()
	}

	/// Returns true when no fragment was collected.
	pub fn is_empty(&self) -> bool {
		self.fragments.is_empty()
	}

	/// Join the fragments in position order with `separator`. Parameters
	/// follow the same order.
	pub fn join(mut self, separator: &str) -> FragmentAndParameters {
		self.fragments.sort_by(|(left_position, left), (right_position, right)| {
			left_position
				.cmp(right_position)
				.then_with(|| left.fragment().cmp(right.fragment()))
				.then_with(|| left.parameters().sequences().cmp(&right.parameters().sequences()))
		});
		let mut texts = Vec::with_capacity(self.fragments.len());
		let mut parameters = Parameters::new();
		for (_, fragment) in self.fragments {
			let (text, params) = fragment.into_parts();
			texts.push(text);
			parameters.append(params);
		}
		FragmentAndParameters::new(texts.join(separator), parameters)
	}
}

impl FromIterator<FragmentAndParameters> for FragmentCollector {
	fn from_iter<I: IntoIterator<Item = FragmentAndParameters>>(iter: I) -> Self {
		Self {
			fragments: iter.into_iter().enumerate().collect(),
		}
	}
}
