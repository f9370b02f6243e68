//! Placeholder dialects.
//!
//! A [`RenderingStrategy`] turns a parameter's sequence number and its
//! column's type tag into placeholder text. It has no other responsibility,
//! so the renderer never changes when a dialect is added.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::JdbcType;

/// Type information a placeholder may carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindingTag<'a> {
	/// Value-type tag of the column the value is bound against
	pub jdbc_type: Option<JdbcType>,
	/// Type handler of the column the value is bound against
	pub type_handler: Option<&'a str>,
}

/// Key under which parameter `sequence` is recorded. Every named dialect
/// uses it, so placeholders always agree with [`Parameters`](super::Parameters).
pub fn parameter_key(sequence: usize) -> String {
	format!("p{}", sequence)
}

/// Formats bind placeholders.
///
/// # Example
///
/// ```rust
/// use dynasql_query::render::{AnnotatedStrategy, BindingTag, RenderingStrategy};
/// use dynasql_query::types::JdbcType;
///
/// let tag = BindingTag { jdbc_type: Some(JdbcType::Integer), type_handler: None };
/// assert_eq!(
///     AnnotatedStrategy::default().placeholder(3, &tag),
///     "#{parameters.p3,jdbcType=INTEGER}"
/// );
/// ```
pub trait RenderingStrategy: fmt::Debug + Send + Sync {
	/// Placeholder text for parameter `sequence`.
	///
	/// A named placeholder must refer to the parameter by
	/// [`parameter_key`], the key it is recorded under.
	fn placeholder(&self, sequence: usize, binding: &BindingTag<'_>) -> String;
}

/// Bare positional placeholders: `?`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalStrategy;

impl RenderingStrategy for PositionalStrategy {
	fn placeholder(&self, _sequence: usize, _binding: &BindingTag<'_>) -> String {
		"?".to_string()
	}
}

/// Simple named placeholders: `:p<N>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedStrategy;

impl RenderingStrategy for NamedStrategy {
	fn placeholder(&self, sequence: usize, _binding: &BindingTag<'_>) -> String {
		format!(":{}", parameter_key(sequence))
	}
}

/// Annotated named placeholders:
/// `#{<prefix>.p<N>[,jdbcType=<T>][,typeHandler=<H>]}`.
#[derive(Debug, Clone)]
pub struct AnnotatedStrategy {
	prefix: String,
}

impl AnnotatedStrategy {
	/// Prefix used when none is configured.
	pub const DEFAULT_PREFIX: &'static str = "parameters";

	/// Create a strategy with a custom prefix.
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
		}
	}

	/// The prefix.
	pub fn prefix(&self) -> &str {
		&self.prefix
	}
}

impl Default for AnnotatedStrategy {
	fn default() -> Self {
		Self::new(Self::DEFAULT_PREFIX)
	}
}

impl RenderingStrategy for AnnotatedStrategy {
	fn placeholder(&self, sequence: usize, binding: &BindingTag<'_>) -> String {
		let mut placeholder = format!("#{{{}.{}", self.prefix, parameter_key(sequence));
		if let Some(jdbc_type) = binding.jdbc_type {
			placeholder.push_str(",jdbcType=");
			placeholder.push_str(jdbc_type.as_str());
		}
		if let Some(type_handler) = binding.type_handler {
			placeholder.push_str(",typeHandler=");
			placeholder.push_str(type_handler);
		}
		placeholder.push('}');
		placeholder
	}
}

/// The built-in dialects, selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
	/// [`PositionalStrategy`]
	Positional,
	/// [`NamedStrategy`]
	#[default]
	Named,
	/// [`AnnotatedStrategy`]
	Annotated,
}

impl Dialect {
	/// Build the strategy. `prefix` is used by the annotated dialect only.
	pub fn strategy(&self, prefix: &str) -> Arc<dyn RenderingStrategy> {
		match self {
			Self::Positional => Arc::new(PositionalStrategy),
			Self::Named => Arc::new(NamedStrategy),
			Self::Annotated => Arc::new(AnnotatedStrategy::new(prefix)),
		}
	}
}
