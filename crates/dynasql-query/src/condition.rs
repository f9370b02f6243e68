//! Condition algebra.
//!
//! A [`Condition`] is one of four shapes: no value (`is null`), a single
//! value (`=`), two values (`between`) or a list (`in`). Conditions are
//! immutable. [`Condition::map`], [`Condition::filter`] and
//! [`Condition::when`] return new instances.
//!
//! A condition that is empty, or whose `when` predicate returns false at
//! render time, is elided: it produces no SQL and binds no parameters.
//!
//! # Example
//!
//! ```rust
//! use dynasql_query::condition::{is_equal_to_when_present, is_in};
//!
//! let by_id = is_equal_to_when_present(None::<i32>);
//! assert!(!by_id.should_render());
//!
//! let statuses = is_in(["active", "pending"]).filter(|s| *s != "pending");
//! assert_eq!(statuses.value_count(), 1);
//! ```

mod builders;
mod operators;

use std::fmt;
use std::sync::Arc;

pub use builders::*;
pub use operators::{ListValueOperator, NoValueOperator, SingleValueOperator, TwoValueOperator};

use crate::error::{QueryError, QueryResult};
use crate::value::{IntoValue, Value};

/// Predicate deciding at render time whether a condition renders.
pub type RenderPredicate = Arc<dyn Fn() -> bool + Send + Sync>;

/// The `when` predicates attached to a condition.
#[derive(Clone, Default)]
pub struct RenderGuard(Option<RenderPredicate>);

impl RenderGuard {
	fn and(self, next: RenderPredicate) -> Self {
		match self.0 {
			None => Self(Some(next)),
			Some(current) => Self(Some(Arc::new(move || current() && next()))),
		}
	}

	/// Run the predicate. A condition without one always renders.
	pub fn evaluate(&self) -> bool {
		self.0.as_ref().is_none_or(|predicate| predicate())
	}

	/// Whether a predicate is attached.
	pub fn is_set(&self) -> bool {
		self.0.is_some()
	}
}

impl fmt::Debug for RenderGuard {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.0.is_some() {
			f.write_str("RenderGuard(when)")
		} else {
			f.write_str("RenderGuard(always)")
		}
	}
}

/// `is null` / `is not null`.
#[derive(Debug, Clone)]
pub struct NoValueCondition {
	operator: NoValueOperator,
	guard: RenderGuard,
}

impl NoValueCondition {
	/// Create a condition.
	pub fn new(operator: NoValueOperator) -> Self {
		Self {
			operator,
			guard: RenderGuard::default(),
		}
	}

	/// The operator.
	pub fn operator(&self) -> NoValueOperator {
		self.operator
	}
}

/// A comparison against one value.
#[derive(Debug, Clone)]
pub struct SingleValueCondition<T> {
	operator: SingleValueOperator,
	value: Option<T>,
	guard: RenderGuard,
}

impl<T> SingleValueCondition<T> {
	/// Create a condition. `None` creates an empty condition.
	pub fn new(operator: SingleValueOperator, value: Option<T>) -> Self {
		Self {
			operator,
			value,
			guard: RenderGuard::default(),
		}
	}

	/// The operator.
	pub fn operator(&self) -> SingleValueOperator {
		self.operator
	}

	/// The value, absent when the condition is empty.
	pub fn value(&self) -> Option<&T> {
		self.value.as_ref()
	}
}

/// A range comparison against two values.
#[derive(Debug, Clone)]
pub struct TwoValueCondition<T> {
	operator: TwoValueOperator,
	values: Option<(T, T)>,
	guard: RenderGuard,
}

impl<T> TwoValueCondition<T> {
	/// Create a condition. `None` creates an empty condition.
	pub fn new(operator: TwoValueOperator, values: Option<(T, T)>) -> Self {
		Self {
			operator,
			values,
			guard: RenderGuard::default(),
		}
	}

	/// Create a condition from a list holding exactly two values.
	///
	/// # Errors
	///
	/// Returns [`QueryError::InvalidArity`] when the list does not hold
	/// exactly two values.
	pub fn from_list(operator: TwoValueOperator, values: Vec<T>) -> QueryResult<Self> {
		let actual = values.len();
		let mut iter = values.into_iter();
		match (iter.next(), iter.next(), iter.next()) {
			(Some(first), Some(second), None) => Ok(Self::new(operator, Some((first, second)))),
			_ => Err(QueryError::InvalidArity {
				operator: operator.token(),
				expected: 2,
				actual,
			}),
		}
	}

	/// The operator.
	pub fn operator(&self) -> TwoValueOperator {
		self.operator
	}

	/// The two values, absent when the condition is empty.
	pub fn values(&self) -> Option<(&T, &T)> {
		self.values.as_ref().map(|(first, second)| (first, second))
	}
}

/// A membership test against a list of values.
#[derive(Debug, Clone)]
pub struct ListValueCondition<T> {
	operator: ListValueOperator,
	values: Vec<T>,
	guard: RenderGuard,
}

impl<T> ListValueCondition<T> {
	/// Create a condition. An empty list creates an empty condition.
	pub fn new(operator: ListValueOperator, values: Vec<T>) -> Self {
		Self {
			operator,
			values,
			guard: RenderGuard::default(),
		}
	}

	/// The operator.
	pub fn operator(&self) -> ListValueOperator {
		self.operator
	}

	/// The values.
	pub fn values(&self) -> &[T] {
		&self.values
	}
}

/// A condition in one of its four shapes.
#[derive(Debug, Clone)]
pub enum Condition<T> {
	/// No value
	NoValue(NoValueCondition),
	/// One value
	Single(SingleValueCondition<T>),
	/// Two values
	Double(TwoValueCondition<T>),
	/// Zero or more values
	List(ListValueCondition<T>),
}

impl<T> Condition<T> {
	/// Returns true when the condition carries no value to compare with.
	///
	/// No-value conditions are never empty.
	pub fn is_empty(&self) -> bool {
		match self {
			Self::NoValue(_) => false,
			Self::Single(c) => c.value.is_none(),
			Self::Double(c) => c.values.is_none(),
			Self::List(c) => c.values.is_empty(),
		}
	}

	/// Number of parameters the condition binds when it renders.
	pub fn value_count(&self) -> usize {
		match self {
			Self::NoValue(_) => 0,
			Self::Single(c) => usize::from(c.value.is_some()),
			Self::Double(c) => 2 * usize::from(c.values.is_some()),
			Self::List(c) => c.values.len(),
		}
	}

	fn guard(&self) -> &RenderGuard {
		match self {
			Self::NoValue(c) => &c.guard,
			Self::Single(c) => &c.guard,
			Self::Double(c) => &c.guard,
			Self::List(c) => &c.guard,
		}
	}

	fn guard_mut(&mut self) -> &mut RenderGuard {
		match self {
			Self::NoValue(c) => &mut c.guard,
			Self::Single(c) => &mut c.guard,
			Self::Double(c) => &mut c.guard,
			Self::List(c) => &mut c.guard,
		}
	}

	/// Decide whether the condition renders.
	///
	/// Runs the `when` predicate, so the renderer calls this exactly once per
	/// render.
	pub fn should_render(&self) -> bool {
		!self.is_empty() && self.guard().evaluate()
	}

	/// Attach a predicate evaluated at render time. The condition renders only
	/// when every attached predicate returns true.
	#[must_use]
	pub fn when<F>(mut self, predicate: F) -> Self
	where
		F: Fn() -> bool + Send + Sync + 'static,
	{
		let guard = std::mem::take(self.guard_mut());
		*self.guard_mut() = guard.and(Arc::new(predicate));
		self
	}

	/// Transform the carried values. Empty conditions stay empty.
	pub fn map<U, F>(self, f: F) -> Condition<U>
	where
		F: Fn(T) -> U,
	{
		match self {
			Self::NoValue(c) => Condition::NoValue(c),
			Self::Single(c) => Condition::Single(SingleValueCondition {
				operator: c.operator,
				value: c.value.map(&f),
				guard: c.guard,
			}),
			Self::Double(c) => Condition::Double(TwoValueCondition {
				operator: c.operator,
				values: c.values.map(|(first, second)| (f(first), f(second))),
				guard: c.guard,
			}),
			Self::List(c) => Condition::List(ListValueCondition {
				operator: c.operator,
				values: c.values.into_iter().map(f).collect(),
				guard: c.guard,
			}),
		}
	}

	/// Keep the carried values that satisfy `predicate`.
	///
	/// A single-value condition whose value fails becomes empty, as does a
	/// two-value condition where either value fails. List conditions drop the
	/// failing elements. No-value conditions are returned unchanged.
	#[must_use]
	pub fn filter<F>(self, predicate: F) -> Self
	where
		F: Fn(&T) -> bool,
	{
		match self {
			Self::NoValue(c) => Self::NoValue(c),
			Self::Single(mut c) => {
				c.value = c.value.filter(|v| predicate(v));
				Self::Single(c)
			}
			Self::Double(mut c) => {
				c.values = c.values.filter(|(first, second)| predicate(first) && predicate(second));
				Self::Double(c)
			}
			Self::List(mut c) => {
				c.values.retain(|v| predicate(v));
				Self::List(c)
			}
		}
	}

	/// Operator token, e.g. `=` or `between`.
	pub fn token(&self) -> &'static str {
		match self {
			Self::NoValue(c) => c.operator.token(),
			Self::Single(c) => c.operator.token(),
			Self::Double(c) => c.operator.token(),
			Self::List(c) => c.operator.token(),
		}
	}
}

/// Conversion into the value-erased condition a criterion stores.
pub trait IntoCondition {
	/// Convert every carried value into a [`Value`].
	fn into_condition(self) -> Condition<Value>;
}

impl<T: IntoValue> IntoCondition for Condition<T> {
	fn into_condition(self) -> Condition<Value> {
		self.map(IntoValue::into_value)
	}
}

#[cfg(test)]
mod tests;
