//! Free functions that build conditions.
//!
//! Every value-taking builder has a `_when_present` twin taking `Option`s.
//! An absent value yields an empty condition, which never renders.

use super::{
	Condition, ListValueCondition, ListValueOperator, NoValueCondition, NoValueOperator,
	SingleValueCondition, SingleValueOperator, TwoValueCondition, TwoValueOperator,
};
use crate::error::QueryResult;
use crate::value::Value;

/// `column is null`
pub fn is_null() -> Condition<Value> {
	Condition::NoValue(NoValueCondition::new(NoValueOperator::IsNull))
}

/// `column is not null`
pub fn is_not_null() -> Condition<Value> {
	Condition::NoValue(NoValueCondition::new(NoValueOperator::IsNotNull))
}

macro_rules! single_value_builders {
	($name:ident, $when_present:ident, $operator:ident, $sql:literal) => {
		#[doc = concat!("`column ", $sql, " value`")]
		pub fn $name<T>(value: T) -> Condition<T> {
			Condition::Single(SingleValueCondition::new(
				SingleValueOperator::$operator,
				Some(value),
			))
		}

		#[doc = concat!("`column ", $sql, " value`, or nothing when `value` is `None`")]
		pub fn $when_present<T>(value: Option<T>) -> Condition<T> {
			Condition::Single(SingleValueCondition::new(SingleValueOperator::$operator, value))
		}
	};
}

single_value_builders!(is_equal_to, is_equal_to_when_present, EqualTo, "=");
single_value_builders!(is_not_equal_to, is_not_equal_to_when_present, NotEqualTo, "<>");
single_value_builders!(is_greater_than, is_greater_than_when_present, GreaterThan, ">");
single_value_builders!(
	is_greater_than_or_equal_to,
	is_greater_than_or_equal_to_when_present,
	GreaterThanOrEqualTo,
	">="
);
single_value_builders!(is_less_than, is_less_than_when_present, LessThan, "<");
single_value_builders!(
	is_less_than_or_equal_to,
	is_less_than_or_equal_to_when_present,
	LessThanOrEqualTo,
	"<="
);
single_value_builders!(is_like, is_like_when_present, Like, "like");
single_value_builders!(is_not_like, is_not_like_when_present, NotLike, "not like");
single_value_builders!(
	is_like_case_insensitive,
	is_like_case_insensitive_when_present,
	LikeCaseInsensitive,
	"like"
);
single_value_builders!(
	is_not_like_case_insensitive,
	is_not_like_case_insensitive_when_present,
	NotLikeCaseInsensitive,
	"not like"
);

fn two_values<T>(operator: TwoValueOperator, first: Option<T>, second: Option<T>) -> Condition<T> {
	Condition::Double(TwoValueCondition::new(operator, first.zip(second)))
}

/// `column between first and second`
pub fn is_between<T>(first: T, second: T) -> Condition<T> {
	two_values(TwoValueOperator::Between, Some(first), Some(second))
}

/// `column between first and second`, or nothing unless both are present
pub fn is_between_when_present<T>(first: Option<T>, second: Option<T>) -> Condition<T> {
	two_values(TwoValueOperator::Between, first, second)
}

/// `column not between first and second`
pub fn is_not_between<T>(first: T, second: T) -> Condition<T> {
	two_values(TwoValueOperator::NotBetween, Some(first), Some(second))
}

/// `column not between first and second`, or nothing unless both are present
pub fn is_not_between_when_present<T>(first: Option<T>, second: Option<T>) -> Condition<T> {
	two_values(TwoValueOperator::NotBetween, first, second)
}

/// `column between ? and ?` from a list that must hold exactly two values.
///
/// # Errors
///
/// Returns [`QueryError::InvalidArity`](crate::error::QueryError::InvalidArity)
/// for any other number of values.
pub fn between_from_list<T>(values: Vec<T>) -> QueryResult<Condition<T>> {
	TwoValueCondition::from_list(TwoValueOperator::Between, values).map(Condition::Double)
}

/// `column not between ? and ?` from a list that must hold exactly two values.
///
/// # Errors
///
/// Returns [`QueryError::InvalidArity`](crate::error::QueryError::InvalidArity)
/// for any other number of values.
pub fn not_between_from_list<T>(values: Vec<T>) -> QueryResult<Condition<T>> {
	TwoValueCondition::from_list(TwoValueOperator::NotBetween, values).map(Condition::Double)
}

fn list<T, I>(operator: ListValueOperator, values: I) -> Condition<T>
where
	I: IntoIterator<Item = T>,
{
	Condition::List(ListValueCondition::new(operator, values.into_iter().collect()))
}

/// `column in (...)`. An empty list renders nothing.
pub fn is_in<T, I>(values: I) -> Condition<T>
where
	I: IntoIterator<Item = T>,
{
	list(ListValueOperator::In, values)
}

/// `column in (...)` over the present values only.
pub fn is_in_when_present<T, I>(values: I) -> Condition<T>
where
	I: IntoIterator<Item = Option<T>>,
{
	list(ListValueOperator::In, values.into_iter().flatten())
}

/// `column not in (...)`. An empty list renders nothing.
pub fn is_not_in<T, I>(values: I) -> Condition<T>
where
	I: IntoIterator<Item = T>,
{
	list(ListValueOperator::NotIn, values)
}

/// `column not in (...)` over the present values only.
pub fn is_not_in_when_present<T, I>(values: I) -> Condition<T>
where
	I: IntoIterator<Item = Option<T>>,
{
	list(ListValueOperator::NotIn, values.into_iter().flatten())
}

/// `upper(column) in (...)` with upper-cased values.
pub fn is_in_case_insensitive<T, I>(values: I) -> Condition<T>
where
	I: IntoIterator<Item = T>,
{
	list(ListValueOperator::InCaseInsensitive, values)
}

/// `upper(column) not in (...)` with upper-cased values.
pub fn is_not_in_case_insensitive<T, I>(values: I) -> Condition<T>
where
	I: IntoIterator<Item = T>,
{
	list(ListValueOperator::NotInCaseInsensitive, values)
}
