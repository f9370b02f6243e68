//! Join specifications.

use crate::condition::{Condition, IntoCondition};
use crate::criterion::Connector;
use crate::types::{SqlColumn, SqlTable};
use crate::value::{IntoValue, Value};

/// Join flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
	/// `join`
	Inner,
	/// `left join`
	Left,
	/// `right join`
	Right,
	/// `full join`
	Full,
}

impl JoinKind {
	/// SQL keyword.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Inner => "join",
			Self::Left => "left join",
			Self::Right => "right join",
			Self::Full => "full join",
		}
	}
}

/// Right-hand side of a join criterion.
#[derive(Debug, Clone)]
pub enum JoinCondition {
	/// `left = right` between two columns
	Column(SqlColumn),
	/// A value condition, bound like any where criterion
	Value(Condition<Value>),
}

impl<T: IntoValue> From<Condition<T>> for JoinCondition {
	fn from(condition: Condition<T>) -> Self {
		Self::Value(condition.into_condition())
	}
}

/// `left = right` for a join.
pub fn equal_to(column: &SqlColumn) -> JoinCondition {
	JoinCondition::Column(column.clone())
}

/// One criterion of a join's on clause.
#[derive(Debug, Clone)]
pub struct JoinCriterion {
	pub(crate) connector: Connector,
	pub(crate) column: SqlColumn,
	pub(crate) condition: JoinCondition,
}

/// Builder for a join's on clause.
///
/// ```rust
/// use dynasql_query::prelude::*;
///
/// let person = SqlTable::new("person").with_alias("p");
/// let address = SqlTable::new("address").with_alias("a");
///
/// let on = JoinOn::on(&address.column("person_id"), equal_to(&person.column("id")))
///     .and(&address.column("kind"), is_equal_to("home"));
/// assert_eq!(on.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct JoinOn {
	criteria: Vec<JoinCriterion>,
}

impl JoinOn {
	/// Start with `column <condition>`.
	pub fn on(column: &SqlColumn, condition: impl Into<JoinCondition>) -> Self {
		Self {
			criteria: vec![JoinCriterion {
				connector: Connector::And,
				column: column.clone(),
				condition: condition.into(),
			}],
		}
	}

	/// Append `and column <condition>`.
	#[must_use]
	pub fn and(mut self, column: &SqlColumn, condition: impl Into<JoinCondition>) -> Self {
		self.criteria.push(JoinCriterion {
			connector: Connector::And,
			column: column.clone(),
			condition: condition.into(),
		});
		self
	}

	/// Append `or column <condition>`.
	#[must_use]
	pub fn or(mut self, column: &SqlColumn, condition: impl Into<JoinCondition>) -> Self {
		self.criteria.push(JoinCriterion {
			connector: Connector::Or,
			column: column.clone(),
			condition: condition.into(),
		});
		self
	}

	/// Number of criteria.
	pub fn len(&self) -> usize {
		self.criteria.len()
	}

	/// Returns true when there is no criterion.
	pub fn is_empty(&self) -> bool {
		self.criteria.is_empty()
	}
}

/// A joined table and its on clause.
#[derive(Debug, Clone)]
pub struct JoinSpec {
	pub(crate) kind: JoinKind,
	pub(crate) table: SqlTable,
	pub(crate) criteria: Vec<JoinCriterion>,
}

impl JoinSpec {
	/// Create a join.
	pub fn new(kind: JoinKind, table: &SqlTable, on: JoinOn) -> Self {
		Self {
			kind,
			table: table.clone(),
			criteria: on.criteria,
		}
	}

	/// Join flavour.
	pub fn kind(&self) -> JoinKind {
		self.kind
	}

	/// Joined table.
	pub fn table(&self) -> &SqlTable {
		&self.table
	}

	/// Whether the on clause holds a column-to-column criterion. Those always
	/// render, so the join can never lose its on clause to elided value
	/// conditions.
	pub fn has_column_criterion(&self) -> bool {
		self.criteria
			.iter()
			.any(|criterion| matches!(criterion.condition, JoinCondition::Column(_)))
	}
}
