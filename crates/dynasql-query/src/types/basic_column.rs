//! Column expressions used as projections and as the left-hand side of a
//! criterion.

use super::column::SqlColumn;
use crate::statement::SelectModel;

/// SQL functions that wrap a column expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlFunction {
	/// `upper(x)`
	Upper,
	/// `lower(x)`
	Lower,
	/// `count(x)`
	Count,
	/// `count(distinct x)`
	CountDistinct,
	/// `max(x)`
	Max,
	/// `min(x)`
	Min,
	/// `avg(x)`
	Avg,
	/// `sum(x)`
	Sum,
}

impl SqlFunction {
	/// Wrap an already rendered argument.
	#[must_use]
	pub fn apply(&self, argument: &str) -> String {
		match self {
			Self::Upper => format!("upper({})", argument),
			Self::Lower => format!("lower({})", argument),
			Self::Count => format!("count({})", argument),
			Self::CountDistinct => format!("count(distinct {})", argument),
			Self::Max => format!("max({})", argument),
			Self::Min => format!("min({})", argument),
			Self::Avg => format!("avg({})", argument),
			Self::Sum => format!("sum({})", argument),
		}
	}

	/// Whether the function's result has the type of its argument, so that
	/// values compared against it take the argument column's type tag.
	pub fn preserves_type(&self) -> bool {
		matches!(self, Self::Upper | Self::Lower | Self::Max | Self::Min)
	}
}

/// The expression part of a [`BasicColumn`].
#[derive(Debug, Clone)]
pub enum ColumnExpr {
	/// A table column
	Column(SqlColumn),
	/// A function applied to another expression
	Function(SqlFunction, Box<ColumnExpr>),
	/// `count(*)`
	CountAll,
	/// A constant rendered verbatim
	Constant(String),
	/// A string constant rendered quoted
	StringConstant(String),
	/// A nested select rendered in parentheses
	SubQuery(Box<SelectModel>),
}

impl ColumnExpr {
	/// The column whose type tag values compared against this expression carry.
	pub fn binding_column(&self) -> Option<&SqlColumn> {
		match self {
			Self::Column(column) => Some(column),
			Self::Function(function, inner) if function.preserves_type() => inner.binding_column(),
			_ => None,
		}
	}
}

/// A projection or left-hand side expression with an optional alias.
///
/// # Example
///
/// ```rust
/// use dynasql_query::types::{BasicColumn, SqlTable};
///
/// let person = SqlTable::new("person");
/// let id = person.column("id");
///
/// let total = BasicColumn::count(&id).as_alias("total");
/// assert_eq!(total.alias(), Some("total"));
/// ```
#[derive(Debug, Clone)]
pub struct BasicColumn {
	expr: ColumnExpr,
	alias: Option<String>,
}

impl BasicColumn {
	/// Wrap an expression without an alias.
	pub fn new(expr: ColumnExpr) -> Self {
		Self { expr, alias: None }
	}

	/// The expression.
	pub fn expr(&self) -> &ColumnExpr {
		&self.expr
	}

	/// Projection alias.
	pub fn alias(&self) -> Option<&str> {
		self.alias.as_deref()
	}

	/// Same expression with a projection alias.
	#[must_use]
	pub fn as_alias(mut self, alias: impl Into<String>) -> Self {
		self.alias = Some(alias.into());
		self
	}

	fn function(function: SqlFunction, column: impl Into<BasicColumn>) -> Self {
		Self::new(ColumnExpr::Function(function, Box::new(column.into().expr)))
	}

	/// `upper(column)`
	pub fn upper(column: impl Into<BasicColumn>) -> Self {
		Self::function(SqlFunction::Upper, column)
	}

	/// `lower(column)`
	pub fn lower(column: impl Into<BasicColumn>) -> Self {
		Self::function(SqlFunction::Lower, column)
	}

	/// `count(column)`
	pub fn count(column: impl Into<BasicColumn>) -> Self {
		Self::function(SqlFunction::Count, column)
	}

	/// `count(distinct column)`
	pub fn count_distinct(column: impl Into<BasicColumn>) -> Self {
		Self::function(SqlFunction::CountDistinct, column)
	}

	/// `max(column)`
	pub fn max(column: impl Into<BasicColumn>) -> Self {
		Self::function(SqlFunction::Max, column)
	}

	/// `min(column)`
	pub fn min(column: impl Into<BasicColumn>) -> Self {
		Self::function(SqlFunction::Min, column)
	}

	/// `avg(column)`
	pub fn avg(column: impl Into<BasicColumn>) -> Self {
		Self::function(SqlFunction::Avg, column)
	}

	/// `sum(column)`
	pub fn sum(column: impl Into<BasicColumn>) -> Self {
		Self::function(SqlFunction::Sum, column)
	}

	/// `count(*)`
	pub fn count_all() -> Self {
		Self::new(ColumnExpr::CountAll)
	}

	/// A constant rendered verbatim, e.g. `1` or `current_timestamp`.
	pub fn constant(value: impl Into<String>) -> Self {
		Self::new(ColumnExpr::Constant(value.into()))
	}

	/// A string constant rendered in single quotes.
	pub fn string_constant(value: impl Into<String>) -> Self {
		Self::new(ColumnExpr::StringConstant(value.into()))
	}

	/// A nested select, rendered in parentheses.
	pub fn sub_query(select: SelectModel) -> Self {
		Self::new(ColumnExpr::SubQuery(Box::new(select)))
	}
}

impl From<SqlColumn> for BasicColumn {
	fn from(column: SqlColumn) -> Self {
		let alias = column.alias().map(str::to_string);
		Self {
			expr: ColumnExpr::Column(column.without_alias()),
			alias,
		}
	}
}

impl From<&SqlColumn> for BasicColumn {
	fn from(column: &SqlColumn) -> Self {
		column.clone().into()
	}
}
