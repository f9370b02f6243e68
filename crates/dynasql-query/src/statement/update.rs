//! UPDATE statement builder
//!
//! This module provides the `UpdateStatement` builder and the `UpdateModel`
//! it builds.

use super::conditional::ConditionalStatement;
use super::mapping::{ColumnMapping, MappingValue};
use super::select::SelectModel;
use crate::criterion::CriteriaList;
use crate::error::{QueryError, QueryResult, StatementKind};
use crate::types::{SortSpec, SqlColumn, SqlTable};
use crate::value::IntoValue;

/// A built update.
#[derive(Debug, Clone)]
pub struct UpdateModel {
	pub(crate) table: SqlTable,
	pub(crate) mappings: Vec<ColumnMapping>,
	pub(crate) where_criteria: CriteriaList,
	pub(crate) order_by: Vec<SortSpec>,
	pub(crate) limit: Option<u64>,
	pub(crate) all_rows: bool,
}

impl UpdateModel {
	/// Target table.
	pub fn table(&self) -> &SqlTable {
		&self.table
	}

	/// Set clause mappings.
	pub fn mappings(&self) -> &[ColumnMapping] {
		&self.mappings
	}

	/// Where criteria.
	pub fn where_criteria(&self) -> &CriteriaList {
		&self.where_criteria
	}

	/// Whether the builder was marked with [`UpdateStatement::all_rows`].
	pub fn is_all_rows(&self) -> bool {
		self.all_rows
	}
}

/// UPDATE statement builder
///
/// # Examples
///
/// ```rust
/// use dynasql_query::prelude::*;
///
/// let person = SqlTable::new("person");
/// let id = person.column("id");
/// let score = person.column("score");
/// let best = person.column("best_score");
///
/// let update = Query::update()
///     .table(&person)
///     .set(&score, 10)
///     .set_to_column(&best, &score)
///     .set_null(&person.column("note"))
///     .where_(&id, is_in([1, 2]))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     update.render(&NamedStrategy).statement(),
///     "update person set score = :p1, best_score = score, note = null where id in (:p2,:p3)"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct UpdateStatement {
	table: Option<SqlTable>,
	mappings: Vec<ColumnMapping>,
	where_criteria: CriteriaList,
	order_by: Vec<SortSpec>,
	limit: Option<u64>,
	all_rows: bool,
}

impl UpdateStatement {
	/// Create a new UPDATE statement
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the table to update.
	pub fn table(&mut self, table: &SqlTable) -> &mut Self {
		self.table = Some(table.clone());
		self
	}

	/// Add a mapping.
	pub fn mapping(&mut self, mapping: ColumnMapping) -> &mut Self {
		self.mappings.push(mapping);
		self
	}

	/// `column = ?`
	pub fn set<V>(&mut self, column: &SqlColumn, value: V) -> &mut Self
	where
		V: IntoValue,
	{
		self.mapping(ColumnMapping::new(column, MappingValue::Value(value.into_value())))
	}

	/// `column = ?`, skipped when the value is absent.
	pub fn set_when_present<V>(&mut self, column: &SqlColumn, value: Option<V>) -> &mut Self
	where
		V: IntoValue,
	{
		self.mapping(ColumnMapping::new(
			column,
			MappingValue::ValueWhenPresent(value.map(IntoValue::into_value)),
		))
	}

	/// `column = null`
	pub fn set_null(&mut self, column: &SqlColumn) -> &mut Self {
		self.mapping(ColumnMapping::new(column, MappingValue::Null))
	}

	/// `column = <constant>`
	pub fn set_constant(&mut self, column: &SqlColumn, constant: impl Into<String>) -> &mut Self {
		self.mapping(ColumnMapping::new(column, MappingValue::Constant(constant.into())))
	}

	/// `column = '<constant>'`
	pub fn set_string_constant(&mut self, column: &SqlColumn, constant: impl Into<String>) -> &mut Self {
		self.mapping(ColumnMapping::new(column, MappingValue::StringConstant(constant.into())))
	}

	/// `column = other`
	pub fn set_to_column(&mut self, column: &SqlColumn, other: &SqlColumn) -> &mut Self {
		self.mapping(ColumnMapping::new(column, MappingValue::Column(other.clone())))
	}

	/// `column = (select ...)`
	pub fn set_to_select(&mut self, column: &SqlColumn, select: SelectModel) -> &mut Self {
		self.mapping(ColumnMapping::new(column, MappingValue::SubQuery(Box::new(select))))
	}

	/// Mark the statement as intentionally affecting every row.
	pub fn all_rows(&mut self) -> &mut Self {
		self.all_rows = true;
		self
	}

	/// `order by` items.
	pub fn order_by<I, S>(&mut self, specs: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<SortSpec>,
	{
		self.order_by.extend(specs.into_iter().map(Into::into));
		self
	}

	/// `limit ?`
	pub fn limit(&mut self, rows: u64) -> &mut Self {
		self.limit = Some(rows);
		self
	}

	/// Build the model.
	///
	/// # Errors
	///
	/// Returns [`QueryError::MissingTable`] without a table and
	/// [`QueryError::MissingColumnMappings`] when no mapping would render.
	pub fn build(&self) -> QueryResult<UpdateModel> {
		let table = self.table.clone().ok_or(QueryError::MissingTable {
			statement: StatementKind::Update,
		})?;
		if !self.mappings.iter().any(ColumnMapping::is_present) {
			return Err(QueryError::MissingColumnMappings {
				statement: StatementKind::Update,
			});
		}
		Ok(UpdateModel {
			table,
			mappings: self.mappings.clone(),
			where_criteria: self.where_criteria.clone(),
			order_by: self.order_by.clone(),
			limit: self.limit,
			all_rows: self.all_rows,
		})
	}
}

impl ConditionalStatement for UpdateStatement {
	fn statement_kind(&self) -> StatementKind {
		StatementKind::Update
	}

	fn where_criteria_mut(&mut self) -> &mut CriteriaList {
		&mut self.where_criteria
	}
}
