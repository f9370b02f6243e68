//! INSERT statement builder
//!
//! This module provides the `InsertStatement` builder and the `InsertModel`
//! it builds.

use super::mapping::{ColumnMapping, MappingValue};
use super::select::SelectModel;
use crate::error::{QueryError, QueryResult, StatementKind};
use crate::types::{SqlColumn, SqlTable};
use crate::value::IntoValue;

/// Where inserted rows come from.
#[derive(Debug, Clone)]
pub enum InsertSource {
	/// `(cols) values (...)`
	Values(Vec<ColumnMapping>),
	/// `(cols) select ...`
	Select {
		/// Target columns; empty means all columns in table order
		columns: Vec<SqlColumn>,
		/// Source rows
		select: Box<SelectModel>,
	},
}

/// A built insert.
#[derive(Debug, Clone)]
pub struct InsertModel {
	pub(crate) table: SqlTable,
	pub(crate) source: InsertSource,
}

impl InsertModel {
	/// Target table.
	pub fn table(&self) -> &SqlTable {
		&self.table
	}

	/// Row source.
	pub fn source(&self) -> &InsertSource {
		&self.source
	}
}

/// INSERT statement builder
///
/// # Examples
///
/// ```rust
/// use dynasql_query::prelude::*;
///
/// let person = SqlTable::new("person");
/// let id = person.column("id").with_jdbc_type(JdbcType::Integer);
/// let nickname = person.column("nickname");
/// let created = person.column("created_at");
///
/// let insert = Query::insert()
///     .into_table(&person)
///     .value(&id, 7)
///     .value_when_present(&nickname, None::<String>)
///     .constant(&created, "current_timestamp")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     insert.render(&AnnotatedStrategy::default()).statement(),
///     "insert into person (id, created_at) values (#{parameters.p1,jdbcType=INTEGER}, current_timestamp)"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct InsertStatement {
	table: Option<SqlTable>,
	mappings: Vec<ColumnMapping>,
	select: Option<(Vec<SqlColumn>, SelectModel)>,
}

impl InsertStatement {
	/// Create a new INSERT statement
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the target table.
	pub fn into_table(&mut self, table: &SqlTable) -> &mut Self {
		self.table = Some(table.clone());
		self
	}

	/// Add a mapping.
	pub fn mapping(&mut self, mapping: ColumnMapping) -> &mut Self {
		self.mappings.push(mapping);
		self
	}

	/// `column` receives a bound value.
	pub fn value<V>(&mut self, column: &SqlColumn, value: V) -> &mut Self
	where
		V: IntoValue,
	{
		self.mapping(ColumnMapping::new(column, MappingValue::Value(value.into_value())))
	}

	/// `column` receives a bound value; the column is left out when the value
	/// is absent.
	pub fn value_when_present<V>(&mut self, column: &SqlColumn, value: Option<V>) -> &mut Self
	where
		V: IntoValue,
	{
		self.mapping(ColumnMapping::new(
			column,
			MappingValue::ValueWhenPresent(value.map(IntoValue::into_value)),
		))
	}

	/// `column` receives `null`.
	pub fn null(&mut self, column: &SqlColumn) -> &mut Self {
		self.mapping(ColumnMapping::new(column, MappingValue::Null))
	}

	/// `column` receives a constant rendered verbatim.
	pub fn constant(&mut self, column: &SqlColumn, constant: impl Into<String>) -> &mut Self {
		self.mapping(ColumnMapping::new(column, MappingValue::Constant(constant.into())))
	}

	/// `column` receives a quoted string constant.
	pub fn string_constant(&mut self, column: &SqlColumn, constant: impl Into<String>) -> &mut Self {
		self.mapping(ColumnMapping::new(column, MappingValue::StringConstant(constant.into())))
	}

	/// Insert the rows of `select` into `columns`. Replaces any value
	/// mappings.
	pub fn select<I>(&mut self, columns: I, select: SelectModel) -> &mut Self
	where
		I: IntoIterator<Item = SqlColumn>,
	{
		self.select = Some((columns.into_iter().collect(), select));
		self
	}

	/// Build the model.
	///
	/// # Errors
	///
	/// Returns [`QueryError::MissingTable`] without a table and
	/// [`QueryError::MissingColumnMappings`] when no value mapping would
	/// render and no select was given.
	pub fn build(&self) -> QueryResult<InsertModel> {
		let table = self.table.clone().ok_or(QueryError::MissingTable {
			statement: StatementKind::Insert,
		})?;
		let source = match &self.select {
			Some((columns, select)) => InsertSource::Select {
				columns: columns.clone(),
				select: Box::new(select.clone()),
			},
			None => {
				if !self.mappings.iter().any(ColumnMapping::is_present) {
					return Err(QueryError::MissingColumnMappings {
						statement: StatementKind::Insert,
					});
				}
				InsertSource::Values(self.mappings.clone())
			}
		};
		Ok(InsertModel { table, source })
	}
}
