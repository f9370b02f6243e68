//! DELETE statement builder
//!
//! This module provides the `DeleteStatement` builder and the `DeleteModel`
//! it builds.

use super::conditional::ConditionalStatement;
use crate::criterion::CriteriaList;
use crate::error::{QueryError, QueryResult, StatementKind};
use crate::types::{SortSpec, SqlTable};

/// A built delete.
#[derive(Debug, Clone)]
pub struct DeleteModel {
	pub(crate) table: SqlTable,
	pub(crate) where_criteria: CriteriaList,
	pub(crate) order_by: Vec<SortSpec>,
	pub(crate) limit: Option<u64>,
	pub(crate) all_rows: bool,
}

impl DeleteModel {
	/// Target table.
	pub fn table(&self) -> &SqlTable {
		&self.table
	}

	/// Where criteria.
	pub fn where_criteria(&self) -> &CriteriaList {
		&self.where_criteria
	}

	/// Whether the builder was marked with [`DeleteStatement::all_rows`].
	pub fn is_all_rows(&self) -> bool {
		self.all_rows
	}
}

/// DELETE statement builder
///
/// A delete without criteria is valid and removes every row. Marking it
/// with [`all_rows`](Self::all_rows) documents the intent at the call site
/// and silences the debug event emitted when such a statement is rendered.
///
/// # Examples
///
/// ```rust
/// use dynasql_query::prelude::*;
///
/// let person = SqlTable::new("person");
/// let delete = Query::delete().from_table(&person).all_rows().build().unwrap();
///
/// let rendered = delete.render(&PositionalStrategy);
/// assert_eq!(rendered.statement(), "delete from person");
/// assert!(rendered.parameters().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeleteStatement {
	table: Option<SqlTable>,
	where_criteria: CriteriaList,
	order_by: Vec<SortSpec>,
	limit: Option<u64>,
	all_rows: bool,
}

impl DeleteStatement {
	/// Create a new DELETE statement
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the table to delete from.
	pub fn from_table(&mut self, table: &SqlTable) -> &mut Self {
		self.table = Some(table.clone());
		self
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
	/// Returns [`QueryError::MissingTable`] without a table.
	pub fn build(&self) -> QueryResult<DeleteModel> {
		let table = self.table.clone().ok_or(QueryError::MissingTable {
			statement: StatementKind::Delete,
		})?;
		Ok(DeleteModel {
			table,
			where_criteria: self.where_criteria.clone(),
			order_by: self.order_by.clone(),
			limit: self.limit,
			all_rows: self.all_rows,
		})
	}
}

impl ConditionalStatement for DeleteStatement {
	fn statement_kind(&self) -> StatementKind {
		StatementKind::Delete
	}

	fn where_criteria_mut(&mut self) -> &mut CriteriaList {
		&mut self.where_criteria
	}
}
