//! SELECT statement builder
//!
//! This module provides the `SelectStatement` builder and the `SelectModel`
//! it builds.

use super::conditional::ConditionalStatement;
use super::join::{JoinKind, JoinOn, JoinSpec};
use crate::condition::IntoCondition;
use crate::criterion::{Connector, CriteriaList, Criterion};
use crate::error::{ClauseKind, QueryError, QueryResult, StatementKind};
use crate::types::{BasicColumn, SortSpec, SqlTable};

/// Row-count restrictions.
///
/// When `fetch_first` is set the statement renders
/// `offset ? rows fetch first ? rows only`, otherwise `limit ? offset ?`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paging {
	pub(crate) limit: Option<u64>,
	pub(crate) offset: Option<u64>,
	pub(crate) fetch_first: Option<u64>,
}

/// Row lock strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockMode {
	/// `for update`
	Update,
	/// `for no key update`
	NoKeyUpdate,
	/// `for share`
	Share,
	/// `for key share`
	KeyShare,
}

impl LockMode {
	/// SQL suffix.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Update => "for update",
			Self::NoKeyUpdate => "for no key update",
			Self::Share => "for share",
			Self::KeyShare => "for key share",
		}
	}
}

/// Behaviour on a locked row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockWait {
	/// `nowait`
	NoWait,
	/// `skip locked`
	SkipLocked,
}

impl LockWait {
	/// SQL suffix.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::NoWait => "nowait",
			Self::SkipLocked => "skip locked",
		}
	}
}

/// Locking suffix of a select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locking {
	pub(crate) mode: LockMode,
	pub(crate) wait: Option<LockWait>,
}

/// Union flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnionKind {
	/// `union`
	Distinct,
	/// `union all`
	All,
}

impl UnionKind {
	/// SQL keyword.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Distinct => "union",
			Self::All => "union all",
		}
	}
}

/// A select appended with `union` or `union all`.
#[derive(Debug, Clone)]
pub struct UnionSpec {
	pub(crate) kind: UnionKind,
	pub(crate) select: SelectModel,
}

/// A built select.
#[derive(Debug, Clone)]
pub struct SelectModel {
	pub(crate) distinct: bool,
	pub(crate) columns: Vec<BasicColumn>,
	pub(crate) table: SqlTable,
	pub(crate) joins: Vec<JoinSpec>,
	pub(crate) where_criteria: CriteriaList,
	pub(crate) group_by: Vec<BasicColumn>,
	pub(crate) having: CriteriaList,
	pub(crate) unions: Vec<UnionSpec>,
	pub(crate) order_by: Vec<SortSpec>,
	pub(crate) paging: Paging,
	pub(crate) locking: Option<Locking>,
}

impl SelectModel {
	/// The table selected from.
	pub fn table(&self) -> &SqlTable {
		&self.table
	}

	/// Projection.
	pub fn columns(&self) -> &[BasicColumn] {
		&self.columns
	}

	/// Where criteria.
	pub fn where_criteria(&self) -> &CriteriaList {
		&self.where_criteria
	}
}

/// SELECT statement builder
///
/// # Examples
///
/// ```rust
/// use dynasql_query::prelude::*;
///
/// let person = SqlTable::new("person").with_alias("p");
/// let address = SqlTable::new("address").with_alias("a");
/// let id = person.column("id");
/// let person_id = address.column("person_id");
///
/// let select = Query::select()
///     .columns([&id, &address.column("city")])
///     .from(&person)
///     .left_join(&address, JoinOn::on(&person_id, equal_to(&id)))
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     select.render(&PositionalStrategy).statement(),
///     "select p.id, a.city from person p left join address a on a.person_id = p.id"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectStatement {
	distinct: bool,
	columns: Vec<BasicColumn>,
	table: Option<SqlTable>,
	joins: Vec<JoinSpec>,
	where_criteria: CriteriaList,
	group_by: Vec<BasicColumn>,
	having: CriteriaList,
	unions: Vec<UnionSpec>,
	order_by: Vec<SortSpec>,
	paging: Paging,
	locking: Option<Locking>,
}

impl SelectStatement {
	/// Create a new SELECT statement
	pub fn new() -> Self {
		Self::default()
	}

	/// Add one select item.
	pub fn column<C>(&mut self, column: C) -> &mut Self
	where
		C: Into<BasicColumn>,
	{
		self.columns.push(column.into());
		self
	}

	/// Add select items.
	pub fn columns<I, C>(&mut self, columns: I) -> &mut Self
	where
		I: IntoIterator<Item = C>,
		C: Into<BasicColumn>,
	{
		self.columns.extend(columns.into_iter().map(Into::into));
		self
	}

	/// `select distinct`
	pub fn distinct(&mut self) -> &mut Self {
		self.distinct = true;
		self
	}

	/// Set the table to select from.
	pub fn from(&mut self, table: &SqlTable) -> &mut Self {
		self.table = Some(table.clone());
		self
	}

	/// Add a join.
	pub fn join_with(&mut self, kind: JoinKind, table: &SqlTable, on: JoinOn) -> &mut Self {
		self.joins.push(JoinSpec::new(kind, table, on));
		self
	}

	/// `join table on ...`
	pub fn join(&mut self, table: &SqlTable, on: JoinOn) -> &mut Self {
		self.join_with(JoinKind::Inner, table, on)
	}

	/// `left join table on ...`
	pub fn left_join(&mut self, table: &SqlTable, on: JoinOn) -> &mut Self {
		self.join_with(JoinKind::Left, table, on)
	}

	/// `right join table on ...`
	pub fn right_join(&mut self, table: &SqlTable, on: JoinOn) -> &mut Self {
		self.join_with(JoinKind::Right, table, on)
	}

	/// `full join table on ...`
	pub fn full_join(&mut self, table: &SqlTable, on: JoinOn) -> &mut Self {
		self.join_with(JoinKind::Full, table, on)
	}

	/// `group by` items.
	pub fn group_by<I, C>(&mut self, columns: I) -> &mut Self
	where
		I: IntoIterator<Item = C>,
		C: Into<BasicColumn>,
	{
		self.group_by.extend(columns.into_iter().map(Into::into));
		self
	}

	/// Set the initial having criterion `column <condition>`.
	///
	/// # Errors
	///
	/// Returns [`QueryError::DuplicateInitialCriterion`] when an initial
	/// having criterion was already set.
	pub fn having<C, K>(&mut self, column: C, condition: K) -> QueryResult<&mut Self>
	where
		C: Into<BasicColumn>,
		K: IntoCondition,
	{
		self.having
			.set_initial(Criterion::of(column, condition), StatementKind::Select, ClauseKind::Having)?;
		Ok(self)
	}

	/// Append `and column <condition>` to the having clause.
	pub fn and_having<C, K>(&mut self, column: C, condition: K) -> &mut Self
	where
		C: Into<BasicColumn>,
		K: IntoCondition,
	{
		self.having.push(Connector::And, Criterion::of(column, condition));
		self
	}

	/// Append `or column <condition>` to the having clause.
	pub fn or_having<C, K>(&mut self, column: C, condition: K) -> &mut Self
	where
		C: Into<BasicColumn>,
		K: IntoCondition,
	{
		self.having.push(Connector::Or, Criterion::of(column, condition));
		self
	}

	/// `union <select>`
	pub fn union(&mut self, select: SelectModel) -> &mut Self {
		self.unions.push(UnionSpec {
			kind: UnionKind::Distinct,
			select,
		});
		self
	}

	/// `union all <select>`
	pub fn union_all(&mut self, select: SelectModel) -> &mut Self {
		self.unions.push(UnionSpec {
			kind: UnionKind::All,
			select,
		});
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
		self.paging.limit = Some(rows);
		self
	}

	/// `offset ?`, or `offset ? rows` with [`fetch_first`](Self::fetch_first).
	pub fn offset(&mut self, rows: u64) -> &mut Self {
		self.paging.offset = Some(rows);
		self
	}

	/// `fetch first ? rows only`. Takes precedence over [`limit`](Self::limit).
	pub fn fetch_first(&mut self, rows: u64) -> &mut Self {
		self.paging.fetch_first = Some(rows);
		self
	}

	/// Set a locking suffix.
	pub fn lock(&mut self, mode: LockMode) -> &mut Self {
		self.locking = Some(Locking { mode, wait: None });
		self
	}

	/// `for update`
	pub fn for_update(&mut self) -> &mut Self {
		self.lock(LockMode::Update)
	}

	/// `for share`
	pub fn for_share(&mut self) -> &mut Self {
		self.lock(LockMode::Share)
	}

	/// Append `nowait` to the locking suffix. Ignored without one.
	pub fn nowait(&mut self) -> &mut Self {
		if let Some(locking) = &mut self.locking {
			locking.wait = Some(LockWait::NoWait);
		}
		self
	}

	/// Append `skip locked` to the locking suffix. Ignored without one.
	pub fn skip_locked(&mut self) -> &mut Self {
		if let Some(locking) = &mut self.locking {
			locking.wait = Some(LockWait::SkipLocked);
		}
		self
	}

	/// Build the model.
	///
	/// # Errors
	///
	/// Returns [`QueryError::MissingTable`] without a from table,
	/// [`QueryError::MissingSelectList`] without select items and
	/// [`QueryError::MissingJoinColumnCriterion`] for a join whose on clause
	/// holds only value conditions.
	pub fn build(&self) -> QueryResult<SelectModel> {
		let table = self.table.clone().ok_or(QueryError::MissingTable {
			statement: StatementKind::Select,
		})?;
		if self.columns.is_empty() {
			return Err(QueryError::MissingSelectList);
		}
		if let Some(join) = self.joins.iter().find(|join| !join.has_column_criterion()) {
			return Err(QueryError::MissingJoinColumnCriterion {
				table: join.table().name().to_string(),
			});
		}
		Ok(SelectModel {
			distinct: self.distinct,
			columns: self.columns.clone(),
			table,
			joins: self.joins.clone(),
			where_criteria: self.where_criteria.clone(),
			group_by: self.group_by.clone(),
			having: self.having.clone(),
			unions: self.unions.clone(),
			order_by: self.order_by.clone(),
			paging: self.paging,
			locking: self.locking,
		})
	}
}

impl ConditionalStatement for SelectStatement {
	fn statement_kind(&self) -> StatementKind {
		StatementKind::Select
	}

	fn where_criteria_mut(&mut self) -> &mut CriteriaList {
		&mut self.where_criteria
	}
}
