//! Where-clause methods shared by the select, update and delete builders.

use crate::condition::IntoCondition;
use crate::criterion::{Connector, CriteriaList, Criterion};
use crate::error::{ClauseKind, QueryResult, StatementKind};
use crate::types::BasicColumn;

/// A builder with a where clause.
///
/// Implementors only expose their criteria list; the clause methods come
/// with the trait.
pub trait ConditionalStatement: Sized {
	/// The statement being built, for error messages.
	fn statement_kind(&self) -> StatementKind;

	/// The where clause's criteria.
	fn where_criteria_mut(&mut self) -> &mut CriteriaList;

	/// Set the initial where criterion `column <condition>`.
	///
	/// # Errors
	///
	/// Returns [`QueryError::DuplicateInitialCriterion`](crate::error::QueryError::DuplicateInitialCriterion)
	/// when an initial criterion was already set.
	fn where_<C, K>(&mut self, column: C, condition: K) -> QueryResult<&mut Self>
	where
		C: Into<BasicColumn>,
		K: IntoCondition,
	{
		self.where_criterion(Criterion::of(column, condition))
	}

	/// Set the initial where criterion.
	///
	/// # Errors
	///
	/// Returns [`QueryError::DuplicateInitialCriterion`](crate::error::QueryError::DuplicateInitialCriterion)
	/// when an initial criterion was already set.
	fn where_criterion(&mut self, criterion: Criterion) -> QueryResult<&mut Self> {
		let statement = self.statement_kind();
		self.where_criteria_mut()
			.set_initial(criterion, statement, ClauseKind::Where)?;
		Ok(self)
	}

	/// Append `and column <condition>`.
	fn and_where<C, K>(&mut self, column: C, condition: K) -> &mut Self
	where
		C: Into<BasicColumn>,
		K: IntoCondition,
	{
		self.and_where_criterion(Criterion::of(column, condition))
	}

	/// Append `or column <condition>`.
	fn or_where<C, K>(&mut self, column: C, condition: K) -> &mut Self
	where
		C: Into<BasicColumn>,
		K: IntoCondition,
	{
		self.or_where_criterion(Criterion::of(column, condition))
	}

	/// Append `and <criterion>`.
	fn and_where_criterion(&mut self, criterion: Criterion) -> &mut Self {
		self.where_criteria_mut().push(Connector::And, criterion);
		self
	}

	/// Append `or <criterion>`.
	fn or_where_criterion(&mut self, criterion: Criterion) -> &mut Self {
		self.where_criteria_mut().push(Connector::Or, criterion);
		self
	}
}
