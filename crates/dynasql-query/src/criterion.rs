//! Criterion trees.
//!
//! A [`Criterion`] pairs a left-hand expression with a [`Condition`] and owns
//! an ordered list of [`CriteriaGroup`]s, each joined to what precedes it by a
//! [`Connector`]. Trees are built by value and never hold back references, so
//! a built tree can be rendered any number of times, from any thread.
//!
//! # Example
//!
//! ```rust
//! use dynasql_query::condition::{is_equal_to, is_like};
//! use dynasql_query::criterion::Criterion;
//! use dynasql_query::types::SqlTable;
//!
//! let person = SqlTable::new("person");
//! let id = person.column("id");
//! let name = person.column("name");
//!
//! // (id = ? or id = ?) and name like ?
//! let criterion = Criterion::group(Criterion::of(&id, is_equal_to(1)).or(&id, is_equal_to(2)))
//!     .and(&name, is_like("%x%"));
//! assert_eq!(criterion.sub_criteria().len(), 2);
//! ```

use crate::condition::{Condition, IntoCondition};
use crate::error::{ClauseKind, QueryError, QueryResult, StatementKind};
use crate::statement::SelectModel;
use crate::types::BasicColumn;
use crate::value::Value;

/// Keyword joining a criterion to its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
	/// `and`
	And,
	/// `or`
	Or,
}

impl Connector {
	/// SQL keyword.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::And => "and",
			Self::Or => "or",
		}
	}
}

/// What a criterion contributes on its own, before its sub-groups.
#[derive(Debug, Clone)]
pub enum CriterionKind {
	/// `<column> <condition>`
	ColumnAndCondition {
		/// Left-hand side
		column: BasicColumn,
		/// Value-erased condition
		condition: Condition<Value>,
	},
	/// `exists (<select>)`
	Exists(Box<SelectModel>),
	/// `not exists (<select>)`
	NotExists(Box<SelectModel>),
	/// `not (<criterion>)`
	Not(Box<Criterion>),
	/// Nothing of its own; only the sub-groups render.
	Group,
}

/// A node of a criterion tree.
#[derive(Debug, Clone)]
pub struct Criterion {
	kind: CriterionKind,
	sub_criteria: Vec<CriteriaGroup>,
}

impl Criterion {
	fn with_kind(kind: CriterionKind) -> Self {
		Self {
			kind,
			sub_criteria: Vec::new(),
		}
	}

	/// `column <condition>`
	pub fn of<C, K>(column: C, condition: K) -> Self
	where
		C: Into<BasicColumn>,
		K: IntoCondition,
	{
		Self::with_kind(CriterionKind::ColumnAndCondition {
			column: column.into(),
			condition: condition.into_condition(),
		})
	}

	/// `exists (<select>)`
	pub fn exists(select: SelectModel) -> Self {
		Self::with_kind(CriterionKind::Exists(Box::new(select)))
	}

	/// `not exists (<select>)`
	pub fn not_exists(select: SelectModel) -> Self {
		Self::with_kind(CriterionKind::NotExists(Box::new(select)))
	}

	/// `not (<criterion>)`
	pub fn not(criterion: Criterion) -> Self {
		Self::with_kind(CriterionKind::Not(Box::new(criterion)))
	}

	/// A group whose first member is `criterion`. Further members are added
	/// with [`and`](Self::and) and [`or`](Self::or).
	pub fn group(criterion: Criterion) -> Self {
		Self {
			kind: CriterionKind::Group,
			sub_criteria: vec![CriteriaGroup::new(Connector::And, criterion)],
		}
	}

	/// Append `and column <condition>`.
	#[must_use]
	pub fn and<C, K>(self, column: C, condition: K) -> Self
	where
		C: Into<BasicColumn>,
		K: IntoCondition,
	{
		self.and_criterion(Criterion::of(column, condition))
	}

	/// Append `or column <condition>`.
	#[must_use]
	pub fn or<C, K>(self, column: C, condition: K) -> Self
	where
		C: Into<BasicColumn>,
		K: IntoCondition,
	{
		self.or_criterion(Criterion::of(column, condition))
	}

	/// Append `and <criterion>`; the criterion is parenthesized when it
	/// renders more than one fragment.
	#[must_use]
	pub fn and_criterion(mut self, criterion: Criterion) -> Self {
		self.sub_criteria.push(CriteriaGroup::new(Connector::And, criterion));
		self
	}

	/// Append `or <criterion>`; the criterion is parenthesized when it
	/// renders more than one fragment.
	#[must_use]
	pub fn or_criterion(mut self, criterion: Criterion) -> Self {
		self.sub_criteria.push(CriteriaGroup::new(Connector::Or, criterion));
		self
	}

	/// The criterion's own contribution.
	pub fn kind(&self) -> &CriterionKind {
		&self.kind
	}

	/// Sub-groups in order.
	pub fn sub_criteria(&self) -> &[CriteriaGroup] {
		&self.sub_criteria
	}
}

/// A criterion together with the connector that joins it to its predecessor.
#[derive(Debug, Clone)]
pub struct CriteriaGroup {
	connector: Connector,
	criterion: Criterion,
}

impl CriteriaGroup {
	/// Create a group.
	pub fn new(connector: Connector, criterion: Criterion) -> Self {
		Self {
			connector,
			criterion,
		}
	}

	/// Connector to the predecessor.
	pub fn connector(&self) -> Connector {
		self.connector
	}

	/// The criterion.
	pub fn criterion(&self) -> &Criterion {
		&self.criterion
	}
}

/// The root criteria of a where or having clause.
///
/// The initial criterion never renders a connector. Groups added before an
/// initial criterion is set are allowed; whichever fragment renders first
/// drops its connector.
#[derive(Debug, Clone, Default)]
pub struct CriteriaList {
	initial: Option<Criterion>,
	groups: Vec<CriteriaGroup>,
}

impl CriteriaList {
	/// Create an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the initial criterion.
	///
	/// # Errors
	///
	/// Returns [`QueryError::DuplicateInitialCriterion`] when an initial
	/// criterion is already set.
	pub fn set_initial(
		&mut self,
		criterion: Criterion,
		statement: StatementKind,
		clause: ClauseKind,
	) -> QueryResult<()> {
		if self.initial.is_some() {
			return Err(QueryError::DuplicateInitialCriterion { statement, clause });
		}
		self.initial = Some(criterion);
		Ok(())
	}

	/// Append a criterion joined by `connector`.
	pub fn push(&mut self, connector: Connector, criterion: Criterion) {
		self.groups.push(CriteriaGroup::new(connector, criterion));
	}

	/// The initial criterion.
	pub fn initial(&self) -> Option<&Criterion> {
		self.initial.as_ref()
	}

	/// Groups after the initial criterion.
	pub fn groups(&self) -> &[CriteriaGroup] {
		&self.groups
	}

	/// Returns true when no criterion was added at all.
	pub fn is_empty(&self) -> bool {
		self.initial.is_none() && self.groups.is_empty()
	}
}
