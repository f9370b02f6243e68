//! Statement builders and the immutable models they build.
//!
//! - Query Select: [`SelectStatement`] builds a [`SelectModel`]
//! - Query Insert: [`InsertStatement`] builds an [`InsertModel`]
//! - Query Update: [`UpdateStatement`] builds an [`UpdateModel`]
//! - Query Delete: [`DeleteStatement`] builds a [`DeleteModel`]
//!
//! Builders are mutated in place and may be reused. `build()` validates the
//! builder and returns a fresh model; models are rendered through
//! [`RenderableStatement`](crate::render::RenderableStatement).
//!
//! # Examples
//!
//! ```rust
//! use dynasql_query::prelude::*;
//!
//! let person = SqlTable::new("person");
//! let id = person.column("id");
//! let first_name = person.column("first_name");
//!
//! let select = Query::select()
//!     .columns([&id, &first_name])
//!     .from(&person)
//!     .where_(&id, is_greater_than(100))
//!     .unwrap()
//!     .order_by([&first_name])
//!     .limit(10)
//!     .build()
//!     .unwrap();
//!
//! let update = Query::update()
//!     .table(&person)
//!     .set(&first_name, "Fred")
//!     .where_(&id, is_equal_to(3))
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     select.render(&PositionalStrategy).statement(),
//!     "select id, first_name from person where id > ? order by first_name limit ?"
//! );
//! assert_eq!(
//!     update.render(&PositionalStrategy).statement(),
//!     "update person set first_name = ? where id = ?"
//! );
//! ```

mod conditional;
mod delete;
mod insert;
mod join;
mod mapping;
mod select;
mod update;

pub use conditional::ConditionalStatement;
pub use delete::{DeleteModel, DeleteStatement};
pub use insert::{InsertModel, InsertSource, InsertStatement};
pub use join::{JoinCondition, JoinCriterion, JoinKind, JoinOn, JoinSpec, equal_to};
pub use mapping::{ColumnMapping, MappingValue};
pub use select::{
	LockMode, LockWait, Locking, Paging, SelectModel, SelectStatement, UnionKind, UnionSpec,
};
pub use update::{UpdateModel, UpdateStatement};

/// Entry point for the statement builders.
#[derive(Debug, Clone, Copy)]
pub struct Query;

impl Query {
	/// Start a select statement.
	pub fn select() -> SelectStatement {
		SelectStatement::new()
	}

	/// Start an insert statement.
	pub fn insert() -> InsertStatement {
		InsertStatement::new()
	}

	/// Start an update statement.
	pub fn update() -> UpdateStatement {
		UpdateStatement::new()
	}

	/// Start a delete statement.
	pub fn delete() -> DeleteStatement {
		DeleteStatement::new()
	}
}
