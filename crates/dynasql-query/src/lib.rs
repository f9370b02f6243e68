//! # dynasql-query
//!
//! Typed criterion trees and parameterized statement rendering.
//!
//! Statements are assembled from typed columns and condition values, then
//! rendered into SQL text plus a map of bound parameters. Conditions whose
//! value is absent, or whose render predicate says no, disappear from the
//! output together with their connector and any parentheses they would have
//! needed.
//!
//! ## Features
//!
//! - **Condition algebra** - no-value, single-value, two-value and list
//!   conditions with `map`, `filter` and `when` transforms
//! - **Criterion trees** - AND/OR groups, `not`, `exists`, minimal
//!   parentheses
//! - **Global parameter sequence** - `p1..pN` unique and contiguous across
//!   sub-selects in one render
//! - **Dialects** - `?`, `:p1`, `#{parameters.p1,jdbcType=INTEGER}`
//! - **Table aliases and deferred names** - resolved per render
//! - **Statements** - select (joins, group by, having, unions, paging,
//!   locking), insert, update, delete
//!
//! ## Architecture
//!
//! - [`value`]: bound values
//! - [`types`]: tables, columns, select items and sort specs
//! - [`condition`]: condition shapes and builder functions
//! - [`criterion`]: criterion trees
//! - [`statement`]: statement builders and built models
//! - [`render`]: rendering strategies, context and renderers
//! - [`settings`]: TOML-loadable render options
//!
//! ## Quick Start
//!
//! ```rust
//! use dynasql_query::prelude::*;
//!
//! let person = SqlTable::new("person");
//! let id = person.column("id");
//! let name = person.column("name");
//!
//! let select = Query::select()
//!     .columns([&id, &name])
//!     .from(&person)
//!     .where_criterion(
//!         Criterion::of(&id, is_equal_to(1)).or(&id, is_equal_to(2)),
//!     )
//!     .unwrap()
//!     .and_where(&name, is_like("%x%"))
//!     .build()
//!     .unwrap();
//!
//! let rendered = select.render(&PositionalStrategy);
//! assert_eq!(
//!     rendered.statement(),
//!     "select id, name from person where (id = ? or id = ?) and name like ?"
//! );
//! assert_eq!(
//!     rendered.values(),
//!     Values(vec![Value::from(1), Value::from(2), Value::from("%x%")])
//! );
//! ```
//!
//! ## Optional features
//!
//! - `parallel`: render sibling criteria groups with rayon
//! - `with-chrono`, `with-uuid`, `with-json`: extra [`Value`] variants

// Core modules
pub mod error;
pub mod types;
pub mod value;

// Conditions and criteria
pub mod condition;
pub mod criterion;

// Statement builders
pub mod statement;

// Rendering
pub mod render;
pub mod settings;

/// Prelude module for convenient imports.
///
/// ```rust
/// use dynasql_query::prelude::*;
/// ```
pub mod prelude {
	// Conditions
	pub use crate::condition::*;
	pub use crate::criterion::{CriteriaGroup, CriteriaList, Criterion, Connector};
	// Errors
	pub use crate::error::{ClauseKind, QueryError, QueryResult, StatementKind};
	// Rendering
	pub use crate::render::{
		AnnotatedStrategy, BindingTag, Dialect, NamedStrategy, Parameters, PositionalStrategy,
		RenderOptions, RenderableStatement, RenderedStatement, RenderingStrategy,
		TableAliasResolver, TableAliases,
	};
	pub use crate::settings::RenderSettings;
	// Statements
	pub use crate::statement::{
		ConditionalStatement, DeleteModel, DeleteStatement, InsertModel, InsertStatement,
		JoinKind, JoinOn, Query, SelectModel, SelectStatement, UpdateModel, UpdateStatement,
		equal_to,
	};
	// Type system
	pub use crate::types::{
		BasicColumn, JdbcType, SortSpec, SqlColumn, SqlFunction, SqlTable, TableNameEnv,
	};
	// Value system
	pub use crate::value::{IntoValue, Value, Values};
}

// Re-export commonly used types at crate root
pub use prelude::*;
