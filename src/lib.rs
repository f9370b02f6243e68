//! # dynasql
//!
//! Typed SQL criterion trees rendered into parameterized statements.
//!
//! Build select, insert, update and delete statements from typed columns and
//! conditions, then render them for the placeholder dialect your driver
//! expects. Conditions with absent values drop out of the statement together
//! with their connector and any parentheses they no longer need.
//!
//! ## Feature Flags
//!
//! - `parallel` - Render sibling criteria groups on the rayon pool
//! - `with-chrono` - `chrono` date and time values
//! - `with-uuid` - `uuid` values
//! - `with-json` - `serde_json` values
//! - `full` - All of the above
//!
//! ## Quick Example
//!
//! ```rust
//! use dynasql::prelude::*;
//!
//! let person = SqlTable::new("person");
//! let id = person.column("id");
//!
//! let delete = Query::delete()
//!     .from_table(&person)
//!     .where_(&id, is_equal_to(1))
//!     .unwrap()
//!     .or_where(&id, is_equal_to(2))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     delete.render(&NamedStrategy).statement(),
//!     "delete from person where id = :p1 or id = :p2"
//! );
//! ```
//!
//! Render options can also come from a TOML file through
//! [`RenderSettings`](settings::RenderSettings).

pub use dynasql_query::{condition, criterion, error, render, settings, statement, types, value};

/// Prelude module for convenient imports.
pub mod prelude {
	pub use dynasql_query::prelude::*;
}

pub use prelude::*;
