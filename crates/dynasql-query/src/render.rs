//! Rendering of built statements into SQL text and bound parameters.
//!
//! - [`RenderingStrategy`]: placeholder dialect (`?`, `:p1`,
//!   `#{parameters.p1,jdbcType=INTEGER}`)
//! - [`RenderingContext`]: per-render sequence, aliases and deferred names
//! - [`RenderableStatement`]: the `render`/`render_with` entry points every
//!   model implements
//!
//! # Example
//!
//! ```rust
//! use dynasql_query::prelude::*;
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
//! let rendered = delete.render(&NamedStrategy);
//! assert_eq!(rendered.statement(), "delete from person where id = :p1 or id = :p2");
//! assert_eq!(rendered.parameters().len(), 2);
//! ```

mod column;
mod context;
mod criterion;
mod fragment;
mod statement;
mod strategy;
mod writer;

pub use context::{
	DeclaredAliases, NoAliases, RenderOptions, RenderingContext, TableAliasResolver, TableAliases,
};
pub use criterion::{render_criteria_list, render_criterion};
pub use fragment::{FragmentAndParameters, FragmentCollector, Parameters};
pub use statement::{RenderableStatement, RenderedStatement, render_sub_select};
pub use strategy::{
	AnnotatedStrategy, BindingTag, Dialect, NamedStrategy, PositionalStrategy, RenderingStrategy,
	parameter_key,
};
pub use writer::SqlWriter;
