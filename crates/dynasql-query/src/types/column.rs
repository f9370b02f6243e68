//! Column descriptors.

use std::sync::Arc;

use super::jdbc_type::JdbcType;
use super::table::SqlTable;
use crate::render::{BindingTag, RenderingStrategy};

/// A column of a [`SqlTable`].
///
/// Columns are immutable. Every `with_*`/`as_*` method returns a new column
/// and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use dynasql_query::types::{JdbcType, SqlTable};
///
/// let person = SqlTable::new("person");
/// let first_name = person.column("first_name").with_jdbc_type(JdbcType::Varchar);
/// let projected = first_name.as_alias("fname");
///
/// assert_eq!(projected.alias(), Some("fname"));
/// assert_eq!(first_name.alias(), None);
/// ```
#[derive(Debug, Clone)]
pub struct SqlColumn {
	name: String,
	table: SqlTable,
	alias: Option<String>,
	jdbc_type: Option<JdbcType>,
	type_handler: Option<String>,
	strategy: Option<Arc<dyn RenderingStrategy>>,
	descending: bool,
}

impl SqlColumn {
	/// Create a column of `table`.
	pub fn new(name: impl Into<String>, table: &SqlTable) -> Self {
		Self {
			name: name.into(),
			table: table.clone(),
			alias: None,
			jdbc_type: None,
			type_handler: None,
			strategy: None,
			descending: false,
		}
	}

	/// Column name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Owning table.
	pub fn table(&self) -> &SqlTable {
		&self.table
	}

	/// Projection alias.
	pub fn alias(&self) -> Option<&str> {
		self.alias.as_deref()
	}

	/// Value-type tag.
	pub fn jdbc_type(&self) -> Option<JdbcType> {
		self.jdbc_type
	}

	/// Type handler named in annotated placeholders.
	pub fn type_handler(&self) -> Option<&str> {
		self.type_handler.as_deref()
	}

	/// Per-column placeholder strategy, if one overrides the statement's.
	pub fn rendering_strategy(&self) -> Option<&Arc<dyn RenderingStrategy>> {
		self.strategy.as_ref()
	}

	/// Whether this column sorts descending when used in an order by.
	pub fn is_descending(&self) -> bool {
		self.descending
	}

	/// The tag placeholders for values bound against this column carry.
	pub fn binding_tag(&self) -> BindingTag<'_> {
		BindingTag {
			jdbc_type: self.jdbc_type,
			type_handler: self.type_handler.as_deref(),
		}
	}

	/// Name used in an order by: the alias when there is one.
	pub fn order_by_name(&self) -> &str {
		self.alias.as_deref().unwrap_or(&self.name)
	}

	/// Same column with a projection alias.
	#[must_use]
	pub fn as_alias(&self, alias: impl Into<String>) -> Self {
		Self {
			alias: Some(alias.into()),
			..self.clone()
		}
	}

	/// Same column without its projection alias.
	#[must_use]
	pub fn without_alias(&self) -> Self {
		Self {
			alias: None,
			..self.clone()
		}
	}

	/// Same column tagged with a value type.
	#[must_use]
	pub fn with_jdbc_type(&self, jdbc_type: JdbcType) -> Self {
		Self {
			jdbc_type: Some(jdbc_type),
			..self.clone()
		}
	}

	/// Same column with a type handler.
	#[must_use]
	pub fn with_type_handler(&self, type_handler: impl Into<String>) -> Self {
		Self {
			type_handler: Some(type_handler.into()),
			..self.clone()
		}
	}

	/// Same column with its own placeholder strategy.
	///
	/// Values bound against this column use `strategy` no matter which
	/// strategy the statement is rendered with. Sequence numbers still come
	/// from the statement's shared counter.
	#[must_use]
	pub fn with_rendering_strategy(&self, strategy: Arc<dyn RenderingStrategy>) -> Self {
		Self {
			strategy: Some(strategy),
			..self.clone()
		}
	}

	/// Same column, sorted descending in an order by.
	#[must_use]
	pub fn descending(&self) -> Self {
		Self {
			descending: true,
			..self.clone()
		}
	}
}
