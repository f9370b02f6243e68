//! Table descriptors.
//!
//! A [`SqlTable`] is an immutable handle: clones share one [`TableId`], which
//! is what alias maps and the deferred-name cache key on. Two tables built
//! separately from the same name are distinct tables, which is how a self
//! join is expressed.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::column::SqlColumn;

static NEXT_TABLE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a constructed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(u64);

impl TableId {
	fn next() -> Self {
		Self(NEXT_TABLE_ID.fetch_add(1, Ordering::Relaxed))
	}
}

/// Runtime values handed to deferred table-name suppliers.
///
/// Passed to a render through [`RenderOptions`](crate::render::RenderOptions),
/// so a statement rendered for two tenants only differs in the environment
/// it is rendered with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableNameEnv {
	values: HashMap<String, String>,
}

impl TableNameEnv {
	/// Create an empty environment.
	pub fn new() -> Self {
		Self::default()
	}

	/// Add or replace an entry.
	#[must_use]
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.values.insert(key.into(), value.into());
		self
	}

	/// Insert an entry in place.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.values.insert(key.into(), value.into());
	}

	/// Look up an entry.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.values.get(key).map(String::as_str)
	}
}

impl From<HashMap<String, String>> for TableNameEnv {
	fn from(values: HashMap<String, String>) -> Self {
		Self { values }
	}
}

/// Resolves a table's name at render time.
pub type TableNameSupplier = Arc<dyn Fn(&TableNameEnv) -> String + Send + Sync>;

struct TableInner {
	id: TableId,
	name: String,
	alias: Option<String>,
	supplier: Option<TableNameSupplier>,
}

/// A table that columns and statements refer to.
///
/// # Example
///
/// ```rust
/// use dynasql_query::types::SqlTable;
///
/// let person = SqlTable::new("person");
/// let id = person.column("id");
/// assert_eq!(id.name(), "id");
/// assert_eq!(id.table().name(), "person");
/// ```
#[derive(Clone)]
pub struct SqlTable {
	inner: Arc<TableInner>,
}

impl SqlTable {
	/// Create a table with a fixed name.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			inner: Arc::new(TableInner {
				id: TableId::next(),
				name: name.into(),
				alias: None,
				supplier: None,
			}),
		}
	}

	/// Create a table whose rendered name is computed at render time.
	///
	/// `name` is the table's logical name: it is used when aliases are
	/// configured by name and when no render is in progress. The supplier is
	/// evaluated once per render with the render's [`TableNameEnv`].
	///
	/// ```rust
	/// use dynasql_query::types::SqlTable;
	///
	/// let orders = SqlTable::deferred("orders", |env| {
	///     format!("{}.orders", env.get("schema").unwrap_or("public"))
	/// });
	/// assert!(orders.is_deferred());
	/// ```
	pub fn deferred<F>(name: impl Into<String>, supplier: F) -> Self
	where
		F: Fn(&TableNameEnv) -> String + Send + Sync + 'static,
	{
		Self {
			inner: Arc::new(TableInner {
				id: TableId::next(),
				name: name.into(),
				alias: None,
				supplier: Some(Arc::new(supplier)),
			}),
		}
	}

	/// Return a copy of this table carrying a declared alias.
	///
	/// The copy keeps the table's identity, so columns created from either
	/// handle belong to the same table.
	#[must_use]
	pub fn with_alias(&self, alias: impl Into<String>) -> Self {
		Self {
			inner: Arc::new(TableInner {
				id: self.inner.id,
				name: self.inner.name.clone(),
				alias: Some(alias.into()),
				supplier: self.inner.supplier.clone(),
			}),
		}
	}

	/// Create a column belonging to this table.
	pub fn column(&self, name: impl Into<String>) -> SqlColumn {
		SqlColumn::new(name, self)
	}

	/// Identity of this table.
	pub fn id(&self) -> TableId {
		self.inner.id
	}

	/// Logical table name.
	pub fn name(&self) -> &str {
		&self.inner.name
	}

	/// Alias declared at definition time.
	pub fn alias(&self) -> Option<&str> {
		self.inner.alias.as_deref()
	}

	/// Returns true when the rendered name is supplied at render time.
	pub fn is_deferred(&self) -> bool {
		self.inner.supplier.is_some()
	}

	/// Compute the name to render for the given environment.
	///
	/// Render code goes through the render context, which caches the result
	/// so that a supplier runs once per render.
	pub fn resolve_name(&self, env: &TableNameEnv) -> String {
		match &self.inner.supplier {
			Some(supplier) => supplier(env),
			None => self.inner.name.clone(),
		}
	}
}

impl fmt::Debug for SqlTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SqlTable")
			.field("id", &self.inner.id)
			.field("name", &self.inner.name)
			.field("alias", &self.inner.alias)
			.field("deferred", &self.inner.supplier.is_some())
			.finish()
	}
}

impl PartialEq for SqlTable {
	fn eq(&self, other: &Self) -> bool {
		self.inner.id == other.inner.id && self.inner.alias == other.inner.alias
	}
}
