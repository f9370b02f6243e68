//! Per-render state.
//!
//! One [`RenderingContext`] exists per render call. It owns the parameter
//! sequence shared by every clause of the statement, resolves table aliases,
//! and caches deferred table names so that each supplier runs once per render.
//! Nothing in it is stored on the model, which is why a model can be rendered
//! repeatedly and concurrently.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::fragment::Parameters;
use super::strategy::{AnnotatedStrategy, Dialect, NamedStrategy, RenderingStrategy};
use crate::types::{SqlColumn, SqlTable, TableId, TableNameEnv};
use crate::value::Value;

/// Maps tables to the alias their columns are qualified with.
pub trait TableAliasResolver: fmt::Debug + Send + Sync {
	/// Alias for `table`, or `None` to render its columns unqualified.
	fn alias_for(&self, table: &SqlTable) -> Option<String>;
}

/// An explicit alias map.
///
/// Entries keyed by table identity win over entries keyed by table name, so
/// the two sides of a self join can be told apart.
///
/// # Example
///
/// ```rust
/// use dynasql_query::render::{TableAliasResolver, TableAliases};
/// use dynasql_query::types::SqlTable;
///
/// let person = SqlTable::new("person");
/// let aliases = TableAliases::new().with_name("person", "a");
/// assert_eq!(aliases.alias_for(&person).as_deref(), Some("a"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableAliases {
	by_id: HashMap<TableId, String>,
	by_name: HashMap<String, String>,
}

impl TableAliases {
	/// Create an empty map. Rendering with it disables aliasing.
	pub fn new() -> Self {
		Self::default()
	}

	/// Alias a specific table.
	#[must_use]
	pub fn with_table(mut self, table: &SqlTable, alias: impl Into<String>) -> Self {
		self.insert_table(table, alias);
		self
	}

	/// Alias every table with the given name.
	#[must_use]
	pub fn with_name(mut self, name: impl Into<String>, alias: impl Into<String>) -> Self {
		self.insert_name(name, alias);
		self
	}

	/// Alias a specific table in place.
	pub fn insert_table(&mut self, table: &SqlTable, alias: impl Into<String>) {
		self.by_id.insert(table.id(), alias.into());
	}

	/// Alias every table with the given name, in place.
	pub fn insert_name(&mut self, name: impl Into<String>, alias: impl Into<String>) {
		self.by_name.insert(name.into(), alias.into());
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.by_id.len() + self.by_name.len()
	}

	/// Returns true when the map has no entry.
	pub fn is_empty(&self) -> bool {
		self.by_id.is_empty() && self.by_name.is_empty()
	}
}

impl TableAliasResolver for TableAliases {
	fn alias_for(&self, table: &SqlTable) -> Option<String> {
		self.by_id
			.get(&table.id())
			.or_else(|| self.by_name.get(table.name()))
			.cloned()
	}
}

/// Never aliases.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAliases;

impl TableAliasResolver for NoAliases {
	fn alias_for(&self, _table: &SqlTable) -> Option<String> {
		None
	}
}

/// Aliases declared on the tables a statement reads from.
///
/// Built from the statement's from and join tables. A column whose table
/// handle was not aliased still picks up the alias of the statement table it
/// shares an identity with; a table the statement does not list falls back
/// to its own declared alias.
#[derive(Debug, Clone, Default)]
pub struct DeclaredAliases {
	statement: TableAliases,
}

impl DeclaredAliases {
	/// Collect the declared aliases of `tables`.
	pub fn from_tables<'t, I>(tables: I) -> Self
	where
		I: IntoIterator<Item = &'t SqlTable>,
	{
		let mut statement = TableAliases::new();
		for table in tables {
			if let Some(alias) = table.alias() {
				statement.insert_table(table, alias);
			}
		}
		Self { statement }
	}
}

impl TableAliasResolver for DeclaredAliases {
	fn alias_for(&self, table: &SqlTable) -> Option<String> {
		self.statement
			.by_id
			.get(&table.id())
			.cloned()
			.or_else(|| table.alias().map(str::to_string))
	}
}

/// Caller-side choices for one render.
///
/// # Example
///
/// ```rust
/// use dynasql_query::render::{Dialect, RenderOptions, TableAliases};
/// use dynasql_query::types::TableNameEnv;
///
/// let options = RenderOptions::for_dialect(Dialect::Positional)
///     .with_aliases(TableAliases::new().with_name("person", "p"))
///     .with_env(TableNameEnv::new().with("schema", "tenant_a"));
/// assert!(options.aliases().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct RenderOptions {
	strategy: Arc<dyn RenderingStrategy>,
	aliases: Option<Arc<dyn TableAliasResolver>>,
	env: TableNameEnv,
}

impl RenderOptions {
	/// Render with `strategy`, declared aliases and an empty environment.
	pub fn new(strategy: Arc<dyn RenderingStrategy>) -> Self {
		Self {
			strategy,
			aliases: None,
			env: TableNameEnv::new(),
		}
	}

	/// Render with one of the built-in dialects.
	pub fn for_dialect(dialect: Dialect) -> Self {
		Self::new(dialect.strategy(AnnotatedStrategy::DEFAULT_PREFIX))
	}

	/// Replace the declared aliases with `resolver`.
	#[must_use]
	pub fn with_aliases<R>(mut self, resolver: R) -> Self
	where
		R: TableAliasResolver + 'static,
	{
		self.aliases = Some(Arc::new(resolver));
		self
	}

	/// Render every column unqualified.
	#[must_use]
	pub fn without_aliases(self) -> Self {
		self.with_aliases(NoAliases)
	}

	/// Environment handed to deferred table-name suppliers.
	#[must_use]
	pub fn with_env(mut self, env: TableNameEnv) -> Self {
		self.env = env;
		self
	}

	/// Placeholder strategy.
	pub fn strategy(&self) -> &dyn RenderingStrategy {
		self.strategy.as_ref()
	}

	/// Caller alias resolver, if one replaces the declared aliases.
	pub fn aliases(&self) -> Option<&dyn TableAliasResolver> {
		self.aliases.as_deref()
	}

	/// Deferred-name environment.
	pub fn env(&self) -> &TableNameEnv {
		&self.env
	}
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self::new(Arc::new(NamedStrategy))
	}
}

/// State of one render.
#[derive(Debug)]
pub struct RenderingContext<'a> {
	sequence: Arc<AtomicUsize>,
	table_names: Arc<Mutex<HashMap<TableId, String>>>,
	strategy: &'a dyn RenderingStrategy,
	caller_aliases: Option<&'a dyn TableAliasResolver>,
	declared: DeclaredAliases,
	env: &'a TableNameEnv,
}

impl<'a> RenderingContext<'a> {
	/// Start a render.
	///
	/// `caller_aliases`, when given, replaces `declared` for the whole
	/// statement including its sub-selects.
	pub fn new(
		strategy: &'a dyn RenderingStrategy,
		caller_aliases: Option<&'a dyn TableAliasResolver>,
		env: &'a TableNameEnv,
		declared: DeclaredAliases,
	) -> Self {
		Self {
			sequence: Arc::new(AtomicUsize::new(0)),
			table_names: Arc::new(Mutex::new(HashMap::new())),
			strategy,
			caller_aliases,
			declared,
			env,
		}
	}

	/// Start a render from caller options.
	pub fn from_options(options: &'a RenderOptions, declared: DeclaredAliases) -> Self {
		Self::new(options.strategy(), options.aliases(), options.env(), declared)
	}

	/// Context for a nested select: same sequence and name cache, the nested
	/// select's own declared aliases.
	pub fn for_sub_select(&self, declared: DeclaredAliases) -> Self {
		Self {
			sequence: Arc::clone(&self.sequence),
			table_names: Arc::clone(&self.table_names),
			strategy: self.strategy,
			caller_aliases: self.caller_aliases,
			declared,
			env: self.env,
		}
	}

	/// Statement-wide placeholder strategy.
	pub fn strategy(&self) -> &dyn RenderingStrategy {
		self.strategy
	}

	/// Allocate the next parameter number. Numbers start at 1.
	pub fn next_sequence(&self) -> usize {
		self.sequence.fetch_add(1, Ordering::SeqCst) + 1
	}

	/// Number of parameters allocated so far.
	pub fn parameter_count(&self) -> usize {
		self.sequence.load(Ordering::SeqCst)
	}

	/// Bind `value`, record it in `parameters` and return its placeholder.
	///
	/// The column, when given, supplies the type tag and may override the
	/// statement's strategy.
	pub fn bind(&self, value: Value, column: Option<&SqlColumn>, parameters: &mut Parameters) -> String {
		let sequence = self.next_sequence();
		let tag = column.map(SqlColumn::binding_tag).unwrap_or_default();
		let strategy: &dyn RenderingStrategy = match column.and_then(SqlColumn::rendering_strategy) {
			Some(strategy) => strategy.as_ref(),
			None => self.strategy,
		};
		parameters.insert(sequence, value);
		strategy.placeholder(sequence, &tag)
	}

	/// Alias for `table` under the active resolver.
	pub fn alias_for(&self, table: &SqlTable) -> Option<String> {
		match self.caller_aliases {
			Some(resolver) => resolver.alias_for(table),
			None => self.declared.alias_for(table),
		}
	}

	/// Name to render for `table`. Deferred names are resolved once per
	/// render and reused afterwards.
	pub fn table_name(&self, table: &SqlTable) -> String {
		if !table.is_deferred() {
			return table.name().to_string();
		}
		let mut names = self.table_names.lock();
		names
			.entry(table.id())
			.or_insert_with(|| {
				let resolved = table.resolve_name(self.env);
				tracing::debug!(table = table.name(), resolved = %resolved, "resolved deferred table name");
				resolved
			})
			.clone()
	}

	/// `table [alias]` as written in from, join, update and delete clauses.
	pub fn table_reference(&self, table: &SqlTable) -> String {
		let name = self.table_name(table);
		match self.alias_for(table) {
			Some(alias) => format!("{} {}", name, alias),
			None => name,
		}
	}

	/// `alias.column` when the column's table is aliased, else `column`.
	pub fn column_reference(&self, column: &SqlColumn) -> String {
		match self.alias_for(column.table()) {
			Some(alias) => format!("{}.{}", alias, column.name()),
			None => column.name().to_string(),
		}
	}
}
