//! Ordering specifications for ORDER BY clauses.

use super::column::SqlColumn;

/// One item of an order by clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
	name: String,
	descending: bool,
}

impl SortSpec {
	/// Sort by a column alias or any other name, ascending.
	pub fn by_name(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			descending: false,
		}
	}

	/// Same item sorted descending.
	#[must_use]
	pub fn descending(mut self) -> Self {
		self.descending = true;
		self
	}

	/// The rendered item, e.g. `id` or `last_name desc`.
	pub fn to_sql(&self) -> String {
		if self.descending {
			format!("{} desc", self.name)
		} else {
			self.name.clone()
		}
	}
}

impl From<&SqlColumn> for SortSpec {
	fn from(column: &SqlColumn) -> Self {
		Self {
			name: column.order_by_name().to_string(),
			descending: column.is_descending(),
		}
	}
}

impl From<SqlColumn> for SortSpec {
	fn from(column: SqlColumn) -> Self {
		(&column).into()
	}
}

impl From<&str> for SortSpec {
	fn from(name: &str) -> Self {
		Self::by_name(name)
	}
}
