//! Column mappings of insert and update statements.

use super::select::SelectModel;
use crate::types::SqlColumn;
use crate::value::Value;

/// What a mapped column receives.
#[derive(Debug, Clone)]
pub enum MappingValue {
	/// A bound value
	Value(Value),
	/// A bound value; the mapping is skipped when it is absent
	ValueWhenPresent(Option<Value>),
	/// The `null` keyword
	Null,
	/// A constant rendered verbatim
	Constant(String),
	/// A string constant rendered quoted
	StringConstant(String),
	/// Another column (update only)
	Column(SqlColumn),
	/// A nested select (update only)
	SubQuery(Box<SelectModel>),
}

/// A column and the value it receives.
#[derive(Debug, Clone)]
pub struct ColumnMapping {
	pub(crate) column: SqlColumn,
	pub(crate) value: MappingValue,
}

impl ColumnMapping {
	/// Create a mapping.
	pub fn new(column: &SqlColumn, value: MappingValue) -> Self {
		Self {
			column: column.clone(),
			value,
		}
	}

	/// Target column.
	pub fn column(&self) -> &SqlColumn {
		&self.column
	}

	/// Mapped value.
	pub fn value(&self) -> &MappingValue {
		&self.value
	}

	/// False for a when-present mapping whose value is absent.
	pub fn is_present(&self) -> bool {
		!matches!(self.value, MappingValue::ValueWhenPresent(None))
	}
}
