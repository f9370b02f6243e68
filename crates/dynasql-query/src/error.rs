//! Error types for statement construction and settings loading.
//!
//! Rendering a built model never fails. Every variant here is raised while a
//! statement is being assembled, or while render settings are being loaded.

use thiserror::Error;

/// The kind of statement a builder was assembling when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
	/// SELECT statement
	Select,
	/// INSERT statement
	Insert,
	/// UPDATE statement
	Update,
	/// DELETE statement
	Delete,
}

impl StatementKind {
	/// Returns the lowercase name used in error messages and log fields.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Select => "select",
			Self::Insert => "insert",
			Self::Update => "update",
			Self::Delete => "delete",
		}
	}
}

impl std::fmt::Display for StatementKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The clause that owns a criteria list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
	/// WHERE clause
	Where,
	/// HAVING clause
	Having,
}

impl std::fmt::Display for ClauseKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Where => f.write_str("where"),
			Self::Having => f.write_str("having"),
		}
	}
}

/// Errors raised while building statements or loading render settings.
#[derive(Debug, Error)]
pub enum QueryError {
	/// A statement was built without a target table.
	#[error("{statement} statement requires a table")]
	MissingTable {
		/// Statement being built
		statement: StatementKind,
	},

	/// The first criterion of a where/having clause was supplied twice.
	#[error("{clause} clause of the {statement} statement already has an initial criterion")]
	DuplicateInitialCriterion {
		/// Statement being built
		statement: StatementKind,
		/// Clause receiving the criterion
		clause: ClauseKind,
	},

	/// A fixed-arity condition received the wrong number of values.
	#[error("condition '{operator}' requires {expected} values, got {actual}")]
	InvalidArity {
		/// Operator token of the condition
		operator: &'static str,
		/// Number of values the operator takes
		expected: usize,
		/// Number of values supplied
		actual: usize,
	},

	/// An insert or update statement was built without column mappings.
	#[error("{statement} statement requires at least one column mapping")]
	MissingColumnMappings {
		/// Statement being built
		statement: StatementKind,
	},

	/// A join has no column-to-column criterion, so its on clause could
	/// render empty.
	#[error("join on table '{table}' requires at least one column equality criterion")]
	MissingJoinColumnCriterion {
		/// Name of the joined table
		table: String,
	},

	/// A select statement was built without a projection.
	#[error("select statement requires at least one column")]
	MissingSelectList,

	/// Render settings contained an unusable value.
	#[error("Invalid settings: {0}")]
	InvalidSettings(String),

	/// Render settings could not be parsed.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Render settings file could not be read.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type alias for statement construction.
pub type QueryResult<T> = Result<T, QueryError>;
