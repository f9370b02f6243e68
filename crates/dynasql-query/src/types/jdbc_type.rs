//! Column value-type tags.

/// Value-type tag attached to a column.
///
/// Only the annotated placeholder dialect renders it
/// (`#{parameters.p1,jdbcType=INTEGER}`); the positional and named dialects
/// ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JdbcType {
	/// `ARRAY`
	Array,
	/// `BIGINT`
	Bigint,
	/// `BINARY`
	Binary,
	/// `BIT`
	Bit,
	/// `BLOB`
	Blob,
	/// `BOOLEAN`
	Boolean,
	/// `CHAR`
	Char,
	/// `CLOB`
	Clob,
	/// `DATE`
	Date,
	/// `DECIMAL`
	Decimal,
	/// `DOUBLE`
	Double,
	/// `FLOAT`
	Float,
	/// `INTEGER`
	Integer,
	/// `LONGVARCHAR`
	LongVarchar,
	/// `NCHAR`
	Nchar,
	/// `NUMERIC`
	Numeric,
	/// `NVARCHAR`
	Nvarchar,
	/// `OTHER`, for driver-specific types
	Other,
	/// `REAL`
	Real,
	/// `SMALLINT`
	Smallint,
	/// `TIME`
	Time,
	/// `TIMESTAMP`
	Timestamp,
	/// `TIMESTAMP_WITH_TIMEZONE`
	TimestampWithTimezone,
	/// `TINYINT`
	Tinyint,
	/// `VARBINARY`
	Varbinary,
	/// `VARCHAR`
	Varchar,
}

impl JdbcType {
	/// Returns the tag as rendered in annotated placeholders.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Array => "ARRAY",
			Self::Bigint => "BIGINT",
			Self::Binary => "BINARY",
			Self::Bit => "BIT",
			Self::Blob => "BLOB",
			Self::Boolean => "BOOLEAN",
			Self::Char => "CHAR",
			Self::Clob => "CLOB",
			Self::Date => "DATE",
			Self::Decimal => "DECIMAL",
			Self::Double => "DOUBLE",
			Self::Float => "FLOAT",
			Self::Integer => "INTEGER",
			Self::LongVarchar => "LONGVARCHAR",
			Self::Nchar => "NCHAR",
			Self::Numeric => "NUMERIC",
			Self::Nvarchar => "NVARCHAR",
			Self::Other => "OTHER",
			Self::Real => "REAL",
			Self::Smallint => "SMALLINT",
			Self::Time => "TIME",
			Self::Timestamp => "TIMESTAMP",
			Self::TimestampWithTimezone => "TIMESTAMP_WITH_TIMEZONE",
			Self::Tinyint => "TINYINT",
			Self::Varbinary => "VARBINARY",
			Self::Varchar => "VARCHAR",
		}
	}
}

impl std::fmt::Display for JdbcType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
