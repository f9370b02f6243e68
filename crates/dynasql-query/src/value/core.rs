//! Core Value enum definition.

/// Bindable value carried by a condition operand or a column mapping.
///
/// Every variant wraps an `Option`; `None` is SQL `NULL`. Null values are
/// still bound as parameters so that the number of parameters a statement
/// produces depends only on the number of values it renders.
///
/// ## Example
///
/// ```rust
/// use dynasql_query::Value;
///
/// let id = Value::Int(Some(42));
/// let missing = Value::Int(None);
/// let name = Value::String(Some(Box::new("fred".to_string())));
/// assert!(missing.is_null());
/// assert!(!id.is_null() && !name.is_null());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	/// Boolean value
	Bool(Option<bool>),
	/// 8-bit signed integer
	TinyInt(Option<i8>),
	/// 16-bit signed integer
	SmallInt(Option<i16>),
	/// 32-bit signed integer
	Int(Option<i32>),
	/// 64-bit signed integer
	BigInt(Option<i64>),
	/// 64-bit unsigned integer, used for row limits and offsets
	BigUnsigned(Option<u64>),
	/// 32-bit floating point
	Float(Option<f32>),
	/// 64-bit floating point
	Double(Option<f64>),
	/// Single character
	Char(Option<char>),
	/// String value (boxed)
	String(Option<Box<String>>),
	/// Binary data (boxed)
	Bytes(Option<Box<Vec<u8>>>),

	/// Chrono NaiveDate
	#[cfg(feature = "with-chrono")]
	ChronoDate(Option<Box<chrono::NaiveDate>>),
	/// Chrono NaiveDateTime
	#[cfg(feature = "with-chrono")]
	ChronoDateTime(Option<Box<chrono::NaiveDateTime>>),
	/// Chrono DateTime with UTC timezone
	#[cfg(feature = "with-chrono")]
	ChronoDateTimeUtc(Option<Box<chrono::DateTime<chrono::Utc>>>),

	/// UUID value
	#[cfg(feature = "with-uuid")]
	Uuid(Option<Box<uuid::Uuid>>),

	/// JSON value
	#[cfg(feature = "with-json")]
	Json(Option<Box<serde_json::Value>>),
}

impl Value {
	/// Returns `true` if this value is null.
	///
	/// ```rust
	/// use dynasql_query::Value;
	///
	/// assert!(Value::Int(None).is_null());
	/// assert!(!Value::Int(Some(42)).is_null());
	/// ```
	#[must_use]
	pub fn is_null(&self) -> bool {
		match self {
			Self::Bool(v) => v.is_none(),
			Self::TinyInt(v) => v.is_none(),
			Self::SmallInt(v) => v.is_none(),
			Self::Int(v) => v.is_none(),
			Self::BigInt(v) => v.is_none(),
			Self::BigUnsigned(v) => v.is_none(),
			Self::Float(v) => v.is_none(),
			Self::Double(v) => v.is_none(),
			Self::Char(v) => v.is_none(),
			Self::String(v) => v.is_none(),
			Self::Bytes(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDate(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTime(v) => v.is_none(),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTimeUtc(v) => v.is_none(),
			#[cfg(feature = "with-uuid")]
			Self::Uuid(v) => v.is_none(),
			#[cfg(feature = "with-json")]
			Self::Json(v) => v.is_none(),
		}
	}

	/// Returns the string content if this is a non-null string value.
	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(Some(s)) => Some(s.as_str()),
			_ => None,
		}
	}

	/// Upper-cases string and character values with Unicode rules, leaving
	/// every other value as is.
	///
	/// Used by the case-insensitive `like` and `in` conditions, which compare
	/// against `upper(column)`. A character whose upper case spans several
	/// characters (`'ß'` to `"SS"`) becomes a string.
	#[must_use]
	pub fn to_uppercase(self) -> Self {
		match self {
			Self::String(Some(s)) => Self::String(Some(Box::new(s.to_uppercase()))),
			Self::Char(Some(c)) => {
				let mut upper = c.to_uppercase();
				match (upper.next(), upper.next()) {
					(Some(single), None) => Self::Char(Some(single)),
					_ => Self::String(Some(Box::new(c.to_uppercase().collect()))),
				}
			}
			other => other,
		}
	}

	/// Render this value as an inline SQL literal.
	///
	/// Placeholders are always used for bound values; literals are only
	/// produced for debugging output such as [`RenderedStatement::inline`].
	///
	/// [`RenderedStatement::inline`]: crate::render::RenderedStatement::inline
	///
	/// ```rust
	/// use dynasql_query::Value;
	///
	/// assert_eq!(Value::Int(Some(42)).to_sql_literal(), "42");
	/// assert_eq!(Value::Int(None).to_sql_literal(), "NULL");
	/// assert_eq!(Value::from("it's").to_sql_literal(), "'it''s'");
	/// ```
	#[must_use]
	pub fn to_sql_literal(&self) -> String {
		if self.is_null() {
			return "NULL".to_string();
		}
		match self {
			Self::Bool(Some(v)) => {
				if *v {
					"TRUE".to_string()
				} else {
					"FALSE".to_string()
				}
			}
			Self::TinyInt(Some(v)) => v.to_string(),
			Self::SmallInt(Some(v)) => v.to_string(),
			Self::Int(Some(v)) => v.to_string(),
			Self::BigInt(Some(v)) => v.to_string(),
			Self::BigUnsigned(Some(v)) => v.to_string(),
			Self::Float(Some(v)) => v.to_string(),
			Self::Double(Some(v)) => v.to_string(),
			Self::Char(Some(v)) => format!("'{}'", v.to_string().replace('\'', "''")),
			Self::String(Some(v)) => format!("'{}'", v.replace('\'', "''")),
			Self::Bytes(Some(v)) => {
				let hex: String = v.iter().map(|b| format!("{:02X}", b)).collect();
				format!("X'{}'", hex)
			}
			#[cfg(feature = "with-chrono")]
			Self::ChronoDate(Some(v)) => format!("'{}'", v),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTime(Some(v)) => format!("'{}'", v),
			#[cfg(feature = "with-chrono")]
			Self::ChronoDateTimeUtc(Some(v)) => format!("'{}'", v.to_rfc3339()),
			#[cfg(feature = "with-uuid")]
			Self::Uuid(Some(v)) => format!("'{}'", v),
			#[cfg(feature = "with-json")]
			Self::Json(Some(v)) => format!("'{}'", v.to_string().replace('\'', "''")),
			_ => "NULL".to_string(),
		}
	}
}

impl Default for Value {
	/// Returns the default value, which is a null string.
	fn default() -> Self {
		Self::String(None)
	}
}
