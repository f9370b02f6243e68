//! Operators of the four condition shapes.
//!
//! Each operator knows its SQL token and how to turn rendered operand
//! placeholders into the phrase that follows the left-hand side.

/// Operators that take no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoValueOperator {
	/// `is null`
	IsNull,
	/// `is not null`
	IsNotNull,
}

impl NoValueOperator {
	/// SQL token.
	pub fn token(&self) -> &'static str {
		match self {
			Self::IsNull => "is null",
			Self::IsNotNull => "is not null",
		}
	}
}

/// Operators that take one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SingleValueOperator {
	/// `=`
	EqualTo,
	/// `<>`
	NotEqualTo,
	/// `>`
	GreaterThan,
	/// `>=`
	GreaterThanOrEqualTo,
	/// `<`
	LessThan,
	/// `<=`
	LessThanOrEqualTo,
	/// `like`
	Like,
	/// `not like`
	NotLike,
	/// `upper(col) like ?` with an upper-cased value
	LikeCaseInsensitive,
	/// `upper(col) not like ?` with an upper-cased value
	NotLikeCaseInsensitive,
}

impl SingleValueOperator {
	/// SQL token.
	pub fn token(&self) -> &'static str {
		match self {
			Self::EqualTo => "=",
			Self::NotEqualTo => "<>",
			Self::GreaterThan => ">",
			Self::GreaterThanOrEqualTo => ">=",
			Self::LessThan => "<",
			Self::LessThanOrEqualTo => "<=",
			Self::Like | Self::LikeCaseInsensitive => "like",
			Self::NotLike | Self::NotLikeCaseInsensitive => "not like",
		}
	}

	/// Whether the left-hand side is wrapped in `upper()` and the value
	/// upper-cased.
	pub fn is_case_insensitive(&self) -> bool {
		matches!(self, Self::LikeCaseInsensitive | Self::NotLikeCaseInsensitive)
	}

	/// Phrase for a rendered placeholder, e.g. `= ?`.
	pub fn phrase(&self, placeholder: &str) -> String {
		format!("{} {}", self.token(), placeholder)
	}
}

/// Operators that take two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TwoValueOperator {
	/// `between ? and ?`
	Between,
	/// `not between ? and ?`
	NotBetween,
}

impl TwoValueOperator {
	/// SQL token.
	pub fn token(&self) -> &'static str {
		match self {
			Self::Between => "between",
			Self::NotBetween => "not between",
		}
	}

	/// Phrase for two rendered placeholders, e.g. `between ? and ?`.
	pub fn phrase(&self, first: &str, second: &str) -> String {
		format!("{} {} and {}", self.token(), first, second)
	}
}

/// Operators that take a list of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListValueOperator {
	/// `in (?,?)`
	In,
	/// `not in (?,?)`
	NotIn,
	/// `upper(col) in (?,?)` with upper-cased values
	InCaseInsensitive,
	/// `upper(col) not in (?,?)` with upper-cased values
	NotInCaseInsensitive,
}

impl ListValueOperator {
	/// SQL token.
	pub fn token(&self) -> &'static str {
		match self {
			Self::In | Self::InCaseInsensitive => "in",
			Self::NotIn | Self::NotInCaseInsensitive => "not in",
		}
	}

	/// Whether the left-hand side is wrapped in `upper()` and the values
	/// upper-cased.
	pub fn is_case_insensitive(&self) -> bool {
		matches!(self, Self::InCaseInsensitive | Self::NotInCaseInsensitive)
	}

	/// Phrase for the rendered placeholders, e.g. `in (?,?,?)`.
	pub fn phrase(&self, placeholders: &[String]) -> String {
		format!("{} ({})", self.token(), placeholders.join(","))
	}
}
