//! Common fixtures and helpers for the integration tests

// Each test binary compiles common.rs separately, so not every item is used
// by every binary.
#![allow(dead_code, unreachable_pub)]

use dynasql_query::prelude::*;
use rstest::fixture;

/// The `person` table and its columns
#[derive(Debug, Clone)]
pub struct Person {
	pub table: SqlTable,
	pub id: SqlColumn,
	pub first_name: SqlColumn,
	pub last_name: SqlColumn,
	pub age: SqlColumn,
}

impl Person {
	pub fn new() -> Self {
		let table = SqlTable::new("person");
		Self {
			id: table.column("id").with_jdbc_type(JdbcType::Integer),
			first_name: table.column("first_name").with_jdbc_type(JdbcType::Varchar),
			last_name: table.column("last_name").with_jdbc_type(JdbcType::Varchar),
			age: table.column("age").with_jdbc_type(JdbcType::Integer),
			table,
		}
	}

	/// Columns indexed the way the generated trees refer to them
	pub fn columns(&self) -> [SqlColumn; 3] {
		[self.id.clone(), self.age.clone(), self.last_name.clone()]
	}
}

#[fixture]
pub fn person() -> Person {
	Person::new()
}

/// Replace every named (`:p1`) and annotated (`#{...}`) placeholder with `?`
pub fn to_positional(sql: &str) -> String {
	let mut out = String::with_capacity(sql.len());
	let mut chars = sql.chars().peekable();
	while let Some(ch) = chars.next() {
		match ch {
			':' if chars.peek() == Some(&'p') => {
				chars.next();
				while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
					chars.next();
				}
				out.push('?');
			}
			'#' if chars.peek() == Some(&'{') => {
				for c in chars.by_ref() {
					if c == '}' {
						break;
					}
				}
				out.push('?');
			}
			_ => out.push(ch),
		}
	}
	out
}

/// Sequence numbers of the `:pN` placeholders in the order they appear
pub fn named_sequences(sql: &str) -> Vec<usize> {
	sql.split(":p")
		.skip(1)
		.filter_map(|rest| {
			let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
			digits.parse().ok()
		})
		.collect()
}
