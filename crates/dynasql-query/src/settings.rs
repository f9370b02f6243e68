//! Render settings.
//!
//! Supports TOML configuration files:
//!
//! ```toml
//! dialect = "annotated"
//! parameter_prefix = "record"
//!
//! [table_aliases]
//! person = "p"
//!
//! [environment]
//! schema = "tenant_a"
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};
use crate::render::{AnnotatedStrategy, Dialect, RenderOptions, TableAliases};
use crate::types::TableNameEnv;

/// Settings that produce [`RenderOptions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
	/// Placeholder dialect
	pub dialect: Dialect,

	/// Prefix of annotated placeholders (`#{<prefix>.p1}`)
	pub parameter_prefix: String,

	/// Table name -> alias. Empty keeps the aliases declared on the tables.
	pub table_aliases: BTreeMap<String, String>,

	/// Values handed to deferred table-name suppliers
	pub environment: BTreeMap<String, String>,
}

impl Default for RenderSettings {
	fn default() -> Self {
		Self {
			dialect: Dialect::default(),
			parameter_prefix: AnnotatedStrategy::DEFAULT_PREFIX.to_string(),
			table_aliases: BTreeMap::new(),
			environment: BTreeMap::new(),
		}
	}
}

impl RenderSettings {
	/// Load settings from a TOML file.
	///
	/// # Errors
	///
	/// Returns error if file cannot be read, parsed or validated.
	pub fn from_path(path: impl AsRef<Path>) -> QueryResult<Self> {
		let content = std::fs::read_to_string(path.as_ref())?;
		Self::from_toml_str(&content)
	}

	/// Parse settings from a TOML string.
	///
	/// # Errors
	///
	/// Returns error if the string cannot be parsed or validated.
	pub fn from_toml_str(content: &str) -> QueryResult<Self> {
		let settings: Self = toml::from_str(content)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Check values that parse but cannot be rendered.
	///
	/// # Errors
	///
	/// Returns [`QueryError::InvalidSettings`] for an empty or non-identifier
	/// parameter prefix, or an empty table name or alias.
	pub fn validate(&self) -> QueryResult<()> {
		let prefix_ok = !self.parameter_prefix.is_empty()
			&& self
				.parameter_prefix
				.split('.')
				.all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
		if !prefix_ok {
			return Err(QueryError::InvalidSettings(format!(
				"parameter_prefix '{}' is not a dotted identifier",
				self.parameter_prefix
			)));
		}
		if let Some((table, alias)) = self
			.table_aliases
			.iter()
			.find(|(table, alias)| table.is_empty() || alias.is_empty())
		{
			return Err(QueryError::InvalidSettings(format!(
				"table alias entry '{}' = '{}' must not be empty",
				table, alias
			)));
		}
		Ok(())
	}

	/// Options for one render.
	pub fn to_options(&self) -> RenderOptions {
		let env: HashMap<String, String> = self
			.environment
			.iter()
			.map(|(key, value)| (key.clone(), value.clone()))
			.collect();
		let options = RenderOptions::new(self.dialect.strategy(&self.parameter_prefix))
			.with_env(TableNameEnv::from(env));

		if self.table_aliases.is_empty() {
			return options;
		}
		let aliases = self
			.table_aliases
			.iter()
			.fold(TableAliases::new(), |aliases, (table, alias)| aliases.with_name(table, alias));
		options.with_aliases(aliases)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::render::{BindingTag, TableAliasResolver};
	use crate::types::SqlTable;
	use pretty_assertions::assert_eq;
	use rstest::*;
	use std::io::Write;

	#[fixture]
	fn annotated_toml() -> &'static str {
		r#"
dialect = "annotated"
parameter_prefix = "record"

[table_aliases]
person = "p"

[environment]
schema = "tenant_a"
"#
	}

	#[rstest]
	fn test_defaults() {
		let settings = RenderSettings::default();

		assert_eq!(settings.dialect, Dialect::Named);
		assert_eq!(settings.parameter_prefix, "parameters");
		assert!(settings.table_aliases.is_empty());
	}

	#[rstest]
	fn test_empty_toml_gives_defaults() {
		let settings = RenderSettings::from_toml_str("").unwrap();

		assert_eq!(settings, RenderSettings::default());
	}

	#[rstest]
	fn test_from_toml_str(annotated_toml: &str) {
		let settings = RenderSettings::from_toml_str(annotated_toml).unwrap();

		assert_eq!(settings.dialect, Dialect::Annotated);
		assert_eq!(settings.parameter_prefix, "record");
		assert_eq!(settings.table_aliases.get("person").map(String::as_str), Some("p"));
		assert_eq!(settings.environment.get("schema").map(String::as_str), Some("tenant_a"));
	}

	#[rstest]
	fn test_to_options(annotated_toml: &str) {
		let options = RenderSettings::from_toml_str(annotated_toml).unwrap().to_options();
		let person = SqlTable::new("person");

		assert_eq!(
			options.strategy().placeholder(2, &BindingTag::default()),
			"#{record.p2}"
		);
		assert_eq!(
			options.aliases().and_then(|a| a.alias_for(&person)).as_deref(),
			Some("p")
		);
		assert_eq!(options.env().get("schema"), Some("tenant_a"));
	}

	#[rstest]
	fn test_to_options_without_aliases_keeps_declared() {
		let options = RenderSettings::default().to_options();

		assert!(options.aliases().is_none());
	}

	#[rstest]
	fn test_from_path(annotated_toml: &str) {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(annotated_toml.as_bytes()).unwrap();

		let settings = RenderSettings::from_path(file.path()).unwrap();

		assert_eq!(settings.dialect, Dialect::Annotated);
	}

	#[rstest]
	fn test_from_missing_path() {
		let dir = tempfile::tempdir().unwrap();
		let err = RenderSettings::from_path(dir.path().join("missing.toml")).unwrap_err();

		assert!(matches!(err, QueryError::Io(_)));
	}

	#[rstest]
	#[case::unknown_dialect("dialect = \"jdbc\"")]
	#[case::wrong_type("table_aliases = 3")]
	fn test_unparsable_toml(#[case] content: &str) {
		let err = RenderSettings::from_toml_str(content).unwrap_err();

		assert!(matches!(err, QueryError::Toml(_)));
	}

	#[rstest]
	#[case::empty_prefix("parameter_prefix = \"\"")]
	#[case::bad_prefix("parameter_prefix = \"a b\"")]
	#[case::empty_alias("[table_aliases]\nperson = \"\"")]
	fn test_invalid_settings(#[case] content: &str) {
		let err = RenderSettings::from_toml_str(content).unwrap_err();

		assert!(matches!(err, QueryError::InvalidSettings(_)));
	}
}
