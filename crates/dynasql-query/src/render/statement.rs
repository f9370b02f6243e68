//! Statement renderers.
//!
//! Each model renders clause by clause into one [`SqlWriter`]. A clause whose
//! renderer produced nothing is skipped along with its keyword.

use std::fmt;

use super::column::{render_expr, render_projection};
use super::context::{DeclaredAliases, RenderOptions, RenderingContext};
use super::criterion::{join_fragments, render_condition, render_criteria_list};
use super::fragment::{FragmentAndParameters, FragmentCollector, Parameters};
use super::strategy::{PositionalStrategy, RenderingStrategy};
use super::writer::SqlWriter;
use crate::error::StatementKind;
use crate::statement::{
	ColumnMapping, DeleteModel, InsertModel, InsertSource, JoinCondition, JoinSpec, MappingValue,
	Paging, SelectModel, UpdateModel,
};
use crate::types::{BasicColumn, SortSpec, SqlTable, TableNameEnv};
use crate::value::Values;

/// Rendered SQL text and its bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedStatement {
	statement: String,
	parameters: Parameters,
}

impl RenderedStatement {
	/// SQL text.
	pub fn statement(&self) -> &str {
		&self.statement
	}

	/// Bound parameters.
	pub fn parameters(&self) -> &Parameters {
		&self.parameters
	}

	/// Values in placeholder order, for positional drivers.
	pub fn values(&self) -> Values {
		self.parameters.to_values()
	}

	/// Split into text and parameters.
	pub fn into_parts(self) -> (String, Parameters) {
		(self.statement, self.parameters)
	}

	/// SQL with every `?` placeholder replaced by its value as a literal.
	///
	/// Meant for logging and debugging of statements rendered with
	/// [`PositionalStrategy`]. Question marks inside quoted string constants
	/// are left alone. The result is not safe to execute.
	pub fn inline(&self) -> String {
		let mut values = self.parameters.to_values().into_iter();
		let mut out = String::with_capacity(self.statement.len());
		let mut quoted = false;
		for ch in self.statement.chars() {
			match ch {
				'\'' => {
					quoted = !quoted;
					out.push(ch);
				}
				'?' if !quoted => match values.next() {
					Some(value) => out.push_str(&value.to_sql_literal()),
					None => out.push(ch),
				},
				_ => out.push(ch),
			}
		}
		out
	}
}

impl fmt::Display for RenderedStatement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.statement)
	}
}

/// A built statement that can be rendered.
///
/// Rendering is pure: it never fails, never touches the model, and may be
/// repeated with different strategies or options.
pub trait RenderableStatement: fmt::Debug {
	/// Which statement this is.
	fn statement_kind(&self) -> StatementKind;

	/// Aliases declared on the tables the statement reads from.
	fn declared_aliases(&self) -> DeclaredAliases;

	/// Render into an existing context.
	fn render_in(&self, ctx: &RenderingContext<'_>) -> FragmentAndParameters;

	/// Render with `strategy`, declared aliases and an empty deferred-name
	/// environment.
	fn render(&self, strategy: &dyn RenderingStrategy) -> RenderedStatement {
		let env = TableNameEnv::new();
		let ctx = RenderingContext::new(strategy, None, &env, self.declared_aliases());
		finish(self.statement_kind(), self.render_in(&ctx))
	}

	/// Render with caller options.
	fn render_with(&self, options: &RenderOptions) -> RenderedStatement {
		let ctx = RenderingContext::from_options(options, self.declared_aliases());
		finish(self.statement_kind(), self.render_in(&ctx))
	}

	/// Positional render with values inlined, for debugging.
	fn to_inline_sql(&self) -> String {
		self.render(&PositionalStrategy).inline()
	}
}

fn finish(kind: StatementKind, rendered: FragmentAndParameters) -> RenderedStatement {
	let (statement, parameters) = rendered.into_parts();
	tracing::trace!(
		statement = kind.as_str(),
		parameters = parameters.len(),
		"rendered statement"
	);
	RenderedStatement {
		statement,
		parameters,
	}
}

/// Render a nested select in a child context sharing the parent's sequence.
pub fn render_sub_select(select: &SelectModel, ctx: &RenderingContext<'_>) -> FragmentAndParameters {
	let child = ctx.for_sub_select(select.declared_aliases());
	render_select(select, &child)
}

fn render_select(select: &SelectModel, ctx: &RenderingContext<'_>) -> FragmentAndParameters {
	let mut writer = SqlWriter::new();

	writer.push("select");
	if select.distinct {
		writer.push_keyword("distinct");
	}
	writer.push_space();
	writer.push_list(&select.columns, ", ", |w, column| {
		w.push_fragment(render_projection(column, ctx));
	});

	writer.push_keyword("from");
	writer.push_space();
	writer.push(&ctx.table_reference(&select.table));

	for join in &select.joins {
		write_join(&mut writer, join, ctx);
	}

	writer.push_clause("where", render_criteria_list(&select.where_criteria, ctx));

	if !select.group_by.is_empty() {
		writer.push_keyword("group by");
		writer.push_space();
		writer.push_list(&select.group_by, ", ", |w, column| {
			w.push_fragment(render_expr(column.expr(), ctx));
		});
	}

	writer.push_clause("having", render_criteria_list(&select.having, ctx));

	for union in &select.unions {
		writer.push_keyword(union.kind.as_str());
		writer.push_space();
		writer.push_fragment(render_sub_select(&union.select, ctx));
	}

	write_order_by(&mut writer, &select.order_by);
	write_paging(&mut writer, &select.paging, ctx);

	if let Some(locking) = &select.locking {
		writer.push_keyword(locking.mode.as_str());
		if let Some(wait) = locking.wait {
			writer.push_keyword(wait.as_str());
		}
	}

	writer.finish()
}

fn write_join(writer: &mut SqlWriter, join: &JoinSpec, ctx: &RenderingContext<'_>) {
	writer.push_keyword(join.kind.as_str());
	writer.push_space();
	writer.push(&ctx.table_reference(&join.table));

	let fragments = join
		.criteria
		.iter()
		.enumerate()
		.filter_map(|(index, criterion)| {
			let fragment = match &criterion.condition {
				JoinCondition::Column(right) => Some(FragmentAndParameters::from_fragment(format!(
					"{} = {}",
					ctx.column_reference(&criterion.column),
					ctx.column_reference(right)
				))),
				JoinCondition::Value(condition) => {
					if condition.should_render() {
						let lhs = BasicColumn::from(&criterion.column);
						render_condition(&lhs, condition, ctx)
					} else {
						None
					}
				}
			};
			let connector = (index > 0).then_some(criterion.connector);
			fragment.map(|fragment| (connector, fragment))
		})
		.collect();
	writer.push_clause("on", join_fragments(fragments).map(|(fragment, _)| fragment));
}

fn write_order_by(writer: &mut SqlWriter, order_by: &[SortSpec]) {
	if order_by.is_empty() {
		return;
	}
	writer.push_keyword("order by");
	writer.push_space();
	writer.push_list(order_by, ", ", |w, spec| w.push(&spec.to_sql()));
}

fn write_limit(
	writer: &mut SqlWriter,
	keyword: &str,
	rows: u64,
	suffix: Option<&str>,
	ctx: &RenderingContext<'_>,
) {
	writer.push_keyword(keyword);
	writer.push_space();
	let placeholder = ctx.bind(rows.into(), None, writer.parameters_mut());
	writer.push(&placeholder);
	if let Some(suffix) = suffix {
		writer.push_keyword(suffix);
	}
}

fn write_paging(writer: &mut SqlWriter, paging: &Paging, ctx: &RenderingContext<'_>) {
	match paging.fetch_first {
		Some(fetch_first) => {
			if let Some(offset) = paging.offset {
				write_limit(writer, "offset", offset, Some("rows"), ctx);
			}
			write_limit(writer, "fetch first", fetch_first, Some("rows only"), ctx);
		}
		None => {
			if let Some(limit) = paging.limit {
				write_limit(writer, "limit", limit, None, ctx);
			}
			if let Some(offset) = paging.offset {
				write_limit(writer, "offset", offset, None, ctx);
			}
		}
	}
}

/// Render the value side of a mapping. `None` means the mapping is skipped.
fn render_mapping_value(mapping: &ColumnMapping, ctx: &RenderingContext<'_>) -> Option<FragmentAndParameters> {
	let column = &mapping.column;
	let bound = |value: &crate::value::Value| {
		let mut parameters = Parameters::new();
		let placeholder = ctx.bind(value.clone(), Some(column), &mut parameters);
		FragmentAndParameters::new(placeholder, parameters)
	};
	match &mapping.value {
		MappingValue::Value(value) => Some(bound(value)),
		MappingValue::ValueWhenPresent(value) => value.as_ref().map(bound),
		MappingValue::Null => Some(FragmentAndParameters::from_fragment("null")),
		MappingValue::Constant(constant) => Some(FragmentAndParameters::from_fragment(constant.as_str())),
		MappingValue::StringConstant(constant) => Some(FragmentAndParameters::from_fragment(format!(
			"'{}'",
			constant.replace('\'', "''")
		))),
		MappingValue::Column(other) => Some(FragmentAndParameters::from_fragment(ctx.column_reference(other))),
		MappingValue::SubQuery(select) => {
			Some(render_sub_select(select, ctx).map_fragment(|s| format!("({})", s)))
		}
	}
}

fn log_unrestricted(kind: StatementKind, table: &SqlTable, all_rows: bool) {
	if !all_rows {
		tracing::debug!(
			statement = kind.as_str(),
			table = table.name(),
			"rendered without criteria; statement affects every row"
		);
	}
}

impl RenderableStatement for SelectModel {
	fn statement_kind(&self) -> StatementKind {
		StatementKind::Select
	}

	fn declared_aliases(&self) -> DeclaredAliases {
		DeclaredAliases::from_tables(
			std::iter::once(&self.table).chain(self.joins.iter().map(|join| &join.table)),
		)
	}

	fn render_in(&self, ctx: &RenderingContext<'_>) -> FragmentAndParameters {
		render_select(self, ctx)
	}
}

impl RenderableStatement for InsertModel {
	fn statement_kind(&self) -> StatementKind {
		StatementKind::Insert
	}

	fn declared_aliases(&self) -> DeclaredAliases {
		DeclaredAliases::default()
	}

	fn render_in(&self, ctx: &RenderingContext<'_>) -> FragmentAndParameters {
		let mut writer = SqlWriter::new();
		writer.push("insert into");
		writer.push_space();
		writer.push(&ctx.table_name(&self.table));

		match &self.source {
			InsertSource::Values(mappings) => {
				let rendered: Vec<(&ColumnMapping, FragmentAndParameters)> = mappings
					.iter()
					.filter_map(|mapping| render_mapping_value(mapping, ctx).map(|value| (mapping, value)))
					.collect();
				writer.push(" (");
				writer.push_list(&rendered, ", ", |w, (mapping, _)| w.push(mapping.column.name()));
				writer.push(") values (");
				writer.push_list(rendered, ", ", |w, (_, value)| w.push_fragment(value));
				writer.push(")");
			}
			InsertSource::Select { columns, select } => {
				if !columns.is_empty() {
					writer.push(" (");
					writer.push_list(columns, ", ", |w, column| w.push(column.name()));
					writer.push(")");
				}
				writer.push_space();
				writer.push_fragment(render_sub_select(select, ctx));
			}
		}

		writer.finish()
	}
}

impl RenderableStatement for UpdateModel {
	fn statement_kind(&self) -> StatementKind {
		StatementKind::Update
	}

	fn declared_aliases(&self) -> DeclaredAliases {
		DeclaredAliases::from_tables(std::iter::once(&self.table))
	}

	fn render_in(&self, ctx: &RenderingContext<'_>) -> FragmentAndParameters {
		let mut writer = SqlWriter::new();
		writer.push("update");
		writer.push_space();
		writer.push(&ctx.table_reference(&self.table));

		let assignments: FragmentCollector = self
			.mappings
			.iter()
			.filter_map(|mapping| {
				render_mapping_value(mapping, ctx)
					.map(|value| value.map_fragment(|s| format!("{} = {}", mapping.column.name(), s)))
			})
			.collect();
		writer.push_keyword("set");
		writer.push_space();
		writer.push_fragment(assignments.join(", "));

		let criteria = render_criteria_list(&self.where_criteria, ctx);
		if criteria.is_none() {
			log_unrestricted(StatementKind::Update, &self.table, self.all_rows);
		}
		writer.push_clause("where", criteria);

		write_order_by(&mut writer, &self.order_by);
		if let Some(limit) = self.limit {
			write_limit(&mut writer, "limit", limit, None, ctx);
		}

		writer.finish()
	}
}

impl RenderableStatement for DeleteModel {
	fn statement_kind(&self) -> StatementKind {
		StatementKind::Delete
	}

	fn declared_aliases(&self) -> DeclaredAliases {
		DeclaredAliases::from_tables(std::iter::once(&self.table))
	}

	fn render_in(&self, ctx: &RenderingContext<'_>) -> FragmentAndParameters {
		let mut writer = SqlWriter::new();
		writer.push("delete from");
		writer.push_space();
		writer.push(&ctx.table_reference(&self.table));

		let criteria = render_criteria_list(&self.where_criteria, ctx);
		if criteria.is_none() {
			log_unrestricted(StatementKind::Delete, &self.table, self.all_rows);
		}
		writer.push_clause("where", criteria);

		write_order_by(&mut writer, &self.order_by);
		if let Some(limit) = self.limit {
			write_limit(&mut writer, "limit", limit, None, ctx);
		}

		writer.finish()
	}
}
