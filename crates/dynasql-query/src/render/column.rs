//! Rendering of column expressions.

use super::context::RenderingContext;
use super::fragment::FragmentAndParameters;
use super::statement::render_sub_select;
use crate::types::{BasicColumn, ColumnExpr};

/// Render an expression as a left-hand side or select item, without alias.
pub fn render_expr(expr: &ColumnExpr, ctx: &RenderingContext<'_>) -> FragmentAndParameters {
	match expr {
		ColumnExpr::Column(column) => FragmentAndParameters::from_fragment(ctx.column_reference(column)),
		ColumnExpr::Function(function, inner) => render_expr(inner, ctx).map_fragment(|s| function.apply(&s)),
		ColumnExpr::CountAll => FragmentAndParameters::from_fragment("count(*)"),
		ColumnExpr::Constant(value) => FragmentAndParameters::from_fragment(value.as_str()),
		ColumnExpr::StringConstant(value) => {
			FragmentAndParameters::from_fragment(format!("'{}'", value.replace('\'', "''")))
		}
		ColumnExpr::SubQuery(select) => render_sub_select(select, ctx).map_fragment(|s| format!("({})", s)),
	}
}

/// Render a select item: the expression followed by `as <alias>` when the
/// column has one.
pub fn render_projection(column: &BasicColumn, ctx: &RenderingContext<'_>) -> FragmentAndParameters {
	let rendered = render_expr(column.expr(), ctx);
	match column.alias() {
		Some(alias) => rendered.map_fragment(|s| format!("{} as {}", s, alias)),
		None => rendered,
	}
}
