//! Criterion tree rendering.
//!
//! A criterion renders its own fragment (unless its condition is elided),
//! then each sub-group in order. The first surviving fragment drops its
//! connector. More than one surviving fragment is wrapped in parentheses,
//! exactly one is emitted bare, and none means the criterion contributes
//! nothing. The root list of a where or having clause is joined the same way
//! but never wrapped.
//!
//! With the `parallel` feature, sibling groups render on the rayon pool.
//! Sequence numbers stay unique and contiguous, fragments keep their order,
//! and every placeholder keeps the value it was bound with.

use super::column::render_expr;
use super::context::RenderingContext;
use super::fragment::FragmentAndParameters;
use super::statement::render_sub_select;
use super::writer::SqlWriter;
use crate::condition::Condition;
use crate::criterion::{Connector, CriteriaGroup, CriteriaList, Criterion, CriterionKind};
use crate::types::BasicColumn;
use crate::value::Value;

pub(crate) type Fragments = Vec<(Option<Connector>, FragmentAndParameters)>;

/// Render the root criteria of a where or having clause, without outer
/// parentheses. Returns `None` when nothing renders.
pub fn render_criteria_list(list: &CriteriaList, ctx: &RenderingContext<'_>) -> Option<FragmentAndParameters> {
	let mut fragments = Fragments::new();
	if let Some(fragment) = list.initial().and_then(|initial| render_criterion(initial, ctx)) {
		fragments.push((None, fragment));
	}
	fragments.extend(render_groups(list.groups(), ctx));
	join_fragments(fragments).map(|(fragment, _)| fragment)
}

/// Render one criterion, parenthesized when it produces more than one
/// fragment.
pub fn render_criterion(criterion: &Criterion, ctx: &RenderingContext<'_>) -> Option<FragmentAndParameters> {
	let (fragment, count) = render_unwrapped(criterion, ctx)?;
	if count > 1 {
		Some(fragment.map_fragment(|s| format!("({})", s)))
	} else {
		Some(fragment)
	}
}

fn render_unwrapped(criterion: &Criterion, ctx: &RenderingContext<'_>) -> Option<(FragmentAndParameters, usize)> {
	let mut fragments = Fragments::new();
	if let Some(own) = render_own(criterion.kind(), ctx) {
		fragments.push((None, own));
	}
	fragments.extend(render_groups(criterion.sub_criteria(), ctx));
	join_fragments(fragments)
}

#[cfg(not(feature = "parallel"))]
fn render_groups(groups: &[CriteriaGroup], ctx: &RenderingContext<'_>) -> Fragments {
	groups
		.iter()
		.filter_map(|group| render_group(group, ctx))
		.collect()
}

#[cfg(feature = "parallel")]
fn render_groups(groups: &[CriteriaGroup], ctx: &RenderingContext<'_>) -> Fragments {
	use rayon::prelude::*;

	if groups.len() < 2 {
		return groups
			.iter()
			.filter_map(|group| render_group(group, ctx))
			.collect();
	}
	groups
		.par_iter()
		.filter_map(|group| render_group(group, ctx))
		.collect()
}

fn render_group(
	group: &CriteriaGroup,
	ctx: &RenderingContext<'_>,
) -> Option<(Option<Connector>, FragmentAndParameters)> {
	render_criterion(group.criterion(), ctx).map(|fragment| (Some(group.connector()), fragment))
}

/// Join fragments with their connectors. The first fragment's connector is
/// dropped. Also returns how many fragments were joined.
pub(crate) fn join_fragments(fragments: Fragments) -> Option<(FragmentAndParameters, usize)> {
	let count = fragments.len();
	let mut iter = fragments.into_iter();
	let (_, first) = iter.next()?;

	let mut writer = SqlWriter::new();
	writer.push_fragment(first);
	for (connector, fragment) in iter {
		writer.push_keyword(connector.unwrap_or(Connector::And).as_str());
		writer.push_space();
		writer.push_fragment(fragment);
	}
	Some((writer.finish(), count))
}

fn render_own(kind: &CriterionKind, ctx: &RenderingContext<'_>) -> Option<FragmentAndParameters> {
	match kind {
		CriterionKind::ColumnAndCondition { column, condition } => {
			if !condition.should_render() {
				return None;
			}
			render_condition(column, condition, ctx)
		}
		CriterionKind::Exists(select) => {
			Some(render_sub_select(select, ctx).map_fragment(|s| format!("exists ({})", s)))
		}
		CriterionKind::NotExists(select) => {
			Some(render_sub_select(select, ctx).map_fragment(|s| format!("not exists ({})", s)))
		}
		CriterionKind::Not(inner) => {
			render_unwrapped(inner, ctx).map(|(fragment, _)| fragment.map_fragment(|s| format!("not ({})", s)))
		}
		CriterionKind::Group => None,
	}
}

/// Render `lhs <operator phrase>`, binding each operand in order.
///
/// Called only for conditions that passed `should_render`, so every shape
/// carries its values.
pub(crate) fn render_condition(
	column: &BasicColumn,
	condition: &Condition<Value>,
	ctx: &RenderingContext<'_>,
) -> Option<FragmentAndParameters> {
	let binding = column.expr().binding_column();
	let lhs = render_expr(column.expr(), ctx);
	let mut writer = SqlWriter::new();

	match condition {
		Condition::NoValue(c) => {
			writer.push_fragment(lhs);
			writer.push_keyword(c.operator().token());
		}
		Condition::Single(c) => {
			let value = c.value()?.clone();
			let operator = c.operator();
			let (lhs, value) = if operator.is_case_insensitive() {
				(lhs.map_fragment(|s| format!("upper({})", s)), value.to_uppercase())
			} else {
				(lhs, value)
			};
			writer.push_fragment(lhs);
			writer.push_space();
			let placeholder = ctx.bind(value, binding, writer.parameters_mut());
			writer.push(&operator.phrase(&placeholder));
		}
		Condition::Double(c) => {
			let (first, second) = c.values()?;
			writer.push_fragment(lhs);
			writer.push_space();
			let first = ctx.bind(first.clone(), binding, writer.parameters_mut());
			let second = ctx.bind(second.clone(), binding, writer.parameters_mut());
			writer.push(&c.operator().phrase(&first, &second));
		}
		Condition::List(c) => {
			let operator = c.operator();
			let upper = operator.is_case_insensitive();
			let lhs = if upper {
				lhs.map_fragment(|s| format!("upper({})", s))
			} else {
				lhs
			};
			writer.push_fragment(lhs);
			writer.push_space();
			let placeholders: Vec<String> = c
				.values()
				.iter()
				.map(|value| {
					let value = if upper {
						value.clone().to_uppercase()
					} else {
						value.clone()
					};
					ctx.bind(value, binding, writer.parameters_mut())
				})
				.collect();
			writer.push(&operator.phrase(&placeholders));
		}
	}
	Some(writer.finish())
}
