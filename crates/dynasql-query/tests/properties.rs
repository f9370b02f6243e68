//! Property tests for criterion tree rendering

mod common;

use common::{Person, named_sequences, to_positional};
use dynasql_query::prelude::*;
use dynasql_query::render::{DeclaredAliases, RenderingContext, render_criterion};
use proptest::prelude::*;

/// Shape of a generated criterion tree.
#[derive(Debug, Clone)]
enum Node {
	/// Column index and value; `None` never renders
	Leaf(usize, Option<i32>),
	/// Children with `true` for an `or` connector
	Group(Vec<(bool, Node)>),
}

fn node() -> impl Strategy<Value = Node> {
	let leaf = (0usize..3, proptest::option::of(0i32..1000)).prop_map(|(column, value)| Node::Leaf(column, value));
	leaf.prop_recursive(4, 32, 4, |inner| {
		prop::collection::vec((any::<bool>(), inner), 1..4).prop_map(Node::Group)
	})
}

/// Build the criterion for `node`. With `prune`, absent leaves and groups
/// left empty are dropped instead of being kept as elided conditions.
fn build(node: &Node, columns: &[SqlColumn], prune: bool) -> Option<Criterion> {
	match node {
		Node::Leaf(column, Some(value)) => Some(Criterion::of(&columns[*column], is_equal_to(*value))),
		Node::Leaf(column, None) => {
			(!prune).then(|| Criterion::of(&columns[*column], is_equal_to_when_present(None::<i32>)))
		}
		Node::Group(children) => {
			let mut built = children
				.iter()
				.filter_map(|(or, child)| build(child, columns, prune).map(|criterion| (*or, criterion)));
			let (_, first) = built.next()?;
			Some(built.fold(Criterion::group(first), |group, (or, criterion)| {
				if or {
					group.or_criterion(criterion)
				} else {
					group.and_criterion(criterion)
				}
			}))
		}
	}
}

fn present_leaves(node: &Node) -> usize {
	match node {
		Node::Leaf(_, value) => usize::from(value.is_some()),
		Node::Group(children) => children.iter().map(|(_, child)| present_leaves(child)).sum(),
	}
}

fn render(
	criterion: &Criterion,
	strategy: &dyn RenderingStrategy,
	aliases: Option<&dyn TableAliasResolver>,
) -> Option<(String, Parameters)> {
	let env = TableNameEnv::new();
	let ctx = RenderingContext::new(strategy, aliases, &env, DeclaredAliases::default());
	render_criterion(criterion, &ctx).map(|rendered| rendered.into_parts())
}

/// Text and values in placeholder order. Both are independent of the order
/// in which sequence numbers were handed out.
fn positional_parts((sql, parameters): (String, Parameters)) -> (String, Values) {
	(sql, parameters.to_values())
}

/// Every `(` must enclose at least two fragments, that is a connector at its
/// own depth.
fn parentheses_are_minimal(sql: &str) -> bool {
	let mut open: Vec<bool> = Vec::new();
	let bytes = sql.as_bytes();
	for (index, byte) in bytes.iter().enumerate() {
		match byte {
			b'(' => open.push(false),
			b')' => {
				if open.pop() != Some(true) {
					return false;
				}
			}
			b' ' => {
				let rest = &sql[index..];
				if rest.starts_with(" and ") || rest.starts_with(" or ") {
					if let Some(top) = open.last_mut() {
						*top = true;
					}
				}
			}
			_ => {}
		}
	}
	open.is_empty()
}

proptest! {
	#[test]
	fn prop_parameters_are_contiguous(tree in node()) {
		let person = Person::new();
		let criterion = build(&tree, &person.columns(), false).unwrap();

		let rendered = render(&criterion, &NamedStrategy, None);
		let expected = present_leaves(&tree);

		match rendered {
			Some((sql, parameters)) => {
				let mut sequences = parameters.sequences();
				sequences.sort_unstable();
				prop_assert_eq!(sequences, (1..=expected).collect::<Vec<_>>());
				prop_assert_eq!(named_sequences(&sql).len(), expected);
			}
			None => prop_assert_eq!(expected, 0),
		}
	}

	#[test]
	fn prop_placeholder_order_matches_parameter_order(tree in node()) {
		let person = Person::new();
		let criterion = build(&tree, &person.columns(), false).unwrap();

		if let Some((sql, parameters)) = render(&criterion, &NamedStrategy, None) {
			prop_assert_eq!(named_sequences(&sql), parameters.sequences());
		}
	}

	#[test]
	fn prop_parentheses_are_minimal(tree in node()) {
		let person = Person::new();
		let criterion = build(&tree, &person.columns(), false).unwrap();

		if let Some((sql, _)) = render(&criterion, &PositionalStrategy, None) {
			prop_assert!(parentheses_are_minimal(&sql), "redundant parentheses in {}", sql);
		}
	}

	#[test]
	fn prop_elision_matches_pruned_tree(tree in node()) {
		let person = Person::new();
		let columns = person.columns();
		let elided = build(&tree, &columns, false).unwrap();
		let pruned = build(&tree, &columns, true);

		let from_elided = render(&elided, &PositionalStrategy, None).map(positional_parts);
		let from_pruned = pruned
			.and_then(|criterion| render(&criterion, &PositionalStrategy, None))
			.map(positional_parts);

		prop_assert_eq!(from_elided, from_pruned);
	}

	#[test]
	fn prop_lone_survivor_is_unwrapped(value in 0i32..1000, dead in node(), or in any::<bool>()) {
		let person = Person::new();
		let columns = person.columns();
		let dead = strip_values(&dead);
		let criterion = Criterion::of(&person.id, is_equal_to(value));
		let dead = build(&dead, &columns, false).unwrap();
		let criterion = if or {
			criterion.or_criterion(dead)
		} else {
			criterion.and_criterion(dead)
		};

		let (sql, parameters) = render(&criterion, &NamedStrategy, None).unwrap();

		prop_assert_eq!(sql, "id = :p1");
		prop_assert_eq!(parameters.get("p1"), Some(&Value::from(value)));
	}

	#[test]
	fn prop_alias_round_trip(tree in node()) {
		let person = Person::new();
		let criterion = build(&tree, &person.columns(), false).unwrap();
		let aliases = TableAliases::new().with_table(&person.table, "a");
		let empty = TableAliases::new();

		let aliased = render(&criterion, &PositionalStrategy, Some(&aliases)).map(positional_parts);
		let plain = render(&criterion, &PositionalStrategy, Some(&empty)).map(positional_parts);

		match (aliased, plain) {
			(Some((aliased_sql, aliased_values)), Some((plain_sql, plain_values))) => {
				prop_assert!(!plain_sql.contains("a."));
				prop_assert_eq!(aliased_sql.replace("a.", ""), plain_sql);
				prop_assert_eq!(aliased_values, plain_values);
			}
			(None, None) => {}
			(aliased, plain) => prop_assert!(false, "{:?} vs {:?}", aliased, plain),
		}
	}

	#[test]
	fn prop_dialects_share_structure(tree in node()) {
		let person = Person::new();
		let criterion = build(&tree, &person.columns(), false).unwrap();

		let positional = render(&criterion, &PositionalStrategy, None);
		let named = render(&criterion, &NamedStrategy, None);
		let annotated = render(&criterion, &AnnotatedStrategy::default(), None);

		match (positional, named, annotated) {
			(Some((positional, p)), Some((named, n)), Some((annotated, a))) => {
				prop_assert_eq!(&to_positional(&named), &positional);
				prop_assert_eq!(&to_positional(&annotated), &positional);
				prop_assert_eq!(p.to_values(), n.to_values());
				prop_assert_eq!(n.to_values(), a.to_values());
			}
			(None, None, None) => {}
			other => prop_assert!(false, "dialects disagree: {:?}", other),
		}
	}
}

/// The same shape with every leaf absent.
fn strip_values(node: &Node) -> Node {
	match node {
		Node::Leaf(column, _) => Node::Leaf(*column, None),
		Node::Group(children) => Node::Group(
			children
				.iter()
				.map(|(or, child)| (*or, strip_values(child)))
				.collect(),
		),
	}
}

#[cfg(feature = "parallel")]
mod parallel {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	/// Test wide trees rendered on the rayon pool
	///
	/// Verifies that numbering stays contiguous and every placeholder keeps
	/// its value when sibling groups render concurrently.
	#[rstest]
	fn test_wide_tree_keeps_values_with_placeholders() {
		let person = Person::new();
		let criterion = (1..200).fold(Criterion::of(&person.id, is_equal_to(0)), |criterion, value| {
			criterion.or_criterion(
				Criterion::of(&person.id, is_equal_to(value)).and(&person.age, is_greater_than(value * 1000)),
			)
		});
		let (positional, values) = render(&criterion, &PositionalStrategy, None)
			.map(positional_parts)
			.unwrap();

		for _ in 0..10 {
			let (sql, parameters) = render(&criterion, &NamedStrategy, None).unwrap();
			let mut sorted = parameters.sequences();
			sorted.sort_unstable();

			assert_eq!(sorted, (1..=399).collect::<Vec<_>>());
			assert_eq!(named_sequences(&sql), parameters.sequences());
			assert_eq!(to_positional(&sql), positional);
			assert_eq!(parameters.to_values(), values);
		}
	}
}
