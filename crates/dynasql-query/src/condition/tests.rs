use super::*;
use crate::error::QueryError;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[rstest]
#[case::null(is_null(), false, 0)]
#[case::not_null(is_not_null(), false, 0)]
#[case::equal(is_equal_to(Value::from(1)), false, 1)]
#[case::absent(is_equal_to_when_present(None::<Value>), true, 0)]
#[case::between(is_between(Value::from(1), Value::from(9)), false, 2)]
#[case::between_half_absent(is_between_when_present(Some(Value::from(1)), None), true, 0)]
#[case::in_list(is_in([Value::from(1), Value::from(2), Value::from(3)]), false, 3)]
#[case::empty_list(is_in(Vec::<Value>::new()), true, 0)]
fn test_emptiness_and_value_count(
	#[case] condition: Condition<Value>,
	#[case] empty: bool,
	#[case] count: usize,
) {
	assert_eq!(condition.is_empty(), empty);
	assert_eq!(condition.should_render(), !empty);
	assert_eq!(condition.value_count(), count);
}

#[rstest]
fn test_when_present_drops_absent_list_elements() {
	let condition = is_in_when_present([Some(1), None, Some(3)]);

	match condition {
		Condition::List(list) => assert_eq!(list.values(), &[1, 3]),
		other => panic!("unexpected shape: {:?}", other),
	}
}

#[rstest]
fn test_when_predicate_disables_rendering() {
	let enabled = Arc::new(AtomicBool::new(false));
	let flag = Arc::clone(&enabled);
	let condition = is_equal_to(5).when(move || flag.load(Ordering::SeqCst));

	assert!(!condition.should_render());
	enabled.store(true, Ordering::SeqCst);
	assert!(condition.should_render());
}

#[rstest]
fn test_when_predicates_are_combined() {
	let condition = is_equal_to(5).when(|| true).when(|| false);

	assert!(!condition.should_render());
}

#[rstest]
fn test_should_render_runs_predicate_once_per_call() {
	let calls = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&calls);
	let condition = is_like("%a%").when(move || {
		counter.fetch_add(1, Ordering::SeqCst);
		true
	});

	condition.should_render();
	assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn test_empty_condition_skips_predicate() {
	let calls = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&calls);
	let condition = is_equal_to_when_present(None::<i32>).when(move || {
		counter.fetch_add(1, Ordering::SeqCst);
		true
	});

	assert!(!condition.should_render());
	assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn test_map_transforms_every_value() {
	let condition = is_between(1, 10).map(|v| v * 100);

	match condition {
		Condition::Double(c) => assert_eq!(c.values(), Some((&100, &1000))),
		other => panic!("unexpected shape: {:?}", other),
	}
}

#[rstest]
fn test_map_keeps_empty_condition_empty() {
	let condition = is_equal_to_when_present(None::<i32>).map(|v| v.to_string());

	assert!(condition.is_empty());
}

#[rstest]
fn test_map_keeps_predicate() {
	let condition = is_equal_to(1).when(|| false).map(|v| v + 1);

	assert!(!condition.should_render());
}

#[rstest]
#[case::single_pass(is_equal_to(4), false)]
#[case::single_fail(is_equal_to(3), true)]
#[case::between_one_fails(is_between(2, 3), true)]
#[case::between_pass(is_between(2, 4), false)]
fn test_filter_empties_failing_condition(#[case] condition: Condition<i32>, #[case] empty: bool) {
	let filtered = condition.filter(|v| v % 2 == 0);
	assert_eq!(filtered.is_empty(), empty);
}

#[rstest]
fn test_filter_on_list_filters_elements() {
	let condition = is_not_in(1..=6).filter(|v| v % 3 == 0);

	assert_eq!(condition.value_count(), 2);
	assert_eq!(condition.token(), "not in");
}

#[rstest]
fn test_filter_on_empty_is_safe() {
	let condition = is_in(Vec::<i32>::new()).filter(|_| true);

	assert!(condition.is_empty());
}

#[rstest]
fn test_between_from_list_accepts_two_values() {
	let condition = between_from_list(vec![1, 2]).unwrap();

	assert_eq!(condition.value_count(), 2);
	assert_eq!(condition.token(), "between");
}

#[rstest]
#[case(vec![], 0)]
#[case(vec![1], 1)]
#[case(vec![1, 2, 3], 3)]
fn test_between_from_list_rejects_wrong_arity(#[case] values: Vec<i32>, #[case] actual: usize) {
	let err = not_between_from_list(values).unwrap_err();

	match err {
		QueryError::InvalidArity {
			operator,
			expected,
			actual: got,
		} => {
			assert_eq!(operator, "not between");
			assert_eq!(expected, 2);
			assert_eq!(got, actual);
		}
		other => panic!("unexpected error: {:?}", other),
	}
}

#[rstest]
fn test_into_condition_erases_value_type() {
	let condition = is_in(["a", "b"]).into_condition();

	match condition {
		Condition::List(list) => assert_eq!(list.values(), &[Value::from("a"), Value::from("b")]),
		other => panic!("unexpected shape: {:?}", other),
	}
}

#[rstest]
#[case(SingleValueOperator::EqualTo, "= ?")]
#[case(SingleValueOperator::NotEqualTo, "<> ?")]
#[case(SingleValueOperator::GreaterThanOrEqualTo, ">= ?")]
#[case(SingleValueOperator::LikeCaseInsensitive, "like ?")]
#[case(SingleValueOperator::NotLike, "not like ?")]
fn test_single_value_phrase(#[case] operator: SingleValueOperator, #[case] expected: &str) {
	assert_eq!(operator.phrase("?"), expected);
}

#[rstest]
fn test_two_and_list_phrases() {
	assert_eq!(TwoValueOperator::NotBetween.phrase(":p1", ":p2"), "not between :p1 and :p2");
	assert_eq!(
		ListValueOperator::InCaseInsensitive.phrase(&["?".to_string(), "?".to_string()]),
		"in (?,?)"
	);
	assert!(ListValueOperator::InCaseInsensitive.is_case_insensitive());
	assert!(!ListValueOperator::In.is_case_insensitive());
}
