//! End-to-end rendering tests through the public API

mod common;

use std::io::Write;
use std::sync::Arc;

use common::{Person, person};
use dynasql_query::prelude::*;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use rstest::*;

/// Test grouped where clause
///
/// Verifies `(id = ? or id = ?) and name like ?` with values in placeholder
/// order.
#[rstest]
fn test_grouped_where_positional(person: Person) {
	let select = Query::select()
		.columns([&person.id, &person.first_name])
		.from(&person.table)
		.where_criterion(Criterion::of(&person.id, is_equal_to(1)).or(&person.id, is_equal_to(2)))
		.unwrap()
		.and_where(&person.first_name, is_like("%x%"))
		.build()
		.unwrap();

	let rendered = select.render(&PositionalStrategy);

	assert_eq!(
		rendered.statement(),
		"select id, first_name from person where (id = ? or id = ?) and first_name like ?"
	);
	assert_eq!(
		rendered.values(),
		Values(vec![Value::from(1), Value::from(2), Value::from("%x%")])
	);
}

/// Test sequential or groups
///
/// Verifies that two single-fragment groups at the top level need no
/// parentheses.
#[rstest]
fn test_sequential_or_groups_named(person: Person) {
	let delete = Query::delete()
		.from_table(&person.table)
		.or_where(&person.id, is_equal_to(3))
		.or_where(&person.id, is_equal_to(4))
		.build()
		.unwrap();

	let rendered = delete.render(&NamedStrategy);

	assert_eq!(rendered.statement(), "delete from person where id = :p1 or id = :p2");
	assert_eq!(rendered.parameters().get("p1"), Some(&Value::from(3)));
	assert_eq!(rendered.parameters().get("p2"), Some(&Value::from(4)));
}

/// Test unrestricted delete
///
/// Verifies that a delete without criteria renders without a where clause
/// and binds nothing.
#[rstest]
fn test_delete_all_rows(person: Person) {
	let delete = Query::delete().from_table(&person.table).all_rows().build().unwrap();

	let rendered = delete.render(&PositionalStrategy);

	assert_eq!(rendered.statement(), "delete from person");
	assert!(rendered.parameters().is_empty());
}

/// Test annotated placeholders
///
/// Verifies that annotated placeholders carry the column's value type.
#[rstest]
fn test_annotated_update(person: Person) {
	let update = Query::update()
		.table(&person.table)
		.set(&person.last_name, "Rubble")
		.where_(&person.age, is_between(20, 30))
		.unwrap()
		.build()
		.unwrap();

	let rendered = update.render(&AnnotatedStrategy::default());

	assert_eq!(
		rendered.statement(),
		"update person set last_name = #{parameters.p1,jdbcType=VARCHAR} where age between #{parameters.p2,jdbcType=INTEGER} and #{parameters.p3,jdbcType=INTEGER}"
	);
	assert_eq!(rendered.parameters().sequences(), vec![1, 2, 3]);
}

/// Test one sequence per statement
///
/// Verifies that set, where, sub-select and paging parameters are numbered
/// from one counter.
#[rstest]
fn test_sequence_spans_all_clauses(person: Person) {
	let banned = SqlTable::new("banned");
	let sub = Query::select()
		.column(&banned.column("person_id"))
		.from(&banned)
		.where_(&banned.column("reason"), is_equal_to("spam"))
		.unwrap()
		.build()
		.unwrap();
	let select = Query::select()
		.column(&person.id)
		.from(&person.table)
		.where_(&person.age, is_greater_than(18))
		.unwrap()
		.and_where_criterion(Criterion::not_exists(sub))
		.and_where(&person.last_name, is_in(["a", "b"]))
		.limit(10)
		.build()
		.unwrap();

	let rendered = select.render(&NamedStrategy);

	assert_eq!(
		rendered.statement(),
		"select id from person where age > :p1 and not exists (select person_id from banned where reason = :p2) and last_name in (:p3,:p4) limit :p5"
	);
	assert_eq!(rendered.parameters().sequences(), vec![1, 2, 3, 4, 5]);
}

/// Test render settings from a file
///
/// Verifies that dialect, prefix, aliases and environment loaded from TOML
/// drive the render.
#[rstest]
fn test_render_with_settings_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	write!(
		file,
		r#"
dialect = "annotated"
parameter_prefix = "row"

[table_aliases]
orders = "o"

[environment]
schema = "tenant_b"
"#
	)
	.unwrap();
	let orders = SqlTable::deferred("orders", |env| {
		format!("{}.orders", env.get("schema").unwrap_or("public"))
	});
	let total = orders.column("total").with_jdbc_type(JdbcType::Decimal);
	let select = Query::select()
		.column(&total)
		.from(&orders)
		.where_(&total, is_greater_than(100.5))
		.unwrap()
		.build()
		.unwrap();

	let options = RenderSettings::from_path(file.path()).unwrap().to_options();
	let rendered = select.render_with(&options);

	assert_eq!(
		rendered.statement(),
		"select o.total from tenant_b.orders o where o.total > #{row.p1,jdbcType=DECIMAL}"
	);
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
	fn contents(&self) -> String {
		String::from_utf8_lossy(&self.0.lock()).into_owned()
	}
}

impl Write for CapturedLogs {
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
		self.0.lock().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> std::io::Result<()> {
		Ok(())
	}
}

fn render_logged(statement: &dyn RenderableStatement) -> String {
	let logs = CapturedLogs::default();
	let writer = logs.clone();
	let subscriber = tracing_subscriber::fmt()
		.with_max_level(tracing::Level::DEBUG)
		.with_ansi(false)
		.with_writer(move || writer.clone())
		.finish();
	tracing::subscriber::with_default(subscriber, || {
		statement.render(&NamedStrategy);
	});
	logs.contents()
}

/// Test unrestricted statement event
///
/// Verifies that an unmarked update without criteria emits a debug event and
/// a marked one does not.
#[rstest]
fn test_unrestricted_update_is_logged(person: Person) {
	let unmarked = Query::update().table(&person.table).set(&person.age, 1).build().unwrap();
	let marked = Query::update()
		.table(&person.table)
		.set(&person.age, 1)
		.all_rows()
		.build()
		.unwrap();

	let unmarked_logs = render_logged(&unmarked);
	let marked_logs = render_logged(&marked);

	assert!(unmarked_logs.contains("rendered without criteria"));
	assert!(unmarked_logs.contains("table=\"person\"") || unmarked_logs.contains("table=person"));
	assert!(!marked_logs.contains("rendered without criteria"));
}

/// Test deferred name event
///
/// Verifies that a deferred table name is resolved once per render even
/// when the table appears twice.
#[rstest]
fn test_deferred_name_logged_once() {
	let orders = SqlTable::deferred("orders", |_| "archive.orders".to_string());
	let id = orders.column("id");
	let select = Query::select()
		.column(&id)
		.from(&orders)
		.where_criterion(Criterion::exists(
			Query::select().column(&id).from(&orders).build().unwrap(),
		))
		.unwrap()
		.build()
		.unwrap();

	let logs = render_logged(&select);

	assert_eq!(logs.matches("resolved deferred table name").count(), 1);
}
