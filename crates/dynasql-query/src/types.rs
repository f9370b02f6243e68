//! Table and column model.
//!
//! - [`SqlTable`]: a table with identity, optional declared alias and
//!   optional deferred name
//! - [`SqlColumn`]: a column of a table, with its value-type tag and
//!   placeholder overrides
//! - [`BasicColumn`]: anything that can be projected or compared
//! - [`SortSpec`]: an order by item

mod basic_column;
mod column;
mod jdbc_type;
mod order;
mod table;

pub use basic_column::{BasicColumn, ColumnExpr, SqlFunction};
pub use column::SqlColumn;
pub use jdbc_type::JdbcType;
pub use order::SortSpec;
pub use table::{SqlTable, TableId, TableNameEnv, TableNameSupplier};
