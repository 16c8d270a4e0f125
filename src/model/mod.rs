pub mod columns;
pub mod filter;
pub mod operators;
pub mod settings;

pub use self::columns::{ColumnSelection, SelectedColumns, columns_compact};
pub use self::filter::Filter;
pub use self::operators::FilterOperator;
pub use self::settings::{ColumnSpec, ColumnType, DataSourceSeed, Mode, Settings};
