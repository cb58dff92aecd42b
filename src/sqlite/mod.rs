mod quote;
mod schema;
mod search;

pub use quote::{quote_identifier, unquote_identifier};
pub use schema::{list_columns, list_tables, ColumnInfo};
pub use search::{Predicate, ResultRow, SearchOutcome, SearchQuery};
