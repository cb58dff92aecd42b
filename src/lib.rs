pub mod cli;
pub mod error;
pub mod render;
pub mod selection;
pub mod session;
pub mod sqlite;

pub use error::{Result, SearchError, SeekError};
pub use selection::parse_field_selection;
pub use session::Session;
pub use sqlite::{quote_identifier, ColumnInfo, ResultRow, SearchOutcome, SearchQuery};
