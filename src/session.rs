use std::io::{BufRead, Write};
use std::path::PathBuf;

use rusqlite::Connection;
use tracing::{debug, info, warn};

use crate::error::{Result, SearchError, SeekError};
use crate::render::{write_columns, write_listing, write_row};
use crate::selection::parse_field_selection;
use crate::sqlite::{list_columns, list_tables, SearchOutcome, SearchQuery};

const FIELD_PROMPT: &str =
    "Select field/fields to search by data (separated by spaces or commas), e.g. '1' or '3 4' : ";

/// One interactive search, from choosing the database file to the final
/// keypress.
///
/// Prompts and results go to `output`, reported search failures to
/// `diagnostics`. Any fatal condition is returned as an error; the database
/// connection is dropped on every path out of [`Session::run`].
pub struct Session<R, W, E> {
    input: R,
    output: W,
    diagnostics: E,
    database: Option<PathBuf>,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub fn new(input: R, output: W, diagnostics: E) -> Self {
        Self {
            input,
            output,
            diagnostics,
            database: None,
        }
    }

    /// Uses `path` instead of asking for the database file.
    pub fn with_database(mut self, path: impl Into<PathBuf>) -> Self {
        self.database = Some(path.into());
        self
    }

    /// Runs the session to completion.
    ///
    /// Returns the search outcome, or `None` when the search itself failed
    /// and was reported. Both count as a completed session.
    pub fn run(&mut self) -> Result<Option<SearchOutcome>> {
        let path = match self.database.clone() {
            Some(path) => path,
            None => PathBuf::from(self.prompt("Enter path to your .db file: ")?),
        };
        let conn = Connection::open(&path).map_err(|source| SeekError::Open {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "opened database");

        let table = self.choose_table(&conn)?;
        let columns = list_columns(&conn, &table)?;
        if columns.is_empty() {
            return Err(SeekError::NoColumns(table));
        }
        writeln!(self.output, "Fields in table '{}':", table)?;
        write_columns(&mut self.output, &columns)?;

        let selection = self.prompt(FIELD_PROMPT)?;
        let indices = parse_field_selection(&selection, columns.len());
        if indices.is_empty() {
            return Err(SeekError::NoFieldsSelected);
        }
        debug!(?indices, "fields selected");

        let mut fields = Vec::with_capacity(indices.len());
        let mut values = Vec::with_capacity(indices.len());
        for index in indices {
            let name = columns[index - 1].name.clone();
            let value = self.prompt(&format!("Enter value to search for in field '{}': ", name))?;
            fields.push(name);
            values.push(value);
        }

        let outcome = self.search(&conn, &table, &fields, &values)?;

        self.prompt("Press Enter to exit...")?;
        Ok(outcome)
    }

    fn choose_table(&mut self, conn: &Connection) -> Result<String> {
        let tables = list_tables(conn)?;
        if tables.is_empty() {
            return Err(SeekError::NoTables);
        }
        writeln!(self.output, "Tables found:")?;
        write_listing(&mut self.output, &tables)?;

        let choice = self.prompt("Select a table by number: ")?;
        choice
            .split_whitespace()
            .next()
            .and_then(|token| token.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| tables.get(i))
            .cloned()
            .ok_or_else(|| SeekError::InvalidTableSelection(choice.trim().to_string()))
    }

    fn search(
        &mut self,
        conn: &Connection,
        table: &str,
        fields: &[String],
        values: &[String],
    ) -> Result<Option<SearchOutcome>> {
        let output = &mut self.output;
        let result = SearchQuery::build(table, fields, values).and_then(|query| {
            query.execute(conn, |row| {
                write_row(&mut *output, row).map_err(SearchError::from)
            })
        });

        match result {
            Ok(SearchOutcome::NoMatches) => {
                writeln!(self.output, " No matching records found.")?;
                Ok(Some(SearchOutcome::NoMatches))
            }
            Ok(outcome) => {
                info!(table, ?outcome, "search complete");
                Ok(Some(outcome))
            }
            Err(SearchError::Io(e)) => Err(SeekError::Io(e)),
            Err(e) => {
                warn!(table, error = %e, "search failed");
                writeln!(self.diagnostics, " {}", e)?;
                Ok(None)
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line without its terminator. End of input reads as "".
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let len = line.trim_end_matches(|c| c == '\n' || c == '\r').len();
        line.truncate(len);
        Ok(line)
    }
}
