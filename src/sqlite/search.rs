use rusqlite::types::ValueRef;
use rusqlite::{params_from_iter, Connection};
use tracing::debug;

use super::quote::quote_identifier;
use crate::error::SearchError;

/// One equality condition of a search: the stored value of `column`, with
/// stray double quotes trimmed, must equal `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub column: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Matches(usize),
    NoMatches,
}

/// A matching row as `(column name, text value)` pairs in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    fields: Vec<(String, String)>,
}

impl ResultRow {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }
}

/// A parameterized `SELECT *` over one table with one predicate per
/// selected column.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    sql: String,
    predicates: Vec<Predicate>,
}

impl SearchQuery {
    /// Pairs `fields` with `values` and builds the query text. Values never
    /// appear in the SQL; they are bound positionally at execution.
    pub fn build(table: &str, fields: &[String], values: &[String]) -> Result<Self, SearchError> {
        if fields.is_empty() || fields.len() != values.len() {
            return Err(SearchError::InvalidInput);
        }

        let conditions: Vec<String> = fields
            .iter()
            .map(|f| format!("TRIM({}, '\"') = ?", quote_identifier(f)))
            .collect();
        let sql = format!(
            "SELECT * FROM {} WHERE {}",
            quote_identifier(table),
            conditions.join(" AND ")
        );

        let predicates = fields
            .iter()
            .zip(values)
            .map(|(column, value)| Predicate {
                column: column.clone(),
                value: value.clone(),
            })
            .collect();

        Ok(Self { sql, predicates })
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Runs the query and hands every matching row to `visit`, labelled with
    /// the column names of the result set. The statement is finalized before
    /// returning.
    pub fn execute<F>(self, conn: &Connection, mut visit: F) -> Result<SearchOutcome, SearchError>
    where
        F: FnMut(&ResultRow) -> Result<(), SearchError>,
    {
        debug!(sql = %self.sql, predicates = self.predicates.len(), "running search");
        let mut stmt = conn.prepare(&self.sql).map_err(SearchError::Prepare)?;
        // Generated columns are part of `SELECT *`, so labels come from the
        // statement rather than the table listing.
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let mut rows = stmt
            .query(params_from_iter(self.predicates.iter().map(|p| p.value.as_str())))
            .map_err(SearchError::Execute)?;

        let mut matches = 0;
        while let Some(row) = rows.next().map_err(SearchError::Execute)? {
            let mut fields = Vec::with_capacity(columns.len());
            for (i, column) in columns.iter().enumerate() {
                let value = row.get_ref(i).map_err(SearchError::Execute)?;
                fields.push((column.clone(), value_text(value)));
            }
            visit(&ResultRow::new(fields))?;
            matches += 1;
        }

        debug!(matches, "search finished");
        if matches == 0 {
            Ok(SearchOutcome::NoMatches)
        } else {
            Ok(SearchOutcome::Matches(matches))
        }
    }
}

/// Text form of a stored value, as SQLite itself would print it.
fn value_text(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => real_text(f),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

const REAL_DIGITS: usize = 15;

/// Formats a real the way SQLite's `%!.15g` does: 15 significant digits,
/// trailing zeros dropped, but always a fractional part, and an exponent
/// only outside `1e-4..1e15`.
fn real_text(f: f64) -> String {
    if f.is_nan() {
        return String::new();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }

    let sign = if f.is_sign_negative() { "-" } else { "" };
    if f == 0.0 {
        return format!("{}0.0", sign);
    }

    // `{:.14e}` rounds to exactly REAL_DIGITS significant digits.
    let scientific = format!("{:.*e}", REAL_DIGITS - 1, f.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    if exponent < -4 || exponent >= REAL_DIGITS as i32 {
        let (lead, rest) = digits.split_at(1);
        let rest = if rest.is_empty() { "0" } else { rest };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!("{}{}.{}e{}{:02}", sign, lead, rest, exp_sign, exponent.unsigned_abs())
    } else if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        format!("{}0.{}{}", sign, zeros, digits)
    } else {
        let int_len = exponent as usize + 1;
        if digits.len() <= int_len {
            let zeros = "0".repeat(int_len - digits.len());
            format!("{}{}{}.0", sign, digits, zeros)
        } else {
            let (int_part, frac_part) = digits.split_at(int_len);
            format!("{}{}.{}", sign, int_part, frac_part)
        }
    }
}
