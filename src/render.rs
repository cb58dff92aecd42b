use std::io::{self, Write};

use crate::sqlite::{ColumnInfo, ResultRow};

const LABEL_WIDTH: usize = 15;
const RULE: &str = "_____________________________";

/// Prints one matching row as a framed block of `name: value` lines.
pub fn write_row<W: Write>(out: &mut W, row: &ResultRow) -> io::Result<()> {
    write!(out, "\n Match found:\n\n")?;
    writeln!(out, "{}", RULE)?;
    for (column, value) in row.fields() {
        writeln!(out, "{:<width$}: {}", column, value, width = LABEL_WIDTH)?;
    }
    writeln!(out, "{}", RULE)
}

/// Prints `names` as a numbered list starting at 1.
pub fn write_listing<W, I, S>(out: &mut W, names: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (i, name) in names.into_iter().enumerate() {
        writeln!(out, "{}: {}", i + 1, name.as_ref())?;
    }
    Ok(())
}

/// Prints each column under the number used to select it.
pub fn write_columns<W: Write>(out: &mut W, columns: &[ColumnInfo]) -> io::Result<()> {
    for column in columns {
        writeln!(out, "{}: {}", column.position, column.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[(&str, &str)]) -> ResultRow {
        ResultRow::new(
            fields
                .iter()
                .map(|(c, v)| (c.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_row_block() {
        let mut out = Vec::new();
        write_row(&mut out, &row(&[("id", "1"), ("name", "Ann"), ("note", "")])).unwrap();

        let expected = "\n Match found:\n\n\
_____________________________\n\
id             : 1\n\
name           : Ann\n\
note           : \n\
_____________________________\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_long_names_are_not_truncated() {
        let mut out = Vec::new();
        write_row(&mut out, &row(&[("a_very_long_column_name", "x")])).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("a_very_long_column_name: x\n"));
    }

    #[test]
    fn test_listing_is_one_based() {
        let mut out = Vec::new();
        write_listing(&mut out, ["users", "orders"]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1: users\n2: orders\n");
    }

    #[test]
    fn test_columns_use_their_positions() {
        let columns = vec![
            ColumnInfo {
                position: 1,
                name: "id".to_string(),
            },
            ColumnInfo {
                position: 2,
                name: "name".to_string(),
            },
        ];
        let mut out = Vec::new();
        write_columns(&mut out, &columns).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1: id\n2: name\n");
    }

    #[test]
    fn test_empty_listing() {
        let mut out = Vec::new();
        write_listing(&mut out, Vec::<String>::new()).unwrap();
        assert!(out.is_empty());
    }
}
