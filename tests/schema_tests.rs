use rusqlite::Connection;
use tempfile::NamedTempFile;

use sqlite_seek::sqlite::{list_columns, list_tables, ColumnInfo};
use sqlite_seek::SeekError;

fn create_temp_db(schema: &str) -> (Connection, NamedTempFile) {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let conn = Connection::open(temp_file.path()).expect("Failed to open database");
    conn.execute_batch(schema).expect("Failed to create schema");
    (conn, temp_file)
}

#[test]
fn test_tables_in_catalog_order() {
    let (conn, _file) = create_temp_db(
        r#"
        CREATE TABLE zebra (a TEXT);
        CREATE TABLE apple (b TEXT);
        CREATE INDEX idx_apple_b ON apple(b);
        CREATE VIEW apple_view AS SELECT * FROM apple;
        "#,
    );

    let tables = list_tables(&conn).unwrap();
    assert_eq!(tables, vec!["zebra", "apple"]);
}

#[test]
fn test_empty_database_has_no_tables() {
    let (conn, _file) = create_temp_db("");
    assert!(list_tables(&conn).unwrap().is_empty());
}

#[test]
fn test_columns_in_schema_order() {
    let (conn, _file) = create_temp_db("CREATE TABLE people (id INTEGER, name TEXT, surname TEXT);");

    let columns = list_columns(&conn, "people").unwrap();
    let names: Vec<_> = columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "name", "surname"]);
    assert_eq!(
        columns[2],
        ColumnInfo {
            position: 3,
            name: "surname".to_string()
        }
    );
}

#[test]
fn test_generated_columns_are_listed() {
    let (conn, _file) = create_temp_db(
        "CREATE TABLE g (a TEXT, b TEXT GENERATED ALWAYS AS (a || '!') STORED, c TEXT);",
    );

    let columns = list_columns(&conn, "g").unwrap();
    let listed: Vec<_> = columns.iter().map(|c| (c.position, c.name.as_str())).collect();
    assert_eq!(listed, vec![(1, "a"), (2, "b"), (3, "c")]);
}

#[test]
fn test_columns_of_awkward_table_name() {
    let (conn, _file) = create_temp_db(r#"CREATE TABLE "odd ""name"")" ("x y" TEXT, z TEXT);"#);

    let tables = list_tables(&conn).unwrap();
    assert_eq!(tables, vec!["odd \"name\")"]);

    let columns = list_columns(&conn, &tables[0]).unwrap();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].name, "x y");
}

#[test]
fn test_unknown_table_has_no_columns() {
    let (conn, _file) = create_temp_db("CREATE TABLE people (id INTEGER);");
    assert!(list_columns(&conn, "nobody").unwrap().is_empty());
}

#[test]
fn test_non_database_file_is_a_catalog_error() {
    let mut file = NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, &[b'x'; 4096]).unwrap();

    let conn = Connection::open(file.path()).unwrap();
    assert!(matches!(list_tables(&conn), Err(SeekError::Catalog(_))));
}
