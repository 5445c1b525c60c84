use rusqlite::{Connection, OpenFlags, OptionalExtension};
use std::path::Path;

use crate::result::Result;

/// One looked up feature: its row id and its geometry as WKT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometryRow {
    pub id: i64,
    pub wkt: String,
}

/// Fetches the WKT of one feature from whatever database holds it.
pub trait GeometrySource {
    /// Fetch the geometry of the feature in `table` whose id equals `id`.
    ///
    /// A missing row, or a row whose geometry is NULL, is `Ok(None)`.
    fn fetch(&self, table: &str, id: &str) -> Result<Option<GeometryRow>>;
}

/// Reads WKT from a table of a SQLite database.
///
/// The geometry is selected with an SQL expression so a spatial extension can
/// render it, e.g. `ST_AsText(geom)`. The default expression reads a `geom`
/// column that already holds WKT text.
pub struct SqliteSource {
    /// The underlying rusqlite connection
    pub conn: Connection,
    id_column: String,
    geometry_expr: String,
}

impl SqliteSource {
    pub fn new(conn: Connection) -> Self {
        SqliteSource {
            conn,
            id_column: "ID".to_owned(),
            geometry_expr: "geom".to_owned(),
        }
    }

    /// Open a database read only
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(Self::new(conn))
    }

    pub fn with_id_column(mut self, column: impl Into<String>) -> Self {
        self.id_column = column.into();
        self
    }

    pub fn with_geometry_expr(mut self, expr: impl Into<String>) -> Self {
        self.geometry_expr = expr.into();
        self
    }

    fn query(&self, table: &str) -> String {
        let id = quote_identifier(&self.id_column);
        format!(
            "SELECT {}, {} FROM {} WHERE {} = ?1",
            id,
            self.geometry_expr,
            quote_identifier(table),
            id
        )
    }
}

impl GeometrySource for SqliteSource {
    fn fetch(&self, table: &str, id: &str) -> Result<Option<GeometryRow>> {
        let sql = self.query(table);
        tracing::debug!(%sql, id, "fetching geometry");
        let row: Option<(i64, Option<String>)> = self
            .conn
            .query_row(&sql, [id], |row| Ok((row.get(0)?, row.get(1)?)))
            .optional()?;
        Ok(row.and_then(|(id, wkt)| wkt.map(|wkt| GeometryRow { id, wkt })))
    }
}

/// Quotes an SQL identifier so a table name from a request can't inject SQL.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn features_db(path: &Path) {
        let conn = Connection::open(path).unwrap();
        conn.execute(
            "CREATE TABLE roads (\"ID\" INTEGER PRIMARY KEY, geom TEXT)",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO roads VALUES (1, 'LINESTRING (30 10, 10 30, 40 40)'), (2, NULL)",
            [],
        )
        .unwrap();
        conn.close().unwrap();
    }

    #[test]
    fn quoting() {
        assert_eq!(quote_identifier("roads"), "\"roads\"");
        assert_eq!(quote_identifier("ro\"ads"), "\"ro\"\"ads\"");
    }

    #[test]
    fn fetch_by_id() {
        let dir = tempdir().unwrap();
        let filename = dir.path().join("features.sqlite");
        features_db(&filename);

        let source = SqliteSource::open(&filename).unwrap();
        let row = source.fetch("roads", "1").unwrap().unwrap();
        assert_eq!(row.id, 1);
        assert_eq!(row.wkt, "LINESTRING (30 10, 10 30, 40 40)");
    }

    #[test]
    fn missing_rows_and_null_geometries() {
        let dir = tempdir().unwrap();
        let filename = dir.path().join("features.sqlite");
        features_db(&filename);

        let source = SqliteSource::open(&filename).unwrap();
        assert!(source.fetch("roads", "99").unwrap().is_none());
        assert!(source.fetch("roads", "2").unwrap().is_none());
    }

    #[test]
    fn unknown_table_is_an_error() {
        let source = SqliteSource::new(Connection::open_in_memory().unwrap());
        assert!(source.fetch("nope", "1").is_err());
    }

    #[test]
    fn custom_columns() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE pts (fid INTEGER, shape TEXT)", [])
            .unwrap();
        conn.execute("INSERT INTO pts VALUES (7, 'point(1 2)')", [])
            .unwrap();
        let source = SqliteSource::new(conn)
            .with_id_column("fid")
            .with_geometry_expr("upper(shape)");
        let row = source.fetch("pts", "7").unwrap().unwrap();
        assert_eq!(row.wkt, "POINT(1 2)");
    }
}
