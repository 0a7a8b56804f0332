//! Executes compiled filter queries against the database.

use rusqlite::{Connection, params_from_iter};

use crate::Error;

use super::{FilterSet, Row};

/// Run a filter query and collect the matching rows.
///
/// The rows are ordered by year then quarter, both descending, and capped
/// at [ROW_LIMIT](super::ROW_LIMIT) rows. The read is a single best-effort
/// attempt with no retries.
///
/// # Errors
/// Returns [Error::SqlError] if:
/// - The query cannot be prepared, e.g. the table does not exist
/// - Query execution fails
/// - Row mapping fails
pub fn query_transactions(filter: &FilterSet, connection: &Connection) -> Result<Vec<Row>, Error> {
    let compiled = filter.compile();

    let mut statement = connection.prepare(&compiled.statement)?;
    let column_names: Vec<String> = statement
        .column_names()
        .into_iter()
        .map(String::from)
        .collect();

    statement
        .query_map(params_from_iter(compiled.parameters.iter()), |row| {
            Row::from_sql_row(row, &column_names)
        })?
        .map(|maybe_row| maybe_row.map_err(Error::SqlError))
        .collect()
}
