//! Sets up the application's database schema.
//!
//! In production the server is pointed at an existing database, so the
//! table is only created when missing and is never migrated or altered.

use rusqlite::Connection;

/// Create the `fact_transactions` table if it does not exist.
///
/// The filterable columns match what the filter compiler expects; the
/// remaining columns are descriptive and are returned to clients verbatim.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS fact_transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                transaction_type TEXT NOT NULL,
                transaction_year INTEGER NOT NULL,
                transaction_quarter INTEGER NOT NULL,
                submarket TEXT,
                property_type TEXT,
                ticker TEXT,
                property_name TEXT,
                market TEXT,
                square_feet REAL,
                sale_price_usd REAL,
                transaction_date TEXT
                )",
        (),
    )?;

    Ok(())
}
