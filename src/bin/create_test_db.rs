use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use iceberg_console::initialize_db;

/// A utility for creating a sample fact_transactions database for the
/// transactions query console.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Inserting sample transactions...");

    let sample_rows = [
        ("ACQUISITION", 2023, 4, "Midtown", "OFFICE", "SLG", "One Vanderbilt", "New York", 1_750_000.0, 3_100_000_000.0, "2023-11-02"),
        ("ACQUISITION", 2023, 1, "Downtown", "RETAIL", "SLG", "Pearl Street Plaza", "New York", 85_000.0, 96_000_000.0, "2023-02-17"),
        ("DISPOSITION", 2022, 3, "Midtown", "OFFICE", "VNO", "330 West 34th", "New York", 725_000.0, 446_000_000.0, "2022-08-30"),
        ("DISPOSITION", 2021, 2, "Grand Central", "OFFICE", "SLG", "110 East 42nd", "New York", 251_000.0, 117_100_000.0, "2021-05-21"),
        ("ACQUISITION", 2020, 4, "SoHo", "RETAIL", "VNO", "Broome Street Retail", "New York", 12_500.0, 22_400_000.0, "2020-12-04"),
    ];

    let mut statement = conn.prepare(
        "INSERT INTO fact_transactions
         (transaction_type, transaction_year, transaction_quarter, submarket, property_type,
          ticker, property_name, market, square_feet, sale_price_usd, transaction_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
    )?;

    for row in sample_rows {
        statement.execute(row)?;
    }

    println!("Success!");

    Ok(())
}
