//! Filtering and browsing of the `fact_transactions` table.
//!
//! The [FilterSet] compiles optional request filters into a single
//! parameterized statement, [query_transactions] executes it, and the two
//! endpoints wrap the result as JSON or as a server-rendered page.

mod api_endpoint;
mod console_page;
mod filter;
mod query;
mod row;

pub use api_endpoint::{TransactionQueryState, get_transactions_endpoint};
pub(crate) use api_endpoint::query_failure_body;
pub use console_page::get_console_page;
pub use filter::{FilterSet, ROW_LIMIT};
pub use query::query_transactions;
pub use row::{Row, ScalarValue};
