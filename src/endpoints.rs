//! The API endpoint URIs.

/// The root route which redirects to the console page.
pub const ROOT: &str = "/";
/// The page for filtering and browsing transactions.
pub const CONSOLE_VIEW: &str = "/transactions";

/// The route for querying transactions as JSON.
pub const TRANSACTIONS_API: &str = "/api/transactions";
