//! The JSON query endpoint for transactions.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::Serialize;

use crate::{AppState, Error};

use super::{FilterSet, Row, query_transactions};

/// The state needed for querying transactions.
#[derive(Debug, Clone)]
pub struct TransactionQueryState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionQueryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The body returned with HTTP 200 when a query succeeds.
#[derive(Debug, Serialize)]
struct QuerySuccess {
    success: bool,
    count: usize,
    rows: Vec<Row>,
}

/// The body returned with HTTP 500 when a query fails.
#[derive(Debug, Serialize)]
pub(crate) struct QueryFailure {
    success: bool,
    error: String,
}

/// Build the failure envelope for an error message.
pub(crate) fn query_failure_body(message: &str) -> QueryFailure {
    QueryFailure {
        success: false,
        error: message.to_owned(),
    }
}

/// Handle a read-only transactions query.
///
/// Parses the recognized filter keys from the query string (unknown keys
/// are ignored), compiles them into a parameterized statement, and wraps
/// the matching rows in the response envelope. Any store error is logged
/// and returned as HTTP 500 with the failure envelope; the request is a
/// single best-effort attempt and the client is responsible for retrying.
pub async fn get_transactions_endpoint(
    State(state): State<TransactionQueryState>,
    Query(filter): Query<FilterSet>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match query_transactions(&filter, &connection) {
        Ok(rows) => (
            StatusCode::OK,
            Json(QuerySuccess {
                success: true,
                count: rows.len(),
                rows,
            }),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
