//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::get,
};

use crate::{
    AppState, endpoints,
    transactions::{get_console_page, get_transactions_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::CONSOLE_VIEW, get(get_console_page))
        .route(endpoints::TRANSACTIONS_API, get(get_transactions_endpoint))
        .with_state(state)
}

/// The root path '/' redirects to the console page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::CONSOLE_VIEW)
}
